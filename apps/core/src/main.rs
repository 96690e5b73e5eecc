// Complaint Classifier CLI entry point

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use complaint_core::config::Config;
use complaint_core::formatter::{self, OutputFormat};
use complaint_core::{logging, samples, AppError, ComplaintClassifier, Lexicons};

#[derive(Parser)]
#[command(name = "complaint-classifier")]
#[command(about = "Classify customer complaints by category, urgency and emotion")]
struct Args {
    /// Complaint text (words are joined with spaces)
    text: Vec<String>,

    /// Read the complaint from standard input
    #[arg(long, conflicts_with_all = ["text", "sample"])]
    stdin: bool,

    /// Classify the N-th built-in sample complaint (1-10)
    #[arg(short = 's', long, conflicts_with = "text")]
    sample: Option<usize>,

    /// List the built-in sample complaints and exit
    #[arg(long)]
    list_samples: bool,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// JSON lexicon file replacing the built-in keyword tables
    #[arg(short = 'l', long)]
    lexicon: Option<PathBuf>,
}

fn read_complaint(args: &Args) -> Result<String, AppError> {
    if args.stdin {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if let Some(number) = args.sample {
        return samples::get(number).map(str::to_string);
    }
    Ok(args.text.join(" "))
}

fn build_classifier(lexicon: Option<&PathBuf>) -> Result<ComplaintClassifier, AppError> {
    match lexicon {
        Some(path) => Ok(ComplaintClassifier::with_lexicons(Lexicons::from_json_file(path)?)),
        None => Ok(ComplaintClassifier::new()),
    }
}

fn run(args: Args) -> anyhow::Result<ExitCode> {
    let config = Config::load()?;
    logging::init(&config.log)?;

    if args.list_samples {
        for (i, sample) in samples::all().iter().enumerate() {
            println!("{:>2}. {}", i + 1, sample);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let format = args.format.unwrap_or(config.output_format);
    let lexicon = args.lexicon.as_ref().or(config.lexicon_path.as_ref());

    let rendered = build_classifier(lexicon).and_then(|classifier| {
        let text = read_complaint(&args)?;
        info!("Classifying complaint ({} bytes, format: {})", text.len(), format);
        formatter::classify_and_render(&classifier, &text, format)
    });

    let (message, status) = formatter::outcome(rendered);
    println!("{}", message);
    Ok(ExitCode::from(status.code()))
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
