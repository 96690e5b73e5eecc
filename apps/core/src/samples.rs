//! Sample complaints for demonstration.

use crate::error::AppError;

pub static SAMPLE_COMPLAINTS: [&str; 10] = [
    "I ordered a laptop two weeks ago and it still hasn't arrived. The tracking number doesn't work and customer service keeps giving me different excuses. I need this for work and this delay is completely unacceptable!",
    "My monthly bill has been charged twice this month. I've called three times and each representative tells me something different. One said it would be refunded in 3-5 days, another said 7-10 days. It's been two weeks now and nothing has changed.",
    "The product I received is completely different from what was advertised on your website. The quality is terrible and it broke after just one day of use. I want a full refund immediately.",
    "Your customer service team was incredibly rude to me today. When I called to ask about my order status, the representative hung up on me twice. This is no way to treat paying customers.",
    "I'm having trouble logging into my account. I've tried resetting my password multiple times but the verification emails never arrive. Can someone please help me access my account?",
    "The delivery driver left my package outside in the rain even though I was home. Now my electronics are damaged and unusable. This is the second time this has happened.",
    "I've been trying to cancel my subscription for months but your website keeps giving me error messages. Every time I call, I'm on hold for over an hour. This is extremely frustrating.",
    "The food I ordered was cold and tasted terrible. The restaurant was also an hour late with delivery. I've ordered from you many times before and this was by far the worst experience.",
    "I was promised a discount code that would be emailed to me within 24 hours. It's been a week and I still haven't received anything. I need this code to complete my purchase.",
    "Your app keeps crashing every time I try to make a payment. I've tried on different devices and the problem persists. This is making it impossible for me to place orders.",
];

/// Return the sample complaints
pub fn all() -> &'static [&'static str] {
    &SAMPLE_COMPLAINTS
}

/// Return the 1-based `number`-th sample complaint
pub fn get(number: usize) -> Result<&'static str, AppError> {
    number
        .checked_sub(1)
        .and_then(|index| SAMPLE_COMPLAINTS.get(index))
        .copied()
        .ok_or_else(|| {
            AppError::Validation(format!(
                "Sample number must be between 1 and {}, got {}",
                SAMPLE_COMPLAINTS.len(),
                number
            ))
        })
}
