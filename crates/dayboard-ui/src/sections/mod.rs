mod greeting;
mod quote;
mod weather;

pub use greeting::GreetingSection;
pub use quote::QuoteSection;
pub use weather::WeatherSection;
