//! Weather lookup for Dayboard
//!
//! A single linear sequence: locate the machine (or use configured
//! coordinates), fetch current conditions from the weather API, render one
//! summary line. No retry, no caching.

pub mod locate;
pub mod provider;
pub mod types;

pub use locate::locate;
pub use provider::{WeatherProvider, DEFAULT_API_URL};
pub use types::*;
