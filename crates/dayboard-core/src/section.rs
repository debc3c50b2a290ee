use anyhow::Result;
use std::sync::Arc;

use crate::Config;

/// A self-contained page section (greeting, quote, weather).
///
/// Sections are independent: they share no state and never talk to each
/// other. The page renders them in registration order.
pub trait Section: Send {
    /// Human-readable name, used for logging
    fn name(&self) -> &str;

    /// Initialize the section with the given context.
    ///
    /// A failure here is fatal for the whole page: a section whose
    /// prerequisites are missing aborts startup.
    fn init(&mut self, ctx: &SectionContext) -> Result<()>;

    /// Current display lines of the section
    fn render_lines(&self) -> Vec<String>;

    /// Whether the section is waiting for a line of user input
    fn wants_input(&self) -> bool {
        false
    }

    /// Feed one line of user input to the section
    fn handle_input(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    /// Shutdown the section gracefully
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Context provided to sections during initialization
pub struct SectionContext {
    pub config: Arc<Config>,
}

impl SectionContext {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}
