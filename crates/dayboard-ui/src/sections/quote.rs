use anyhow::Result;
use dayboard_core::{Section, SectionContext};
use dayboard_quotes::{quote_of_the_day, Quote};

/// Daily quote page section. Picks once at initialization.
pub struct QuoteSection {
    quote: Option<&'static Quote>,
}

impl QuoteSection {
    pub fn new() -> Self {
        Self { quote: None }
    }
}

impl Default for QuoteSection {
    fn default() -> Self {
        Self::new()
    }
}

impl Section for QuoteSection {
    fn name(&self) -> &str {
        "quote"
    }

    fn init(&mut self, _ctx: &SectionContext) -> Result<()> {
        self.quote = Some(quote_of_the_day());
        Ok(())
    }

    fn render_lines(&self) -> Vec<String> {
        match self.quote {
            Some(quote) => vec![format!("\"{}\"", quote.text), format!("- {}", quote.author)],
            None => Vec::new(),
        }
    }
}
