use anyhow::Result;
use std::sync::Arc;

use crate::{Config, Section, SectionContext};

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    sections: Vec<Box<dyn Section>>,
    context: SectionContext,
}

impl App {
    /// Create a new application instance from an already-loaded config
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let context = SectionContext::new(config.clone());

        Self {
            config,
            sections: Vec::new(),
            context,
        }
    }

    /// Register a section with the application
    pub fn register_section(&mut self, section: Box<dyn Section>) {
        tracing::info!("Registering section: {}", section.name());
        self.sections.push(section);
    }

    /// Initialize all registered sections
    pub fn initialize(&mut self) -> Result<()> {
        tracing::info!(
            "Initializing page with {} sections",
            self.sections.len()
        );

        for section in &mut self.sections {
            tracing::debug!("Initializing section: {}", section.name());
            section.init(&self.context)?;
        }

        tracing::info!("Page initialized successfully");
        Ok(())
    }

    /// Collect the display lines of every section, in registration order.
    /// Sections are separated by a single blank line.
    pub fn render_page(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.extend(section.render_lines());
        }
        lines
    }

    /// The first section currently waiting for user input, if any
    pub fn input_section(&mut self) -> Option<&mut dyn Section> {
        self.sections
            .iter_mut()
            .find(|s| s.wants_input())
            .map(|s| s.as_mut())
    }

    /// Shutdown the application and all sections
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");

        for section in &mut self.sections {
            tracing::debug!("Shutting down section: {}", section.name());
            if let Err(e) = section.shutdown() {
                tracing::error!("Error shutting down section {}: {}", section.name(), e);
            }
        }

        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get list of all registered sections
    pub fn sections(&self) -> &[Box<dyn Section>] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    use std::sync::atomic::{AtomicBool, Ordering};

    struct StubSection {
        name: String,
        initialized: Arc<AtomicBool>,
        shut_down: Arc<AtomicBool>,
        lines: Vec<String>,
    }

    impl StubSection {
        fn new(name: &str, lines: &[&str]) -> Self {
            Self {
                name: name.to_string(),
                initialized: Arc::new(AtomicBool::new(false)),
                shut_down: Arc::new(AtomicBool::new(false)),
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Section for StubSection {
        fn name(&self) -> &str {
            &self.name
        }

        fn init(&mut self, _ctx: &SectionContext) -> Result<()> {
            self.initialized.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn render_lines(&self) -> Vec<String> {
            self.lines.clone()
        }

        fn shutdown(&mut self) -> Result<()> {
            self.shut_down.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingSection;

    impl Section for FailingSection {
        fn name(&self) -> &str {
            "failing"
        }

        fn init(&mut self, _ctx: &SectionContext) -> Result<()> {
            anyhow::bail!("missing prerequisite")
        }

        fn render_lines(&self) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_initialize_runs_all_sections() {
        let first = StubSection::new("a", &["line"]);
        let second = StubSection::new("b", &["line"]);
        let first_flag = first.initialized.clone();
        let second_flag = second.initialized.clone();

        let mut app = App::new(Config::default());
        app.register_section(Box::new(first));
        app.register_section(Box::new(second));

        app.initialize().unwrap();
        assert_eq!(app.sections().len(), 2);
        assert!(first_flag.load(Ordering::SeqCst));
        assert!(second_flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_shutdown_reaches_all_sections() {
        let section = StubSection::new("a", &[]);
        let flag = section.shut_down.clone();

        let mut app = App::new(Config::default());
        app.register_section(Box::new(section));
        app.initialize().unwrap();
        app.shutdown().unwrap();

        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_failing_section_aborts_startup() {
        let mut app = App::new(Config::default());
        app.register_section(Box::new(FailingSection));

        assert!(app.initialize().is_err());
    }

    #[test]
    fn test_render_page_separates_sections() {
        let mut app = App::new(Config::default());
        app.register_section(Box::new(StubSection::new("a", &["first"])));
        app.register_section(Box::new(StubSection::new("b", &["second", "third"])));

        let lines = app.render_page();
        assert_eq!(lines, vec!["first", "", "second", "third"]);
    }

    #[test]
    fn test_no_input_section_by_default() {
        let mut app = App::new(Config::default());
        app.register_section(Box::new(StubSection::new("a", &[])));
        assert!(app.input_section().is_none());
    }
}
