use anyhow::Result;
use dayboard_core::{Section, SectionContext};
use dayboard_greeting::{GreetingWidget, SharedProfileStore, USERNAME_KEY};

use crate::views::ConsoleGreetingView;

/// Login/greeting page section.
///
/// Takes the shared profile store by injection; the widget decides which
/// region to show from what the store holds.
pub struct GreetingSection {
    widget: GreetingWidget<ConsoleGreetingView>,
}

impl GreetingSection {
    pub fn new(store: SharedProfileStore) -> Self {
        Self {
            widget: GreetingWidget::new(store, ConsoleGreetingView::new(), USERNAME_KEY),
        }
    }
}

impl Section for GreetingSection {
    fn name(&self) -> &str {
        "greeting"
    }

    fn init(&mut self, _ctx: &SectionContext) -> Result<()> {
        self.widget.init()?;
        Ok(())
    }

    fn render_lines(&self) -> Vec<String> {
        self.widget.view().lines().to_vec()
    }

    fn wants_input(&self) -> bool {
        self.widget.is_awaiting_login()
    }

    fn handle_input(&mut self, line: &str) -> Result<()> {
        self.widget.handle_submit(line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use dayboard_core::Config;
    use dayboard_greeting::SqliteProfileStore;
    use std::sync::Arc;

    fn test_context() -> SectionContext {
        SectionContext::new(Arc::new(Config::default()))
    }

    fn test_store() -> SharedProfileStore {
        SharedProfileStore::new(SqliteProfileStore::in_memory().unwrap())
    }

    #[test]
    fn test_fresh_store_prompts_for_name() {
        let mut section = GreetingSection::new(test_store());
        section.init(&test_context()).unwrap();

        assert!(section.wants_input());
        assert_eq!(section.render_lines(), ["What is your name?"]);
    }

    #[test]
    fn test_submission_greets_and_stops_wanting_input() {
        let store = test_store();
        let mut section = GreetingSection::new(store.clone());
        section.init(&test_context()).unwrap();

        section.handle_input("alice").unwrap();

        assert!(!section.wants_input());
        assert_eq!(section.render_lines(), ["Hello alice"]);
        assert_eq!(store.get(USERNAME_KEY).unwrap().as_deref(), Some("alice"));
    }

    #[test]
    fn test_stored_name_skips_login() {
        let store = test_store();
        store.set(USERNAME_KEY, "bob").unwrap();

        let mut section = GreetingSection::new(store);
        section.init(&test_context()).unwrap();

        assert!(!section.wants_input());
        assert_eq!(section.render_lines(), ["Hello bob"]);
    }
}
