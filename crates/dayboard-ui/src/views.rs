//! Console view implementations.

use dayboard_greeting::{greeting_line, GreetingView};

const LOGIN_PROMPT: &str = "What is your name?";

/// Console rendering of the greeting widget's two regions.
///
/// The regions are mutually exclusive, so each call replaces the whole line
/// buffer. Names pass through as plain text; the console has no markup to
/// interpret.
#[derive(Debug, Default)]
pub struct ConsoleGreetingView {
    lines: Vec<String>,
}

impl ConsoleGreetingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl GreetingView for ConsoleGreetingView {
    fn show_login(&mut self) {
        self.lines = vec![LOGIN_PROMPT.to_string()];
    }

    fn show_greeting(&mut self, name: &str) {
        self.lines = vec![greeting_line(name)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_region() {
        let mut view = ConsoleGreetingView::new();
        view.show_login();
        assert_eq!(view.lines(), ["What is your name?"]);
    }

    #[test]
    fn test_greeting_replaces_login() {
        let mut view = ConsoleGreetingView::new();
        view.show_login();
        view.show_greeting("alice");
        assert_eq!(view.lines(), ["Hello alice"]);
    }

    #[test]
    fn test_greeting_is_plain_text() {
        let mut view = ConsoleGreetingView::new();
        view.show_greeting("<b>x</b>");
        assert_eq!(view.lines(), ["Hello <b>x</b>"]);
    }
}
