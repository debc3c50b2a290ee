//! The login/greeting widget.
//!
//! Durable state lives entirely in the profile store; the widget itself only
//! tracks which region is visible. On startup the stored name decides the
//! initial region; submitting the login form persists the name and switches
//! to the greeting, with no path back short of clearing the store and
//! re-initializing.

use crate::store::{SharedProfileStore, StoreResult};
use crate::view::GreetingView;

/// Reserved profile store key for the display name.
///
/// Passed into the widget explicitly so separate instances (e.g. in tests)
/// can use distinct keys without colliding.
pub const USERNAME_KEY: &str = "username";

const GREETING_PREFIX: &str = "Hello ";

/// The greeting text for `name`: a literal prefix plus the raw name.
///
/// The name is combined as plain text; rendering it without markup
/// interpretation is the view's contract.
pub fn greeting_line(name: &str) -> String {
    format!("{}{}", GREETING_PREFIX, name)
}

/// Which of the two regions is visible.
///
/// `Greeted` is terminal for a run: further submissions overwrite the stored
/// name but never return to `AwaitingLogin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetState {
    AwaitingLogin,
    Greeted { username: String },
}

impl WidgetState {
    /// Pure submission transition: the next state plus the store write to
    /// perform. No trimming, no validation; empty input is accepted.
    pub fn submit(&self, key: &str, value: &str) -> SubmitOutcome {
        SubmitOutcome {
            next: WidgetState::Greeted {
                username: value.to_string(),
            },
            write_key: key.to_string(),
            write_value: value.to_string(),
        }
    }
}

/// Result of the pure submission transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub next: WidgetState,
    pub write_key: String,
    pub write_value: String,
}

/// Adapter binding the pure state machine to a view and a store.
pub struct GreetingWidget<V: GreetingView> {
    store: SharedProfileStore,
    view: V,
    key: String,
    state: WidgetState,
}

impl<V: GreetingView> GreetingWidget<V> {
    pub fn new(store: SharedProfileStore, view: V, key: impl Into<String>) -> Self {
        Self {
            store,
            view,
            key: key.into(),
            state: WidgetState::AwaitingLogin,
        }
    }

    /// Run the initialization protocol: read the stored name and show the
    /// matching region. There is no intermediate loading state.
    pub fn init(&mut self) -> StoreResult<()> {
        match self.store.get(&self.key)? {
            Some(name) => {
                self.view.show_greeting(&name);
                self.state = WidgetState::Greeted { username: name };
            }
            None => {
                self.view.show_login();
                self.state = WidgetState::AwaitingLogin;
            }
        }
        Ok(())
    }

    /// Handle a login submission: persist the raw input under the reserved
    /// key (overwriting), then show the greeting.
    ///
    /// A failed store write propagates after logging; the view is left
    /// untouched in that case.
    pub fn handle_submit(&mut self, input: &str) -> StoreResult<()> {
        let outcome = self.state.submit(&self.key, input);

        if let Err(e) = self.store.set(&outcome.write_key, &outcome.write_value) {
            tracing::warn!("Failed to persist display name: {}", e);
            return Err(e);
        }

        self.view.show_greeting(input);
        self.state = outcome.next;
        Ok(())
    }

    /// Current widget state.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Whether the login region is the visible one.
    pub fn is_awaiting_login(&self) -> bool {
        matches!(self.state, WidgetState::AwaitingLogin)
    }

    /// The underlying view.
    pub fn view(&self) -> &V {
        &self.view
    }
}
