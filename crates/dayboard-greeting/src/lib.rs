//! Login/greeting section for Dayboard.
//!
//! A durable profile store keeps the user's display name across runs; the
//! greeting widget decides which of two mutually exclusive regions is shown
//! (login prompt or greeting) and transitions between them on submission.

pub mod store;
pub mod view;
pub mod widget;

pub use store::{ProfileStore, SharedProfileStore, SqliteProfileStore, StoreError, StoreResult};
pub use view::{GreetingView, RecordingView, ViewCall};
pub use widget::{greeting_line, GreetingWidget, SubmitOutcome, WidgetState, USERNAME_KEY};
