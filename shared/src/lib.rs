//! Domain logic for the household expense tracker.
//!
//! Everything here is plain synchronous Rust so it runs both in the browser
//! frontend and under `cargo test`.

pub mod amount;
pub mod config;
pub mod entry_form;
pub mod error;
pub mod expense;
pub mod filter;
pub mod format;
pub mod ids;
pub mod seed;
pub mod session;

pub use amount::{coerce_amount, AmountPolicy};
pub use config::TrackerConfig;
pub use entry_form::{EntryForm, FormState, SubmitOutcome};
pub use error::{ConfigError, EntryError, SeedError};
pub use expense::{ExpenseRecord, ExpenseStore};
pub use filter::FilterView;
pub use format::{format_amount, format_currency};
pub use ids::{IdGenerator, UuidIdGenerator};
pub use seed::{load_seed, parse_seed};
pub use session::{ExpenseSession, ExpenseView};
