#![forbid(unsafe_code)]

//! Runtime for the Collabthon UI.
//!
//! Everything here runs against the [`view::View`] and
//! [`storage::StorageBackend`] traits, so the full behavior (routing, theme
//! policy, filtering, forms, scroll cosmetics) is testable without a browser.
//! `collab-web` supplies the DOM and `localStorage` implementations.
//!
//! # Key Components
//!
//! - [`App`] - Host-driven event loop owning the view state
//! - [`Router`] - Page activation and fragment sync
//! - [`ThemePolicy`] - Light/dark with stored preference and OS fallback
//! - [`ListFilter`] - Text and category visibility over card lists
//! - [`AppConfig`] - JSON-configurable tunables

pub mod app;
pub mod config;
pub mod filter;
pub mod forms;
pub mod memory_view;
pub mod router;
pub mod storage;
pub mod theme;
pub mod view;

pub use app::{App, FilterState, StepResult, ViewState};
pub use config::{AppConfig, ConfigError};
pub use filter::{CategoryBar, FilterOutcome, ListFilter, Predicate};
pub use memory_view::MemoryView;
pub use router::{NavOutcome, Router};
pub use storage::{MemoryStorage, StorageBackend, StorageError};
pub use theme::{Theme, ThemePolicy, ThemePreference};
pub use view::View;
