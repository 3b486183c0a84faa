#![forbid(unsafe_code)]

//! Core: page identifiers, host events, deterministic time, the search
//! debouncer, scroll metrics, and the static student/project catalog.
//!
//! Nothing in this crate touches a browser. The embedding host translates DOM
//! events into [`event::Event`] values and supplies time through
//! [`clock::DeterministicClock`], which keeps every behavior reproducible in
//! plain `cargo test`.

pub mod catalog;
pub mod clock;
pub mod debounce;
pub mod event;
pub mod logging;
pub mod page;
pub mod scroll;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
