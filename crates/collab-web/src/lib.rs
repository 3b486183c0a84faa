#![forbid(unsafe_code)]

//! Browser frontend for the Collabthon UI.
//!
//! The behavior lives in `collab-runtime`; this crate supplies the browser
//! halves of its seams and the JS-facing handle:
//! - [`markup`]: card grid HTML,
//! - [`selectors`]: the ids and classes the page markup must carry,
//! - `DomView` / `LocalStorage` (wasm only): the `View` and `StorageBackend`
//!   implementations,
//! - `CollabWeb` (wasm only): `mount`/`destroy` plus listener wiring.

pub mod error;
pub mod markup;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
mod dom_view;
#[cfg(target_arch = "wasm32")]
mod local_storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub use dom_view::DomView;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;
#[cfg(target_arch = "wasm32")]
pub use wasm::CollabWeb;

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct CollabWeb;

#[cfg(not(target_arch = "wasm32"))]
impl CollabWeb {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
