#![forbid(unsafe_code)]

//! Key/value preference storage.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      StorageBackend                           │
//! │   - MemoryStorage: in-memory (tests, headless runs)           │
//! │   - LocalStorage: window.localStorage (collab-web)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Invariants
//!
//! 1. **Graceful degradation**: storage failures never panic; operations
//!    return `Result` and callers log and carry on with in-memory state.
//! 2. **String values only**: the browser store holds strings, so the trait
//!    does too.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `StorageError::Unavailable` | Storage disabled (private mode, sandbox) | Caller falls back to defaults |
//! | `StorageError::Backend` | Quota exceeded, JS exception | Write dropped, logged |
//! | Missing key | First visit | `Ok(None)` |

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend cannot be used at all.
    Unavailable(String),
    /// The backend rejected an operation.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Storage Backend Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Trait for pluggable string key/value stores.
///
/// Methods take `&self`; backends use interior mutability. The UI runs on a
/// single thread, so no `Send`/`Sync` bound is imposed (the browser store is
/// neither).
pub trait StorageBackend {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read a value. `Ok(None)` if the key is absent.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Check if the backend is available and functional.
    fn is_available(&self) -> bool {
        true
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Storage (always available)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory storage backend.
///
/// Clones share the same map, the way every page load of an origin sees the
/// same `localStorage`; tests model a reload by handing a clone to a fresh
/// application.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<HashMap<String, String>>>,
    unavailable: Cell<bool>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create memory storage pre-populated with entries.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Self {
            data: Rc::new(RefCell::new(data)),
            unavailable: Cell::new(false),
        }
    }

    /// Create a storage whose every operation fails as unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            data: Rc::default(),
            unavailable: Cell::new(true),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// Whether no keys are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    fn check(&self) -> StorageResult<()> {
        if self.unavailable.get() {
            Err(StorageError::Unavailable("memory storage disabled".into()))
        } else {
            Ok(())
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn name(&self) -> &str {
        "MemoryStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.check()?;
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.data
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn is_available(&self) -> bool {
        !self.unavailable.get()
    }
}

impl fmt::Debug for MemoryStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStorage")
            .field("entries", &self.len())
            .field("available", &self.is_available())
            .finish()
    }
}
