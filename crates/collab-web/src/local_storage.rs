#![forbid(unsafe_code)]

//! `window.localStorage` as a [`StorageBackend`].

use collab_runtime::storage::{StorageBackend, StorageError, StorageResult};
use web_sys::{Storage, Window};

/// Browser `localStorage`.
///
/// Access can be denied outright (sandboxed iframes, some private modes); the
/// backend then reports itself unavailable and every operation fails with
/// [`StorageError::Unavailable`].
pub struct LocalStorage {
    inner: Option<Storage>,
}

impl LocalStorage {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        Self {
            inner: window.local_storage().ok().flatten(),
        }
    }

    fn storage(&self) -> StorageResult<&Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage access denied".into()))
    }
}

impl StorageBackend for LocalStorage {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}
