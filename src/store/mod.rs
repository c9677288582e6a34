pub mod credential;
pub mod index;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use credential::CredentialRecord;
pub use index::CredentialStore;

/// One lock serializes every insert and every lookup+increment.
pub type SharedStore = Arc<Mutex<CredentialStore>>;

/// Counter bumps are single writes, so a poisoned store is still consistent.
pub(crate) fn lock(store: &SharedStore) -> MutexGuard<'_, CredentialStore> {
    store.lock().unwrap_or_else(PoisonError::into_inner)
}
