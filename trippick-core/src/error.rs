//! Errors raised by the in-memory store and ledger.

use thiserror::Error;

/// Failure while reading or writing a store or ledger.
///
/// Lookups for unknown records are not errors; they return `None` or an empty
/// vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock guarding `resource`.
    #[error("{resource} lock was poisoned by a panicking writer")]
    Poisoned {
        /// Name of the guarded collection.
        resource: &'static str,
    },
    /// No identifiers remain for `resource`.
    #[error("{resource} identifier space is exhausted")]
    IdsExhausted {
        /// Name of the collection that ran out of identifiers.
        resource: &'static str,
    },
}
