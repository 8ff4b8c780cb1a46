//! Error type for the preference storage seam.
//!
//! The theme flow itself has no error conditions: invalid values are
//! normalized and a missing toggle control is skipped. Storage is the one
//! boundary that can genuinely fail (capability denied, quota, backend
//! fault), and [`StoreError`] is how implementations report it. The
//! controller never propagates these — it logs and continues.

use thiserror::Error;

/// Failure reported by a [`PreferenceStore`](crate::PreferenceStore)
/// implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage capability is missing or access to it was denied.
    #[error("preference storage is unavailable")]
    Unavailable,

    /// The backend accepted the request but the operation failed.
    #[error("preference storage failed: {0}")]
    Backend(String),
}
