//! Repository Traits
//!
//! Interface to the identity store for the role-gate lookup. The store is
//! queried directly rather than over HTTP; the implementation is in the
//! infrastructure layer and only ever reads.

use kernel::id::UserId;

use crate::domain::entities::TaRecord;
use crate::error::GraduationResult;

/// Teaching-assistant registry trait
#[trait_variant::make(TaRegistry: Send)]
pub trait LocalTaRegistry {
    /// Look up the caller's teaching-assistant record on file
    async fn find_by_user(&self, user_id: &UserId) -> GraduationResult<Option<TaRecord>>;
}
