//! Domain entities for token issuance and revocation tracking.

pub mod claims;
pub mod record;

pub use claims::Claims;
pub use record::{RevocationRecord, NEVER_EXPIRES};
