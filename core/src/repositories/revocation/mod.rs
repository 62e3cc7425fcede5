pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub use r#trait::{duplicate_key, RevocationRepository};

#[cfg(test)]
pub mod mock;
#[cfg(test)]
pub use mock::MockRevocationRepository;

#[cfg(test)]
mod tests;
