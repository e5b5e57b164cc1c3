//! Domain layer: entities and analysis logic
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod balance;
pub mod builder;
pub mod entities;
pub mod error;
pub mod weight;

pub use balance::{find_correction, BalanceReport};
pub use builder::TowerBuilder;
pub use entities::{Node, Record, Tower};
pub use error::{DomainError, DomainResult, StructuralError};
pub use weight::subtree_weight;
