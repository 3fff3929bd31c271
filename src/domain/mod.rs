//! Domain layer: tree data model
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;

pub use arena::{Node, NodeId, Tree};
pub use builder::TreeBuilder;
pub use entities::Tag;
pub use error::{DomainError, DomainResult};
