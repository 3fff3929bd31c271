//! Tag-dispatched binary tree traversal with compile-time handler binding.
//!
//! A [`Walker`](visitor::Walker) is generic over the concrete
//! [`Visitor`](visitor::Visitor) it drives. The visitor supplies
//! `handle_first`/`handle_second` for the node tags it cares about and
//! inherits default bodies for the rest.
//!
//! ```
//! use tagtree::domain::{Tag, TreeBuilder};
//! use tagtree::visitor::{walk, DerivedVisitor, Order};
//!
//! let mut b = TreeBuilder::new();
//! let left = b.leaf(Tag::Second, 2.0);
//! let right = b.leaf(Tag::Second, 3.0);
//! let root = b.node(Tag::First, 1.0, Some(left), Some(right));
//! let tree = b.build(root);
//!
//! let (_, visits) = walk(&tree, DerivedVisitor, Order::In);
//! let values: Vec<f64> = visits.iter().map(|v| v.value).collect();
//! assert_eq!(values, [2.0, 1.0, 3.0]);
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod parser;
pub mod tree_traits;
pub mod util;
pub mod visitor;
