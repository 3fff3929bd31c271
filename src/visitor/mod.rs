//! Tag-dispatched tree traversal
//!
//! [`Walker`] is generic over the concrete [`Visitor`] it drives, so every
//! handler call is resolved when the walker is monomorphized. There is no
//! `dyn Visitor` anywhere in the traversal path.

pub mod order;
pub mod variants;

use std::fmt;

use tracing::{info, instrument, trace};

use crate::domain::{Node, Tag, Tree};

pub use order::Order;
pub use variants::{DerivedVisitor, GenericVisitor, ValueSum, VisitorKind};

/// Which handler ran for a visited node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    /// One of the default bodies on [`Visitor`].
    Generic(Tag),
    /// A handler supplied by the concrete visitor, with its label.
    Custom(&'static str),
}

impl fmt::Display for Handled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handled::Generic(tag) => write!(f, "Generic handle {}", tag),
            Handled::Custom(label) => f.write_str(label),
        }
    }
}

/// Per-tag handlers invoked by [`Walker`].
///
/// Both methods have default bodies; a concrete visitor overrides whichever
/// tags it cares about and inherits the rest.
pub trait Visitor {
    fn handle_first(&mut self, node: &Node) -> Handled {
        let handled = Handled::Generic(Tag::First);
        info!(%node, "{}", handled);
        handled
    }

    fn handle_second(&mut self, node: &Node) -> Handled {
        let handled = Handled::Generic(Tag::Second);
        info!(%node, "{}", handled);
        handled
    }
}

/// One dispatch performed during a traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub tag: Tag,
    pub value: f64,
    pub handled: Handled,
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.tag, self.value, self.handled)
    }
}

/// Traversal engine parameterized by the concrete visitor type.
///
/// Traversals recurse once per level, so the supported tree height is bounded
/// by the call stack.
#[derive(Debug)]
pub struct Walker<'t, V> {
    tree: &'t Tree,
    visitor: V,
    visits: Vec<Visit>,
}

impl<'t, V: Visitor> Walker<'t, V> {
    pub fn new(tree: &'t Tree, visitor: V) -> Self {
        Self {
            tree,
            visitor,
            visits: Vec::new(),
        }
    }

    /// Node, then left subtree, then right subtree.
    pub fn preorder(&mut self, node: Option<&'t Node>) {
        if let Some(node) = node {
            let tree = self.tree;
            self.handle_node(node);
            self.preorder(tree.left(node));
            self.preorder(tree.right(node));
        }
    }

    /// Left subtree, then node, then right subtree.
    pub fn inorder(&mut self, node: Option<&'t Node>) {
        if let Some(node) = node {
            let tree = self.tree;
            self.inorder(tree.left(node));
            self.handle_node(node);
            self.inorder(tree.right(node));
        }
    }

    /// Left subtree, then right subtree, then node.
    pub fn postorder(&mut self, node: Option<&'t Node>) {
        if let Some(node) = node {
            let tree = self.tree;
            self.postorder(tree.left(node));
            self.postorder(tree.right(node));
            self.handle_node(node);
        }
    }

    /// Traverse the whole tree in `order`, returning this walk's visits.
    #[instrument(level = "debug", skip(self))]
    pub fn walk(&mut self, order: Order) -> Vec<Visit> {
        self.visits.clear();
        let tree = self.tree;
        let root = tree.root();
        match order {
            Order::Pre => self.preorder(root),
            Order::In => self.inorder(root),
            Order::Post => self.postorder(root),
        }
        self.take_visits()
    }

    fn handle_node(&mut self, node: &Node) {
        let handled = match node.tag() {
            Tag::First => self.visitor.handle_first(node),
            Tag::Second => self.visitor.handle_second(node),
        };
        trace!(%node, %handled, "dispatched");
        self.visits.push(Visit {
            tag: node.tag(),
            value: node.value(),
            handled,
        });
    }

    /// Visits recorded since the last `walk` or `take_visits`.
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn take_visits(&mut self) -> Vec<Visit> {
        std::mem::take(&mut self.visits)
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn into_parts(self) -> (V, Vec<Visit>) {
        (self.visitor, self.visits)
    }
}

/// Walk `tree` once with `visitor`, handing the visitor back with the visits.
pub fn walk<V: Visitor>(tree: &Tree, visitor: V, order: Order) -> (V, Vec<Visit>) {
    let mut walker = Walker::new(tree, visitor);
    let visits = walker.walk(order);
    let (visitor, _) = walker.into_parts();
    (visitor, visits)
}
