use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::Tag;

/// Handle to a node stored in a [`Tree`] arena.
///
/// Not `Clone`: attaching a handle to a parent moves it, so every node has at
/// most one owner. Each handle also carries the id of the arena that issued it;
/// handles from any other arena are never resolved.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    arena: u64,
    index: Index,
}

static NEXT_ARENA_ID: AtomicU64 = AtomicU64::new(1);

/// Fresh id for a new arena.
pub(crate) fn next_arena_id() -> u64 {
    NEXT_ARENA_ID.fetch_add(1, Ordering::Relaxed)
}

impl NodeId {
    pub(crate) fn new(arena: u64, index: Index) -> Self {
        Self { arena, index }
    }

    pub(crate) fn arena(&self) -> u64 {
        self.arena
    }

    pub(crate) fn index(&self) -> Index {
        self.index
    }
}

/// One vertex of a binary tree. Immutable once built.
#[derive(Debug, PartialEq)]
pub struct Node {
    tag: Tag,
    value: f64,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(tag: Tag, value: f64, left: Option<NodeId>, right: Option<NodeId>) -> Self {
        Self {
            tag,
            value,
            left,
            right,
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Handle of the left child, if any. Resolve it with [`Tree::get`] or use [`Tree::left`].
    pub fn left(&self) -> Option<&NodeId> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&NodeId> {
        self.right.as_ref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tag, self.value)
    }
}

/// Arena-backed binary tree.
///
/// Owns every node; dropping the tree drops the whole structure at once.
/// Built through [`TreeBuilder`](crate::domain::TreeBuilder), never mutated afterwards.
#[derive(Debug)]
pub struct Tree {
    /// Id stamped on every handle this tree's nodes were built with
    id: u64,
    /// Arena storage for all tree nodes
    arena: Arena<Node>,
    /// Index of the root node, None for the empty tree
    root: Option<NodeId>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::empty()
    }
}

impl Tree {
    /// The absent tree: no root, no nodes.
    pub fn empty() -> Self {
        Self {
            id: next_arena_id(),
            arena: Arena::new(),
            root: None,
        }
    }

    pub(crate) fn from_parts(id: u64, arena: Arena<Node>, root: Option<NodeId>) -> Self {
        Self { id, arena, root }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        if id.arena() != self.id {
            return None;
        }
        self.arena.get(id.index())
    }

    pub fn root_id(&self) -> Option<&NodeId> {
        self.root.as_ref()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref().and_then(|id| self.get(id))
    }

    pub fn left(&self, node: &Node) -> Option<&Node> {
        node.left().and_then(|id| self.get(id))
    }

    pub fn right(&self, node: &Node) -> Option<&Node> {
        node.right().and_then(|id| self.get(id))
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Height of the tree, which is also the recursion depth of every traversal.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root())
    }

    fn calculate_depth(&self, node: Option<&Node>) -> usize {
        match node {
            Some(node) => {
                1 + self
                    .calculate_depth(self.left(node))
                    .max(self.calculate_depth(self.right(node)))
            }
            None => 0,
        }
    }

    /// Number of nodes carrying `tag`.
    pub fn count(&self, tag: Tag) -> usize {
        self.arena.iter().filter(|(_, node)| node.tag() == tag).count()
    }
}
