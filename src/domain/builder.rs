//! Bottom-up construction of immutable trees.

use std::collections::HashSet;

use generational_arena::{Arena, Index};
use tracing::{debug, instrument, warn};

use crate::domain::arena::{next_arena_id, Node, NodeId, Tree};
use crate::domain::entities::Tag;

/// Constructs a [`Tree`] from the leaves up.
///
/// Children are created first and their [`NodeId`]s moved into the parent's
/// constructor. Handles issued by another builder are dropped with a warning,
/// so a node can never gain a second parent or close a cycle.
#[derive(Debug)]
pub struct TreeBuilder {
    id: u64,
    arena: Arena<Node>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            id: next_arena_id(),
            arena: Arena::new(),
        }
    }

    /// Keep `id` only if this builder issued it.
    fn adopt(&self, id: Option<NodeId>) -> Option<NodeId> {
        let id = id?;
        if id.arena() == self.id && self.arena.contains(id.index()) {
            Some(id)
        } else {
            warn!(?id, "Ignoring node handle from another builder");
            None
        }
    }

    /// Create a node owning the given children.
    #[instrument(level = "trace", skip(self, left, right))]
    pub fn node(
        &mut self,
        tag: Tag,
        value: f64,
        left: Option<NodeId>,
        right: Option<NodeId>,
    ) -> NodeId {
        let left = self.adopt(left);
        let right = self.adopt(right);
        NodeId::new(self.id, self.arena.insert(Node::new(tag, value, left, right)))
    }

    pub fn leaf(&mut self, tag: Tag, value: f64) -> NodeId {
        self.node(tag, value, None, None)
    }

    /// Seal the arena with `root` as the tree's root.
    ///
    /// Nodes that were created but never attached below `root` are discarded.
    /// A `root` from another builder yields the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn build(mut self, root: NodeId) -> Tree {
        let Some(root) = self.adopt(Some(root)) else {
            return Tree::empty();
        };

        let mut reachable = HashSet::new();
        collect_reachable(&self.arena, Some(&root), &mut reachable);

        let before = self.arena.len();
        self.arena.retain(|idx, _| reachable.contains(&idx));
        if self.arena.len() != before {
            debug!(
                "Pruned {} unattached node(s)",
                before - self.arena.len()
            );
        }

        Tree::from_parts(self.id, self.arena, Some(root))
    }
}

fn collect_reachable(arena: &Arena<Node>, id: Option<&NodeId>, seen: &mut HashSet<Index>) {
    if let Some(id) = id {
        if !seen.insert(id.index()) {
            return;
        }
        if let Some(node) = arena.get(id.index()) {
            collect_reachable(arena, node.left(), seen);
            collect_reachable(arena, node.right(), seen);
        }
    }
}
