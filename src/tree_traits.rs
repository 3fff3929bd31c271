use termtree::Tree as Diagram;
use tracing::instrument;

use crate::domain::{Node, Tree};

/// Conversion into a printable `termtree` diagram.
pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Diagram<String>;
}

impl TreeNodeConvert for Tree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Diagram<String> {
        match self.root() {
            Some(root) => build_diagram(self, root),
            None => Diagram::new("Empty tree".to_string()),
        }
    }
}

// A node with a single child keeps a `_` placeholder so left and right stay distinguishable.
fn build_diagram(tree: &Tree, node: &Node) -> Diagram<String> {
    let mut diagram = Diagram::new(node.to_string());
    if node.is_leaf() {
        return diagram;
    }
    for child in [tree.left(node), tree.right(node)] {
        match child {
            Some(child) => diagram.push(build_diagram(tree, child)),
            None => diagram.push(Diagram::new("_".to_string())),
        };
    }
    diagram
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_tree;

    #[test]
    fn given_tree_with_one_child_when_rendering_then_marks_absent_side() {
        let tree = parse_tree("first(1, _, second(3))").unwrap();

        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "first(1)");
        assert!(lines[1].ends_with("_"));
        assert!(lines[2].ends_with("second(3)"));
    }

    #[test]
    fn given_empty_tree_when_rendering_then_says_so() {
        assert_eq!(
            Tree::empty().to_tree_string().to_string().trim_end(),
            "Empty tree"
        );
    }
}
