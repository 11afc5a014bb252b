//! Nodes of the region tree.
//!
//! The tree lives in a flat arena (`Vec<Node>`) owned by the layout
//! driver. Nodes name their children by arena index, which keeps the tree
//! movable and lets the split sweep walk it by index while appending.
//! Index 0 is always the root.

use mazewright_geometry::prelude::*;

/// A node of the region tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    /// The region this node covers.
    pub bounds: Rect,
    kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NodeKind {
    /// A terminal region, possibly holding an index into the room list.
    Leaf(Option<usize>),
    /// A split region; the children partition `bounds`.
    Internal { first: usize, second: usize },
}

impl Node {
    /// Creates a leaf with no room.
    pub fn leaf(bounds: Rect) -> Self {
        Self {
            bounds,
            kind: NodeKind::Leaf(None),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// The room index of a filled leaf.
    pub fn room(&self) -> Option<usize> {
        match self.kind {
            NodeKind::Leaf(room) => room,
            NodeKind::Internal { .. } => None,
        }
    }

    /// Child indices of an internal node.
    pub fn children(&self) -> Option<(usize, usize)> {
        match self.kind {
            NodeKind::Leaf(_) => None,
            NodeKind::Internal { first, second } => Some((first, second)),
        }
    }

    /// Attaches a room to this leaf.
    pub fn set_room(&mut self, index: usize) {
        match &mut self.kind {
            NodeKind::Leaf(room @ None) => *room = Some(index),
            NodeKind::Leaf(Some(_)) => panic!("leaf already holds a room"),
            NodeKind::Internal { .. } => panic!("only leaves hold rooms"),
        }
    }

    /// Turns this empty leaf into an internal node.
    pub fn set_children(&mut self, first: usize, second: usize) {
        match self.kind {
            NodeKind::Leaf(None) => self.kind = NodeKind::Internal { first, second },
            NodeKind::Leaf(Some(_)) => panic!("cannot split a leaf that holds a room"),
            NodeKind::Internal { .. } => panic!("node already split"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rect {
        Rect::new(0, 0, 10, 10)
    }

    #[test]
    fn fresh_leaf_is_empty() {
        let node = Node::leaf(bounds());

        assert!(node.is_leaf());
        assert_eq!(node.room(), None);
        assert_eq!(node.children(), None);
    }

    #[test]
    fn leaf_takes_a_room() {
        let mut node = Node::leaf(bounds());
        node.set_room(3);

        assert!(node.is_leaf());
        assert_eq!(node.room(), Some(3));
    }

    #[test]
    fn split_node_reports_children() {
        let mut node = Node::leaf(bounds());
        node.set_children(1, 2);

        assert!(!node.is_leaf());
        assert_eq!(node.children(), Some((1, 2)));
        assert_eq!(node.room(), None);
    }

    #[test]
    #[should_panic(expected = "already holds a room")]
    fn leaf_rejects_second_room() {
        let mut node = Node::leaf(bounds());
        node.set_room(0);
        node.set_room(1);
    }

    #[test]
    #[should_panic(expected = "already split")]
    fn node_rejects_second_split() {
        let mut node = Node::leaf(bounds());
        node.set_children(1, 2);
        node.set_children(3, 4);
    }

    #[test]
    #[should_panic(expected = "cannot split")]
    fn filled_leaf_rejects_split() {
        let mut node = Node::leaf(bounds());
        node.set_room(0);
        node.set_children(1, 2);
    }
}
