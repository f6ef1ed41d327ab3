// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{UserKey, UserValue};

/// Stable handle of a node inside an [`Arena`]
///
/// A handle stays valid until its node is freed; the slot may then be
/// handed out again to a later node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Forward links of a node (or of the head), one slot per level.
///
/// `None` terminates the chain at that level.
pub type Tower = Box<[Option<NodeId>]>;

pub struct Node {
    pub key: UserKey,
    pub value: UserValue,
    pub tower: Tower,
}

impl Node {
    pub fn new(key: UserKey, value: UserValue, height: usize) -> Self {
        Self {
            key,
            value,
            tower: empty_tower(height),
        }
    }

    /// Number of levels this node participates in
    pub fn height(&self) -> usize {
        self.tower.len()
    }
}

pub fn empty_tower(height: usize) -> Tower {
    vec![None; height].into_boxed_slice()
}

/// Slab of nodes addressed by [`NodeId`]
#[derive(Default)]
pub struct Arena {
    slots: Vec<Option<Node>>,

    // Vacated slots, reused LIFO
    free: Vec<NodeId>,
}

impl Arena {
    pub fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(id) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(id.0) {
                debug_assert!(slot.is_none(), "free list should only hold vacant slots");
                *slot = Some(node);
                return id;
            }
        }

        let id = NodeId(self.slots.len());
        self.slots.push(Some(node));
        id
    }

    /// Takes the node out of the arena, vacating its slot.
    pub fn free(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id);
        Some(node)
    }

    #[allow(clippy::expect_used)]
    pub fn get(&self, id: NodeId) -> &Node {
        self.slots
            .get(id.0)
            .and_then(Option::as_ref)
            .expect("node handle should be live")
    }

    #[allow(clippy::expect_used)]
    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .expect("node handle should be live")
    }

    /// Number of live nodes
    #[cfg(test)]
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn node(key: &str) -> Node {
        Node::new(key.into(), key.into(), 1)
    }

    #[test]
    fn arena_reuses_freed_slots() {
        let mut arena = Arena::default();

        let a = arena.alloc(node("a"));
        let b = arena.alloc(node("b"));
        assert_ne!(a, b);
        assert_eq!(2, arena.live());

        let freed = arena.free(a).map(|n| n.key);
        assert_eq!(Some(String::from("a")), freed);
        assert_eq!(1, arena.live());

        // Double free is a no-op
        assert!(arena.free(a).is_none());
        assert_eq!(1, arena.live());

        let c = arena.alloc(node("c"));
        assert_eq!(a, c);
        assert_eq!("c", arena.get(c).key);
        assert_eq!("b", arena.get(b).key);
        assert_eq!(2, arena.live());
    }

    #[test]
    fn node_tower_starts_empty() {
        let node = Node::new("k".into(), "v".into(), 3);
        assert_eq!(3, node.height());
        assert!(node.tower.iter().all(Option::is_none));
    }
}
