//! The node table backing a tree.

use std::ops::{Index, IndexMut};

use crate::node::{Node, NodeId};

/// Owns every node of one tree. Deleted slots are remembered and handed out again by later
/// inserts, so ids stay small and the table doesn't grow without bound under churn.
///
/// Every slot counts how many times it has been vacated. A [`NodeId`] remembers the count it was
/// issued under, so an id to a deleted node never resolves to whatever reuses its slot.
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

#[derive(Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Arena<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            free: self.free.clone(),
            len: self.len,
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.node = Some(node);
                NodeId::new(index, slot.generation)
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                NodeId::new(self.slots.len() - 1, 0)
            }
        }
    }

    /// Takes the node out of the table. Its children are not touched; the caller is expected to
    /// have relinked them already.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<T> {
        let slot = &mut self.slots[id.index];
        assert_eq!(slot.generation, id.generation, "Removing a stale node id");
        let node = slot.node.take().expect("Removing a vacant slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Vacates every slot. The table keeps its allocation and old ids stay dead.
    pub(crate) fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }
        self.len = 0;
    }

    /// Cached max depth of the subtree at `id`, 0 for an empty link.
    pub(crate) fn depth(&self, id: Option<NodeId>) -> usize {
        id.map_or(0, |id| self[id].depth)
    }

    /// Adjusts the depth of `id` to be the max of its children's depths + 1.
    pub(crate) fn fix_depth(&mut self, id: NodeId) {
        let left_depth = self.depth(self[id].left);
        let right_depth = self.depth(self[id].right);
        self[id].depth = left_depth.max(right_depth) + 1;
    }

    /// Left max depth minus right max depth.
    pub(crate) fn balance_factor(&self, id: NodeId) -> isize {
        let node = &self[id];
        self.depth(node.left) as isize - self.depth(node.right) as isize
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.get(id).expect("Dangling node id")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.get_mut(id).expect("Dangling node id")
    }
}
