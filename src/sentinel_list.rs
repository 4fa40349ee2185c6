use crate::arena::{Arena, NodeId};
use crate::errors::ListError;
use crate::list::{item_matches, List};
use crate::node::Node;

/// Doubly-linked list whose ends are permanent sentinel nodes.
///
/// `first` and `last` occupy the arena's first two slots for the whole
/// life of the list, carry no element, and are never exposed. Every
/// data node therefore has a live predecessor and successor, so
/// splicing and unlinking relink unconditionally instead of branching
/// on the ends like [`crate::LinkedList`].
#[derive(Debug)]
pub struct SentinelList<E> {
    arena: Arena<E>,
    first: NodeId,
    last: NodeId,
    size: usize,
}

impl<E> SentinelList<E> {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let first = arena.alloc(Node::new(None, None, None));
        let last = arena.alloc(Node::new(None, Some(first), None));
        arena.get_mut(first).next = Some(last);

        Self {
            arena,
            first,
            last,
            size: 0,
        }
    }

    /// Id of the first data node matching `value`.
    ///
    /// Walks `size` steps from the first sentinel, so the sentinels are
    /// never candidates.
    fn find(&self, value: Option<&E>) -> Option<NodeId>
    where
        E: PartialEq,
    {
        let mut id = self.data_head();
        for _ in 0..self.size {
            let node = self.arena.get(id);
            if item_matches(value, &node.item) {
                return Some(id);
            }
            id = node.next.expect("chain ends at the last sentinel");
        }
        None
    }

    /// Data node at `index`, walking from whichever sentinel is closer.
    ///
    /// Callers range-check first; the list is non-empty here.
    fn node_at(&self, index: usize) -> NodeId {
        if index < self.size / 2 {
            let mut id = self.data_head();
            for _ in 0..index {
                id = self.arena.get(id).next.expect("chain ends at the last sentinel");
            }
            id
        } else {
            let mut id = self.data_tail();
            for _ in index..self.size - 1 {
                id = self.arena.get(id).prev.expect("chain starts at the first sentinel");
            }
            id
        }
    }

    /// First data node, or the last sentinel when empty.
    fn data_head(&self) -> NodeId {
        self.arena.get(self.first).next.expect("first sentinel links forward")
    }

    /// Last data node, or the first sentinel when empty.
    fn data_tail(&self) -> NodeId {
        self.arena.get(self.last).prev.expect("last sentinel links backward")
    }

    /// Detach `id` and return its slot to the arena. No end-of-chain
    /// branches: both neighbours always exist.
    fn unlink(&mut self, id: NodeId) {
        let node = self.arena.release(id);
        let prev = node.prev.expect("every data node sits between the sentinels");
        let next = node.next.expect("every data node sits between the sentinels");

        self.arena.get_mut(prev).next = Some(next);
        self.arena.get_mut(next).prev = Some(prev);

        self.size -= 1;
        log::trace!("unlinked slot {}", id.index());
    }
}

impl<E> Default for SentinelList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq + Clone> List<E> for SentinelList<E> {
    fn size(&self) -> usize {
        self.size
    }

    fn add(&mut self, value: Option<E>) {
        let before = self.data_tail();
        let id = self.arena.alloc(Node::new(value, Some(before), Some(self.last)));

        self.arena.get_mut(before).next = Some(id);
        self.arena.get_mut(self.last).prev = Some(id);

        self.size += 1;
    }

    fn get(&self, index: usize) -> Result<Option<&E>, ListError> {
        if index >= self.size {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }

        Ok(self.arena.get(self.node_at(index)).item.as_ref())
    }

    fn contains(&self, value: Option<&E>) -> bool {
        self.find(value).is_some()
    }

    fn remove(&mut self, value: Option<&E>) {
        if let Some(id) = self.find(value) {
            self.unlink(id);
        }
    }

    fn add_all(&mut self, other: &dyn List<E>) {
        for value in other.to_vec() {
            self.add(value);
        }
    }

    fn to_vec(&self) -> Vec<Option<E>> {
        let mut values = Vec::with_capacity(self.size);
        let mut id = self.data_head();
        for _ in 0..self.size {
            let node = self.arena.get(id);
            values.push(node.item.clone());
            id = node.next.expect("chain ends at the last sentinel");
        }
        values
    }
}
