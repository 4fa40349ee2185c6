use crate::arena::{Arena, NodeId};
use crate::errors::ListError;
use crate::list::{item_matches, List};
use crate::node::Node;

/// Doubly-linked list tracking head and tail ids directly.
///
/// Nodes live in an arena and point at each other by id, so the ends of
/// the chain are `None` and every structural update branches on them.
/// Compare [`crate::SentinelList`], which trades two permanent nodes
/// for branch-free splicing.
#[derive(Debug)]
pub struct LinkedList<E> {
    arena: Arena<E>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<E> LinkedList<E> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// Id of the first node matching `value`, scanning forward.
    fn find(&self, value: Option<&E>) -> Option<NodeId>
    where
        E: PartialEq,
    {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.arena.get(id);
            if item_matches(value, &node.item) {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    /// Node at `index`, walking from whichever end is closer.
    ///
    /// Callers range-check first; the list is non-empty here.
    fn node_at(&self, index: usize) -> NodeId {
        if index < self.size / 2 {
            let mut id = self.head.expect("non-empty list has a head");
            for _ in 0..index {
                id = self.arena.get(id).next.expect("walked past the tail");
            }
            id
        } else {
            let mut id = self.tail.expect("non-empty list has a tail");
            for _ in index..self.size - 1 {
                id = self.arena.get(id).prev.expect("walked past the head");
            }
            id
        }
    }

    /// Detach `id` from the chain and return its slot to the arena.
    fn unlink(&mut self, id: NodeId) {
        let node = self.arena.release(id);

        match node.prev {
            None => self.head = node.next,
            Some(prev) => self.arena.get_mut(prev).next = node.next,
        }
        match node.next {
            None => self.tail = node.prev,
            Some(next) => self.arena.get_mut(next).prev = node.prev,
        }

        self.size -= 1;
        log::trace!("unlinked slot {}", id.index());
    }
}

impl<E> Default for LinkedList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq + Clone> List<E> for LinkedList<E> {
    fn size(&self) -> usize {
        self.size
    }

    fn add(&mut self, value: Option<E>) {
        let id = self.arena.alloc(Node::new(value, self.tail, None));

        match self.tail {
            None => self.head = Some(id),
            Some(tail) => self.arena.get_mut(tail).next = Some(id),
        }

        self.tail = Some(id);
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
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.arena.get(id);
            values.push(node.item.clone());
            cursor = node.next;
        }
        values
    }
}
