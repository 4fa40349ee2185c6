use crate::errors::ListError;
use crate::list::{item_matches, List};

/// Capacity granted to a list that grows out of the empty state.
const DEFAULT_CAPACITY: usize = 10;

/// Contiguous-buffer list with amortized growth.
///
/// Slots at `size..` are vacant; `0 <= size <= capacity` always holds.
#[derive(Debug)]
pub struct ArrayList<E> {
    elements: Box<[Option<E>]>,
    size: usize,
}

impl<E> ArrayList<E> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new().into_boxed_slice(),
            size: 0,
        }
    }

    /// Length of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    /// Replace the backing buffer with one `increment` slots longer,
    /// moving live elements across in order. An empty list jumps
    /// straight to `max(increment, DEFAULT_CAPACITY)`.
    fn grow(&mut self, increment: usize) {
        let new_capacity = if self.size == 0 {
            increment.max(DEFAULT_CAPACITY)
        } else {
            self.elements.len() + increment
        };
        log::trace!(
            "array grow: capacity {} -> {}",
            self.elements.len(),
            new_capacity
        );

        let mut buffer: Vec<Option<E>> = (0..new_capacity).map(|_| None).collect();
        for (slot, element) in buffer.iter_mut().zip(self.elements.iter_mut()) {
            *slot = element.take();
        }
        self.elements = buffer.into_boxed_slice();
    }

    /// First index whose element matches `value`, absent-aware.
    fn index_of(&self, value: Option<&E>) -> Option<usize>
    where
        E: PartialEq,
    {
        self.elements[..self.size]
            .iter()
            .position(|item| item_matches(value, item))
    }
}

impl<E> Default for ArrayList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: PartialEq + Clone> List<E> for ArrayList<E> {
    fn size(&self) -> usize {
        self.size
    }

    fn add(&mut self, value: Option<E>) {
        if self.size == self.elements.len() {
            self.grow(self.size / 2);
        }

        self.elements[self.size] = value;
        self.size += 1;
    }

    fn get(&self, index: usize) -> Result<Option<&E>, ListError> {
        if index >= self.size {
            return Err(ListError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }

        Ok(self.elements[index].as_ref())
    }

    fn contains(&self, value: Option<&E>) -> bool {
        self.index_of(value).is_some()
    }

    fn remove(&mut self, value: Option<&E>) {
        let target = match self.index_of(value) {
            Some(index) => index,
            None => return,
        };

        if target != self.size - 1 {
            // Shift the suffix left by rebuilding the buffer at exactly
            // `size` slots; capacity collapses to the live count.
            let mut buffer: Vec<Option<E>> = (0..self.size).map(|_| None).collect();
            for i in 0..target {
                buffer[i] = self.elements[i].take();
            }
            for i in target..self.size - 1 {
                buffer[i] = self.elements[i + 1].take();
            }
            log::trace!("array remove: rebuilt buffer at {} slots", self.size);
            self.elements = buffer.into_boxed_slice();
        }

        self.elements[self.size - 1] = None;
        self.size -= 1;
    }

    fn add_all(&mut self, other: &dyn List<E>) {
        if other.size() == 0 {
            return;
        }

        // Grow to fit exactly, not by the 1.5x add policy.
        let incoming = other.to_vec();
        self.grow(incoming.len());

        for value in incoming {
            self.elements[self.size] = value;
            self.size += 1;
        }
    }

    fn to_vec(&self) -> Vec<Option<E>> {
        self.elements[..self.size].to_vec()
    }
}
