//! Ordered, growable storage for territories and missions.
//!
//! Every indexed accessor is bounds checked and returns `RegistryError`
//! instead of panicking. Removal is swap-remove: the last element moves into
//! the freed slot, so any index held across a removal is invalidated.

use std::slice;

use tracing::debug;

use conquest_core::error::RegistryError;

#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Registry<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append `item`, doubling capacity when full. Returns its index.
    pub fn push(&mut self, item: T) -> Result<usize, RegistryError> {
        if self.items.len() == self.items.capacity() {
            self.grow()?;
        }
        self.items.push(item);
        Ok(self.items.len() - 1)
    }

    fn grow(&mut self) -> Result<(), RegistryError> {
        let current = self.items.capacity();
        let requested = current.saturating_mul(2).max(1);
        self.items
            .try_reserve_exact(requested - self.items.len())
            .map_err(|_| RegistryError::AllocationFailure { requested })?;
        debug!("Grew registry from {} to {} capacity", current, requested);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&T, RegistryError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, RegistryError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(RegistryError::IndexOutOfRange { index, len })
    }

    /// Two exclusive borrows at distinct indices, returned in argument order.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Result<(&mut T, &mut T), RegistryError> {
        let len = self.items.len();
        for index in [first, second] {
            if index >= len {
                return Err(RegistryError::IndexOutOfRange { index, len });
            }
        }
        if first == second {
            return Err(RegistryError::SameIndex(first));
        }

        if first < second {
            let (low, high) = self.items.split_at_mut(second);
            Ok((&mut low[first], &mut high[0]))
        } else {
            let (low, high) = self.items.split_at_mut(first);
            Ok((&mut high[0], &mut low[second]))
        }
    }

    /// Remove the element at `index`, moving the last element into its slot.
    pub fn swap_remove(&mut self, index: usize) -> Result<T, RegistryError> {
        let len = self.items.len();
        if index >= len {
            return Err(RegistryError::IndexOutOfRange { index, len });
        }
        Ok(self.items.swap_remove(index))
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T> IntoIterator for &'a Registry<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
