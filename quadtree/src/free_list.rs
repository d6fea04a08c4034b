use std::fmt;
use std::ops::{Index, IndexMut};

const NIL: u32 = u32::MAX;

enum Slot<T> {
    Occupied(T),
    Free { next: u32 },
}

/// Contiguous pool with stable `u32` handles and O(1) erase.
///
/// Erased slots are threaded into a singly-linked free chain and reused
/// last-in first-out. A handle stays valid until its slot is erased; growing
/// the pool never changes the handle of a live value.
pub struct FreeList<T> {
    data: Vec<Slot<T>>,
    first_free: u32,
    len: usize,
}

impl<T> FreeList<T> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            first_free: NIL,
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            first_free: NIL,
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> u32 {
        self.len += 1;
        if self.first_free != NIL {
            let index = self.first_free;
            let slot = &mut self.data[index as usize];
            self.first_free = match *slot {
                Slot::Free { next } => next,
                Slot::Occupied(_) => unreachable!("free chain points at an occupied slot"),
            };
            *slot = Slot::Occupied(value);
            return index;
        }
        let index = self.data.len();
        debug_assert!(index < NIL as usize, "free list exhausted u32 handles");
        self.data.push(Slot::Occupied(value));
        index as u32
    }

    /// Releases `index` for reuse.
    ///
    /// `index` must come from `insert` and must not have been erased since;
    /// erasing a free slot corrupts the free chain.
    pub fn erase(&mut self, index: u32) {
        let slot = &mut self.data[index as usize];
        debug_assert!(
            matches!(slot, Slot::Occupied(_)),
            "erase of free slot {}",
            index
        );
        *slot = Slot::Free {
            next: self.first_free,
        };
        self.first_free = index;
        self.len -= 1;
    }

    /// Like `erase`, but hands the stored value back.
    pub fn remove(&mut self, index: u32) -> T {
        let slot = std::mem::replace(
            &mut self.data[index as usize],
            Slot::Free {
                next: self.first_free,
            },
        );
        match slot {
            Slot::Occupied(value) => {
                self.first_free = index;
                self.len -= 1;
                value
            }
            Slot::Free { .. } => panic!("remove of free slot {}", index),
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.first_free = NIL;
        self.len = 0;
    }

    /// High-water mark of the backing storage, free slots included.
    pub fn range(&self) -> usize {
        self.data.len()
    }

    /// Number of live values, the `size` of other free list APIs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    pub fn get(&self, index: u32) -> Option<&T> {
        match self.data.get(index as usize) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        match self.data.get_mut(index as usize) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Occupied(value) => Some((index as u32, value)),
                Slot::Free { .. } => None,
            })
    }

    /// Drops trailing free slots and releases spare capacity.
    ///
    /// Live handles keep their index. The remaining free slots are rechained
    /// so the lowest index is reused first.
    pub fn shrink_to_fit(&mut self) {
        while matches!(self.data.last(), Some(Slot::Free { .. })) {
            self.data.pop();
        }
        let mut first_free = NIL;
        for (index, slot) in self.data.iter_mut().enumerate().rev() {
            if let Slot::Free { next } = slot {
                *next = first_free;
                first_free = index as u32;
            }
        }
        self.first_free = first_free;
        self.data.shrink_to_fit();
    }
}

impl<T> Default for FreeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<u32> for FreeList<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: u32) -> &T {
        match &self.data[index as usize] {
            Slot::Occupied(value) => value,
            Slot::Free { .. } => panic!("access to free slot {}", index),
        }
    }
}

impl<T> IndexMut<u32> for FreeList<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: u32) -> &mut T {
        match &mut self.data[index as usize] {
            Slot::Occupied(value) => value,
            Slot::Free { .. } => panic!("access to free slot {}", index),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FreeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
