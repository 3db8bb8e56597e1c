//! An indexed binary heap: a fixed-capacity priority queue that can
//! re-prioritize any live item in O(log n) by looking its position up
//! through a dense integer id instead of scanning the backing array.

const NO_SLOT: u32 = u32::MAX;

/// Items stored in an [IndexedHeap].
///
/// `Ord` decides priority: `Less` means more preferred, i.e. closer to the
/// root. [index](HeapItem::index) must be a dense id in `[0, capacity)` that
/// is unique among the items in the heap at any moment; the heap uses it to
/// track where the item currently sits.
pub trait HeapItem: Ord {
    fn index(&self) -> usize;
}

/// Array-backed binary min-heap over items addressed by dense ids.
///
/// The heap keeps an id-to-position table that is updated on every swap,
/// which is what makes [improve](IndexedHeap::improve) O(log n) rather than
/// a linear search followed by a sift. Positions of removed items are
/// cleared immediately, so a membership check through a stale id can never
/// alias a different live item.
#[derive(Clone, Debug)]
pub struct IndexedHeap<T: HeapItem> {
    items: Vec<T>,
    slots: Vec<u32>,
}

impl<T: HeapItem> IndexedHeap<T> {
    /// Creates a heap able to hold items with ids in `[0, capacity)`.
    pub fn with_capacity(capacity: usize) -> IndexedHeap<T> {
        IndexedHeap {
            items: Vec::with_capacity(capacity),
            slots: vec![NO_SLOT; capacity],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The highest id the heap can track, exclusive.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether the item with this id currently sits in the heap.
    pub fn contains(&self, index: usize) -> bool {
        self.slots[index] != NO_SLOT
    }

    /// The item with this id, if it currently sits in the heap.
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots[index] {
            NO_SLOT => None,
            slot => Some(&self.items[slot as usize]),
        }
    }

    /// The most preferred item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Adds an item at the next free position and sifts it toward the root.
    ///
    /// The item's id must not already be in the heap.
    pub fn insert(&mut self, item: T) {
        let id = item.index();
        debug_assert!(!self.contains(id), "id {id} inserted twice");
        let slot = self.items.len();
        self.slots[id] = slot as u32;
        self.items.push(item);
        self.sift_up(slot);
    }

    /// Removes and returns the most preferred item, or [None] if the heap
    /// is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        // Moves the last item into the root, then sinks it.
        let first = self.items.swap_remove(0);
        self.slots[first.index()] = NO_SLOT;
        if !self.items.is_empty() {
            self.slots[self.items[0].index()] = 0;
            self.sift_down(0);
        }
        Some(first)
    }

    /// Mutates the item with this id in place and sifts it toward the root.
    ///
    /// `f` must not make the item less preferred: the item only ever moves
    /// up, so a worsening update silently leaves the heap out of order.
    /// Returns [false] without touching anything if the id is not in the
    /// heap.
    pub fn improve(&mut self, index: usize, f: impl FnOnce(&mut T)) -> bool {
        match self.slots[index] {
            NO_SLOT => false,
            slot => {
                let slot = slot as usize;
                f(&mut self.items[slot]);
                self.sift_up(slot);
                true
            }
        }
    }

    /// Drops all items and clears their positions, keeping the allocations.
    pub fn clear(&mut self) {
        for item in &self.items {
            self.slots[item.index()] = NO_SLOT;
        }
        self.items.clear();
    }

    /// Clears the heap and re-sizes the position table for ids in
    /// `[0, capacity)`.
    pub fn reset(&mut self, capacity: usize) {
        if self.slots.len() == capacity {
            self.clear();
        } else {
            self.items.clear();
            self.slots.clear();
            self.slots.resize(capacity, NO_SLOT);
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if self.items[slot] < self.items[parent] {
                self.swap(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = slot * 2 + 1;
            let right = slot * 2 + 2;
            if left >= self.items.len() {
                return;
            }
            let mut child = left;
            if right < self.items.len() && self.items[right] < self.items[left] {
                child = right;
            }
            if self.items[child] < self.items[slot] {
                self.swap(slot, child);
                slot = child;
            } else {
                return;
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.slots[self.items[a].index()] = a as u32;
        self.slots[self.items[b].index()] = b as u32;
    }
}
