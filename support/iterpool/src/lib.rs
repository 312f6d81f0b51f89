//! Non-thread safe object pool.
//!
//! Objects are identified by [`PoolPtr`], a plain index that can be stored in
//! handle types. Freed slots are reused by later allocations, and accessing a
//! freed slot is detected at runtime.
use std::{mem, ops};

/// Non-thread safe object pool.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    storage: Vec<Entry<T>>,
    first_free: Option<usize>,
    len: usize,
}

/// A (potentially invalid) pointer to an object in `Pool`, but without
/// information about which specific `Pool` this is associated with.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct PoolPtr(pub usize);

#[derive(Debug, Clone)]
enum Entry<T> {
    Used(T),

    /// This entry is free. Points the next free entry.
    Free(Option<usize>),
}

impl<T> Entry<T> {
    fn as_ref(&self) -> Option<&T> {
        match self {
            Entry::Used(value) => Some(value),
            Entry::Free(_) => None,
        }
    }

    fn as_mut(&mut self) -> Option<&mut T> {
        match self {
            Entry::Used(value) => Some(value),
            Entry::Free(_) => None,
        }
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            first_free: None,
            len: 0,
        }
    }

    /// Get the number of allocated objects.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Store `x` in a free slot (the most recently freed one, if any).
    pub fn allocate(&mut self, x: T) -> PoolPtr {
        self.len += 1;
        match self.first_free {
            None => {
                self.storage.push(Entry::Used(x));
                PoolPtr(self.storage.len() - 1)
            }
            Some(i) => {
                let next_free = match self.storage[i] {
                    Entry::Free(next) => next,
                    Entry::Used(_) => unreachable!(),
                };
                self.first_free = next_free;
                self.storage[i] = Entry::Used(x);
                PoolPtr(i)
            }
        }
    }

    /// Remove the object at `ptr` and return it. Returns `None` if `ptr` does
    /// not point to an allocated object.
    pub fn deallocate<S: Into<PoolPtr>>(&mut self, ptr: S) -> Option<T> {
        let i = ptr.into().0;
        let e = self.storage.get_mut(i)?;
        if let Entry::Free(_) = e {
            return None;
        }

        let x = match mem::replace(e, Entry::Free(self.first_free)) {
            Entry::Used(x) => x,
            Entry::Free(_) => unreachable!(),
        };
        self.first_free = Some(i);
        self.len -= 1;
        Some(x)
    }

    pub fn get(&self, ptr: PoolPtr) -> Option<&T> {
        self.storage.get(ptr.0).and_then(Entry::as_ref)
    }

    pub fn get_mut(&mut self, ptr: PoolPtr) -> Option<&mut T> {
        self.storage.get_mut(ptr.0).and_then(Entry::as_mut)
    }
}

impl<T> ops::Index<PoolPtr> for Pool<T> {
    type Output = T;

    fn index(&self, index: PoolPtr) -> &Self::Output {
        self.get(index).expect("dangling ptr")
    }
}

impl<T> ops::IndexMut<PoolPtr> for Pool<T> {
    fn index_mut(&mut self, index: PoolPtr) -> &mut Self::Output {
        self.get_mut(index).expect("dangling ptr")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn freed_slots_are_reused() {
        let mut pool = Pool::new();
        let a = pool.allocate("a");
        let b = pool.allocate("b");
        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);

        assert_eq!(pool.deallocate(a), Some("a"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.get(a), None);

        let c = pool.allocate("c");
        assert_eq!(c, a);
        assert_eq!(pool[c], "c");
        assert_eq!(pool[b], "b");
    }

    #[test]
    fn double_free_is_detected() {
        let mut pool = Pool::new();
        let a = pool.allocate(1);
        assert_eq!(pool.deallocate(a), Some(1));
        assert_eq!(pool.deallocate(a), None);
        assert_eq!(pool.deallocate(PoolPtr(42)), None);
        assert!(pool.is_empty());
    }

    #[test]
    #[should_panic]
    fn dangling_index_panics() {
        let mut pool = Pool::new();
        let a = pool.allocate(1);
        pool.deallocate(a);
        let _value = pool[a];
    }

    #[quickcheck]
    fn matches_a_model(ops: Vec<(bool, u8)>) -> bool {
        let mut pool = Pool::new();
        let mut live: Vec<(PoolPtr, u8)> = Vec::new();

        for (alloc, x) in ops {
            if alloc || live.is_empty() {
                live.push((pool.allocate(x), x));
            } else {
                let (ptr, x) = live.remove(x as usize % live.len());
                if pool.deallocate(ptr) != Some(x) {
                    return false;
                }
            }
        }

        pool.len() == live.len() && live.iter().all(|&(ptr, x)| pool.get(ptr) == Some(&x))
    }
}
