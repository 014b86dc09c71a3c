use std::{
    alloc::{self, Layout},
    fmt,
    marker::PhantomData,
    mem,
    ops::{Deref, DerefMut},
    ptr::{self, NonNull},
};

/// Raw allocation that stores the values. It knows its capacity but
/// nothing about which slots are initialised.
struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates a buffer with zero capacity. Zero sized types never
    /// allocate, so they report an unbounded capacity.
    fn new() -> Self {
        let cap = if Self::IS_ZST { usize::MAX } else { 0 };

        Self {
            ptr: NonNull::dangling(),
            cap,
            _marker: PhantomData,
        }
    }

    fn with_capacity(cap: usize) -> Self {
        let mut buf = Self::new();
        if !Self::IS_ZST && cap > 0 {
            buf.grow_to(cap);
        }
        buf
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) if layout.size() <= isize::MAX as usize => layout,
            _ => panic!("Allocation too large"),
        }
    }

    /// Allocates the first slot if the capacity is zero, otherwise doubles
    /// the capacity.
    fn grow(&mut self) {
        let new_cap = if self.cap == 0 { 1 } else { self.cap * 2 };
        self.grow_to(new_cap);
    }

    fn grow_to(&mut self, new_cap: usize) {
        // A zero sized `T` starts at usize::MAX, so getting here means overflow.
        assert!(!Self::IS_ZST, "Capacity overflow");
        debug_assert!(new_cap > self.cap);

        let new_layout = Self::layout(new_cap);

        let new_ptr = if self.cap == 0 {
            unsafe { alloc::alloc(new_layout) }
        } else {
            unsafe {
                alloc::realloc(
                    self.ptr.as_ptr() as *mut u8,
                    Self::layout(self.cap),
                    new_layout.size(),
                )
            }
        };

        self.ptr = match NonNull::new(new_ptr as *mut T) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(new_layout),
        };

        self.cap = new_cap;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 && !Self::IS_ZST {
            unsafe {
                alloc::dealloc(self.ptr.as_ptr() as *mut u8, Self::layout(self.cap));
            }
        }
    }
}

/// Growable array list. Backs [`Stack`](crate::Stack) and the heap of
/// [`PriorityQueue`](crate::PriorityQueue).
pub struct Vector<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> Vector<T> {
    fn ptr(&self) -> *mut T {
        self.buf.ptr.as_ptr()
    }

    /// Creates an empty vector. Nothing is allocated until the first push.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with room for `cap` elements.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(cap),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.buf.cap
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.buf.grow();
        }

        unsafe {
            ptr::write(self.ptr().add(self.len), value);
        }

        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            unsafe { Some(ptr::read(self.ptr().add(self.len))) }
        }
    }

    /// Inserts `value` at `index`, shifting everything after it right.
    ///
    /// # Panics
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len, "Index out of bounds");

        if self.capacity() == self.len {
            self.buf.grow();
        }

        unsafe {
            ptr::copy(
                self.ptr().add(index),
                self.ptr().add(index + 1),
                self.len - index,
            );
            ptr::write(self.ptr().add(index), value);
        }

        self.len += 1;
    }

    /// Removes and returns the element at `index`, shifting everything
    /// after it left.
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "Index out of bounds");

        unsafe {
            self.len -= 1;
            let value = ptr::read(self.ptr().add(index));

            ptr::copy(
                self.ptr().add(index + 1),
                self.ptr().add(index),
                self.len - index,
            );

            value
        }
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    /// Moves every element out of the vector, front to back.
    pub fn drain(&mut self) -> Drain<'_, T> {
        let iter = RawIter::new(self);

        // If the Drain is leaked the elements leak too, but the vector
        // never sees them again.
        self.len = 0;

        Drain {
            iter,
            vec: PhantomData,
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        unsafe { std::slice::from_raw_parts(self.ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { std::slice::from_raw_parts_mut(self.ptr(), self.len) }
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut v = Vector::with_capacity(iter.size_hint().0);
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        unsafe {
            let iter = RawIter::new(&self);
            let buf = ptr::read(&self.buf);
            mem::forget(self);

            IntoIter { iter, _buf: buf }
        }
    }
}

/// Pair of pointers walking a slice whose elements are read out by value.
struct RawIter<T> {
    start: *const T,
    end: *const T,
}

impl<T> RawIter<T> {
    fn new(slice: &[T]) -> Self {
        RawIter {
            start: slice.as_ptr(),
            end: if mem::size_of::<T>() == 0 {
                (slice.as_ptr() as usize + slice.len()) as *const _
            } else if slice.is_empty() {
                slice.as_ptr()
            } else {
                unsafe { slice.as_ptr().add(slice.len()) }
            },
        }
    }
}

impl<T> Iterator for RawIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        unsafe {
            if mem::size_of::<T>() == 0 {
                self.start = (self.start as usize + 1) as *const _;
                Some(ptr::read(NonNull::<T>::dangling().as_ptr()))
            } else {
                let old_ptr = self.start;
                self.start = self.start.add(1);
                Some(ptr::read(old_ptr))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let elem_size = mem::size_of::<T>().max(1);
        let len = (self.end as usize - self.start as usize) / elem_size;

        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for RawIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }

        unsafe {
            if mem::size_of::<T>() == 0 {
                self.end = (self.end as usize - 1) as *const _;
                Some(ptr::read(NonNull::<T>::dangling().as_ptr()))
            } else {
                self.end = self.end.sub(1);
                Some(ptr::read(self.end))
            }
        }
    }
}

pub struct IntoIter<T> {
    _buf: RawBuf<T>,
    iter: RawIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

pub struct Drain<'a, T: 'a> {
    vec: PhantomData<&'a mut Vector<T>>,
    iter: RawIter<T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        for _ in &mut *self {}
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;
    use std::rc::Rc;

    #[test]
    fn test_basics() {
        let mut v = Vector::<i32>::new();
        assert!(v.is_empty());
        assert_eq!(v.pop(), None);

        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(&*v, &[1, 2, 3]);

        assert_eq!(v.pop(), Some(3));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn test_capacity_doubles() {
        let mut v = Vector::new();
        assert_eq!(v.capacity(), 0);

        let mut seen = Vec::new();
        for i in 0..9 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn test_insert_remove() {
        let mut v: Vector<i32> = (1..=5).collect();

        v.insert(0, 0);
        v.insert(6, 6);
        v.insert(3, 99);
        assert_eq!(&*v, &[0, 1, 2, 99, 3, 4, 5, 6]);

        assert_eq!(v.remove(3), 99);
        assert_eq!(v.remove(0), 0);
        assert_eq!(v.remove(v.len() - 1), 6);
        assert_eq!(&*v, &[1, 2, 3, 4, 5]);
        assert_eq!(v.len(), 5);
    }

    #[test]
    #[should_panic(expected = "Index out of bounds")]
    fn test_remove_out_of_bounds() {
        let mut v: Vector<i32> = (0..3).collect();
        v.remove(3);
    }

    #[test]
    fn test_into_iter_and_drain() {
        let v: Vector<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let mut iter = v.into_iter();
        assert_eq!(iter.next().as_deref(), Some("a"));
        assert_eq!(iter.next_back().as_deref(), Some("c"));
        assert_eq!(iter.size_hint(), (1, Some(1)));
        drop(iter);

        let mut v: Vector<i32> = (0..4).collect();
        let drained: Vec<i32> = v.drain().rev().collect();
        assert_eq!(drained, vec![3, 2, 1, 0]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drops_every_element() {
        let marker = Rc::new(());
        {
            let mut v = Vector::new();
            for _ in 0..10 {
                v.push(Rc::clone(&marker));
            }
            v.remove(4);
            let mut iter = v.drain();
            iter.next();
        }
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_zero_sized() {
        let mut v = Vector::new();
        for _ in 0..100 {
            v.push(());
        }
        assert_eq!(v.len(), 100);
        assert_eq!(v.into_iter().count(), 100);
    }
}
