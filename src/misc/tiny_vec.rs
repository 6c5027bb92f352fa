use std::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// Inline vector with a fixed capacity of `N` copyable elements.
/// Used for step sequences, which never hold more than four entries.
#[derive(Clone, Copy)]
pub struct TinyVec<T, const N: usize>
where
    T: Copy,
{
    buf: [MaybeUninit<T>; N],
    len: u8,
}

impl<T, const N: usize> TinyVec<T, N>
where
    T: Copy,
{
    pub const fn new() -> Self {
        const { assert!(N <= 255, "TinyVec supports up to 255 elements") }
        TinyVec { buf: [const { MaybeUninit::uninit() }; N], len: 0 }
    }

    /// Appends an element. Panics when the vector is full.
    pub fn push(&mut self, val: T) {
        assert!(!self.is_full(), "TinyVec is full (capacity {N})");
        self.buf[self.len as usize].write(val);
        self.len += 1;
    }

    pub fn is_full(&self) -> bool {
        self.len as usize == N
    }
}

impl<T: Copy, const N: usize> Default for TinyVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> Deref for TinyVec<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Only the first `self.len` elements are initialized
        unsafe { std::slice::from_raw_parts(self.buf.as_ptr() as *const T, self.len as usize) }
    }
}

impl<T: Copy, const N: usize> DerefMut for TinyVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Only the first `self.len` elements are initialized
        unsafe { std::slice::from_raw_parts_mut(self.buf.as_mut_ptr() as *mut T, self.len as usize) }
    }
}

impl<T: Copy, const N: usize> FromIterator<T> for TinyVec<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = TinyVec::new();
        for val in iter {
            vec.push(val);
        }
        vec
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for TinyVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Copy + Eq, const N: usize> Eq for TinyVec<T, N> {}

impl<T: Copy + PartialOrd, const N: usize> PartialOrd for TinyVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).partial_cmp(&**other)
    }
}

impl<T: Copy + Ord, const N: usize> Ord for TinyVec<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        (**self).cmp(&**other)
    }
}

impl<T: Copy + Hash, const N: usize> Hash for TinyVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl<T: Copy + Debug, const N: usize> Debug for TinyVec<T, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push() {
        let mut vec: TinyVec<u8, 2> = TinyVec::new();
        assert!(vec.is_empty());
        vec.push(3);
        vec.push(1);
        assert_eq!(&*vec, &[3, 1]);
        assert!(vec.is_full());
    }

    #[test]
    #[should_panic(expected = "TinyVec is full")]
    fn test_push_past_capacity() {
        let mut vec: TinyVec<u8, 2> = TinyVec::new();
        vec.push(1);
        vec.push(2);
        vec.push(3);
    }

    #[test]
    fn test_equality_ignores_spare_capacity() {
        let mut a: TinyVec<u8, 4> = [5, 2].into_iter().collect();
        let b: TinyVec<u8, 4> = [2, 5].into_iter().collect();
        assert_ne!(a, b);
        a.sort_unstable();
        assert_eq!(a, b);
        assert!(!a.is_full());
    }
}
