use core::{ops::Index, slice::SliceIndex};
use tinyvec::ArrayVec;
use zeroize::DefaultIsZeroes;

pub mod coef;
pub mod helper;

/// Fixed-capacity byte string that is wiped when zeroized.
///
/// Used for private key preimages, which are `Copy` inside the key and are zeroized together with it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArrayVecZeroize<T, const N: usize>(pub ArrayVec<[T; N]>)
where
    T: Copy + Default;

impl<T, const N: usize> DefaultIsZeroes for ArrayVecZeroize<T, N> where T: Copy + Default {}

impl<T, const N: usize> Default for ArrayVecZeroize<T, N>
where
    T: Copy + Default,
{
    #[inline]
    fn default() -> Self {
        Self(ArrayVec::from([T::default(); N]))
    }
}

impl<T, Idx, const N: usize> Index<Idx> for ArrayVecZeroize<T, N>
where
    T: Copy + Default,
    Idx: SliceIndex<[T], Output = T>,
{
    type Output = T;
    #[inline]
    fn index(&self, index: Idx) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> ArrayVecZeroize<T, N>
where
    T: Copy + Default,
{
    /// Creates a value holding `len` default elements.
    #[inline]
    pub fn with_len(len: usize) -> Self {
        Self(ArrayVec::from_array_len([T::default(); N], len))
    }

    #[inline]
    pub fn from_slice(data: &[T]) -> Self {
        let mut result = Self::with_len(data.len());
        result.as_mut_slice().copy_from_slice(data);
        result
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.0.as_mut_slice()
    }
}
