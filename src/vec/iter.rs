//! Iteration over, and collection into, `BitVector`.

use core::iter::{
	FusedIterator,
	Extend,
	FromIterator,
};

use super::BitVector;
use crate::index::BitIdx;

/// A borrowing iterator over the live bits of a [`BitVector`], in index order.
///
/// This struct is created by [`BitVector::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
	/// The vector being read.
	bits: &'a BitVector,
	/// The next index to yield from the front.
	head: usize,
	/// One past the next index to yield from the back.
	tail: usize,
}

impl Iter<'_> {
	#[inline]
	fn read(&self, index: usize) -> bool {
		let at = BitIdx::split(index);
		at.read(self.bits.buf[at.word()])
	}
}

impl Iterator for Iter<'_> {
	type Item = bool;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.head == self.tail {
			return None;
		}
		let bit = self.read(self.head);
		self.head += 1;
		Some(bit)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.tail - self.head;
		(len, Some(len))
	}

	#[inline]
	fn nth(&mut self, n: usize) -> Option<Self::Item> {
		self.head = self.head.saturating_add(n).min(self.tail);
		self.next()
	}
}

impl DoubleEndedIterator for Iter<'_> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.head == self.tail {
			return None;
		}
		self.tail -= 1;
		Some(self.read(self.tail))
	}
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl BitVector {
	/// Iterates over the live bits, in index order.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(4, 0b0101);
	/// let bits: Vec<bool> = bv.iter().collect();
	/// assert_eq!(bits, [true, false, true, false]);
	/// assert_eq!(bv.iter().rev().next(), Some(false));
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			bits: self,
			head: 0,
			tail: self.len,
		}
	}
}

impl<'a> IntoIterator for &'a BitVector {
	type IntoIter = Iter<'a>;
	type Item = bool;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Appends each bit of the stream with [`BitVector::push`].
impl Extend<bool> for BitVector {
	fn extend<I>(&mut self, src: I)
	where I: IntoIterator<Item = bool> {
		for bit in src {
			self.push(bit);
		}
	}
}

impl<'a> Extend<&'a bool> for BitVector {
	#[inline]
	fn extend<I>(&mut self, src: I)
	where I: IntoIterator<Item = &'a bool> {
		self.extend(src.into_iter().copied());
	}
}

impl FromIterator<bool> for BitVector {
	/// Collects a stream of bits into a vector.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	/// use std::iter::repeat;
	///
	/// let bv: BitVector = repeat(true)
	///   .take(4)
	///   .chain(repeat(false).take(4))
	///   .collect();
	/// assert_eq!(bv.as_raw_slice(), &[0x0F]);
	/// ```
	fn from_iter<I>(src: I) -> Self
	where I: IntoIterator<Item = bool> {
		let mut bv = Self::new();
		bv.extend(src);
		bv
	}
}
