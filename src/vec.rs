/*! A dynamically-sized vector of bits.

[`BitVector`] owns one buffer of [`Word`]s, plus the number of bits in that
buffer that are live. All of its behavior – construction, resizing, bit access,
Boolean algebra, shifts, and rendering – is built on that one structure.

The inherent API is split across this module and [`api`]; operator traits live
in [`ops`], the remaining standard traits in [`traits`], and iteration in
[`iter`].

[`Word`]: crate::mem::Word
!*/

use alloc::{
	vec,
	vec::Vec,
};
use core::{
	mem as core_mem,
	slice,
};

use log::trace;
use tap::Tap;

use crate::{
	index::BitIdx,
	mem::{
		self,
		Word,
	},
};

mod api;
mod iter;
mod ops;
mod traits;

pub use self::iter::Iter;

/** A vector of bits, packed into 32-bit words.

# Layout

Bit `i` is stored in word `i / 32` of the buffer, at bit position `i % 32`
counting up from the least significant bit.

# Length and Capacity

The vector tracks its *length* (the number of bits it presents, indices
`0 .. len`) separately from its *capacity* (the number of bits its buffer can
represent). Capacity is always a whole number of words and never less than the
length. A vector with no bits has no buffer at all, and a vector with a buffer
always has at least one bit.

Bits in `len .. capacity` are *padding*. Their values are not part of the
vector’s contents: they may be disturbed by the word-wise operators (`!`, `&=`,
`|=`, `^=`), but every query masks them off, so they are never observable
through [`get`], [`any`], [`count_ones`], comparison, or rendering.

# Ownership

The buffer is owned by exactly one vector. [`Clone`] produces an independent
buffer; [`swap`] and moves exchange buffers without copying them.

[`any`]: Self::any
[`count_ones`]: Self::count_ones
[`get`]: Self::get
[`swap`]: Self::swap
**/
pub struct BitVector {
	/// The storage words. Its length is the capacity of the vector, in words.
	buf: Vec<Word>,
	/// The number of live bits.
	len: usize,
}

impl BitVector {
	/// Constructs a new, empty, `BitVector`.
	///
	/// The vector will not allocate until bits are pushed onto it.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::new();
	/// assert!(bv.is_empty());
	/// assert_eq!(bv.capacity(), 0);
	/// ```
	#[inline]
	pub const fn new() -> Self {
		Self {
			buf: Vec::new(),
			len: 0,
		}
	}

	/// Constructs a vector of `len` bits, all cleared.
	///
	/// The buffer is the smallest number of words that can hold `len` bits. A
	/// `len` of zero produces the empty vector.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_len(32);
	/// assert_eq!(bv.len(), 32);
	/// assert_eq!(bv.size_in_bytes(), 4);
	/// assert!(bv.none());
	/// ```
	#[inline]
	pub fn with_len(len: usize) -> Self {
		Self::with_seed(len, 0)
	}

	/// Constructs a vector of `len` bits, initializing its front from a seed.
	///
	/// # Parameters
	///
	/// - `len`: The number of bits in the new vector.
	/// - `seed`: An integer whose low bits become the first bits of the vector.
	///   Bit `k` of `seed` becomes bit `k` of the vector, for `k` below both the
	///   word width and `len`. The rest of `seed` is ignored.
	///
	/// # Returns
	///
	/// A vector of `len` bits, with every bit not taken from `seed` cleared. A
	/// `len` of zero produces the empty vector.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(16, 7);
	/// assert_eq!(bv.to_string(), "[11100000] [00000000] ");
	/// ```
	pub fn with_seed(len: usize, seed: u64) -> Self {
		if len == 0 {
			return Self::new();
		}
		let mut buf = vec![0 as Word; mem::elts(len)];
		let live = match len {
			n if n < mem::BITS => mem::ALL >> (mem::BITS - n),
			_ => mem::ALL,
		};
		buf[0] = seed as Word & live;
		Self { buf, len }
	}

	/// Constructs a vector of `len` copies of `bit`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::repeat(true, 40);
	/// assert_eq!(bv.count_ones(), 40);
	/// ```
	#[inline]
	pub fn repeat(bit: bool, len: usize) -> Self {
		Self::with_len(len).tap_mut(|bv| {
			if bit {
				bv.set_all();
			}
		})
	}

	/// Returns the number of bits the vector can hold without reallocating.
	///
	/// This is always a multiple of the word width.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.len() * mem::BITS
	}

	/// Views the storage buffer as words.
	///
	/// Padding bits in the final words are visible through this view and
	/// carry no meaning.
	#[inline]
	pub fn as_raw_slice(&self) -> &[Word] {
		&self.buf
	}

	/// Views the storage buffer as mutable words.
	///
	/// Writes to padding bits are permitted, and are never observed by the
	/// bit-level API.
	#[inline]
	pub fn as_mut_raw_slice(&mut self) -> &mut [Word] {
		&mut self.buf
	}

	/// Views the storage buffer as bytes, in the target’s native byte order.
	///
	/// This is the same memory as [`as_raw_slice`], not a copy.
	///
	/// [`as_raw_slice`]: Self::as_raw_slice
	#[inline]
	pub fn as_raw_bytes(&self) -> &[u8] {
		let words = self.buf.as_slice();
		//  `u8` has no alignment requirement and every byte of an initialized
		//  `u32` is initialized, so the word region may be read as bytes for
		//  as long as the borrow of `self` lives.
		unsafe {
			slice::from_raw_parts(
				words.as_ptr().cast::<u8>(),
				words.len() * mem::BYTES,
			)
		}
	}

	/// Exchanges the entire state of two vectors, without copying either
	/// buffer.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut a = BitVector::repeat(true, 32);
	/// let mut b = BitVector::with_len(8);
	/// a.swap(&mut b);
	/// assert_eq!(a.len(), 8);
	/// assert_eq!(b.count_ones(), 32);
	/// ```
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		core_mem::swap(self, other);
	}

	/// Releases the buffer and returns the vector to the empty state.
	///
	/// Clearing an empty vector does nothing.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_len(100);
	/// bv.clear();
	/// assert!(bv.is_empty());
	/// assert_eq!(bv.len(), 0);
	/// bv.clear();
	/// assert!(bv.is_empty());
	/// ```
	pub fn clear(&mut self) {
		if self.buf.is_empty() {
			return;
		}
		trace!("releasing {} words of bit storage", self.buf.len());
		self.buf = Vec::new();
		self.len = 0;
	}

	/// Reads the live value of a storage word, with padding bits cleared.
	///
	/// Words past the end of the live region read as zero.
	#[inline]
	pub(crate) fn live_word(&self, idx: usize) -> Word {
		let elts = mem::elts(self.len);
		match self.buf.get(idx) {
			Some(&word) if idx + 1 < elts => word,
			Some(&word) if idx + 1 == elts => {
				word & mem::tail_mask(self.len).unwrap_or(mem::ALL)
			},
			_ => 0,
		}
	}

	/// Iterates over the words of the live region, with padding bits
	/// cleared.
	#[inline]
	pub(crate) fn live_words(&self) -> impl Iterator<Item = Word> + '_ {
		(0 .. mem::elts(self.len)).map(move |idx| self.live_word(idx))
	}

	/// Clears the padding bits of the final live word.
	///
	/// Words wholly past the live region are left alone.
	#[inline]
	pub(crate) fn clear_padding(&mut self) {
		if let Some(mask) = mem::tail_mask(self.len) {
			let last = BitIdx::split(self.len).word();
			self.buf[last] &= mask;
		}
	}
}

#[cfg(test)]
mod tests;
