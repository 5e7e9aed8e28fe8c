/*! Boolean algebra, shifts, and operator traits.

The word-wise operators (`&=`, `|=`, `^=`, `!`) act on the entire storage
buffer, padding included. This is sound because no query ever reads padding
without masking it first. The shifts, by contrast, work from the masked live
words, so padding never shifts into the live region.
!*/

use alloc::vec;
use core::ops::{
	BitAnd,
	BitAndAssign,
	BitOr,
	BitOrAssign,
	BitXor,
	BitXorAssign,
	Index,
	Not,
	Shl,
	ShlAssign,
	Shr,
	ShrAssign,
};

use log::debug;

use super::BitVector;
use crate::{
	error::{
		BitVectorError,
		Result,
	},
	mem::{
		self,
		Word,
	},
};

impl BitVector {
	/// `AND`s `rhs` into `self`, word by word.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::SizeMismatch`] if the two buffers hold
	/// different numbers of words. Vectors of different lengths are accepted
	/// so long as their buffers are the same size. `self` is unchanged on
	/// error.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut a = bitvector![1, 1, 0, 0];
	/// let b = bitvector![1, 0, 1, 0];
	/// a.try_and_assign(&b)?;
	/// assert_eq!(a, bitvector![1, 0, 0, 0]);
	///
	/// let wide = BitVector::with_len(33);
	/// assert!(a.try_and_assign(&wide).is_err());
	/// # Ok::<(), BitVectorError>(())
	/// ```
	#[inline]
	pub fn try_and_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
		self.zip_words(rhs, |l, r| *l &= r)
	}

	/// `OR`s `rhs` into `self`, word by word.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::SizeMismatch`] if the two buffers hold
	/// different numbers of words. `self` is unchanged on error.
	#[inline]
	pub fn try_or_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
		self.zip_words(rhs, |l, r| *l |= r)
	}

	/// `XOR`s `rhs` into `self`, word by word.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::SizeMismatch`] if the two buffers hold
	/// different numbers of words. `self` is unchanged on error.
	#[inline]
	pub fn try_xor_assign(&mut self, rhs: &Self) -> Result<&mut Self> {
		self.zip_words(rhs, |l, r| *l ^= r)
	}

	/// Produces a new vector of the same length with every bit inverted.
	///
	/// Every allocated word of the new buffer is the inverse of the matching
	/// source word, so its padding bits are generally set. They stay invisible
	/// to the bit-level API.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(8, 15);
	/// assert_eq!(bv.complement().to_string(), "[00001111] ");
	/// ```
	pub fn complement(&self) -> Self {
		Self {
			buf: self.buf.iter().map(|word| !word).collect(),
			len: self.len,
		}
	}

	/// Produces a new vector in which bit `i` holds the value of bit `i + n`
	/// of `self`.
	///
	/// The vacated bits at the back are cleared. If `n` is not less than the
	/// length, every bit of the result is cleared.
	///
	/// The result has the same length and allocated size as `self`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(16, 15);
	/// assert_eq!(bv.shifted_left(2).to_string(), "[11000000] [00000000] ");
	/// assert!(bv.shifted_left(16).none());
	/// ```
	pub fn shifted_left(&self, n: usize) -> Self {
		let mut out = self.zeroed();
		if n >= self.len {
			return out;
		}
		let skip = n >> mem::INDX;
		let by = n & mem::MASK;
		let elts = mem::elts(self.len);
		for (idx, slot) in out.buf[.. elts].iter_mut().enumerate() {
			let lo = self.live_word(idx + skip);
			*slot = match by {
				0 => lo,
				by => {
					let hi = self.live_word(idx + skip + 1);
					(lo >> by) | (hi << (mem::BITS - by))
				},
			};
		}
		out
	}

	/// Produces a new vector in which bit `i + n` holds the value of bit `i`
	/// of `self`.
	///
	/// The vacated bits at the front are cleared, and bits that move past
	/// the end are discarded. If `n` is not less than the length, every bit of
	/// the result is cleared.
	///
	/// The result has the same length and allocated size as `self`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(16, 7);
	/// assert_eq!(bv.shifted_right(3).to_string(), "[00011100] [00000000] ");
	/// assert!(bv.shifted_right(40).none());
	/// ```
	pub fn shifted_right(&self, n: usize) -> Self {
		let mut out = self.zeroed();
		if n >= self.len {
			return out;
		}
		let skip = n >> mem::INDX;
		let by = n & mem::MASK;
		let elts = mem::elts(self.len);
		for (idx, slot) in out.buf[.. elts].iter_mut().enumerate() {
			//  Destination words in front of the shift distance receive only
			//  vacated bits.
			let Some(src) = idx.checked_sub(skip) else {
				continue;
			};
			let cur = self.live_word(src);
			*slot = match (by, src.checked_sub(1)) {
				(0, _) => cur,
				(by, None) => cur << by,
				(by, Some(prev)) => {
					(cur << by) | (self.live_word(prev) >> (mem::BITS - by))
				},
			};
		}
		out.clear_padding();
		out
	}

	/// Shifts the vector towards index zero, in place.
	///
	/// See [`shifted_left`] for the exact behavior. The length and the
	/// allocated size are unchanged.
	///
	/// [`shifted_left`]: Self::shifted_left
	#[inline]
	pub fn shift_left(&mut self, n: usize) -> &mut Self {
		*self = self.shifted_left(n);
		self
	}

	/// Shifts the vector away from index zero, in place.
	///
	/// See [`shifted_right`] for the exact behavior. The length and the
	/// allocated size are unchanged.
	///
	/// [`shifted_right`]: Self::shifted_right
	#[inline]
	pub fn shift_right(&mut self, n: usize) -> &mut Self {
		*self = self.shifted_right(n);
		self
	}

	/// Produces a vector of the same length and allocated size, with every
	/// word cleared.
	fn zeroed(&self) -> Self {
		Self {
			buf: vec![0; self.buf.len()],
			len: self.len,
		}
	}

	/// Applies a word-wise operation between two equally-sized buffers.
	fn zip_words<F>(&mut self, rhs: &Self, op: F) -> Result<&mut Self>
	where F: Fn(&mut Word, Word) {
		let (left, right) = (self.buf.len(), rhs.buf.len());
		if left != right {
			let err = BitVectorError::SizeMismatch { left, right };
			debug!("{}", err);
			return Err(err);
		}
		self.buf
			.iter_mut()
			.zip(rhs.buf.iter().copied())
			.for_each(|(l, r)| op(l, r));
		Ok(self)
	}
}

macro_rules! bitwise {
	($($assign:ident :: $assign_fn:ident, $op:ident :: $op_fn:ident => $try:ident);+ $(;)?) => { $(
		/// # Panics
		///
		/// Panics if the two buffers hold different numbers of words. Use the
		/// fallible inherent method to handle that case.
		impl $assign<&BitVector> for BitVector {
			#[inline]
			fn $assign_fn(&mut self, rhs: &BitVector) {
				if let Err(err) = self.$try(rhs) {
					panic!("{}", err);
				}
			}
		}

		/// # Panics
		///
		/// Panics if the two buffers hold different numbers of words.
		impl $op<&BitVector> for BitVector {
			type Output = Self;

			#[inline]
			fn $op_fn(mut self, rhs: &BitVector) -> Self::Output {
				$assign::$assign_fn(&mut self, rhs);
				self
			}
		}
	)+ };
}

bitwise! {
	BitAndAssign::bitand_assign, BitAnd::bitand => try_and_assign;
	BitOrAssign::bitor_assign, BitOr::bitor => try_or_assign;
	BitXorAssign::bitxor_assign, BitXor::bitxor => try_xor_assign;
}

/** This implementation inverts all words in the buffer, in place. You cannot
rely on the value of bits in the buffer that are outside the live region.
**/
impl Not for BitVector {
	type Output = Self;

	#[inline]
	fn not(mut self) -> Self::Output {
		for word in self.buf.iter_mut() {
			*word = !*word;
		}
		self
	}
}

impl Not for &BitVector {
	type Output = BitVector;

	#[inline]
	fn not(self) -> Self::Output {
		self.complement()
	}
}

impl ShlAssign<usize> for BitVector {
	#[inline]
	fn shl_assign(&mut self, n: usize) {
		self.shift_left(n);
	}
}

impl ShrAssign<usize> for BitVector {
	#[inline]
	fn shr_assign(&mut self, n: usize) {
		self.shift_right(n);
	}
}

impl Shl<usize> for BitVector {
	type Output = Self;

	#[inline]
	fn shl(mut self, n: usize) -> Self::Output {
		self <<= n;
		self
	}
}

impl Shl<usize> for &BitVector {
	type Output = BitVector;

	#[inline]
	fn shl(self, n: usize) -> Self::Output {
		self.shifted_left(n)
	}
}

impl Shr<usize> for BitVector {
	type Output = Self;

	#[inline]
	fn shr(mut self, n: usize) -> Self::Output {
		self >>= n;
		self
	}
}

impl Shr<usize> for &BitVector {
	type Output = BitVector;

	#[inline]
	fn shr(self, n: usize) -> Self::Output {
		self.shifted_right(n)
	}
}

/** Read-only indexing of single bits.

# Panics

Panics if `index` is not less than the length. Use [`BitVector::get`] for a
checked read.
**/
impl Index<usize> for BitVector {
	type Output = bool;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		match self.get(index) {
			Ok(true) => &true,
			Ok(false) => &false,
			Err(err) => panic!("{}", err),
		}
	}
}
