//! Length management, bit access, and whole-vector queries.

use alloc::{
	vec,
	vec::Vec,
};
use core::cmp;

use log::{
	debug,
	trace,
};
use tap::TapFallible;

use super::BitVector;
use crate::{
	error::{
		BitVectorError,
		Result,
	},
	index::BitIdx,
	mem::{
		self,
		Word,
	},
};

impl BitVector {
	/// Returns the number of live bits in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns the number of bytes in the storage buffer.
	///
	/// This counts every allocated word, including any that lie wholly past
	/// the live bits after a growth step.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_len(32);
	/// assert_eq!(bv.size_in_bytes(), 4);
	/// bv.push(false);
	/// assert_eq!(bv.size_in_bytes(), 8);
	/// ```
	#[inline]
	pub fn size_in_bytes(&self) -> usize {
		self.buf.len() * mem::BYTES
	}

	/// Tests if the vector has no storage, and thus no bits.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Changes the length of the vector.
	///
	/// The buffer is reällocated to the smallest number of words that can hold
	/// `new_len` bits. Bits in `0 .. min(len, new_len)` keep their values. When
	/// the vector grows, every bit in `len .. new_len` is set to `fill`; when it
	/// shrinks, bits past `new_len` are discarded.
	///
	/// # Parameters
	///
	/// - `&mut self`
	/// - `new_len`: The length of the vector after resizing.
	/// - `fill`: The value given to bits added by growth.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::InvalidSize`] if `new_len` is zero. Use
	/// [`clear`] to empty a vector. The vector is unchanged on error.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_seed(8, 0b1000_1000);
	/// bv.resize(11, true)?;
	/// assert_eq!(bv.to_string(), "[00010001] [111] ");
	/// bv.resize(4, false)?;
	/// assert_eq!(bv.to_string(), "[0001] ");
	/// assert!(bv.resize(0, false).is_err());
	/// # Ok::<(), BitVectorError>(())
	/// ```
	///
	/// [`clear`]: Self::clear
	pub fn resize(&mut self, new_len: usize, fill: bool) -> Result<()> {
		if new_len == 0 {
			debug!("refusing to resize a vector of {} bits to zero", self.len);
			return Err(BitVectorError::InvalidSize { len: new_len });
		}
		if new_len == self.len {
			return Ok(());
		}

		let keep = cmp::min(self.len, new_len);
		let kept = mem::elts(keep);
		let mut buf = vec![0 as Word; mem::elts(new_len)];
		buf[.. kept].copy_from_slice(&self.buf[.. kept]);

		//  Build the replacement off to the side, so that `self` is only
		//  touched once the new state is complete.
		let mut out = Self { buf, len: keep };
		out.clear_padding();
		if fill {
			out.fill_ones(keep .. new_len);
		}
		out.len = new_len;

		trace!(
			"resized bit vector from {} to {} bits ({} -> {} words)",
			self.len,
			new_len,
			self.buf.len(),
			out.buf.len(),
		);
		*self = out;
		Ok(())
	}

	/// Appends a bit to the back of the vector.
	///
	/// An empty vector allocates a single word. A full vector (one whose
	/// length equals its capacity) doubles its capacity first. Previously
	/// stored bits are never disturbed by growth, so over `n` pushes the buffer
	/// is copied `O(log n)` times and each push is `O(1)` amortized.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::new();
	/// bv.push(true);
	/// assert_eq!(bv.len(), 1);
	/// assert_eq!(bv.capacity(), 32);
	/// assert!(bv[0]);
	/// ```
	pub fn push(&mut self, value: bool) {
		if self.buf.is_empty() {
			trace!("allocating initial bit storage");
			self.buf.push(0);
		}
		else if self.len == self.capacity() {
			let words = self.buf.len();
			trace!("growing bit storage from {} to {} words", words, words * 2);
			self.buf.resize(words * 2, 0);
		}
		let at = BitIdx::split(self.len);
		at.write(&mut self.buf[at.word()], value);
		self.len += 1;
	}

	/// Removes the last bit from the vector and returns it.
	///
	/// Capacity is retained, except that removing the only remaining bit
	/// releases the buffer. Returns `None` if the vector is empty.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = bitvector![0, 1];
	/// assert_eq!(bv.pop(), Some(true));
	/// assert_eq!(bv.pop(), Some(false));
	/// assert_eq!(bv.pop(), None);
	/// assert!(bv.is_empty());
	/// ```
	pub fn pop(&mut self) -> Option<bool> {
		let last = self.len.checked_sub(1)?;
		let at = BitIdx::split(last);
		let bit = at.read(self.buf[at.word()]);
		if last == 0 {
			self.clear();
		}
		else {
			self.len = last;
		}
		Some(bit)
	}

	/// Reads the bit at `index`.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::IndexOutOfRange`] if `index` is not less than
	/// the length.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let bv = BitVector::with_seed(4, 0b0010);
	/// assert_eq!(bv.get(1), Ok(true));
	/// assert_eq!(bv.get(2), Ok(false));
	/// assert!(bv.get(4).is_err());
	/// ```
	#[inline]
	pub fn get(&self, index: usize) -> Result<bool> {
		self.locate(index).map(|at| at.read(self.buf[at.word()]))
	}

	/// Writes `value` into the bit at `index`.
	///
	/// Returns the vector, so that writes may be chained.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::IndexOutOfRange`] if `index` is not less than
	/// the length. The vector is unchanged on error.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_len(8);
	/// bv.set(7, true)?.set(3, true)?;
	/// assert_eq!(bv.to_string(), "[00010001] ");
	/// # Ok::<(), BitVectorError>(())
	/// ```
	#[inline]
	pub fn set(&mut self, index: usize, value: bool) -> Result<&mut Self> {
		let at = self.locate(index)?;
		at.write(&mut self.buf[at.word()], value);
		Ok(self)
	}

	/// Clears the bit at `index`.
	///
	/// This is `set(index, false)`.
	///
	/// # Errors
	///
	/// Returns [`BitVectorError::IndexOutOfRange`] if `index` is not less than
	/// the length. The vector is unchanged on error.
	#[inline]
	pub fn reset(&mut self, index: usize) -> Result<&mut Self> {
		self.set(index, false)
	}

	/// Sets every live bit.
	///
	/// Padding bits, including any words wholly past the live region, are
	/// cleared rather than set.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_len(40);
	/// bv.set_all();
	/// assert_eq!(bv.count_ones(), 40);
	/// assert_eq!(bv.as_raw_slice(), &[!0, 0xFF]);
	/// ```
	pub fn set_all(&mut self) -> &mut Self {
		let full = mem::full_elts(self.len);
		let tail = mem::tail_mask(self.len);
		for (idx, word) in self.buf.iter_mut().enumerate() {
			*word = match (idx.cmp(&full), tail) {
				(cmp::Ordering::Less, _) => mem::ALL,
				(cmp::Ordering::Equal, Some(mask)) => mask,
				_ => 0,
			};
		}
		self
	}

	/// Clears every bit in the storage buffer, padding included.
	pub fn reset_all(&mut self) -> &mut Self {
		self.buf.iter_mut().for_each(|word| *word = 0);
		self
	}

	/// Tests if at least one live bit is set.
	///
	/// Padding bits are masked off before testing, so they never produce a
	/// false positive.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::with_len(33);
	/// assert!(!bv.any());
	/// bv.set(32, true)?;
	/// assert!(bv.any());
	/// # Ok::<(), BitVectorError>(())
	/// ```
	#[inline]
	pub fn any(&self) -> bool {
		self.live_words().any(|word| word != 0)
	}

	/// Tests if every live bit is cleared.
	///
	/// This is `!self.any()`, and is vacuously true for an empty vector.
	#[inline]
	pub fn none(&self) -> bool {
		!self.any()
	}

	/// Tests if every live bit is set.
	///
	/// This is vacuously true for an empty vector.
	#[inline]
	pub fn all(&self) -> bool {
		self.count_zeros() == 0
	}

	/// Counts the live bits that are set.
	///
	/// Full words are counted directly; the final partial word is masked
	/// before it is counted.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitvector::prelude::*;
	///
	/// let mut bv = BitVector::repeat(true, 33);
	/// bv.reset(15)?;
	/// assert_eq!(bv.count_ones(), 32);
	/// # Ok::<(), BitVectorError>(())
	/// ```
	#[inline]
	pub fn count_ones(&self) -> usize {
		self.live_words()
			.map(|word| word.count_ones() as usize)
			.sum()
	}

	/// Counts the live bits that are cleared.
	#[inline]
	pub fn count_zeros(&self) -> usize {
		self.len - self.count_ones()
	}

	/// Consumes the vector and returns its storage words.
	///
	/// The result is the whole buffer, padding included.
	#[inline]
	pub fn into_vec(self) -> Vec<Word> {
		self.buf
	}

	/// Checks an index against the live length and splits it into storage
	/// coördinates.
	fn locate(&self, index: usize) -> Result<BitIdx> {
		BitIdx::checked(index, self.len).tap_err(|err| debug!("{}", err))
	}

	/// Sets every bit in `range`, which must lie within the buffer.
	fn fill_ones(&mut self, range: core::ops::Range<usize>) {
		let mut idx = range.start;
		while idx < range.end {
			let at = BitIdx::split(idx);
			let head = at.bit() as usize;
			let width = cmp::min(mem::BITS - head, range.end - idx);
			self.buf[at.word()] |= (mem::ALL >> (mem::BITS - width)) << head;
			idx += width;
		}
	}
}
