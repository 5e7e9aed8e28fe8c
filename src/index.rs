/*! Typed addressing of single bits.

A logical bit index is meaningless to the storage buffer until it has been split
into the word that holds it and the position of the bit inside that word. The
[`BitIdx`] type is the product of that split. It can only be produced from an
index that has been checked against a length, so every `BitIdx` that reaches
the buffer is known to address a live bit.
!*/

use core::fmt::{
	self,
	Debug,
	Display,
	Formatter,
};

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

/** The location of one bit inside a word buffer.

# Validity

`bit` is always in the range `0 .. mem::BITS`. Values of this type are only
constructed by this crate, either from an index that has been checked against a
length ([`BitIdx::checked`]) or from arithmetic known to stay in bounds.
**/
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitIdx {
	/// Index of the word holding the bit.
	word: usize,
	/// Position of the bit within its word, counted from the least significant
	/// bit.
	bit: u8,
}

impl BitIdx {
	/// Splits a logical index into its word and bit coördinates, without any
	/// bounds check.
	#[inline]
	pub(crate) const fn split(index: usize) -> Self {
		Self {
			word: index >> mem::INDX,
			bit: (index & mem::MASK) as u8,
		}
	}

	/// Splits a logical index, checking it against a live length.
	///
	/// # Parameters
	///
	/// - `index`: The logical bit index to address.
	/// - `len`: The number of live bits in the region being addressed.
	///
	/// # Returns
	///
	/// The word and bit coördinates of `index`, or
	/// [`BitVectorError::IndexOutOfRange`] if `index` is not in `0 .. len`.
	#[inline]
	pub fn checked(index: usize, len: usize) -> Result<Self> {
		if index >= len {
			return Err(BitVectorError::IndexOutOfRange { index, len });
		}
		Ok(Self::split(index))
	}

	/// The index of the word that holds this bit.
	#[inline]
	pub fn word(self) -> usize {
		self.word
	}

	/// The position of this bit within its word.
	#[inline]
	pub fn bit(self) -> u8 {
		self.bit
	}

	/// Produces the one-hot selector of this bit within its word.
	#[inline]
	pub fn select(self) -> Word {
		1 << self.bit
	}

	/// Reconstructs the logical index this location was split from.
	#[inline]
	pub fn value(self) -> usize {
		(self.word << mem::INDX) | self.bit as usize
	}

	/// Reads this bit out of a word.
	#[inline]
	pub(crate) fn read(self, word: Word) -> bool {
		word & self.select() != 0
	}

	/// Writes a value into this bit of a word, leaving the other bits alone.
	#[inline]
	pub(crate) fn write(self, word: &mut Word, value: bool) {
		let sel = self.select();
		if value {
			*word |= sel;
		}
		else {
			*word &= !sel;
		}
	}
}

impl Debug for BitIdx {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("BitIdx")
			.field("word", &self.word)
			.field("bit", &self.bit)
			.finish()
	}
}

impl Display for BitIdx {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		write!(fmt, "{}.{}", self.word, self.bit)
	}
}
