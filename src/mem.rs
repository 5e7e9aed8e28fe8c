/*! Storage arithmetic.

This module describes the word type used to hold bits, and the conversions
between bit counts and word counts. Everything here is a `const` item or a pure
function; nothing holds state.
!*/

use core::mem;

/// The storage element of a [`BitVector`].
///
/// [`BitVector`]: crate::vec::BitVector
pub type Word = u32;

/// The number of bytes in a storage word.
pub const BYTES: usize = mem::size_of::<Word>();

/// The number of bits in a storage word.
pub const BITS: usize = BYTES * 8;

/// The number of bits required to store an index in the range `0 .. BITS`.
pub const INDX: u32 = BITS.trailing_zeros();

/// A mask over all bits that can be used as an index within a word.
pub const MASK: usize = BITS - 1;

/// The word with every bit set.
pub const ALL: Word = !0;

/** Computes the number of words required to store some number of bits.

# Parameters

- `bits`: The number of bits to store.

# Returns

The number of [`Word`]s required to store `bits`. This is `0` only when `bits`
is `0`.
**/
#[inline]
pub const fn elts(bits: usize) -> usize {
	(bits >> INDX) + (bits & MASK != 0) as usize
}

/** Computes the live-bit mask of the final word of a region.

# Parameters

- `bits`: The length, in bits, of the live region.

# Returns

If `bits` ends partway through a word, this returns the mask that selects the
live bits of that word (its low `bits % BITS` bits). If the region ends exactly
on a word boundary, the final word is fully live and this returns `None`.
**/
#[inline]
pub const fn tail_mask(bits: usize) -> Option<Word> {
	match bits & MASK {
		0 => None,
		n => Some(ALL >> (BITS - n)),
	}
}

/** Counts the words in a region that are entirely live.

# Parameters

- `bits`: The length, in bits, of the live region.

# Returns

The number of leading words of a region of length `bits` that hold no padding.
This is `elts(bits)` when `bits` is a whole number of words, and one less
otherwise.
**/
#[inline]
pub const fn full_elts(bits: usize) -> usize {
	bits >> INDX
}
