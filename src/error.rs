//! Failure reports for operations on a [`BitVector`].
//!
//! [`BitVector`]: crate::vec::BitVector

use thiserror::Error;

/// The ways an operation on a [`BitVector`] can reject its arguments.
///
/// Every operation that returns one of these has validated its inputs before
/// touching the vector, so the vector is unchanged when an error is returned.
///
/// [`BitVector`]: crate::vec::BitVector
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum BitVectorError {
	/// A bit index was not in the live region `0 .. len`.
	#[error("bit index {index} is out of range for a vector of {len} bits")]
	IndexOutOfRange {
		/// The rejected index.
		index: usize,
		/// The live length of the vector at the time of the access.
		len: usize,
	},
	/// A bitwise operator was applied to two vectors whose buffers hold
	/// different numbers of words.
	#[error("operand buffers differ in size: {left} words against {right} words")]
	SizeMismatch {
		/// Word count of the receiving vector.
		left: usize,
		/// Word count of the operand.
		right: usize,
	},
	/// A vector was asked to take on a length it cannot have.
	#[error("{len} is not a valid vector length")]
	InvalidSize {
		/// The rejected length.
		len: usize,
	},
}

/// Shorthand for results carrying a [`BitVectorError`].
pub type Result<T> = core::result::Result<T, BitVectorError>;
