/*! General trait implementations for `BitVector`.

The operator traits are defined in the `ops` module.
!*/

use alloc::vec::Vec;
use core::{
	fmt::{
		self,
		Debug,
		Display,
		Formatter,
		Write,
	},
	hash::{
		Hash,
		Hasher,
	},
};

use wyz::fmt::FmtForward;

use super::BitVector;

/// Deep copy: the clone owns a fresh buffer with as many words as the source’s,
/// padding included.
impl Clone for BitVector {
	fn clone(&self) -> Self {
		Self {
			buf: self.buf.clone(),
			len: self.len,
		}
	}

	fn clone_from(&mut self, source: &Self) {
		if source.is_empty() {
			self.clear();
			return;
		}
		self.buf.clone_from(&source.buf);
		self.len = source.len;
	}
}

impl Default for BitVector {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl Eq for BitVector {}

/** Tests if two `BitVector`s are semantically – not bitwise – equal.

The equality condition requires that they have the same number of live bits and
that each pair of bits in index order are identical. Capacity and padding bits
do not participate.
**/
impl PartialEq for BitVector {
	fn eq(&self, rhs: &Self) -> bool {
		self.len == rhs.len && self.live_words().eq(rhs.live_words())
	}
}

impl Hash for BitVector {
	fn hash<H>(&self, hasher: &mut H)
	where H: Hasher {
		self.len.hash(hasher);
		self.live_words().for_each(|word| word.hash(hasher));
	}
}

/** Prints the live bits in groups of eight.

Each group is wrapped in brackets and followed by a single space, so the output
ends with a trailing space. Bits are printed in index order, so bit 0 is the
leftmost character of the first group. A final group of fewer than eight bits
is printed short. An empty vector prints nothing.

# Examples

```rust
use bitvector::prelude::*;

let bv = bitvector![1, 0, 0, 0, 0, 0, 0, 1, 1, 1];
assert_eq!(bv.to_string(), "[10000001] [11] ");
assert_eq!(BitVector::new().to_string(), "");
```
**/
impl Display for BitVector {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		for (idx, bit) in self.iter().enumerate() {
			if idx % 8 == 0 {
				fmt.write_char('[')?;
			}
			fmt.write_char(if bit { '1' } else { '0' })?;
			if idx % 8 == 7 || idx + 1 == self.len {
				fmt.write_str("] ")?;
			}
		}
		Ok(())
	}
}

/// Renders the vector’s metadata and its raw storage words in binary,
/// padding included.
impl Debug for BitVector {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		let words = self
			.buf
			.iter()
			.map(FmtForward::fmt_binary)
			.collect::<Vec<_>>();
		fmt.debug_struct("BitVector")
			.field("len", &self.len)
			.field("capacity", &self.capacity())
			.field("words", &words)
			.finish()
	}
}
