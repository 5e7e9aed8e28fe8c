//! Constructor macros for [`BitVector`].
//!
//! [`BitVector`]: crate::vec::BitVector

/** Constructs a new [`BitVector`] from a bit-pattern description.

This macro takes the [`vec!`] argument syntax: it may be invoked with either a
sequence of bit expressions, or a single bit expression and a repetition
counter.

# Argument Rules

Bit expressions are converted to `bool` through the expression `$val != 0`.
Any non-zero integer becomes `true`, and `0` becomes `false`. The repetition
counter may be any `usize` expression, including runtime values.

# Examples

```rust
use bitvector::prelude::*;

let a = bitvector![0, 1, 0, 1, 2];
assert_eq!(a.len(), 5);
assert_eq!(a.count_ones(), 3);

let b = bitvector![1; 40];
assert_eq!(b.len(), 40);
assert_eq!(b.count_ones(), 40);

let c = bitvector![];
assert!(c.is_empty());
```

[`BitVector`]: crate::vec::BitVector
[`vec!`]: macro@alloc::vec
**/
#[macro_export]
macro_rules! bitvector {
	($val:expr; $len:expr) => {
		$crate::vec::BitVector::repeat($val != 0, $len)
	};

	($($val:expr),* $(,)?) => {
		<$crate::vec::BitVector as ::core::iter::FromIterator<bool>>::from_iter(
			[$($val != 0),*]
		)
	};
}
