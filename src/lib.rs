/*! `bitvector` – a growable `[bool]` packed into 32-bit words.

This crate provides a single collection, [`BitVector`], which stores a
runtime-sized sequence of bits in a buffer of `u32` words. Each bit in the live
region of the buffer is used, unlike `Vec<bool>` which spends a full byte on
every bit.

The vector keeps two sizes: its *length*, the number of bits it presents to the
API, and its *capacity*, the number of bits representable by the words it has
allocated. Capacity is always a whole number of words. The bits between the two
(the *padding*) carry no meaning, and every query that looks at the contents of
the vector masks them off before inspecting a word.

Bit `i` of the vector lives in word `i / 32`, at bit position `i % 32` counting
from the least significant bit. The rendering produced by [`Display`] prints
bits in index order, grouped by eight:

```rust
use bitvector::prelude::*;

let mut bv = BitVector::with_len(8);
bv.set(5, true)?;
assert_eq!(bv.to_string(), "[00000100] ");
# Ok::<(), BitVectorError>(())
```

All operations that can be handed an invalid argument return a
[`BitVectorError`] instead of panicking, and leave the vector untouched when
they do. The operator traits (`&=`, `<<`, `!`, indexing, …) are provided as
conveniences and panic where their fallible counterparts would return an error.

[`BitVector`]: crate::vec::BitVector
[`BitVectorError`]: crate::error::BitVectorError
[`Display`]: core::fmt::Display
!*/

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod error;
pub mod index;
pub mod mem;
pub mod prelude;
pub mod vec;

pub use self::{
	error::BitVectorError,
	vec::BitVector,
};
