/*! Symbol export.

This module collects the general public API into a single spot for inclusion, as
`use bitvector::prelude::*;`, without polluting the root namespace of the crate.
!*/

pub use crate::{
	bitvector,
	error::BitVectorError,
	vec::BitVector,
};
