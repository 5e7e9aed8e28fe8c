#![cfg(test)]

use alloc::{
	format,
	string::ToString,
	vec::Vec,
};

use static_assertions::*;

use crate::{
	mem,
	prelude::*,
};

assert_impl_all!(BitVector: Send, Sync, Clone, Default, Eq, core::hash::Hash);
assert_eq_size!(BitVector, [usize; 4]);

/// Fills every padding bit of the buffer with `1`.
fn dirty(bv: &mut BitVector) {
	let len = bv.len();
	for (idx, word) in bv.as_mut_raw_slice().iter_mut().enumerate() {
		let first = idx * mem::BITS;
		for bit in 0 .. mem::BITS {
			if first + bit >= len {
				*word |= 1 << bit;
			}
		}
	}
}

#[test]
fn construction() {
	let bv = BitVector::new();
	assert!(bv.is_empty());
	assert_eq!(bv.len(), 0);
	assert_eq!(bv.capacity(), 0);
	assert_eq!(bv.size_in_bytes(), 0);

	let bv = BitVector::with_len(0);
	assert!(bv.is_empty());

	let bv = BitVector::with_len(33);
	assert_eq!(bv.len(), 33);
	assert_eq!(bv.capacity(), 64);
	assert_eq!(bv.as_raw_slice(), &[0, 0]);

	//  Seed bits past the word width, and past the length, are dropped.
	let bv = BitVector::with_seed(40, u64::MAX);
	assert_eq!(bv.as_raw_slice(), &[!0, 0]);
	let bv = BitVector::with_seed(4, 0xFF);
	assert_eq!(bv.as_raw_slice(), &[0x0F]);
	assert_eq!(bv.count_ones(), 4);
}

#[test]
fn raw_views() {
	let bv = BitVector::with_seed(40, 0x0403_0201);
	assert_eq!(bv.as_raw_bytes().len(), bv.size_in_bytes());
	assert_eq!(
		&bv.as_raw_bytes()[.. 4],
		&0x0403_0201u32.to_ne_bytes()[..],
	);
	assert_eq!(bv.clone().into_vec(), [0x0403_0201, 0]);
}

#[test]
fn raw_bytes_follow_words() {
	let mut bv = BitVector::with_len(64);
	bv.as_mut_raw_slice()[0] = 0x1234_5678;
	bv.as_mut_raw_slice()[1] = 0x9ABC_DEF0;
	let bytes = bv.as_raw_bytes();
	assert_eq!(&bytes[.. 4], &(0x1234_5678 as mem::Word).to_ne_bytes()[..]);
	assert_eq!(&bytes[4 ..], &(0x9ABC_DEF0 as mem::Word).to_ne_bytes()[..]);
	assert!(bv[3]);
	assert!(!bv[0]);
}

#[test]
fn clone_is_deep() {
	let mut src = BitVector::with_len(8);
	src.set(7, true).unwrap();
	let copy = src.clone();
	src.set(0, true).unwrap();
	assert_eq!(copy.to_string(), "[00000001] ");
	assert_eq!(src.to_string(), "[10000001] ");

	let mut dst = BitVector::with_len(12);
	dst.clone_from(&copy);
	assert_eq!(dst, copy);
	assert_eq!(dst.size_in_bytes(), copy.size_in_bytes());

	dst.clone_from(&BitVector::new());
	assert!(dst.is_empty());
}

#[test]
fn derived_vectors_keep_grown_buffer() {
	let mut src = BitVector::new();
	for idx in 0 .. 65 {
		src.push(idx % 3 == 0);
	}
	assert_eq!(src.size_in_bytes(), 16);

	let copy = src.clone();
	assert_eq!(copy, src);
	let mut assigned = BitVector::with_len(8);
	assigned.clone_from(&src);
	let inv = src.complement();
	assert_eq!(inv, !src.clone());
	let left = src.shifted_left(3);
	let right = src.shifted_right(3);

	for other in [&copy, &assigned, &inv, &left, &right] {
		assert_eq!(other.size_in_bytes(), src.size_in_bytes());
		let mut lhs = src.clone();
		lhs.try_and_assign(other).unwrap();
		lhs.try_xor_assign(other).unwrap();
	}

	let mut same = src.clone();
	same &= &src.clone();
	assert_eq!(same, src);
}

#[test]
fn swap() {
	let mut a = BitVector::repeat(true, 32);
	let mut b = BitVector::with_len(8);
	let (sa, sb) = (a.clone(), b.clone());
	a.swap(&mut b);
	assert_eq!(a, sb);
	assert_eq!(b, sa);
	assert_eq!(b.size_in_bytes(), 4);
}

#[test]
fn clear_twice() {
	let mut bv = BitVector::with_len(64);
	bv.clear();
	assert!(bv.is_empty());
	assert_eq!(bv.capacity(), 0);
	bv.clear();
	assert!(bv.is_empty());
}

#[test]
fn resize() {
	let mut bv = BitVector::repeat(true, 32);
	bv.reset(6).unwrap();
	bv.resize(7, false).unwrap();
	assert_eq!(bv.len(), 7);
	assert_eq!(bv.get(6), Ok(false));
	assert!(bv.get(7).is_err());

	bv.resize(16, true).unwrap();
	assert_eq!(bv.get(15), Ok(true));
	assert_eq!(bv.get(14), Ok(true));
	assert_eq!(bv.get(6), Ok(false));
	assert_eq!(bv.count_ones(), 15);

	bv.clear();
	bv.resize(33, false).unwrap();
	assert_eq!(bv.len(), 33);
	assert!(bv.none());
	assert_eq!(bv.get(32), Ok(false));
}

#[test]
fn resize_rejects_zero() {
	let mut bv = BitVector::with_seed(8, 0b1010);
	let before = bv.clone();
	assert_eq!(
		bv.resize(0, true),
		Err(BitVectorError::InvalidSize { len: 0 }),
	);
	assert_eq!(bv, before);
	assert_eq!(bv.size_in_bytes(), 4);
}

#[test]
fn resize_ignores_dirty_padding() {
	let mut bv = BitVector::with_len(5);
	dirty(&mut bv);
	assert!(bv.none());
	bv.resize(40, false).unwrap();
	assert!(bv.none());

	let mut bv = BitVector::with_len(5);
	dirty(&mut bv);
	bv.resize(9, true).unwrap();
	assert_eq!(bv.to_string(), "[00000111] [1] ");
}

#[test]
fn resize_fill_spans_words() {
	let mut bv = BitVector::with_len(3);
	bv.resize(100, true).unwrap();
	assert_eq!(bv.count_ones(), 97);
	assert_eq!(bv.size_in_bytes(), 16);
	assert!(!bv[2]);
	assert!(bv[3]);
	assert!(bv[99]);
	assert_eq!(bv.as_raw_slice()[3], 0xF);
}

#[test]
fn push_growth() {
	let mut bv = BitVector::new();
	bv.push(false);
	assert_eq!(bv.len(), 1);
	assert_eq!(bv.size_in_bytes(), 4);
	assert!(!bv[0]);

	for _ in 1 .. 32 {
		bv.push(true);
	}
	assert_eq!(bv.capacity(), 32);
	bv.push(true);
	assert_eq!(bv.capacity(), 64);
	for _ in 33 .. 65 {
		bv.push(false);
	}
	assert_eq!(bv.len(), 65);
	assert_eq!(bv.capacity(), 128);
	assert_eq!(bv.count_ones(), 32);
}

#[test]
fn push_overwrites_dirty_padding() {
	let mut bv = BitVector::with_len(3);
	dirty(&mut bv);
	bv.push(false);
	assert_eq!(bv.get(3), Ok(false));
	assert_eq!(bv.count_ones(), 0);
}

#[test]
fn pop() {
	let mut bv = bitvector![1, 0, 1];
	assert_eq!(bv.pop(), Some(true));
	assert_eq!(bv.len(), 2);
	assert_eq!(bv.capacity(), 32);
	assert_eq!(bv.pop(), Some(false));
	assert_eq!(bv.pop(), Some(true));
	assert!(bv.is_empty());
	assert_eq!(bv.capacity(), 0);
	assert_eq!(bv.pop(), None);
}

#[test]
fn get_set() {
	let mut bv = BitVector::with_len(33);
	bv.set(32, true).unwrap().set(0, true).unwrap();
	assert_eq!(bv.get(32), Ok(true));
	assert_eq!(bv.get(0), Ok(true));
	assert_eq!(bv.get(1), Ok(false));

	bv.reset(32).unwrap();
	assert_eq!(bv.get(32), Ok(false));

	let before = bv.clone();
	assert_eq!(
		bv.set(33, true).map(|_| ()),
		Err(BitVectorError::IndexOutOfRange { index: 33, len: 33 }),
	);
	assert_eq!(bv.get(usize::MAX).ok(), None);
	assert_eq!(bv, before);
}

#[test]
#[should_panic(expected = "bit index 8 is out of range")]
fn index_panics() {
	let bv = BitVector::with_len(8);
	let _bit: bool = bv[8];
}

#[test]
fn set_all_masks_padding() {
	let mut bv = BitVector::with_len(33);
	dirty(&mut bv);
	bv.set_all();
	assert_eq!(bv.as_raw_slice(), &[!0, 1]);
	assert!(bv.all());

	//  Words past the live region after growth are cleared too.
	let mut bv = BitVector::with_len(32);
	bv.push(false);
	bv.set_all();
	assert_eq!(bv.as_raw_slice(), &[!0, 1]);
}

#[test]
fn reset_all_clears_padding() {
	let mut bv = BitVector::with_len(10);
	dirty(&mut bv);
	bv.reset_all();
	assert_eq!(bv.as_raw_slice(), &[0]);
}

#[test]
fn queries_mask_padding() {
	let mut bv = BitVector::with_len(10);
	dirty(&mut bv);
	assert!(!bv.any());
	assert!(bv.none());
	assert_eq!(bv.count_ones(), 0);
	assert_eq!(bv.count_zeros(), 10);
	assert_eq!(bv.to_string(), "[00000000] [00] ");

	bv.set(9, true).unwrap();
	assert!(bv.any());
	assert_eq!(bv.count_ones(), 1);
}

#[test]
fn empty_queries() {
	let bv = BitVector::new();
	assert!(!bv.any());
	assert!(bv.none());
	assert!(bv.all());
	assert_eq!(bv.count_ones(), 0);
	assert_eq!(bv.to_string(), "");
}

#[test]
fn bitwise() {
	let mut a = BitVector::with_len(13);
	let mut b = BitVector::with_len(13);
	a.set(0, true).unwrap().set(12, true).unwrap();
	b.set(12, true).unwrap().set(7, true).unwrap();

	let mut and = a.clone();
	and &= &b;
	assert_eq!(and.iter().filter(|b| *b).count(), 1);
	assert!(and[12]);

	let or = a.clone() | &b;
	assert_eq!(or.count_ones(), 3);

	let xor = a.clone() ^ &b;
	assert!(xor[0]);
	assert!(xor[7]);
	assert!(!xor[12]);
}

#[test]
fn bitwise_mismatch_leaves_lhs() {
	let mut a = BitVector::with_seed(13, 0x1001);
	let b = BitVector::with_len(40);
	let before = a.clone();
	for result in [
		a.clone().try_and_assign(&b).map(|_| ()),
		a.clone().try_or_assign(&b).map(|_| ()),
		a.clone().try_xor_assign(&b).map(|_| ()),
	] {
		assert_eq!(
			result,
			Err(BitVectorError::SizeMismatch { left: 1, right: 2 }),
		);
	}
	assert!(a.try_xor_assign(&b).is_err());
	assert_eq!(a, before);
}

#[test]
fn bitwise_uses_words_not_lengths() {
	let mut a = BitVector::with_len(13);
	let mut b = BitVector::with_len(15);
	b.set(14, true).unwrap().set(1, true).unwrap();
	a.try_or_assign(&b).unwrap();
	assert_eq!(a.len(), 13);
	assert_eq!(a.count_ones(), 1);
	//  Bit 14 of the operand lands in the padding, where it is invisible.
	assert_eq!(a.as_raw_slice(), &[(1 << 14) | 0b10]);
}

#[test]
#[should_panic(expected = "operand buffers differ in size")]
fn bitwise_operator_panics() {
	let mut a = BitVector::with_len(8);
	a |= &BitVector::with_len(64);
}

#[test]
fn complement() {
	let bv = BitVector::with_seed(8, 15);
	let inv = !&bv;
	assert_eq!(inv.to_string(), "[00001111] ");
	assert_eq!(inv.count_ones(), 4);
	assert_eq!(inv.as_raw_slice(), &[!15]);

	let inv = !bv.clone();
	assert_eq!(inv, bv.complement());
	assert_eq!(!inv, bv);
}

#[test]
fn shifts() {
	let bv = BitVector::with_seed(16, 7);
	assert_eq!((&bv >> 3).to_string(), "[00011100] [00000000] ");

	let bv = BitVector::with_seed(16, 15);
	assert_eq!((&bv << 2).to_string(), "[11000000] [00000000] ");

	let mut bv = BitVector::with_seed(16, 7);
	bv >>= 3;
	assert_eq!(bv.to_string(), "[00011100] [00000000] ");

	let mut bv = BitVector::with_seed(16, 15);
	bv <<= 3;
	assert_eq!(bv.to_string(), "[10000000] [00000000] ");
}

#[test]
fn shifts_across_words() {
	let mut bv = BitVector::with_len(70);
	bv.set(0, true).unwrap().set(31, true).unwrap().set(69, true).unwrap();

	let right = bv.shifted_right(33);
	let ones: Vec<usize> = (0 .. 70).filter(|&i| right[i]).collect();
	assert_eq!(ones, [33, 64]);

	let left = bv.shifted_left(31);
	let ones: Vec<usize> = (0 .. 70).filter(|&i| left[i]).collect();
	assert_eq!(ones, [0, 38]);

	let left = bv.shifted_left(64);
	let ones: Vec<usize> = (0 .. 70).filter(|&i| left[i]).collect();
	assert_eq!(ones, [5]);
}

#[test]
fn shifts_past_length() {
	let bv = BitVector::repeat(true, 20);
	for n in [20, 21, 64, usize::MAX] {
		assert!(bv.shifted_left(n).none());
		assert!(bv.shifted_right(n).none());
		assert_eq!(bv.shifted_right(n).len(), 20);
	}
	assert!(BitVector::new().shifted_left(0).is_empty());
	assert_eq!(bv.shifted_left(0), bv);
}

#[test]
fn shifts_ignore_dirty_padding() {
	let mut bv = BitVector::with_seed(10, 0b10_0000_0001);
	dirty(&mut bv);
	let left = bv.shifted_left(4);
	assert_eq!(left.to_string(), "[00000100] [00] ");

	let right = bv.shifted_right(1);
	assert_eq!(right.to_string(), "[01000000] [00] ");
	assert_eq!(right.as_raw_slice(), &[0b10]);
}

#[test]
fn in_place_shift_keeps_allocation() {
	let mut bv = BitVector::with_len(64);
	bv.push(true);
	assert_eq!(bv.size_in_bytes(), 16);
	bv.shift_left(0);
	assert_eq!(bv.size_in_bytes(), 16);
	bv.shift_left(1);
	assert_eq!(bv.len(), 65);
	assert_eq!(bv.size_in_bytes(), 16);
	assert!(bv[63]);
	assert!(!bv[64]);
	bv.shift_right(1);
	assert!(bv[64]);
	assert!(!bv[63]);
	assert_eq!(bv.count_ones(), 1);
}

#[test]
#[cfg(feature = "std")]
fn equality_and_hash() {
	use core::hash::{
		Hash,
		Hasher,
	};
	use std::collections::hash_map::DefaultHasher;

	fn hash(bv: &BitVector) -> u64 {
		let mut hasher = DefaultHasher::new();
		bv.hash(&mut hasher);
		hasher.finish()
	}

	let a = BitVector::with_seed(10, 0b11);
	let mut b = a.clone();
	dirty(&mut b);
	assert_eq!(a, b);
	assert_eq!(hash(&a), hash(&b));

	let c = BitVector::with_seed(11, 0b11);
	assert_ne!(a, c);
}

#[test]
fn debug() {
	let bv = BitVector::with_seed(3, 0b101);
	assert_eq!(
		format!("{:?}", bv),
		"BitVector { len: 3, capacity: 32, words: [101] }",
	);
}

#[test]
fn iteration() {
	let bv = bitvector![1, 0, 0, 1, 1];
	let mut iter = bv.iter();
	assert_eq!(iter.len(), 5);
	assert_eq!(iter.next(), Some(true));
	assert_eq!(iter.next_back(), Some(true));
	assert_eq!(iter.nth(1), Some(false));
	assert_eq!(iter.len(), 1);
	assert_eq!(iter.next(), Some(true));
	assert_eq!(iter.next(), None);
	assert_eq!(iter.next_back(), None);

	let mut bv = BitVector::new();
	bv.extend([true, false]);
	bv.extend(&[true]);
	assert_eq!(bv, bitvector![1, 0, 1]);
	assert_eq!((&bv).into_iter().filter(|b| *b).count(), 2);
}
