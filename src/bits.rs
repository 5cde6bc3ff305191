//! Bit-level access to fixed-width values.
//!
//! Bits are numbered from zero at the least-significant end, and negative
//! values are read as their two's complement bits within the type's width. A
//! negative index counts back from the width, so `-1` is the top bit.
//!

#![allow(clippy::arithmetic_side_effects, reason = "Indexes are range-checked before use")]



//		Modules

#[cfg(test)]
#[path = "tests/bits.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	int::FixedInt,
	ops::Operand,
	registry::{TypeKey, lookup},
};
use core::ops::{Range, RangeFrom, RangeFull, RangeTo};
use num_bigint::BigInt;
use num_traits::One;



//		Enums

//		SliceEnd																
/// How the end of a [`BitSlice`] is expressed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
enum SliceEnd {
	/// The end of the value, i.e. its width.
	#[default]
	Width,
	
	/// An absolute, possibly negative, stop index.
	Stop(isize),
	
	/// A length counted from the start.
	Length(usize),
}



//		Structs

//		BitSlice																
/// A contiguous range of bits within a value.
///
/// The start defaults to zero and the stop to the value's width. Either may be
/// negative, in which case it counts back from the width. The range can also
/// be given as a start and a length using [`BitSlice::span()`].
///
/// A step may be recorded for compatibility with stepped slicing, but any step
/// other than one is rejected when the slice is used.
///
/// # Examples
///
/// ```
/// use fixedint::{BitSlice, get_type};
///
/// let value = get_type(16, false, false).unwrap().new(0xABCD);
/// assert_eq!(value.slice(4..8).unwrap(),           0xC);
/// assert_eq!(value.slice(-4..).unwrap(),           0xA);
/// assert_eq!(value.slice(BitSlice::span(8, 4)).unwrap(), 0xB);
/// ```
///
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct BitSlice {
	/// The first bit, if given.
	start: Option<isize>,
	
	/// Where the range ends.
	end:   SliceEnd,
	
	/// The step, if given.
	step:  Option<isize>,
}

//󰭅		BitSlice																
impl BitSlice {
	//		Constructors														
	
	//		new																	
	/// Creates a slice from optional start, stop, and step values, in the same
	/// way as the `start:stop:step` slice notation.
	#[must_use]
	pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
		let end = match stop {
			Some(stop) => SliceEnd::Stop(stop),
			None       => SliceEnd::Width,
		};
		Self { start, end, step }
	}
	
	//		span																
	/// Creates a slice of `length` bits beginning at `start`.
	///
	/// Only the start is relative to the width when negative. The stop is
	/// always the canonical start plus the length.
	///
	#[must_use]
	pub const fn span(start: isize, length: usize) -> Self {
		Self { start: Some(start), end: SliceEnd::Length(length), step: None }
	}
	
	//		Public methods														
	
	//		resolve																
	/// Canonicalises the slice against a width.
	///
	/// Returns the start and stop as absolute bit positions.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::InvalidSliceStep`] if a step other than one was
	/// given, or [`FixedIntError::SliceOutOfRange`] unless `0 <= start < stop
	/// <= width` holds after canonicalisation.
	///
	pub fn resolve(&self, width: u32) -> Result<(u32, u32), FixedIntError> {
		if let Some(step) = self.step.filter(|&step| step != 1) {
			return Err(FixedIntError::InvalidSliceStep(step));
		}
		
		let limit = isize::try_from(width).unwrap_or(isize::MAX);
		let start = canonical(self.start.unwrap_or(0), limit);
		let stop  = match self.end {
			SliceEnd::Width        => limit,
			SliceEnd::Stop(stop)   => canonical(stop, limit),
			SliceEnd::Length(length) => start.saturating_add(isize::try_from(length).unwrap_or(isize::MAX)),
		};
		
		let out_of_range = || FixedIntError::SliceOutOfRange { start, stop, width };
		if start < 0 || start >= stop || stop > limit {
			return Err(out_of_range());
		}
		Ok((
			u32::try_from(start).map_err(|_| out_of_range())?,
			u32::try_from(stop).map_err(|_| out_of_range())?,
		))
	}
	
	//		with_step															
	/// Records a step for the slice.
	#[must_use]
	pub const fn with_step(mut self, step: isize) -> Self {
		self.step = Some(step);
		self
	}
}

//󰭅		From: Range -> BitSlice													
impl From<Range<isize>> for BitSlice {
	//		from																
	fn from(range: Range<isize>) -> Self {
		Self::new(Some(range.start), Some(range.end), None)
	}
}

//󰭅		From: RangeFrom -> BitSlice												
impl From<RangeFrom<isize>> for BitSlice {
	//		from																
	fn from(range: RangeFrom<isize>) -> Self {
		Self::new(Some(range.start), None, None)
	}
}

//󰭅		From: RangeFull -> BitSlice												
impl From<RangeFull> for BitSlice {
	//		from																
	fn from(_: RangeFull) -> Self {
		Self::default()
	}
}

//󰭅		From: RangeTo -> BitSlice												
impl From<RangeTo<isize>> for BitSlice {
	//		from																
	fn from(range: RangeTo<isize>) -> Self {
		Self::new(None, Some(range.end), None)
	}
}

//󰭅		FixedInt																
impl FixedInt {
	//		Public methods														
	
	//		bit																	
	/// Gets the value of a single bit.
	///
	/// # Parameters
	///
	/// * `index` - The position of the bit, where `0` is the least-significant
	///             bit and negative positions count back from the width.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::IndexOutOfRange`] if the index does not fall
	/// within the width.
	///
	pub fn bit(&self, index: isize) -> Result<bool, FixedIntError> {
		let pos = bit_index(index, self.width())?;
		Ok(self.with_value(|value| value.bit(u64::from(pos))))
	}
	
	//		extract																
	/// Gets `length` bits beginning at `start`, as an unsigned value.
	///
	/// This is the same as [`slice()`](Self::slice()) with
	/// [`BitSlice::span()`].
	///
	/// # Errors
	///
	/// As for [`slice()`](Self::slice()).
	///
	pub fn extract(&self, start: isize, length: usize) -> Result<Self, FixedIntError> {
		self.slice(BitSlice::span(start, length))
	}
	
	//		set_bit																
	/// Sets or clears a single bit in place.
	///
	/// # Parameters
	///
	/// * `index` - The position of the bit, as for [`bit()`](Self::bit()).
	/// * `bit`   - The new state of the bit.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::Immutable`] if the value is not mutable, or
	/// [`FixedIntError::IndexOutOfRange`] if the index does not fall within the
	/// width.
	///
	pub fn set_bit(&mut self, index: isize, bit: bool) -> Result<(), FixedIntError> {
		if !self.mutable() {
			return Err(FixedIntError::Immutable);
		}
		let pos     = bit_index(index, self.width())?;
		let mut raw = self.value();
		raw.set_bit(u64::from(pos), bit);
		self.store(&raw)
	}
	
	//		set_extract															
	/// Overwrites `length` bits beginning at `start`.
	///
	/// This is the same as [`set_slice()`](Self::set_slice()) with
	/// [`BitSlice::span()`].
	///
	/// # Errors
	///
	/// As for [`set_slice()`](Self::set_slice()).
	///
	pub fn set_extract(&mut self, start: isize, length: usize, bits: impl Operand) -> Result<(), FixedIntError> {
		self.set_slice(BitSlice::span(start, length), bits)
	}
	
	//		set_slice															
	/// Overwrites a range of bits in place.
	///
	/// Only the low `stop - start` bits of the new content are used, and only
	/// its numeric value matters, so its type, if it has one, is ignored.
	///
	/// # Parameters
	///
	/// * `range` - The bits to overwrite.
	/// * `bits`  - The new content for the range.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::Immutable`] if the value is not mutable, or any
	/// of the errors from [`BitSlice::resolve()`].
	///
	/// # Examples
	///
	/// ```
	/// use fixedint::get_type;
	///
	/// let mut value = get_type(16, false, true).unwrap().new(0x1234);
	/// value.set_slice(4..12, 0xAB).unwrap();
	/// assert_eq!(value, 0x1AB4);
	/// ```
	///
	pub fn set_slice(&mut self, range: impl Into<BitSlice>, bits: impl Operand) -> Result<(), FixedIntError> {
		if !self.mutable() {
			return Err(FixedIntError::Immutable);
		}
		let (start, stop) = range.into().resolve(self.width())?;
		let mask          = (BigInt::one() << (stop - start)) - BigInt::one();
		let cleared       = self.with_value(|value| value & !(&mask << start));
		let raw           = cleared | ((bits.operand_value() & mask) << start);
		self.store(&raw)
	}
	
	//		slice																
	/// Gets a range of bits as an unsigned value.
	///
	/// The result is always unsigned and immutable, whatever the source type,
	/// and its width is the length of the range.
	///
	/// # Errors
	///
	/// As for [`BitSlice::resolve()`].
	///
	pub fn slice(&self, range: impl Into<BitSlice>) -> Result<Self, FixedIntError> {
		let (start, stop) = range.into().resolve(self.width())?;
		let ty            = lookup(TypeKey::new(stop - start, false, false));
		Ok(ty.new(self.with_value(|value| value >> start)))
	}
}



//		Functions

//		bit_index																
/// Canonicalises a single-bit index against a width.
fn bit_index(index: isize, width: u32) -> Result<u32, FixedIntError> {
	let limit = isize::try_from(width).unwrap_or(isize::MAX);
	let pos   = canonical(index, limit);
	if pos < 0 || pos >= limit {
		return Err(FixedIntError::IndexOutOfRange { index, width });
	}
	u32::try_from(pos).map_err(|_| FixedIntError::IndexOutOfRange { index, width })
}

//		canonical																
/// Makes a negative index relative to the width.
const fn canonical(index: isize, width: isize) -> isize {
	if index < 0 { index + width } else { index }
}
