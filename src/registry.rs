//! Type registry and family factory for fixed-width integer types.
//!
//! Every fixed-width type is identified by its width, signedness, and
//! mutability. The registry hands out exactly one live descriptor per
//! combination, so two handles for the same parameters always compare equal
//! by identity, which is what the promotion rules key off.



//		Modules

#[cfg(test)]
#[path = "tests/registry.rs"]
mod tests;



//		Packages

use crate::{
	codec::{ByteOrder, decode},
	errors::FixedIntError,
	int::{FixedInt, parse_integer},
};
use core::{
	fmt::{Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	str::FromStr,
};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::{
	collections::HashMap,
	sync::{Arc, LazyLock, Weak},
};
use tracing::{debug, trace};



//		Statics

/// Process-wide cache of live type descriptors.
///
/// Entries are weak, so a descriptor is reclaimed once the last handle and the
/// last value of that type are dropped. Dead entries are pruned whenever a new
/// descriptor is minted.
///
static REGISTRY: LazyLock<Mutex<HashMap<TypeKey, Weak<Descriptor>>>> = LazyLock::new(|| {
	Mutex::new(HashMap::new())
});



//		Structs

//		Descriptor																
/// The shared contents of a [`FixedIntType`] handle.
///
/// The bounds and masks are computed once, when the descriptor is minted.
///
struct Descriptor {
	/// The parameters identifying the type.
	key:      TypeKey,
	
	/// The smallest representable value.
	min:      BigInt,
	
	/// The largest representable value.
	max:      BigInt,
	
	/// `2^width - 1`.
	mask:     BigInt,
	
	/// `2^width`.
	modulus:  BigInt,
	
	/// `2^(width - 1)`, i.e. the weight of the sign bit.
	sign_bit: BigInt,
}

//󰭅		Descriptor																
impl Descriptor {
	//		new																	
	/// Computes the bounds and masks for a set of type parameters.
	#[allow(clippy::arithmetic_side_effects, reason = "Width is never zero")]
	fn new(key: TypeKey) -> Self {
		let modulus  = BigInt::one() << key.width;
		let mask     = &modulus - BigInt::one();
		let sign_bit = BigInt::one() << (key.width - 1);
		let (min, max) = if key.signed {
			(-&sign_bit, &sign_bit - BigInt::one())
		} else {
			(BigInt::zero(), mask.clone())
		};
		Self { key, min, max, mask, modulus, sign_bit }
	}
}

//		FixedIntFamily															
/// The unparameterised constructor of fixed-width types.
///
/// A family fixes only the mutability. Asking it for a width produces a
/// concrete [`FixedIntType`], and decoding bytes through it infers the width
/// from the number of bytes supplied.
///
/// # Examples
///
/// ```
/// use fixedint::FixedIntFamily;
///
/// let int10 = FixedIntFamily::FIXED.of(10, true).unwrap();
/// assert_eq!(int10.min_value(), num_bigint::BigInt::from(-512));
/// assert_eq!(int10.max_value(), num_bigint::BigInt::from(511));
/// ```
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct FixedIntFamily {
	/// Whether types produced by this family are mutable.
	mutable: bool,
}

//󰭅		FixedIntFamily															
impl FixedIntFamily {
	//		Public constants													
	/// The family of immutable fixed-width types.
	pub const FIXED:   Self = Self { mutable: false };
	
	/// The family of mutable fixed-width types.
	pub const MUTABLE: Self = Self { mutable: true };
	
	//		Public methods														
	
	//		from_bytes															
	/// Decodes a value whose width is implied by the byte count.
	///
	/// The width of the resulting type is eight times the number of bytes, and
	/// the signedness defaults to unsigned when not given.
	///
	/// # Parameters
	///
	/// * `bytes`  - The encoded value.
	/// * `order`  - The byte order of `bytes`.
	/// * `signed` - Whether to decode as two's complement.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::InvalidWidth`] if `bytes` is empty, or
	/// [`FixedIntError::OutOfRange`] if it is too long for a `u32` width.
	///
	pub fn from_bytes(self, bytes: &[u8], order: ByteOrder, signed: Option<bool>) -> Result<FixedInt, FixedIntError> {
		let width = bytes.len()
			.checked_mul(8)
			.and_then(|bits| u32::try_from(bits).ok())
			.ok_or(FixedIntError::OutOfRange)?
		;
		self.of(width, signed.unwrap_or(false))?.from_bytes(bytes, order, signed)
	}
	
	//		mutable																
	/// Whether types produced by this family are mutable.
	#[must_use]
	pub const fn mutable(self) -> bool {
		self.mutable
	}
	
	//		of																	
	/// Produces the concrete type of the given width and signedness.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::InvalidWidth`] if `width` is zero.
	///
	pub fn of(self, width: u32, signed: bool) -> Result<FixedIntType, FixedIntError> {
		get_type(width, signed, self.mutable)
	}
}

//		FixedIntType															
/// A concrete fixed-width integer type.
///
/// This is a cheap, clonable handle to a descriptor owned by the registry.
/// Handles compare equal only when they refer to the same descriptor, which
/// the registry guarantees for equal parameters.
///
/// Types are closed: the registry is the only way to mint one, and there is no
/// way to build a descriptor outside of this crate.
///
/// ```compile_fail
/// use fixedint::get_type;
///
/// let int8       = get_type(8, true, false).unwrap();
/// let descriptor = int8.0.clone();
/// ```
///
#[derive(Clone)]
pub struct FixedIntType(Arc<Descriptor>);

//󰭅		FixedIntType															
impl FixedIntType {
	//		Public methods														
	
	//		as_immutable														
	/// Returns the immutable type with the same width and signedness.
	#[must_use]
	pub fn as_immutable(&self) -> Self {
		lookup(TypeKey { mutable: false, ..self.key() })
	}
	
	//		as_mutable															
	/// Returns the mutable type with the same width and signedness.
	#[must_use]
	pub fn as_mutable(&self) -> Self {
		lookup(TypeKey { mutable: true, ..self.key() })
	}
	
	//		from_bytes															
	/// Decodes a value of this type from a byte sequence.
	///
	/// The bytes are read as two's complement when the type is signed and as
	/// an unsigned magnitude otherwise, and the result is rectified into this
	/// type, so surplus high-order bytes are discarded.
	///
	/// # Parameters
	///
	/// * `bytes`  - The encoded value.
	/// * `order`  - The byte order of `bytes`.
	/// * `signed` - An optional explicit signedness, which must match the
	///              type's own.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::SignednessConflict`] if `signed` is given and
	/// differs from the type's signedness.
	///
	pub fn from_bytes(&self, bytes: &[u8], order: ByteOrder, signed: Option<bool>) -> Result<FixedInt, FixedIntError> {
		match signed {
			Some(requested) if requested != self.signed() => Err(FixedIntError::SignednessConflict {
				expected: self.signed(),
				requested,
			}),
			_ => Ok(self.new(decode(bytes, order, self.signed()))),
		}
	}
	
	//		key																	
	/// The parameters identifying this type.
	#[must_use]
	pub fn key(&self) -> TypeKey {
		self.0.key
	}
	
	//		max_value															
	/// The largest value representable by this type.
	#[must_use]
	pub fn max_value(&self) -> BigInt {
		self.0.max.clone()
	}
	
	//		min_value															
	/// The smallest value representable by this type.
	#[must_use]
	pub fn min_value(&self) -> BigInt {
		self.0.min.clone()
	}
	
	//		mutable																
	/// Whether values of this type can be updated in place.
	#[must_use]
	pub fn mutable(&self) -> bool {
		self.0.key.mutable
	}
	
	//		name																
	/// The conventional name of this type, e.g. `MutableUInt32`.
	#[must_use]
	pub fn name(&self) -> String {
		self.0.key.to_string()
	}
	
	//		new																	
	/// Creates a value of this type from an arbitrary integer.
	///
	/// The integer is rectified, i.e. wrapped into the type's range.
	///
	/// # Parameters
	///
	/// * `raw` - The integer to convert.
	///
	/// # Examples
	///
	/// ```
	/// use fixedint::get_type;
	///
	/// let int10 = get_type(10, true, false).unwrap();
	/// assert_eq!(int10.new(1025), 1);
	/// assert_eq!(int10.new(512),  -512);
	/// ```
	///
	#[must_use]
	pub fn new(&self, raw: impl Into<BigInt>) -> FixedInt {
		FixedInt::from_rectified(self.clone(), self.rectify(&raw.into()))
	}
	
	//		parse																
	/// Creates a value of this type from text in the given base.
	///
	/// The rules follow the usual integer literal conventions: surrounding
	/// whitespace and a single sign are allowed, a `0x`, `0o`, or `0b` prefix
	/// may accompany the matching base, base `0` infers the base from the
	/// prefix, and single underscores may separate digits.
	///
	/// # Parameters
	///
	/// * `text` - The text to parse.
	/// * `base` - The base, `0` or in the range `2..=36`.
	///
	/// # Errors
	///
	/// Returns an error if the base is unsupported, the text is empty, or
	/// contains an invalid digit.
	///
	pub fn parse(&self, text: &str, base: u32) -> Result<FixedInt, FixedIntError> {
		Ok(self.new(parse_integer(text, base)?))
	}
	
	//		rectify																
	/// Folds an arbitrary integer into this type's range.
	///
	/// Unsigned types keep the low `width` bits. Signed types do the same and
	/// then reinterpret the top bit as the sign, i.e. two's complement
	/// wraparound. The result is always within
	/// [`min_value()`](Self::min_value()) and
	/// [`max_value()`](Self::max_value()).
	///
	#[must_use]
	pub fn rectify(&self, raw: &BigInt) -> BigInt {
		let value = raw & &self.0.mask;
		if self.0.key.signed && value >= self.0.sign_bit {
			value - &self.0.modulus
		} else {
			value
		}
	}
	
	//		signed																
	/// Whether this type is signed.
	#[must_use]
	pub fn signed(&self) -> bool {
		self.0.key.signed
	}
	
	//		width																
	/// The number of bits in this type, including any sign bit.
	#[must_use]
	pub fn width(&self) -> u32 {
		self.0.key.width
	}
}

//󰭅		Debug																	
impl Debug for FixedIntType {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0.key, f)
	}
}

//󰭅		Display																	
impl Display for FixedIntType {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0.key, f)
	}
}

//󰭅		Eq																		
impl Eq for FixedIntType {}

//󰭅		Hash																	
impl Hash for FixedIntType {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.key.hash(state);
	}
}

//󰭅		PartialEq																
impl PartialEq for FixedIntType {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

//		TypeKey																	
/// The parameters identifying a fixed-width type.
///
/// This is plain data, and can be declared in configuration. It displays as,
/// and parses from, the conventional type name, e.g. `Int8`, `UInt10`, or
/// `MutableUInt64`.
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct TypeKey {
	/// The number of bits, including any sign bit.
	pub width:   u32,
	
	/// Whether the type is signed.
	pub signed:  bool,
	
	/// Whether values of the type can be updated in place.
	#[serde(default)]
	pub mutable: bool,
}

//󰭅		TypeKey																	
impl TypeKey {
	//		new																	
	/// Creates a new set of type parameters.
	#[must_use]
	pub const fn new(width: u32, signed: bool, mutable: bool) -> Self {
		Self { width, signed, mutable }
	}
}

//󰭅		Display																	
impl Display for TypeKey {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}Int{}",
			if self.mutable { "Mutable" } else { "" },
			if self.signed  { "" } else { "U" },
			self.width,
		)
	}
}

//󰭅		FromStr																	
impl FromStr for TypeKey {
	type Err = FixedIntError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid        = || FixedIntError::InvalidTypeName(s.to_owned());
		let (mutable, rest) = s.strip_prefix("Mutable").map_or((false, s), |rest| (true, rest));
		let (signed,  rest) = rest.strip_prefix('U').map_or((true, rest), |rest| (false, rest));
		let digits         = rest.strip_prefix("Int").ok_or_else(invalid)?;
		if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
			return Err(invalid());
		}
		let width          = digits.parse::<u32>().map_err(|_| invalid())?;
		Ok(Self::new(width, signed, mutable))
	}
}



//		Functions

//		get_type																
/// Returns the fixed-width type for the given parameters.
///
/// Repeated requests for the same parameters, from any thread, return the same
/// descriptor for as long as any handle to it is alive.
///
/// # Parameters
///
/// * `width`   - The number of bits, including any sign bit.
/// * `signed`  - Whether the type is signed.
/// * `mutable` - Whether values of the type can be updated in place.
///
/// # Errors
///
/// Returns [`FixedIntError::InvalidWidth`] if `width` is zero.
///
/// # Examples
///
/// ```
/// use fixedint::get_type;
///
/// let a = get_type(12, false, false).unwrap();
/// let b = get_type(12, false, false).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.name(), "UInt12");
/// ```
///
pub fn get_type(width: u32, signed: bool, mutable: bool) -> Result<FixedIntType, FixedIntError> {
	get_type_for(TypeKey::new(width, signed, mutable))
}

//		get_type_for															
/// Returns the fixed-width type for a [`TypeKey`].
///
/// # Errors
///
/// Returns [`FixedIntError::InvalidWidth`] if the key's width is zero.
///
pub fn get_type_for(key: TypeKey) -> Result<FixedIntType, FixedIntError> {
	if key.width == 0 {
		return Err(FixedIntError::InvalidWidth(key.width));
	}
	Ok(lookup(key))
}

//		is_registered															
/// Whether a live descriptor currently exists for a [`TypeKey`].
#[must_use]
pub fn is_registered(key: TypeKey) -> bool {
	REGISTRY.lock().get(&key).is_some_and(|entry| entry.strong_count() > 0)
}

//		lookup																	
/// Fetches or mints the descriptor for an already-validated key.
///
/// The whole lookup happens under the registry lock, so concurrent requests
/// for the same key converge on a single descriptor.
///
pub(crate) fn lookup(key: TypeKey) -> FixedIntType {
	let mut cache = REGISTRY.lock();
	if let Some(existing) = cache.get(&key).and_then(Weak::upgrade) {
		return FixedIntType(existing);
	}
	
	let before = cache.len();
	cache.retain(|_, entry| entry.strong_count() > 0);
	if cache.len() < before {
		trace!(pruned = before - cache.len(), "Pruned reclaimed fixed-width types");
	}
	
	let descriptor = Arc::new(Descriptor::new(key));
	_ = cache.insert(key, Arc::downgrade(&descriptor));
	debug!(name = %key, "Registered fixed-width type");
	FixedIntType(descriptor)
}
