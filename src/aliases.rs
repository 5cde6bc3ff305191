//! Conventional names for the common fixed-width types.



//		Modules

#[cfg(test)]
#[path = "tests/aliases.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	int::FixedInt,
	registry::{FixedIntType, TypeKey, lookup},
};
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};



//		Enums

//		Alias																	
/// The sixteen conventionally-named fixed-width types.
///
/// These are the 8, 16, 32, and 64-bit widths in signed and unsigned flavours,
/// each either immutable or mutable.
///
/// # Examples
///
/// ```
/// use fixedint::Alias;
///
/// assert_eq!(Alias::Int8.new(127) + Alias::Int8.new(1), -128);
/// assert_eq!(Alias::UInt8.new(255) + Alias::UInt8.new(1), 0);
/// ```
///
#[expect(missing_docs, reason = "Variant names are self-describing")]
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Alias {
	Int8,
	UInt8,
	Int16,
	UInt16,
	Int32,
	UInt32,
	Int64,
	UInt64,
	MutableInt8,
	MutableUInt8,
	MutableInt16,
	MutableUInt16,
	MutableInt32,
	MutableUInt32,
	MutableInt64,
	MutableUInt64,
}

//󰭅		Alias																	
impl Alias {
	//		Public constants													
	/// Every alias, immutable ones first, narrowest first.
	pub const ALL: [Self; 16] = [
		Self::Int8,        Self::UInt8,        Self::Int16,        Self::UInt16,
		Self::Int32,       Self::UInt32,       Self::Int64,        Self::UInt64,
		Self::MutableInt8, Self::MutableUInt8, Self::MutableInt16, Self::MutableUInt16,
		Self::MutableInt32, Self::MutableUInt32, Self::MutableInt64, Self::MutableUInt64,
	];
	
	//		Public methods														
	
	//		fixed_type															
	/// The registered type this alias names.
	#[must_use]
	pub fn fixed_type(self) -> FixedIntType {
		lookup(self.key())
	}
	
	//		key																	
	/// The parameters of the type this alias names.
	#[must_use]
	pub const fn key(self) -> TypeKey {
		let (width, signed, mutable) = match self {
			Self::Int8          => (8,  true,  false),
			Self::UInt8         => (8,  false, false),
			Self::Int16         => (16, true,  false),
			Self::UInt16        => (16, false, false),
			Self::Int32         => (32, true,  false),
			Self::UInt32        => (32, false, false),
			Self::Int64         => (64, true,  false),
			Self::UInt64        => (64, false, false),
			Self::MutableInt8   => (8,  true,  true),
			Self::MutableUInt8  => (8,  false, true),
			Self::MutableInt16  => (16, true,  true),
			Self::MutableUInt16 => (16, false, true),
			Self::MutableInt32  => (32, true,  true),
			Self::MutableUInt32 => (32, false, true),
			Self::MutableInt64  => (64, true,  true),
			Self::MutableUInt64 => (64, false, true),
		};
		TypeKey::new(width, signed, mutable)
	}
	
	//		new																	
	/// Creates a value of the named type, wrapping it into range.
	#[must_use]
	pub fn new(self, raw: impl Into<BigInt>) -> FixedInt {
		self.fixed_type().new(raw)
	}
}

//󰭅		Display																	
impl Display for Alias {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.key(), f)
	}
}

//󰭅		FromStr																	
impl FromStr for Alias {
	type Err = FixedIntError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let key = s.parse::<TypeKey>()?;
		Self::ALL.into_iter()
			.find(|alias| alias.key() == key)
			.ok_or_else(|| FixedIntError::InvalidTypeName(s.to_owned()))
	}
}

//󰭅		From: Alias -> TypeKey													
impl From<Alias> for TypeKey {
	//		from																
	fn from(alias: Alias) -> Self {
		alias.key()
	}
}
