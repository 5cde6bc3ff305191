//! The Fixedint crate provides integers of any declared width and signedness
//! that behave exactly like hardware registers of that width.
//!
//! Overflow always wraps, using two's complement for signed types, whatever
//! the width: 8, 12, 64, or 256 bits are all handled the same way, backed by
//! arbitrary-precision arithmetic. Values can be combined across widths and
//! signedness following C's promotion rules, read and written at the bit
//! level, and encoded to and from bytes.
//!
//! # Types and values
//!
//! Types are obtained from a process-wide registry, which guarantees a single
//! descriptor per width, signedness, and mutability:
//!
//! ```
//! use fixedint::{Alias, get_type};
//!
//! let int10 = get_type(10, true, false).unwrap();
//! assert_eq!(int10.new(511) + 1, -512);
//! assert_eq!(Alias::Int8.new(15) * Alias::Int8.new(10), -106);
//! ```
//!
//! # Mutable values
//!
//! Values of a mutable type live in a shared cell. Cloning one produces an
//! alias, and in-place operators update every alias at once:
//!
//! ```
//! use fixedint::Alias;
//!
//! let mut x = Alias::MutableUInt8.new(200);
//! let y     = x.clone();
//! x += 100;
//! assert_eq!(y, 44);
//! ```
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::expect_used,
	clippy::float_cmp,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod aliases;
mod bits;
mod codec;
mod errors;
mod hex;
mod int;
pub mod ops;
mod registry;



//		Packages

pub use aliases::Alias;
pub use bits::BitSlice;
pub use codec::ByteOrder;
pub use errors::FixedIntError;
pub use hex::Hex;
pub use int::FixedInt;
pub use ops::{BinaryOp, Operand};
pub use registry::{FixedIntFamily, FixedIntType, TypeKey, get_type, get_type_for, is_registered};
