//! Zero-padded hexadecimal rendering of fixed-width values.



//		Packages

use crate::int::FixedInt;
use core::fmt::{Display, Formatter, self};
use num_traits::Signed;



//		Structs

//		Hex																		
/// Displays a value as zero-padded hexadecimal.
///
/// The number of digits is enough to cover the full width of the value's
/// type, i.e. `ceil(width / 4)`. Negative values are shown as a minus sign
/// followed by the padded magnitude.
///
/// # Examples
///
/// ```
/// use fixedint::get_type;
///
/// let int10 = get_type(10, true, false).unwrap();
/// assert_eq!(int10.new(0x1F).hex().to_string(), "0x01f");
/// assert_eq!(int10.new(-2).hex().to_string(),   "-0x002");
/// ```
///
#[derive(Clone, Copy, Debug)]
pub struct Hex<'a>(&'a FixedInt);

//󰭅		Display																	
impl Display for Hex<'_> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let digits = usize::try_from(self.0.width().div_ceil(4)).unwrap_or(usize::MAX);
		self.0.with_value(|value| {
			let sign = if value.is_negative() { "-" } else { "" };
			write!(f, "{sign}0x{:0digits$x}", value.magnitude())
		})
	}
}

//󰭅		FixedInt																
impl FixedInt {
	//		hex																	
	/// Wraps the value for zero-padded hexadecimal display.
	#[must_use]
	pub const fn hex(&self) -> Hex<'_> {
		Hex(self)
	}
}
