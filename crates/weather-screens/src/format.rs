//! Fixed-capacity text formatting for labels.

use core::fmt::{self, Write};

use heapless::String;

/// Format into a stack string. Text past the capacity is dropped.
pub(crate) fn text<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut s = String::new();
    // Overflow only loses the tail of a label.
    let _ = s.write_fmt(args);
    s
}

/// A value rounded to one decimal, printed without a trailing `.0`.
///
/// `2.34` prints `2.3`, `4.0` prints `4`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneDecimal(pub f32);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tenths = libm::roundf(self.0 * 10.0);
        if tenths % 10.0 == 0.0 {
            write!(f, "{}", (tenths / 10.0) as i32)
        } else {
            write!(f, "{:.1}", tenths / 10.0)
        }
    }
}
