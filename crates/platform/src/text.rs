//! Bounded-string helpers.

use heapless::String;

/// Copy `s` into a fixed-capacity string, dropping whole characters that
/// do not fit.
pub fn truncated<const N: usize>(s: &str) -> String<N> {
    let mut out = String::new();
    for ch in s.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
