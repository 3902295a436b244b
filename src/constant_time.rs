//! Constant-time operations
use subtle::ConstantTimeEq;

/// Compares `a` and `b` in constant time with respect to their contents.
/// The length comparison is not constant-time; lengths are assumed public.
pub fn eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
