//! Constant-time comparison of signatures.

use subtle::{Choice, ConstantTimeEq};

/// Compare two byte slices in constant time.
///
/// Running time depends only on the lengths, never on where the
/// contents differ.
pub fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Check whether any candidate equals `expected`.
///
/// Every candidate is compared, a match does not stop the scan.
pub fn matches_any<S: AsRef<[u8]>>(candidates: &[S], expected: &[u8]) -> bool {
    candidates
        .iter()
        .fold(Choice::from(0), |found, candidate| {
            found | candidate.as_ref().ct_eq(expected)
        })
        .into()
}
