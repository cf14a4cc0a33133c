//! Shallow sequence comparison.
//!
//! The panel rebuilds its folder tree only when the set of custom property
//! names actually changed between update ticks, so it compares the previous
//! and current name lists order-sensitively.

/// Check two slices for element-wise equality.
///
/// True iff both slices have the same length and every element at the same
/// index compares equal. Order-sensitive and shallow; no deep equality for
/// nested structures. Elements that are never equal to themselves (e.g.
/// `f64::NAN`) make the comparison false, matching same-value semantics.
#[must_use]
pub fn slices_equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
