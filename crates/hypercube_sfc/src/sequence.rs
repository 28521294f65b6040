//! Bulk operations on element arrays.
//!
//! The forest driver keeps the leaves of every tree in a flat array sorted
//! along the space-filling curve. These helpers sort, check and encode such
//! arrays in parallel.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::element::Element;

/// Sort elements along the space-filling curve.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "sequence::sort_elements", fields(len = elements.len()))
)]
pub fn sort_elements<const D: usize>(elements: &mut [Element<D>]) {
  elements.par_sort_unstable_by(Element::<D>::compare);
}

/// Check that elements are in non-decreasing curve order.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip_all, name = "sequence::is_sorted", fields(len = elements.len()))
)]
pub fn is_sorted<const D: usize>(elements: &[Element<D>]) -> bool {
  elements
    .par_windows(2)
    .all(|pair| pair[0].compare(&pair[1]) != Ordering::Greater)
}

/// Linear ids of all elements at `level`, in input order.
#[cfg_attr(
  feature = "tracing",
  tracing::instrument(skip(elements), name = "sequence::linear_ids", fields(len = elements.len()))
)]
pub fn linear_ids<const D: usize>(elements: &[Element<D>], level: u8) -> Vec<u64> {
  elements.par_iter().map(|e| e.linear_id(level)).collect()
}

/// Uniform refinement of the root down to `level`, in curve order.
///
/// Produces `2^(D * level)` elements.
#[cfg_attr(feature = "tracing", tracing::instrument(name = "sequence::uniform"))]
pub fn uniform<const D: usize>(level: u8) -> Vec<Element<D>> {
  debug_assert!(level <= Element::<D>::QMAXLEVEL);
  let count = 1u64 << (D as u32 * u32::from(level));
  (0..count)
    .into_par_iter()
    .map(|id| Element::from_linear_id(level, id))
    .collect()
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
