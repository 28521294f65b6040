//! Vertex coordinates and reference-space geometry.
//!
//! Reference space maps the root cell onto the unit square/cube:
//!
//! ```text
//! reference = coord / ROOT_LEN
//! ```
//!
//! Extended elements map outside `[0, 1]` (into `[-1, 2)`), which the
//! multi-tree topology layer resolves to neighboring trees.

use glam::{DVec2, DVec3};

use crate::constants::Coord;

use super::Element;

impl<const D: usize> Element<D> {
  /// Integer coordinates of corner `vertex`.
  ///
  /// Bit `k` of `vertex` selects the upper end of axis `k`. Requires a
  /// valid element.
  pub fn vertex_coords(&self, vertex: usize) -> [Coord; D] {
    debug_assert!(self.is_valid(), "vertex of invalid element {}", self);
    debug_assert!(vertex < Self::NUM_CORNERS, "vertex {} out of range", vertex);

    let len = self.side_len();
    let mut coords = self.coords;
    for (axis, c) in coords.iter_mut().enumerate() {
      if vertex & (1 << axis) != 0 {
        *c += len;
      }
    }
    coords
  }

  /// Corner `vertex` in reference space.
  pub fn vertex_reference_coords(&self, vertex: usize) -> [f64; D] {
    debug_assert!(vertex < Self::NUM_CORNERS, "vertex {} out of range", vertex);

    let len = f64::from(self.side_len());
    let mut out = [0.0; D];
    for (axis, r) in out.iter_mut().enumerate() {
      let offset = if vertex & (1 << axis) != 0 { len } else { 0.0 };
      *r = (f64::from(self.coords[axis]) + offset) / f64::from(Self::ROOT_LEN);
    }
    out
  }

  /// Side length in reference space (`2^-level`).
  #[inline]
  pub fn reference_size(&self) -> f64 {
    f64::from(self.side_len()) / f64::from(Self::ROOT_LEN)
  }
}

impl Element<2> {
  /// Lower corner in reference space.
  #[inline]
  pub fn reference_min(&self) -> DVec2 {
    let [x, y] = self.vertex_reference_coords(0);
    DVec2::new(x, y)
  }

  /// Center in reference space.
  #[inline]
  pub fn reference_center(&self) -> DVec2 {
    self.reference_min() + DVec2::splat(self.reference_size() * 0.5)
  }
}

impl Element<3> {
  /// Lower corner in reference space.
  #[inline]
  pub fn reference_min(&self) -> DVec3 {
    let [x, y, z] = self.vertex_reference_coords(0);
    DVec3::new(x, y, z)
  }

  /// Center in reference space.
  #[inline]
  pub fn reference_center(&self) -> DVec3 {
    self.reference_min() + DVec3::splat(self.reference_size() * 0.5)
  }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;
