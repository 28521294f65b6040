//! Element - immutable value type for one cell of a refined hypercube tree.
//!
//! An element is a set of anchor coordinates (the lower corner of the cell,
//! one per axis) plus a refinement level. Level 0 is the root cell, deeper
//! levels are smaller. All navigation is pure coordinate math on the anchor;
//! no tree structure is stored anywhere.
//!
//! # Module Structure
//!
//! - [`navigation`]: parent, child, sibling, ancestor and family queries
//! - [`ordering`]: space-filling-curve order and the Morton linear id
//! - [`descendants`]: first/last/corner descendants and common ancestors
//! - [`face`]: face neighbors and face/child relations
//! - [`geometry`]: vertex and reference-space coordinates
//!
//! # Preconditions
//!
//! Operations document what they require of their inputs (level bounds,
//! containment). Violations are caller bugs: they trip a `debug_assert!` in
//! debug builds and are unchecked in release builds. Where a caller can
//! legitimately ask for something that does not exist, a `checked_*` or
//! `Option`-returning variant is provided instead.

use std::fmt;

use crate::constants::{self, Coord};

pub mod descendants;
pub mod face;
pub mod geometry;
pub mod navigation;
pub mod ordering;

/// Axis names used when printing elements.
const AXIS_NAMES: [&str; 3] = ["x", "y", "z"];

/// One cell of a hypercube tree in `D` dimensions.
///
/// Coordinates are anchored at the cell's lower corner and measured in units
/// of the finest representable cell. Two elements are equal exactly when
/// their coordinates and levels are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Element<const D: usize> {
  /// Anchor coordinate on each axis (x, y[, z]).
  pub coords: [Coord; D],
  /// Refinement level (0 = root).
  pub level: u8,
}

/// 2D element (quadrilateral).
pub type Quad = Element<2>;

/// 3D element (hexahedron).
pub type Hex = Element<3>;

impl<const D: usize> Element<D> {
  /// Rejects unsupported dimensions when the type is instantiated.
  const SUPPORTED_DIM: () = assert!(D == 2 || D == 3, "Element supports D = 2 or D = 3");

  /// Spatial dimension.
  pub const DIM: usize = D;
  /// Deepest representable level (zero-size node points).
  pub const MAXLEVEL: u8 = constants::max_level(D);
  /// Deepest level of a cell; children exist below `QMAXLEVEL` only.
  pub const QMAXLEVEL: u8 = constants::qmax_level(D);
  /// Side length of the root cell.
  pub const ROOT_LEN: Coord = constants::root_len(D);
  /// Children per element.
  pub const NUM_CHILDREN: usize = constants::num_children(D);
  /// Corners per element.
  pub const NUM_CORNERS: usize = constants::num_children(D);
  /// Faces per element.
  pub const NUM_FACES: usize = constants::num_faces(D);
  /// Children touching each face.
  pub const NUM_FACE_CHILDREN: usize = constants::num_face_children(D);

  /// Create an element from anchor coordinates and a level.
  ///
  /// No validity check is performed; use [`Element::is_valid`] or
  /// [`Element::is_extended`] when the input is untrusted.
  #[inline]
  pub const fn new(coords: [Coord; D], level: u8) -> Self {
    let () = Self::SUPPORTED_DIM;
    Self { coords, level }
  }

  /// The level-0 root cell of a tree.
  #[inline]
  pub const fn root() -> Self {
    Self::new([0; D], 0)
  }

  /// Refinement level.
  #[inline]
  pub const fn level(&self) -> u8 {
    self.level
  }

  /// Anchor coordinates.
  #[inline]
  pub const fn coords(&self) -> [Coord; D] {
    self.coords
  }

  /// Side length of a cell at `level`.
  #[inline(always)]
  pub const fn cell_len(level: u8) -> Coord {
    constants::cell_len(D, level)
  }

  /// Side length of this element.
  #[inline(always)]
  pub const fn side_len(&self) -> Coord {
    Self::cell_len(self.level)
  }

  /// Check that every coordinate lies in `[0, ROOT_LEN)`.
  ///
  /// Alignment and level are not checked.
  #[inline]
  pub fn is_inside_root(&self) -> bool {
    self.coords.iter().all(|&c| (0..Self::ROOT_LEN).contains(&c))
  }

  /// Check that every coordinate lies in `[-ROOT_LEN, 2 * ROOT_LEN)`, the
  /// 3x3 (2D) or 3x3x3 (3D) block of root cells centered on the tree.
  ///
  /// Alignment and level are not checked.
  #[inline]
  pub fn is_inside_extended_block(&self) -> bool {
    let upper = Self::ROOT_LEN + (Self::ROOT_LEN - 1);
    self
      .coords
      .iter()
      .all(|&c| c >= -Self::ROOT_LEN && c <= upper)
  }

  /// Level is a cell level and every coordinate is a multiple of the side length.
  #[inline]
  fn is_aligned_cell(&self) -> bool {
    if self.level > Self::QMAXLEVEL {
      return false;
    }
    let mask = self.side_len() - 1;
    self.coords.iter().all(|&c| c & mask == 0)
  }

  /// A cell of the owning tree: aligned, level at most `QMAXLEVEL`, inside
  /// the root.
  #[inline]
  pub fn is_valid(&self) -> bool {
    self.is_aligned_cell() && self.is_inside_root()
  }

  /// A cell of the owning tree or of its immediate surroundings: aligned,
  /// level at most `QMAXLEVEL`, inside the extended block.
  #[inline]
  pub fn is_extended(&self) -> bool {
    self.is_aligned_cell() && self.is_inside_extended_block()
  }

  /// A zero-size point at `MAXLEVEL` lying on the `QMAXLEVEL` grid of the
  /// root cell.
  ///
  /// With `inside == false` the upper root boundary (`ROOT_LEN`) is a valid
  /// node position. With `inside == true` it is excluded and the last
  /// integer position `ROOT_LEN - 1` is accepted in its place.
  pub fn is_node(&self, inside: bool) -> bool {
    let upper = Self::ROOT_LEN - Coord::from(inside);
    let grid_mask: Coord = (1 << (Self::MAXLEVEL - Self::QMAXLEVEL)) - 1;
    self.level == Self::MAXLEVEL
      && self.coords.iter().all(|&c| {
        c >= 0
          && c <= upper
          && (c & grid_mask == 0 || (inside && c == Self::ROOT_LEN - 1))
      })
  }

  /// Emit a debug event describing this element.
  ///
  /// Compiles to nothing without the `tracing` feature.
  #[inline]
  pub fn trace(&self) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
      dim = D,
      coords = ?self.coords,
      level = self.level,
      "{}",
      self
    );
  }
}

impl<const D: usize> fmt::Display for Element<D> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (name, c) in AXIS_NAMES.iter().zip(self.coords.iter()) {
      write!(f, "{} 0x{:x} ", name, c)?;
    }
    write!(f, "level {}", self.level)
  }
}
