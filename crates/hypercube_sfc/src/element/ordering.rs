//! Space-filling-curve order and the Morton linear id.
//!
//! # Linear Id Layout
//!
//! The linear id of an element at `level` interleaves the top `level + 2`
//! bits of every coordinate, axis 0 least significant within each group:
//!
//! ```text
//! 2D:  ... y2 x2 y1 x1 y0 x0
//! 3D:  ... z1 y1 x1 z0 y0 x0
//! ```
//!
//! For a valid element the two extra bits per axis are zero, so the linear id
//! of a level-`L` element is its position among the `2^(D*L)` elements of
//! that level in curve order. Extended elements use the two extra bits to
//! encode the block cell they sit in; negative coordinates keep their sign
//! bits through the arithmetic shift.

use std::cmp::Ordering;

use crate::constants::Coord;

use super::Element;

impl<const D: usize> Element<D> {
  /// Total order along the space-filling curve.
  ///
  /// Elements with identical coordinates order by level, so an ancestor
  /// sorts before the descendants sharing its anchor. Otherwise the axis
  /// holding the most significant differing coordinate bit decides (ties go
  /// to the higher axis), comparing its coordinates as signed values.
  ///
  /// For extended elements outside the root this order can differ from the
  /// order of their linear ids, which treat the sign bits as high id bits.
  ///
  /// Both elements must be extended elements or nodes.
  pub fn compare(&self, other: &Self) -> Ordering {
    debug_assert!(self.is_node(true) || self.is_extended(), "cannot order {}", self);
    debug_assert!(other.is_node(true) || other.is_extended(), "cannot order {}", other);
    self.curve_cmp(other)
  }

  fn curve_cmp(&self, other: &Self) -> Ordering {
    // Unsigned so the sign bit counts as the most significant bit.
    let mut top_axis = None;
    let mut top_bits = 0;
    for axis in 0..D {
      let diff = (self.coords[axis] ^ other.coords[axis]) as u32;
      let bits = u32::BITS - diff.leading_zeros();
      if diff != 0 && bits >= top_bits {
        top_axis = Some(axis);
        top_bits = bits;
      }
    }

    match top_axis {
      None => self.level.cmp(&other.level),
      Some(axis) => self.coords[axis].cmp(&other.coords[axis]),
    }
  }

  /// Morton index of this element's ancestor (or descendant anchor) at `level`.
  ///
  /// Takes the top `level + 2` bits of every coordinate and interleaves them,
  /// giving a `D * (level + 2)` bit id. Requires an extended element and
  /// `level <= MAXLEVEL`.
  pub fn linear_id(&self, level: u8) -> u64 {
    debug_assert!(self.is_extended(), "linear id of non-extended element {}", self);
    debug_assert!(level <= Self::MAXLEVEL, "level {} exceeds MAXLEVEL", level);

    let shift = u32::from(Self::MAXLEVEL - level);
    let groups = u32::from(level) + 2;
    let mut id = 0u64;
    for (axis, &c) in self.coords.iter().enumerate() {
      // Sign-extending to 64 bits keeps the high bits of negative coordinates.
      let bits = (c >> shift) as i64 as u64;
      for i in 0..groups {
        id |= (bits & (1 << i)) << ((D as u32 - 1) * i + axis as u32);
      }
    }
    id
  }

  /// Element at `level` whose linear id is `id`; the exact inverse of
  /// [`Element::linear_id`].
  ///
  /// Requires `level <= QMAXLEVEL` and, below `QMAXLEVEL`, an id of at most
  /// `D * (level + 2)` bits.
  pub fn from_linear_id(level: u8, id: u64) -> Self {
    debug_assert!(level <= Self::QMAXLEVEL, "level {} exceeds QMAXLEVEL", level);
    debug_assert!(
      level == Self::QMAXLEVEL || id < 1u64 << (D as u32 * (u32::from(level) + 2)),
      "linear id {:#x} too large for level {}",
      id,
      level
    );

    let groups = u32::from(level) + 2;
    let mut coords = [0; D];
    for (axis, c) in coords.iter_mut().enumerate() {
      let mut bits = 0u32;
      for i in 0..groups {
        bits |= (((id >> (D as u32 * i + axis as u32)) & 1) as u32) << i;
      }
      *c = Self::sign_extend(bits << (Self::MAXLEVEL - level));
    }

    let element = Self::new(coords, level);
    debug_assert!(element.is_extended());
    element
  }

  /// Reinterpret the low `MAXLEVEL + 2` bits of `raw` as two's complement.
  ///
  /// Values at or above `2^(MAXLEVEL + 1)` lie beyond the positive extended
  /// range and become `raw - 2^(MAXLEVEL + 2)`. In 2D the extended bits fill
  /// the coordinate type and the cast alone wraps.
  #[inline(always)]
  fn sign_extend(raw: u32) -> Coord {
    let unused = Coord::BITS - (u32::from(Self::MAXLEVEL) + 2);
    ((raw << unused) as Coord) >> unused
  }

  /// Next element at the same level along the curve, or `None` for the last
  /// element of the root cell.
  ///
  /// Requires a valid element.
  pub fn successor(&self) -> Option<Self> {
    debug_assert!(self.is_valid(), "successor of invalid element {}", self);

    let id = self.linear_id(self.level);
    let last = (1u64 << (D as u32 * u32::from(self.level))) - 1;
    if id >= last {
      return None;
    }
    Some(Self::from_linear_id(self.level, id + 1))
  }
}

impl<const D: usize> Ord for Element<D> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.curve_cmp(other)
  }
}

impl<const D: usize> PartialOrd for Element<D> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;
