//! Descendant ranges and common ancestors.

use std::cmp::min;

use crate::constants::Coord;

use super::Element;

impl<const D: usize> Element<D> {
  /// Descendant at `level` sharing this element's anchor (its first cell
  /// along the curve).
  ///
  /// Requires an extended element and `self.level <= level <= QMAXLEVEL`.
  pub fn first_descendant(&self, level: u8) -> Self {
    debug_assert!(self.is_extended());
    debug_assert!(
      self.level <= level && level <= Self::QMAXLEVEL,
      "descendant level {} out of range for {}",
      level,
      self
    );
    Self::new(self.coords, level)
  }

  /// Descendant at `level` in this element's far corner (its last cell along
  /// the curve).
  ///
  /// Requires an extended element and `self.level <= level <= QMAXLEVEL`.
  pub fn last_descendant(&self, level: u8) -> Self {
    debug_assert!(self.is_extended());
    debug_assert!(
      self.level <= level && level <= Self::QMAXLEVEL,
      "descendant level {} out of range for {}",
      level,
      self
    );
    let shift = self.side_len() - Self::cell_len(level);
    Self::new(self.coords.map(|c| c + shift), level)
  }

  /// Descendant at `level` touching corner `corner` of this element.
  ///
  /// Bit `k` of `corner` selects the upper (set) or lower (clear) end of
  /// axis `k`. Requires `self.level <= level <= QMAXLEVEL`.
  pub fn corner_descendant(&self, corner: usize, level: u8) -> Self {
    debug_assert!(corner < Self::NUM_CORNERS, "corner {} out of range", corner);
    debug_assert!(
      self.level <= level && level <= Self::QMAXLEVEL,
      "descendant level {} out of range for {}",
      level,
      self
    );

    let shift = self.side_len() - Self::cell_len(level);
    let mut coords = self.coords;
    for (axis, c) in coords.iter_mut().enumerate() {
      if corner & (1 << axis) != 0 {
        *c += shift;
      }
    }
    Self::new(coords, level)
  }

  /// Finest element containing both `self` and `other`.
  ///
  /// Requires two extended elements.
  pub fn nearest_common_ancestor(&self, other: &Self) -> Self {
    debug_assert!(self.is_extended());
    debug_assert!(other.is_extended());

    let diff = self
      .coords
      .iter()
      .zip(other.coords.iter())
      .fold(0u32, |acc, (&a, &b)| acc | (a ^ b) as u32);
    // One past the highest differing bit: the side-length exponent of the ancestor.
    let bits = u32::BITS - diff.leading_zeros();
    debug_assert!(
      bits <= u32::from(Self::MAXLEVEL),
      "{} and {} have no common ancestor",
      self,
      other
    );

    let mask = u32::MAX.checked_shl(bits).unwrap_or(0) as Coord;
    let level = (Self::MAXLEVEL as u32).saturating_sub(bits) as u8;
    let ancestor = Self::new(
      self.coords.map(|c| c & mask),
      min(level, min(self.level, other.level)),
    );
    debug_assert!(ancestor.is_extended());
    ancestor
  }
}

#[cfg(test)]
#[path = "descendants_test.rs"]
mod descendants_test;
