//! Parent, child, sibling and family relations.
//!
//! Child ids use one bit per axis:
//! - bit 0: +X half
//! - bit 1: +Y half
//! - bit 2: +Z half (3D only)
//!
//! so the children of an element are ordered x fastest, then y, then z. This
//! is the same interleaving the Morton linear id uses.

use smallvec::SmallVec;

use super::Element;

impl<const D: usize> Element<D> {
  /// Parent element (one level coarser).
  ///
  /// Requires an extended element with `level > 0`.
  pub fn parent(&self) -> Self {
    debug_assert!(self.is_extended(), "parent of non-extended element {}", self);
    debug_assert!(self.level > 0, "the root has no parent");

    let len = self.side_len();
    let parent = Self::new(self.coords.map(|c| c & !len), self.level - 1);
    debug_assert!(parent.is_extended());
    parent
  }

  /// Parent element, or `None` for the root or a non-extended element.
  pub fn checked_parent(&self) -> Option<Self> {
    if self.level == 0 || !self.is_extended() {
      return None;
    }
    Some(self.parent())
  }

  /// Child `child_id` (one level finer).
  ///
  /// Requires an extended element with `level < QMAXLEVEL` and
  /// `child_id < NUM_CHILDREN`.
  pub fn child(&self, child_id: usize) -> Self {
    debug_assert!(self.is_extended(), "child of non-extended element {}", self);
    debug_assert!(
      self.level < Self::QMAXLEVEL,
      "cannot refine beyond QMAXLEVEL ({})",
      Self::QMAXLEVEL
    );
    debug_assert!(child_id < Self::NUM_CHILDREN, "child id {} out of range", child_id);

    let level = self.level + 1;
    let inc = Self::cell_len(level);
    let mut coords = self.coords;
    for (axis, c) in coords.iter_mut().enumerate() {
      if child_id & (1 << axis) != 0 {
        *c |= inc;
      }
    }
    Self::new(coords, level)
  }

  /// Child `child_id`, or `None` when the element cannot be refined or the
  /// id is out of range.
  pub fn checked_child(&self, child_id: usize) -> Option<Self> {
    if self.level >= Self::QMAXLEVEL || child_id >= Self::NUM_CHILDREN || !self.is_extended() {
      return None;
    }
    Some(self.child(child_id))
  }

  /// All `2^D` children in child-id order.
  pub fn children(&self) -> SmallVec<[Self; 8]> {
    let children: SmallVec<[Self; 8]> = (0..Self::NUM_CHILDREN).map(|id| self.child(id)).collect();
    debug_assert!(Self::is_family(&children));
    children
  }

  /// Write all `2^D` children into `out` in child-id order.
  ///
  /// `out` must hold exactly `NUM_CHILDREN` elements.
  pub fn children_into(&self, out: &mut [Self]) {
    debug_assert_eq!(out.len(), Self::NUM_CHILDREN, "children buffer has wrong size");
    for (id, slot) in out.iter_mut().enumerate() {
      *slot = self.child(id);
    }
  }

  /// Sibling `sibling_id`: the child of this element's parent with that id.
  ///
  /// Requires an extended element with `level > 0`.
  pub fn sibling(&self, sibling_id: usize) -> Self {
    debug_assert!(self.is_extended(), "sibling of non-extended element {}", self);
    debug_assert!(self.level > 0, "the root has no siblings");
    debug_assert!(sibling_id < Self::NUM_CHILDREN, "sibling id {} out of range", sibling_id);

    let len = self.side_len();
    let mut coords = self.coords;
    for (axis, c) in coords.iter_mut().enumerate() {
      if sibling_id & (1 << axis) != 0 {
        *c |= len;
      } else {
        *c &= !len;
      }
    }
    let sibling = Self::new(coords, self.level);
    debug_assert!(sibling.is_extended());
    sibling
  }

  /// Child id of this element's ancestor at `level` relative to that
  /// ancestor's parent. `ancestor_id(0)` is 0.
  ///
  /// Requires an extended element with `level <= self.level`.
  pub fn ancestor_id(&self, level: u8) -> usize {
    debug_assert!(self.is_extended(), "ancestor id of non-extended element {}", self);
    debug_assert!(level <= self.level, "level {} is deeper than element level {}", level, self.level);

    if level == 0 {
      return 0;
    }
    let len = Self::cell_len(level);
    self
      .coords
      .iter()
      .enumerate()
      .filter(|&(_, &c)| c & len != 0)
      .fold(0, |id, (axis, _)| id | (1 << axis))
  }

  /// Position of this element among its siblings.
  #[inline]
  pub fn child_id(&self) -> usize {
    self.ancestor_id(self.level)
  }

  /// Check whether `child` is a direct child of `self`.
  pub fn is_parent(&self, child: &Self) -> bool {
    debug_assert!(self.is_extended());
    debug_assert!(child.is_extended());

    if self.level + 1 != child.level {
      return false;
    }
    let len = child.side_len();
    self
      .coords
      .iter()
      .zip(child.coords.iter())
      .all(|(&p, &c)| p == c & !len)
  }

  /// Check whether `self` is a strict ancestor of `descendant`.
  pub fn is_ancestor(&self, descendant: &Self) -> bool {
    debug_assert!(self.is_extended());
    debug_assert!(descendant.is_extended());

    if self.level >= descendant.level {
      return false;
    }
    let shift = Self::MAXLEVEL - self.level;
    self
      .coords
      .iter()
      .zip(descendant.coords.iter())
      .all(|(&a, &d)| (a ^ d) >> shift == 0)
  }

  /// Check whether `family` is exactly the `2^D` children of one parent, in
  /// child-id order.
  ///
  /// All members must be extended elements.
  pub fn is_family(family: &[Self]) -> bool {
    debug_assert_eq!(family.len(), Self::NUM_CHILDREN, "family must have 2^D members");
    debug_assert!(family.iter().all(Self::is_extended));

    let Some(first) = family.first() else {
      return false;
    };
    let level = first.level;
    if level == 0 || family.len() != Self::NUM_CHILDREN || family.iter().any(|e| e.level != level) {
      return false;
    }

    let inc = Self::cell_len(level);
    // The first member must be child 0, otherwise the offsets below would
    // straddle two parents.
    if first.coords.iter().any(|&c| c & inc != 0) {
      return false;
    }
    family.iter().enumerate().all(|(id, member)| {
      (0..D).all(|axis| {
        let offset = if id & (1 << axis) != 0 { inc } else { 0 };
        member.coords[axis] == first.coords[axis] + offset
      })
    })
  }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;
