//! Face neighbors and face/child relations.
//!
//! Faces come in pairs per axis: face `2k` is the lower (-axis k) face and
//! face `2k + 1` the upper (+axis k) face.
//!
//! ```text
//!              face 3 (+Y)
//!            ┌───────────┐
//!            │           │
//!   face 0   │           │   face 1
//!    (-X)    │           │    (+X)
//!            │           │
//!            └───────────┘
//!              face 2 (-Y)
//! ```
//!
//! In 3D faces 4 and 5 are -Z and +Z.

use smallvec::SmallVec;

use super::Element;

/// Face on the other side of the same axis.
#[inline(always)]
pub const fn opposite_face(face: usize) -> usize {
  face ^ 1
}

/// Axis a face is normal to.
#[inline(always)]
pub const fn face_axis(face: usize) -> usize {
  face / 2
}

/// Whether a face points in the positive axis direction.
#[inline(always)]
pub const fn is_upper_face(face: usize) -> bool {
  face & 1 == 1
}

impl<const D: usize> Element<D> {
  /// Same-level neighbor across `face`.
  ///
  /// The result may lie outside the root cell; neighbors of a valid element
  /// are always extended. Requires an extended element and `face < NUM_FACES`.
  pub fn face_neighbor(&self, face: usize) -> Self {
    debug_assert!(face < Self::NUM_FACES, "face {} out of range", face);
    debug_assert!(self.is_extended(), "face neighbor of non-extended element {}", self);

    let len = self.side_len();
    let axis = face_axis(face);
    let mut coords = self.coords;
    coords[axis] = if is_upper_face(face) {
      coords[axis].wrapping_add(len)
    } else {
      coords[axis].wrapping_sub(len)
    };
    let neighbor = Self::new(coords, self.level);
    debug_assert!(!self.is_valid() || neighbor.is_extended());
    neighbor
  }

  /// Same-level neighbor across `face` if it lies inside the root cell.
  pub fn face_neighbor_inside(&self, face: usize) -> Option<Self> {
    let neighbor = self.face_neighbor(face);
    neighbor.is_inside_root().then_some(neighbor)
  }

  /// Whether `face` of this element lies on the boundary of the root cell.
  pub fn is_root_boundary(&self, face: usize) -> bool {
    debug_assert!(face < Self::NUM_FACES, "face {} out of range", face);
    let c = self.coords[face_axis(face)];
    if is_upper_face(face) {
      c == Self::ROOT_LEN - self.side_len()
    } else {
      c == 0
    }
  }

  /// The `2^(D-1)` children touching `face`, in child-id order.
  ///
  /// Requires `level < QMAXLEVEL`.
  pub fn children_at_face(&self, face: usize) -> SmallVec<[Self; 4]> {
    debug_assert!(face < Self::NUM_FACES, "face {} out of range", face);

    let axis = face_axis(face);
    let side = usize::from(is_upper_face(face));
    (0..Self::NUM_CHILDREN)
      .filter(|id| (id >> axis) & 1 == side)
      .map(|id| self.child(id))
      .collect()
  }

  /// Face of child `face_child` (an index into
  /// [`Element::children_at_face`]) that lies on `face` of this element.
  ///
  /// Children of a hypercube share the parent's face numbering.
  pub fn face_child_face(&self, face: usize, face_child: usize) -> usize {
    debug_assert!(face < Self::NUM_FACES, "face {} out of range", face);
    debug_assert!(
      face_child < Self::NUM_FACE_CHILDREN,
      "face child {} out of range",
      face_child
    );
    face
  }

  /// Face of the parent that `face` of this element lies on, or `None` if
  /// this face is interior to the parent. The root returns `face`.
  pub fn face_parent_face(&self, face: usize) -> Option<usize> {
    debug_assert!(face < Self::NUM_FACES, "face {} out of range", face);

    if self.level == 0 {
      return Some(face);
    }
    let side = usize::from(is_upper_face(face));
    ((self.child_id() >> face_axis(face)) & 1 == side).then_some(face)
  }
}

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;
