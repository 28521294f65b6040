//! hypercube_sfc - Morton-encoded elements of adaptive quadtrees and octrees
//!
//! This crate is the element kernel of an adaptive hypercube mesh: every cell
//! of a refined quadrilateral (2D) or hexahedral (3D) tree is a compact value
//! of anchor coordinates plus a level, and all tree navigation is bit math on
//! those coordinates.
//!
//! # Features
//!
//! - **Dimension-generic**: one implementation over `Element<const D: usize>`
//!   with [`Quad`] (`D = 2`) and [`Hex`] (`D = 3`)
//! - **Structural navigation**: parent, children, siblings, ancestor ids,
//!   family checks
//! - **Curve order**: a total order along the Morton space-filling curve and
//!   the matching linear id, exact for extended (out-of-tree) elements
//! - **Geometry**: descendant ranges, nearest common ancestors, face
//!   neighbors, reference-space coordinates
//! - **Bulk helpers**: parallel sorting and encoding of element arrays
//!
//! # Example
//!
//! ```ignore
//! use hypercube_sfc::Quad;
//!
//! let root = Quad::root();
//! let children = root.children();
//!
//! assert_eq!(children[2].linear_id(1), 2);
//! assert_eq!(children[1].nearest_common_ancestor(&children[2]), root);
//! assert_eq!(children[3].parent(), root);
//! ```

pub mod constants;
pub mod element;
pub mod sequence;

// Re-export commonly used items
pub use constants::{Coord, MAXLEVEL_2D, MAXLEVEL_3D};
pub use element::face::{face_axis, is_upper_face, opposite_face};
pub use element::{Element, Hex, Quad};
pub use sequence::{is_sorted, linear_ids, sort_elements, uniform};

#[cfg(test)]
pub(crate) mod test_utils;
