use super::*;
use crate::element::{Hex, Quad};

/// Vertex bits select the upper end of each axis.
#[test]
fn test_vertex_coords_2d() {
  let e = Quad::root().child(3);
  let l = Quad::cell_len(1);

  assert_eq!(e.vertex_coords(0), [l, l]);
  assert_eq!(e.vertex_coords(1), [2 * l, l]);
  assert_eq!(e.vertex_coords(2), [l, 2 * l]);
  assert_eq!(e.vertex_coords(3), [2 * l, 2 * l]);
}

/// Vertex 0 is the anchor, vertex 7 the opposite corner.
#[test]
fn test_vertex_coords_3d() {
  let e = Hex::root().child(2).child(5);
  let len = e.side_len();

  assert_eq!(e.vertex_coords(0), e.coords);
  assert_eq!(e.vertex_coords(7), e.coords.map(|c| c + len));
}

/// Root corners map to the unit square.
#[test]
fn test_vertex_reference_coords_root() {
  let root = Quad::root();
  assert_eq!(root.vertex_reference_coords(0), [0.0, 0.0]);
  assert_eq!(root.vertex_reference_coords(1), [1.0, 0.0]);
  assert_eq!(root.vertex_reference_coords(2), [0.0, 1.0]);
  assert_eq!(root.vertex_reference_coords(3), [1.0, 1.0]);
}

/// Extended elements map outside the unit cube.
#[test]
fn test_vertex_reference_coords_extended() {
  let e = Hex::new([-Hex::ROOT_LEN, Hex::ROOT_LEN, 0], 0);
  assert_eq!(e.vertex_reference_coords(0), [-1.0, 1.0, 0.0]);
  assert_eq!(e.vertex_reference_coords(7), [0.0, 2.0, 1.0]);
}

/// Reference size halves per level.
#[test]
fn test_reference_size() {
  assert_eq!(Quad::root().reference_size(), 1.0);
  assert_eq!(Quad::root().child(0).reference_size(), 0.5);
  assert_eq!(Hex::root().child(0).child(0).child(0).reference_size(), 0.125);
}

/// 2D center of a quadrant.
#[test]
fn test_reference_center_2d() {
  let e = Quad::root().child(1);
  assert_eq!(e.reference_min(), DVec2::new(0.5, 0.0));
  assert_eq!(e.reference_center(), DVec2::new(0.75, 0.25));
}

/// 3D center of an octant.
#[test]
fn test_reference_center_3d() {
  let e = Hex::root().child(6);
  assert_eq!(e.reference_min(), DVec3::new(0.0, 0.5, 0.5));
  assert_eq!(e.reference_center(), DVec3::new(0.25, 0.75, 0.75));
}
