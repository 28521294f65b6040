use rand::seq::SliceRandom;

use super::*;
use crate::element::{Hex, Quad};
use crate::test_utils::{depth_first, random_valid_any_level, seeded_rng};

// =========================================================================
// Sorting
// =========================================================================

/// Parallel sorting restores the depth-first order.
#[test]
fn test_sort_elements_restores_curve_order() {
  let expected: Vec<Quad> = depth_first(4);
  let mut shuffled = expected.clone();
  shuffled.shuffle(&mut seeded_rng(21));

  sort_elements(&mut shuffled);

  assert_eq!(shuffled, expected);
  assert!(is_sorted(&shuffled));
}

/// Sorting random elements yields a sorted array.
#[test]
fn test_sort_random_elements() {
  let mut rng = seeded_rng(22);
  let mut elements: Vec<Hex> = (0..5_000)
    .map(|_| random_valid_any_level(&mut rng, Hex::QMAXLEVEL))
    .collect();

  sort_elements(&mut elements);

  assert!(is_sorted(&elements));
  assert!(elements.windows(2).all(|w| w[0] <= w[1]));
}

/// A reversed array is not sorted, duplicates are.
#[test]
fn test_is_sorted_detects_disorder() {
  let mut elements: Vec<Quad> = depth_first(2);
  assert!(is_sorted(&elements));

  elements.reverse();
  assert!(!is_sorted(&elements));

  let duplicated = vec![Quad::root(); 3];
  assert!(is_sorted(&duplicated));
  assert!(is_sorted::<2>(&[]));
}

// =========================================================================
// Encoding
// =========================================================================

/// Linear ids are computed per element, in input order.
#[test]
fn test_linear_ids_matches_elements() {
  let elements: Vec<Hex> = Hex::root().children().to_vec();
  assert_eq!(linear_ids(&elements, 1), (0..8).collect::<Vec<u64>>());
  assert_eq!(linear_ids(&elements, 0), vec![0; 8]);
}

/// Uniform refinement enumerates one level in curve order.
#[test]
fn test_uniform_refinement() {
  let level = 3;
  let elements: Vec<Quad> = uniform(level);

  assert_eq!(elements.len(), 64);
  assert!(is_sorted(&elements));
  assert!(elements.iter().all(|e| e.level == level && e.is_valid()));
  assert_eq!(linear_ids(&elements, level), (0..64).collect::<Vec<u64>>());
}

/// Uniform level 1 is the family of the root.
#[test]
fn test_uniform_level_one_is_root_family() {
  let elements: Vec<Hex> = uniform(1);
  assert!(Hex::is_family(&elements));
  assert_eq!(uniform::<3>(0), vec![Hex::root()]);
}
