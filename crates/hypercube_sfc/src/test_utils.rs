//! Shared helpers for element tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::element::Element;

/// Deterministic RNG so failures reproduce.
pub fn seeded_rng(seed: u64) -> StdRng {
  StdRng::seed_from_u64(seed)
}

/// Random valid element at `level`.
pub fn random_valid<const D: usize>(rng: &mut StdRng, level: u8) -> Element<D> {
  let len = Element::<D>::cell_len(level);
  let cells = 1i32 << level;
  let coords = std::array::from_fn(|_| rng.random_range(0..cells) * len);
  Element::new(coords, level)
}

/// Random valid element at a random level in `0..=max_level`.
pub fn random_valid_any_level<const D: usize>(rng: &mut StdRng, max_level: u8) -> Element<D> {
  let level = rng.random_range(0..=max_level);
  random_valid(rng, level)
}

/// Random extended element at `level`, anywhere in the 3x3(x3) block.
pub fn random_extended<const D: usize>(rng: &mut StdRng, level: u8) -> Element<D> {
  let len = Element::<D>::cell_len(level);
  let cells = 1i32 << level;
  let coords = std::array::from_fn(|_| rng.random_range(-cells..2 * cells) * len);
  Element::new(coords, level)
}

/// All elements of levels `0..=max_level` in depth-first order: every
/// element precedes its children, child 0's subtree precedes child 1's.
pub fn depth_first<const D: usize>(max_level: u8) -> Vec<Element<D>> {
  fn visit<const D: usize>(e: Element<D>, max_level: u8, out: &mut Vec<Element<D>>) {
    out.push(e);
    if e.level < max_level {
      for child in e.children() {
        visit(child, max_level, out);
      }
    }
  }

  let mut out = Vec::new();
  visit(Element::root(), max_level, &mut out);
  out
}
