//! Coordinate layout constants for 2D quadrants and 3D octants.
//!
//! Every element coordinate is an `i32` measured in units of the finest
//! representable cell. The root cell of a tree spans `[0, ROOT_LEN)` on every
//! axis and an element at `level` has side length `2^(MAXLEVEL - level)`.
//!
//! # Coordinate Range
//!
//! ```text
//!   -ROOT_LEN          0              ROOT_LEN         2*ROOT_LEN
//!       │              │                 │                 │
//!       ├──────────────┼─────────────────┼─────────────────┤
//!       │  extended    │   owning tree   │    extended     │
//!       └──────────────┴─────────────────┴─────────────────┘
//!                      └─ valid ─────────┘
//!       └─ extended (3x3 / 3x3x3 block around the tree) ───┘
//! ```
//!
//! The Morton index of an element at `level` keeps `level + 2` bits per axis:
//! `level` bits address the cell inside the tree and two more bits address
//! the block cell (`-1`, `0` or `+1` in root units).
//!
//! # Level Limits
//!
//! | dim | MAXLEVEL | QMAXLEVEL | bits per axis (MAXLEVEL + 2) |
//! |-----|----------|-----------|------------------------------|
//! | 2   | 30       | 29        | 32                           |
//! | 3   | 19       | 18        | 21                           |
//!
//! `MAXLEVEL` is reserved for zero-size node points; cells live at levels
//! `0..=QMAXLEVEL` so that every cell has a well-defined set of children one
//! level deeper.

/// Fixed-width signed coordinate type. Arithmetic on it follows
/// two's-complement wraparound.
pub type Coord = i32;

/// Deepest level for 2D quadrants.
pub const MAXLEVEL_2D: u8 = 30;

/// Deepest level for 3D octants.
pub const MAXLEVEL_3D: u8 = 19;

/// Maximum representable refinement depth for dimension `dim`.
///
/// # Panics
/// At compile time (when used in a const context) for dimensions other than 2 or 3.
#[inline(always)]
pub const fn max_level(dim: usize) -> u8 {
  match dim {
    2 => MAXLEVEL_2D,
    3 => MAXLEVEL_3D,
    _ => panic!("hypercube elements exist in 2 and 3 dimensions only"),
  }
}

/// Deepest level at which an element is a cell with children.
#[inline(always)]
pub const fn qmax_level(dim: usize) -> u8 {
  max_level(dim) - 1
}

/// Side length of the level-0 root cell.
#[inline(always)]
pub const fn root_len(dim: usize) -> Coord {
  1 << max_level(dim)
}

/// Side length of a cell at `level`.
#[inline(always)]
pub const fn cell_len(dim: usize, level: u8) -> Coord {
  debug_assert!(level <= max_level(dim), "level exceeds MAXLEVEL");
  1 << (max_level(dim) - level)
}

/// Number of coordinate bits per axis the Morton index of a deepest-level
/// element needs, including the two extended-block bits.
#[inline(always)]
pub const fn extended_bits(dim: usize) -> u32 {
  max_level(dim) as u32 + 2
}

/// Number of children of every element (`2^dim`).
#[inline(always)]
pub const fn num_children(dim: usize) -> usize {
  1 << dim
}

/// Number of faces of every element (`2 * dim`).
#[inline(always)]
pub const fn num_faces(dim: usize) -> usize {
  2 * dim
}

/// Number of children touching one face (`2^(dim - 1)`).
#[inline(always)]
pub const fn num_face_children(dim: usize) -> usize {
  1 << (dim - 1)
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
