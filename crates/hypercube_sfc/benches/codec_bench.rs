//! Benchmarks for the per-element hot paths and the bulk helpers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hypercube_sfc::{sort_elements, uniform, Element, Hex, Quad};

/// A fixed pseudo-random walk down the tree, deterministic across runs.
fn deep_element<const D: usize>(level: u8) -> Element<D> {
  let mut e = Element::<D>::root();
  let mut state = 0x9e37_79b9_u32;
  while e.level < level {
    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    e = e.child((state >> 24) as usize % Element::<D>::NUM_CHILDREN);
  }
  e
}

/// Encode and decode the Morton id.
fn bench_linear_id(c: &mut Criterion) {
  let quad: Quad = deep_element(Quad::QMAXLEVEL);
  let hex: Hex = deep_element(Hex::QMAXLEVEL);

  c.bench_function("linear_id (2D, QMAXLEVEL)", |b| {
    b.iter(|| black_box(&quad).linear_id(black_box(Quad::QMAXLEVEL)))
  });
  c.bench_function("linear_id (3D, QMAXLEVEL)", |b| {
    b.iter(|| black_box(&hex).linear_id(black_box(Hex::QMAXLEVEL)))
  });

  let id = hex.linear_id(Hex::QMAXLEVEL);
  c.bench_function("from_linear_id (3D, QMAXLEVEL)", |b| {
    b.iter(|| Hex::from_linear_id(black_box(Hex::QMAXLEVEL), black_box(id)))
  });
}

/// Structural navigation.
fn bench_navigation(c: &mut Criterion) {
  let hex: Hex = deep_element(12);

  c.bench_function("children (3D)", |b| b.iter(|| black_box(&hex).children()));
  c.bench_function("parent (3D)", |b| b.iter(|| black_box(&hex).parent()));
  c.bench_function("face_neighbor (3D)", |b| {
    b.iter(|| black_box(&hex).face_neighbor(black_box(5)))
  });

  let other: Hex = deep_element(15).face_neighbor(0);
  c.bench_function("nearest_common_ancestor (3D)", |b| {
    b.iter(|| black_box(&hex).nearest_common_ancestor(black_box(&other)))
  });
  c.bench_function("compare (3D)", |b| {
    b.iter(|| black_box(&hex).compare(black_box(&other)))
  });
}

/// Parallel sort of a shuffled uniform level.
fn bench_sort(c: &mut Criterion) {
  let mut group = c.benchmark_group("sort_elements");

  for level in [4u8, 6, 8] {
    let mut elements: Vec<Quad> = uniform(level);
    elements.reverse();
    group.bench_with_input(BenchmarkId::from_parameter(level), &elements, |b, elements| {
      b.iter(|| {
        let mut work = elements.clone();
        sort_elements(&mut work);
        black_box(work)
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_linear_id, bench_navigation, bench_sort);
criterion_main!(benches);
