use std::{
  hint::black_box,
  ptr::NonNull,
};

use criterion::{
  BenchmarkId,
  Criterion,
  criterion_group,
  criterion_main,
};
use liquidmem::prelude::*;
use rand::{
  Rng,
  SeedableRng,
  rngs::StdRng,
};

const ITEMS: [usize; 3] = [1024, 4096, 16384];
const DIV: usize = 4;

fn fill(pool: &mut Pool, n: usize) -> Vec<Option<NonNull<u32>>> {
  (0..n)
    .map(|i| {
      let item = pool.allocate().unwrap().cast::<u32>();
      unsafe { item.as_ptr().write_unaligned(i as u32) };
      Some(item)
    })
    .collect()
}

fn bench_pool_allocate(c: &mut Criterion) {
  let mut group = c.benchmark_group("pool_allocate");

  for n in ITEMS {
    group.bench_with_input(BenchmarkId::new("pool", n), &n, |b, &n| {
      b.iter(|| {
        let mut pool = Pool::new(n / DIV, size_of::<u32>()).unwrap();
        black_box(fill(&mut pool, n));
      });
    });

    group.bench_with_input(BenchmarkId::new("box", n), &n, |b, &n| {
      b.iter(|| {
        let items: Vec<Box<u32>> = (0..n).map(|i| Box::new(i as u32)).collect();
        black_box(items);
      });
    });
  }

  group.finish();
}

fn bench_pool_release(c: &mut Criterion) {
  let mut group = c.benchmark_group("pool_release");

  for n in ITEMS {
    group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
      let mut pool = Pool::new(n / DIV, size_of::<u32>()).unwrap();

      b.iter(|| {
        let items = fill(&mut pool, n);
        for item in items.into_iter().flatten() {
          pool.release(item.cast()).unwrap();
        }
      });
    });
  }

  group.finish();
}

fn bench_pool_reuse(c: &mut Criterion) {
  let mut group = c.benchmark_group("pool_reuse");

  for n in ITEMS {
    group.bench_with_input(BenchmarkId::new("pool", n), &n, |b, &n| {
      let mut rng = StdRng::seed_from_u64(n as u64);
      let mut pool = Pool::new(n / DIV, size_of::<u32>()).unwrap();
      let mut items = fill(&mut pool, n);

      b.iter(|| {
        let mut released = Vec::with_capacity(n / 2);
        for _ in 0..n / 2 {
          let r = rng.random_range(0..n);
          if let Some(item) = items[r].take() {
            pool.release(item.cast()).unwrap();
            released.push(r);
          }
        }
        for r in released {
          let item = pool.allocate().unwrap().cast::<u32>();
          unsafe { item.as_ptr().write_unaligned(r as u32) };
          items[r] = Some(item);
        }
      });
    });

    group.bench_with_input(BenchmarkId::new("box", n), &n, |b, &n| {
      let mut rng = StdRng::seed_from_u64(n as u64);
      let mut items: Vec<Option<Box<u32>>> = (0..n).map(|i| Some(Box::new(i as u32))).collect();

      b.iter(|| {
        let mut released = Vec::with_capacity(n / 2);
        for _ in 0..n / 2 {
          let r = rng.random_range(0..n);
          if items[r].take().is_some() {
            released.push(r);
          }
        }
        for r in released {
          items[r] = Some(Box::new(r as u32));
        }
      });
    });
  }

  group.finish();
}

fn bench_pool_reset(c: &mut Criterion) {
  c.bench_function("pool_fill_reset_4096", |b| {
    let mut pool = Pool::new(1024, size_of::<u64>()).unwrap();

    b.iter(|| {
      for _ in 0..4096 {
        black_box(pool.allocate().unwrap());
      }
      pool.reset();
    });
  });
}

criterion_group!(
  benches,
  bench_pool_allocate,
  bench_pool_release,
  bench_pool_reuse,
  bench_pool_reset
);
criterion_main!(benches);
