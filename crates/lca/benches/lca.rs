use bench::RuntimeProfile;
use bench::apply_runtime_config;
use bench::default_rng;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use lca::LcaIndex;
use lca::RootedTree;
use rand::Rng;
use std::hint::black_box;

const SIZES: [usize; 4] = [1_024, 16_384, 131_072, 1_048_576];

#[derive(Clone, Copy, Debug)]
enum Shape {
    Random,
    Caterpillar,
    Star,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Caterpillar => "caterpillar",
            Self::Star => "star",
        }
    }

    fn parent<R: Rng + ?Sized>(self, rng: &mut R, v: usize) -> usize {
        match self {
            Self::Random => rng.random_range(0..v),
            // Even vertices form the spine, odd vertices hang off it.
            Self::Caterpillar => {
                if v % 2 == 0 {
                    v.saturating_sub(2)
                } else {
                    v - 1
                }
            }
            Self::Star => 0,
        }
    }
}

fn generate_tree<R: Rng + ?Sized>(rng: &mut R, shape: Shape, n: usize) -> RootedTree {
    let edges = (1..n)
        .map(|v| (shape.parent(rng, v), v))
        .collect::<Vec<_>>();
    RootedTree::from_edges(n, &edges)
}

fn generate_pairs<R: Rng + ?Sized>(rng: &mut R, n: usize, q: usize) -> Vec<(usize, usize)> {
    (0..q)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}

fn bench_lca(c: &mut Criterion) {
    let mut rng = default_rng();

    for shape in [Shape::Random, Shape::Caterpillar, Shape::Star] {
        let mut group = c.benchmark_group(format!("lca/{}", shape.label()));

        for &size in &SIZES {
            apply_runtime_config(&mut group, RuntimeProfile::for_len(size));
            let tree = generate_tree(&mut rng, shape, size);
            let pairs = generate_pairs(&mut rng, size, size);

            group.bench_function(BenchmarkId::new("preprocess", size), |bencher| {
                bencher.iter(|| black_box(LcaIndex::new(black_box(&tree))))
            });

            let index = LcaIndex::new(&tree);
            group.bench_function(BenchmarkId::new("query_n", size), |bencher| {
                bencher.iter(|| {
                    let mut acc = 0_usize;
                    for &(u, v) in &pairs {
                        acc ^= index.lca(black_box(u), black_box(v));
                    }
                    black_box(acc);
                })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_lca);
criterion_main!(benches);
