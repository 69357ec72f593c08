use criterion::{criterion_group, criterion_main, Criterion};
use grid_visualizer::{Grid, SearchEngine, Strategy, DEFAULT_GRID_SIZE};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grids(count: usize, rng: &mut StdRng) -> Vec<Grid> {
    let n = DEFAULT_GRID_SIZE;
    (0..count)
        .map(|_| {
            let far = n as i32 - 3;
            let mut grid = Grid::with_endpoints(n, (2, 2), (far, far)).unwrap();
            for row in 0..n as i32 {
                for col in 0..n as i32 {
                    grid.set_wall(row, col, rng.gen_bool(0.3));
                }
            }
            grid
        })
        .collect()
}

fn strategy_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let grids = random_grids(20, &mut rng);
    for strategy in Strategy::ALL {
        let engine = SearchEngine::new(strategy);
        let name = format!("{strategy}, {DEFAULT_GRID_SIZE}x{DEFAULT_GRID_SIZE}");
        c.bench_function(name.as_str(), |b| {
            b.iter(|| {
                for grid in &grids {
                    black_box(engine.search(grid, &grid.start(), &grid.end()));
                }
            })
        });
    }
}

criterion_group!(benches, strategy_bench);
criterion_main!(benches);
