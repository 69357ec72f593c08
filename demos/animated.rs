use grid_visualizer::{CellChange, Renderer, Strategy, Visualizer, VisualizerConfig};
use std::thread;
use std::time::{Duration, Instant};

// Drives the reveal with the wall clock: the search is computed at once, and its events are
// printed as the scheduler releases them, 5 ms apart.

struct PrintRenderer;

impl Renderer for PrintRenderer {
    fn apply(&mut self, change: &CellChange) {
        println!(
            "{:>5} ms  ({:>2}, {:>2})  {} -> {}",
            change.at_ms, change.row, change.col, change.from, change.to
        );
    }
}

fn main() {
    let config = VisualizerConfig::default().with_grid_size(12);
    let mut visualizer = Visualizer::new(config).unwrap();
    for row in 0..9 {
        visualizer.toggle_wall(row, 6);
    }
    visualizer.select_solver(Strategy::Dijkstra);
    visualizer.run();

    let mut renderer = PrintRenderer;
    let mut last = Instant::now();
    while visualizer.is_animating() {
        thread::sleep(Duration::from_millis(1));
        let now = Instant::now();
        let elapsed = now.duration_since(last).as_millis() as u64;
        if elapsed > 0 {
            visualizer.tick(elapsed, &mut renderer);
            last = now;
        }
    }
    println!("{}", visualizer.grid());
}
