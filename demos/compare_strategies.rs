use grid_visualizer::{EventKind, Strategy, Visualizer, VisualizerConfig};

// Runs every strategy on the same 20x20 grid with a few walls and compares how much of the grid
// each one explores before reaching the end.

fn main() {
    let config = VisualizerConfig::default().with_grid_size(20);
    let mut visualizer = Visualizer::new(config).unwrap();
    for i in 0..14 {
        visualizer.toggle_wall(i, 8);
        visualizer.toggle_wall(19 - i, 13);
    }
    for strategy in Strategy::ALL {
        visualizer.select_solver(strategy);
        let run = visualizer.run();
        visualizer.finish_animation(&mut ());
        println!(
            "{:<26} visited {:>3} cells, path of {:>3} nodes, {} visited events",
            strategy.to_string(),
            run.visited_count,
            run.path().map_or(0, |p| p.len()),
            run.events_of(EventKind::Visited).count()
        );
        println!("{}", visualizer.grid());
    }
}
