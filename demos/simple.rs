use grid_visualizer::{Strategy, Visualizer, VisualizerConfig};

// A path is found on a 7x7 grid with shape
//  .......
//  .S.#...
//  ...#...
//  ...#...
//  ...#...
//  .....E.
//  .......
// where
// - # marks a wall
// - S marks the start
// - E marks the end

fn main() {
    let config = VisualizerConfig::default()
        .with_grid_size(7)
        .with_endpoint_margin(1);
    let mut visualizer = Visualizer::new(config).unwrap();
    for row in 1..5 {
        visualizer.toggle_wall(row, 3);
    }
    visualizer.select_solver(Strategy::AStar);
    let run = visualizer.run();
    visualizer.finish_animation(&mut ());
    println!("{}", visualizer.grid());
    println!("Path:");
    for node in run.path().unwrap_or_default() {
        println!("({}, {})", node.row, node.col);
    }
}
