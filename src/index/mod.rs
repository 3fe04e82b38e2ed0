mod adjacency;

pub use adjacency::{
    Direction, Neighbors, calculate_adjacent, calculate_adjacent_str, calculate_all_adjacent,
    neighbors,
};
