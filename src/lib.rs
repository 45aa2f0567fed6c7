pub mod blocks;
pub mod board;
pub mod estimate;
pub mod exercise;
pub mod history;
pub mod problem;
pub mod share;
pub mod steps;

pub use blocks::{Block, BlockKind, Container};
pub use board::Board;
pub use estimate::{review_estimate, EstimateReview, FeedbackProvider, Hint};
pub use exercise::Exercise;
pub use history::History;
pub use problem::Problem;
pub use share::{
    board_solved, completed_step_count, completed_steps, fully_distributed, place_value_complete,
};
pub use steps::{compute_steps, DivisionStep};
