pub mod current;
pub mod sample;

pub use current::Leaderboard;
