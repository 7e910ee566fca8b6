pub use board::*;
pub use config::*;
pub use game::*;
pub use pieces::*;
pub use player::*;
pub use point::*;
pub use protocol::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod game;
mod pieces;
mod player;
mod point;
mod protocol;
mod visualization;
