pub use board::*;
pub use cell::*;
pub use cells_set::*;
pub use coord::*;
pub use errors::*;
pub use piece::*;
pub use protocol_types::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod cell;
mod cells_set;
mod coord;
mod errors;
mod piece;
mod protocol_types;
mod visualization;
