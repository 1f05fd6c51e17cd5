mod error;
mod playout;
mod replay;
mod turn;
pub use error::*;
pub use playout::*;
pub use replay::*;
pub use turn::*;

use checkers::Rules;

pub struct Config {
    pub rules: Rules,
}
