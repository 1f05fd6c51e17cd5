use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The number of rows and columns of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, `x` being the column and `y` the row.
///
/// Row 0 is the home row of [`Light`](crate::Color::Light), row 7 the home
/// row of [`Dark`](crate::Color::Dark).
///
/// Coordinates can also lie off the board, e.g. as the result of
/// [`Self::offset_unchecked()`]. Such coordinates are never used to
/// index into the board.
///
/// The string representation is the usual algebraic one, with columns `a`
/// to `h` and rows `1` to `8`:
/// ```
/// # use checkers::{coord, Coord};
/// assert_eq!(coord!("d4"), Coord::new(3, 3));
/// assert_eq!(Coord::new(0, 7).to_string(), "a8");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Dark squares are the ones pieces are set up on. `a1` is dark.
    pub fn is_dark_square(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Moves this coordinate by the given deltas, returning `None` if the
    /// result lies off the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        Some(self.offset_unchecked(dx, dy)).filter(|c| c.is_on_board())
    }

    pub fn offset_unchecked(self, dx: i8, dy: i8) -> Coord {
        Coord {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The square halfway between `self` and `other`, i.e. the square that is
    /// jumped over when moving from one to the other.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord {
            x: (self.x + other.x) / 2,
            y: (self.y + other.y) / 2,
        }
    }

    // Only valid for coordinates on the board
    pub(crate) fn to_index(self) -> u8 {
        debug_assert!(self.is_on_board());
        (self.y * BOARD_SIZE + self.x) as u8
    }

    pub(crate) fn from_index(idx: u8) -> Self {
        debug_assert!(idx < 64);
        let idx = idx as i8;
        Coord {
            x: idx % BOARD_SIZE,
            y: idx / BOARD_SIZE,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// The error type for the [`FromStr`] instance of [`Coord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordFromStrErr {
    WrongLength,
    InvalidColumn,
    InvalidRow,
}

impl std::error::Error for CoordFromStrErr {}

impl std::fmt::Display for CoordFromStrErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordFromStrErr::WrongLength => {
                write!(f, "A square must be given as a column letter followed by a row digit")
            }
            CoordFromStrErr::InvalidColumn => write!(f, "The column must be a letter from a to h"),
            CoordFromStrErr::InvalidRow => write!(f, "The row must be a digit from 1 to 8"),
        }
    }
}

impl FromStr for Coord {
    type Err = CoordFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let column_char = chars.next().ok_or(CoordFromStrErr::WrongLength)?;
        let row_char = chars.next().ok_or(CoordFromStrErr::WrongLength)?;
        if chars.next().is_some() {
            return Err(CoordFromStrErr::WrongLength);
        }
        let x = match column_char.to_ascii_lowercase() {
            c @ 'a'..='h' => (c as u8 - b'a') as i8,
            _ => return Err(CoordFromStrErr::InvalidColumn),
        };
        let y = match row_char {
            c @ '1'..='8' => (c as u8 - b'1') as i8,
            _ => return Err(CoordFromStrErr::InvalidRow),
        };
        Ok(Coord { x, y })
    }
}

impl TryFrom<String> for Coord {
    type Error = CoordFromStrErr;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Coord> for String {
    fn from(coord: Coord) -> String {
        coord.to_string()
    }
}

/// Shorthand for creating coordinates from algebraic notation.
///
/// This macro is just calling the [`FromStr`] instance of [`Coord`].
/// ```
/// # use checkers::{coord, Coord};
/// assert_eq!(coord!("h8"), Coord { x: 7, y: 7 });
/// ```
#[macro_export]
macro_rules! coord {
    ($s:literal) => {
        <$crate::Coord as std::str::FromStr>::from_str($s)
            .expect("Invalid square given to coord! macro")
    };
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    quickcheck! {
        fn display_then_parse(coord: Coord) -> bool {
            coord.to_string().parse::<Coord>() == Ok(coord)
        }

        fn index_is_row_major(coord: Coord) -> bool {
            Coord::from_index(coord.to_index()) == coord
                && coord.to_index() == (coord.y * 8 + coord.x) as u8
        }
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<Coord>(), Err(CoordFromStrErr::WrongLength));
        assert_eq!("d".parse::<Coord>(), Err(CoordFromStrErr::WrongLength));
        assert_eq!("d10".parse::<Coord>(), Err(CoordFromStrErr::WrongLength));
        assert_eq!("i4".parse::<Coord>(), Err(CoordFromStrErr::InvalidColumn));
        assert_eq!("d9".parse::<Coord>(), Err(CoordFromStrErr::InvalidRow));
        assert_eq!("d0".parse::<Coord>(), Err(CoordFromStrErr::InvalidRow));
        assert_eq!("D4".parse::<Coord>(), Ok(Coord::new(3, 3)));
    }

    #[test]
    fn offsets_stay_on_board() {
        assert_eq!(coord!("a1").offset(-1, 1), None);
        assert_eq!(coord!("h8").offset(1, 1), None);
        assert_eq!(coord!("a1").offset(1, 1), Some(coord!("b2")));
        assert_eq!(coord!("a1").offset_unchecked(-1, 1), Coord::new(-1, 1));
        assert!(!Coord::new(-1, 1).is_on_board());
        assert_eq!(Coord::new(8, 0).to_string(), "(8, 0)");
    }

    #[test]
    fn midpoint_of_a_jump() {
        assert_eq!(coord!("c3").midpoint(coord!("e5")), coord!("d4"));
        assert_eq!(coord!("e5").midpoint(coord!("c3")), coord!("d4"));
        assert_eq!(coord!("c3").midpoint(coord!("a5")), coord!("b4"));
    }

    #[test]
    fn dark_squares() {
        assert!(coord!("a1").is_dark_square());
        assert!(!coord!("b1").is_dark_square());
        assert!(coord!("d4").is_dark_square());
        assert!(coord!("h8").is_dark_square());
    }

    #[test]
    fn serializes_as_algebraic_string() {
        assert_eq!(serde_json::to_string(&coord!("c3")).unwrap(), "\"c3\"");
        assert_eq!(
            serde_json::from_str::<Coord>("\"f6\"").unwrap(),
            Coord::new(5, 5)
        );
        assert!(serde_json::from_str::<Coord>("\"z6\"").is_err());
    }
}
