use std::iter::FusedIterator;

use crate::bitset::bitset_traits;
use crate::Coord;

/// A compact set of board squares, one bit per square.
///
/// Allows intersection/union/difference with other such sets via operators.
/// Also implements [`IntoIterator`], which yields the squares in row-major
/// order (`a1`, `b1`, ..., `h1`, `a2`, ...).
///
/// ```
/// use checkers::{coord, CellsSet};
/// let mut set = CellsSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CellsSet`.
/// set = set.insert(coord!("e5"));
/// set = set.insert(coord!("e5"));  // Inserting a second time has no effect
/// set = set.insert(coord!("b2"));
/// assert_eq!(Vec::from_iter(set), vec![coord!("b2"), coord!("e5")]);
/// ```
///
/// Off-board coordinates are never members of a set: inserting them has no
/// effect and `contains()` returns `false` for them.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellsSet {
    bits: u64,
}

const ALL_CELLS: u64 = u64::MAX;

bitset_traits!(CellsSet, ALL_CELLS);

impl CellsSet {
    /// Creates a new, empty set.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn all() -> Self {
        Self { bits: ALL_CELLS }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, coord: Coord) -> bool {
        coord.is_on_board() && (self.bits & (1u64 << coord.to_index())) != 0
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, coord: Coord) -> Self {
        if !coord.is_on_board() {
            return self;
        }
        Self {
            bits: self.bits | (1u64 << coord.to_index()),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, coord: Coord) -> Self {
        if !coord.is_on_board() {
            return self;
        }
        Self {
            bits: self.bits & !(1u64 << coord.to_index()),
        }
    }
}

impl std::fmt::Debug for CellsSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.into_iter().map(|c| c.to_string()))
            .finish()
    }
}

impl FromIterator<Coord> for CellsSet {
    fn from_iter<T: IntoIterator<Item = Coord>>(iter: T) -> Self {
        iter.into_iter().fold(CellsSet::new(), CellsSet::insert)
    }
}

impl IntoIterator for CellsSet {
    type Item = Coord;

    type IntoIter = CellsSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellsSetIter { bits: self.bits }
    }
}

/// Iterator for a [`CellsSet`] that returns squares in row-major order.
#[derive(Clone, Copy, Debug)]
pub struct CellsSetIter {
    bits: u64,
}

impl Iterator for CellsSetIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the index of the square
            let idx = self.bits.trailing_zeros() as u8;
            self.bits ^= 1u64 << idx;

            Some(Coord::from_index(idx))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CellsSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CellsSetIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord;

    #[test]
    fn set_ops() {
        let a = CellsSet::from_iter([coord!("a1"), coord!("c3"), coord!("h8")]);
        let b = CellsSet::from_iter([coord!("c3"), coord!("d4")]);
        assert_eq!(Vec::from_iter(a & b), vec![coord!("c3")]);
        assert_eq!((a | b).len(), 4);
        assert_eq!(Vec::from_iter(a - b), vec![coord!("a1"), coord!("h8")]);
        assert_eq!((!a).len(), 61);
        assert!((!CellsSet::all()).is_empty());
    }

    #[test]
    fn off_board_coords_are_ignored() {
        let set = CellsSet::new().insert(Coord::new(-1, 3)).insert(Coord::new(3, 8));
        assert!(set.is_empty());
        assert!(!CellsSet::all().contains(Coord::new(8, 0)));
        assert_eq!(CellsSet::all().remove(Coord::new(-2, -2)), CellsSet::all());
    }

    #[test]
    fn iterates_row_major() {
        let set = CellsSet::from_iter([coord!("a2"), coord!("h1"), coord!("b1")]);
        assert_eq!(
            Vec::from_iter(set),
            vec![coord!("b1"), coord!("h1"), coord!("a2")]
        );
        assert_eq!(set.into_iter().len(), 3);
        assert_eq!(format!("{:?}", set), r#"{"b1", "h1", "a2"}"#);
    }
}
