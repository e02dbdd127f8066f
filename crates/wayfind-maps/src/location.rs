//! Grid coordinates.

use std::fmt;

/// A cell of a rectangular grid. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLocation {
    pub x: i32,
    pub y: i32,
}

impl GridLocation {
    /// Create a new location.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Location of the `id`-th cell of a row-major grid `width` cells wide.
    #[inline]
    pub const fn from_id_width(id: i32, width: i32) -> Self {
        Self {
            x: id % width,
            y: id / width,
        }
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Self) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

impl From<(i32, i32)> for GridLocation {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl PartialOrd for GridLocation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GridLocation {
    // Same as comparing `(x, y)` tuples. Equal-cost frontier entries are
    // expanded in this order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_id_width_is_row_major() {
        assert_eq!(GridLocation::from_id_width(0, 10), GridLocation::new(0, 0));
        assert_eq!(GridLocation::from_id_width(9, 10), GridLocation::new(9, 0));
        assert_eq!(GridLocation::from_id_width(23, 10), GridLocation::new(3, 2));
    }

    #[test]
    fn adjacency_is_orthogonal() {
        let p = GridLocation::new(4, 4);
        assert!(p.is_adjacent(GridLocation::new(5, 4)));
        assert!(p.is_adjacent(GridLocation::new(4, 3)));
        assert!(!p.is_adjacent(GridLocation::new(5, 5)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn ordering_and_display() {
        let mut v = vec![(2, 1).into(), (0, 2).into(), GridLocation::new(1, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![GridLocation::new(0, 2), GridLocation::new(1, 1), GridLocation::new(2, 1)]
        );
        assert!(GridLocation::new(1, 9) < GridLocation::new(2, 0));
        assert_eq!(GridLocation::new(8, 3).to_string(), "(8, 3)");
    }
}
