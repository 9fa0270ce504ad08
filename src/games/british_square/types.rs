//! Core domain types for British Square.

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Player {
    /// First player (moves first, renders as `O`).
    First,
    /// Second player (renders as `X`).
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Marker drawn on the board for this player's pieces.
    pub fn marker(self) -> char {
        match self {
            Player::First => 'O',
            Player::Second => 'X',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

/// Size of the playing grid.
///
/// Always at least 1×1 and at most [`Dimensions::MAX_CELLS`] cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    /// The standard 4×4 board.
    pub const STANDARD: Dimensions = Dimensions { rows: 4, cols: 4 };

    /// Largest board accepted, in cells.
    pub const MAX_CELLS: usize = 4096;

    /// Creates dimensions, or `None` if either side is zero or the board
    /// has more than [`Dimensions::MAX_CELLS`] cells.
    pub fn new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let cells = rows.checked_mul(cols)?;
        (cells <= Self::MAX_CELLS).then_some(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `index` names a cell on the board.
    pub fn contains(&self, index: usize) -> bool {
        index < self.cells()
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The playing grid, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dimensions: Dimensions,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            squares: vec![Square::Empty; dimensions.cells()],
        }
    }

    /// Returns the board dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Gets the square at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Overwrites the square at `index`. Placement rules are not checked.
    pub(crate) fn set(&mut self, index: usize, square: Square) -> Result<(), &'static str> {
        let slot = self.squares.get_mut(index).ok_or("Cell out of bounds")?;
        *slot = square;
        Ok(())
    }

    /// Checks if a cell is empty. Out-of-bounds cells are not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Checks if a cell holds one of `player`'s pieces.
    pub fn is_occupied_by(&self, index: usize, player: Player) -> bool {
        self.get(index) == Some(Square::Occupied(player))
    }

    /// Indices of every cell occupied by `player`, ascending.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, square)| **square == Square::Occupied(player))
            .map(|(index, _)| index)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Dimensions::STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_dimensions_reject_zero() {
        assert!(Dimensions::new(0, 4).is_none());
        assert!(Dimensions::new(4, 0).is_none());
        assert!(Dimensions::new(usize::MAX, 2).is_none());
        assert!(Dimensions::new(1, Dimensions::MAX_CELLS + 1).is_none());
        assert!(Dimensions::new(1, Dimensions::MAX_CELLS).is_some());
        assert_eq!(Dimensions::new(4, 4), Some(Dimensions::STANDARD));
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        assert_eq!(board.squares().len(), 16);
        for player in Player::iter() {
            assert_eq!(board.occupied_by(player).count(), 0);
        }
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::default();
        assert!(board.set(16, Square::Occupied(Player::First)).is_err());
        assert!(!board.is_empty(16));
    }

    #[test]
    fn test_occupied_by_projection() {
        let mut board = Board::default();
        board.set(3, Square::Occupied(Player::First)).unwrap();
        board.set(7, Square::Occupied(Player::Second)).unwrap();
        board.set(1, Square::Occupied(Player::First)).unwrap();

        assert_eq!(board.occupied_by(Player::First).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(board.occupied_by(Player::Second).collect::<Vec<_>>(), vec![7]);
        assert!(board.is_occupied_by(7, Player::Second));
        assert!(!board.is_occupied_by(7, Player::First));
    }

    #[test]
    fn test_player_markers() {
        assert_eq!(Player::First.marker(), 'O');
        assert_eq!(Player::Second.marker(), 'X');
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.to_string(), "second");
    }
}
