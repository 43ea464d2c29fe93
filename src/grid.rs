use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

/// A zero-indexed cell on the square board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True when the cell lies inside a `size` x `size` board.
    pub const fn in_bounds(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// King-move distance: diagonal steps count as one.
    pub fn distance(self, other: Position) -> usize {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True for the eight surrounding cells and the cell itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) <= 1
    }

    /// Surrounding cells (and this one) clipped to the board, row-major.
    ///
    /// ```
    /// use fritanga_royale::grid::Position;
    ///
    /// let corner = Position::new(0, 0);
    /// assert_eq!(corner.neighborhood(5).len(), 4);
    /// assert_eq!(Position::new(2, 2).neighborhood(5).len(), 9);
    /// ```
    pub fn neighborhood(self, size: usize) -> Vec<Position> {
        let mut out = Vec::with_capacity(9);
        for y in self.y.saturating_sub(1)..=self.y + 1 {
            for x in self.x.saturating_sub(1)..=self.x + 1 {
                let p = Position::new(x, y);
                if p.in_bounds(size) {
                    out.push(p);
                }
            }
        }
        out
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every cell of a board, shuffled, handed out without replacement.
///
/// Drawing from the pool always yields distinct cells, so placement
/// terminates even when the roster nearly fills the board.
#[derive(Debug, Clone)]
pub struct CellPool {
    cells: Vec<Position>,
}

impl CellPool {
    /// Cells of a `size` x `size` board in row-major order.
    pub fn ordered(size: usize) -> Self {
        let cells = (0..size).flat_map(|y| (0..size).map(move |x| Position::new(x, y))).collect();
        Self { cells }
    }

    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut pool = Self::ordered(size);
        pool.cells.shuffle(rng);
        pool
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn draw(&mut self) -> Option<Position> {
        self.cells.pop()
    }

    pub fn draw_n(&mut self, n: usize) -> Vec<Position> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn ordered_pool_covers_board() {
        let pool = CellPool::ordered(4);
        assert_eq!(pool.len(), 16);
        let set: HashSet<Position> = pool.cells.iter().copied().collect();
        assert_eq!(set.len(), 16);
        assert!(set.iter().all(|p| p.in_bounds(4)));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let a = CellPool::shuffled(5, &mut ChaCha8Rng::seed_from_u64(42));
        let b = CellPool::shuffled(5, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a.cells, b.cells);
    }

    #[test]
    fn draw_never_repeats_and_runs_dry() {
        let mut pool = CellPool::shuffled(3, &mut ChaCha8Rng::seed_from_u64(7));
        let drawn = pool.draw_n(9);
        let set: HashSet<Position> = drawn.iter().copied().collect();
        assert_eq!(set.len(), 9);
        assert!(pool.is_empty());
        assert_eq!(pool.draw(), None);
    }

    #[test]
    fn adjacency_includes_diagonals_and_self() {
        let c = Position::new(2, 2);
        assert!(c.is_adjacent(c));
        assert!(c.is_adjacent(Position::new(3, 3)));
        assert!(c.is_adjacent(Position::new(1, 2)));
        assert!(!c.is_adjacent(Position::new(4, 2)));
        assert_eq!(c.distance(Position::new(0, 4)), 2);
    }
}
