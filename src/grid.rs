use rand::Rng;

use crate::snake::Direction;
use crate::TermInt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: TermInt,
    pub y: TermInt,
}

impl Cell {
    pub const fn new(x: TermInt, y: TermInt) -> Self {
        Cell { x, y }
    }
}

// Pixel space
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: TermInt,
    height: TermInt,
    cell_size: TermInt,
}

impl Grid {
    pub fn new(width: TermInt, height: TermInt, cell_size: TermInt) -> Self {
        assert!(width > 0 && height > 0, "grid must have at least one cell");
        Grid { width, height, cell_size }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    // Leaving an edge re-enters at the opposite edge, same row or column
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.vector();
        let x = (cell.x as i32 + dx).rem_euclid(self.width as i32);
        let y = (cell.y as i32 + dy).rem_euclid(self.height as i32);
        Cell::new(x as TermInt, y as TermInt)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let size = self.cell_size as u32;
        Rect { x: cell.x as u32 * size, y: cell.y as u32 * size, w: size, h: size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn grid() -> Grid {
        Grid::new(32, 24, 20)
    }

    #[test]
    fn center_of_board() {
        assert_eq!(grid().center(), Cell::new(16, 12));
        assert_eq!(grid().cell_count(), 768);
    }

    #[test]
    fn step_inside() {
        let g = grid();
        let c = Cell::new(5, 5);
        assert_eq!(g.step(c, Up), Cell::new(5, 4));
        assert_eq!(g.step(c, Down), Cell::new(5, 6));
        assert_eq!(g.step(c, Left), Cell::new(4, 5));
        assert_eq!(g.step(c, Right), Cell::new(6, 5));
    }

    #[test]
    fn wraps_every_edge() {
        let g = grid();
        assert_eq!(g.step(Cell::new(31, 7), Right), Cell::new(0, 7));
        assert_eq!(g.step(Cell::new(0, 7), Left), Cell::new(31, 7));
        assert_eq!(g.step(Cell::new(9, 0), Up), Cell::new(9, 23));
        assert_eq!(g.step(Cell::new(9, 23), Down), Cell::new(9, 0));
    }

    #[test]
    fn wraps_corner() {
        let g = grid();
        assert_eq!(g.step(Cell::new(31, 23), Right), Cell::new(0, 23));
        assert_eq!(g.step(Cell::new(31, 23), Down), Cell::new(31, 0));
    }

    #[test]
    fn random_cells_stay_on_board() {
        let g = grid();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let c = g.random_cell(&mut rng);
            assert!(c.x < g.width() && c.y < g.height());
        }
    }

    #[test]
    fn pixel_rect() {
        assert_eq!(grid().cell_rect(Cell::new(3, 2)), Rect { x: 60, y: 40, w: 20, h: 20 });
        assert_eq!(grid().cell_rect(Cell::new(31, 23)), Rect { x: 620, y: 460, w: 20, h: 20 });
    }
}
