use rand::Rng;

use crate::grid::{Cell, Grid};
use crate::snake::Snake;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn relocate(&mut self, position: Cell) {
        self.position = position;
    }

    /// Picks a uniformly random cell the snake doesn't cover. Returns `None`
    /// when the snake fills the whole board.
    pub fn place<R: Rng + ?Sized>(grid: &Grid, snake: &Snake, rng: &mut R) -> Option<Cell> {
        if snake.len() >= grid.cell_count() {
            return None;
        }

        loop {
            let cell = grid.random_cell(rng);
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::Right;
    use rand::{rngs::StdRng, SeedableRng};

    fn grid() -> Grid {
        Grid::new(32, 24, 20)
    }

    #[test]
    fn never_lands_on_half_full_board() {
        let g = grid();
        // Every other row is snake: 12 rows of 32 = half the board.
        let cells: Vec<Cell> = (0..g.height())
            .filter(|y| y % 2 == 0)
            .flat_map(|y| (0..g.width()).map(move |x| Cell::new(x, y)))
            .collect();
        assert_eq!(cells.len(), g.cell_count() / 2);
        let snake = Snake::from_cells(&g, &cells, Right);

        let mut rng = StdRng::seed_from_u64(1234);
        for _ in 0..10_000 {
            let cell = Food::place(&g, &snake, &mut rng).unwrap();
            assert!(!snake.occupies(cell));
            assert_eq!(cell.y % 2, 1);
        }
    }

    #[test]
    fn finds_last_free_cell() {
        let g = Grid::new(4, 3, 20);
        let free = Cell::new(2, 1);
        let cells: Vec<Cell> = (0..3)
            .flat_map(|y| (0..4).map(move |x| Cell::new(x, y)))
            .filter(|c| *c != free)
            .collect();
        let snake = Snake::from_cells(&g, &cells, Right);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(Food::place(&g, &snake, &mut rng), Some(free));
    }

    #[test]
    fn full_board_has_no_place() {
        let g = Grid::new(2, 2, 20);
        let cells = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(1, 1), Cell::new(0, 1)];
        let snake = Snake::from_cells(&g, &cells, Right);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Food::place(&g, &snake, &mut rng), None);
    }

    #[test]
    fn relocate_moves_food() {
        let mut food = Food::new(Cell::new(1, 1));
        food.relocate(Cell::new(3, 4));
        assert_eq!(food.position(), Cell::new(3, 4));
    }
}
