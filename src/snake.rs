use std::collections::VecDeque;

use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::grid::{Cell, Grid};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn vector(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        match rng.gen_range(0..4) {
            0 => Up,
            1 => Down,
            2 => Left,
            _ => Right,
        }
    }
}

/// The body runs head first. Growth is tracked by `target_length`; the
/// body never holds more cells than that.
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    next_direction: Option<Direction>,
    target_length: usize,
}

impl Snake {
    pub fn new(grid: &Grid, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(grid.cell_count());
        body.push_back(grid.center());
        Snake { body, direction, next_direction: None, target_length: 1 }
    }

    // Cells run head first
    #[cfg(test)]
    pub fn from_cells(grid: &Grid, cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "a snake needs a head");
        let mut body = VecDeque::with_capacity(grid.cell_count().max(cells.len()));
        body.extend(cells.iter().copied());
        Snake { body, direction, next_direction: None, target_length: cells.len() }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn next_direction(&self) -> Option<Direction> {
        self.next_direction
    }

    /// Remembers a turn for the next tick. Turning back onto the current
    /// heading is ignored. Returns whether the turn was accepted.
    pub fn queue_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.next_direction = Some(new_direction);
        true
    }

    pub fn commit_direction(&mut self) -> Option<Direction> {
        let dir = self.next_direction.take()?;
        self.direction = dir;
        Some(dir)
    }

    /// Pushes a new head one cell ahead and returns it. The tail stays put
    /// until `drop_tail` is called.
    pub fn advance(&mut self, grid: &Grid) -> Cell {
        let new_head = grid.step(self.head(), self.direction);
        self.body.push_front(new_head);
        new_head
    }

    pub fn drop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        }
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|c| *c == head)
    }

    pub fn reset(&mut self, grid: &Grid, direction: Direction) {
        self.body.clear();
        self.body.push_back(grid.center());
        self.direction = direction;
        self.next_direction = None;
        self.target_length = 1;
    }
}
