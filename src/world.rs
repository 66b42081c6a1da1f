use std::iter::once;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::food::Food;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { food: Cell },
    /// The snake ran into itself (or filled the board) at `length` cells and
    /// started over.
    Reset { length: usize },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpriteKind {
    Snake,
    Food,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub cell: Cell,
}

pub struct World {
    grid: Grid,
    snake: Snake,
    food: Food,
    rng: StdRng,
    best_length: usize,
}

impl World {
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(&grid, Direction::Right);
        let mut world = World { grid, snake, food: Food::new(grid.center()), rng, best_length: 1 };
        world.respawn_food();
        world
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn best_length(&self) -> usize {
        self.best_length
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        self.snake.queue_direction(direction)
    }

    pub fn tick(&mut self) -> TickOutcome {
        if let Some(dir) = self.snake.commit_direction() {
            debug!("Heading {:?}", dir);
        }

        let new_head = self.snake.advance(&self.grid);
        let mut outcome = TickOutcome::Moved;

        if new_head == self.food.position() {
            self.snake.grow();
            self.best_length = self.best_length.max(self.snake.target_length());

            match Food::place(&self.grid, &self.snake, &mut self.rng) {
                Some(cell) => {
                    self.food.relocate(cell);
                    outcome = TickOutcome::Ate { food: cell };
                }
                None => {
                    warn!("Board full at length {}", self.snake.len());
                    let length = self.snake.len();
                    self.reset_snake();
                    self.respawn_food();
                    return TickOutcome::Reset { length };
                }
            }
        } else {
            self.snake.drop_tail();
        }

        if self.snake.bites_itself() {
            let length = self.snake.len();
            self.reset_snake();
            return TickOutcome::Reset { length };
        }

        outcome
    }

    /// Everything to draw this frame: the food, then the snake head to tail.
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        once(Sprite { kind: SpriteKind::Food, cell: self.food().position() })
            .chain(self.snake.body().map(|&cell| Sprite { kind: SpriteKind::Snake, cell }))
    }

    ///////////////////////////////////////////////////////////////////////////

    fn reset_snake(&mut self) {
        let direction: Direction = self.rng.gen();
        info!("Snake reset at length {}, now heading {:?}", self.snake.len(), direction);
        self.snake.reset(&self.grid, direction);
    }

    fn respawn_food(&mut self) {
        loop {
            match Food::place(&self.grid, &self.snake, &mut self.rng) {
                Some(cell) => {
                    debug!("Food placed at {:?}", cell);
                    self.food.relocate(cell);
                    return;
                }
                // Only reachable on a board too small for a fresh snake and food
                None if self.snake.len() == 1 => return,
                None => self.reset_snake(),
            }
        }
    }
}

#[cfg(test)]
impl World {
    fn from_parts(grid: Grid, snake: Snake, food: Cell, seed: u64) -> Self {
        let best_length = snake.len();
        World { grid, snake, food: Food::new(food), rng: StdRng::seed_from_u64(seed), best_length }
    }
}
