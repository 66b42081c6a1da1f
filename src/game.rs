use std::ops::ControlFlow;

use log::{debug, info};

use crate::clock::FrameClock;
use crate::config::{BACKGROUND_COLOR, BORDER_COLOR, FOOD_COLOR, SNAKE_COLOR};
use crate::error::Result;
use crate::snake::Direction::{*, self};
use crate::term::Screen;
use crate::world::{SpriteKind, TickOutcome, World};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    TogglePause,
    Quit,
}

// The part of the loop that doesn't touch the terminal
pub struct GameState {
    world: World,
    paused: bool,
}

impl GameState {
    pub fn new(world: World) -> Self {
        GameState { world, paused: false }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    // Commands run in order; a Quit stops the batch before the world moves.
    pub fn step(&mut self, commands: &[Command]) -> ControlFlow<()> {
        for command in commands {
            match *command {
                Command::Quit => return ControlFlow::Break(()),
                Command::TogglePause => self.paused = !self.paused,
                Command::Turn(dir) => {
                    if !self.paused {
                        self.world.turn(dir);
                    }
                }
            }
        }

        if !self.paused {
            if let TickOutcome::Ate { food } = self.world.tick() {
                debug!("Length {}, food moved to {:?}", self.world.snake().len(), food);
            }
        }

        ControlFlow::Continue(())
    }
}

pub struct SnakeGame {
    state: GameState,
    screen: Screen,
    clock: FrameClock,
}

impl SnakeGame {
    pub fn new(world: World, screen: Screen, clock: FrameClock) -> Self {
        SnakeGame { state: GameState::new(world), screen, clock }
    }

    // The screen is released when the game is dropped, whichever way this returns.
    pub fn run(&mut self) -> Result {
        info!("Game started, {:?} per tick", self.clock.interval());
        self.screen.draw_frame(BORDER_COLOR)?;
        self.render()?;

        loop {
            self.clock.tick();

            let commands: Vec<Command> = self.screen.poll_keys()?.iter().filter_map(command_for).collect();
            if self.state.step(&commands).is_break() {
                let world = self.state.world();
                info!("Quit at length {}, best {}", world.snake().len(), world.best_length());
                return Ok(());
            }

            if self.state.paused() {
                self.draw_status()?;
                self.screen.present()?;
            } else {
                self.render()?;
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self) -> Result {
        self.screen.clear(BACKGROUND_COLOR)?;

        let world = &self.state.world;
        let grid = *world.grid();
        for sprite in world.sprites() {
            let color = match sprite.kind {
                SpriteKind::Snake => SNAKE_COLOR,
                SpriteKind::Food => FOOD_COLOR,
            };
            self.screen.fill_rect(grid.cell_rect(sprite.cell), color, BORDER_COLOR)?;
        }

        self.draw_status()?;
        self.screen.present()
    }

    fn draw_status(&mut self) -> Result {
        let world = self.state.world();
        let status = status_line(world.snake().len(), world.best_length(), self.state.paused());
        self.screen.draw_status(&status)
    }
}

pub fn command_for(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Esc | KeyCode::Char('p') => Some(Command::TogglePause),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

fn status_line(length: usize, best: usize, paused: bool) -> String {
    let state = if paused {"PAUSED  Esc to resume"} else {"Arrows/WASD move  Esc pause  q quit"};
    format!(" Length: {}  Best: {}  {}", length, best, state)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
