use crate::error::{Error, Result};
use crate::grid::Rect;
use crate::{Coords, TermInt};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, KeyEventKind, read, poll};

// Terminal characters are about twice as tall as they are wide
const COLS_PER_CELL: TermInt = 2;

const CELL_GLYPHS: &str = "[]";
const FRAME_TITLE: &str = " Snake ";

pub struct Screen {
    stdout: Stdout,
    board: Coords,
    cell_size: TermInt,
    active: bool,
}

impl Screen {
    pub fn open(board: Coords, cell_size: TermInt) -> Result<Self> {
        let needed = required_size(board);
        let actual = terminal::size()?;
        if actual.0 < needed.0 || actual.1 < needed.1 {
            return Err(Error::TerminalTooSmall { needed, actual });
        }

        let mut screen = Screen { stdout: stdout(), board, cell_size, active: false };
        screen.setup()?;
        Ok(screen)
    }

    pub fn poll_keys(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::ZERO)? {
            if let Event::Key(ev) = read()? {
                if ev.kind == KeyEventKind::Press {
                    events.push(ev);
                }
            }
        }

        Ok(events)
    }

    pub fn draw_frame(&mut self, color: Color) -> Result {
        let (width, height) = required_size(self.board);
        let (end_x, end_y) = (width - 1, height - 2);

        queue!(self.stdout, terminal::Clear(ClearType::All), style::SetForegroundColor(color))?;
        for x in 0..width {
            let ch = if x == 0 || x == end_x {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, 0), style::Print(ch), cursor::MoveTo(x, end_y), style::Print(ch))?;
        }
        for y in 1..end_y {
            queue!(self.stdout, cursor::MoveTo(0, y), style::Print('|'), cursor::MoveTo(end_x, y), style::Print('|'))?;
        }

        let title_x = (width - FRAME_TITLE.len() as TermInt) / 2;
        queue!(self.stdout, cursor::MoveTo(title_x, 0), style::Print(FRAME_TITLE), style::ResetColor)?;
        Ok(())
    }

    pub fn clear(&mut self, color: Color) -> Result {
        let row = " ".repeat((self.board.0 * COLS_PER_CELL) as usize);
        queue!(self.stdout, style::SetBackgroundColor(color))?;
        for y in 0..self.board.1 {
            queue!(self.stdout, cursor::MoveTo(1, y + 1), style::Print(&row))?;
        }
        queue!(self.stdout, style::ResetColor)?;
        Ok(())
    }

    pub fn fill_rect(&mut self, rect: Rect, fill: Color, border: Color) -> Result {
        let (col, row, cols, rows) = self.to_terminal(rect);
        let line = CELL_GLYPHS.repeat(cols as usize / COLS_PER_CELL as usize);

        queue!(self.stdout, style::SetBackgroundColor(fill), style::SetForegroundColor(border))?;
        for y in row..row + rows {
            queue!(self.stdout, cursor::MoveTo(col, y), style::Print(&line))?;
        }
        queue!(self.stdout, style::ResetColor)?;
        Ok(())
    }

    pub fn draw_status(&mut self, text: &str) -> Result {
        let (width, height) = required_size(self.board);
        let line = format!("{text: <width$}", text = text, width = width as usize);
        queue!(self.stdout, cursor::MoveTo(0, height - 1), style::Print(line))?;
        Ok(())
    }

    pub fn present(&mut self) -> Result {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result {
        if !self.active {
            return Ok(());
        }

        self.active = false;
        terminal::disable_raw_mode()?;
        execute!(self.stdout, style::ResetColor, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn setup(&mut self) -> Result {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.active = true;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        Ok(())
    }

    // (column, row, columns, rows) inside the frame
    fn to_terminal(&self, rect: Rect) -> (TermInt, TermInt, TermInt, TermInt) {
        let size = self.cell_size as u32;
        let col = (rect.x / size) as TermInt * COLS_PER_CELL + 1;
        let row = (rect.y / size) as TermInt + 1;
        let cols = (rect.w / size).max(1) as TermInt * COLS_PER_CELL;
        let rows = (rect.h / size).max(1) as TermInt;
        (col, row, cols, rows)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Nothing useful to do with an error this late
        let _ = self.restore();
    }
}

// Board, frame and status line
pub fn required_size(board: Coords) -> Coords {
    (board.0 * COLS_PER_CELL + 2, board.1 + 3)
}
