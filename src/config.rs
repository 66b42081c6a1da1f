use clap::{Parser, ValueEnum};
use crossterm::style::Color;
use log::LevelFilter;
use std::path::PathBuf;

pub const SCREEN_WIDTH: u16 = 640;
pub const SCREEN_HEIGHT: u16 = 480;
pub const CELL_SIZE: u16 = 20;

pub const GRID_WIDTH: u16 = SCREEN_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: u16 = SCREEN_HEIGHT / CELL_SIZE;

/// Ticks per second
pub const SPEED: u32 = 5;
pub const MAX_SPEED: u32 = 60;

pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };
pub const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };

#[derive(Parser, Debug)]
#[command(name = "snake", version, about = "Classic snake on a wrapping 32x24 board")]
pub struct Args {
    /// Game speed in ticks per second
    #[arg(long, default_value_t = SPEED, value_parser = clap::value_parser!(u32).range(1..=MAX_SPEED as i64))]
    pub speed: u32,

    /// Seed for food placement and reset directions
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_matches_screen() {
        assert_eq!((GRID_WIDTH, GRID_HEIGHT), (32, 24));
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["snake"]).unwrap();
        assert_eq!(args.speed, SPEED);
        assert_eq!(args.seed, None);
        assert_eq!(args.log_file, None);
        assert_eq!(args.log_level, LogLevel::Info);
    }

    #[test]
    fn overrides() {
        let args = Args::try_parse_from([
            "snake", "--speed", "8", "--seed", "42", "--log-file", "snake.log", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.speed, 8);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.log_file, Some(PathBuf::from("snake.log")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
    }

    #[test]
    fn speed_out_of_range() {
        assert!(Args::try_parse_from(["snake", "--speed", "0"]).is_err());
        assert!(Args::try_parse_from(["snake", "--speed", "61"]).is_err());
    }
}
