use std::{fmt, ops, str::FromStr};
use serde::{Serialize, Deserialize};

/// Playable area, measured in cells.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    /// Side length of one cell in screen pixels.
    pub const CELL_SIZE: i32 = 40;
    pub const SCREEN_WIDTH: u32 = 1000;
    pub const SCREEN_HEIGHT: u32 = 600;

    pub fn new(width: i16, height: i16) -> Grid {
        Grid { width, height }
    }

    /// Bounds for a screen of the given pixel size; partial cells are dropped.
    pub fn from_screen(width_px: u32, height_px: u32) -> Grid {
        let cell = Self::CELL_SIZE as u32;
        let clamp = |px: u32| (px / cell).min(i16::MAX as u32) as i16;
        Grid { width: clamp(width_px), height: clamp(height_px) }
    }

    pub fn is_in_bounds(&self, pt: GridPoint) -> bool {
        pt.x >= 0 && pt.y >= 0 && pt.x < self.width && pt.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Top-left pixel of a cell, using the 40px drawing convention.
    pub fn to_pixels(pt: GridPoint) -> (i32, i32) {
        (pt.x as i32 * Self::CELL_SIZE, pt.y as i32 * Self::CELL_SIZE)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::from_screen(Self::SCREEN_WIDTH, Self::SCREEN_HEIGHT)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
pub struct GridPoint {
    pub x: i16,
    pub y: i16,
}

impl GridPoint {
    pub fn new(x: i16, y: i16) -> Self {
        Self {
            x, y
        }
    }
}

impl ops::Add<Self> for GridPoint {
    type Output = Self;
    fn add(self, rhs:Self) -> Self::Output {
        GridPoint { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Row grows downwards, matching screen space.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Debug, Default)]
pub enum Heading {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    pub fn to_point(self) -> GridPoint {
        match self {
            Heading::Up    => GridPoint { x: 0, y: -1, },
            Heading::Down  => GridPoint { x: 0, y: 1, },
            Heading::Left  => GridPoint { x: -1, y: 0, },
            Heading::Right => GridPoint { x: 1, y: 0, },
        }
    }

    pub fn reverse(self) -> Heading {
        match self {
            Heading::Up    => Heading::Down,
            Heading::Down  => Heading::Up,
            Heading::Left  => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_reverse(self, other: Heading) -> bool {
        self.reverse() == other
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingParseError(pub String);

impl fmt::Display for HeadingParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heading '{}', expected one of U, D, L, R", self.0)
    }
}

impl std::error::Error for HeadingParseError {}

impl FromStr for Heading {
    type Err = HeadingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up"    => Ok(Heading::Up),
            "d" | "down"  => Ok(Heading::Down),
            "l" | "left"  => Ok(Heading::Left),
            "r" | "right" => Ok(Heading::Right),
            _ => Err(HeadingParseError(s.to_string())),
        }
    }
}
