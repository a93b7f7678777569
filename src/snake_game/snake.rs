use std::collections::VecDeque;
use serde::Serialize;

use super::grid::{Grid, GridPoint, Heading};

/// Body cells ordered tail first, head last.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct Snake {
    locations: VecDeque<GridPoint>,
    heading: Heading,
}

#[allow(clippy::len_without_is_empty)]
impl Snake {
    pub const DEFAULT_LENGTH: usize = 5;
    pub const START_ROW: i16 = 1;

    /// Lays the body out along the start row from column 0, head rightmost,
    /// the way the game has always started. `length` is clamped to what the
    /// row can hold (minimum 1).
    pub fn new(grid: &Grid, length: usize) -> Snake {
        let max_len = grid.width.max(1) as usize;
        let length = length.clamp(1, max_len);
        let row = Self::START_ROW.min(grid.height.saturating_sub(1)).max(0);
        let locations = (0..length as i16)
            .map(|x| GridPoint::new(x, row))
            .collect();
        Snake { locations, heading: Heading::Right }
    }

    /// Builds a snake from explicit cells, tail first. Returns `None` when
    /// `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = GridPoint>, heading: Heading) -> Option<Snake> {
        let locations: VecDeque<GridPoint> = cells.into_iter().collect();
        if locations.is_empty() { return None; }
        Some(Snake { locations, heading })
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Ignores a request to turn straight back onto the neck.
    pub fn set_heading(&mut self, heading: Heading) {
        if self.heading.is_reverse(heading) { return; }
        self.heading = heading;
    }

    pub fn head(&self) -> GridPoint {
        // Never empty: constructors guarantee at least one cell and
        // `advance` only pops after pushing.
        self.locations[self.locations.len() - 1]
    }

    pub fn prospective_head(&self) -> GridPoint {
        self.head() + self.heading.to_point()
    }

    /// Moves one cell along the heading. The new head always comes from the
    /// pre-move head; the tail is dropped unless growing.
    pub fn advance(&mut self, grow: bool) {
        let new_head = self.prospective_head();
        self.locations.push_back(new_head);
        if !grow {
            self.locations.pop_front();
        }
    }

    pub fn collides_with_self(&self) -> bool {
        let head = self.head();
        self.locations.iter().rev().skip(1).any(|&pt| pt == head)
    }

    pub fn collides_with_bounds(&self, grid: &Grid) -> bool {
        !grid.is_in_bounds(self.head())
    }

    pub fn occupies(&self, pt: GridPoint) -> bool {
        self.locations.contains(&pt)
    }

    /// Tail to head.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = GridPoint> + DoubleEndedIterator + '_ {
        self.locations.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}
