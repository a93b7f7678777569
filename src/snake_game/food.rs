use std::{collections::HashSet, fmt};
use log::debug;
use rand::Rng;
use serde::{Serialize, Deserialize};

use super::grid::{Grid, GridPoint};

/// Every cell of the grid is occupied, so food has nowhere to go.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct GridExhausted {
    pub grid: Grid,
}

impl fmt::Display for GridExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no free cell left for food on a {}x{} grid", self.grid.width, self.grid.height)
    }
}

impl std::error::Error for GridExhausted {}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Food {
    location: GridPoint,
}

impl Food {
    pub fn at(location: GridPoint) -> Food {
        Food { location }
    }

    /// Picks a food cell uniformly among cells outside `avoid`.
    pub fn placed<R: Rng + ?Sized>(
        avoid: impl IntoIterator<Item = GridPoint>,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Food, GridExhausted> {
        let mut food = Food::at(GridPoint::default());
        food.place(avoid, grid, rng)?;
        Ok(food)
    }

    pub fn position(&self) -> GridPoint {
        self.location
    }

    /// Rejection-samples random cells until one is free. Checks for a free
    /// cell first so a full grid reports `GridExhausted` instead of spinning.
    /// On error the previous position is kept.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        avoid: impl IntoIterator<Item = GridPoint>,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<(), GridExhausted> {
        let occupied: HashSet<GridPoint> = avoid
            .into_iter()
            .filter(|pt| grid.is_in_bounds(*pt))
            .collect();
        if occupied.len() >= grid.cell_count() {
            return Err(GridExhausted { grid: *grid });
        }

        let mut attempts = 0_usize;
        let location = loop {
            attempts += 1;
            let candidate = GridPoint {
                x: rng.gen_range(0..grid.width),
                y: rng.gen_range(0..grid.height),
            };
            if !occupied.contains(&candidate) { break candidate; }
        };
        debug!("food placed at {location} after {attempts} attempt(s)");
        self.location = location;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn placement_stays_in_bounds_and_off_the_snake() {
        let grid = Grid::new(6, 4);
        let avoid: Vec<GridPoint> = (0..6).map(|x| GridPoint::new(x, 1)).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::at(GridPoint::new(0, 0));
        for _ in 0..200 {
            food.place(avoid.iter().copied(), &grid, &mut rng).unwrap();
            assert!(grid.is_in_bounds(food.position()));
            assert!(!avoid.contains(&food.position()));
        }
    }

    #[test]
    fn single_free_cell_is_always_found() {
        let grid = Grid::new(3, 3);
        let free = GridPoint::new(2, 1);
        let avoid: Vec<GridPoint> = (0..3)
            .flat_map(|x| (0..3).map(move |y| GridPoint::new(x, y)))
            .filter(|&pt| pt != free)
            .collect();
        let mut rng = StdRng::seed_from_u64(99);
        let food = Food::placed(avoid, &grid, &mut rng).unwrap();
        assert_eq!(food.position(), free);
    }

    #[test]
    fn full_grid_reports_exhaustion() {
        let grid = Grid::new(2, 2);
        let all = [(0, 0), (0, 1), (1, 0), (1, 1)].map(|(x, y)| GridPoint::new(x, y));
        let mut rng = StdRng::seed_from_u64(1);
        let mut food = Food::at(GridPoint::new(1, 1));
        assert_eq!(food.place(all, &grid, &mut rng), Err(GridExhausted { grid }));
        assert_eq!(food.position(), GridPoint::new(1, 1));
    }

    #[test]
    fn out_of_bounds_cells_do_not_count_as_occupied() {
        // A crashed head sits outside the grid; it must not hide the last free cell.
        let grid = Grid::new(1, 2);
        let avoid = [GridPoint::new(0, 0), GridPoint::new(-1, 0)];
        let mut rng = StdRng::seed_from_u64(3);
        let food = Food::placed(avoid, &grid, &mut rng).unwrap();
        assert_eq!(food.position(), GridPoint::new(0, 1));
    }
}
