use crate::neighborhood::Neighborhood;
use crate::neighborhood::OFF;
use crate::rule::Rule;

/// One generation of a one dimensional automaton. Index `0` is the leftmost cell.
///
/// A `World` is never stepped in place: [`World::next`] borrows the current generation and builds
/// the following one, so every new cell is computed from the same, untouched, input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct World {
    cells: Vec<bool>,
}

impl World {
    /// A world of `length` cells where only the center cell, `length / 2`, is on.
    pub fn centered(length: usize) -> Self {
        let center = length / 2;
        let cells = (0..length).map(|i| i == center).collect();

        Self { cells }
    }

    /// Like [`World::centered`], but a negative `length` yields an empty world.
    pub fn centered_signed(length: i64) -> Self {
        usize::try_from(length)
            .map(Self::centered)
            .unwrap_or_default()
    }

    pub fn from_cells(cells: Vec<bool>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// State of cell `i`. Anything past either edge is [`OFF`].
    pub fn get(&self, i: usize) -> bool {
        self.cells.get(i).copied().unwrap_or(OFF)
    }

    /// Number of cells that are on.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// The neighborhood of every cell, left to right.
    pub fn neighborhoods(&self) -> impl Iterator<Item = Neighborhood> {
        (0..self.cells.len()).map(move |i| {
            let left = i.checked_sub(1).map_or(OFF, |j| self.get(j));
            let right = self.get(i + 1);

            Neighborhood::new(left, self.cells[i], right)
        })
    }

    /// Compute the next generation under `rule`.
    pub fn next(&self, rule: &Rule) -> World {
        let cells = self.neighborhoods().map(|nbhd| rule.apply(nbhd)).collect();

        World { cells }
    }
}
