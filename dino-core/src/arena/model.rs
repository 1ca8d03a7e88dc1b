//! Arena model: shift, spawn and collision

use heapless::Vec;

use super::cell::{Cell, Row};
use crate::config::{ARENA_COLUMNS, ARENA_ROWS, COLLISION_COLUMN, PLAYER_COLUMN, STAGING_COLUMN};

/// Upper bound on moves produced by one step
pub const MAX_MOVES: usize = ARENA_ROWS * (ARENA_COLUMNS - 1);

/// One obstacle moved one column toward the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CellMove {
    pub row: Row,
    /// Column that was emptied
    pub from: u8,
    /// Column the obstacle now occupies (`from - 1`)
    pub to: u8,
    /// The obstacle that moved
    pub cell: Cell,
}

/// Moves produced by one step, in scan order
///
/// Applying the moves in order (clear `from`, then draw `to`) repaints
/// exactly the cells that changed.
pub type ChangeSet = Vec<CellMove, MAX_MOVES>;

/// Two-row scrolling obstacle field
///
/// Column 0 of each row carries the player occupancy marker used for
/// collision geometry. Columns 1..=15 are visible obstacle cells and
/// column 16 is the staging column where new obstacles appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    cells: [[Cell; ARENA_COLUMNS]; ARENA_ROWS],
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; ARENA_COLUMNS]; ARENA_ROWS],
        }
    }

    /// Empty every cell of both rows
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
    }

    /// Get a cell, or `None` if the column is out of range
    pub fn get(&self, row: Row, column: usize) -> Option<Cell> {
        self.cells[row.index()].get(column).copied()
    }

    /// All cells of one row, player column first
    pub fn row(&self, row: Row) -> &[Cell; ARENA_COLUMNS] {
        &self.cells[row.index()]
    }

    /// Check if every cell of both rows is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell == Cell::Empty)
    }

    /// Number of obstacles anywhere in the field
    pub fn obstacle_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_obstacle())
            .count()
    }

    /// Row carrying the player marker, if any
    pub fn player_row(&self) -> Option<Row> {
        Row::ALL
            .into_iter()
            .find(|row| self.cells[row.index()][PLAYER_COLUMN] == Cell::Player)
    }

    /// Mark the player as occupying `row`
    ///
    /// Overwrites column 0 of both rows, including any obstacle that was
    /// shifted past the player.
    pub fn place_player(&mut self, row: Row) {
        self.cells[row.index()][PLAYER_COLUMN] = Cell::Player;
        self.cells[row.other().index()][PLAYER_COLUMN] = Cell::Empty;
    }

    /// Put the row's obstacle kind at `column`
    ///
    /// Returns `false` without changing anything if the column is the
    /// player column, out of range, or already occupied.
    pub fn place_obstacle(&mut self, row: Row, column: usize) -> bool {
        if column == PLAYER_COLUMN || column >= ARENA_COLUMNS {
            return false;
        }
        let cell = &mut self.cells[row.index()][column];
        if *cell != Cell::Empty {
            return false;
        }
        *cell = row.obstacle();
        true
    }

    /// Check if the next shift would move an obstacle into the player
    ///
    /// True iff the cell directly ahead of the player in `row` holds an
    /// obstacle and the player marker is in `row`. Must be evaluated
    /// before [`Arena::step`].
    pub fn will_collide(&self, row: Row) -> bool {
        let cells = &self.cells[row.index()];
        cells[COLLISION_COLUMN].is_obstacle() && cells[PLAYER_COLUMN] == Cell::Player
    }

    /// Shift every obstacle one column toward the player
    ///
    /// Scans each row left to right from column 1, so a freed cell is
    /// never overwritten by the obstacle behind it. The staging column is
    /// included: an obstacle spawned there becomes visible at column 15.
    pub fn step(&mut self) -> ChangeSet {
        let mut changes = ChangeSet::new();

        for row in Row::ALL {
            let cells = &mut self.cells[row.index()];
            for column in 1..ARENA_COLUMNS {
                let cell = cells[column];
                if !cell.is_obstacle() {
                    continue;
                }

                cells[column] = Cell::Empty;
                cells[column - 1] = cell;

                // Capacity covers every shiftable cell of both rows
                let _ = changes.push(CellMove {
                    row,
                    from: column as u8,
                    to: (column - 1) as u8,
                    cell,
                });
            }
        }

        changes
    }

    /// Decide on a new obstacle from one uniform draw
    ///
    /// A draw of 1 stages a high obstacle in the top row, 2 stages a low
    /// obstacle in the bottom row, anything else stages nothing. At most
    /// one obstacle is staged per call, and an occupied staging cell is
    /// never overwritten. Returns the row that received an obstacle.
    pub fn spawn(&mut self, draw: u32) -> Option<Row> {
        let row = match draw {
            1 => Row::Top,
            2 => Row::Bottom,
            _ => return None,
        };

        if self.place_obstacle(row, STAGING_COLUMN) {
            Some(row)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let arena = Arena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.obstacle_count(), 0);
        assert_eq!(arena.player_row(), None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut arena = Arena::new();
        arena.place_player(Row::Top);
        arena.place_obstacle(Row::Top, 4);
        arena.place_obstacle(Row::Bottom, 16);

        arena.reset();

        assert!(arena.is_empty());
    }

    #[test]
    fn test_spawn_high_then_three_steps() {
        let mut arena = Arena::new();

        assert_eq!(arena.spawn(1), Some(Row::Top));
        assert_eq!(arena.get(Row::Top, STAGING_COLUMN), Some(Cell::High));
        assert!(arena.row(Row::Bottom).iter().all(|&c| c == Cell::Empty));

        for _ in 0..3 {
            arena.step();
        }

        assert_eq!(arena.get(Row::Top, 13), Some(Cell::High));
        assert_eq!(arena.obstacle_count(), 1);
    }

    #[test]
    fn test_spawn_low() {
        let mut arena = Arena::new();
        assert_eq!(arena.spawn(2), Some(Row::Bottom));
        assert_eq!(arena.get(Row::Bottom, STAGING_COLUMN), Some(Cell::Low));
        assert!(arena.row(Row::Top).iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_spawn_nothing() {
        let mut arena = Arena::new();
        assert_eq!(arena.spawn(0), None);
        assert_eq!(arena.spawn(3), None);
        assert_eq!(arena.spawn(u32::MAX), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn test_spawn_does_not_overwrite_staging() {
        let mut arena = Arena::new();
        assert_eq!(arena.spawn(1), Some(Row::Top));
        assert_eq!(arena.spawn(1), None);
        assert_eq!(arena.obstacle_count(), 1);
    }

    #[test]
    fn test_step_reports_moves() {
        let mut arena = Arena::new();
        arena.place_obstacle(Row::Top, 5);
        arena.place_obstacle(Row::Top, 6);
        arena.place_obstacle(Row::Bottom, 16);

        let changes = arena.step();

        assert_eq!(changes.len(), 3);
        assert_eq!(
            changes[0],
            CellMove {
                row: Row::Top,
                from: 5,
                to: 4,
                cell: Cell::High
            }
        );
        assert_eq!(changes[1].from, 6);
        assert_eq!(changes[1].to, 5);
        assert_eq!(
            changes[2],
            CellMove {
                row: Row::Bottom,
                from: 16,
                to: 15,
                cell: Cell::Low
            }
        );

        // Adjacent obstacles stay adjacent
        assert_eq!(arena.get(Row::Top, 4), Some(Cell::High));
        assert_eq!(arena.get(Row::Top, 5), Some(Cell::High));
        assert_eq!(arena.get(Row::Top, 6), Some(Cell::Empty));
    }

    #[test]
    fn test_step_ignores_player_marker() {
        let mut arena = Arena::new();
        arena.place_player(Row::Bottom);

        let changes = arena.step();

        assert!(changes.is_empty());
        assert_eq!(arena.player_row(), Some(Row::Bottom));
    }

    #[test]
    fn test_obstacle_passes_into_player_column() {
        let mut arena = Arena::new();
        arena.place_player(Row::Bottom);
        arena.place_obstacle(Row::Top, 1);

        let changes = arena.step();

        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].to, PLAYER_COLUMN as u8);
        assert_eq!(arena.get(Row::Top, PLAYER_COLUMN), Some(Cell::High));

        // Re-marking the player wipes the passed obstacle
        arena.place_player(Row::Bottom);
        assert_eq!(arena.get(Row::Top, PLAYER_COLUMN), Some(Cell::Empty));
        assert_eq!(arena.obstacle_count(), 0);
    }

    #[test]
    fn test_will_collide() {
        let mut arena = Arena::new();
        arena.place_player(Row::Top);
        arena.place_obstacle(Row::Top, 1);

        assert!(arena.will_collide(Row::Top));
        assert!(!arena.will_collide(Row::Bottom));
    }

    #[test]
    fn test_will_collide_requires_player_in_row() {
        let mut arena = Arena::new();
        arena.place_player(Row::Bottom);
        arena.place_obstacle(Row::Top, 1);

        assert!(!arena.will_collide(Row::Top));
        assert!(!arena.will_collide(Row::Bottom));
    }

    #[test]
    fn test_will_collide_only_adjacent() {
        let mut arena = Arena::new();
        arena.place_player(Row::Bottom);
        arena.place_obstacle(Row::Bottom, 2);

        assert!(!arena.will_collide(Row::Bottom));
        arena.step();
        assert!(arena.will_collide(Row::Bottom));
    }

    #[test]
    fn test_place_obstacle_rejects_invalid() {
        let mut arena = Arena::new();
        assert!(!arena.place_obstacle(Row::Top, PLAYER_COLUMN));
        assert!(!arena.place_obstacle(Row::Top, ARENA_COLUMNS));
        assert!(arena.place_obstacle(Row::Top, 3));
        assert!(!arena.place_obstacle(Row::Top, 3));
        assert_eq!(arena.get(Row::Top, 3), Some(Cell::High));
    }

    #[test]
    fn test_get_out_of_range() {
        let arena = Arena::new();
        assert_eq!(arena.get(Row::Top, ARENA_COLUMNS), None);
    }
}
