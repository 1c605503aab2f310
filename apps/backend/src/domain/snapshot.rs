use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, GRID_SIZE};

/// Wire form of the grid: 5x5 of `null | "<letter>-<label>"`, row 0 first.
/// This is the shape every connected client renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridSnapshot(pub [[Option<String>; GRID_SIZE]; GRID_SIZE]);

impl GridSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let mut cells: [[Option<String>; GRID_SIZE]; GRID_SIZE] = Default::default();
        for (at, unit) in board.units() {
            cells[at.row()][at.col()] = Some(unit.token());
        }
        GridSnapshot(cells)
    }
}
