use alloc::collections::BTreeSet;
use ndarray::Array2;

use crate::*;

/// Result of a move that was accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stepped onto empty ground or a present found earlier.
    Moved,
    /// Found a present for the first time, others remain.
    FoundPresent,
    /// Found the last present.
    Completed,
    /// Uncovered the Grinch.
    HitGrinch,
}

impl MoveOutcome {
    /// Whether the attempt ended with this move
    pub const fn is_terminal(self) -> bool {
        use MoveOutcome::*;
        match self {
            Moved => false,
            FoundPresent => false,
            Completed => true,
            HitGrinch => true,
        }
    }
}

/// One play-through of a [`Level`].
///
/// Santa starts on the level's start cell and moves one step at a time to an
/// orthogonally adjacent cell. The attempt is failed once the Grinch is
/// uncovered and complete once every present has been found; either way no
/// further moves are accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelAttempt<'a> {
    level: &'a Level,
    cells: Array2<AttemptCell>,
    santa: Coord2,
    moves: u32,
    found_presents: BTreeSet<Coord2>,
    failed: bool,
}

impl<'a> LevelAttempt<'a> {
    pub fn new(level: &'a Level) -> Self {
        let santa = level.santa_position();
        let mut cells = level.cells().map(|&cell| AttemptCell::new(cell));

        let start = &mut cells[santa.to_nd_index()];
        start.state = AttemptState::Santa;
        start.touch_count = 1;

        let mut attempt = Self {
            level,
            cells,
            santa,
            moves: 0,
            found_presents: BTreeSet::new(),
            failed: false,
        };
        attempt.update_availability();
        attempt
    }

    pub fn level(&self) -> &'a Level {
        self.level
    }

    pub fn rows(&self) -> Coord {
        self.level.rows()
    }

    pub fn columns(&self) -> Coord {
        self.level.columns()
    }

    pub fn size(&self) -> Coord2 {
        self.level.size()
    }

    pub fn cells(&self) -> &Array2<AttemptCell> {
        &self.cells
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<AttemptCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn santa_position(&self) -> Coord2 {
        self.santa
    }

    pub fn santa_cell(&self) -> AttemptCell {
        self.cells[self.santa.to_nd_index()]
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn found_presents(&self) -> CellCount {
        // bounded by the level's present count
        self.found_presents.len() as CellCount
    }

    pub fn total_presents(&self) -> CellCount {
        self.level.present_count()
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.found_presents() == self.total_presents()
    }

    pub fn is_finished(&self) -> bool {
        self.is_failed() || self.is_complete()
    }

    /// Whether [`LevelAttempt::move_to`] would accept `coords` right now.
    pub fn can_move_to(&self, coords: Coord2) -> bool {
        self.check_move(coords).is_ok()
    }

    /// Moves Santa to `coords`.
    ///
    /// Every check runs before any state is touched, so a rejected move
    /// leaves the attempt as it was.
    pub fn move_to(&mut self, coords: Coord2) -> MoveResult<MoveOutcome> {
        if let Err(err) = self.check_move(coords) {
            log::trace!("rejected move to {:?}: {}", coords, err);
            return Err(err);
        }
        debug_assert!(is_adjacent(self.santa, coords));

        let target = self.cells[coords.to_nd_index()];
        let outcome = match target.cell {
            LevelCell::Grinch => {
                self.failed = true;
                MoveOutcome::HitGrinch
            }
            LevelCell::Present if self.found_presents.insert(coords) => {
                if self.is_complete() {
                    MoveOutcome::Completed
                } else {
                    MoveOutcome::FoundPresent
                }
            }
            LevelCell::Present => MoveOutcome::Moved,
            LevelCell::Empty => MoveOutcome::Moved,
            // remapped to Empty when the attempt was created
            LevelCell::Santa => MoveOutcome::Moved,
        };

        self.cells[self.santa.to_nd_index()].state = AttemptState::Touched;
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.state = AttemptState::Santa;
        cell.touch_count += 1;
        self.santa = coords;

        self.update_availability();
        self.moves += 1;

        log::debug!("move {} to {:?}: {:?}", self.moves, coords, outcome);
        if outcome.is_terminal() {
            log::info!(
                "attempt ended after {} moves: {:?} ({}/{} presents)",
                self.moves,
                outcome,
                self.found_presents(),
                self.total_presents()
            );
        }

        Ok(outcome)
    }

    pub fn snapshot(&self) -> AttemptSnapshot {
        AttemptSnapshot::from_attempt(self)
    }

    fn check_move(&self, coords: Coord2) -> MoveResult<()> {
        if !self.level.contains(coords) {
            return Err(LevelMoveError::invalid_cell(coords));
        }
        if !self.cells[coords.to_nd_index()].is_available {
            return Err(LevelMoveError::unavailable(coords));
        }
        if self.failed {
            return Err(LevelMoveError::GrinchUncovered);
        }
        if self.is_complete() {
            return Err(LevelMoveError::AlreadyComplete);
        }
        Ok(())
    }

    fn update_availability(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.is_available = false;
        }
        for pos in neighbors(self.santa, self.level.size()) {
            self.cells[pos.to_nd_index()].is_available = true;
        }
    }
}
