use alloc::boxed::Box;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owned copy of everything a presentation layer reads from an attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptSnapshot {
    pub cells: Array2<AttemptCell>,
    pub santa: Coord2,
    pub moves: u32,
    pub found_presents: CellCount,
    pub total_presents: CellCount,
    pub is_failed: bool,
    pub is_complete: bool,
}

impl AttemptSnapshot {
    pub fn from_attempt(attempt: &LevelAttempt) -> Self {
        Self {
            cells: attempt.cells().clone(),
            santa: attempt.santa_position(),
            moves: attempt.moves(),
            found_presents: attempt.found_presents(),
            total_presents: attempt.total_presents(),
            is_failed: attempt.is_failed(),
            is_complete: attempt.is_complete(),
        }
    }

    pub fn size(&self) -> Coord2 {
        self.cells.grid_size()
    }

    /// The cell Santa stands on, or `None` when `santa` lies outside `cells`,
    /// as it can in a hand-written snapshot.
    pub fn santa_cell(&self) -> Option<AttemptCell> {
        self.cells.get(self.santa.to_nd_index()).copied()
    }
}

pub trait AttemptObserver {
    fn on_update(&mut self, snapshot: &AttemptSnapshot);
}

impl<F: FnMut(&AttemptSnapshot)> AttemptObserver for F {
    fn on_update(&mut self, snapshot: &AttemptSnapshot) {
        self(snapshot)
    }
}

/// An attempt that pushes a fresh snapshot to its observers after every
/// accepted move.
pub struct WatchedAttempt<'a> {
    attempt: LevelAttempt<'a>,
    observers: Vec<Box<dyn AttemptObserver + 'a>>,
}

impl<'a> WatchedAttempt<'a> {
    pub fn new(attempt: LevelAttempt<'a>) -> Self {
        Self {
            attempt,
            observers: Vec::new(),
        }
    }

    /// Registers `observer` and hands it the current state straight away.
    pub fn subscribe(&mut self, observer: impl AttemptObserver + 'a) {
        let mut observer = Box::new(observer);
        observer.on_update(&self.attempt.snapshot());
        self.observers.push(observer);
    }

    /// Forwards to [`LevelAttempt::move_to`]. Observers only hear about
    /// moves that were accepted.
    pub fn move_to(&mut self, coords: Coord2) -> MoveResult<MoveOutcome> {
        let outcome = self.attempt.move_to(coords)?;
        if !self.observers.is_empty() {
            let snapshot = self.attempt.snapshot();
            for observer in self.observers.iter_mut() {
                observer.on_update(&snapshot);
            }
        }
        Ok(outcome)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn attempt(&self) -> &LevelAttempt<'a> {
        &self.attempt
    }

    pub fn into_inner(self) -> LevelAttempt<'a> {
        self.attempt
    }
}

impl<'a> From<LevelAttempt<'a>> for WatchedAttempt<'a> {
    fn from(attempt: LevelAttempt<'a>) -> Self {
        Self::new(attempt)
    }
}

impl core::fmt::Debug for WatchedAttempt<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WatchedAttempt")
            .field("attempt", &self.attempt)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;

    #[test]
    fn snapshot_copies_attempt_state() {
        let level = Level::parse("S-\nGP").unwrap();
        let mut attempt = LevelAttempt::new(&level);
        attempt.move_to((0, 1)).unwrap();

        let snapshot = attempt.snapshot();

        assert_eq!(snapshot.size(), (2, 2));
        assert_eq!(snapshot.santa, (0, 1));
        assert_eq!(snapshot.santa_cell(), Some(attempt.santa_cell()));
        assert_eq!(snapshot.moves, 1);
        assert_eq!(snapshot.total_presents, 1);
        assert!(!snapshot.is_complete);
    }

    #[test]
    fn editing_a_snapshot_leaves_the_attempt_alone() {
        let level = Level::parse("SP").unwrap();
        let attempt = LevelAttempt::new(&level);

        let mut snapshot = attempt.snapshot();
        snapshot.cells[(0, 0)].touch_count = 99;
        snapshot.cells[(0, 0)].is_available = true;

        assert_eq!(attempt.santa_cell().touch_count, 1);
        assert!(!attempt.cells()[(0, 0)].is_available);
    }

    #[test]
    fn santa_outside_the_grid_has_no_cell() {
        let level = Level::parse("SP").unwrap();
        let mut snapshot = LevelAttempt::new(&level).snapshot();
        snapshot.santa = (9, 9);

        assert_eq!(snapshot.santa_cell(), None);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: AttemptSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.santa_cell(), None);
        assert_eq!(restored.size(), (1, 2));
    }

    #[test]
    fn observers_get_current_state_then_each_accepted_move() {
        let level = Level::parse("S-P").unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut watched = WatchedAttempt::new(LevelAttempt::new(&level));

        let sink = Rc::clone(&seen);
        watched.subscribe(move |snapshot: &AttemptSnapshot| {
            sink.borrow_mut().push((snapshot.moves, snapshot.santa));
        });
        assert_eq!(*seen.borrow(), [(0, (0, 0))]);

        watched.move_to((0, 1)).unwrap();
        watched.move_to((0, 0)).unwrap();
        assert_eq!(*seen.borrow(), [(0, (0, 0)), (1, (0, 1)), (2, (0, 0))]);
    }

    #[test]
    fn rejected_moves_notify_nobody() {
        let level = Level::parse("SGP").unwrap();
        let updates = Rc::new(RefCell::new(0));
        let mut watched = WatchedAttempt::from(LevelAttempt::new(&level));

        let counter = Rc::clone(&updates);
        watched.subscribe(move |_: &AttemptSnapshot| *counter.borrow_mut() += 1);

        watched.move_to((0, 2)).unwrap_err();
        assert_eq!(watched.move_to((0, 1)), Ok(MoveOutcome::HitGrinch));
        watched.move_to((0, 2)).unwrap_err();

        assert_eq!(*updates.borrow(), 2);
        assert_eq!(watched.observer_count(), 1);
        assert!(watched.into_inner().is_failed());
    }
}
