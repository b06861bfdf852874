use alloc::vec::Vec;

use crate::*;

/// Text of the built-in levels, easiest first.
pub const LEVEL_SOURCES: &[&str] = &[
    "SP",
    "S-P\nG-P",
    "S-P\n-P-\nP-P",
    "-G---G-\nG--G--G\nS-G-G-P",
];

/// An ordered list of validated levels. Level numbers start at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// Parses [`LEVEL_SOURCES`].
    pub fn builtin() -> LevelResult<Self> {
        Self::from_sources(LEVEL_SOURCES)
    }

    /// Parses every source up front, failing on the first bad one.
    pub fn from_sources(sources: &[&str]) -> LevelResult<Self> {
        let levels = sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                Level::parse(source).inspect_err(|err| {
                    log::warn!("level {} is invalid: {}", index + 1, err);
                })
            })
            .collect::<LevelResult<Vec<_>>>()?;
        log::debug!("loaded {} levels", levels.len());
        Ok(Self::new(levels))
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, number: LevelNumber) -> Option<&Level> {
        self.levels.get(number.checked_sub(1)?)
    }

    /// Iterates `(number, level)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (LevelNumber, &Level)> {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, level)| (index + 1, level))
    }

    /// Starts a fresh attempt, or `None` when there is no such level.
    pub fn create_attempt(&self, number: LevelNumber) -> Option<LevelAttempt<'_>> {
        self.level(number).map(LevelAttempt::new)
    }

    pub fn has_previous(&self, number: LevelNumber) -> bool {
        number > 1
    }

    pub fn has_next(&self, number: LevelNumber) -> bool {
        number < self.len()
    }
}
