//! Puzzle rules for guiding Santa around a grid of presents and Grinches.
//!
//! A [`Level`] is an immutable, validated grid. A [`LevelAttempt`] is one
//! play-through of it: Santa steps to orthogonally adjacent cells, collects
//! every present to complete the level, and fails it by uncovering a Grinch.
//! Rendering, input and storage are left to the caller.

#![no_std]

extern crate alloc;

pub use attempt::*;
pub use catalog::*;
pub use cell::*;
pub use error::*;
pub use level::*;
pub use observe::*;
pub use scores::*;
pub use types::*;

mod attempt;
mod catalog;
mod cell;
mod error;
mod level;
mod observe;
mod scores;
mod types;
