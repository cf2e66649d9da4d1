// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]
// Clippy
#![warn(clippy::all)]

//! Search state for closed train-track layouts.
//!
//! A `State` is where the track head is (`Pose`) plus what's left to build with (`Material`).
//! The driver searching over states lives elsewhere, this crate only provides
//! the key type for its visited sets and a ready-made `Visited` closed list.

pub mod config;
pub mod data;
pub mod hash;
pub mod state;
pub mod visited;

pub use crate::config::Hashing;
pub use crate::data::{Material, Pose};
pub use crate::state::{ParseStateErr, State};
pub use crate::visited::{Stats, Visited};
