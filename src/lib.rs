//! Prospector - Terminal-Based Treasure Hunting Game Library
//!
//! This module exposes the game-state engine for the terminal front-end,
//! the headless simulator, and tests. The ratatui UI is binary-only and
//! never appears in this library.

pub mod constants;
pub mod hunter;
pub mod items;
pub mod kit;
pub mod outcome;
pub mod session;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod treasure;
