//! Grid Snake - a terminal Snake game on a block-aligned board
//!
//! This library provides:
//! - Core game logic and the owning `GameSession` (game module)
//! - The fixed-cadence tick source (ticker module)
//! - Key mapping (input module) and TUI rendering (render module)
//! - The food catalog data contract (menu module)
//! - Execution modes: interactive play and catalog listing (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod menu;
pub mod modes;
pub mod render;
pub mod ticker;
