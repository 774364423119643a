//! Core game logic for Snake
//!
//! Pure simulation: no terminal, timer or I/O dependencies. `GameSession` is
//! the single owner of a running game; everything else reads its state.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use engine::{GameEngine, StepResult, steer};
pub use food::{FoodPolicy, FoodSpawner, RandomFood, ScriptedFood};
pub use session::GameSession;
pub use state::{Board, CollisionType, GameState, Position, Snake};
