use log::info;

use super::{
    config::GameConfig,
    direction::Direction,
    engine::{GameEngine, StepResult, steer},
    food::{FoodSpawner, RandomFood},
    state::GameState,
};

/// Single owner of the running game.
///
/// The tick loop, input handling and rendering all go through this type:
/// `advance` once per tick, `set_direction` on input, `restart` on request,
/// and `state` for a read-only view of the current frame.
pub struct GameSession<F = RandomFood> {
    engine: GameEngine<F>,
    state: GameState,
}

impl GameSession<RandomFood> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_engine(GameEngine::new(config))
    }
}

impl<F: FoodSpawner> GameSession<F> {
    pub fn with_engine(mut engine: GameEngine<F>) -> Self {
        let state = engine.reset();
        let board = state.board;
        info!(
            "session started on {}x{} board ({}x{} cells)",
            board.width,
            board.height,
            board.columns(),
            board.rows()
        );
        Self { engine, state }
    }

    /// Start from an explicit state, e.g. a prepared position
    pub fn from_state(engine: GameEngine<F>, state: GameState) -> Self {
        Self { engine, state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    /// Run one simulation step; a no-op once the game is over
    pub fn advance(&mut self) -> StepResult {
        self.engine.step(&mut self.state)
    }

    /// Request a new heading; reversals are ignored
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        steer(&mut self.state, requested)
    }

    /// Throw away the current game and start a fresh one
    pub fn restart(&mut self) {
        self.state = self.engine.reset();
        info!("game restarted");
    }
}
