use log::{debug, info};

use super::{
    config::GameConfig,
    direction::Direction,
    food::{FoodSpawner, RandomFood},
    state::{Board, CollisionType, GameState, Position, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Whether the game is over after this step
    pub terminated: bool,
}

impl StepResult {
    fn frozen() -> Self {
        Self {
            ate_food: false,
            collision: None,
            terminated: true,
        }
    }
}

/// Movement, collision and growth rules
pub struct GameEngine<F = RandomFood> {
    board: Board,
    spawner: F,
}

impl GameEngine<RandomFood> {
    /// Create an engine with random food placement as configured
    pub fn new(config: &GameConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => RandomFood::seeded(config.food_policy, seed),
            None => RandomFood::new(config.food_policy),
        };
        Self::with_spawner(config.board(), spawner)
    }
}

impl<F: FoodSpawner> GameEngine<F> {
    pub fn with_spawner(board: Board, spawner: F) -> Self {
        Self { board, spawner }
    }

    /// Canonical initial state: one segment at the center, heading right
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(self.board.center());
        let food = self.spawner.spawn(&self.board, &snake);

        GameState::new(self.board, snake, food, Direction::Right)
    }

    /// Advance the game by one tick
    pub fn step(&mut self, state: &mut GameState) -> StepResult {
        if state.is_game_over {
            return StepResult::frozen();
        }

        let new_head = state
            .snake
            .head()
            .stepped(state.direction, state.board.block_size);

        // Checked against the pre-move body, so the cell the tail is about
        // to vacate still counts
        if let Some(collision) = check_collision(state, new_head) {
            state.is_game_over = true;
            info!(
                "game over: {:?} at ({}, {}), length {}",
                collision,
                new_head.x,
                new_head.y,
                state.snake.len()
            );

            return StepResult {
                ate_food: false,
                collision: Some(collision),
                terminated: true,
            };
        }

        let ate_food = new_head == state.food;
        state.snake.advance_to(new_head, ate_food);

        if ate_food {
            state.food = self.spawner.spawn(&state.board, &state.snake);
            debug!(
                "food eaten, length {}, respawned at ({}, {})",
                state.snake.len(),
                state.food.x,
                state.food.y
            );
        }

        StepResult {
            ate_food,
            collision: None,
            terminated: false,
        }
    }
}

/// Adopt `requested` as the heading unless it reverses the current one or
/// the game is over. Returns whether the heading was adopted.
pub fn steer(state: &mut GameState, requested: Direction) -> bool {
    if state.is_game_over {
        return false;
    }
    if state.direction.is_opposite(requested) {
        debug!(
            "ignored reversal from {} to {}",
            state.direction.label(),
            requested.label()
        );
        return false;
    }
    state.direction = requested;
    true
}

fn check_collision(state: &GameState, pos: Position) -> Option<CollisionType> {
    if !state.is_in_bounds(pos) {
        return Some(CollisionType::Wall);
    }

    if state.is_occupied_by_snake(pos) {
        return Some(CollisionType::SelfCollision);
    }

    None
}
