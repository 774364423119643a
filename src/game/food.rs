use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use super::state::{Board, Position, Snake};

/// Whether respawned food may land on the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPolicy {
    /// Uniform over every cell, snake cells included
    AllowOverlap,
    /// Uniform over the cells the snake does not occupy
    #[default]
    AvoidSnake,
}

/// Random draws tried before scanning the board for a free cell
const SAMPLE_ATTEMPTS: usize = 32;

/// Source of food positions for the engine
pub trait FoodSpawner {
    fn spawn(&mut self, board: &Board, snake: &Snake) -> Position;
}

/// Random food placement on the block grid
pub struct RandomFood {
    rng: StdRng,
    policy: FoodPolicy,
}

impl RandomFood {
    pub fn new(policy: FoodPolicy) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            policy,
        }
    }

    /// Deterministic placement, for reproducible sessions
    pub fn seeded(policy: FoodPolicy, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            policy,
        }
    }

    fn any_cell(&mut self, board: &Board) -> Position {
        let column = self.rng.gen_range(0..board.columns());
        let row = self.rng.gen_range(0..board.rows());
        board.cell_at(column, row)
    }

    /// Uniform over unoccupied cells. Rejection sampling first; a crowded
    /// board falls back to picking the n-th free cell. `None` when full.
    fn free_cell(&mut self, board: &Board, snake: &Snake) -> Option<Position> {
        for _ in 0..SAMPLE_ATTEMPTS {
            let candidate = self.any_cell(board);
            if !snake.occupies(candidate) {
                return Some(candidate);
            }
        }

        let free = board.cell_count().saturating_sub(snake.len());
        if free == 0 {
            return None;
        }
        let nth = self.rng.gen_range(0..free);
        let occupied: HashSet<Position> = snake.segments().copied().collect();
        board.cells().filter(|c| !occupied.contains(c)).nth(nth)
    }
}

impl FoodSpawner for RandomFood {
    fn spawn(&mut self, board: &Board, snake: &Snake) -> Position {
        match self.policy {
            FoodPolicy::AllowOverlap => self.any_cell(board),
            // A full board has no free cell; whatever we pick, the next
            // move collides
            FoodPolicy::AvoidSnake => self
                .free_cell(board, snake)
                .unwrap_or_else(|| self.any_cell(board)),
        }
    }
}

/// Replays a fixed list of positions, then repeats the last one
pub struct ScriptedFood {
    queue: VecDeque<Position>,
    last: Position,
}

impl ScriptedFood {
    pub fn new(positions: impl IntoIterator<Item = Position>) -> Self {
        let queue: VecDeque<Position> = positions.into_iter().collect();
        let last = queue.back().copied().unwrap_or(Position::new(0, 0));
        Self { queue, last }
    }
}

impl FoodSpawner for ScriptedFood {
    fn spawn(&mut self, _board: &Board, _snake: &Snake) -> Position {
        self.queue.pop_front().unwrap_or(self.last)
    }
}
