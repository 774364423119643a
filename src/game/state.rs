use std::collections::VecDeque;

use super::direction::Direction;

/// A block-aligned position on the board, in board units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one cell further in `direction`
    pub fn stepped(&self, direction: Direction, block_size: i32) -> Self {
        let (dx, dy) = direction.vector(block_size);
        self.moved_by(dx, dy)
    }
}

/// Playing field dimensions, fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.block_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.block_size
    }

    pub fn cell_count(&self) -> usize {
        (self.columns().max(0) as usize) * (self.rows().max(0) as usize)
    }

    /// Top-left corner of the cell at (column, row)
    pub fn cell_at(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.block_size, row * self.block_size)
    }

    /// Middle of the board, snapped down onto the block grid
    pub fn center(&self) -> Position {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Every cell of the board, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows())
            .flat_map(move |row| (0..self.columns()).map(move |col| self.cell_at(col, row)))
    }
}

/// The snake's body, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Position>,
}

impl Snake {
    /// Single-segment snake
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from explicit segments, head first. Returns `None` for an
    /// empty body or one that overlaps itself.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let overlapping = body
            .iter()
            .enumerate()
            .any(|(i, pos)| body.iter().skip(i + 1).any(|other| other == pos));
        if overlapping {
            return None;
        }
        Some(Self { body })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }

    /// Check whether any segment, head and tail included, sits on `pos`
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head. The tail is kept when growing, dropped otherwise.
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false: a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub is_game_over: bool,
}

impl GameState {
    pub fn new(board: Board, snake: Snake, food: Position, direction: Direction) -> Self {
        Self {
            board,
            snake,
            food,
            direction,
            is_game_over: false,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.board.contains(pos)
    }

    pub fn is_occupied_by_snake(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
    }
}
