/// Heading of the snake on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step (dx, dy) for this direction, y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Movement vector for one tick on a board with the given cell size
    pub fn vector(&self, block_size: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (dx * block_size, dy * block_size)
    }

    /// True when both vectors cancel out, i.e. turning from self to other
    /// would be a 180-degree reversal
    pub fn is_opposite(&self, other: Direction) -> bool {
        let (ax, ay) = self.delta();
        let (bx, by) = other.delta();
        ax + bx == 0 && ay + by == 0
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}
