/// One cell on the playing field. The grid is centered at the origin:
/// valid coordinates run from `-tile_count/2` to `tile_count/2 - 1`
/// inclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i32,
    pub z: i32,
}

impl GridPosition {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    pub fn offset(&self, direction: Direction) -> GridPosition {
        let (dx, dz) = direction.delta();
        GridPosition::new(self.x + dx, self.z + dz)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit vector of this direction in grid space. North decreases z,
    /// East increases x.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::North, Direction::South)
                | (Direction::South, Direction::North)
                | (Direction::East, Direction::West)
                | (Direction::West, Direction::East)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game is over, not started, or has no direction yet; nothing moved.
    Ignored,
    Moved,
    /// The head landed on food: the snake grew and the game sped up.
    Ate,
    GameOver(GameOverReason),
}

/// Per-tick snapshot returned by [`SnakeGame::step`]. The driver re-arms
/// its tick interval from `speed_ms`; rendering consumers read the rest.
///
/// [`SnakeGame::step`]: super::SnakeGame::step
#[derive(Clone, Debug)]
pub struct StepResult {
    pub outcome: StepOutcome,
    pub snake: Vec<GridPosition>,
    pub food: GridPosition,
    pub score: u32,
    pub speed_ms: u64,
}

#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub snake: Vec<GridPosition>,
    pub direction: Option<Direction>,
    pub food: GridPosition,
    pub score: u32,
    pub speed_ms: u64,
    pub started: bool,
    pub over: bool,
    pub game_over_reason: Option<GameOverReason>,
}
