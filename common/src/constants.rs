// Maze generation:
pub const MAZE_WIDTH: usize = 64;
pub const MAZE_HEIGHT: usize = 64;
pub const ROW_SPACING: usize = 4;
pub const COL_SPACING: usize = 4;
pub const POINT_CHANCE: f32 = 0.75;
pub const MIN_MAZE_SIDE: usize = 3; // A closed border plus at least one interior cell.

// Session:
pub const DEFAULT_SEED: u64 = 37867;
pub const SEED_STEP: u64 = 11; // Added to the seed on every regeneration.
pub const MAX_MAZE_ITEMS: usize = 16;

// Player:
pub const ITEM_REWARD: u32 = 10;
pub const MAX_STEP: f32 = 0.5; // Longest single collision sample, in cells. Longer moves are sub-stepped.
