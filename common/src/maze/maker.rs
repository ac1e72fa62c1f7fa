use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use super::{Cell, Maze, MazeError, Point};
use crate::constants::{COL_SPACING, MAZE_HEIGHT, MAZE_WIDTH, POINT_CHANCE, ROW_SPACING};

// Order matters: a direction is picked by index, so reordering changes every seeded maze.
pub const DIRECTIONS: [Point; 4] = [
    Point::new(1, 0),  // East
    Point::new(-1, 0), // West
    Point::new(0, 1),  // South
    Point::new(0, -1), // North
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MazeParams {
    pub width: usize,
    pub height: usize,
    pub row_spacing: usize,
    pub col_spacing: usize,
    pub point_chance: f32,
}

impl Default for MazeParams {
    fn default() -> Self {
        Self {
            width: MAZE_WIDTH,
            height: MAZE_HEIGHT,
            row_spacing: ROW_SPACING,
            col_spacing: COL_SPACING,
            point_chance: POINT_CHANCE,
        }
    }
}

impl MazeParams {
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.row_spacing == 0 || self.col_spacing == 0 {
            return Err(MazeError::InvalidArgument(format!(
                "spacing must be at least 1, got rows {} and columns {}",
                self.row_spacing, self.col_spacing
            )));
        }

        if !(0.0..=1.0).contains(&self.point_chance) {
            return Err(MazeError::InvalidArgument(format!(
                "point chance must be within [0, 1], got {}",
                self.point_chance
            )));
        }

        // Dimensions are checked by `Maze::filled`, but fail before touching the rng.
        Maze::filled(self.width, self.height, Cell::Path).map(|_| ())
    }

    /// Percentage a seed-point roll in `[0, 100]` must not exceed.
    fn threshold(&self) -> i32 {
        (self.point_chance * 100.0).round() as i32
    }
}

/// Lattice maze: walls radiate in straight lines from randomly chosen points
/// of a regular grid until they run into another wall.
pub struct MazeMaker<'a, R: Rng + ?Sized> {
    pub grid: Maze,
    pub points: Vec<Point>,
    params: MazeParams,
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> MazeMaker<'a, R> {
    pub fn new(params: MazeParams, rng: &'a mut R) -> Result<Self, MazeError> {
        params.validate()?;
        let grid = Maze::filled(params.width, params.height, Cell::Path)?;

        Ok(Self {
            grid,
            points: Vec::new(),
            params,
            rng,
        })
    }

    pub fn build(mut self) -> Maze {
        self.draw_border();
        self.pick_points();
        let carved = self.carve();

        info!(
            "generated {}x{} maze with {} seed points",
            self.params.width,
            self.params.height,
            self.points.len()
        );
        debug!("carved {} corridor cells", carved);

        self.grid
    }

    fn draw_border(&mut self) {
        let (width, height) = (self.params.width as i32, self.params.height as i32);

        for x in 0..width {
            self.paint(Point::new(x, 0));
            self.paint(Point::new(x, height - 1));
        }

        for y in 0..height {
            self.paint(Point::new(0, y));
            self.paint(Point::new(width - 1, y));
        }
    }

    /// Raster-scans the interior lattice. Every lattice cell costs one roll,
    /// selected or not, so the sequence of draws only depends on the params.
    fn pick_points(&mut self) {
        let (width, height) = (self.params.width, self.params.height);
        let threshold = self.params.threshold();

        for y in 1..height - 1 {
            for x in 1..width - 1 {
                if x % self.params.col_spacing != 0 || y % self.params.row_spacing != 0 {
                    continue;
                }

                let roll: i32 = self.rng.random_range(0..=100);

                // A zero chance must never select, even on a roll of zero.
                if threshold > 0 && roll <= threshold {
                    self.points.push(Point::new(x as i32, y as i32));
                }
            }
        }

        // Seed points are walls before any corridor runs, so corridors stop at them.
        for i in 0..self.points.len() {
            let point = self.points[i];
            self.paint(point);
        }
    }

    fn carve(&mut self) -> usize {
        let mut order: Vec<usize> = (0..self.points.len()).collect();
        order.shuffle(&mut *self.rng);

        let mut carved = 0;

        for i in order {
            let origin = self.points[i];
            let direction = DIRECTIONS[self.rng.random_range(0..DIRECTIONS.len())];
            carved += self.carve_corridor(origin, direction);
        }

        carved
    }

    /// Walls off cells from `origin` (exclusive) along `direction` until the
    /// walk meets a non-path cell or leaves the grid.
    fn carve_corridor(&mut self, origin: Point, direction: Point) -> usize {
        let mut next = origin + direction;
        let mut carved = 0;

        while self.grid.cell(next) == Some(Cell::Path) {
            self.paint(next);
            next += direction;
            carved += 1;
        }

        carved
    }

    fn paint(&mut self, point: Point) {
        // Callers only pass in-bounds points.
        let _ = self.grid.set(point.x, point.y, Cell::Wall);
    }
}

pub fn generate<R: Rng + ?Sized>(params: MazeParams, rng: &mut R) -> Result<Maze, MazeError> {
    Ok(MazeMaker::new(params, rng)?.build())
}

pub fn generate_seeded(params: MazeParams, seed: u64) -> Result<Maze, MazeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(params, &mut rng)
}
