use log::debug;
use rand::{Rng, seq::IndexedRandom};

use crate::maze::{Cell, Maze, Point};

/// Where a run starts and ends inside a freshly generated maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Level {
    pub start: Point,
    pub goal: Point,
}

impl Level {
    /// Opens the start cell in the top-left corner, marks the goal in the
    /// bottom-right corner, and scatters up to `items` pickups over the
    /// remaining path cells. Border cells are left alone.
    pub fn prepare<R: Rng + ?Sized>(maze: &mut Maze, items: usize, rng: &mut R) -> Self {
        let (width, height) = maze.dimensions();
        let start = Point::new(1, 1);
        let goal = Point::new(width as i32 - 2, height as i32 - 2);

        // Mazes are at least 3x3, so start, goal and path cells are in bounds.
        // A 3x3 maze has a single interior cell: the goal wins.
        let _ = maze.set(start.x, start.y, Cell::Path);
        let _ = maze.set(goal.x, goal.y, Cell::Goal);

        let candidates: Vec<Point> = maze
            .positions_of(Cell::Path)
            .into_iter()
            .filter(|&p| p != start && p != goal)
            .collect();

        let placed: Vec<Point> = candidates.choose_multiple(rng, items).copied().collect();
        for point in &placed {
            let _ = maze.set(point.x, point.y, Cell::Item);
        }

        debug!(
            "level ready: start {:?}, goal {:?}, {} items",
            start,
            goal,
            placed.len()
        );

        Self { start, goal }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::{MazeParams, generate_seeded};

    #[test]
    fn test_prepare_places_start_goal_and_items() {
        for seed in 0..32 {
            let mut maze = generate_seeded(MazeParams::default(), seed).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let level = Level::prepare(&mut maze, 16, &mut rng);

            assert_eq!(level.start, Point::new(1, 1));
            assert_eq!(level.goal, Point::new(62, 62));
            assert_eq!(maze.cell(level.start), Some(Cell::Path));
            assert_eq!(maze.positions_of(Cell::Goal), vec![level.goal]);
            assert_eq!(maze.count(Cell::Item), 16);
        }
    }

    #[test]
    fn test_prepare_never_touches_the_border() {
        let mut maze = Maze::from_ascii(
            "#####\n\
             #   #\n\
             #   #\n\
             #####",
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        Level::prepare(&mut maze, 100, &mut rng);

        let (width, height) = maze.dimensions();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if maze.is_border(x, y) {
                    assert_eq!(maze.get(x, y), Ok(Cell::Wall));
                }
            }
        }
        // Six interior cells minus start and goal.
        assert_eq!(maze.count(Cell::Item), 4);
    }

    #[test]
    fn test_prepare_opens_a_walled_start() {
        let mut maze = Maze::filled(6, 6, Cell::Wall).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let level = Level::prepare(&mut maze, 3, &mut rng);

        assert_eq!(maze.cell(level.start), Some(Cell::Path));
        assert_eq!(maze.cell(level.goal), Some(Cell::Goal));
        assert_eq!(maze.count(Cell::Item), 0);
    }
}
