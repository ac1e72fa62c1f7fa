use glam::{IVec2, Vec2, vec2};

use crate::{
    constants::{ITEM_REWARD, MAX_STEP},
    maze::{Cell, Maze, Point},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player has already won and no longer moves.
    Frozen,
    /// Every requested axis was blocked.
    Blocked,
    /// No direction was requested.
    Idle,
    Moved,
    /// Items collected during this move, in order.
    PickedItems(u32),
    /// The goal was reached, after collecting `picked` items on the way.
    ReachedGoal { picked: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub position: Vec2, // In cells, so `position.floor()` is the occupied cell.
    pub score: u32,
    pub won: bool,
}

impl PlayerState {
    pub fn new(start: Point) -> Self {
        Self {
            position: start.as_vec2() + Vec2::splat(0.5),
            score: 0,
            won: false,
        }
    }

    pub fn cell(&self) -> Point {
        self.position.floor().as_ivec2()
    }

    /// Moves up to `step` cells along each axis of `direction`, resolving the
    /// axes separately so the player slides along walls. The occupied cell is
    /// collected before moving and after every sub-step, so long moves cannot
    /// pass over items or the goal.
    pub fn try_move(&mut self, maze: &mut Maze, direction: IVec2, step: f32) -> MoveOutcome {
        if self.won {
            return MoveOutcome::Frozen;
        }

        if maze.cell(self.cell()).is_none() {
            return MoveOutcome::Blocked;
        }

        let direction = direction.signum();
        let step = if step.is_finite() { step.max(0.0) } else { 0.0 };
        let requested = direction != IVec2::ZERO && step > 0.0;

        let mut picked = 0;
        if self.collect(maze, &mut picked) {
            return MoveOutcome::ReachedGoal { picked };
        }

        let mut moved = false;
        if requested {
            let substeps = (step / MAX_STEP).ceil().max(1.0) as u32;
            let delta = direction.as_vec2() * (step / substeps as f32);

            for _ in 0..substeps {
                if !self.step_once(maze, delta) {
                    continue;
                }
                moved = true;

                if self.collect(maze, &mut picked) {
                    return MoveOutcome::ReachedGoal { picked };
                }
            }
        }

        if picked > 0 {
            MoveOutcome::PickedItems(picked)
        } else if moved {
            MoveOutcome::Moved
        } else if requested {
            MoveOutcome::Blocked
        } else {
            MoveOutcome::Idle
        }
    }

    fn step_once(&mut self, maze: &Maze, delta: Vec2) -> bool {
        let here = self.cell();
        let target = (self.position + delta).floor().as_ivec2();

        let allow_x = delta.x != 0.0 && is_open(maze, Point::new(target.x, here.y));
        let mut allow_y = delta.y != 0.0 && is_open(maze, Point::new(here.x, target.y));

        // Both axes clear on their own but the corner cell is a wall: keep the horizontal slide.
        if allow_x && allow_y && !is_open(maze, target) {
            allow_y = false;
        }

        let applied = vec2(
            if allow_x { delta.x } else { 0.0 },
            if allow_y { delta.y } else { 0.0 },
        );
        self.position += applied;

        applied != Vec2::ZERO
    }

    /// Picks up an item or claims the goal in the occupied cell. Returns
    /// whether the goal was reached.
    fn collect(&mut self, maze: &mut Maze, picked: &mut u32) -> bool {
        let cell = self.cell();

        match maze.cell(cell) {
            Some(Cell::Goal) => {
                self.won = true;
                true
            }
            Some(Cell::Item) => {
                if maze.set(cell.x, cell.y, Cell::Path).is_ok() {
                    self.score += ITEM_REWARD;
                    *picked += 1;
                }
                false
            }
            Some(Cell::Wall | Cell::Path) | None => false,
        }
    }
}

fn is_open(maze: &Maze, point: Point) -> bool {
    maze.cell(point).is_some_and(Cell::is_walkable)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{
        level::Level,
        maze::{MazeParams, generate_seeded},
    };

    const NORTH: IVec2 = IVec2::new(0, -1);
    const EAST: IVec2 = IVec2::new(1, 0);
    const SOUTH: IVec2 = IVec2::new(0, 1);
    const WEST: IVec2 = IVec2::new(-1, 0);

    fn maze(text: &str) -> Maze {
        Maze::from_ascii(text).unwrap()
    }

    fn player_at(x: f32, y: f32) -> PlayerState {
        PlayerState {
            position: vec2(x, y),
            score: 0,
            won: false,
        }
    }

    #[test]
    fn test_new_player_stands_in_the_middle_of_the_start_cell() {
        let player = PlayerState::new(Point::new(1, 1));
        assert_eq!(player.position, vec2(1.5, 1.5));
        assert_eq!(player.cell(), Point::new(1, 1));
        assert_eq!(player.score, 0);
        assert!(!player.won);
    }

    #[test]
    fn test_walls_block_movement() {
        let mut maze = maze(
            "#####\n\
             #   #\n\
             #####",
        );
        let mut player = player_at(1.8, 1.2);

        assert_eq!(player.try_move(&mut maze, NORTH, 0.4), MoveOutcome::Blocked);
        assert_eq!(player.position, vec2(1.8, 1.2));

        assert_eq!(player.try_move(&mut maze, EAST, 0.4), MoveOutcome::Moved);
        assert_eq!(player.cell(), Point::new(2, 1));
    }

    #[test]
    fn test_axes_resolve_independently() {
        // North of the player is a wall, east is open.
        let mut maze = maze(
            "#####\n\
             #   #\n\
             #   #\n\
             #####",
        );
        let mut player = player_at(1.8, 1.2);

        let outcome = player.try_move(&mut maze, NORTH + EAST, 0.4);

        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(player.position.y, 1.2);
        assert!((player.position.x - 2.2).abs() < 1e-5);
    }

    #[test]
    fn test_blocked_corner_keeps_only_the_horizontal_slide() {
        let mut maze = maze(
            "#####\n\
             #   #\n\
             # # #\n\
             #####",
        );
        let mut player = player_at(1.8, 1.8);

        player.try_move(&mut maze, SOUTH + EAST, 0.4);

        assert_eq!(player.cell(), Point::new(2, 1));
        assert_eq!(maze.cell(player.cell()), Some(Cell::Path));
    }

    #[test]
    fn test_large_steps_cannot_tunnel_through_walls() {
        let mut maze = maze(
            "#######\n\
             #  #  #\n\
             #######",
        );
        let mut player = player_at(1.5, 1.5);

        player.try_move(&mut maze, EAST, 3.0);

        assert_eq!(player.cell(), Point::new(2, 1));
    }

    #[test]
    fn test_item_is_picked_up_once() {
        let mut maze = maze(
            "#####\n\
             # * #\n\
             #####",
        );
        let mut player = player_at(1.8, 1.5);

        assert_eq!(player.try_move(&mut maze, EAST, 0.4), MoveOutcome::PickedItems(1));
        assert_eq!(player.score, ITEM_REWARD);
        assert_eq!(maze.get(2, 1), Ok(Cell::Path));

        for _ in 0..10 {
            player.try_move(&mut maze, IVec2::ZERO, 0.4);
            player.try_move(&mut maze, WEST, 0.05);
            player.try_move(&mut maze, EAST, 0.05);
        }
        assert_eq!(player.score, ITEM_REWARD);
    }

    #[test]
    fn test_item_painted_under_a_standing_player_is_collected() {
        let mut maze = maze(
            "#####\n\
             #*  #\n\
             #####",
        );
        let mut player = player_at(1.5, 1.5);

        assert_eq!(
            player.try_move(&mut maze, IVec2::ZERO, 0.4),
            MoveOutcome::PickedItems(1)
        );
        assert_eq!(player.try_move(&mut maze, IVec2::ZERO, 0.4), MoveOutcome::Idle);
        assert_eq!(player.score, ITEM_REWARD);
    }

    #[test]
    fn test_reaching_the_goal_freezes_the_player() {
        let mut maze = maze(
            "######\n\
             #  G*#\n\
             ######",
        );
        let mut player = player_at(2.8, 1.5);

        assert_eq!(
            player.try_move(&mut maze, EAST, 0.4),
            MoveOutcome::ReachedGoal { picked: 0 }
        );
        assert!(player.won);
        let frozen = player;

        for direction in [NORTH, EAST, SOUTH, WEST, EAST + SOUTH, IVec2::ZERO] {
            assert_eq!(player.try_move(&mut maze, direction, 0.4), MoveOutcome::Frozen);
            assert_eq!(player, frozen);
        }
        assert_eq!(maze.get(4, 1), Ok(Cell::Item), "no pickups after winning");
    }

    #[test]
    fn test_long_step_collects_items_and_stops_on_the_goal() {
        let mut maze = maze(
            "#######\n\
             # *G  #\n\
             #######",
        );
        let mut player = player_at(1.5, 1.5);

        let outcome = player.try_move(&mut maze, EAST, 3.0);

        assert_eq!(outcome, MoveOutcome::ReachedGoal { picked: 1 });
        assert!(player.won);
        assert_eq!(player.cell(), Point::new(3, 1));
        assert_eq!(player.score, ITEM_REWARD);
        assert_eq!(maze.get(2, 1), Ok(Cell::Path));
    }

    #[test]
    fn test_long_step_collects_every_item_it_crosses() {
        let mut maze = maze(
            "#######\n\
             # **  #\n\
             #######",
        );
        let mut player = player_at(1.5, 1.5);

        let outcome = player.try_move(&mut maze, EAST, 3.0);

        assert_eq!(outcome, MoveOutcome::PickedItems(2));
        assert_eq!(player.cell(), Point::new(4, 1));
        assert_eq!(player.score, 2 * ITEM_REWARD);
        assert_eq!(maze.count(Cell::Item), 0);
    }

    #[test]
    fn test_player_outside_the_maze_cannot_move() {
        let mut maze = maze(
            "###\n\
             # #\n\
             ###",
        );
        let mut player = player_at(-3.0, 1.5);

        assert_eq!(player.try_move(&mut maze, EAST, 0.4), MoveOutcome::Blocked);
        assert_eq!(player.position, vec2(-3.0, 1.5));
    }

    #[test]
    fn test_random_walks_never_enter_walls() {
        for seed in 0..64 {
            let mut maze = generate_seeded(MazeParams::default(), seed).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let level = Level::prepare(&mut maze, 16, &mut rng);
            let mut player = PlayerState::new(level.start);

            for _ in 0..500 {
                let direction = IVec2::new(rng.random_range(-1..=1), rng.random_range(-1..=1));
                let step = rng.random_range(0.0..1.5);
                player.try_move(&mut maze, direction, step);

                assert_ne!(
                    maze.cell(player.cell()),
                    Some(Cell::Wall),
                    "player entered a wall at {:?} with seed {}",
                    player.position,
                    seed
                );
            }
        }
    }
}
