use glam::IVec2;
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use strum::Display;

use crate::{
    constants::{DEFAULT_SEED, ITEM_REWARD, MAX_MAZE_ITEMS, SEED_STEP},
    level::Level,
    maze::{
        Maze, MazeError, MazeParams, Point,
        editor::{Tool, apply_tool},
        generate,
    },
    player::{MoveOutcome, PlayerState},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Mode {
    #[strum(to_string = "game")]
    Game,
    #[default]
    #[strum(to_string = "editor")]
    Editor,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Game => Mode::Editor,
            Mode::Editor => Mode::Game,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionSettings {
    pub params: MazeParams,
    pub seed: u64,
    pub items: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            params: MazeParams::default(),
            seed: DEFAULT_SEED,
            items: MAX_MAZE_ITEMS,
        }
    }
}

/// Everything the front end gathered for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub toggle_mode: bool,
    pub regenerate: bool,
    pub direction: IVec2,
    pub edit: Option<(Point, Tool)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    ModeChanged(Mode),
    Regenerated { seed: u64 },
    MazeEdited(Point),
    ItemPicked { score: u32 },
    Won,
}

impl SessionEvent {
    /// Whether the maze's cells changed, so any render mirror is stale.
    pub fn touches_maze(&self) -> bool {
        matches!(
            self,
            SessionEvent::Regenerated { .. }
                | SessionEvent::MazeEdited(_)
                | SessionEvent::ItemPicked { .. }
        )
    }
}

pub struct Session {
    pub maze: Maze,
    pub level: Level,
    pub player: PlayerState,
    pub mode: Mode,
    seed: u64,
    settings: SessionSettings,
}

impl Session {
    pub fn new(settings: SessionSettings) -> Result<Self, MazeError> {
        let (maze, level) = build_level(&settings, settings.seed)?;

        Ok(Self {
            player: PlayerState::new(level.start),
            maze,
            level,
            mode: Mode::default(),
            seed: settings.seed,
            settings,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the maze, level and player with a fresh run on the next seed.
    pub fn regenerate(&mut self) -> Result<(), MazeError> {
        let seed = self.seed.wrapping_add(SEED_STEP);
        let (maze, level) = build_level(&self.settings, seed)?;

        self.seed = seed;
        self.maze = maze;
        self.level = level;
        self.player = PlayerState::new(level.start);

        info!("regenerated maze with seed {}", seed);
        Ok(())
    }

    /// One tick. Mode toggles apply before anything else, so input in the
    /// same tick goes to the newly selected mode.
    pub fn update(
        &mut self,
        input: &FrameInput,
        step: f32,
    ) -> Result<Vec<SessionEvent>, MazeError> {
        let mut events = Vec::new();

        if input.toggle_mode {
            self.mode = self.mode.toggled();
            info!("switched to {} mode", self.mode);
            events.push(SessionEvent::ModeChanged(self.mode));
        }

        if input.regenerate {
            self.regenerate()?;
            events.push(SessionEvent::Regenerated { seed: self.seed });
        }

        match self.mode {
            Mode::Editor => {
                if let Some((cell, tool)) = input.edit {
                    if apply_tool(&mut self.maze, cell, tool) {
                        events.push(SessionEvent::MazeEdited(cell));
                    }
                }
            }
            Mode::Game => match self.player.try_move(&mut self.maze, input.direction, step) {
                MoveOutcome::PickedItems(count) => self.push_pickups(&mut events, count),
                MoveOutcome::ReachedGoal { picked } => {
                    self.push_pickups(&mut events, picked);
                    info!("goal reached with score {}", self.player.score);
                    events.push(SessionEvent::Won);
                }
                MoveOutcome::Frozen
                | MoveOutcome::Blocked
                | MoveOutcome::Idle
                | MoveOutcome::Moved => {}
            },
        }

        Ok(events)
    }

    /// One event per item, each carrying the score right after that pickup.
    fn push_pickups(&self, events: &mut Vec<SessionEvent>, count: u32) {
        for remaining in (0..count).rev() {
            let score = self.player.score - remaining * ITEM_REWARD;
            debug!("picked up item, score {}", score);
            events.push(SessionEvent::ItemPicked { score });
        }
    }
}

fn build_level(settings: &SessionSettings, seed: u64) -> Result<(Maze, Level), MazeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut maze = generate(settings.params, &mut rng)?;
    let level = Level::prepare(&mut maze, settings.items, &mut rng);
    Ok((maze, level))
}
