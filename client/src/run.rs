use log::{error, info};
use macroquad::prelude::*;

use crate::{
    config::Config,
    frame::FrameRate,
    info,
    input::RawInput,
    palette::{BACKGROUND_COLOR, HOVER_COLOR, OUTLINE_COLOR, contrast},
    world::{
        biome::BiomeAtlases,
        maze::{MazeTexture, MazeView, draw_player},
    },
};
use common::session::{Mode, Session, SessionEvent};

pub struct App {
    config: Config,
    session: Session,
    view: MazeView,
    texture: Option<MazeTexture>,
    biomes: BiomeAtlases,
    fps: FrameRate,
}

impl App {
    pub fn new(config: Config) -> Result<Self, String> {
        let session = Session::new(config.session)
            .map_err(|e| format!("failed to generate the maze: {}", e))?;
        let texture = MazeTexture::new(&session.maze)?;
        let view = MazeView::centered(&session.maze, screen_size(), config.scale);

        info!(
            "maze {}x{} ready with seed {}",
            session.maze.width(),
            session.maze.height(),
            session.seed()
        );

        Ok(Self {
            config,
            session,
            view,
            texture: Some(texture),
            biomes: BiomeAtlases::generate(),
            fps: FrameRate::default(),
        })
    }

    pub async fn run(&mut self) {
        loop {
            let dt = self.fps.tick(get_frame_time());
            self.update(dt);
            self.draw();
            next_frame().await;
        }
    }

    fn update(&mut self, dt: f32) {
        let raw = RawInput::poll();
        if let Some(index) = raw.biome {
            self.biomes.select(index);
        }

        // Clicks are mapped through the view the user saw last frame.
        let input = raw.frame_input(&self.view);
        let step = self.config.speed * dt;

        let events = match self.session.update(&input, step) {
            Ok(events) => events,
            Err(e) => {
                error!("failed to update the session: {}", e);
                return;
            }
        };

        self.sync_texture(&events);
        self.view = self.current_view();
    }

    fn current_view(&self) -> MazeView {
        let maze = &self.session.maze;

        match self.session.mode {
            Mode::Editor => MazeView::centered(maze, screen_size(), self.config.scale),
            Mode::Game => MazeView::following(
                maze,
                self.session.player.position,
                screen_size(),
                self.config.scale * self.config.zoom,
            ),
        }
    }

    /// Keeps the GPU copy of the maze in step with its cells.
    fn sync_texture(&mut self, events: &[SessionEvent]) {
        let regenerated = events
            .iter()
            .any(|event| matches!(event, SessionEvent::Regenerated { .. }));

        if regenerated {
            // Release the old texture before the new one is built.
            self.texture = None;
            match MazeTexture::new(&self.session.maze) {
                Ok(texture) => self.texture = Some(texture),
                Err(e) => error!("failed to rebuild the maze texture: {}", e),
            }
        } else if events.iter().any(SessionEvent::touches_maze) {
            if let Some(texture) = &mut self.texture {
                texture.refresh(&self.session.maze);
            }
        }
    }

    fn draw(&self) {
        clear_background(BACKGROUND_COLOR);

        match self.session.mode {
            Mode::Editor => self.draw_editor(),
            Mode::Game => self.draw_game(),
        }

        info::draw(&self.session, &self.fps, self.biomes.name());
    }

    fn draw_editor(&self) {
        if let Some(texture) = &self.texture {
            texture.draw(&self.view);
        }

        let size = self.view.size();
        draw_rectangle_lines(
            self.view.origin.x,
            self.view.origin.y,
            size.x,
            size.y,
            2.0,
            OUTLINE_COLOR,
        );

        let (mouse_x, mouse_y) = mouse_position();
        let hovered = self.view.cell_at(vec2(mouse_x, mouse_y));
        let under_mouse = self
            .texture
            .as_ref()
            .and_then(|texture| texture.color_at(hovered.x, hovered.y));
        if let Some(color) = under_mouse {
            let rect = self.view.cell_rect(hovered);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, HOVER_COLOR);
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, contrast(color));
        }

        draw_player(&self.view, self.session.player.position);
    }

    fn draw_game(&self) {
        self.biomes.draw_maze(&self.session.maze, &self.view, screen_size());
        draw_player(&self.view, self.session.player.position);
    }
}

fn screen_size() -> Vec2 {
    vec2(screen_width(), screen_height())
}
