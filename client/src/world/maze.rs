use std::fmt;

use glam::IVec2;
use macroquad::prelude::*;

use crate::palette::{PLAYER_COLOR, cell_color};
use common::maze::{Cell, Maze, Point};

const PLAYER_SIZE: f32 = 0.4; // Fraction of a cell.

/// Placement of the maze on screen: `origin` is the top-left corner of
/// cell (0, 0) and every cell is `scale` pixels square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeView {
    pub origin: Vec2,
    pub scale: f32,
    pub width: usize,
    pub height: usize,
}

impl MazeView {
    pub fn centered(maze: &Maze, screen: Vec2, scale: f32) -> Self {
        let (width, height) = maze.dimensions();
        let size = vec2(width as f32, height as f32) * scale;

        Self {
            origin: ((screen - size) / 2.0).floor(),
            scale,
            width,
            height,
        }
    }

    /// A view that keeps `position` (in cells) at the centre of the screen.
    pub fn following(maze: &Maze, position: Vec2, screen: Vec2, scale: f32) -> Self {
        let (width, height) = maze.dimensions();

        Self {
            origin: screen / 2.0 - position * scale,
            scale,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width as f32, self.height as f32) * self.scale
    }

    /// Cell under a screen point. May lie outside the maze.
    pub fn cell_at(&self, screen: Vec2) -> Point {
        ((screen - self.origin) / self.scale).floor().as_ivec2()
    }

    pub fn to_screen(&self, position: Vec2) -> Vec2 {
        self.origin + position * self.scale
    }

    pub fn cell_rect(&self, cell: Point) -> Rect {
        let corner = self.to_screen(cell.as_vec2());
        Rect::new(corner.x, corner.y, self.scale, self.scale)
    }

    pub fn player_rect(&self, position: Vec2) -> Rect {
        let side = PLAYER_SIZE * self.scale;
        let center = self.to_screen(position);
        Rect::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    /// Cells whose rects intersect the screen, clamped to the maze.
    pub fn visible_cells(&self, screen: Vec2) -> (IVec2, IVec2) {
        let max = IVec2::new(self.width as i32 - 1, self.height as i32 - 1);
        let first = self.cell_at(Vec2::ZERO).clamp(IVec2::ZERO, max);
        let last = self.cell_at(screen).clamp(IVec2::ZERO, max);
        (first, last)
    }
}

/// Pixel-per-cell image of the maze, painted through the palette.
pub struct MazeImage(Image);

impl MazeImage {
    pub fn new(maze: &Maze) -> Result<Self, String> {
        let (width, height) = maze.dimensions();
        let width =
            u16::try_from(width).map_err(|_| format!("maze width {} is too large", width))?;
        let height =
            u16::try_from(height).map_err(|_| format!("maze height {} is too large", height))?;

        let mut image = Self(Image::gen_image_color(width, height, cell_color(Cell::Path)));
        image.repaint(maze);
        Ok(image)
    }

    pub fn repaint(&mut self, maze: &Maze) {
        for (y, row) in maze.rows().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                self.0.set_pixel(x as u32, y as u32, cell_color(cell));
            }
        }
    }

    /// Color of cell (x, y), or `None` outside the image.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        let image = &self.0;
        let in_bounds = x >= 0 && y >= 0 && x < image.width as i32 && y < image.height as i32;
        in_bounds.then(|| image.get_pixel(x as u32, y as u32))
    }

    pub fn size(&self) -> (u16, u16) {
        (self.0.width, self.0.height)
    }
}

/// CPU image of the maze plus its GPU copy. Dropping it releases both.
pub struct MazeTexture {
    image: MazeImage,
    texture: Texture2D,
}

impl fmt::Debug for MazeTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.image.size();
        f.debug_struct("MazeTexture")
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

impl MazeTexture {
    pub fn new(maze: &Maze) -> Result<Self, String> {
        let image = MazeImage::new(maze)?;
        let texture = Texture2D::from_image(&image.0);
        texture.set_filter(FilterMode::Nearest);

        Ok(Self { image, texture })
    }

    /// Re-uploads after cells changed. The maze must keep its dimensions.
    pub fn refresh(&mut self, maze: &Maze) {
        self.image.repaint(maze);
        self.texture.update(&self.image.0);
    }

    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.image.color_at(x, y)
    }

    pub fn draw(&self, view: &MazeView) {
        draw_texture_ex(
            &self.texture,
            view.origin.x,
            view.origin.y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(view.size()),
                ..Default::default()
            },
        );
    }
}

pub fn draw_player(view: &MazeView, position: Vec2) {
    let rect = view.player_rect(position);
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, PLAYER_COLOR);
}
