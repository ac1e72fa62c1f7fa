use log::info;
use macroquad::prelude::*;

use super::maze::MazeView;
use crate::palette::{OUTLINE_COLOR, cell_color};
use common::maze::{Cell, Maze, Point};

const TILE: u16 = 16; // Atlas pixels per tile side.
const CHECK: u16 = 4; // Checker square side inside a tile.

/// Two-tone wall and floor colors for one look of the game view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biome {
    pub name: &'static str,
    pub wall: [Color; 2],
    pub floor: [Color; 2],
}

pub const BIOMES: [Biome; 4] = [
    Biome {
        name: "stone",
        wall: [DARKGRAY, GRAY],
        floor: [BEIGE, BROWN],
    },
    Biome {
        name: "forest",
        wall: [DARKGREEN, GREEN],
        floor: [Color::new(0.55, 0.45, 0.3, 1.0), Color::new(0.45, 0.35, 0.2, 1.0)],
    },
    Biome {
        name: "ice",
        wall: [SKYBLUE, BLUE],
        floor: [WHITE, LIGHTGRAY],
    },
    Biome {
        name: "desert",
        wall: [ORANGE, Color::new(0.7, 0.4, 0.1, 1.0)],
        floor: [YELLOW, GOLD],
    },
];

/// A `2 * TILE` by `TILE` image: wall tile on the left, floor tile on the right.
fn atlas_image(biome: &Biome) -> Image {
    let mut image = Image::gen_image_color(2 * TILE, TILE, biome.wall[0]);

    for y in 0..TILE {
        for x in 0..TILE {
            let odd = ((x / CHECK) + (y / CHECK)) % 2 != 0;
            let shade = usize::from(odd);
            image.set_pixel(x as u32, y as u32, biome.wall[shade]);
            image.set_pixel((x + TILE) as u32, y as u32, biome.floor[shade]);
        }
    }

    image
}

fn tile_source(cell: Cell) -> Rect {
    let tile = TILE as f32;
    match cell {
        Cell::Wall => Rect::new(0.0, 0.0, tile, tile),
        Cell::Path | Cell::Item | Cell::Goal => Rect::new(tile, 0.0, tile, tile),
    }
}

pub struct BiomeAtlases {
    textures: Vec<Texture2D>,
    current: usize,
}

impl BiomeAtlases {
    pub fn generate() -> Self {
        let textures = BIOMES
            .iter()
            .map(|biome| {
                let texture = Texture2D::from_image(&atlas_image(biome));
                texture.set_filter(FilterMode::Nearest);
                texture
            })
            .collect();

        Self {
            textures,
            current: 0,
        }
    }

    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.textures.len() && index != self.current {
            self.current = index;
            info!("switched to the {} biome", self.name());
        }
    }

    pub fn name(&self) -> &'static str {
        BIOMES[self.current].name
    }

    /// Draws only the cells that intersect the screen.
    pub fn draw_maze(&self, maze: &Maze, view: &MazeView, screen: Vec2) {
        let Some(atlas) = self.textures.get(self.current) else {
            return;
        };
        let (first, last) = view.visible_cells(screen);

        for y in first.y..=last.y {
            for x in first.x..=last.x {
                let point = Point::new(x, y);
                let Some(cell) = maze.cell(point) else {
                    continue;
                };
                let rect = view.cell_rect(point);

                draw_texture_ex(
                    atlas,
                    rect.x,
                    rect.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(rect.size()),
                        source: Some(tile_source(cell)),
                        ..Default::default()
                    },
                );
                draw_marker(cell, rect);
            }
        }
    }
}

fn draw_marker(cell: Cell, rect: Rect) {
    let center = rect.center();
    match cell {
        Cell::Item => draw_circle(center.x, center.y, rect.w / 4.0, cell_color(Cell::Item)),
        Cell::Goal => {
            let inset = rect.w / 6.0;
            draw_rectangle(
                rect.x + inset,
                rect.y + inset,
                rect.w - 2.0 * inset,
                rect.h - 2.0 * inset,
                cell_color(Cell::Goal),
            );
            draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, OUTLINE_COLOR);
        }
        Cell::Wall | Cell::Path => {}
    }
}
