use glam::IVec2;
use macroquad::prelude::*;

use crate::world::maze::MazeView;
use common::{maze::editor::EditorButtons, session::FrameInput};

const BIOME_KEYS: [KeyCode; 4] = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];

/// Keyboard and mouse state sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    pub toggle_mode: bool,
    pub regenerate: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub buttons: EditorButtons,
    pub mouse: Vec2,
    pub biome: Option<usize>,
}

impl RawInput {
    pub fn poll() -> Self {
        let (mouse_x, mouse_y) = mouse_position();

        Self {
            toggle_mode: is_key_pressed(KeyCode::Space),
            regenerate: is_key_pressed(KeyCode::R),
            up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            buttons: EditorButtons {
                left: is_mouse_button_down(MouseButton::Left),
                right: is_mouse_button_down(MouseButton::Right),
                middle: is_mouse_button_down(MouseButton::Middle),
                modifier: is_key_down(KeyCode::LeftControl),
            },
            mouse: vec2(mouse_x, mouse_y),
            biome: BIOME_KEYS.iter().position(|&key| is_key_pressed(key)),
        }
    }

    /// Screen y grows downwards, so up is negative. Opposite keys cancel.
    pub fn direction(&self) -> IVec2 {
        let axis = |negative: bool, positive: bool| i32::from(positive) - i32::from(negative);
        IVec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }

    /// The view decides which cell the mouse is over. Out-of-maze cells are
    /// passed through and rejected by the editor.
    pub fn frame_input(&self, view: &MazeView) -> FrameInput {
        FrameInput {
            toggle_mode: self.toggle_mode,
            regenerate: self.regenerate,
            direction: self.direction(),
            edit: self
                .buttons
                .tool()
                .map(|tool| (view.cell_at(self.mouse), tool)),
        }
    }
}
