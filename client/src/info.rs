use macroquad::prelude::*;
use strum::IntoEnumIterator;

use crate::{frame::FrameRate, palette::WIN_OVERLAY_COLOR};
use common::{
    maze::editor::Tool,
    session::{Mode, Session},
};

const FONT_SIZE: f32 = 20.0;
const WIN_FONT_SIZE: f32 = 48.0;
const INDENTATION: f32 = 10.0;
const LINE_GAP: f32 = 4.0;
const TEXT_COLOR: Color = WHITE;

/// Left-hand status lines, top to bottom.
fn status_lines(session: &Session, fps: f32, biome: &str) -> Vec<String> {
    let mut lines = vec![
        format!("{} mode", session.mode),
        format!("seed {}", session.seed()),
        "[R] REGENERATE".to_string(),
        "[SPACE] TOGGLE MODE".to_string(),
        format!("FPS {:.0}", fps),
    ];

    match session.mode {
        Mode::Editor => {
            lines.extend(Tool::iter().map(|tool| format!("{}: {}", tool.binding(), tool)));
        }
        Mode::Game => lines.push(format!("biome {} [1-4]", biome)),
    }

    lines
}

fn score_line(session: &Session) -> String {
    format!("SCORE {}", session.player.score)
}

pub fn draw(session: &Session, fps: &FrameRate, biome: &str) {
    let line_height = FONT_SIZE + LINE_GAP;

    for (i, line) in status_lines(session, fps.rate, biome).iter().enumerate() {
        draw_text(
            line,
            INDENTATION,
            INDENTATION + FONT_SIZE + i as f32 * line_height,
            FONT_SIZE,
            TEXT_COLOR,
        );
    }

    if session.mode == Mode::Game {
        let score = score_line(session);
        let size = measure_text(&score, None, FONT_SIZE as u16, 1.0);
        draw_text(
            &score,
            screen_width() - size.width - INDENTATION,
            INDENTATION + FONT_SIZE,
            FONT_SIZE,
            TEXT_COLOR,
        );

        if session.player.won {
            draw_win_overlay();
        }
    }
}

fn draw_win_overlay() {
    let message = "You won!";
    let size = measure_text(message, None, WIN_FONT_SIZE as u16, 1.0);
    let x = (screen_width() - size.width) / 2.0;
    let y = (screen_height() + size.height) / 2.0;

    draw_rectangle(
        x - INDENTATION,
        y - size.height - INDENTATION,
        size.width + 2.0 * INDENTATION,
        size.height + 2.0 * INDENTATION,
        WIN_OVERLAY_COLOR,
    );
    draw_text(message, x, y, WIN_FONT_SIZE, BLACK);
}
