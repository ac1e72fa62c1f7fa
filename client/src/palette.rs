use macroquad::prelude::*;

use common::maze::Cell;

/// The one place cell states become colors.
pub fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Wall => WHITE,
        Cell::Path => BLACK,
        Cell::Item => RED,
        Cell::Goal => GREEN,
    }
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast(color: Color) -> Color {
    let luma = 0.299 * color.r + 0.587 * color.g + 0.114 * color.b;
    if luma > 0.5 { BLACK } else { WHITE }
}

pub const PLAYER_COLOR: Color = BLUE;
pub const OUTLINE_COLOR: Color = RED;
pub const HOVER_COLOR: Color = Color::new(1.0, 1.0, 0.0, 0.5);
pub const BACKGROUND_COLOR: Color = DARKGRAY;
pub const WIN_OVERLAY_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.6);

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_every_cell_has_a_distinct_color() {
        let colors: Vec<Color> = Cell::iter().map(cell_color).collect();

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_contrast_stands_out_against_every_cell() {
        assert_eq!(contrast(cell_color(Cell::Wall)), BLACK);
        assert_eq!(contrast(cell_color(Cell::Path)), WHITE);
        for cell in Cell::iter() {
            assert_ne!(contrast(cell_color(cell)), cell_color(cell));
        }
    }
}
