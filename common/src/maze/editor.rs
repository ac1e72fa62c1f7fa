use strum::{Display, EnumIter};

use super::{Cell, Maze, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Tool {
    #[strum(to_string = "paint path")]
    PaintPath,
    #[strum(to_string = "paint wall")]
    PaintWall,
    #[strum(to_string = "place item")]
    PaintItem,
    #[strum(to_string = "place goal")]
    PaintGoal,
}

impl Tool {
    pub fn cell(self) -> Cell {
        match self {
            Tool::PaintPath => Cell::Path,
            Tool::PaintWall => Cell::Wall,
            Tool::PaintItem => Cell::Item,
            Tool::PaintGoal => Cell::Goal,
        }
    }

    pub fn binding(self) -> &'static str {
        match self {
            Tool::PaintPath => "LMB",
            Tool::PaintWall => "RMB",
            Tool::PaintItem => "MMB",
            Tool::PaintGoal => "CTRL+RMB",
        }
    }
}

/// Mouse buttons and modifier held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
    pub modifier: bool,
}

impl EditorButtons {
    /// Resolves held buttons to a single tool. Goal beats item, item beats
    /// wall, wall beats path.
    pub fn tool(&self) -> Option<Tool> {
        if self.modifier && self.right {
            Some(Tool::PaintGoal)
        } else if self.middle {
            Some(Tool::PaintItem)
        } else if self.right {
            Some(Tool::PaintWall)
        } else if self.left {
            Some(Tool::PaintPath)
        } else {
            None
        }
    }
}

/// Paints one cell. Returns `false`, leaving the maze untouched, when `cell`
/// lies outside it.
pub fn apply_tool(maze: &mut Maze, cell: Point, tool: Tool) -> bool {
    maze.set(cell.x, cell.y, tool.cell()).is_ok()
}
