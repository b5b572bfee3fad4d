//! # Text Display
//!
//! Draws the dungeon as a grid of glyphs joined by their open doors.
//!
//! ```text
//! S--o  +--o
//! |  |  |
//! +  o--+--E
//! ```

use crate::{Cave, Coordinate, Direction, Dungeon};

/// Glyph for the player's cell.
pub const PLAYER_GLYPH: char = 'P';
/// Glyph for the start cell.
pub const START_GLYPH: char = 'S';
/// Glyph for the end cell.
pub const END_GLYPH: char = 'E';
/// Glyph for any other cave.
pub const CAVE_GLYPH: char = 'o';
/// Glyph for any other tunnel.
pub const TUNNEL_GLYPH: char = '+';

/// Renders `dungeon` as text, marking `player` when given.
///
/// Each row is a line of cells joined by `--` where the east door is open,
/// followed by a line with `|` under every open south door. Doors that wrap
/// around are drawn on the last column or row. Trailing whitespace is
/// trimmed from every line.
pub fn render_map(dungeon: &Dungeon, player: Option<Coordinate>) -> String {
    let shape = dungeon.shape();
    let caves = dungeon.caves();
    let mut lines = Vec::with_capacity(shape.rows * 2);

    for row in 0..shape.rows {
        let cells = &caves[row * shape.cols..(row + 1) * shape.cols];

        let mut cell_line = String::new();
        let mut door_line = String::new();
        for cave in cells {
            cell_line.push(glyph(dungeon, cave, player));
            cell_line.push_str(if cave.can_move(Direction::East) {
                "--"
            } else {
                "  "
            });
            door_line.push(if cave.can_move(Direction::South) {
                '|'
            } else {
                ' '
            });
            door_line.push_str("  ");
        }

        lines.push(cell_line.trim_end().to_string());
        let door_line = door_line.trim_end();
        if !door_line.is_empty() || row + 1 < shape.rows {
            lines.push(door_line.to_string());
        }
    }

    lines.join("\n")
}

/// Legend explaining the map glyphs.
pub fn legend() -> String {
    format!(
        "{} player, {} start, {} end, {} cave, {} tunnel",
        PLAYER_GLYPH, START_GLYPH, END_GLYPH, CAVE_GLYPH, TUNNEL_GLYPH
    )
}

fn glyph(dungeon: &Dungeon, cave: &Cave, player: Option<Coordinate>) -> char {
    let location = cave.location();
    if player == Some(location) {
        PLAYER_GLYPH
    } else if location == dungeon.start() {
        START_GLYPH
    } else if location == dungeon.end() {
        END_GLYPH
    } else if cave.is_tunnel() {
        TUNNEL_GLYPH
    } else {
        CAVE_GLYPH
    }
}
