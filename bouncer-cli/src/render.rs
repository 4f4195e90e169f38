//! ASCII rendering of the particle inside its box.
//!
//! The world is mapped one-to-one onto grid cells: the box spans
//! (0, 0)..(width, height) in simulation units. Continuous positions are
//! truncated to cell indices and clamped into the valid range before any
//! indexing, so an out-of-range (or non-finite) position can never index
//! out of bounds.

use bouncer_core::Vec2;

const BALL: char = 'O';
const WALL: char = '#';

/// Truncate a world position to grid cell coordinates, clamped to the
/// valid cell range. NaN truncates to 0 under Rust's saturating casts.
/// A zero-size grid has a single valid cell index of 0 on that axis.
pub fn project(pos: Vec2, width: u16, height: u16) -> (u16, u16) {
    let x = (pos.x as i32).clamp(0, (width as i32 - 1).max(0)) as u16;
    let y = (pos.y as i32).clamp(0, (height as i32 - 1).max(0)) as u16;
    (x, y)
}

/// Draw one frame: the interior cells wrapped in a wall border, with the
/// particle as a single glyph.
pub fn draw(pos: Vec2, width: u16, height: u16) -> String {
    let (px, py) = project(pos, width, height);
    let mut out = String::with_capacity((width as usize + 3) * (height as usize + 2));

    let border: String = std::iter::repeat(WALL).take(width as usize + 2).collect();
    out.push_str(&border);
    out.push('\n');
    for y in 0..height {
        out.push(WALL);
        for x in 0..width {
            out.push(if (x, y) == (px, py) { BALL } else { ' ' });
        }
        out.push(WALL);
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');
    out
}
