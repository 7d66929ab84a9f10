//! Celebratory confetti overlay shown after a successful booking.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;

const GLYPHS: [char; 4] = ['*', 'o', '+', '.'];

const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::Blue,
];

/// Scatters colored glyphs over roughly one cell in six, leaving the rest of
/// the frame untouched. Purely cosmetic; the pattern is a fixed hash of cell
/// coordinates so redraws are stable.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_confetti(frame: &mut Frame, area: Rect) {
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let h = (x as u32)
                .wrapping_mul(2654435761)
                .wrapping_add((y as u32).wrapping_mul(40503))
                >> 7;
            if h % 6 != 0 {
                continue;
            }
            let glyph = GLYPHS[(h as usize / 6) % GLYPHS.len()];
            let color = COLORS[(h as usize / 24) % COLORS.len()];
            let cell = &mut buf[(x, y)];
            cell.set_char(glyph);
            cell.set_fg(color);
        }
    }
}
