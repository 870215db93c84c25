use super::Frame;
use crate::state::Celebration;
use ratatui::{layout::Rect, style::Color};

/// Draw confetti directly into the buffer on top of everything else.
///
pub fn celebration(frame: &mut Frame, size: Rect, celebration: &Celebration) {
    if size.width == 0 || size.height == 0 {
        return;
    }
    let buffer = frame.buffer_mut();
    for particle in celebration.visible() {
        let x = size.x + (particle.x * size.width as f32) as u16;
        let y = size.y + (particle.y * size.height as f32) as u16;
        if x >= size.right() || y >= size.bottom() {
            continue;
        }
        let (r, g, b) = particle.color;
        buffer
            .get_mut(x, y)
            .set_char(particle.glyph)
            .set_fg(Color::Rgb(r, g, b));
    }
}
