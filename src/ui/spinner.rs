//! Spinner frames for in-flight fetches

/// Spinner animation frames (Braille dots pattern)
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame glyph for an animation tick
pub fn frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}
