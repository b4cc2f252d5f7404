//! Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::state::Slot;
use crate::state::app::App;

/// Status bar: ready banner, latest message, or key hints
pub struct StatusBar<'a> {
    app: &'a App,
}

impl<'a> StatusBar<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let app = self.app;
        let theme = &app.theme;

        let (text, style) = if app.selector.ready() {
            let source = app.selector.selected(Slot::Source).unwrap_or_default();
            let destination = app.selector.selected(Slot::Destination).unwrap_or_default();
            (
                format!(" Ready to transfer {} → {} ", source, destination),
                Style::default()
                    .bg(theme.ready_bg)
                    .fg(theme.ready_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else if let Some(status) = &app.status {
            (
                format!(" {} ", status),
                Style::default().bg(theme.status_bg).fg(theme.status_fg),
            )
        } else {
            (
                " Tab: switch side   Enter: select   Backspace: clear   q: quit ".to_string(),
                Style::default().bg(theme.status_bg).fg(theme.status_fg),
            )
        };

        // Clear the line with the bar's background
        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(style);
        }
        buf.set_stringn(area.x, area.y, &text, area.width as usize, style);
    }
}
