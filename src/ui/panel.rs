//! Slot panel widget
//!
//! One panel per selection slot: the candidate remote list on top, the
//! selected remote's top-level listing below.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::remote::RemoteEntry;
use crate::state::Slot;
use crate::state::app::App;
use crate::state::selector::LoadState;

use super::spinner;

/// Widget for rendering one selection slot
pub struct SlotPanel<'a> {
    app: &'a App,
    slot: Slot,
}

impl<'a> SlotPanel<'a> {
    pub fn new(app: &'a App, slot: Slot) -> Self {
        Self { app, slot }
    }

    fn title(&self) -> &'static str {
        match self.slot {
            Slot::Source => " Source ",
            Slot::Destination => " Destination ",
        }
    }

    fn render_candidates(&self, area: Rect, buf: &mut Buffer) {
        let app = self.app;
        let theme = &app.theme;
        let candidates = app.selector.candidates(self.slot);
        let is_active = app.active_slot == self.slot;

        if candidates.is_empty() {
            let note = if app.catalog_pending() {
                "Loading remotes..."
            } else if app.selector.catalog().is_empty() {
                "No remotes available"
            } else {
                "No selectable remotes"
            };
            buf.set_stringn(
                area.x + 1,
                area.y,
                note,
                area.width.saturating_sub(1) as usize,
                Style::default().fg(theme.hint),
            );
            return;
        }

        let height = area.height as usize;
        if height == 0 {
            return;
        }
        let cursor = app.cursor(self.slot).min(candidates.len() - 1);
        // Scroll just enough to keep the cursor visible
        let offset = if cursor < height { 0 } else { cursor + 1 - height };

        for (row, remote) in candidates.iter().enumerate().skip(offset).take(height) {
            let y = area.y + (row - offset) as u16;
            let is_selected = app.selector.selected(self.slot) == Some(*remote);
            let under_cursor = is_active && row == cursor;

            let style = if under_cursor {
                Style::default().bg(theme.cursor_bg).fg(theme.cursor_fg)
            } else if is_selected {
                Style::default()
                    .fg(theme.remote_selected)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.remote_normal)
            };

            if under_cursor {
                for x in area.x..area.x + area.width {
                    buf[(x, y)].set_char(' ').set_style(style);
                }
            }

            let marker = if is_selected { '*' } else { ' ' };
            let line = format!("{} {}", marker, remote);
            buf.set_stringn(area.x, y, &line, area.width as usize, style);
        }
    }

    fn render_listing(&self, area: Rect, buf: &mut Buffer) {
        let app = self.app;
        let theme = &app.theme;

        if area.height == 0 {
            return;
        }

        let load = app.selector.load(self.slot);
        match load {
            LoadState::Idle => {
                buf.set_stringn(
                    area.x + 1,
                    area.y,
                    "Select a remote to browse it",
                    area.width.saturating_sub(1) as usize,
                    Style::default().fg(theme.hint),
                );
            }
            LoadState::Loading => {
                let remote = app.selector.selected(self.slot).unwrap_or("");
                let line = format!("{} Loading {}...", spinner::frame(app.spinner_frame), remote);
                buf.set_stringn(
                    area.x + 1,
                    area.y,
                    &line,
                    area.width.saturating_sub(1) as usize,
                    Style::default().fg(theme.loading),
                );
            }
            LoadState::Failed => {
                buf.set_stringn(
                    area.x + 1,
                    area.y,
                    "Listing failed",
                    area.width.saturating_sub(1) as usize,
                    Style::default().fg(theme.failed).add_modifier(Modifier::BOLD),
                );
                if area.height > 1 {
                    buf.set_stringn(
                        area.x + 1,
                        area.y + 1,
                        "Select the remote again to retry",
                        area.width.saturating_sub(1) as usize,
                        Style::default().fg(theme.hint),
                    );
                }
            }
            LoadState::Loaded(_) => self.render_entries(load.entries(), area, buf),
        }
    }

    fn render_entries(&self, entries: &[RemoteEntry], area: Rect, buf: &mut Buffer) {
        let theme = &self.app.theme;

        if entries.is_empty() {
            buf.set_stringn(
                area.x + 1,
                area.y,
                "Empty",
                area.width.saturating_sub(1) as usize,
                Style::default().fg(theme.hint),
            );
            return;
        }

        let height = area.height as usize;
        // Reserve the last row for the overflow count when needed
        let visible = if entries.len() > height {
            height.saturating_sub(1)
        } else {
            entries.len()
        };

        for (row, entry) in entries.iter().take(visible).enumerate() {
            let y = area.y + row as u16;
            let (text, style) = if entry.is_dir {
                let name = if self.app.config.display.dir_suffix {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                };
                (name, Style::default().fg(theme.entry_dir).add_modifier(Modifier::BOLD))
            } else {
                (entry.name.clone(), Style::default().fg(theme.entry_file))
            };
            buf.set_stringn(
                area.x + 1,
                y,
                &text,
                area.width.saturating_sub(1) as usize,
                style,
            );
        }

        if entries.len() > visible {
            let more = format!("... {} more", entries.len() - visible);
            buf.set_stringn(
                area.x + 1,
                area.y + visible as u16,
                &more,
                area.width.saturating_sub(1) as usize,
                Style::default().fg(theme.hint),
            );
        }
    }
}

impl Widget for SlotPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = &self.app.theme;
        let is_active = self.app.active_slot == self.slot;

        let border_style = if is_active {
            Style::default().fg(theme.panel_border_active)
        } else {
            Style::default().fg(theme.panel_border_inactive)
        };
        let block = Block::default()
            .title(Span::styled(
                self.title(),
                Style::default()
                    .fg(theme.panel_title)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 4 || inner.height < 4 {
            return;
        }

        // Upper part: candidate remotes; lower part: the selection's listing
        let candidates_height = (inner.height - 1) / 2;
        let candidates_area = Rect {
            height: candidates_height,
            ..inner
        };
        let separator_y = inner.y + candidates_height;
        let listing_area = Rect {
            y: separator_y + 1,
            height: inner.height - candidates_height - 1,
            ..inner
        };

        self.render_candidates(candidates_area, buf);

        let separator = "─".repeat(inner.width as usize);
        buf.set_string(
            inner.x,
            separator_y,
            &separator,
            Style::default().fg(theme.panel_border_inactive),
        );

        self.render_listing(listing_area, buf);
    }
}
