//! Application state

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::fetch::{FetchManager, FetchRequest, FetchResponse};
use crate::remote::{HttpBackend, RemoteBackend};
use crate::ui::Theme;

use super::Slot;
use super::selector::SelectorState;

/// Main application state
pub struct App {
    // === Selection state ===
    pub selector: SelectorState,
    pub active_slot: Slot,
    source_cursor: usize,
    destination_cursor: usize,

    // === Mode and control ===
    pub should_quit: bool,

    // === Configuration ===
    pub config: Config,
    pub theme: Theme,

    // === Status line ===
    /// Latest user-facing message (fetch failures, hints)
    pub status: Option<String>,
    /// Spinner animation frame, advanced while a fetch is live
    pub spinner_frame: usize,

    // === Background fetches ===
    fetcher: FetchManager,
    /// The catalog is requested exactly once per app lifetime
    catalog_requested: bool,
    /// True between issuing the catalog fetch and its resolution
    catalog_pending: bool,
}

impl App {
    /// Create the application against the configured HTTP backend
    pub fn new(config: Config) -> AppResult<Self> {
        let backend = HttpBackend::new(&config.backend)?;
        Ok(Self::with_backend(config, Arc::new(backend)))
    }

    /// Create the application around an arbitrary backend
    pub fn with_backend(config: Config, backend: Arc<dyn RemoteBackend>) -> Self {
        let theme = Theme::preset(&config.display.theme);
        Self {
            selector: SelectorState::new(),
            active_slot: Slot::Source,
            source_cursor: 0,
            destination_cursor: 0,
            should_quit: false,
            config,
            theme,
            status: None,
            spinner_frame: 0,
            fetcher: FetchManager::new(backend),
            catalog_requested: false,
            catalog_pending: false,
        }
    }

    /// Issue the one-time catalog fetch. Subsequent calls are no-ops; the
    /// catalog is never re-fetched within a session.
    pub fn request_catalog(&mut self) {
        if self.catalog_requested {
            return;
        }
        self.catalog_requested = true;
        self.catalog_pending = true;
        self.fetcher.send(FetchRequest::Remotes);
    }

    /// True between issuing the catalog fetch and its resolution
    pub fn catalog_pending(&self) -> bool {
        self.catalog_pending
    }

    /// Drain completed fetches and fold them into the selector.
    pub fn poll_fetches(&mut self) {
        while let Some(response) = self.fetcher.try_recv() {
            match response {
                FetchResponse::Remotes(result) => {
                    self.catalog_pending = false;
                    match result {
                        Ok(remotes) => {
                            if remotes.is_empty() {
                                self.set_status("Backend reports no configured remotes".to_string());
                            }
                            self.selector.set_catalog(remotes);
                        }
                        Err(e) => {
                            log::warn!("remote catalog fetch failed: {e}");
                            self.set_status(format!("Failed to list remotes: {e}"));
                        }
                    }
                    self.clamp_cursors();
                }
                FetchResponse::Listing { ticket, result } => {
                    let failure = result.as_ref().err().map(ToString::to_string);
                    if self.selector.apply_listing(&ticket, result)
                        && let Some(error) = failure
                    {
                        log::warn!("listing fetch for '{}' failed: {}", ticket.remote, error);
                        self.set_status(format!("Failed to list '{}': {}", ticket.remote, error));
                    }
                }
            }
        }
    }

    /// Whether any fetch is still in flight. Drives the spinner and the
    /// shorter event-poll timeout.
    pub fn fetch_in_flight(&self) -> bool {
        self.catalog_pending
            || self.selector.load(Slot::Source).is_loading()
            || self.selector.load(Slot::Destination).is_loading()
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(message);
    }

    // === Cursor and focus ===

    pub fn cursor(&self, slot: Slot) -> usize {
        match slot {
            Slot::Source => self.source_cursor,
            Slot::Destination => self.destination_cursor,
        }
    }

    fn cursor_mut(&mut self, slot: Slot) -> &mut usize {
        match slot {
            Slot::Source => &mut self.source_cursor,
            Slot::Destination => &mut self.destination_cursor,
        }
    }

    pub fn switch_slot(&mut self) {
        self.active_slot = self.active_slot.other();
    }

    pub fn focus_slot(&mut self, slot: Slot) {
        self.active_slot = slot;
    }

    /// Move the active slot's cursor by `delta` within its candidate list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.selector.candidates(self.active_slot).len();
        if len == 0 {
            return;
        }
        let current = self.cursor(self.active_slot) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        *self.cursor_mut(self.active_slot) = next;
    }

    pub fn cursor_home(&mut self) {
        *self.cursor_mut(self.active_slot) = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.selector.candidates(self.active_slot).len();
        *self.cursor_mut(self.active_slot) = len.saturating_sub(1);
    }

    /// Select the candidate under the active slot's cursor and schedule its
    /// listing fetch.
    pub fn select_under_cursor(&mut self) {
        let slot = self.active_slot;
        let under_cursor = self
            .selector
            .candidates(slot)
            .get(self.cursor(slot))
            .map(|remote| remote.to_string());
        let Some(remote) = under_cursor else {
            return;
        };
        if let Some(ticket) = self.selector.select(slot, &remote) {
            self.fetcher.send(FetchRequest::Listing(ticket));
            // The other side's candidate list just shrank
            self.clamp_cursors();
        }
    }

    /// Clear the active slot's selection; its load state returns to Idle
    /// and any fetch still in flight for it is abandoned.
    pub fn clear_active(&mut self) {
        self.selector.clear(self.active_slot);
        self.clamp_cursors();
    }

    fn clamp_cursors(&mut self) {
        for slot in [Slot::Source, Slot::Destination] {
            let len = self.selector.candidates(slot).len();
            let cursor = self.cursor_mut(slot);
            if *cursor >= len {
                *cursor = len.saturating_sub(1);
            }
        }
    }
}
