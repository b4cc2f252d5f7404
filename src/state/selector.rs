//! Dual-slot remote selection state machine.
//!
//! Owns the remote catalog and the two selection slots. Mutual exclusivity
//! is enforced by construction: each slot's candidate list excludes the
//! other slot's current selection, and `select` silently rejects anything
//! not on that list. Every accepted selection change bumps the slot's
//! sequence number and is handed back as a fetch ticket; a listing result
//! is applied only while its ticket still carries the slot's live sequence
//! number, so a slow response for a superseded selection can never clobber
//! a newer one.

use crate::errors::AppError;
use crate::remote::RemoteEntry;

use super::Slot;

/// Loading status of one slot's listing.
///
/// Exactly one of these exists per slot; it is replaced wholesale on every
/// transition, never merged.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<RemoteEntry>),
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Entries for display. Everything but `Loaded` shows as empty.
    pub fn entries(&self) -> &[RemoteEntry] {
        match self {
            LoadState::Loaded(entries) => entries,
            _ => &[],
        }
    }
}

/// Ticket identifying one issued listing fetch.
///
/// Carries the slot's sequence number at issue time; compared against the
/// live sequence number when the result comes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingTicket {
    pub slot: Slot,
    pub remote: String,
    seq: u64,
}

/// State of one selection slot
#[derive(Debug, Default)]
struct SlotState {
    selected: Option<String>,
    load: LoadState,
    /// Bumped on every selection change; strands in-flight fetches
    seq: u64,
}

/// The dual-selector state machine
#[derive(Debug, Default)]
pub struct SelectorState {
    catalog: Vec<String>,
    source: SlotState,
    destination: SlotState,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the remote catalog, in daemon order. Called once, when the
    /// startup fetch resolves; selection changes never re-trigger it.
    pub fn set_catalog(&mut self, remotes: Vec<String>) {
        self.catalog = remotes;
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    fn slot(&self, slot: Slot) -> &SlotState {
        match slot {
            Slot::Source => &self.source,
            Slot::Destination => &self.destination,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut SlotState {
        match slot {
            Slot::Source => &mut self.source,
            Slot::Destination => &mut self.destination,
        }
    }

    /// Remotes selectable for `slot`: the catalog minus the other slot's
    /// current selection, catalog order preserved.
    pub fn candidates(&self, slot: Slot) -> Vec<&str> {
        let taken = self.slot(slot.other()).selected.as_deref();
        self.catalog
            .iter()
            .map(String::as_str)
            .filter(|remote| Some(*remote) != taken)
            .collect()
    }

    pub fn selected(&self, slot: Slot) -> Option<&str> {
        self.slot(slot).selected.as_deref()
    }

    pub fn load(&self, slot: Slot) -> &LoadState {
        &self.slot(slot).load
    }

    /// Select a remote for a slot.
    ///
    /// Returns the listing fetch to issue, or `None` if the value was
    /// rejected: not in the catalog, or currently held by the other slot.
    /// Selection change and fetch scheduling are one transition; the caller
    /// enqueues the returned ticket. Re-selecting the slot's current value
    /// is a fresh selection change and re-issues the fetch.
    #[must_use]
    pub fn select(&mut self, slot: Slot, remote: &str) -> Option<ListingTicket> {
        if !self.candidates(slot).contains(&remote) {
            return None;
        }

        let state = self.slot_mut(slot);
        state.selected = Some(remote.to_string());
        state.load = LoadState::Loading;
        state.seq += 1;

        Some(ListingTicket {
            slot,
            remote: remote.to_string(),
            seq: state.seq,
        })
    }

    /// Clear a slot's selection. Always permitted; the other slot is
    /// untouched. The sequence bump strands any fetch still in flight for
    /// the old selection.
    pub fn clear(&mut self, slot: Slot) {
        let state = self.slot_mut(slot);
        state.selected = None;
        state.load = LoadState::Idle;
        state.seq += 1;
    }

    /// Apply a resolved listing fetch.
    ///
    /// A stale ticket (the slot changed again after the fetch was issued)
    /// is discarded without touching any state; returns whether the result
    /// was applied.
    pub fn apply_listing(
        &mut self,
        ticket: &ListingTicket,
        result: Result<Vec<RemoteEntry>, AppError>,
    ) -> bool {
        if self.slot(ticket.slot).seq != ticket.seq {
            return false;
        }

        self.slot_mut(ticket.slot).load = match result {
            Ok(entries) => LoadState::Loaded(entries),
            Err(_) => LoadState::Failed,
        };
        true
    }

    /// Readiness signal: both slots chosen. The two can never be equal by
    /// construction, so no inequality check is needed.
    pub fn ready(&self) -> bool {
        self.source.selected.is_some() && self.destination.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::BackendError;

    fn entry(name: &str) -> RemoteEntry {
        RemoteEntry {
            id: name.to_string(),
            name: name.to_string(),
            is_dir: false,
        }
    }

    fn fetch_error() -> AppError {
        AppError::Backend(BackendError::Backend("listing failed".to_string()))
    }

    fn selector() -> SelectorState {
        let mut state = SelectorState::new();
        state.set_catalog(vec![
            "drive-a".to_string(),
            "drive-b".to_string(),
            "drive-c".to_string(),
        ]);
        state
    }

    #[test]
    fn candidates_exclude_the_other_slots_selection() {
        let mut state = selector();
        state.select(Slot::Source, "drive-a").unwrap();

        assert_eq!(state.candidates(Slot::Destination), vec!["drive-b", "drive-c"]);
        // The selecting slot still sees the full catalog
        assert_eq!(
            state.candidates(Slot::Source),
            vec!["drive-a", "drive-b", "drive-c"]
        );
    }

    #[test]
    fn candidates_plus_exclusion_cover_the_catalog() {
        let mut state = selector();
        state.select(Slot::Destination, "drive-b").unwrap();

        let mut seen: Vec<&str> = state.candidates(Slot::Source);
        seen.push(state.selected(Slot::Destination).unwrap());
        seen.sort_unstable();
        assert_eq!(seen, vec!["drive-a", "drive-b", "drive-c"]);
    }

    #[test]
    fn selecting_the_other_slots_remote_is_a_no_op() {
        let mut state = selector();
        state.select(Slot::Source, "drive-a").unwrap();

        assert!(state.select(Slot::Destination, "drive-a").is_none());
        assert_eq!(state.selected(Slot::Destination), None);
        assert_eq!(*state.load(Slot::Destination), LoadState::Idle);
    }

    #[test]
    fn selecting_outside_the_catalog_is_a_no_op() {
        let mut state = selector();
        assert!(state.select(Slot::Source, "ghost").is_none());
        assert_eq!(state.selected(Slot::Source), None);
        assert_eq!(*state.load(Slot::Source), LoadState::Idle);
    }

    #[test]
    fn empty_catalog_rejects_everything() {
        let mut state = SelectorState::new();
        assert!(state.select(Slot::Source, "drive-a").is_none());
        assert!(state.select(Slot::Destination, "drive-a").is_none());
    }

    #[test]
    fn both_slots_never_hold_the_same_remote() {
        let mut state = selector();
        let script = [
            (Slot::Source, "drive-a"),
            (Slot::Destination, "drive-a"),
            (Slot::Destination, "drive-b"),
            (Slot::Source, "drive-b"),
            (Slot::Source, "drive-c"),
            (Slot::Destination, "drive-c"),
            (Slot::Destination, "drive-a"),
        ];

        for (slot, remote) in script {
            let _ = state.select(slot, remote);
            if let (Some(src), Some(dst)) = (
                state.selected(Slot::Source),
                state.selected(Slot::Destination),
            ) {
                assert_ne!(src, dst);
            }
        }
    }

    #[test]
    fn selection_moves_the_slot_to_loading() {
        let mut state = selector();
        let ticket = state.select(Slot::Source, "drive-a").unwrap();

        assert_eq!(ticket.slot, Slot::Source);
        assert_eq!(ticket.remote, "drive-a");
        assert_eq!(*state.load(Slot::Source), LoadState::Loading);
    }

    #[test]
    fn listing_result_is_applied_in_received_order() {
        let mut state = selector();
        let ticket = state.select(Slot::Source, "drive-a").unwrap();

        let entries = vec![entry("zeta"), entry("alpha"), entry("midway")];
        assert!(state.apply_listing(&ticket, Ok(entries.clone())));
        assert_eq!(state.load(Slot::Source).entries(), entries.as_slice());
    }

    #[test]
    fn superseded_result_cannot_overwrite_the_newer_selection() {
        let mut state = selector();
        let first = state.select(Slot::Source, "drive-a").unwrap();
        let second = state.select(Slot::Source, "drive-b").unwrap();

        // drive-a resolves after drive-b was selected but before drive-b's
        // own fetch resolves
        assert!(!state.apply_listing(&first, Ok(vec![entry("stale")])));
        assert_eq!(*state.load(Slot::Source), LoadState::Loading);

        assert!(state.apply_listing(&second, Ok(vec![entry("fresh")])));
        assert_eq!(state.load(Slot::Source).entries(), &[entry("fresh")]);
    }

    #[test]
    fn superseded_result_arriving_last_is_still_discarded() {
        let mut state = selector();
        let first = state.select(Slot::Source, "drive-a").unwrap();
        let second = state.select(Slot::Source, "drive-b").unwrap();

        assert!(state.apply_listing(&second, Ok(vec![entry("fresh")])));
        assert!(!state.apply_listing(&first, Ok(vec![entry("stale")])));
        assert_eq!(state.load(Slot::Source).entries(), &[entry("fresh")]);
    }

    #[test]
    fn superseded_failure_is_also_discarded() {
        let mut state = selector();
        let first = state.select(Slot::Source, "drive-a").unwrap();
        let second = state.select(Slot::Source, "drive-b").unwrap();

        assert!(!state.apply_listing(&first, Err(fetch_error())));
        assert_eq!(*state.load(Slot::Source), LoadState::Loading);

        assert!(state.apply_listing(&second, Ok(vec![entry("fresh")])));
    }

    #[test]
    fn clearing_resets_to_idle_and_strands_the_fetch() {
        let mut state = selector();
        let ticket = state.select(Slot::Source, "drive-a").unwrap();
        state.clear(Slot::Source);

        assert_eq!(state.selected(Slot::Source), None);
        assert_eq!(*state.load(Slot::Source), LoadState::Idle);

        // The old fetch resolving later must be a no-op
        assert!(!state.apply_listing(&ticket, Ok(vec![entry("late")])));
        assert_eq!(*state.load(Slot::Source), LoadState::Idle);
    }

    #[test]
    fn reselecting_the_same_remote_reissues_the_fetch() {
        let mut state = selector();
        let first = state.select(Slot::Source, "drive-a").unwrap();
        assert!(state.apply_listing(&first, Ok(vec![entry("old")])));

        let second = state.select(Slot::Source, "drive-a").unwrap();
        assert_eq!(*state.load(Slot::Source), LoadState::Loading);

        // The original ticket is stale now; only the re-issued one applies
        assert!(!state.apply_listing(&first, Ok(vec![entry("old")])));
        assert!(state.apply_listing(&second, Ok(vec![entry("new")])));
        assert_eq!(state.load(Slot::Source).entries(), &[entry("new")]);
    }

    #[test]
    fn ready_requires_both_slots() {
        let mut state = selector();
        assert!(!state.ready());

        state.select(Slot::Source, "drive-a").unwrap();
        assert!(!state.ready());

        state.select(Slot::Destination, "drive-b").unwrap();
        assert!(state.ready());

        state.clear(Slot::Source);
        assert!(!state.ready());
    }

    #[test]
    fn listing_failure_marks_only_the_owning_slot() {
        let mut state = selector();
        let src = state.select(Slot::Source, "drive-a").unwrap();
        let dst = state.select(Slot::Destination, "drive-b").unwrap();

        assert!(state.apply_listing(&src, Err(fetch_error())));
        assert_eq!(*state.load(Slot::Source), LoadState::Failed);
        assert_eq!(*state.load(Slot::Destination), LoadState::Loading);

        // Readiness derives from selection alone; the failure changes nothing
        assert!(state.ready());

        assert!(state.apply_listing(&dst, Ok(vec![entry("doc")])));
        assert_eq!(*state.load(Slot::Destination), LoadState::Loaded(vec![entry("doc")]));
    }

    #[test]
    fn failed_slot_shows_no_entries() {
        let mut state = selector();
        let ticket = state.select(Slot::Source, "drive-a").unwrap();
        assert!(state.apply_listing(&ticket, Err(fetch_error())));
        assert!(state.load(Slot::Source).entries().is_empty());
    }
}
