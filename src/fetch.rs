//! Background fetch worker using a thread and channels.
//!
//! The event loop never blocks on the network: requests go to a dedicated
//! worker thread over a channel and completed fetches are polled back with
//! `try_recv()`. Dropping the manager closes the request channel, which
//! terminates the worker; a response the worker can no longer deliver is
//! dropped, which abandons in-flight fetches on teardown.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

use crate::errors::AppError;
use crate::remote::{RemoteBackend, RemoteEntry};
use crate::state::selector::ListingTicket;

/// Request for a fetch operation
pub enum FetchRequest {
    /// List the catalog of known remotes (issued once, at startup)
    Remotes,
    /// List the top-level entries of the ticket's remote
    Listing(ListingTicket),
}

/// Response from a completed fetch
pub enum FetchResponse {
    Remotes(Result<Vec<String>, AppError>),
    Listing {
        /// The ticket the request was issued under, returned unchanged so
        /// the state machine can check it against the slot's live selection.
        ticket: ListingTicket,
        result: Result<Vec<RemoteEntry>, AppError>,
    },
}

/// Manages fetches against the listing backend on a background thread.
pub struct FetchManager {
    tx: Sender<FetchRequest>,
    rx: Receiver<FetchResponse>,
}

impl FetchManager {
    /// Create a new FetchManager with a background worker thread.
    pub fn new(backend: Arc<dyn RemoteBackend>) -> Self {
        let (req_tx, req_rx) = channel::<FetchRequest>();
        let (res_tx, res_rx) = channel::<FetchResponse>();

        thread::spawn(move || {
            while let Ok(request) = req_rx.recv() {
                handle_request(request, backend.as_ref(), &res_tx);
            }
        });

        Self {
            tx: req_tx,
            rx: res_rx,
        }
    }

    /// Send a request to the background worker.
    pub fn send(&self, req: FetchRequest) {
        // Send errors only occur if the worker has exited.
        let _ = self.tx.send(req);
    }

    /// Try to receive a completed fetch without blocking.
    /// Returns `None` if nothing has resolved yet.
    #[must_use]
    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.rx.try_recv().ok()
    }
}

fn handle_request(req: FetchRequest, backend: &dyn RemoteBackend, tx: &Sender<FetchResponse>) {
    match req {
        FetchRequest::Remotes => {
            let result = backend.list_remotes().map_err(AppError::from);
            let _ = tx.send(FetchResponse::Remotes(result));
        }
        FetchRequest::Listing(ticket) => {
            let result = backend.list_entries(&ticket.remote).map_err(AppError::from);
            let _ = tx.send(FetchResponse::Listing { ticket, result });
        }
    }
}
