//! Request dispatcher
//!
//! Runs each webhook request on its own worker thread and posts the
//! completion back to the UI loop as `Event::Api`. Requests are never
//! cancelled or de-duplicated here.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{execute, ApiRequest, ExpenseBackend};
use crate::audit::ActivityLogger;

use super::event::Event;

/// Sends requests to the backend without blocking the UI
pub struct Dispatcher {
    backend: Arc<dyn ExpenseBackend>,
    sender: Sender<Event>,
    activity: Option<ActivityLogger>,
}

impl Dispatcher {
    /// Create a dispatcher that reports completions on `sender`
    pub fn new(
        backend: Arc<dyn ExpenseBackend>,
        sender: Sender<Event>,
        activity: Option<ActivityLogger>,
    ) -> Self {
        Self {
            backend,
            sender,
            activity,
        }
    }

    /// Start a request in the background
    pub fn dispatch(&self, request: ApiRequest) -> thread::JoinHandle<()> {
        let backend = Arc::clone(&self.backend);
        let sender = self.sender.clone();
        let activity = self.activity.clone();

        thread::spawn(move || {
            let response = execute(backend.as_ref(), request, activity.as_ref());
            // The UI may already have quit
            let _ = sender.send(Event::Api(response));
        })
    }
}
