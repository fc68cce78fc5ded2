use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use entity::prelude::*;
use tracing::{info, warn};

use crate::{form::FormState, relay::Relay, ConsoleError, OFFLINE_MESSAGE};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Failed(String),
}

/// Request lifecycle for one client. At most one request is in flight.
#[derive(Debug, Default)]
pub struct Session {
    state: RequestState,
}

impl Session {
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == RequestState::Loading
    }

    /// Validates the form and marks the session busy. The previous result
    /// is discarded.
    pub fn begin(
        &mut self,
        form: &FormState,
    ) -> Result<GenerationRequest, ConsoleError> {
        if self.is_busy() {
            return Err(ConsoleError::InFlight);
        }
        if !form.is_ready() {
            return Err(ConsoleError::EmptyIdea);
        }

        self.state = RequestState::Loading;
        Ok(form.request())
    }

    pub fn complete(&mut self, outcome: anyhow::Result<String>) -> RequestState {
        self.state = match outcome {
            Ok(result) => RequestState::Success(result),
            Err(e) => {
                warn!(task = "generate", error = format!("{:?}", e));
                RequestState::Failed(OFFLINE_MESSAGE.to_string())
            }
        };
        self.state.clone()
    }

    /// Returns a session whose request was dropped unanswered to idle.
    pub fn abandon(&mut self) {
        if self.is_busy() {
            self.state = RequestState::Idle;
        }
    }
}

/// Clears the busy flag if a submission is dropped before it completes.
struct Pending {
    session: Arc<Mutex<Session>>,
    settled: bool,
}

impl Drop for Pending {
    fn drop(&mut self) {
        if !self.settled {
            warn!(task = "submit", "request dropped before completion");
            lock(&self.session).abandon();
        }
    }
}

fn lock(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives submissions through a [`Relay`], sharing one [`Session`].
#[derive(Debug, Clone)]
pub struct Controller<R> {
    relay: R,
    session: Arc<Mutex<Session>>,
}

impl<R: Relay> Controller<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    pub fn state(&self) -> RequestState {
        self.session().state().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.session().is_busy()
    }

    pub async fn submit(
        &self,
        form: &FormState,
    ) -> Result<RequestState, ConsoleError> {
        let request = self.session().begin(form)?;
        let mut pending = Pending {
            session: self.session.clone(),
            settled: false,
        };
        info!(task = "submit", platform = %request.platform);

        let outcome = self.relay.generate(request).await;
        let state = self.session().complete(outcome);
        pending.settled = true;

        Ok(state)
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        lock(&self.session)
    }
}
