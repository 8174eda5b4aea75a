//! Search session: the view state a front end renders.
//!
//! Every submission takes a request id from a monotonically increasing
//! counter. When a resolution completes, its outcome is applied to the view
//! only if its id is still the latest one issued; older completions are
//! dropped. Cache writes made by a dropped resolution still land.
//!
//! The one exception is the initial list: a late `load_initial` still fills
//! the view while no term search has replaced the initial list.

use std::sync::{Mutex, MutexGuard};

use gridiron_stats_data::PlayerId;
use log::{debug, error};

use super::model::ResultSet;
use super::normalizer::{normalize, Query};
use super::resolver::{Resolution, ResolutionSource, SearchResolver};
use crate::errors::SearchError;

/// Immutable snapshot of what the front end should show.
#[derive(Clone, Debug)]
pub struct SearchView {
    pub loading: bool,
    pub error: Option<String>,
    pub results: ResultSet,
    pub selected_player_id: Option<PlayerId>,
}

impl Default for SearchView {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            results: ResultSet::from(Vec::new()),
            selected_player_id: None,
        }
    }
}

struct SessionState {
    latest_request: u64,
    /// True until a term search is applied, and again after a blank reset.
    showing_initial: bool,
    view: SearchView,
}

/// Owns a [`SearchResolver`] and the latest [`SearchView`].
///
/// Methods take `&self`, so a front end may keep several submissions in
/// flight; only the newest one decides what is shown.
pub struct SearchSession {
    resolver: SearchResolver,
    state: Mutex<SessionState>,
}

impl SearchSession {
    /// A new session starts in the loading state, waiting for
    /// [`load_initial`](Self::load_initial).
    pub fn new(resolver: SearchResolver) -> Self {
        Self {
            resolver,
            state: Mutex::new(SessionState {
                latest_request: 0,
                showing_initial: true,
                view: SearchView::default(),
            }),
        }
    }

    pub fn resolver(&self) -> &SearchResolver {
        &self.resolver
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Current view snapshot.
    pub fn view(&self) -> SearchView {
        self.lock_state().view.clone()
    }

    /// Issue a new request id and mark the view as loading.
    fn begin(&self) -> u64 {
        let mut state = self.lock_state();
        state.latest_request += 1;
        state.view.loading = true;
        state.view.error = None;
        state.latest_request
    }

    /// Apply a finished resolution if it is still the latest request.
    ///
    /// A stale initial list is still applied while the view shows the
    /// initial list, so a blank submit racing `load_initial` does not leave
    /// the view empty. Loading and error belong to the newer request.
    fn complete(&self, request_id: u64, outcome: Result<Resolution, SearchError>) -> SearchView {
        let mut state = self.lock_state();

        if request_id != state.latest_request {
            match outcome {
                Ok(resolution)
                    if resolution.source == ResolutionSource::Initial
                        && state.showing_initial =>
                {
                    debug!(
                        "Applying initial list from request {} (latest is {})",
                        request_id, state.latest_request
                    );
                    state.view.results = resolution.results;
                    state.view.selected_player_id = None;
                }
                Ok(_) => debug!(
                    "Discarding stale request {} (latest is {})",
                    request_id, state.latest_request
                ),
                Err(e) => debug!(
                    "Discarding stale request {} (latest is {}): {}: {}",
                    request_id,
                    state.latest_request,
                    e,
                    e.provider_error()
                ),
            }
            return state.view.clone();
        }

        state.view.loading = false;
        match outcome {
            Ok(resolution) => {
                state.showing_initial = resolution.source == ResolutionSource::Initial;
                state.view.results = resolution.results;
                state.view.selected_player_id = resolution.selected_player_id;
            }
            Err(e) => {
                // Results stay as they were before the failed request.
                error!("{}: {}", e, e.provider_error());
                state.view.error = Some(e.user_message());
            }
        }
        state.view.clone()
    }

    /// Load the initial player list into the view.
    pub async fn load_initial(&self) -> SearchView {
        let request_id = self.begin();
        let outcome = self.resolver.load_initial().await;
        self.complete(request_id, outcome)
    }

    /// Handle a search submitted by the user.
    ///
    /// Blank input resets the view to the initial list without touching the
    /// cache or the network; it also supersedes any search still in flight.
    pub async fn submit(&self, raw: &str) -> SearchView {
        let query = normalize(raw);
        let request_id = self.begin();

        let outcome = match &query {
            Query::Empty => Ok(self.resolver.reset()),
            Query::Term(_) => self.resolver.resolve(&query).await,
        };

        self.complete(request_id, outcome)
    }
}
