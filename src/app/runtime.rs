//! The catalog session worker.
//!
//! One session per screen mount: a spawned worker owns the
//! [`PaginationController`], receives commands from the presentation layer,
//! spawns one task per issued fetch, and publishes a [`FeedSnapshot`] after
//! every applied transition. Stale completions are dropped inside the
//! controller by tag comparison; the worker never mutates state from more
//! than one place, so there is no locking.

use std::future::Future;
use std::sync::Arc;

use tokio::select;
use tokio::sync::mpsc;
use tokio::time::Duration;

use crate::config::ApiConfig;
use crate::error::FetchFailed;
use crate::logic::debounce;
use crate::logic::{PaginationController, project};
use crate::state::{Event, FetchTag, PaginatedResult, Phase, QueryCriteria};

/// Commands the presentation layer sends into a session.
#[derive(Clone, Debug)]
pub enum SessionCommand {
    /// Adopt a new criteria snapshot (also used on initial mount); resets
    /// accumulation and starts a first-page fetch.
    SetCriteria(QueryCriteria),
    /// The list scrolled near its end; fetch the next page if one remains
    /// and nothing is in flight.
    LoadMore,
}

/// One renderable snapshot of the session: the accumulated list plus the
/// derived flags of [`crate::logic::projection`].
#[derive(Clone, Debug)]
pub struct FeedSnapshot {
    /// Accumulated events for the current criteria, in arrival order.
    pub events: Vec<Event>,
    /// Controller phase at the time of the snapshot.
    pub phase: Phase,
    /// 1-based page most recently applied.
    pub current_page: u32,
    /// Total pages reported by the latest applied response.
    pub total_pages: u32,
    /// Show the "no events found" placeholder.
    pub is_empty: bool,
    /// Show the full-screen spinner.
    pub show_full_screen_loader: bool,
    /// Show the footer spinner.
    pub show_footer_loader: bool,
    /// Text of the most recent failure, if the session is in `Error`.
    pub last_error: Option<String>,
}

/// Handle to a spawned catalog session.
///
/// Dropping both channel ends tears the worker down; any fetch still in
/// flight completes into a closed channel and is discarded.
pub struct CatalogSession {
    /// Command channel into the worker.
    pub commands: mpsc::UnboundedSender<SessionCommand>,
    /// Snapshot stream out of the worker.
    pub snapshots: mpsc::UnboundedReceiver<FeedSnapshot>,
}

impl CatalogSession {
    /// What: Spawn a session backed by the real HTTP adapter.
    ///
    /// Inputs:
    /// - `config`: Deployment configuration (base URL, page size, timeout)
    ///
    /// Output:
    /// - The session handle, or the client builder error.
    ///
    /// # Errors
    /// Returns the underlying [`reqwest`] error when the HTTP client cannot
    /// be constructed.
    pub fn spawn(config: &ApiConfig) -> reqwest::Result<Self> {
        let client = config.client()?;
        let cfg = config.clone();
        Ok(Self::spawn_with_fetcher(move |criteria, page| {
            let client = client.clone();
            let cfg = cfg.clone();
            async move {
                crate::sources::fetch_page(&client, &cfg, &criteria, page, cfg.page_size).await
            }
        }))
    }

    /// Spawn a session over an arbitrary page fetcher.
    ///
    /// The seam tests use to drive the session without a network; the
    /// fetcher receives the criteria snapshot and the 1-based target page.
    pub fn spawn_with_fetcher<F, Fut>(fetch: F) -> Self
    where
        F: Fn(QueryCriteria, u32) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<PaginatedResult, FetchFailed>> + Send + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (snap_tx, snap_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_worker(Arc::new(fetch), cmd_rx, snap_tx));
        Self {
            commands: cmd_tx,
            snapshots: snap_rx,
        }
    }

    /// What: Attach a debounced free-text input to this session.
    ///
    /// Inputs:
    /// - `base`: Criteria the typed text is merged into (category, location,
    ///   and price filters survive typing)
    /// - `quiet`: Debounce quiet period
    ///
    /// Output:
    /// - A sender for raw keystroke-level text; each settled value becomes a
    ///   `SetCriteria` command with the trimmed text as `free_text`.
    ///
    /// Details:
    /// - Settled empty text clears `free_text` rather than searching for an
    ///   empty string.
    pub fn text_input(
        &self,
        base: QueryCriteria,
        quiet: Duration,
    ) -> mpsc::UnboundedSender<String> {
        let (tx, mut rx) = debounce::channel::<String>(quiet);
        let commands = self.commands.clone();
        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                let trimmed = text.trim();
                let mut criteria = base.clone();
                criteria.free_text = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
                if commands.send(SessionCommand::SetCriteria(criteria)).is_err() {
                    break;
                }
            }
        });
        tx
    }
}

/// Worker loop: apply commands and fetch completions through the controller,
/// publishing a snapshot after every applied transition.
async fn run_worker<F, Fut>(
    fetch: Arc<F>,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
    snap_tx: mpsc::UnboundedSender<FeedSnapshot>,
) where
    F: Fn(QueryCriteria, u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PaginatedResult, FetchFailed>> + Send + 'static,
{
    let mut controller = PaginationController::new();
    let (done_tx, mut done_rx) =
        mpsc::unbounded_channel::<(FetchTag, Result<PaginatedResult, FetchFailed>)>();

    loop {
        select! {
            cmd = cmd_rx.recv() => {
                let Some(cmd) = cmd else { break };
                match cmd {
                    SessionCommand::SetCriteria(criteria) => {
                        let tag = controller.set_criteria(criteria);
                        dispatch(&fetch, &done_tx, tag);
                    }
                    SessionCommand::LoadMore => {
                        let Some(tag) = controller.load_more() else {
                            // Backpressured trigger; state unchanged, nothing
                            // to publish.
                            continue;
                        };
                        dispatch(&fetch, &done_tx, tag);
                    }
                }
                if snap_tx.send(snapshot_of(&controller)).is_err() {
                    break;
                }
            }
            Some((tag, outcome)) = done_rx.recv() => {
                if controller.apply(&tag, outcome)
                    && snap_tx.send(snapshot_of(&controller)).is_err()
                {
                    break;
                }
            }
        }
    }
    tracing::debug!("catalog session worker exiting");
}

/// Spawn one task for a tagged fetch and route its completion back to the
/// worker.
fn dispatch<F, Fut>(
    fetch: &Arc<F>,
    done_tx: &mpsc::UnboundedSender<(FetchTag, Result<PaginatedResult, FetchFailed>)>,
    tag: FetchTag,
) where
    F: Fn(QueryCriteria, u32) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<PaginatedResult, FetchFailed>> + Send + 'static,
{
    let fetch = Arc::clone(fetch);
    let done_tx = done_tx.clone();
    tokio::spawn(async move {
        let outcome = fetch(tag.criteria.clone(), tag.page).await;
        let _ = done_tx.send((tag, outcome));
    });
}

/// Capture the controller's current state as a renderable snapshot.
fn snapshot_of(controller: &PaginationController) -> FeedSnapshot {
    let state = controller.state();
    let flags = project(state);
    FeedSnapshot {
        events: state.accumulated_events.clone(),
        phase: state.phase,
        current_page: state.current_page,
        total_pages: state.total_pages,
        is_empty: flags.is_empty,
        show_full_screen_loader: flags.show_full_screen_loader,
        show_footer_loader: flags.show_footer_loader,
        last_error: controller.last_error().map(str::to_string),
    }
}
