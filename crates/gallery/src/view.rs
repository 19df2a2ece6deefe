//! Root gallery view.
//!
//! Mounting a [`GalleryView`] spawns the catalog load as a task tied to the
//! view's lifetime. The state starts as [`ViewState::Loading`] and moves
//! exactly once to `Loaded` or `Failed`. Unmounting (or dropping) the view
//! cancels the task; a cancelled load never updates the state.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use crate::card::DisplayCard;
use crate::error::GalleryError;
use crate::loader::{CatalogSource, PageRequest, fetch_cards};

/// Lifecycle of the gallery view.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Loaded(Vec<DisplayCard>),
    Failed(Arc<GalleryError>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Cards to display; empty unless the load succeeded.
    pub fn cards(&self) -> &[DisplayCard] {
        match self {
            Self::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&GalleryError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Gallery view bound to a single load task.
pub struct GalleryView {
    state: watch::Receiver<ViewState>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl GalleryView {
    /// Mounts the view and starts loading `request` from `source`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(source: Arc<dyn CatalogSource>, request: PageRequest) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let cancel = CancellationToken::new();
        let task_cancel = cancel.clone();

        let task = tokio::spawn(async move {
            tokio::select! {
                _ = task_cancel.cancelled() => {
                    debug!("gallery load cancelled");
                }
                result = fetch_cards(source.as_ref(), request) => {
                    if task_cancel.is_cancelled() {
                        debug!("gallery load finished after unmount, discarding");
                        return;
                    }
                    let next = match result {
                        Ok(cards) => ViewState::Loaded(cards),
                        Err(e) => {
                            error!(error = %e, "gallery load failed");
                            ViewState::Failed(Arc::new(e))
                        }
                    };
                    let _ = tx.send(next);
                }
            }
        });

        Self {
            state: rx,
            cancel,
            task,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change, for re-rendering.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Waits until the load settles.
    ///
    /// Returns the final state, or `Loading` if the view was unmounted first.
    pub async fn settled(&self) -> ViewState {
        let mut rx = self.state.clone();
        let settled = rx
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        match settled {
            Ok(state) => state,
            Err(_) => rx.borrow().clone(),
        }
    }

    /// Cancels the pending load. The state is left as it is.
    pub fn unmount(&self) {
        self.cancel.cancel();
    }

}

impl Drop for GalleryView {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
