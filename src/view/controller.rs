use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::error::FetchError;
use crate::fetcher::BalanceFetcher;
use crate::models::portfolio::PortfolioSnapshot;
use crate::traits::renderer::{IconProbe, Renderer};
use crate::view::card::build_cards;
use crate::view::state::{LoadedView, ViewState};

/// Events consumed by the view task
#[derive(Debug)]
enum ViewEvent {
    Started { seq: u64 },
    Completed { seq: u64, result: Result<PortfolioSnapshot, FetchError> },
    Shutdown,
}

/// Drives fetches and owns the display state.
///
/// Each trigger gets a sequence number; only the result of the most recent
/// trigger is ever displayed.
pub struct ViewController {
    fetcher: BalanceFetcher,
    sender: UnboundedSender<ViewEvent>,
    next_seq: AtomicU64,
}

impl ViewController {
    /// Create the controller and spawn its view task
    pub fn new(
        fetcher: BalanceFetcher,
        renderer: Arc<dyn Renderer>,
        icon_probe: Option<Arc<dyn IconProbe>>,
    ) -> (Arc<Self>, JoinHandle<ViewState>) {
        let (sender, receiver) = unbounded_channel();

        let view_task = tokio::spawn(Self::process_events(receiver, renderer, icon_probe));

        let controller = Arc::new(Self {
            fetcher,
            sender,
            next_seq: AtomicU64::new(0),
        });
        (controller, view_task)
    }

    /// Process view events in a dedicated task; returns the final state
    async fn process_events(
        mut receiver: UnboundedReceiver<ViewEvent>,
        renderer: Arc<dyn Renderer>,
        icon_probe: Option<Arc<dyn IconProbe>>,
    ) -> ViewState {
        let mut latest_seq = 0;
        let mut state = ViewState::Idle;

        while let Some(event) = receiver.recv().await {
            match event {
                ViewEvent::Started { seq } if seq < latest_seq => {
                    debug!("Ignoring late start of fetch #{} (latest #{})", seq, latest_seq);
                    continue;
                }
                ViewEvent::Started { seq } => {
                    latest_seq = seq;
                    state = ViewState::Loading;
                }
                ViewEvent::Completed { seq, .. } if seq < latest_seq => {
                    debug!("Discarding stale result of fetch #{} (latest #{})", seq, latest_seq);
                    continue;
                }
                ViewEvent::Completed { result, .. } => {
                    state = match result {
                        Ok(snapshot) => {
                            let view = match &icon_probe {
                                Some(probe) => {
                                    let cards = build_cards(&snapshot, probe.as_ref()).await;
                                    LoadedView::with_cards(snapshot, cards)
                                }
                                None => LoadedView::new(snapshot),
                            };
                            ViewState::Loaded(view)
                        }
                        Err(e) => ViewState::Error(e.to_string()),
                    };
                }
                ViewEvent::Shutdown => {
                    debug!("View task shutting down");
                    break;
                }
            }
            renderer.render(&state).await;
        }

        state
    }

    /// Start fetching `address`; the returned handle resolves once the fetch settles
    pub fn trigger(self: &Arc<Self>, address: impl Into<String>) -> JoinHandle<()> {
        let address = address.into();
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Fetch #{} for {}", seq, address);

        self.send(ViewEvent::Started { seq });

        let controller = self.clone();
        tokio::spawn(async move {
            let result = controller.fetcher.fetch(&address).await;
            controller.send(ViewEvent::Completed { seq, result });
        })
    }

    /// Stop the view task after it has handled every queued event
    pub fn shutdown(&self) {
        self.send(ViewEvent::Shutdown);
    }

    fn send(&self, event: ViewEvent) {
        if let Err(e) = self.sender.send(event) {
            error!("Failed to queue view event: {}", e);
        }
    }
}
