use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use solana_balance_viewer::{
    AssetBalance, AssetProvider, BalanceFetcher, PriceProvider, PriceQuote, Renderer, ViewController,
    ViewState,
};

/// Token list per owner; owners listed in `gates` block until released
struct GatedAssets {
    gates: HashMap<String, Arc<Notify>>,
}

impl GatedAssets {
    fn new(owners: &[&str]) -> Self {
        Self {
            gates: owners
                .iter()
                .map(|owner| (owner.to_string(), Arc::new(Notify::new())))
                .collect(),
        }
    }

    fn release(&self, owner: &str) {
        self.gates[owner].notify_one();
    }
}

#[async_trait]
impl AssetProvider for GatedAssets {
    async fn fetch_fungible_assets(&self, owner: &str) -> anyhow::Result<Vec<AssetBalance>> {
        if let Some(gate) = self.gates.get(owner) {
            gate.notified().await;
        }
        Ok(vec![AssetBalance::new(
            owner,
            owner,
            "TKN",
            None,
            1_000_000,
            6,
            Some(PriceQuote::usd(2.0)),
        )])
    }

    async fn fetch_native_balance(&self, _owner: &str) -> anyhow::Result<u64> {
        Ok(1_000_000_000)
    }
}

struct FixedPrice(Option<f64>);

#[async_trait]
impl PriceProvider for FixedPrice {
    async fn get_sol_price(&self) -> anyhow::Result<f64> {
        self.0.ok_or_else(|| anyhow::anyhow!("price API returned 500"))
    }
}

#[derive(Default)]
struct RecordingRenderer {
    states: Mutex<Vec<ViewState>>,
}

#[async_trait]
impl Renderer for RecordingRenderer {
    async fn render(&self, state: &ViewState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

fn loaded_token_id(state: &ViewState) -> Option<String> {
    state
        .loaded()
        .and_then(|view| view.snapshot.tokens.first())
        .map(|token| token.id.clone())
}

#[tokio::test]
async fn single_fetch_goes_loading_then_loaded() {
    let assets = Arc::new(GatedAssets::new(&[]));
    let fetcher = BalanceFetcher::new(assets, Arc::new(FixedPrice(Some(100.0))));
    let renderer = Arc::new(RecordingRenderer::default());

    let (controller, view_task) = ViewController::new(fetcher, renderer.clone(), None);
    controller.trigger("wallet").await.unwrap();
    controller.shutdown();
    let final_state = view_task.await.unwrap();

    let view = final_state.loaded().expect("loaded");
    assert_eq!(view.snapshot.total_value_usd, 102.0);
    assert_eq!(view.cards.len(), 2);
    assert_eq!(view.cards[0].symbol, "SOL");
    assert_eq!(view.cards[0].value.as_deref(), Some("$100.00"));

    let states = renderer.states.lock().unwrap();
    assert_eq!(states.len(), 2);
    assert!(states[0].is_loading());
    assert!(states[1].loaded().is_some());
}

#[tokio::test]
async fn failure_shows_only_the_error() {
    let fetcher = BalanceFetcher::new(Arc::new(GatedAssets::new(&[])), Arc::new(FixedPrice(None)));
    let renderer = Arc::new(RecordingRenderer::default());

    let (controller, view_task) = ViewController::new(fetcher, renderer.clone(), None);
    controller.trigger("wallet").await.unwrap();
    controller.shutdown();
    let final_state = view_task.await.unwrap();

    assert_eq!(
        final_state.error(),
        Some("Failed to fetch balances. Please try again.")
    );
    assert!(!final_state.is_loading());
    assert!(final_state.loaded().is_none());
}

#[tokio::test]
async fn stale_result_settling_last_is_discarded() {
    let assets = Arc::new(GatedAssets::new(&["first", "second"]));
    let fetcher = BalanceFetcher::new(assets.clone(), Arc::new(FixedPrice(Some(1.0))));
    let renderer = Arc::new(RecordingRenderer::default());

    let (controller, view_task) = ViewController::new(fetcher, renderer.clone(), None);
    let first = controller.trigger("first");
    let second = controller.trigger("second");

    assets.release("second");
    second.await.unwrap();
    assets.release("first");
    first.await.unwrap();

    controller.shutdown();
    let final_state = view_task.await.unwrap();

    assert_eq!(loaded_token_id(&final_state).as_deref(), Some("second"));

    let states = renderer.states.lock().unwrap();
    assert!(states
        .iter()
        .all(|state| loaded_token_id(state).as_deref() != Some("first")));
}

#[tokio::test]
async fn later_trigger_wins_when_results_arrive_in_order() {
    let assets = Arc::new(GatedAssets::new(&["first", "second"]));
    let fetcher = BalanceFetcher::new(assets.clone(), Arc::new(FixedPrice(Some(1.0))));
    let renderer = Arc::new(RecordingRenderer::default());

    let (controller, view_task) = ViewController::new(fetcher, renderer.clone(), None);
    let first = controller.trigger("first");
    let second = controller.trigger("second");

    assets.release("first");
    first.await.unwrap();
    assets.release("second");
    second.await.unwrap();

    controller.shutdown();
    let final_state = view_task.await.unwrap();
    assert_eq!(loaded_token_id(&final_state).as_deref(), Some("second"));
}
