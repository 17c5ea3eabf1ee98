use crate::models::portfolio::PortfolioSnapshot;
use crate::view::card::BalanceCard;

/// What the viewer currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing fetched yet
    Idle,
    Loading,
    Error(String),
    Loaded(LoadedView),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&LoadedView> {
        match self {
            ViewState::Loaded(view) => Some(view),
            _ => None,
        }
    }
}

/// A fetched snapshot together with its cards in display order
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedView {
    pub snapshot: PortfolioSnapshot,
    pub cards: Vec<BalanceCard>,
}

impl LoadedView {
    /// Cards built without probing icons
    pub fn new(snapshot: PortfolioSnapshot) -> Self {
        let cards = snapshot
            .assets()
            .map(|asset| BalanceCard::from_asset(asset, true))
            .collect();
        Self { snapshot, cards }
    }

    pub fn with_cards(snapshot: PortfolioSnapshot, cards: Vec<BalanceCard>) -> Self {
        Self { snapshot, cards }
    }
}
