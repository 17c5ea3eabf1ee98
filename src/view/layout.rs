use crate::utils::format::{format_usd, short_address};
use crate::view::state::{LoadedView, ViewState};

pub const LOADING_TEXT: &str = "Loading balances...";

/// Lay out a view state as terminal text.
///
/// `Idle`, and a loaded wallet with nothing to show, produce an empty string.
pub fn render_text(state: &ViewState) -> String {
    match state {
        ViewState::Idle => String::new(),
        ViewState::Loading => format!("{}\n", LOADING_TEXT),
        ViewState::Error(message) => format!("{}\n", message),
        ViewState::Loaded(view) => render_loaded(view),
    }
}

fn render_loaded(view: &LoadedView) -> String {
    if view.snapshot.is_empty() {
        return String::new();
    }

    let rule = "=".repeat(60);
    let mut lines = vec![
        rule.clone(),
        format!("Wallet: {}", short_address(&view.snapshot.wallet_address)),
        format!("Total Balance: {}", format_usd(view.snapshot.total_value_usd)),
        "-".repeat(60),
    ];

    for (i, card) in view.cards.iter().enumerate() {
        lines.push(format!("{}. {} ({})", i + 1, card.name, card.symbol));
        lines.push(format!("   Balance: {}", card.balance));
        if let Some(value) = &card.value {
            lines.push(format!("   Value: {}", value));
        }
        lines.push(format!("   Icon: {}", card.icon));
    }

    lines.push(rule);
    lines.push(String::new());
    lines.join("\n")
}
