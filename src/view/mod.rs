//! Presentation: view state, balance cards and the controller driving them

pub mod card;
pub mod controller;
pub mod layout;
pub mod state;

pub use card::{BalanceCard, PLACEHOLDER_ICON_URL};
pub use controller::ViewController;
pub use layout::render_text;
pub use state::{LoadedView, ViewState};
