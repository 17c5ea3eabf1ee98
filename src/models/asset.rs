use crate::utils::valuation::{self, Valuation};

/// Identifier used for the native coin, which has no mint address
pub const NATIVE_ASSET_ID: &str = "sol";

/// Decimal precision of the native coin (lamports per SOL = 10^9)
pub const NATIVE_DECIMALS: u8 = 9;

pub const NATIVE_NAME: &str = "Solana";
pub const NATIVE_SYMBOL: &str = "SOL";
pub const NATIVE_ICON_URL: &str = "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png";

/// Fiat quote attached to one whole display unit of an asset
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub price_per_token: f64,
    pub currency: String,
}

impl PriceQuote {
    pub fn usd(price_per_token: f64) -> Self {
        Self {
            price_per_token,
            currency: "USD".to_string(),
        }
    }
}

/// Represents an asset balance (fungible token or native coin) with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct AssetBalance {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub image: Option<String>,
    pub amount: u64,
    pub decimals: u8,
    pub ui_amount: f64,
    pub price: Option<PriceQuote>,
}

impl AssetBalance {
    /// Create a new asset balance, deriving the display amount from the raw one
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        image: Option<String>,
        amount: u64,
        decimals: u8,
        price: Option<PriceQuote>,
    ) -> Self {
        let ui_amount = valuation::to_display_balance(amount, decimals);

        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            image,
            amount,
            decimals,
            ui_amount,
            price,
        }
    }

    /// Native coin balance from a lamport amount and an optional USD spot price
    pub fn native(lamports: u64, usd_price: Option<f64>) -> Self {
        Self::new(
            NATIVE_ASSET_ID,
            NATIVE_NAME,
            NATIVE_SYMBOL,
            Some(NATIVE_ICON_URL.to_string()),
            lamports,
            NATIVE_DECIMALS,
            usd_price.map(PriceQuote::usd),
        )
    }

    /// Unit price, if quoted
    pub fn unit_price(&self) -> Option<f64> {
        self.price.as_ref().map(|p| p.price_per_token)
    }

    /// Display balance and display value
    pub fn valuation(&self) -> Valuation {
        valuation::value(self.amount, self.decimals, self.unit_price())
    }

    /// USD value used for aggregation; an unquoted asset contributes zero
    pub fn value_or_zero(&self) -> f64 {
        self.valuation().value.unwrap_or(0.0)
    }

    /// Check if this is the native coin
    pub fn is_native(&self) -> bool {
        self.id == NATIVE_ASSET_ID
    }
}
