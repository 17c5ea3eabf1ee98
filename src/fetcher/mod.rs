pub mod balance_fetcher;

pub use balance_fetcher::BalanceFetcher;
