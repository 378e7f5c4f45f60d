//! Portfolio document: schema, fallback copy, and the one-shot loader.

mod error;
mod fallback;
mod fetch;
mod store;
mod types;

pub use error::LoadError;
pub use fallback::{fallback_cards, fallback_portfolio};
pub use fetch::fetch_json;
pub use store::{LoadState, PortfolioStore, provide_portfolio_store, use_portfolio};
pub use types::*;
