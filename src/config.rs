//! Application-level settings, overridable at build time.

use std::time::Duration;

use leptos::prelude::*;
use log::Level;

const DEFAULT_PORTFOLIO_URL: &str = "/portfolio.json";
const DEFAULT_CARDS_URL: &str = "/personalCards.json";

/// Settings shared through context by [`provide_config`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Location of the main portfolio document.
	pub portfolio_url: String,
	/// Location of the standalone "get to know me" cards.
	pub cards_url: String,
	pub log_level: Level,
	/// Length of each half of the landing/graph cross-fade.
	pub transition: Duration,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			portfolio_url: DEFAULT_PORTFOLIO_URL.into(),
			cards_url: DEFAULT_CARDS_URL.into(),
			log_level: Level::Debug,
			transition: Duration::from_millis(500),
		}
	}
}

impl AppConfig {
	/// Defaults with `PORTFOLIO_URL`, `PORTFOLIO_CARDS_URL` and `PORTFOLIO_LOG`
	/// applied when they were set at compile time.
	pub fn from_build_env() -> Self {
		Self::from_overrides(
			option_env!("PORTFOLIO_URL"),
			option_env!("PORTFOLIO_CARDS_URL"),
			option_env!("PORTFOLIO_LOG"),
		)
	}

	fn from_overrides(url: Option<&str>, cards: Option<&str>, level: Option<&str>) -> Self {
		let mut config = Self::default();
		if let Some(url) = url.filter(|u| !u.is_empty()) {
			config.portfolio_url = url.into();
		}
		if let Some(cards) = cards.filter(|u| !u.is_empty()) {
			config.cards_url = cards.into();
		}
		if let Some(level) = level.and_then(|l| l.parse().ok()) {
			config.log_level = level;
		}
		config
	}
}

pub fn provide_config(config: AppConfig) {
	provide_context(config);
}

/// The configuration in context, or defaults when none was provided.
pub fn use_config() -> AppConfig {
	use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn overrides_replace_defaults() {
		let config = AppConfig::from_overrides(Some("/data/site.json"), None, Some("warn"));
		assert_eq!(config.portfolio_url, "/data/site.json");
		assert_eq!(config.cards_url, DEFAULT_CARDS_URL);
		assert_eq!(config.log_level, Level::Warn);
	}

	#[test]
	fn empty_or_invalid_overrides_are_ignored() {
		let config = AppConfig::from_overrides(Some(""), Some(""), Some("loud"));
		assert_eq!(config, AppConfig::default());
	}
}
