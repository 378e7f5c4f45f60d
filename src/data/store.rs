use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{error, info, warn};

use super::error::LoadError;
use super::fallback::fallback_portfolio;
use super::fetch::fetch_json;
use super::types::{Contact, Hobby, PortfolioData, Project, ProjectStatus, Skill};

/// Snapshot of the one-shot document load.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadState {
	pub data: Option<PortfolioData>,
	pub loading: bool,
	pub error: Option<LoadError>,
}

impl LoadState {
	pub fn pending() -> Self {
		Self {
			data: None,
			loading: true,
			error: None,
		}
	}

	/// Final state for a finished load. Failures still carry data: the
	/// built-in fallback document.
	pub fn settle(result: Result<PortfolioData, LoadError>) -> Self {
		match result {
			Ok(data) => Self {
				data: Some(data),
				loading: false,
				error: None,
			},
			Err(err) => Self {
				data: Some(fallback_portfolio()),
				loading: false,
				error: Some(err),
			},
		}
	}
}

/// Reactive handle to the portfolio document, shared through context.
#[derive(Clone, Copy)]
pub struct PortfolioStore {
	state: RwSignal<LoadState>,
}

impl PortfolioStore {
	pub fn new() -> Self {
		Self {
			state: RwSignal::new(LoadState::pending()),
		}
	}

	/// Start the single fetch. There is no retry; reloading the page is the
	/// only way to try again.
	pub fn load(self, url: String) {
		spawn_local(async move {
			let result = fetch_json::<PortfolioData>(&url).await;
			match &result {
				Ok(data) => info!(
					"Loaded portfolio from {url}: {} skills, {} projects",
					data.skills.len(),
					data.projects.len()
				),
				Err(err) => {
					error!("Failed to load portfolio from {url}: {err}");
					warn!("Using built-in fallback portfolio");
				}
			}
			self.state.set(LoadState::settle(result));
		});
	}

	pub fn data(&self) -> Option<PortfolioData> {
		self.state.with(|s| s.data.clone())
	}

	pub fn loading(&self) -> bool {
		self.state.with(|s| s.loading)
	}

	pub fn error(&self) -> Option<LoadError> {
		self.state.with(|s| s.error.clone())
	}

	/// Run `f` against the loaded document without cloning it.
	pub fn with_data<R>(&self, f: impl FnOnce(&PortfolioData) -> R) -> Option<R> {
		self.state.with(|s| s.data.as_ref().map(f))
	}

	pub fn skills_by_category(&self, category: &str) -> Vec<Skill> {
		self.with_data(|d| d.skills_by_category(category).cloned().collect())
			.unwrap_or_default()
	}

	pub fn projects_by_status(&self, status: ProjectStatus) -> Vec<Project> {
		self.with_data(|d| d.projects_by_status(status).cloned().collect())
			.unwrap_or_default()
	}

	pub fn hobbies_by_category(&self, category: &str) -> Vec<Hobby> {
		self.with_data(|d| d.hobbies_by_category(category).cloned().collect())
			.unwrap_or_default()
	}

	pub fn contact_by_id(&self, id: &str) -> Option<Contact> {
		self.with_data(|d| d.contact_by_id(id).cloned()).flatten()
	}
}

impl Default for PortfolioStore {
	fn default() -> Self {
		Self::new()
	}
}

/// Create the store, kick off the load from `url`, and put it in context.
pub fn provide_portfolio_store(url: String) -> PortfolioStore {
	let store = PortfolioStore::new();
	store.load(url);
	provide_context(store);
	store
}

pub fn use_portfolio() -> PortfolioStore {
	expect_context::<PortfolioStore>()
}
