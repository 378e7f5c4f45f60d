//! Schema of the portfolio document served as `portfolio.json`.

use serde::{Deserialize, Serialize};

/// Root document. Loaded once per session and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
	pub personal: Personal,
	#[serde(default)]
	pub skills: Vec<Skill>,
	#[serde(default)]
	pub projects: Vec<Project>,
	#[serde(default)]
	pub hobbies: Vec<Hobby>,
	#[serde(default)]
	pub contact: Vec<Contact>,
	#[serde(default)]
	pub navigation: Vec<Navigation>,
	#[serde(default)]
	pub theme: Theme,
	#[serde(default)]
	pub meta: Meta,
	#[serde(default)]
	pub experiments: Vec<Experiment>,
	#[serde(default)]
	pub personal_cards: Vec<PersonalCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Personal {
	pub name: String,
	pub title: String,
	pub greeting: String,
	pub bio: String,
	#[serde(default)]
	pub location: String,
	#[serde(default)]
	pub avatar: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
	pub id: String,
	pub name: String,
	/// Proficiency, 0 to 100.
	pub level: f64,
	pub color: String,
	#[serde(default)]
	pub category: String,
	#[serde(default)]
	pub years: f64,
	#[serde(default)]
	pub description: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
	Completed,
	InProgress,
	#[default]
	Planned,
	/// Any status string the site does not know about.
	#[serde(other)]
	Unknown,
}

impl ProjectStatus {
	pub fn label(&self) -> &'static str {
		match self {
			ProjectStatus::Completed => "Completed",
			ProjectStatus::InProgress => "In progress",
			ProjectStatus::Planned => "Planned",
			ProjectStatus::Unknown => "Other",
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub id: String,
	pub title: String,
	pub description: String,
	#[serde(default)]
	pub short_description: String,
	#[serde(default)]
	pub tech: Vec<String>,
	pub color: String,
	#[serde(default)]
	pub status: ProjectStatus,
	#[serde(default)]
	pub year: Option<u32>,
	#[serde(default)]
	pub duration: String,
	#[serde(default)]
	pub github: Option<String>,
	#[serde(default)]
	pub demo: Option<String>,
	#[serde(default)]
	pub image: Option<String>,
	#[serde(default)]
	pub highlights: Vec<String>,
}

impl Project {
	/// Card copy: the short description when present, the full one otherwise.
	pub fn summary(&self) -> &str {
		if self.short_description.is_empty() {
			&self.description
		} else {
			&self.short_description
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hobby {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub description: String,
	pub color: String,
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub value: String,
	pub url: String,
	pub color: String,
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Navigation {
	pub id: String,
	pub name: String,
	pub href: String,
	#[serde(default)]
	pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
	pub primary: String,
	pub accent1: String,
	pub accent2: String,
	pub accent3: String,
	pub accent4: String,
}

impl Default for ThemeColors {
	fn default() -> Self {
		Self {
			primary: "#f5efe1".into(),
			accent1: "#7a458c".into(),
			accent2: "#9d8cc2".into(),
			accent3: "#6f7d96".into(),
			accent4: "#c8ccd4".into(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeFonts {
	pub title: String,
	pub body: String,
}

impl Default for ThemeFonts {
	fn default() -> Self {
		Self {
			title: "Inter".into(),
			body: "Inter".into(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
	#[serde(default)]
	pub colors: ThemeColors,
	#[serde(default)]
	pub fonts: ThemeFonts,
}

impl Theme {
	/// Inline style declaring the theme as CSS custom properties.
	pub fn css_variables(&self) -> String {
		let c = &self.colors;
		format!(
			"--color-primary: {}; --color-accent1: {}; --color-accent2: {}; --color-accent3: {}; --color-accent4: {}; --font-title: {}; --font-body: {};",
			c.primary, c.accent1, c.accent2, c.accent3, c.accent4, self.fonts.title, self.fonts.body
		)
	}
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub keywords: Vec<String>,
	#[serde(default)]
	pub last_updated: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
	pub id: String,
	pub caption: String,
	pub image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFront {
	pub title: String,
	#[serde(default)]
	pub subtitle: String,
	#[serde(default)]
	pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardBack {
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub details: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalCard {
	pub id: String,
	pub front: CardFront,
	pub back: CardBack,
	pub color: String,
}

impl PortfolioData {
	pub fn skills_by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Skill> {
		self.skills.iter().filter(move |s| s.category == category)
	}

	pub fn projects_by_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
		self.projects.iter().filter(move |p| p.status == status)
	}

	pub fn hobbies_by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Hobby> {
		self.hobbies.iter().filter(move |h| h.category == category)
	}

	pub fn contact_by_id(&self, id: &str) -> Option<&Contact> {
		self.contact.iter().find(|c| c.id == id)
	}
}
