use crate::data::ProjectStatus;

/// Reserved id of the node representing the portfolio owner.
pub const CENTER_ID: &str = "center";

/// Which ring of the graph a node belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Group {
	#[default]
	Center,
	Skills,
	Projects,
	Hobbies,
	Contact,
}

impl Group {
	pub fn label(&self) -> &'static str {
		match self {
			Group::Center => "center",
			Group::Skills => "skills",
			Group::Projects => "projects",
			Group::Hobbies => "hobbies",
			Group::Contact => "contact",
		}
	}

	/// Orbit index, 0 for the center and growing outwards.
	pub fn tier(&self) -> usize {
		match self {
			Group::Center => 0,
			Group::Skills => 1,
			Group::Projects => 2,
			Group::Hobbies => 3,
			Group::Contact => 4,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
	/// Center to satellite.
	Spoke,
	/// Project to a skill it uses.
	Uses,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub name: String,
	pub group: Group,
	pub color: String,
	pub size: f64,
	/// Set for project nodes only.
	pub status: Option<ProjectStatus>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub color: String,
	pub kind: LinkKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// What the info panel shows for the node under the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverInfo {
	pub name: String,
	pub group: Group,
	pub color: String,
}
