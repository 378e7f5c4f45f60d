use std::collections::HashSet;

use crate::data::{PortfolioData, ProjectStatus, Skill};

use super::types::{CENTER_ID, GraphData, GraphLink, GraphNode, Group, LinkKind};

pub const CENTER_COLOR: &str = "#7a458c";
pub const SKILL_COLOR: &str = "#9d8cc2";
pub const HOBBY_COLOR: &str = "#c8ccd4";

pub const CENTER_SIZE: f64 = 20.0;
pub const MIN_SKILL_SIZE: f64 = 8.0;
pub const HOBBY_SIZE: f64 = 10.0;
pub const CONTACT_SIZE: f64 = 8.0;

const SPOKE_SKILL: &str = "#7a458c80";
const SPOKE_PROJECT: &str = "#9d8cc280";
const SPOKE_HOBBY: &str = "#6f7d9680";
const SPOKE_CONTACT: &str = "#c8ccd480";
const USES_COLOR: &str = "#9d8cc240";

/// Skill radius: grows with level, never below [`MIN_SKILL_SIZE`].
pub fn skill_size(level: f64) -> f64 {
	(level.clamp(0.0, 100.0) / 6.0).max(MIN_SKILL_SIZE)
}

/// Project (size, color), chosen by status alone.
pub fn project_style(status: ProjectStatus) -> (f64, &'static str) {
	match status {
		ProjectStatus::Completed => (14.0, "#5b9a6e"),
		ProjectStatus::InProgress => (12.0, "#5b7fb8"),
		_ => (10.0, "#8a8f98"),
	}
}

/// Skill a tech tag refers to. A case-insensitive exact name match wins;
/// otherwise the first skill whose name contains the tag or is contained in
/// it, in document order.
pub fn match_skill<'a>(tag: &str, skills: &'a [Skill]) -> Option<&'a Skill> {
	let tag = tag.trim().to_lowercase();
	if tag.is_empty() {
		return None;
	}
	let names: Vec<String> = skills.iter().map(|s| s.name.to_lowercase()).collect();
	if let Some(i) = names.iter().position(|n| *n == tag) {
		return Some(&skills[i]);
	}
	names
		.iter()
		.position(|n| !n.is_empty() && (n.contains(&tag) || tag.contains(n.as_str())))
		.map(|i| &skills[i])
}

fn spoke(target: &str, color: &str) -> GraphLink {
	GraphLink {
		source: CENTER_ID.into(),
		target: target.into(),
		color: color.into(),
		kind: LinkKind::Spoke,
	}
}

/// Node/link graph for `data`. Links only ever reference ids inserted
/// earlier, so no endpoint can dangle.
pub fn build_graph(data: &PortfolioData) -> GraphData {
	let mut nodes = Vec::with_capacity(
		1 + data.skills.len() + data.projects.len() + data.hobbies.len() + data.contact.len(),
	);
	let mut links = Vec::new();
	let mut ids: HashSet<String> = HashSet::new();
	ids.insert(CENTER_ID.into());

	nodes.push(GraphNode {
		id: CENTER_ID.into(),
		name: data.personal.name.clone(),
		group: Group::Center,
		color: CENTER_COLOR.into(),
		size: CENTER_SIZE,
		status: None,
	});

	let mut push = |node: GraphNode, link_color: &str, nodes: &mut Vec<GraphNode>| -> bool {
		// A record reusing an existing id (or the reserved center id) is dropped.
		if !ids.insert(node.id.clone()) {
			log::warn!("Skipping graph node with duplicate id {:?}", node.id);
			return false;
		}
		links.push(spoke(&node.id, link_color));
		nodes.push(node);
		true
	};

	let mut skills_in_graph = Vec::new();
	for skill in &data.skills {
		let inserted = push(
			GraphNode {
				id: skill.id.clone(),
				name: skill.name.clone(),
				group: Group::Skills,
				color: SKILL_COLOR.into(),
				size: skill_size(skill.level),
				status: None,
			},
			SPOKE_SKILL,
			&mut nodes,
		);
		if inserted {
			skills_in_graph.push(skill.clone());
		}
	}

	let mut uses = Vec::new();
	for project in &data.projects {
		let (size, color) = project_style(project.status);
		let inserted = push(
			GraphNode {
				id: project.id.clone(),
				name: project.title.clone(),
				group: Group::Projects,
				color: color.into(),
				size,
				status: Some(project.status),
			},
			SPOKE_PROJECT,
			&mut nodes,
		);
		if !inserted {
			continue;
		}
		let mut seen = HashSet::new();
		for tag in &project.tech {
			let Some(skill) = match_skill(tag, &skills_in_graph) else {
				continue;
			};
			if seen.insert(skill.id.clone()) {
				uses.push(GraphLink {
					source: project.id.clone(),
					target: skill.id.clone(),
					color: USES_COLOR.into(),
					kind: LinkKind::Uses,
				});
			}
		}
	}

	for hobby in &data.hobbies {
		push(
			GraphNode {
				id: hobby.id.clone(),
				name: hobby.name.clone(),
				group: Group::Hobbies,
				color: HOBBY_COLOR.into(),
				size: HOBBY_SIZE,
				status: None,
			},
			SPOKE_HOBBY,
			&mut nodes,
		);
	}

	for contact in &data.contact {
		push(
			GraphNode {
				id: contact.id.clone(),
				name: contact.name.clone(),
				group: Group::Contact,
				color: contact.color.clone(),
				size: CONTACT_SIZE,
				status: None,
			},
			SPOKE_CONTACT,
			&mut nodes,
		);
	}

	links.extend(uses);
	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Contact, Hobby, Project, fallback_portfolio};

	fn skill(id: &str, name: &str, level: f64) -> Skill {
		Skill {
			id: id.into(),
			name: name.into(),
			level,
			..Default::default()
		}
	}

	fn project(id: &str, tech: &[&str], status: ProjectStatus) -> Project {
		Project {
			id: id.into(),
			title: id.to_uppercase(),
			tech: tech.iter().map(|t| t.to_string()).collect(),
			status,
			..Default::default()
		}
	}

	fn sample() -> PortfolioData {
		let mut data = PortfolioData::default();
		data.personal.name = "Ada".into();
		data.skills = vec![skill("react", "React", 90.0), skill("python", "Python", 70.0)];
		data.projects = vec![
			project("eco", &["react", "MongoDB"], ProjectStatus::Completed),
			project("legacy", &["COBOL"], ProjectStatus::Planned),
		];
		data.hobbies = vec![Hobby {
			id: "music".into(),
			name: "Music".into(),
			..Default::default()
		}];
		data.contact = vec![Contact {
			id: "github".into(),
			name: "GitHub".into(),
			color: "#123456".into(),
			..Default::default()
		}];
		data
	}

	#[test]
	fn node_and_link_counts_follow_the_document() {
		for data in [sample(), fallback_portfolio(), PortfolioData::default()] {
			let graph = build_graph(&data);
			let satellites =
				data.skills.len() + data.projects.len() + data.hobbies.len() + data.contact.len();
			assert_eq!(graph.nodes.len(), 1 + satellites);
			assert!(graph.links.len() >= satellites);
			let spokes = graph.links.iter().filter(|l| l.kind == LinkKind::Spoke).count();
			assert_eq!(spokes, satellites);
		}
	}

	#[test]
	fn every_link_endpoint_exists_and_center_is_unique() {
		let graph = build_graph(&fallback_portfolio());
		let ids: HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), graph.nodes.len());
		for link in &graph.links {
			assert!(ids.contains(link.source.as_str()));
			assert!(ids.contains(link.target.as_str()));
		}
		assert_eq!(graph.nodes.iter().filter(|n| n.id == CENTER_ID).count(), 1);
		assert_eq!(graph.nodes[0].group, Group::Center);
		assert_eq!(graph.nodes[0].size, CENTER_SIZE);
	}

	#[test]
	fn unmatched_tech_tag_adds_no_edge() {
		let graph = build_graph(&sample());
		let uses: Vec<_> = graph
			.links
			.iter()
			.filter(|l| l.kind == LinkKind::Uses)
			.map(|l| (l.source.as_str(), l.target.as_str()))
			.collect();
		assert_eq!(uses, vec![("eco", "react")]);
	}

	#[test]
	fn cross_edges_are_fainter_than_spokes() {
		let graph = build_graph(&sample());
		let uses = graph.links.iter().find(|l| l.kind == LinkKind::Uses).unwrap();
		let spoke = graph.links.iter().find(|l| l.kind == LinkKind::Spoke).unwrap();
		assert_ne!(uses.color, spoke.color);
		assert!(uses.color.ends_with("40"));
	}

	#[test]
	fn project_style_covers_every_status() {
		let (completed, green) = project_style(ProjectStatus::Completed);
		let (in_progress, blue) = project_style(ProjectStatus::InProgress);
		let (planned, neutral) = project_style(ProjectStatus::Planned);
		assert!(completed > in_progress && in_progress > planned);
		assert_eq!(green, "#5b9a6e");
		assert_eq!(blue, "#5b7fb8");
		assert_eq!(neutral, "#8a8f98");
		assert_eq!(project_style(ProjectStatus::Unknown), project_style(ProjectStatus::Planned));
	}

	#[test]
	fn skill_size_is_monotonic_and_clamped() {
		assert_eq!(skill_size(0.0), MIN_SKILL_SIZE);
		assert_eq!(skill_size(-20.0), MIN_SKILL_SIZE);
		assert!(skill_size(90.0) > skill_size(70.0));
		assert_eq!(skill_size(150.0), skill_size(100.0));
	}

	#[test]
	fn exact_match_beats_substring() {
		let skills = vec![skill("js", "JavaScript", 80.0), skill("java", "Java", 60.0)];
		assert_eq!(match_skill("java", &skills).map(|s| s.id.as_str()), Some("java"));
		assert_eq!(match_skill("Script", &skills).map(|s| s.id.as_str()), Some("js"));
		assert_eq!(match_skill("React Native", &[skill("r", "React", 1.0)]).map(|s| s.id.as_str()), Some("r"));
		assert!(match_skill("COBOL", &skills).is_none());
		assert!(match_skill("  ", &skills).is_none());
	}

	#[test]
	fn repeated_tags_do_not_duplicate_edges() {
		let mut data = sample();
		data.projects = vec![project("p", &["React", "react.js", "REACT"], ProjectStatus::InProgress)];
		let graph = build_graph(&data);
		assert_eq!(graph.links.iter().filter(|l| l.kind == LinkKind::Uses).count(), 1);
	}

	#[test]
	fn duplicate_ids_are_dropped() {
		let mut data = sample();
		data.hobbies.push(Hobby {
			id: "react".into(),
			name: "Reacting".into(),
			..Default::default()
		});
		data.contact.push(Contact {
			id: CENTER_ID.into(),
			name: "Imposter".into(),
			..Default::default()
		});
		let graph = build_graph(&data);
		assert_eq!(graph.nodes.iter().filter(|n| n.id == "react").count(), 1);
		assert_eq!(graph.nodes.iter().filter(|n| n.id == CENTER_ID).count(), 1);
	}
}
