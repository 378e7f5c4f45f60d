use leptos::prelude::*;
use log::{debug, warn};

use crate::components::reveal::Reveal;
use crate::data::{Project, ProjectStatus};

pub fn status_class(status: ProjectStatus) -> &'static str {
	match status {
		ProjectStatus::Completed => "status-completed",
		ProjectStatus::InProgress => "status-in-progress",
		ProjectStatus::Planned => "status-planned",
		ProjectStatus::Unknown => "status-unknown",
	}
}

fn open_demo(url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	debug!("Opening demo {url}");
	if let Err(err) = window.open_with_url_and_target(url, "_blank") {
		warn!("Could not open {url}: {err:?}");
	}
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
	let demo = project.demo.clone().filter(|d| !d.is_empty());
	let has_demo = demo.is_some();
	let summary = project.summary().to_string();

	view! {
		<article
			class="project-card"
			class:clickable=has_demo
			style=format!("border-left-color: {}", project.color)
			on:click=move |_| {
				if let Some(url) = &demo {
					open_demo(url);
				}
			}
		>
			<div class="project-card-header">
				<span class="project-dot" style:background-color=project.color.clone()></span>
				<h3>{project.title}</h3>
				<span class=format!("status-badge {}", status_class(project.status))>
					{project.status.label()}
				</span>
			</div>
			<p>{summary}</p>
			<div class="tech-tags">
				{project.tech.into_iter().map(|t| view! { <span class="tech-tag">{t}</span> }).collect_view()}
			</div>
			{project
				.github
				.filter(|g| !g.is_empty())
				.map(|url| {
					view! {
						<a
							class="project-link"
							href=url
							target="_blank"
							rel="noopener noreferrer"
							on:click=|ev| ev.stop_propagation()
						>
							"Source"
						</a>
					}
				})}
		</article>
	}
}

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
	view! {
		<Reveal id="projects" class="projects">
			<h2>"Featured Projects"</h2>
			<div class="project-grid">
				{projects.into_iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
			</div>
		</Reveal>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_status_has_its_own_badge() {
		let classes = [
			ProjectStatus::Completed,
			ProjectStatus::InProgress,
			ProjectStatus::Planned,
			ProjectStatus::Unknown,
		]
		.map(status_class);
		for (i, a) in classes.iter().enumerate() {
			assert!(classes[i + 1..].iter().all(|b| a != b));
		}
	}
}
