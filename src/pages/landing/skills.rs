use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::Skill;

/// Fill of a skill bar in percent: empty until the section is revealed,
/// full while hovered.
pub fn bar_width(level: f64, hovered: bool, revealed: bool) -> f64 {
	if hovered {
		100.0
	} else if revealed {
		level.clamp(0.0, 100.0)
	} else {
		0.0
	}
}

#[component]
fn SkillBar(skill: Skill, revealed: RwSignal<bool>) -> impl IntoView {
	let hovered = RwSignal::new(false);
	let level = skill.level;

	view! {
		<div
			class="skill"
			on:mouseenter=move |_| hovered.set(true)
			on:mouseleave=move |_| hovered.set(false)
		>
			<div class="skill-label">
				<span>{skill.name}</span>
				<span class="skill-level">{format!("{level:.0}%")}</span>
			</div>
			<div class="skill-track">
				<div
					class="skill-fill"
					style:background-color=skill.color
					style:width=move || format!("{}%", bar_width(level, hovered.get(), revealed.get()))
				></div>
			</div>
		</div>
	}
}

#[component]
pub fn Skills(skills: Vec<Skill>) -> impl IntoView {
	let revealed = RwSignal::new(false);

	view! {
		<Reveal id="skills" class="skills" revealed=revealed>
			<h2>"Skills"</h2>
			<div class="skill-list">
				{skills.into_iter().map(|skill| view! { <SkillBar skill=skill revealed=revealed /> }).collect_view()}
			</div>
		</Reveal>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bar_grows_on_reveal_and_fills_on_hover() {
		assert_eq!(bar_width(80.0, false, false), 0.0);
		assert_eq!(bar_width(80.0, false, true), 80.0);
		assert_eq!(bar_width(80.0, true, true), 100.0);
		assert_eq!(bar_width(80.0, true, false), 100.0);
		assert_eq!(bar_width(140.0, false, true), 100.0);
	}
}
