//! Built-in documents used when the network copy cannot be loaded.

use super::types::*;

fn s(v: &str) -> String {
	v.to_string()
}

fn skill(id: &str, name: &str, level: f64, color: &str, category: &str, years: f64, description: &str) -> Skill {
	Skill {
		id: s(id),
		name: s(name),
		level,
		color: s(color),
		category: s(category),
		years,
		description: s(description),
	}
}

fn contact(id: &str, name: &str, value: &str, url: &str, color: &str, icon: &str, description: &str) -> Contact {
	Contact {
		id: s(id),
		name: s(name),
		value: s(value),
		url: s(url),
		color: s(color),
		icon: s(icon),
		description: s(description),
	}
}

fn nav(id: &str, name: &str, href: &str, description: &str) -> Navigation {
	Navigation {
		id: s(id),
		name: s(name),
		href: s(href),
		description: s(description),
	}
}

/// Reduced portfolio with the same shape as `portfolio.json`.
pub fn fallback_portfolio() -> PortfolioData {
	PortfolioData {
		personal: Personal {
			name: s("Ashley Chan"),
			title: s("Computer Science Student"),
			greeting: s("안녕하세요, I'm Ashley ~"),
			bio: s("A passionate computer science student who loves blending creativity with code."),
			location: s("Toronto, Canada"),
			avatar: s("👩‍💻"),
		},
		skills: vec![
			skill("react", "React", 90.0, "#7a458c", "Frontend", 3.0, "Building modern, interactive user interfaces"),
			skill("typescript", "TypeScript", 85.0, "#9d8cc2", "Frontend", 2.0, "Type-safe JavaScript development"),
			skill("python", "Python", 88.0, "#7a458c", "Backend", 4.0, "Data science and web development"),
		],
		projects: vec![Project {
			id: s("ecotracker"),
			title: s("EcoTracker"),
			description: s("Sustainable living app with gamification features"),
			short_description: s("Sustainable living app with gamification"),
			tech: vec![s("React"), s("Node.js"), s("MongoDB")],
			color: s("#7a458c"),
			status: ProjectStatus::Completed,
			year: Some(2024),
			duration: s("3 months"),
			github: None,
			demo: None,
			image: None,
			highlights: vec![s("Reduced user carbon footprint by 25%")],
		}],
		hobbies: vec![Hobby {
			id: s("gaming"),
			name: s("Gaming"),
			description: s("Love playing indie games and RPGs"),
			color: s("#c8ccd4"),
			icon: s("🎮"),
			category: s("entertainment"),
		}],
		contact: vec![
			contact("github", "GitHub", "ashley-chan", "https://github.com/ashley-chan", "#7a458c", "Github", "Check out my code"),
			contact("email", "Email", "ashley.chan@example.com", "mailto:ashley.chan@example.com", "#6f7d96", "Mail", "Drop me a message"),
		],
		navigation: vec![
			nav("about", "Get to Know Me", "#get-to-know-me", "Learn about my background"),
			nav("projects", "Projects", "#projects", "Explore my latest work"),
			nav("skills", "Skills", "#skills", "Discover my technical expertise"),
			nav("contact", "Contact", "#contact", "Get in touch with me"),
		],
		theme: Theme::default(),
		meta: Meta {
			title: s("Ashley's World - Creative Developer Portfolio"),
			description: s("Ashley Chan - Computer Science student passionate about blending creativity with code."),
			keywords: vec![s("Ashley Chan"), s("developer"), s("portfolio")],
			last_updated: s("2024-12-27"),
		},
		experiments: Vec::new(),
		personal_cards: Vec::new(),
	}
}

fn card(id: &str, front: (&str, &str, &str), back: (&str, &str, &[&str]), color: &str) -> PersonalCard {
	PersonalCard {
		id: s(id),
		front: CardFront {
			title: s(front.0),
			subtitle: s(front.1),
			icon: s(front.2),
		},
		back: CardBack {
			title: s(back.0),
			description: s(back.1),
			details: back.2.iter().map(|d| s(d)).collect(),
		},
		color: s(color),
	}
}

/// Cards shown when neither the main document nor `personalCards.json` has any.
pub fn fallback_cards() -> Vec<PersonalCard> {
	vec![
		card(
			"personality",
			("INTP", "The Architect", "🧠"),
			(
				"The Curious Mind",
				"Curious, imaginative, and always exploring new ideas.",
				&["Loves theoretical concepts", "Enjoys debugging mysteries", "Always asking 'what if?'"],
			),
			"#7a458c",
		),
		card(
			"coder",
			("3AM Coder", "Night Owl Developer", "🌙"),
			(
				"Midnight Magic",
				"My brain works best when the world is quiet.",
				&["Peak productivity: 11PM-3AM", "Coffee is life fuel", "Debugging by moonlight"],
			),
			"#6f7d96",
		),
		card(
			"music",
			("Lo-Fi Addict", "Chill Beats Curator", "🎵"),
			(
				"Soundtrack of Code",
				"Lo-fi hip hop is my coding fuel.",
				&["500+ hour playlists", "Vinyl collection growing", "Piano player since age 7"],
			),
			"#9d8cc2",
		),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallback_document_is_populated() {
		let data = fallback_portfolio();
		assert!(!data.personal.name.is_empty());
		assert!(!data.skills.is_empty());
		assert!(!data.projects.is_empty());
		assert!(!data.contact.is_empty());
		assert!(data.navigation.iter().all(|n| n.href.starts_with('#')));
	}

	#[test]
	fn fallback_document_survives_a_json_round_trip() {
		let data = fallback_portfolio();
		let json = serde_json::to_string(&data).unwrap();
		let back: PortfolioData = serde_json::from_str(&json).unwrap();
		assert_eq!(back, data);
	}

	#[test]
	fn fallback_cards_have_unique_ids() {
		let cards = fallback_cards();
		let ids: std::collections::HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids.len(), cards.len());
	}
}
