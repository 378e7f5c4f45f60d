use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::typing::TypingText;
use crate::data::{Navigation, Personal};

/// Name-as-button header with the section navigation. The name opens the
/// graph view.
#[component]
pub fn Hero(personal: Personal, navigation: Vec<Navigation>, on_graph: Callback<()>) -> impl IntoView {
	view! {
		<header class="hero">
			<button
				class="hero-title"
				title="Explore as a graph"
				on:click=move |_| on_graph.run(())
			>
				<h1>{personal.name}</h1>
			</button>
			<p class="hero-subtitle">{personal.title}</p>
			<nav class="hero-nav">
				{navigation
					.into_iter()
					.map(|nav| {
						view! {
							<a class="hero-nav-link" href=nav.href title=nav.description>
								{nav.name}
							</a>
						}
					})
					.collect_view()}
			</nav>
		</header>
	}
}

#[component]
pub fn Intro(personal: Personal) -> impl IntoView {
	view! {
		<Reveal id="about" class="intro">
			<h2>
				<TypingText text=personal.greeting />
			</h2>
			<p class="intro-bio">{personal.bio}</p>
			{(!personal.location.is_empty())
				.then(|| view! { <p class="intro-location">{personal.location}</p> })}
		</Reveal>
	}
}
