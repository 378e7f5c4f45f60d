//! The scrolling portfolio page.

mod cards;
mod contact;
mod experiments;
mod hero;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::floating_shapes::FloatingShapes;
use crate::data::{PortfolioData, use_portfolio};
use cards::GetToKnowMe;
use contact::ContactSection;
use experiments::Experiments;
use hero::{Hero, Intro};
use projects::Projects;
use skills::Skills;

#[component]
fn Sections(data: PortfolioData, on_graph: Callback<()>) -> impl IntoView {
	let PortfolioData {
		personal,
		skills,
		projects,
		contact,
		navigation,
		theme,
		meta,
		experiments,
		personal_cards,
		..
	} = data;
	let keywords = meta.keywords.join(", ");

	view! {
		<Title text=meta.title />
		<Meta name="description" content=meta.description />
		<Meta name="keywords" content=keywords />
		<div class="landing-content" style=theme.css_variables()>
			<Hero personal=personal.clone() navigation=navigation on_graph=on_graph />
			<main>
				<Intro personal=personal />
				<GetToKnowMe cards=personal_cards />
				<Projects projects=projects />
				<Skills skills=skills />
				<ContactSection contacts=contact />
				{(!experiments.is_empty())
					.then(|| view! { <Experiments experiments=experiments /> })}
			</main>
		</div>
	}
}

/// Landing view. `on_graph` switches to the graph view.
#[component]
pub fn LandingPage(on_graph: Callback<()>) -> impl IntoView {
	let store = use_portfolio();

	view! {
		<div class="landing-page">
			<FloatingShapes />
			{move || {
				store
					.error()
					.map(|err| {
						view! {
							<div class="load-error" role="alert">
								{format!("Couldn't load the latest portfolio ({err}). Showing saved content.")}
							</div>
						}
					})
			}}
			{move || match store.data() {
				Some(data) => view! { <Sections data=data on_graph=on_graph /> }.into_any(),
				None => view! {
					<div class="landing-loading">
						<div class="spinner"></div>
					</div>
				}
					.into_any(),
			}}
		</div>
	}
}
