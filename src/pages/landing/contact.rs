use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::data::Contact;

#[component]
pub fn ContactSection(contacts: Vec<Contact>) -> impl IntoView {
	view! {
		<Reveal id="contact" class="contact">
			<h2>"Let's Connect"</h2>
			<div class="contact-links">
				{contacts
					.into_iter()
					.map(|c| {
						view! {
							<a
								class="contact-link"
								href=c.url
								target="_blank"
								rel="noopener noreferrer"
								title=c.description
								style:background-color=c.color
							>
								<span class="contact-icon">{c.icon}</span>
								<span class="contact-name">{c.name}</span>
							</a>
						}
					})
					.collect_view()}
			</div>
		</Reveal>
	}
}
