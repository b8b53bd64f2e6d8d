use leptos::prelude::*;

use crate::content::{CATEGORIES, SITE};

#[component]
pub fn About() -> impl IntoView {
	view! {
		<div class="page about">
			<section class="hero">
				<h1>"Adaptive" <br /> "Research" <br /> "Projects"</h1>
			</section>
			<section class="mission">
				<h2>{SITE.tagline}</h2>
				<p>{SITE.description}</p>
			</section>
			<section class="disciplines">
				{CATEGORIES
					.iter()
					.map(|c| view! { <div class="discipline">{c.name}</div> })
					.collect_view()}
			</section>
		</div>
	}
}
