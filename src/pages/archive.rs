use leptos::prelude::*;

use crate::content::{PROJECTS, Project};

fn project_card(project: &'static Project) -> impl IntoView {
	let cover = match project.image_url {
		Some(src) => view! { <img src=src alt=project.title /> }.into_any(),
		None => view! { <div class="placeholder">{project.title}</div> }.into_any(),
	};
	view! {
		<article class="project-card" id=project.id>
			<div class="cover">{cover}</div>
			<h3>{project.title}</h3>
			<p>{project.description}</p>
		</article>
	}
}

/// Grid of every project, shared by the archive page and the home page's
/// archive mode.
#[component]
pub fn ArchiveGrid() -> impl IntoView {
	view! {
		<div class="archive">
			<h1>"Project Archive"</h1>
			<div class="project-grid">{PROJECTS.iter().map(project_card).collect_view()}</div>
		</div>
	}
}

#[component]
pub fn Archive() -> impl IntoView {
	view! {
		<div class="page">
			<ArchiveGrid />
		</div>
	}
}
