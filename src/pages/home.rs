use leptos::prelude::*;

use crate::components::sidebar::{ToolMode, ToolSidebar};
use crate::components::venn::VennCanvas;
use crate::pages::archive::ArchiveGrid;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let (mode, set_mode) = signal(ToolMode::VennDiagram);

	view! {
		<div class="home">
			<ToolSidebar mode=mode set_mode=set_mode />
			{move || match mode.get() {
				ToolMode::VennDiagram => {
					view! {
						<div class="fullscreen-venn">
							<VennCanvas />
							<div class="venn-overlay">
								<p class="subtitle">
									"Drag circles to overlap them. Click to pick one up. Scroll over a circle to resize it."
								</p>
							</div>
						</div>
					}
						.into_any()
				}
				ToolMode::ArchiveGrid => view! { <ArchiveGrid /> }.into_any(),
			}}
		</div>
	}
}
