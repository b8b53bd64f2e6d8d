use leptos::prelude::*;

/// What the home page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolMode {
	/// Interactive diagram.
	VennDiagram,
	/// Project cards.
	ArchiveGrid,
}

impl ToolMode {
	/// Every mode, in sidebar order.
	pub const ALL: [ToolMode; 2] = [ToolMode::VennDiagram, ToolMode::ArchiveGrid];

	/// Button tooltip.
	pub fn label(self) -> &'static str {
		match self {
			ToolMode::VennDiagram => "Venn Diagram",
			ToolMode::ArchiveGrid => "Archive Grid",
		}
	}

	fn icon(self) -> &'static str {
		match self {
			ToolMode::VennDiagram => "◎",
			ToolMode::ArchiveGrid => "▦",
		}
	}
}

/// Buttons switching the home page between modes.
#[component]
pub fn ToolSidebar(mode: ReadSignal<ToolMode>, set_mode: WriteSignal<ToolMode>) -> impl IntoView {
	view! {
		<aside class="tool-sidebar">
			{ToolMode::ALL
				.into_iter()
				.map(|tool| {
					view! {
						<button
							title=tool.label()
							class:active=move || mode.get() == tool
							on:click=move |_| set_mode.set(tool)
						>
							{tool.icon()}
						</button>
					}
				})
				.collect_view()}
		</aside>
	}
}
