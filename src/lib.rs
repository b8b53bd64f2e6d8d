//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Only needed for its `js` feature, which lets `rand` seed itself in the browser.
use getrandom as _;

// Modules
pub mod components;
pub mod content;
/// Setup errors.
pub mod error;
mod pages;

// Top-Level pages
use crate::components::header::{Footer, Header};
use crate::content::SITE;
use crate::pages::about::About;
use crate::pages::archive::Archive;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the pages and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text=format!("{} | {}", SITE.name, SITE.tagline) />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=SITE.description />

		<Router>
			<Header />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/about") view=About />
					<Route path=path!("/archive") view=Archive />
				</Routes>
			</main>
			<Footer />
		</Router>
	}
}
