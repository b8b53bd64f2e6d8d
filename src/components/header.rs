use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::{NAV_LINKS, SITE};

/// Site name on the left, nav links on the right.
#[component]
pub fn Header() -> impl IntoView {
	view! {
		<header class="site-header">
			<nav>
				<A href="/" attr:class="site-name">{SITE.name}</A>
				<ul>
					{NAV_LINKS
						.iter()
						.filter(|link| link.href != "/")
						.map(|link| view! { <li><A href=link.href>{link.label}</A></li> })
						.collect_view()}
				</ul>
			</nav>
		</header>
	}
}

/// Copyright line and contact address.
#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="site-footer">
			<span>{format!("© {}. All rights reserved.", SITE.name)}</span>
			<a href=format!("mailto:{}", SITE.email)>{SITE.email}</a>
		</footer>
	}
}
