//! Static site content.

use crate::components::venn::{CircleRequest, LabelCatalog, VennConfig};

/// Agency identity shown in the header, footer, and meta tags.
pub struct SiteConfig {
	/// Short name.
	pub name: &'static str,
	/// Line under the name.
	pub tagline: &'static str,
	/// Meta description.
	pub description: &'static str,
	/// Contact address.
	pub email: &'static str,
}

/// The site.
pub const SITE: SiteConfig = SiteConfig {
	name: "DGSD",
	tagline: "Creative Agency",
	description: "We design experiences that matter",
	email: "hello@dgsd.com",
};

/// A header link.
pub struct NavLink {
	/// Route path.
	pub href: &'static str,
	/// Link text.
	pub label: &'static str,
}

/// Header links in display order.
pub const NAV_LINKS: &[NavLink] = &[
	NavLink { href: "/", label: "Home" },
	NavLink { href: "/about", label: "About" },
	NavLink { href: "/archive", label: "Archive" },
];

/// An archive entry.
pub struct Project {
	/// Unique key.
	pub id: &'static str,
	/// Card title.
	pub title: &'static str,
	/// One-line summary.
	pub description: &'static str,
	/// Cover image; a placeholder is drawn without one.
	pub image_url: Option<&'static str>,
}

/// Archive grid contents.
pub const PROJECTS: &[Project] = &[
	Project {
		id: "project-1",
		title: "Brand Evolution",
		description: "Complete brand identity redesign for tech startup",
		image_url: None,
	},
	Project {
		id: "project-2",
		title: "Interactive Platform",
		description: "Web application with immersive 3D experience",
		image_url: None,
	},
	Project {
		id: "project-3",
		title: "Motion Reel 2024",
		description: "Collection of motion graphics and animations",
		image_url: None,
	},
	Project {
		id: "project-4",
		title: "3D Product Viz",
		description: "Photorealistic product visualization",
		image_url: None,
	},
	Project {
		id: "project-5",
		title: "Print Campaign",
		description: "Editorial design and print campaign",
		image_url: None,
	},
	Project {
		id: "project-6",
		title: "Brand Strategy",
		description: "Strategic positioning for global brand",
		image_url: None,
	},
];

/// A Venn circle category: code, display name, and size relative to the
/// base radius.
pub struct Category {
	/// Key used for overlap labels.
	pub code: &'static str,
	/// Display name.
	pub name: &'static str,
	/// Multiplier on the base radius.
	pub scale: f64,
}

/// The three circles, in drawing order.
pub const CATEGORIES: &[Category] = &[
	Category { code: "A", name: "Spatial", scale: 1.5 },
	Category { code: "B", name: "Interactive", scale: 1.0 },
	Category { code: "C", name: "Culture", scale: 0.75 },
];

const SPATIAL_INTERACTIVE: &[&str] = &[
	"Responsive buildings",
	"Adaptive wayfinding",
	"Smart materials",
	"Projection mapping",
	"Sensor lighting",
	"Interactive facades",
	"Kinetic architecture",
	"Touch surfaces",
	"Ambient computing",
	"Modular systems",
	"Haptic environments",
	"Motion tracking",
	"Environmental interfaces",
	"Adaptive furniture",
	"Gesture control",
];

const INTERACTIVE_CULTURE: &[&str] = &[
	"Community platforms",
	"Participatory tools",
	"Interactive archives",
	"Language preservation",
	"Hybrid ceremonies",
	"Digital storytelling",
	"Cultural games",
	"Oral history",
	"Traditional crafts",
	"Community mapping",
	"Identity platforms",
	"Cultural exchange",
	"Ritual design",
	"Memory interfaces",
	"Heritage apps",
];

const SPATIAL_CULTURE: &[&str] = &[
	"Community spaces",
	"Cultural renovations",
	"Public activation",
	"Housing typologies",
	"Sacred design",
	"Gathering places",
	"Cultural landscapes",
	"Ceremonial architecture",
	"Community gardens",
	"Cultural districts",
	"Traditional building",
	"Public plazas",
	"Neighborhood identity",
	"Cultural infrastructure",
	"Place making",
];

const ALL_THREE: &[&str] = &[
	"Smart infrastructure",
	"Adaptive centers",
	"Planning tools",
	"Resilience hubs",
	"Responsive art",
	"Heritage documentation",
	"Community kiosks",
	"Cultural dashboards",
	"Interactive memorials",
	"Neighborhood apps",
	"Civic engagement",
	"Cultural navigation",
	"Public interfaces",
	"Community sensing",
	"Participatory design",
];

fn owned(labels: &[&str]) -> Vec<String> {
	labels.iter().map(|l| l.to_string()).collect()
}

/// One circle per category, sized from the config's base radius.
pub fn circle_requests(config: &VennConfig) -> Vec<CircleRequest> {
	CATEGORIES
		.iter()
		.map(|c| CircleRequest {
			radius: config.base_radius * c.scale,
			category: c.code.into(),
			label: c.name.into(),
		})
		.collect()
}

/// Overlap labels for every category pair and for all three together.
pub fn label_catalog() -> LabelCatalog {
	LabelCatalog::new(owned(ALL_THREE))
		.with_pair("A", "B", owned(SPATIAL_INTERACTIVE))
		.with_pair("B", "C", owned(INTERACTIVE_CULTURE))
		.with_pair("A", "C", owned(SPATIAL_CULTURE))
}
