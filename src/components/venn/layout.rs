//! Initial circle placement.

use log::{debug, warn};
use rand::Rng;

use super::config::VennConfig;
use super::types::{Circle, CircleRequest, Point, Viewport};

/// Positions used before the viewport has been measured.
const PRESETS: &[Point] = &[
	Point::new(300.0, 300.0),
	Point::new(800.0, 400.0),
	Point::new(500.0, 600.0),
];
/// Shift applied each time the preset pattern repeats.
const PRESET_STEP: f64 = 100.0;

/// Id of the circle for `category`.
pub fn circle_id(category: &str) -> String {
	format!("circle-{category}")
}

/// Place one circle per request, in order.
///
/// Every request gets a position: when no viewport is known the presets are
/// used, and when the attempt budget runs out the circle lands near the
/// center even if that overlaps an earlier one.
pub fn place_circles<R: Rng + ?Sized>(
	viewport: Option<Viewport>,
	requests: &[CircleRequest],
	config: &VennConfig,
	rng: &mut R,
) -> Vec<Circle> {
	let mut circles: Vec<Circle> = Vec::with_capacity(requests.len());
	for (i, request) in requests.iter().enumerate() {
		let center = match viewport {
			Some(viewport) => random_position(viewport, request.radius, &circles, config, rng),
			None => preset_position(i),
		};
		circles.push(Circle {
			id: circle_id(&request.category),
			x: center.x,
			y: center.y,
			radius: request.radius,
			category: request.category.clone(),
			label: request.label.clone(),
		});
	}
	circles
}

fn preset_position(i: usize) -> Point {
	let base = PRESETS[i % PRESETS.len()];
	let shift = (i / PRESETS.len()) as f64 * PRESET_STEP;
	Point::new(base.x + shift, base.y + shift)
}

fn random_position<R: Rng + ?Sized>(
	viewport: Viewport,
	radius: f64,
	placed: &[Circle],
	config: &VennConfig,
	rng: &mut R,
) -> Point {
	let inset = radius + config.placement_margin;
	let (x_range, y_range) = (
		(inset, viewport.width - inset),
		(inset, viewport.height - inset),
	);

	if x_range.0 <= x_range.1 && y_range.0 <= y_range.1 {
		for attempt in 0..config.placement_attempts {
			let candidate = Point::new(
				rng.gen_range(x_range.0..=x_range.1),
				rng.gen_range(y_range.0..=y_range.1),
			);
			let clear = placed
				.iter()
				.all(|c| candidate.distance(c.center()) >= radius + c.radius);
			if clear {
				debug!("placed r={radius} at ({:.1}, {:.1}) after {} attempts", candidate.x, candidate.y, attempt + 1);
				return candidate;
			}
		}
	}

	warn!("no free spot for r={radius} in {}x{}, using jittered center", viewport.width, viewport.height);
	Point::new(
		viewport.width / 2.0 + (rng.r#gen::<f64>() - 0.5) * viewport.width * 0.5,
		viewport.height / 2.0 + (rng.r#gen::<f64>() - 0.5) * viewport.height * 0.5,
	)
}
