//! Two-circle intersection geometry.
//!
//! The lens of two partially overlapping circles is bounded by one arc of
//! each circle. Which of the two arcs between the intersection points
//! belongs to the lens depends on the configuration: for a small circle
//! sitting mostly inside a large one the interior arc of the small circle
//! is the major arc, so every arc is chosen by testing its midpoint against
//! the other circle.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::fmt::Write as _;

use super::types::{Bounds, Disk, Point};

/// Slack for points that sit on a circle's outline.
const ON_CIRCLE_EPS: f64 = 1e-9;

/// One elliptical-arc segment of a closed path, in SVG terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcTo {
	/// Radius of the circle the arc runs along.
	pub radius: f64,
	/// Take the arc spanning more than half the circle.
	pub large_arc: bool,
	/// Run in the positive-angle direction (clockwise on screen).
	pub sweep: bool,
	/// End point; the start is wherever the previous segment ended.
	pub to: Point,
}

/// A closed outline made only of circular arcs.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPath {
	/// First vertex.
	pub start: Point,
	/// Segments in drawing order; the last one ends back at `start`.
	pub arcs: Vec<ArcTo>,
}

impl BoundaryPath {
	/// Full outline of a disk as two half-circle arcs.
	pub fn disk(disk: Disk) -> Self {
		let Disk { center, radius } = disk;
		let (left, right) = (
			Point::new(center.x - radius, center.y),
			Point::new(center.x + radius, center.y),
		);
		let half = |to| ArcTo {
			radius,
			large_arc: true,
			sweep: false,
			to,
		};
		Self {
			start: left,
			arcs: vec![half(right), half(left)],
		}
	}

	/// SVG path data, usable with `Path2D` or a `<path d=..>`.
	pub fn to_svg(&self) -> String {
		let mut d = format!("M {},{}", self.start.x, self.start.y);
		for arc in &self.arcs {
			let _ = write!(
				d,
				" A {r},{r} 0 {},{} {},{}",
				u8::from(arc.large_arc),
				u8::from(arc.sweep),
				arc.to.x,
				arc.to.y,
				r = arc.radius,
			);
		}
		d.push_str(" Z");
		d
	}
}

/// Overlap of two partially overlapping circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Lens {
	/// Intersection points; the path starts at the first.
	pub points: [Point; 2],
	/// Arc on the first circle, then arc on the second.
	pub path: BoundaryPath,
	/// Box spanned by both arcs.
	pub bounds: Bounds,
}

/// How two circles relate.
#[derive(Clone, Debug, PartialEq)]
pub enum Intersection {
	/// Disjoint, touching, or not valid geometry.
	None,
	/// One circle lies entirely within the other; `inner` is the smaller.
	Contained { inner: Disk },
	/// Partial overlap.
	Lens(Lens),
}

impl Intersection {
	/// Outline of the overlap, `None` when there is none.
	pub fn path(&self) -> Option<BoundaryPath> {
		match self {
			Intersection::None => None,
			Intersection::Contained { inner } => Some(BoundaryPath::disk(*inner)),
			Intersection::Lens(lens) => Some(lens.path.clone()),
		}
	}

	/// Bounding box of the overlap.
	pub fn bounds(&self) -> Option<Bounds> {
		match self {
			Intersection::None => None,
			Intersection::Contained { inner } => Some(inner.bounds()),
			Intersection::Lens(lens) => Some(lens.bounds),
		}
	}

	/// Crossing points, only for a lens.
	pub fn points(&self) -> Option<[Point; 2]> {
		match self {
			Intersection::Lens(lens) => Some(lens.points),
			_ => None,
		}
	}
}

/// Classify `c1` against `c2` and build the overlap boundary.
pub fn intersect(c1: Disk, c2: Disk) -> Intersection {
	if !c1.is_valid() || !c2.is_valid() {
		return Intersection::None;
	}
	let (r1, r2) = (c1.radius, c2.radius);
	let (dx, dy) = (c2.center.x - c1.center.x, c2.center.y - c1.center.y);
	let d = dx.hypot(dy);

	if d == 0.0 && r1 == r2 {
		return Intersection::None;
	}
	if d >= r1 + r2 {
		return Intersection::None;
	}
	if d <= (r1 - r2).abs() {
		let inner = if r1 < r2 { c1 } else { c2 };
		return Intersection::Contained { inner };
	}

	let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
	let h = (r1 * r1 - a * a).max(0.0).sqrt();
	let foot = Point::new(c1.center.x + a * dx / d, c1.center.y + a * dy / d);
	let p1 = Point::new(foot.x + h * dy / d, foot.y - h * dx / d);
	let p2 = Point::new(foot.x - h * dy / d, foot.y + h * dx / d);

	let first = interior_arc(c1, p1, p2, c2);
	let second = interior_arc(c2, p2, p1, c1);

	let extremes = axis_extremes(c1)
		.into_iter()
		.filter(|p| within(c2, *p))
		.chain(axis_extremes(c2).into_iter().filter(|p| within(c1, *p)));
	let bounds = Bounds::from_points([p1, p2].into_iter().chain(extremes))
		.unwrap_or_else(|| Bounds::around(foot, 0.0));

	Intersection::Lens(Lens {
		points: [p1, p2],
		path: BoundaryPath {
			start: p1,
			arcs: vec![first, second],
		},
		bounds,
	})
}

fn angle_of(center: Point, p: Point) -> f64 {
	(p.y - center.y).atan2(p.x - center.x)
}

fn point_at(disk: Disk, angle: f64) -> Point {
	Point::new(
		disk.center.x + disk.radius * angle.cos(),
		disk.center.y + disk.radius * angle.sin(),
	)
}

fn within(disk: Disk, p: Point) -> bool {
	disk.center.distance(p) <= disk.radius + ON_CIRCLE_EPS * disk.radius.max(1.0)
}

/// The arc of `own` from `from` to `to` that runs inside `other`.
fn interior_arc(own: Disk, from: Point, to: Point, other: Disk) -> ArcTo {
	let start = angle_of(own.center, from);
	// Span going the positive-angle way, which is SVG's sweep=1.
	let span = (angle_of(own.center, to) - start).rem_euclid(TAU);
	let mid = point_at(own, start + span / 2.0);
	let (sweep, span) = if other.contains(mid) {
		(true, span)
	} else {
		(false, TAU - span)
	};
	ArcTo {
		radius: own.radius,
		large_arc: span > PI,
		sweep,
		to,
	}
}

fn axis_extremes(disk: Disk) -> [Point; 4] {
	[0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2].map(|angle| point_at(disk, angle))
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;
	use test_log::test;

	use super::*;

	fn disk(x: f64, y: f64, radius: f64) -> Disk {
		Disk {
			center: Point::new(x, y),
			radius,
		}
	}

	fn lens(c1: Disk, c2: Disk) -> Lens {
		match intersect(c1, c2) {
			Intersection::Lens(lens) => lens,
			other => panic!("expected a lens, got {other:?}"),
		}
	}

	fn assert_same_point(a: Point, b: Point) {
		assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
		assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
	}

	#[test]
	fn equal_circles_numeric() {
		let lens = lens(disk(0.0, 0.0, 5.0), disk(8.0, 0.0, 5.0));
		assert_same_point(lens.points[0], Point::new(4.0, -3.0));
		assert_same_point(lens.points[1], Point::new(4.0, 3.0));
		// Both interior arcs are minor arcs.
		assert!(lens.path.arcs.iter().all(|arc| !arc.large_arc));
	}

	#[test]
	fn disjoint_has_no_boundary() {
		let result = intersect(disk(0.0, 0.0, 5.0), disk(20.0, 0.0, 5.0));
		assert_eq!(result, Intersection::None);
		assert_eq!(result.path(), None);
		assert_eq!(result.bounds(), None);
	}

	#[test]
	fn touching_is_disjoint() {
		assert_eq!(intersect(disk(0.0, 0.0, 5.0), disk(10.0, 0.0, 5.0)), Intersection::None);
	}

	#[test]
	fn concentric_is_containment() {
		let result = intersect(disk(0.0, 0.0, 10.0), disk(0.0, 0.0, 5.0));
		assert_eq!(
			result,
			Intersection::Contained {
				inner: disk(0.0, 0.0, 5.0)
			}
		);
		let path = result.path().unwrap();
		assert_eq!(path.start, Point::new(-5.0, 0.0));
		assert_eq!(path.arcs.len(), 2);
		assert_eq!(path.arcs[0].to, Point::new(5.0, 0.0));
		assert_eq!(path.arcs[1].to, Point::new(-5.0, 0.0));
	}

	#[test]
	fn offset_containment_picks_smaller() {
		let result = intersect(disk(2.0, 0.0, 3.0), disk(0.0, 0.0, 10.0));
		assert_eq!(
			result,
			Intersection::Contained {
				inner: disk(2.0, 0.0, 3.0)
			}
		);
	}

	#[test]
	fn degenerate_inputs_are_empty() {
		let cases = [
			(disk(0.0, 0.0, 5.0), disk(0.0, 0.0, 5.0)),
			(disk(0.0, 0.0, 0.0), disk(1.0, 0.0, 5.0)),
			(disk(0.0, 0.0, -3.0), disk(1.0, 0.0, 5.0)),
			(disk(f64::NAN, 0.0, 5.0), disk(1.0, 0.0, 5.0)),
			(disk(0.0, 0.0, 5.0), disk(f64::INFINITY, 0.0, 5.0)),
			(disk(0.0, 0.0, f64::NAN), disk(1.0, 0.0, 5.0)),
		];
		for (a, b) in cases {
			assert_eq!(intersect(a, b), Intersection::None, "{a:?} vs {b:?}");
		}
	}

	#[test]
	fn argument_order_gives_same_points() {
		let pairs = [
			(disk(0.0, 0.0, 5.0), disk(8.0, 0.0, 5.0)),
			(disk(120.0, 80.0, 200.0), disk(310.0, 240.0, 150.0)),
			(disk(-4.0, 7.0, 3.0), disk(5.0, 9.0, 8.0)),
		];
		for (a, b) in pairs {
			let ab = lens(a, b).points;
			let ba = lens(b, a).points;
			// Swapping the circles swaps the two points.
			assert_same_point(ab[0], ba[1]);
			assert_same_point(ab[1], ba[0]);
		}
	}

	#[test]
	fn small_circle_uses_major_arc() {
		let (small, large) = (disk(0.0, 0.0, 5.0), disk(18.0, 0.0, 20.0));
		let lens = lens(small, large);
		let [on_small, on_large] = [lens.path.arcs[0], lens.path.arcs[1]];
		assert!(on_small.large_arc, "most of the small circle is inside the large one");
		assert!(!on_large.large_arc);
		assert_relative_eq!(on_small.radius, 5.0);
		assert_relative_eq!(on_large.radius, 20.0);

		// The point of the small circle facing the large one is in the lens,
		// the far side is not.
		let bounds = lens.bounds;
		assert_relative_eq!(bounds.max.x, 5.0, epsilon = 1e-9);
		assert_relative_eq!(bounds.min.y, -5.0, epsilon = 1e-9);
		assert_relative_eq!(bounds.max.y, 5.0, epsilon = 1e-9);
		assert!(bounds.min.x > -5.0);
	}

	#[test]
	fn chosen_arcs_run_inside_other_circle() {
		let (c1, c2) = (disk(100.0, 100.0, 60.0), disk(150.0, 130.0, 90.0));
		let lens = lens(c1, c2);
		for (own, other, arc, from) in [
			(c1, c2, lens.path.arcs[0], lens.points[0]),
			(c2, c1, lens.path.arcs[1], lens.points[1]),
		] {
			let start = angle_of(own.center, from);
			let end = angle_of(own.center, arc.to);
			let span = if arc.sweep {
				(end - start).rem_euclid(TAU)
			} else {
				-(start - end).rem_euclid(TAU)
			};
			assert_eq!(span.abs() > PI, arc.large_arc);
			let mid = point_at(own, start + span / 2.0);
			assert!(other.contains(mid));
		}
	}

	#[test]
	fn lens_bounds() {
		let lens = lens(disk(0.0, 0.0, 5.0), disk(8.0, 0.0, 5.0));
		assert_relative_eq!(lens.bounds.min.x, 3.0, epsilon = 1e-9);
		assert_relative_eq!(lens.bounds.max.x, 5.0, epsilon = 1e-9);
		assert_relative_eq!(lens.bounds.min.y, -3.0, epsilon = 1e-9);
		assert_relative_eq!(lens.bounds.max.y, 3.0, epsilon = 1e-9);
	}

	#[test]
	fn svg_path_format() {
		let lens = lens(disk(0.0, 0.0, 5.0), disk(8.0, 0.0, 5.0));
		let d = lens.path.to_svg();
		assert!(d.starts_with("M 4,-3"), "{d}");
		assert!(d.contains("A 5,5 0 0,"), "{d}");
		assert!(d.ends_with(" Z"));

		let outline = BoundaryPath::disk(disk(10.0, 20.0, 5.0)).to_svg();
		assert_eq!(outline, "M 5,20 A 5,5 0 1,0 15,20 A 5,5 0 1,0 5,20 Z");
	}
}
