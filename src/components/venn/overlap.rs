//! Overlap regions of the live circle set and their label payloads.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use super::intersect::{BoundaryPath, intersect};
use super::types::{Bounds, Circle, Disk, Point};

/// Which circles (by index) take part in an overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Overlap {
	/// Two circles, `a < b`.
	Pairwise { a: usize, b: usize },
	/// Three circles, `a < b < c`.
	Triple { a: usize, b: usize, c: usize },
}

/// Outline of a region: a path, optionally clipped again by a disk.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionShape {
	/// Lens outline.
	pub path: BoundaryPath,
	/// Third disk of a triple.
	pub clip: Option<Disk>,
}

/// A label with the point its text is centered on.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLabel {
	/// Label text.
	pub text: String,
	/// Center of the text.
	pub at: Point,
}

/// One overlap with everything needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlapRegion {
	/// Circles taking part.
	pub overlap: Overlap,
	/// Mean of the participating centers.
	pub centroid: Point,
	/// `None` when the circles overlap but the geometry is degenerate.
	pub shape: Option<RegionShape>,
	/// Box the labels are laid out in.
	pub bounds: Option<Bounds>,
	/// Labels dealt to this region, already positioned.
	pub labels: Vec<PlacedLabel>,
}

/// Every pairwise overlap, followed by every triple whose three pairs all
/// overlap.
///
/// A triple's outline is the lens of its first two circles clipped by the
/// third disk; the exact three-circle region is never computed.
pub fn find_overlaps(circles: &[Circle]) -> Vec<OverlapRegion> {
	let n = circles.len();
	let mut regions = Vec::new();

	for a in 0..n {
		for b in a + 1..n {
			let (ca, cb) = (&circles[a], &circles[b]);
			if !ca.overlaps(cb) {
				continue;
			}
			let lens = intersect(ca.disk(), cb.disk());
			regions.push(OverlapRegion {
				overlap: Overlap::Pairwise { a, b },
				centroid: ca.center().midpoint(cb.center()),
				shape: lens.path().map(|path| RegionShape { path, clip: None }),
				bounds: lens.bounds(),
				labels: Vec::new(),
			});
		}
	}

	for a in 0..n {
		for b in a + 1..n {
			for c in b + 1..n {
				let (ca, cb, cc) = (&circles[a], &circles[b], &circles[c]);
				if !(ca.overlaps(cb) && cb.overlaps(cc) && ca.overlaps(cc)) {
					continue;
				}
				let lens = intersect(ca.disk(), cb.disk());
				let clip = cc.disk();
				regions.push(OverlapRegion {
					overlap: Overlap::Triple { a, b, c },
					centroid: Point::new(
						(ca.x + cb.x + cc.x) / 3.0,
						(ca.y + cb.y + cc.y) / 3.0,
					),
					shape: lens.path().map(|path| RegionShape {
						path,
						clip: Some(clip),
					}),
					bounds: lens.bounds().and_then(|lens_bounds| lens_bounds.intersect(&clip.bounds())),
					labels: Vec::new(),
				});
			}
		}
	}

	regions
}

/// Candidate labels for each kind of overlap.
#[derive(Clone, Debug, Default)]
pub struct LabelCatalog {
	pairs: HashMap<String, Vec<String>>,
	all: Vec<String>,
}

impl LabelCatalog {
	/// Catalog whose three-way labels are `all`.
	pub fn new(all: Vec<String>) -> Self {
		Self {
			pairs: HashMap::new(),
			all,
		}
	}

	/// Register labels for a pair of categories, in either order.
	pub fn with_pair(mut self, first: &str, second: &str, labels: Vec<String>) -> Self {
		self.pairs.insert(pair_key(first, second), labels);
		self
	}

	/// Labels for an overlap. Pairs without an entry get none.
	pub fn labels_for(&self, overlap: Overlap, circles: &[Circle]) -> &[String] {
		match overlap {
			Overlap::Pairwise { a, b } => match (circles.get(a), circles.get(b)) {
				(Some(ca), Some(cb)) => self
					.pairs
					.get(&pair_key(&ca.category, &cb.category))
					.map_or(&[][..], Vec::as_slice),
				_ => &[],
			},
			Overlap::Triple { .. } => self.all.as_slice(),
		}
	}
}

/// Sorted concatenation of two category codes, e.g. `"AB"`.
pub fn pair_key(first: &str, second: &str) -> String {
	if first <= second {
		format!("{first}{second}")
	} else {
		format!("{second}{first}")
	}
}

/// Shuffled label lists, kept for as long as their region exists.
#[derive(Clone, Debug, Default)]
pub struct LabelDeck {
	shuffled: HashMap<Overlap, Vec<String>>,
}

impl LabelDeck {
	/// Fill in the labels of `regions`. Regions seen for the first time get a
	/// fresh shuffle; shuffles of regions that are gone are dropped.
	pub fn deal<R: Rng + ?Sized>(
		&mut self,
		regions: &mut [OverlapRegion],
		circles: &[Circle],
		catalog: &LabelCatalog,
		per_region: usize,
		rng: &mut R,
	) {
		self.shuffled
			.retain(|overlap, _| regions.iter().any(|r| r.overlap == *overlap));

		for region in regions.iter_mut() {
			let labels = self.shuffled.entry(region.overlap).or_insert_with(|| {
				let mut labels = catalog.labels_for(region.overlap, circles).to_vec();
				labels.shuffle(&mut *rng);
				labels.truncate(per_region);
				labels
			});
			region.labels = match region.bounds {
				Some(bounds) => grid_layout(labels, bounds),
				None => Vec::new(),
			};
		}
	}

	/// Shuffled labels held for a live overlap.
	pub fn shuffled(&self, overlap: Overlap) -> Option<&[String]> {
		self.shuffled.get(&overlap).map(Vec::as_slice)
	}
}

/// Spread labels over a near-square grid filling `bounds`, one label at the
/// center of each cell, row by row.
pub fn grid_layout(labels: &[String], bounds: Bounds) -> Vec<PlacedLabel> {
	if labels.is_empty() {
		return Vec::new();
	}
	let count = labels.len();
	let columns = (count as f64).sqrt().ceil() as usize;
	let rows = count.div_ceil(columns);
	let (cell_w, cell_h) = (bounds.width() / columns as f64, bounds.height() / rows as f64);

	labels
		.iter()
		.enumerate()
		.map(|(i, text)| {
			let (row, col) = (i / columns, i % columns);
			PlacedLabel {
				text: text.clone(),
				at: Point::new(
					bounds.min.x + (col as f64 + 0.5) * cell_w,
					bounds.min.y + (row as f64 + 0.5) * cell_h,
				),
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use approx::assert_relative_eq;
	use rand::SeedableRng;
	use rand::rngs::StdRng;
	use test_log::test;

	use super::*;

	fn circle(category: &str, x: f64, y: f64, radius: f64) -> Circle {
		Circle {
			id: format!("circle-{category}"),
			x,
			y,
			radius,
			category: category.into(),
			label: category.into(),
		}
	}

	fn strings(prefix: &str, n: usize) -> Vec<String> {
		(0..n).map(|i| format!("{prefix}{i}")).collect()
	}

	fn catalog() -> LabelCatalog {
		LabelCatalog::new(strings("abc", 15))
			.with_pair("A", "B", strings("ab", 15))
			.with_pair("B", "C", strings("bc", 15))
			.with_pair("C", "A", strings("ac", 15))
	}

	fn clustered() -> Vec<Circle> {
		vec![
			circle("A", 0.0, 0.0, 100.0),
			circle("B", 120.0, 0.0, 100.0),
			circle("C", 60.0, 90.0, 100.0),
		]
	}

	fn kinds(regions: &[OverlapRegion]) -> Vec<Overlap> {
		regions.iter().map(|r| r.overlap).collect()
	}

	#[test]
	fn all_overlapping() {
		let regions = find_overlaps(&clustered());
		assert_eq!(
			kinds(&regions),
			vec![
				Overlap::Pairwise { a: 0, b: 1 },
				Overlap::Pairwise { a: 0, b: 2 },
				Overlap::Pairwise { a: 1, b: 2 },
				Overlap::Triple { a: 0, b: 1, c: 2 },
			]
		);
		let triple = &regions[3];
		assert_relative_eq!(triple.centroid.x, 60.0);
		assert_relative_eq!(triple.centroid.y, 30.0);
		let shape = triple.shape.as_ref().unwrap();
		assert_eq!(shape.clip, Some(clustered()[2].disk()));
		assert_eq!(regions[0].centroid, Point::new(60.0, 0.0));
		assert_eq!(regions[0].shape.as_ref().unwrap().clip, None);
	}

	#[test]
	fn triple_needs_every_pair() {
		let mut circles = clustered();
		assert!(kinds(&find_overlaps(&circles)).contains(&Overlap::Triple { a: 0, b: 1, c: 2 }));

		// A chain: A-B and B-C overlap, A-C does not.
		circles[2].x = 260.0;
		circles[2].y = 0.0;
		assert_eq!(
			kinds(&find_overlaps(&circles)),
			vec![Overlap::Pairwise { a: 0, b: 1 }, Overlap::Pairwise { a: 1, b: 2 }]
		);

		circles[2].x = 5000.0;
		assert_eq!(kinds(&find_overlaps(&circles)), vec![Overlap::Pairwise { a: 0, b: 1 }]);
	}

	#[test]
	fn apart_circles_have_no_overlaps() {
		let circles = vec![
			circle("A", 0.0, 0.0, 100.0),
			circle("B", 500.0, 0.0, 100.0),
			circle("C", 0.0, 500.0, 100.0),
		];
		assert!(find_overlaps(&circles).is_empty());
	}

	#[test]
	fn degenerate_pair_overlaps_without_shape() {
		let circles = vec![circle("A", 10.0, 10.0, 50.0), circle("B", 10.0, 10.0, 50.0)];
		let regions = find_overlaps(&circles);
		assert_eq!(regions.len(), 1);
		assert_eq!(regions[0].shape, None);
		assert_eq!(regions[0].bounds, None);
	}

	#[test]
	fn more_than_three_circles() {
		let circles = vec![
			circle("A", 0.0, 0.0, 100.0),
			circle("B", 50.0, 0.0, 100.0),
			circle("C", 0.0, 50.0, 100.0),
			circle("D", 50.0, 50.0, 100.0),
		];
		let regions = find_overlaps(&circles);
		let pairs = regions
			.iter()
			.filter(|r| matches!(r.overlap, Overlap::Pairwise { .. }))
			.count();
		let triples = regions.len() - pairs;
		assert_eq!(pairs, 6);
		assert_eq!(triples, 4);
	}

	#[test]
	fn pair_key_is_order_free() {
		assert_eq!(pair_key("B", "A"), "AB");
		assert_eq!(pair_key("A", "C"), "AC");
		let circles = clustered();
		let catalog = catalog();
		let ac = catalog.labels_for(Overlap::Pairwise { a: 0, b: 2 }, &circles);
		assert_eq!(ac[0], "ac0");
		let all = catalog.labels_for(Overlap::Triple { a: 0, b: 1, c: 2 }, &circles);
		assert_eq!(all[0], "abc0");
		assert!(catalog.labels_for(Overlap::Pairwise { a: 0, b: 9 }, &circles).is_empty());
	}

	#[test]
	fn deal_shuffles_once_per_lifetime() {
		let mut rng = StdRng::seed_from_u64(42);
		let catalog = catalog();
		let mut deck = LabelDeck::default();
		let mut circles = clustered();
		let ab = Overlap::Pairwise { a: 0, b: 1 };

		let mut regions = find_overlaps(&circles);
		deck.deal(&mut regions, &circles, &catalog, 9, &mut rng);
		let first = deck.shuffled(ab).unwrap().to_vec();
		assert_eq!(first.len(), 9);
		assert!(first.iter().all(|l| l.starts_with("ab")));
		assert_eq!(regions[0].labels.len(), 9);

		// Nudging a circle keeps the same order.
		circles[1].x += 3.0;
		let mut regions = find_overlaps(&circles);
		deck.deal(&mut regions, &circles, &catalog, 9, &mut rng);
		assert_eq!(deck.shuffled(ab).unwrap(), first.as_slice());

		// Pulling the pair apart forgets the shuffle.
		circles[1].x = 5000.0;
		let mut regions = find_overlaps(&circles);
		deck.deal(&mut regions, &circles, &catalog, 9, &mut rng);
		assert!(deck.shuffled(ab).is_none());
		assert!(deck.shuffled(Overlap::Triple { a: 0, b: 1, c: 2 }).is_none());
	}

	#[test]
	fn shuffle_is_a_permutation() {
		let mut rng = StdRng::seed_from_u64(9);
		let catalog = catalog();
		let mut deck = LabelDeck::default();
		let circles = clustered();
		let mut regions = find_overlaps(&circles);
		deck.deal(&mut regions, &circles, &catalog, 100, &mut rng);
		let mut got = deck
			.shuffled(Overlap::Triple { a: 0, b: 1, c: 2 })
			.unwrap()
			.to_vec();
		got.sort();
		let mut want = strings("abc", 15);
		want.sort();
		assert_eq!(got, want);
	}

	#[test]
	fn labels_land_inside_bounds() {
		let mut rng = StdRng::seed_from_u64(1);
		let circles = clustered();
		let mut regions = find_overlaps(&circles);
		LabelDeck::default().deal(&mut regions, &circles, &catalog(), 9, &mut rng);
		for region in &regions {
			let bounds = region.bounds.unwrap();
			for label in &region.labels {
				assert!(label.at.x >= bounds.min.x && label.at.x <= bounds.max.x);
				assert!(label.at.y >= bounds.min.y && label.at.y <= bounds.max.y);
			}
		}
	}

	#[test]
	fn grid_is_near_square() {
		let bounds = Bounds {
			min: Point::new(0.0, 0.0),
			max: Point::new(300.0, 200.0),
		};
		let placed = grid_layout(&strings("l", 5), bounds);
		// 5 labels: 3 columns, 2 rows.
		let at: Vec<_> = placed.iter().map(|p| p.at).collect();
		assert_eq!(
			at,
			vec![
				Point::new(50.0, 50.0),
				Point::new(150.0, 50.0),
				Point::new(250.0, 50.0),
				Point::new(50.0, 150.0),
				Point::new(150.0, 150.0),
			]
		);
		assert_eq!(placed[4].text, "l4");

		let single = grid_layout(&strings("x", 1), bounds);
		assert_eq!(single[0].at, Point::new(150.0, 100.0));
		assert!(grid_layout(&[], bounds).is_empty());
	}
}
