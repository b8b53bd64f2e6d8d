/// A point in canvas space (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		(other.x - self.x).hypot(other.y - self.y)
	}

	/// Halfway point between `self` and `other`.
	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Top-left corner.
	pub min: Point,
	/// Bottom-right corner.
	pub max: Point,
}

impl Bounds {
	/// Square box enclosing the disk at `center`.
	pub fn around(center: Point, radius: f64) -> Self {
		Self {
			min: Point::new(center.x - radius, center.y - radius),
			max: Point::new(center.x + radius, center.y + radius),
		}
	}

	/// Smallest box holding every point, `None` for no points.
	pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let mut points = points.into_iter();
		let first = points.next()?;
		Some(points.fold(Self { min: first, max: first }, |b, p| Self {
			min: Point::new(b.min.x.min(p.x), b.min.y.min(p.y)),
			max: Point::new(b.max.x.max(p.x), b.max.y.max(p.y)),
		}))
	}

	/// Overlap of two boxes, `None` when they do not touch.
	pub fn intersect(&self, other: &Bounds) -> Option<Bounds> {
		let min = Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y));
		let max = Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y));
		(min.x <= max.x && min.y <= max.y).then_some(Bounds { min, max })
	}

	/// Horizontal extent.
	pub fn width(&self) -> f64 {
		self.max.x - self.min.x
	}

	/// Vertical extent.
	pub fn height(&self) -> f64 {
		self.max.y - self.min.y
	}
}

/// A bare disk, used where only the geometry of a circle matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
	/// Center point.
	pub center: Point,
	/// Radius, positive for a usable disk.
	pub radius: f64,
}

impl Disk {
	/// Whether `p` lies inside or on the rim.
	pub fn contains(&self, p: Point) -> bool {
		self.center.distance(p) <= self.radius
	}

	/// Bounding box.
	pub fn bounds(&self) -> Bounds {
		Bounds::around(self.center, self.radius)
	}

	/// Finite center with a finite positive radius.
	pub fn is_valid(&self) -> bool {
		self.center.x.is_finite()
			&& self.center.y.is_finite()
			&& self.radius.is_finite()
			&& self.radius > 0.0
	}
}

/// What the layout generator is asked to place.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleRequest {
	/// Radius to place with.
	pub radius: f64,
	/// Category code, also the key for overlap labels.
	pub category: String,
	/// Text drawn inside the circle.
	pub label: String,
}

/// A placed category circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	/// Stable id derived from the category.
	pub id: String,
	/// Center x.
	pub x: f64,
	/// Center y.
	pub y: f64,
	/// Current radius.
	pub radius: f64,
	/// Category code.
	pub category: String,
	/// Display name.
	pub label: String,
}

impl Circle {
	/// Center as a point.
	pub fn center(&self) -> Point {
		Point::new(self.x, self.y)
	}

	/// Geometry only.
	pub fn disk(&self) -> Disk {
		Disk {
			center: self.center(),
			radius: self.radius,
		}
	}

	/// Hit test, inclusive of the rim.
	pub fn contains(&self, p: Point) -> bool {
		self.disk().contains(p)
	}

	/// Strict overlap test: touching circles do not overlap.
	pub fn overlaps(&self, other: &Circle) -> bool {
		self.center().distance(other.center()) < self.radius + other.radius
	}
}
