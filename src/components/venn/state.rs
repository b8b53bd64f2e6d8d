use log::debug;
use rand::rngs::StdRng;

use super::config::VennConfig;
use super::layout::place_circles;
use super::overlap::{LabelCatalog, LabelDeck, OverlapRegion, find_overlaps};
use super::types::{Circle, CircleRequest, Point, Viewport};

/// A press on a circle that has not been resolved into a click or a drag yet.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	/// Pressed circle.
	pub circle: Option<String>,
	/// Pointer position at the press.
	pub start: Option<Point>,
}

/// Which circles the pointer is acting on.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
	/// Circle following the pointer after a click.
	pub carried: Option<String>,
	/// Circle under the pointer, target of wheel resizing.
	pub hovered: Option<String>,
	/// Unresolved press.
	pub drag: DragState,
}

/// Circles, their overlaps, and the pointer interaction over them.
pub struct VennState {
	/// Drawing order, last on top.
	pub circles: Vec<Circle>,
	/// Pointer state.
	pub interaction: Interaction,
	/// Surface size the layout was made for, if it was known.
	pub viewport: Option<Viewport>,
	config: VennConfig,
	catalog: LabelCatalog,
	deck: LabelDeck,
	regions: Vec<OverlapRegion>,
	rng: StdRng,
}

impl VennState {
	/// Lays out one circle per request and computes the initial overlaps.
	pub fn new(
		viewport: Option<Viewport>,
		requests: &[CircleRequest],
		config: VennConfig,
		catalog: LabelCatalog,
		mut rng: StdRng,
	) -> Self {
		let circles = place_circles(viewport, requests, &config, &mut rng);
		let mut state = Self::with_circles(circles, config, catalog, rng);
		state.viewport = viewport;
		state
	}

	/// State over circles that are already placed.
	pub fn with_circles(circles: Vec<Circle>, config: VennConfig, catalog: LabelCatalog, rng: StdRng) -> Self {
		let mut state = Self {
			circles,
			interaction: Interaction::default(),
			viewport: None,
			config,
			catalog,
			deck: LabelDeck::default(),
			regions: Vec::new(),
			rng,
		};
		state.refresh();
		state
	}

	/// Current overlap regions, pairs before triples.
	pub fn regions(&self) -> &[OverlapRegion] {
		&self.regions
	}

	/// Circle with the given id.
	pub fn circle(&self, id: &str) -> Option<&Circle> {
		self.circles.iter().find(|c| c.id == id)
	}

	/// Topmost circle under `p`; later circles are drawn above earlier ones.
	pub fn circle_at(&self, p: Point) -> Option<String> {
		self.circles
			.iter()
			.rev()
			.find(|c| c.contains(p))
			.map(|c| c.id.clone())
	}

	/// Whether `id` follows the pointer after a click.
	pub fn is_carried(&self, id: &str) -> bool {
		self.interaction.carried.as_deref() == Some(id)
	}

	/// Whether `id` is pressed and not released yet.
	pub fn is_dragged(&self, id: &str) -> bool {
		self.interaction.drag.circle.as_deref() == Some(id)
	}

	/// Whether `id` is under the pointer.
	pub fn is_hovered(&self, id: &str) -> bool {
		self.interaction.hovered.as_deref() == Some(id)
	}

	/// Whether a circle is moving with the pointer, i.e. frames are needed.
	pub fn is_manipulating(&self) -> bool {
		self.interaction.carried.is_some() || self.interaction.drag.circle.is_some()
	}

	/// Press at `p`: on a circle it starts a press, on the background it
	/// drops any carried circle. A carried circle takes the press even when
	/// another circle is drawn above it.
	pub fn pointer_down_at(&mut self, p: Point) {
		if let Some(id) = self.interaction.carried.clone() {
			if self.circle(&id).is_some_and(|c| c.contains(p)) {
				self.pointer_down(&id, p);
				return;
			}
		}
		match self.circle_at(p) {
			Some(id) => self.pointer_down(&id, p),
			None => self.background_click(),
		}
	}

	/// Press on circle `id`. Drops it if it is carried, otherwise starts a
	/// press that the release resolves into a click or a drag.
	pub fn pointer_down(&mut self, id: &str, at: Point) {
		if self.is_carried(id) {
			debug!("dropped {id}");
			self.interaction.carried = None;
			return;
		}
		if self.circle(id).is_none() {
			return;
		}
		if let Some(other) = self.interaction.carried.take() {
			debug!("dropped {other}");
		}
		self.interaction.drag = DragState {
			circle: Some(id.to_string()),
			start: Some(at),
		};
	}

	/// Moves the dragged or carried circle to `at`. Returns whether anything
	/// changed.
	pub fn pointer_move(&mut self, at: Point) -> bool {
		let target = match (&self.interaction.drag, &self.interaction.carried) {
			(DragState { circle: Some(id), start: Some(_) }, _) => id.clone(),
			(_, Some(id)) => id.clone(),
			_ => return false,
		};
		self.move_circle(&target, at)
	}

	/// Release. Within `click_threshold` of the press the circle is picked up.
	pub fn pointer_up(&mut self, at: Point) {
		let DragState { circle, start } = std::mem::take(&mut self.interaction.drag);
		let (Some(id), Some(start)) = (circle, start) else {
			return;
		};
		if start.distance(at) < self.config.click_threshold {
			debug!("picked up {id}");
			self.interaction.carried = Some(id);
		}
	}

	/// Press outside every circle.
	pub fn background_click(&mut self) {
		if let Some(id) = self.interaction.carried.take() {
			debug!("dropped {id}");
		}
	}

	/// The pointer left the surface: an unresolved press ends in place.
	pub fn pointer_leave(&mut self) {
		self.interaction.drag = DragState::default();
		self.set_hover(None);
	}

	/// Pointer moved to `at`. The moving circle follows everywhere, but hover
	/// is only tracked while the pointer is over the drawing surface.
	pub fn track_pointer(&mut self, at: Point, over_surface: bool) -> bool {
		let moved = self.pointer_move(at);
		let hover_changed = if over_surface {
			self.hover_at(at)
		} else {
			self.set_hover(None)
		};
		moved || hover_changed
	}

	/// Returns whether the hovered circle changed. Unknown ids are ignored.
	pub fn set_hover(&mut self, id: Option<&str>) -> bool {
		if self.interaction.hovered.as_deref() == id {
			return false;
		}
		if id.is_some_and(|id| self.circle(id).is_none()) {
			return false;
		}
		self.interaction.hovered = id.map(str::to_string);
		true
	}

	/// Hover whatever circle is on top at `p`.
	pub fn hover_at(&mut self, p: Point) -> bool {
		let hovered = self.circle_at(p);
		self.set_hover(hovered.as_deref())
	}

	/// Resize the hovered circle. Returns `true` when the wheel event was
	/// consumed and page scrolling should be suppressed.
	pub fn wheel(&mut self, delta_y: f64) -> bool {
		if self.is_manipulating() {
			return false;
		}
		let Some(id) = self.interaction.hovered.clone() else {
			return false;
		};
		let (scale, config) = (self.config.wheel_scale, &self.config);
		let Some(circle) = self.circles.iter_mut().find(|c| c.id == id) else {
			return false;
		};
		circle.radius = config.clamp_radius(circle.radius - delta_y * scale);
		self.refresh();
		true
	}

	fn move_circle(&mut self, id: &str, at: Point) -> bool {
		let Some(circle) = self.circles.iter_mut().find(|c| c.id == id) else {
			return false;
		};
		if circle.center() == at {
			return false;
		}
		circle.x = at.x;
		circle.y = at.y;
		self.refresh();
		true
	}

	/// Recompute overlaps from the current circles.
	fn refresh(&mut self) {
		let mut regions = find_overlaps(&self.circles);
		self.deck.deal(
			&mut regions,
			&self.circles,
			&self.catalog,
			self.config.labels_per_region,
			&mut self.rng,
		);
		self.regions = regions;
	}
}
