/// Tunables for the Venn diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct VennConfig {
	/// Radius of a category with scale 1.0.
	pub base_radius: f64,
	/// Pointer travel below which a press-release counts as a click.
	pub click_threshold: f64,
	/// Smallest radius the wheel can shrink a circle to.
	pub min_radius: f64,
	/// Largest radius the wheel can grow a circle to.
	pub max_radius: f64,
	/// Random positions tried per circle before falling back.
	pub placement_attempts: usize,
	/// Extra space kept between a circle and the viewport edge.
	pub placement_margin: f64,
	/// Radius change per unit of wheel delta.
	pub wheel_scale: f64,
	/// Most labels drawn inside one overlap region.
	pub labels_per_region: usize,
}

impl Default for VennConfig {
	fn default() -> Self {
		Self {
			base_radius: 200.0,
			click_threshold: 5.0,
			min_radius: 100.0,
			max_radius: 500.0,
			placement_attempts: 100,
			placement_margin: 50.0,
			wheel_scale: 0.5,
			labels_per_region: 9,
		}
	}
}

impl VennConfig {
	/// Clamp `radius` into `[min_radius, max_radius]`.
	pub fn clamp_radius(&self, radius: f64) -> f64 {
		radius.clamp(self.min_radius, self.max_radius)
	}
}
