use std::f64::consts::TAU;

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Path2d};

use super::intersect::BoundaryPath;
use super::overlap::{OverlapRegion, RegionShape};
use super::state::VennState;
use super::types::{Disk, Viewport};

const BACKGROUND: &str = "#000000";
const STROKE: &str = "white";
const REGION_FILL: &str = "rgba(255, 255, 255, 0.2)";
const LABEL_FILL: &str = "rgba(255, 255, 255, 0.85)";

/// Draw one frame of `state` on a surface of `size`.
pub fn render(state: &VennState, ctx: &CanvasRenderingContext2d, size: Viewport) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, size.width, size.height);
	for region in state.regions() {
		draw_region(region, ctx);
	}
	draw_circles(state, ctx);
}

fn path2d(path: &BoundaryPath) -> Option<Path2d> {
	match Path2d::new_with_path_string(&path.to_svg()) {
		Ok(p) => Some(p),
		Err(err) => {
			warn!("bad region path {:?}: {err:?}", path.start);
			None
		}
	}
}

/// Restrict drawing to the region. Triples are clipped twice: first to the
/// lens, then to the third disk.
fn clip_to(shape: &RegionShape, lens: &Path2d, ctx: &CanvasRenderingContext2d) {
	ctx.clip_with_path_2d(lens);
	if let Some(Disk { center, radius }) = shape.clip {
		ctx.begin_path();
		let _ = ctx.arc(center.x, center.y, radius, 0.0, TAU);
		ctx.clip();
	}
}

fn draw_region(region: &OverlapRegion, ctx: &CanvasRenderingContext2d) {
	let Some(shape) = &region.shape else {
		return;
	};
	let Some(lens) = path2d(&shape.path) else {
		return;
	};

	ctx.save();
	clip_to(shape, &lens, ctx);
	ctx.set_fill_style_str(REGION_FILL);
	ctx.fill_with_path_2d(&lens);

	ctx.set_fill_style_str(LABEL_FILL);
	ctx.set_font("12px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	for label in &region.labels {
		let _ = ctx.fill_text(&label.text, label.at.x, label.at.y);
	}
	ctx.restore();
}

fn draw_circles(state: &VennState, ctx: &CanvasRenderingContext2d) {
	let dash = js_sys::Array::of2(&JsValue::from_f64(15.0), &JsValue::from_f64(10.0));

	for circle in &state.circles {
		let carried = state.is_carried(&circle.id);
		let glowing = state.is_hovered(&circle.id) && !carried;

		ctx.save();
		ctx.set_global_alpha(if carried { 0.5 } else { 1.0 });
		if glowing {
			ctx.set_shadow_color(STROKE);
			ctx.set_shadow_blur(8.0);
		}
		ctx.set_stroke_style_str(STROKE);
		ctx.set_line_width(if glowing { 4.0 } else { 3.0 });
		let _ = ctx.set_line_dash(&dash);
		ctx.begin_path();
		let _ = ctx.arc(circle.x, circle.y, circle.radius, 0.0, TAU);
		ctx.stroke();

		ctx.set_shadow_blur(0.0);
		ctx.set_fill_style_str(STROKE);
		ctx.set_font("16px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("top");
		let _ = ctx.fill_text(&circle.label, circle.x, circle.y - circle.radius + 24.0);
		ctx.restore();
	}
}
