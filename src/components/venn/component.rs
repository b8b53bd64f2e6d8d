use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::VennConfig;
use super::listeners::{FrameLoop, WindowListener};
use super::render;
use super::state::VennState;
use super::types::{Point, Viewport};
use crate::content;
use crate::error::VennError;

/// Canvas size when the window cannot be measured.
const FALLBACK_SIZE: Viewport = Viewport {
	width: 1280.0,
	height: 800.0,
};

type SharedState = Rc<RefCell<Option<VennState>>>;

/// Everything that must be torn down with the component.
struct Session {
	frames: FrameLoop,
	_listeners: Vec<WindowListener>,
}

type SessionSlot = StoredValue<Option<Session>, LocalStorage>;

fn redraw(session: SessionSlot) {
	session.with_value(|s| {
		if let Some(s) = s {
			s.frames.request();
		}
	});
}

fn window_viewport(window: &Window) -> Result<Viewport, VennError> {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).ok_or(VennError::NoViewport);
	Ok(Viewport {
		width: dim(window.inner_width())?,
		height: dim(window.inner_height())?,
	})
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, VennError> {
	canvas
		.get_context("2d")?
		.ok_or(VennError::NoContext)?
		.dyn_into()
		.map_err(|_| VennError::NoContext)
}

fn canvas_point(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
	let rect = canvas.get_bounding_client_rect();
	Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Whether the event was dispatched on the canvas itself rather than on
/// something drawn over it.
fn targets(canvas: &HtmlCanvasElement, ev: &Event) -> bool {
	ev.target()
		.is_some_and(|target| JsValue::from(target) == JsValue::from(canvas.clone()))
}

fn mount(
	canvas: HtmlCanvasElement,
	state: &SharedState,
	session: SessionSlot,
	config: VennConfig,
) -> Result<(), VennError> {
	let window = web_sys::window().ok_or(VennError::NoWindow)?;
	let viewport = window_viewport(&window)
		.inspect_err(|err| warn!("{err}, using preset layout"))
		.ok();
	let size = viewport.unwrap_or(FALLBACK_SIZE);
	canvas.set_width(size.width as u32);
	canvas.set_height(size.height as u32);
	let ctx = context_2d(&canvas)?;

	let requests = content::circle_requests(&config);
	*state.borrow_mut() = Some(VennState::new(
		viewport,
		&requests,
		config,
		content::label_catalog(),
		StdRng::from_entropy(),
	));
	info!("venn diagram mounted at {}x{}", size.width, size.height);

	let state_frame = state.clone();
	let frames = FrameLoop::new(&window, move || match *state_frame.borrow() {
		Some(ref s) => {
			render::render(s, &ctx, size);
			s.is_manipulating()
		}
		None => false,
	});

	let (state_mm, canvas_mm) = (state.clone(), canvas.clone());
	let on_mousemove = WindowListener::new(&window, "mousemove", true, move |ev: MouseEvent| {
		let at = canvas_point(&canvas_mm, &ev);
		let over = targets(&canvas_mm, &ev);
		let dirty = match *state_mm.borrow_mut() {
			Some(ref mut s) => s.track_pointer(at, over),
			None => false,
		};
		if dirty {
			redraw(session);
		}
	})?;

	let state_wh = state.clone();
	let on_wheel = WindowListener::new(&window, "wheel", false, move |ev: WheelEvent| {
		if !targets(&canvas, &ev) {
			return;
		}
		let consumed = match *state_wh.borrow_mut() {
			Some(ref mut s) => s.wheel(ev.delta_y()),
			None => false,
		};
		if consumed {
			ev.prevent_default();
			redraw(session);
		}
	})?;

	frames.request();
	session.set_value(Some(Session {
		frames,
		_listeners: vec![on_mousemove, on_wheel],
	}));
	Ok(())
}

/// Full-window interactive Venn diagram.
#[component]
pub fn VennCanvas(#[prop(optional)] config: Option<VennConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: SharedState = Rc::new(RefCell::new(None));
	let session: SessionSlot = StoredValue::new_local(None);
	let config = config.unwrap_or_default();

	let state_init = state.clone();
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Err(err) = mount(canvas.into(), &state_init, session, config.clone()) {
			error!("venn diagram setup failed: {err}");
		}
	});

	on_cleanup(move || {
		// Unregisters the window listeners and cancels a queued frame.
		session.try_update_value(|s| s.take());
	});

	// Runs `f` on the state with the pointer position, then redraws.
	let with_pointer = move |state: SharedState, f: fn(&mut VennState, Point)| {
		move |ev: MouseEvent| {
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let at = canvas_point(&canvas, &ev);
			if let Some(ref mut s) = *state.borrow_mut() {
				f(s, at);
			}
			redraw(session);
		}
	};

	let on_mousedown = with_pointer(state.clone(), VennState::pointer_down_at);
	let on_mouseup = with_pointer(state.clone(), VennState::pointer_up);
	let on_mouseleave = with_pointer(state, |s, _| s.pointer_leave());

	view! {
		<canvas
			node_ref=canvas_ref
			class="venn-canvas"
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			style="display: block; cursor: grab;"
		/>
	}
}
