//! Window listeners and animation frames tied to an owner's lifetime.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, Window};

use crate::error::VennError;

/// An event listener on the window, removed again on drop.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
	/// Listen for `event`. A non-passive listener may call
	/// `prevent_default`.
	pub fn new<E, F>(
		window: &Window,
		event: &'static str,
		passive: bool,
		mut handler: F,
	) -> Result<Self, VennError>
	where
		E: JsCast + 'static,
		F: FnMut(E) + 'static,
	{
		let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| handler(ev.unchecked_into()));
		let options = AddEventListenerOptions::new();
		options.set_passive(passive);
		window.add_event_listener_with_callback_and_add_event_listener_options(
			event,
			callback.as_ref().unchecked_ref(),
			&options,
		)?;
		Ok(Self {
			window: window.clone(),
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Redraws on request. The frame function returns whether another frame
/// should follow right away; otherwise the loop idles until the next
/// [`FrameLoop::request`]. Dropping the loop cancels a pending frame.
pub struct FrameLoop {
	window: Window,
	pending: Rc<Cell<Option<i32>>>,
	callback: FrameCallback,
}

impl FrameLoop {
	/// Loop calling `frame` once per requested frame. While `frame` returns
	/// `true` the next frame is requested automatically.
	pub fn new(window: &Window, mut frame: impl FnMut() -> bool + 'static) -> Self {
		let pending = Rc::new(Cell::new(None));
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let (window_cb, pending_cb, callback_cb) =
			(window.clone(), pending.clone(), Rc::downgrade(&callback));

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_cb.set(None);
			if frame() {
				if let Some(callback) = callback_cb.upgrade() {
					schedule(&window_cb, &pending_cb, &callback);
				}
			}
		}));

		Self {
			window: window.clone(),
			pending,
			callback,
		}
	}

	/// Draw on the next animation frame, unless one is already queued.
	pub fn request(&self) {
		schedule(&self.window, &self.pending, &self.callback);
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

fn schedule(window: &Window, pending: &Cell<Option<i32>>, callback: &RefCell<Option<Closure<dyn FnMut()>>>) {
	if pending.get().is_some() {
		return;
	}
	if let Some(ref cb) = *callback.borrow() {
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => pending.set(Some(id)),
			Err(err) => error!("requestAnimationFrame failed: {}", VennError::from(err)),
		}
	}
}
