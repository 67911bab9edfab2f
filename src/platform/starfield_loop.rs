//! Per-frame starfield loop on a canvas
//!
//! The loop owns its frame callback and resize listener. Dropping the
//! `StarfieldLoop` cancels the pending frame and detaches the listener.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, Window};

use super::window;
use crate::error::{CardError, Result};
use crate::renderer::render_frame;
use crate::sim::Starfield;

type FrameClosure = Closure<dyn FnMut(f64)>;

struct FieldState {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: Starfield,
    rng: Pcg32,
    raf_id: Option<i32>,
}

impl FieldState {
    /// Match the canvas to the viewport and regenerate the stars
    fn resize(&mut self, window: &Window) {
        let (w, h) = viewport_size(window);
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.field.resize(w, h, &mut self.rng);
    }
}

fn viewport_size(window: &Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

pub struct StarfieldLoop {
    window: Window,
    state: Rc<RefCell<FieldState>>,
    frame: Rc<RefCell<Option<FrameClosure>>>,
    on_resize: Option<Closure<dyn FnMut(Event)>>,
}

impl StarfieldLoop {
    /// Start drawing onto the canvas with id `canvas_id`.
    ///
    /// Fails with `SurfaceUnavailable` if the canvas or its 2-D context is
    /// missing; nothing is scheduled in that case.
    pub fn start(canvas_id: &str, seed: u64) -> Result<Self> {
        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| CardError::SurfaceUnavailable("no document".into()))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| CardError::SurfaceUnavailable(format!("canvas #{canvas_id} not found")))?
            .dyn_into()
            .map_err(|_| CardError::SurfaceUnavailable(format!("#{canvas_id} is not a canvas")))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| CardError::SurfaceUnavailable("2D context not available".into()))?
            .dyn_into()
            .map_err(|_| CardError::SurfaceUnavailable("unexpected context type".into()))?;

        let (w, h) = viewport_size(&window);
        let mut rng = Pcg32::seed_from_u64(seed);
        let field = Starfield::new(w, h, &mut rng);
        let state = Rc::new(RefCell::new(FieldState {
            canvas,
            ctx,
            field,
            rng,
            raf_id: None,
        }));
        state.borrow_mut().resize(&window);

        let frame: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        {
            let state = state.clone();
            let window = window.clone();
            let next = frame.clone();
            *frame.borrow_mut() = Some(Closure::new(move |_time: f64| {
                let mut s = state.borrow_mut();
                let FieldState { ctx, field, .. } = &mut *s;
                if let Err(e) = render_frame(ctx, field) {
                    log::warn!("Starfield frame failed: {}", e);
                }
                s.raf_id = next
                    .borrow()
                    .as_ref()
                    .and_then(|f| window.request_animation_frame(f.as_ref().unchecked_ref()).ok());
            }));
        }

        // From here on an early return drops `this`, which undoes whatever
        // was already scheduled or attached
        let mut this = Self {
            window,
            state,
            frame,
            on_resize: None,
        };

        let first = this
            .frame
            .borrow()
            .as_ref()
            .map(|f| this.window.request_animation_frame(f.as_ref().unchecked_ref()))
            .transpose()?;
        this.state.borrow_mut().raf_id = first;

        // Resize regenerates the stars before the next frame runs
        let on_resize = {
            let state = this.state.clone();
            let window = this.window.clone();
            Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                state.borrow_mut().resize(&window);
            })
        };
        this.window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        this.on_resize = Some(on_resize);

        log::info!("Starfield running ({}x{})", w, h);
        Ok(this)
    }

    /// Cancel the pending frame and detach the resize listener
    pub fn stop(&mut self) {
        if let Some(id) = self.state.borrow_mut().raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(on_resize) = self.on_resize.take() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }
        // Breaks the closure's reference to itself
        if self.frame.borrow_mut().take().is_some() {
            log::info!("Starfield stopped");
        }
    }
}

impl Drop for StarfieldLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
