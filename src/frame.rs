use crate::constants::CONFETTI_MAX_DT_SEC;
use crate::core::ConfettiBurst;
use crate::dom;
use crate::overlay;
use anyhow::anyhow;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ConfettiContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub burst: ConfettiBurst,
    pub last_instant: Instant,
    pub dpr: f64,
}

impl ConfettiContext {
    /// Step and draw one frame. Returns false once the burst is over.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().min(CONFETTI_MAX_DT_SEC);
        self.last_instant = now;

        let alive = self.burst.step(dt);
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        if !alive {
            return false;
        }

        for piece in self.burst.pieces() {
            _ = self.ctx.set_transform(
                self.dpr,
                0.0,
                0.0,
                self.dpr,
                piece.position.x as f64 * self.dpr,
                piece.position.y as f64 * self.dpr,
            );
            _ = self.ctx.rotate(piece.angle as f64);
            #[allow(deprecated)]
            self.ctx.set_fill_style(&JsValue::from_str(piece.color));
            self.ctx.fill_rect(
                -(piece.size.x as f64) / 2.0,
                -(piece.size.y as f64) / 2.0,
                piece.size.x as f64,
                piece.size.y as f64,
            );
        }
        true
    }

    pub fn resize(&mut self) {
        dom::sync_canvas_backing_size(&self.canvas);
        let (w, h) = dom::viewport_size();
        self.burst.resize(w, h);
        if let Some(win) = web::window() {
            self.dpr = win.device_pixel_ratio();
        }
    }
}

/// Show the confetti canvas, spawn a burst and run it to completion.
///
/// The animation loop owns the context; the returned handle goes dead once
/// the burst is over.
pub fn launch_confetti(
    canvas: &web::HtmlCanvasElement,
    pieces: usize,
    seed: u64,
) -> anyhow::Result<Weak<RefCell<ConfettiContext>>> {
    overlay::show(canvas);
    dom::sync_canvas_backing_size(canvas);
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let (w, h) = dom::viewport_size();
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    log::info!("[confetti] launching {} pieces over {:.0}x{:.0}", pieces, w, h);

    let frame_ctx = Rc::new(RefCell::new(ConfettiContext {
        canvas: canvas.clone(),
        ctx,
        burst: ConfettiBurst::new(w, h, pieces, seed),
        last_instant: Instant::now(),
        dpr,
    }));
    let handle = Rc::downgrade(&frame_ctx);
    start_loop(frame_ctx);
    Ok(handle)
}

/// requestAnimationFrame loop that stops rescheduling once the burst is over.
pub fn start_loop(frame_ctx: Rc<RefCell<ConfettiContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let alive = frame_ctx_tick.borrow_mut().frame();
        if !alive {
            {
                let fc = frame_ctx_tick.borrow();
                log::info!("[confetti] burst finished after {:.2}s", fc.burst.elapsed());
                overlay::hide(&fc.canvas);
            }
            // Break the closure's self-reference so it and the burst are freed.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
