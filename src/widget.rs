//! Glue between the pure state reducer and the DOM.

use crate::audio::RewardAudio;
use crate::config::PageConfig;
use crate::core::{falling_tears, Effect, Event, Particle, WidgetState, FALLING_TEAR_COUNT};
use crate::frame;
use crate::overlay;
use crate::view::View;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Widget {
    state: Cell<WidgetState>,
    pub view: View,
    config: PageConfig,
    sad_particles: Vec<Particle>,
    reward: Option<RewardAudio>,
    confetti: RefCell<Weak<RefCell<frame::ConfettiContext>>>,
}

impl Widget {
    pub fn new(view: View, config: PageConfig) -> Rc<Self> {
        let reward = match RewardAudio::load(&config.audio_url()) {
            Ok(a) => Some(a),
            Err(e) => {
                log::error!("[audio] {:?}", e);
                None
            }
        };
        Rc::new(Self {
            state: Cell::new(WidgetState::new()),
            view,
            config,
            sad_particles: falling_tears(FALLING_TEAR_COUNT),
            reward,
            confetti: RefCell::new(Weak::new()),
        })
    }

    #[inline]
    pub fn state(&self) -> WidgetState {
        self.state.get()
    }
}

pub fn dispatch(widget: &Rc<Widget>, event: Event) {
    let before = widget.state.get();
    let (next, effects) = before.reduce(event);
    widget.state.set(next);
    if next != before {
        log::info!(
            "[state] {:?} -> {:?} (generation {})",
            event,
            next.interaction,
            next.generation
        );
    }
    for effect in effects {
        apply(widget, effect);
    }
}

fn apply(widget: &Rc<Widget>, effect: Effect) {
    match effect {
        Effect::ShowMessage(text) => widget.view.set_message(text),
        Effect::ShowSadRain => overlay::show_sad_rain(
            &widget.view.document,
            &widget.view.sad_rain,
            &widget.sad_particles,
        ),
        Effect::HideSadRain => overlay::hide_sad_rain(&widget.view.sad_rain),
        Effect::ScheduleSadRainClear {
            generation,
            after_ms,
        } => schedule(widget, after_ms, Event::SadRainElapsed { generation }),
        Effect::ShowCelebration => widget.view.show_celebration(),
        Effect::LaunchConfetti => {
            let seed = js_sys::Date::now() as u64;
            let ctx = frame::launch_confetti(
                &widget.view.confetti_canvas,
                widget.config.confetti_pieces,
                seed,
            );
            match ctx {
                Ok(ctx) => *widget.confetti.borrow_mut() = ctx,
                Err(e) => log::error!("[confetti] {:?}", e),
            }
        }
        Effect::PlayRewardAudio => match &widget.reward {
            Some(audio) => audio.play(),
            None => log::warn!("[audio] no reward clip loaded"),
        },
    }
}

/// Feed `event` back through the reducer after `after_ms`.
fn schedule(widget: &Rc<Widget>, after_ms: u32, event: Event) {
    let Some(window) = web::window() else {
        return;
    };
    let w = widget.clone();
    let callback = Closure::once_into_js(move || dispatch(&w, event));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        after_ms.min(i32::MAX as u32) as i32,
    ) {
        log::error!("[state] setTimeout failed: {:?}", e);
    }
}

/// Keep the confetti canvas matched to the viewport while a burst is running.
pub fn resize(widget: &Rc<Widget>) {
    if let Some(ctx) = widget.confetti.borrow().upgrade() {
        ctx.borrow_mut().resize();
    }
}
