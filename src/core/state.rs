// Interaction state for the proposal card.
//
// The whole widget state is a small `Copy` value. Each input produces a new
// value plus the list of side effects the front-end has to perform; nothing is
// mutated in place, so the logic can be exercised without a browser.
//
// The sad-rain auto-clear is scheduled with the `generation` current at the
// time of the decline. A later decline or accept bumps the generation, which
// turns any timer still in flight into a no-op.

use super::constants::SAD_RAIN_CLEAR_MS;
use super::messages::{decline_is_within_script, message_for, DEFAULT_PROMPT};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    Asking {
        decline_count: u32,
        message: &'static str,
    },
    Accepted,
}

/// User or timer input fed to [`WidgetState::reduce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Decline,
    Accept,
    SadRainElapsed { generation: u64 },
}

/// Work the front-end performs after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    ShowMessage(&'static str),
    ShowSadRain,
    ScheduleSadRainClear { generation: u64, after_ms: u32 },
    HideSadRain,
    ShowCelebration,
    LaunchConfetti,
    PlayRewardAudio,
}

pub type Effects = SmallVec<[Effect; 4]>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetState {
    pub interaction: Interaction,
    pub sad_rain_visible: bool,
    pub generation: u64,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub const fn new() -> Self {
        Self {
            interaction: Interaction::Asking {
                decline_count: 0,
                message: DEFAULT_PROMPT,
            },
            sad_rain_visible: false,
            generation: 0,
        }
    }

    pub fn reduce(self, event: Event) -> (Self, Effects) {
        match event {
            Event::Decline => self.decline(),
            Event::Accept => self.accept(),
            Event::SadRainElapsed { generation } => self.sad_rain_elapsed(generation),
        }
    }

    pub fn decline(self) -> (Self, Effects) {
        let mut effects = Effects::new();
        let Interaction::Asking { decline_count, .. } = self.interaction else {
            return (self, effects);
        };
        let decline_count = decline_count.saturating_add(1);
        let message = message_for(decline_count);
        let generation = self.generation + 1;
        effects.push(Effect::ShowMessage(message));

        let sad_rain_visible = decline_is_within_script(decline_count);
        if sad_rain_visible {
            effects.push(Effect::ShowSadRain);
            effects.push(Effect::ScheduleSadRainClear {
                generation,
                after_ms: SAD_RAIN_CLEAR_MS,
            });
        } else {
            effects.push(Effect::HideSadRain);
        }

        let next = Self {
            interaction: Interaction::Asking {
                decline_count,
                message,
            },
            sad_rain_visible,
            generation,
        };
        (next, effects)
    }

    pub fn accept(self) -> (Self, Effects) {
        let mut effects = Effects::new();
        if self.is_accepted() {
            return (self, effects);
        }
        if self.sad_rain_visible {
            effects.push(Effect::HideSadRain);
        }
        effects.push(Effect::ShowCelebration);
        effects.push(Effect::LaunchConfetti);
        effects.push(Effect::PlayRewardAudio);
        let next = Self {
            interaction: Interaction::Accepted,
            sad_rain_visible: false,
            generation: self.generation + 1,
        };
        (next, effects)
    }

    /// Timer callback for the sad rain scheduled at `generation`.
    pub fn sad_rain_elapsed(self, generation: u64) -> (Self, Effects) {
        let mut effects = Effects::new();
        if generation != self.generation || !self.sad_rain_visible {
            return (self, effects);
        }
        effects.push(Effect::HideSadRain);
        let next = Self {
            sad_rain_visible: false,
            ..self
        };
        (next, effects)
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self.interaction, Interaction::Accepted)
    }

    #[inline]
    pub fn decline_count(&self) -> Option<u32> {
        match self.interaction {
            Interaction::Asking { decline_count, .. } => Some(decline_count),
            Interaction::Accepted => None,
        }
    }

    #[inline]
    pub fn message(&self) -> Option<&'static str> {
        match self.interaction {
            Interaction::Asking { message, .. } => Some(message),
            Interaction::Accepted => None,
        }
    }
}
