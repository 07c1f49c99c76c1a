// Host-side tests for the proposal state reducer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod messages {
        include!("../src/core/messages.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
}

use crate::core::constants::SAD_RAIN_CLEAR_MS;
use crate::core::messages::*;
use crate::core::state::*;

fn decline_n(n: u32) -> WidgetState {
    (0..n).fold(WidgetState::new(), |s, _| s.decline().0)
}

#[test]
fn starts_asking_with_default_prompt() {
    let s = WidgetState::new();
    assert_eq!(s.decline_count(), Some(0));
    assert_eq!(s.message(), Some(DEFAULT_PROMPT));
    assert!(!s.sad_rain_visible);
    assert!(!s.is_accepted());
    assert_eq!(s, WidgetState::default());
}

#[test]
fn declines_walk_through_the_message_list() {
    assert_eq!(DECLINE_MESSAGES.len(), 6);
    for n in 1..=DECLINE_MESSAGES.len() as u32 {
        let s = decline_n(n);
        assert_eq!(s.decline_count(), Some(n));
        assert_eq!(s.message(), Some(DECLINE_MESSAGES[n as usize - 1]));
    }
    assert_eq!(decline_n(6).message(), Some(DECLINE_MESSAGES[5]));
}

#[test]
fn declines_past_the_list_give_up() {
    for n in 7..=12 {
        let s = decline_n(n);
        assert_eq!(s.decline_count(), Some(n));
        assert_eq!(s.message(), Some(GIVING_UP_MESSAGE));
    }
}

#[test]
fn message_for_is_a_pure_function_of_the_count() {
    assert_eq!(message_for(0), DEFAULT_PROMPT);
    assert_eq!(message_for(1), DECLINE_MESSAGES[0]);
    assert_eq!(message_for(6), DECLINE_MESSAGES[5]);
    assert_eq!(message_for(7), GIVING_UP_MESSAGE);
    assert_eq!(message_for(u32::MAX), GIVING_UP_MESSAGE);
}

#[test]
fn scripted_decline_shows_sad_rain_and_schedules_clear() {
    let (s, effects) = WidgetState::new().decline();
    assert!(s.sad_rain_visible);
    assert_eq!(s.generation, 1);
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::ShowMessage(DECLINE_MESSAGES[0]),
            Effect::ShowSadRain,
            Effect::ScheduleSadRainClear {
                generation: 1,
                after_ms: SAD_RAIN_CLEAR_MS,
            },
        ]
    );
}

#[test]
fn giving_up_decline_hides_sad_rain_without_timer() {
    let (s, effects) = decline_n(6).decline();
    assert!(!s.sad_rain_visible);
    assert_eq!(
        effects.as_slice(),
        &[Effect::ShowMessage(GIVING_UP_MESSAGE), Effect::HideSadRain]
    );
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::ScheduleSadRainClear { .. })));
}

#[test]
fn decline_count_never_decreases() {
    let mut s = WidgetState::new();
    let mut last = 0;
    for _ in 0..20 {
        s = s.decline().0;
        let c = s.decline_count().unwrap();
        assert!(c > last);
        last = c;
    }
}

#[test]
fn sad_rain_timer_clears_current_generation() {
    let s = decline_n(1);
    let (s, effects) = s.sad_rain_elapsed(s.generation);
    assert!(!s.sad_rain_visible);
    assert_eq!(effects.as_slice(), &[Effect::HideSadRain]);
    // message stays
    assert_eq!(s.message(), Some(DECLINE_MESSAGES[0]));
}

#[test]
fn stale_sad_rain_timer_is_ignored() {
    let first = decline_n(1);
    let stale = first.generation;
    let second = first.decline().0;
    assert!(second.sad_rain_visible);

    let (after, effects) = second.sad_rain_elapsed(stale);
    assert_eq!(after, second);
    assert!(effects.is_empty());

    let (after, effects) = second.reduce(Event::SadRainElapsed {
        generation: second.generation,
    });
    assert!(!after.sad_rain_visible);
    assert_eq!(effects.as_slice(), &[Effect::HideSadRain]);
}

#[test]
fn repeated_timer_is_harmless() {
    let s = decline_n(2);
    let (s, _) = s.sad_rain_elapsed(s.generation);
    let (again, effects) = s.sad_rain_elapsed(s.generation);
    assert_eq!(again, s);
    assert!(effects.is_empty());
}

#[test]
fn accept_is_terminal_and_fires_once() {
    let (s, effects) = WidgetState::new().accept();
    assert!(s.is_accepted());
    assert_eq!(s.decline_count(), None);
    assert_eq!(s.message(), None);
    assert_eq!(
        effects.as_slice(),
        &[
            Effect::ShowCelebration,
            Effect::LaunchConfetti,
            Effect::PlayRewardAudio,
        ]
    );

    let (again, effects) = s.accept();
    assert_eq!(again, s);
    assert!(effects.is_empty());
}

#[test]
fn decline_after_accept_does_not_alter_state() {
    let accepted = decline_n(3).accept().0;
    let (s, effects) = accepted.decline();
    assert_eq!(s, accepted);
    assert!(effects.is_empty());
    let (s, effects) = accepted.reduce(Event::Decline);
    assert_eq!(s, accepted);
    assert!(effects.is_empty());
}

#[test]
fn accept_supersedes_pending_sad_rain() {
    let declined = decline_n(2);
    assert!(declined.sad_rain_visible);
    let pending = declined.generation;

    let (accepted, effects) = declined.accept();
    assert!(!accepted.sad_rain_visible);
    assert!(accepted.generation > pending);
    assert_eq!(effects[0], Effect::HideSadRain);
    assert_eq!(
        effects
            .iter()
            .filter(|e| **e == Effect::LaunchConfetti)
            .count(),
        1
    );

    let (after, effects) = accepted.sad_rain_elapsed(pending);
    assert_eq!(after, accepted);
    assert!(effects.is_empty());
}

#[test]
fn accept_is_valid_after_giving_up() {
    let (s, effects) = decline_n(9).reduce(Event::Accept);
    assert!(s.is_accepted());
    assert!(effects.contains(&Effect::PlayRewardAudio));
}
