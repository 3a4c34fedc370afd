//! The demo's phase state machine, kept pure so the schedule and gating
//! rules can be tested without a browser. The component layer owns the
//! actual timers and feeds events back in.

/// Step reveals inside the intro sub-sequence.
pub const INTRO_STEP_SCHEDULE_MS: [u32; 4] = [600, 1_200, 1_800, 2_800];
/// Intro completion signal; transitions to `Before`.
pub const INTRO_DONE_MS: u32 = 3_400;

pub const BEFORE_DWELL_MS: u32 = 7_000;
pub const AFTER_DWELL_MS: u32 = 6_000;
pub const CYCLING_DWELL_MS: u32 = 6_000;

pub const BEFORE_TO_AFTER_FADE_MS: u32 = 300;
pub const CYCLE_FADE_MS: u32 = 250;
pub const MANUAL_SELECT_FADE_MS: u32 = 200;
pub const MANUAL_TOGGLE_FADE_MS: u32 = 250;

/// "Before" template cycles a placeholder city name at this interval,
/// independent of the phase timers.
pub const BEFORE_NAME_CYCLE_MS: u32 = 600;

/// Streaming reveal rate for the "after" text.
pub const STREAM_TICK_MS: u32 = 6;
pub const STREAM_CHARS_PER_TICK: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Intro,
    Before,
    After,
    Cycling,
}

impl Phase {
    /// `After` and `Cycling` render identically; they differ only in timer
    /// semantics.
    pub fn is_after_view(self) -> bool {
        matches!(self, Phase::After | Phase::Cycling)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DemoState {
    pub phase: Phase,
    pub city_idx: usize,
    pub city_count: usize,
    /// Once set, auto-advance stays disabled for the rest of this instance.
    pub manual_mode: bool,
    pub visible: bool,
    /// A cross-fade is in flight; the card renders hidden. Every event other
    /// than `BeginFade` resolves or cancels it, so a dropped fade timer can
    /// never leave the card stuck hidden.
    pub fading: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DemoEvent {
    /// The intro sub-sequence finished its fixed schedule.
    IntroDone,
    /// A cross-fade started; the matching transition event ends it.
    BeginFade,
    /// The armed auto-advance timer fired (post-fade).
    AutoAdvance,
    SelectCity(usize),
    ShowBefore,
    ShowAfter,
    VisibilityChanged(bool),
}

/// What the component should arm next in auto mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AutoStep {
    pub dwell_ms: u32,
    /// Cross-fade before the state change; 0 means no visual change.
    pub fade_ms: u32,
}

impl DemoState {
    pub fn new(city_count: usize) -> Self {
        DemoState {
            phase: Phase::Intro,
            city_idx: 0,
            city_count,
            manual_mode: false,
            visible: true,
            fading: false,
        }
    }

    /// The auto-advance timer to arm for the current state, or `None` while
    /// the intro runs its own schedule, after any manual interaction, or
    /// while the container is out of view.
    pub fn auto_step(&self) -> Option<AutoStep> {
        if self.manual_mode || !self.visible {
            return None;
        }
        match self.phase {
            Phase::Intro => None,
            Phase::Before => Some(AutoStep {
                dwell_ms: BEFORE_DWELL_MS,
                fade_ms: BEFORE_TO_AFTER_FADE_MS,
            }),
            Phase::After => Some(AutoStep {
                dwell_ms: AFTER_DWELL_MS,
                fade_ms: 0,
            }),
            Phase::Cycling => Some(AutoStep {
                dwell_ms: CYCLING_DWELL_MS,
                fade_ms: CYCLE_FADE_MS,
            }),
        }
    }

    pub fn apply(&self, event: DemoEvent) -> DemoState {
        let mut next = self.clone();
        if event != DemoEvent::BeginFade {
            next.fading = false;
        }
        match event {
            DemoEvent::BeginFade => next.fading = true,
            DemoEvent::IntroDone => {
                if next.phase == Phase::Intro {
                    next.phase = Phase::Before;
                }
            }
            DemoEvent::AutoAdvance => {
                // A fired timer that raced a manual action or a visibility
                // change must not flip state.
                if next.manual_mode || !next.visible {
                    return next;
                }
                match next.phase {
                    Phase::Intro => {}
                    Phase::Before => next.phase = Phase::After,
                    Phase::After => next.phase = Phase::Cycling,
                    Phase::Cycling => {
                        next.city_idx = (next.city_idx + 1) % next.city_count.max(1);
                    }
                }
            }
            DemoEvent::SelectCity(i) => {
                if i < next.city_count {
                    next.manual_mode = true;
                    next.city_idx = i;
                    next.phase = Phase::After;
                }
            }
            DemoEvent::ShowBefore => {
                next.manual_mode = true;
                next.phase = Phase::Before;
            }
            DemoEvent::ShowAfter => {
                next.manual_mode = true;
                next.phase = Phase::After;
            }
            DemoEvent::VisibilityChanged(visible) => next.visible = visible,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the auto schedule: fires the armed step and applies the event,
    /// returning elapsed milliseconds.
    fn fire_auto(state: &mut DemoState) -> u32 {
        let step = state.auto_step().expect("expected an armed auto step");
        *state = state.apply(DemoEvent::AutoAdvance);
        step.dwell_ms + step.fade_ms
    }

    #[test]
    fn auto_schedule_follows_fixed_timings() {
        let mut state = DemoState::new(5);
        assert_eq!(state.phase, Phase::Intro);
        assert_eq!(state.auto_step(), None);

        state = state.apply(DemoEvent::IntroDone);
        assert_eq!(state.phase, Phase::Before);
        assert_eq!(
            state.auto_step(),
            Some(AutoStep { dwell_ms: 7_000, fade_ms: 300 })
        );

        fire_auto(&mut state);
        assert_eq!(state.phase, Phase::After);
        assert_eq!(
            state.auto_step(),
            Some(AutoStep { dwell_ms: 6_000, fade_ms: 0 })
        );

        fire_auto(&mut state);
        assert_eq!(state.phase, Phase::Cycling);

        // Cycling increments the index by exactly 1 per tick, mod city count.
        for expected in [1, 2, 3, 4, 0, 1] {
            assert_eq!(
                state.auto_step(),
                Some(AutoStep { dwell_ms: 6_000, fade_ms: 250 })
            );
            fire_auto(&mut state);
            assert_eq!(state.phase, Phase::Cycling);
            assert_eq!(state.city_idx, expected);
        }
    }

    #[test]
    fn manual_action_permanently_disables_auto_advance() {
        let mut state = DemoState::new(5).apply(DemoEvent::IntroDone);
        state = state.apply(DemoEvent::SelectCity(2));
        assert!(state.manual_mode);
        assert_eq!(state.phase, Phase::After);
        assert_eq!(state.city_idx, 2);
        assert_eq!(state.auto_step(), None);

        // A straggler timer firing afterwards changes nothing.
        let frozen = state.apply(DemoEvent::AutoAdvance);
        assert_eq!(frozen, state);

        // Toggles also latch manual mode.
        let toggled = DemoState::new(5)
            .apply(DemoEvent::IntroDone)
            .apply(DemoEvent::ShowAfter);
        assert!(toggled.manual_mode);
        assert_eq!(toggled.auto_step(), None);
    }

    #[test]
    fn invisible_container_suspends_transitions() {
        let mut state = DemoState::new(5).apply(DemoEvent::IntroDone);
        state = state.apply(DemoEvent::VisibilityChanged(false));
        assert_eq!(state.auto_step(), None);

        // Even if an armed timer slips through, no state change occurs.
        let frozen = state.apply(DemoEvent::AutoAdvance);
        assert_eq!(frozen.phase, Phase::Before);

        // Scrolling back resumes the schedule without manual mode.
        state = state.apply(DemoEvent::VisibilityChanged(true));
        assert!(state.auto_step().is_some());
        assert!(!state.manual_mode);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let state = DemoState::new(5).apply(DemoEvent::IntroDone);
        let next = state.apply(DemoEvent::SelectCity(9));
        assert_eq!(next.city_idx, 0);
        assert_eq!(next.phase, Phase::Before);
    }

    #[test]
    fn visibility_change_clears_a_pending_fade() {
        // A visibility flip tears the fade timer down before it can fire the
        // transition event, so the flip itself must resolve the fade; the
        // card would otherwise stay hidden, with no timer left to unhide it
        // in manual mode.
        let mut state = DemoState::new(5)
            .apply(DemoEvent::IntroDone)
            .apply(DemoEvent::SelectCity(2));
        state = state.apply(DemoEvent::BeginFade);
        assert!(state.fading);

        let hidden = state.apply(DemoEvent::VisibilityChanged(false));
        assert!(!hidden.fading);
        assert_eq!(hidden.phase, Phase::After);
        assert_eq!(hidden.city_idx, 2);

        let shown = state.apply(DemoEvent::VisibilityChanged(true));
        assert!(!shown.fading);
    }

    #[test]
    fn transition_events_end_their_fade() {
        let faded = DemoState::new(5)
            .apply(DemoEvent::IntroDone)
            .apply(DemoEvent::BeginFade);
        assert!(faded.fading);

        assert!(!faded.apply(DemoEvent::AutoAdvance).fading);
        assert!(!faded.apply(DemoEvent::SelectCity(1)).fading);
        assert!(!faded.apply(DemoEvent::ShowAfter).fading);
        assert!(!faded.apply(DemoEvent::ShowBefore).fading);
    }

    #[test]
    fn fade_flag_does_not_alter_the_schedule() {
        let state = DemoState::new(5).apply(DemoEvent::IntroDone);
        let faded = state.apply(DemoEvent::BeginFade);
        assert_eq!(faded.auto_step(), state.auto_step());
        assert_eq!(faded.phase, state.phase);
    }

    #[test]
    fn intro_done_only_applies_from_intro() {
        let state = DemoState::new(5)
            .apply(DemoEvent::IntroDone)
            .apply(DemoEvent::ShowAfter);
        let next = state.apply(DemoEvent::IntroDone);
        assert_eq!(next.phase, Phase::After);
    }
}
