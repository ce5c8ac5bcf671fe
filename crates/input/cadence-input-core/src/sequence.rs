//! Sequence trigger: sub-triggers that must fire in order on successive cycles.
//!
//! Only the sub-trigger at the cursor is updated each cycle; the others are
//! observed so their edges track the input without firing. When the cursor step
//! fires the cursor moves to the next one; after the last sub-trigger fires the
//! cursor wraps to the first and the sequence itself fires.

use std::fmt;

use log::trace;

use crate::config::SequenceConfig;
use crate::trigger::{Handler, Trigger, TriggerState};

pub struct SequenceTrigger<S> {
    steps: Vec<Box<dyn Trigger<S>>>,
    cursor: usize,
    cycles_without_progress: u32,
    config: SequenceConfig,
    handlers: Vec<Handler>,
    state: TriggerState,
}

impl<S> Default for SequenceTrigger<S> {
    fn default() -> Self {
        Self::with_config(SequenceConfig::default())
    }
}

impl<S> SequenceTrigger<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            steps: Vec::new(),
            cursor: 0,
            cycles_without_progress: 0,
            config,
            handlers: Vec::new(),
            state: TriggerState::Idle,
        }
    }

    pub fn then(mut self, step: impl Trigger<S> + 'static) -> Self {
        self.push(step);
        self
    }

    pub fn push(&mut self, step: impl Trigger<S> + 'static) {
        self.steps.push(Box::new(step));
    }

    /// Register a handler run each time the whole sequence completes.
    pub fn on_sequence_completed(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.push(Box::new(handler));
    }

    /// Index of the sub-trigger expected next.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Start over from the first sub-trigger.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.cycles_without_progress = 0;
    }

    fn note_miss(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cycles_without_progress = self.cycles_without_progress.saturating_add(1);
        if let Some(max_gap) = self.config.max_gap {
            if self.cycles_without_progress >= max_gap {
                trace!(
                    "sequence reset at step {} after {} idle cycles",
                    self.cursor,
                    self.cycles_without_progress
                );
                self.reset();
            }
        }
    }
}

impl<S> Trigger<S> for SequenceTrigger<S> {
    fn update(&mut self, state: &S) -> bool {
        self.state = TriggerState::Idle;
        let cursor = self.cursor;
        let Some(step) = self.steps.get_mut(cursor) else {
            return false;
        };
        let fired = step.update(state);
        for (index, other) in self.steps.iter_mut().enumerate() {
            if index != cursor {
                other.observe(state);
            }
        }

        if !fired {
            self.note_miss();
            return false;
        }

        self.cycles_without_progress = 0;
        self.cursor += 1;
        if self.cursor < self.steps.len() {
            trace!("sequence advanced to step {}", self.cursor);
            return false;
        }

        self.cursor = 0;
        trace!("sequence of {} steps completed", self.steps.len());
        for handler in self.handlers.iter_mut() {
            handler();
        }
        self.state = TriggerState::Fired;
        true
    }

    fn observe(&mut self, state: &S) {
        for step in self.steps.iter_mut() {
            step.observe(state);
        }
    }

    #[inline]
    fn state(&self) -> TriggerState {
        self.state
    }
}

impl<S> fmt::Debug for SequenceTrigger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequenceTrigger")
            .field("steps", &self.steps.len())
            .field("cursor", &self.cursor)
            .field("config", &self.config)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::{KeyCondition, ProbeCondition};
    use crate::state::InputState;
    use crate::trigger::ConditionTrigger;

    fn on(flag: usize) -> ConditionTrigger<[bool; 3]> {
        ConditionTrigger::new().with_condition(ProbeCondition::new(move |s: &[bool; 3]| s[flag]))
    }

    #[test]
    fn steps_must_fire_in_order() {
        let mut seq = SequenceTrigger::new().then(on(0)).then(on(1));
        // Step 1 satisfied first is ignored while the cursor waits for step 0.
        assert!(!seq.update(&[false, true, false]));
        assert_eq!(seq.cursor(), 0);
        assert!(!seq.update(&[true, false, false]));
        assert_eq!(seq.cursor(), 1);
        assert!(seq.update(&[false, true, false]));
        assert_eq!(seq.cursor(), 0);
        assert_eq!(seq.state(), TriggerState::Fired);
        assert!(!seq.update(&[false, false, false]));
        assert_eq!(seq.state(), TriggerState::Idle);
    }

    #[test]
    fn held_key_counts_as_one_press() {
        let pressed = |key: &'static str| {
            ConditionTrigger::<InputState<&'static str>>::new()
                .with_condition(KeyCondition::pressed(key))
        };
        let mut seq = SequenceTrigger::new().then(pressed("up")).then(pressed("up"));
        let mut state = InputState::new();

        state.press("up");
        assert!(!seq.update(&state));
        assert!(!seq.update(&state));
        assert_eq!(seq.cursor(), 1);

        state.release(&"up");
        assert!(!seq.update(&state));
        state.press("up");
        assert!(seq.update(&state));
    }

    #[test]
    fn max_gap_restarts_sequence() {
        let mut seq = SequenceTrigger::with_config(SequenceConfig { max_gap: Some(2) })
            .then(on(0))
            .then(on(1));
        seq.update(&[true, false, false]);
        assert_eq!(seq.cursor(), 1);
        seq.update(&[false, false, false]);
        assert_eq!(seq.cursor(), 1);
        seq.update(&[false, false, false]);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn empty_sequence_is_inert() {
        let mut seq: SequenceTrigger<[bool; 3]> = SequenceTrigger::new();
        assert!(seq.is_empty());
        assert!(!seq.update(&[true, true, true]));
    }
}
