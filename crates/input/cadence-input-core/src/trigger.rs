use std::fmt;

use serde::{Deserialize, Serialize};

use crate::condition::Condition;

/// Callback run when a trigger fires.
pub type Handler = Box<dyn FnMut()>;

/// Outcome of a trigger's most recent update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerState {
    #[default]
    Idle,
    Fired,
}

pub trait Trigger<S> {
    /// Run one evaluation cycle against `state`. Returns true when the trigger fired.
    fn update(&mut self, state: &S) -> bool;

    /// Keep conditions in step with `state` without firing.
    fn observe(&mut self, state: &S);

    /// State left by the last `update`.
    fn state(&self) -> TriggerState;
}

/// Fires when every one of its conditions is met in the same cycle.
pub struct ConditionTrigger<S> {
    conditions: Vec<Box<dyn Condition<S>>>,
    handlers: Vec<Handler>,
    state: TriggerState,
}

impl<S> Default for ConditionTrigger<S> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            handlers: Vec::new(),
            state: TriggerState::Idle,
        }
    }
}

impl<S> ConditionTrigger<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_condition(mut self, condition: impl Condition<S> + 'static) -> Self {
        self.add_condition(condition);
        self
    }

    pub fn add_condition(&mut self, condition: impl Condition<S> + 'static) {
        self.conditions.push(Box::new(condition));
    }

    /// Register a handler for the "conditions met" notification.
    pub fn on_conditions_met(&mut self, handler: impl FnMut() + 'static) {
        self.handlers.push(Box::new(handler));
    }

    pub fn condition_count(&self) -> usize {
        self.conditions.len()
    }
}

impl<S> Trigger<S> for ConditionTrigger<S> {
    fn update(&mut self, state: &S) -> bool {
        for condition in self.conditions.iter_mut() {
            condition.update(state);
        }
        // `&=` keeps evaluating after a miss so edge flags are consumed every cycle.
        let mut all_met = !self.conditions.is_empty();
        for condition in self.conditions.iter_mut() {
            all_met &= condition.is_met();
        }

        if all_met {
            for handler in self.handlers.iter_mut() {
                handler();
            }
            self.state = TriggerState::Fired;
        } else {
            self.state = TriggerState::Idle;
        }
        all_met
    }

    fn observe(&mut self, state: &S) {
        for condition in self.conditions.iter_mut() {
            condition.observe(state);
        }
    }

    #[inline]
    fn state(&self) -> TriggerState {
        self.state
    }
}

impl<S> fmt::Debug for ConditionTrigger<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionTrigger")
            .field("conditions", &self.conditions.len())
            .field("handlers", &self.handlers.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::condition::ProbeCondition;

    #[test]
    fn fires_when_all_conditions_met() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut trigger = ConditionTrigger::new()
            .with_condition(ProbeCondition::new(|s: &(bool, bool)| s.0))
            .with_condition(ProbeCondition::new(|s: &(bool, bool)| s.1));
        trigger.on_conditions_met(move || counter.set(counter.get() + 1));

        assert!(!trigger.update(&(true, false)));
        assert_eq!(trigger.state(), TriggerState::Idle);
        assert!(trigger.update(&(true, true)));
        assert_eq!(trigger.state(), TriggerState::Fired);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn observe_never_fires() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut trigger = ConditionTrigger::new()
            .with_condition(ProbeCondition::activated(|s: &(bool, bool)| s.0));
        trigger.on_conditions_met(move || counter.set(counter.get() + 1));

        trigger.observe(&(true, false));
        assert_eq!(hits.get(), 0);
        // The press happened while observing; holding it does not fire.
        assert!(!trigger.update(&(true, false)));
    }

    #[test]
    fn empty_trigger_never_fires() {
        let mut trigger: ConditionTrigger<()> = ConditionTrigger::new();
        assert!(!trigger.update(&()));
        assert_eq!(trigger.condition_count(), 0);
    }

    #[test]
    fn edge_is_consumed_even_when_another_condition_fails() {
        // First condition fails, second sees its activation edge in the same cycle.
        let mut trigger = ConditionTrigger::new()
            .with_condition(ProbeCondition::new(|s: &(bool, bool)| s.0))
            .with_condition(ProbeCondition::activated(|s: &(bool, bool)| s.1));

        assert!(!trigger.update(&(false, true)));
        // The edge was read above; holding the key does not fire later.
        assert!(!trigger.update(&(true, true)));
    }
}
