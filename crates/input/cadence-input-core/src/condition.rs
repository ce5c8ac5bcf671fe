//! Conditions: boolean predicates sampled once per cycle, with edge detection.
//!
//! A condition is first `update`d with the frame's state snapshot and then
//! asked `is_met`. In the edge modes the transition flag is consumed by the
//! read, so a single press is reported exactly once.

use std::hash::Hash;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::state::InputState;

pub trait Condition<S> {
    /// Sample the state for this cycle.
    fn update(&mut self, state: &S);

    /// Whether the condition holds for this cycle. Edge modes consume their flag.
    fn is_met(&mut self) -> bool;

    /// Sample the state without reporting it. An edge seen here is consumed, so
    /// a later `is_met` only reports transitions from later cycles.
    fn observe(&mut self, state: &S) {
        self.update(state);
        let _ = self.is_met();
    }
}

/// What a condition reports from its sampled signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConditionMode {
    /// Met while the signal is true.
    #[default]
    Level,
    /// Met once per false→true transition.
    Activated,
    /// Met once per true→false transition.
    Deactivated,
}

/// Current value plus read-once transition flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeState {
    pub current: bool,
    pub was_activated: bool,
    pub was_deactivated: bool,
}

impl EdgeState {
    pub fn sample(&mut self, value: bool) {
        if value && !self.current {
            self.was_activated = true;
        } else if !value && self.current {
            self.was_deactivated = true;
        }
        self.current = value;
    }

    #[inline]
    pub fn take_activated(&mut self) -> bool {
        std::mem::take(&mut self.was_activated)
    }

    #[inline]
    pub fn take_deactivated(&mut self) -> bool {
        std::mem::take(&mut self.was_deactivated)
    }

    pub fn read(&mut self, mode: ConditionMode) -> bool {
        match mode {
            ConditionMode::Level => self.current,
            ConditionMode::Activated => self.take_activated(),
            ConditionMode::Deactivated => self.take_deactivated(),
        }
    }
}

/// Condition backed by a probe closure over the state snapshot.
pub struct ProbeCondition<S, F> {
    probe: F,
    mode: ConditionMode,
    edges: EdgeState,
    _state: PhantomData<fn(&S)>,
}

impl<S, F> ProbeCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    pub fn with_mode(probe: F, mode: ConditionMode) -> Self {
        Self {
            probe,
            mode,
            edges: EdgeState::default(),
            _state: PhantomData,
        }
    }

    /// Met while the probe returns true.
    pub fn new(probe: F) -> Self {
        Self::with_mode(probe, ConditionMode::Level)
    }

    pub fn activated(probe: F) -> Self {
        Self::with_mode(probe, ConditionMode::Activated)
    }

    pub fn deactivated(probe: F) -> Self {
        Self::with_mode(probe, ConditionMode::Deactivated)
    }

    #[inline]
    pub fn mode(&self) -> ConditionMode {
        self.mode
    }

    #[inline]
    pub fn edges(&self) -> EdgeState {
        self.edges
    }
}

impl<S, F> Condition<S> for ProbeCondition<S, F>
where
    F: Fn(&S) -> bool,
{
    fn update(&mut self, state: &S) {
        let value = (self.probe)(state);
        self.edges.sample(value);
    }

    fn is_met(&mut self) -> bool {
        self.edges.read(self.mode)
    }
}

/// Condition on a single key of an [`InputState`].
#[derive(Clone, Debug)]
pub struct KeyCondition<K> {
    key: K,
    mode: ConditionMode,
    edges: EdgeState,
}

impl<K> KeyCondition<K> {
    pub fn with_mode(key: K, mode: ConditionMode) -> Self {
        Self {
            key,
            mode,
            edges: EdgeState::default(),
        }
    }

    /// Met while the key is held.
    pub fn held(key: K) -> Self {
        Self::with_mode(key, ConditionMode::Level)
    }

    /// Met on the frame the key goes down.
    pub fn pressed(key: K) -> Self {
        Self::with_mode(key, ConditionMode::Activated)
    }

    /// Met on the frame the key comes up.
    pub fn released(key: K) -> Self {
        Self::with_mode(key, ConditionMode::Deactivated)
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }
}

impl<K: Eq + Hash> Condition<InputState<K>> for KeyCondition<K> {
    fn update(&mut self, state: &InputState<K>) {
        self.edges.sample(state.is_down(&self.key));
    }

    fn is_met(&mut self) -> bool {
        self.edges.read(self.mode)
    }
}
