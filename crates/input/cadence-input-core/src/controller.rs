//! Controller: owns triggers and drives them once per frame.
//!
//! Triggers are updated in insertion order. Removal is deferred: requests are
//! queued (also from handlers running inside `update`) and applied at the start
//! of the next enabled `update`, before any trigger runs.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::commands::CommandTable;
use crate::config::ControllerConfig;
use crate::error::InputError;
use crate::ids::{IdAllocator, TriggerId};
use crate::trigger::Trigger;

/// A trigger that fired during one `update`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerFired {
    pub trigger: TriggerId,
    /// Command bound to the trigger, if any.
    pub command: Option<String>,
}

/// Shared handle onto a controller's deferred removal queue.
#[derive(Clone, Debug, Default)]
pub struct RemovalHandle {
    queue: Rc<RefCell<Vec<TriggerId>>>,
}

impl RemovalHandle {
    /// Queue `id` for removal on the next update.
    pub fn request(&self, id: TriggerId) {
        let mut queue = self.queue.borrow_mut();
        if !queue.contains(&id) {
            queue.push(id);
        }
    }

    pub fn is_pending(&self, id: TriggerId) -> bool {
        self.queue.borrow().contains(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn take(&self) -> Vec<TriggerId> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

struct Entry<S> {
    id: TriggerId,
    trigger: Box<dyn Trigger<S>>,
    command: Option<String>,
}

pub struct Controller<S = ()> {
    entries: Vec<Entry<S>>,
    ids: IdAllocator,
    removals: RemovalHandle,
    config: ControllerConfig,
}

impl<S> Default for Controller<S> {
    fn default() -> Self {
        Self::with_config(ControllerConfig::default())
    }
}

impl<S> Controller<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            entries: Vec::new(),
            ids: IdAllocator::new(),
            removals: RemovalHandle::default(),
            config,
        }
    }

    pub fn add_trigger(&mut self, trigger: impl Trigger<S> + 'static) -> TriggerId {
        let id = self.ids.alloc_trigger();
        self.entries.push(Entry {
            id,
            trigger: Box::new(trigger),
            command: None,
        });
        debug!("added {id} ({} triggers)", self.entries.len());
        id
    }

    /// Queue `id` for removal. Returns false when the controller does not own it.
    pub fn remove_trigger(&mut self, id: TriggerId) -> bool {
        if !self.contains(id) {
            warn!("ignoring removal of unknown {id}");
            return false;
        }
        self.removals.request(id);
        debug!("queued removal of {id}");
        true
    }

    /// Handle for requesting removals from inside trigger handlers.
    pub fn removal_handle(&self) -> RemovalHandle {
        self.removals.clone()
    }

    /// Run one frame: apply queued removals, then update every trigger in order.
    /// Does nothing while the controller is disabled.
    pub fn update(&mut self, state: &S) -> Vec<TriggerFired> {
        if !self.config.enabled {
            return Vec::new();
        }
        self.apply_removals();

        let mut fired = Vec::new();
        for entry in self.entries.iter_mut() {
            if entry.trigger.update(state) {
                trace!("{} fired", entry.id);
                fired.push(TriggerFired {
                    trigger: entry.id,
                    command: entry.command.clone(),
                });
            }
        }
        fired
    }

    fn apply_removals(&mut self) {
        for id in self.removals.take() {
            match self.entries.iter().position(|e| e.id == id) {
                Some(index) => {
                    self.entries.remove(index);
                    debug!("removed {id}");
                }
                None => warn!("ignoring removal of unknown {id}"),
            }
        }
    }

    #[inline]
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn trigger_ids(&self) -> impl Iterator<Item = TriggerId> + '_ {
        self.entries.iter().map(|e| e.id)
    }

    /// Bind a registered command to a trigger; its name is reported in
    /// [`TriggerFired::command`] whenever the trigger fires.
    pub fn bind_command(
        &mut self,
        id: TriggerId,
        name: &str,
        commands: &CommandTable,
    ) -> Result<(), InputError> {
        if !commands.contains(name) {
            return Err(InputError::UnknownCommand {
                name: name.to_string(),
            });
        }
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(InputError::TriggerNotFound { id })?;
        entry.command = Some(name.to_string());
        debug!("bound command '{name}' to {id}");
        Ok(())
    }

    pub fn unbind_command(&mut self, id: TriggerId) -> Option<String> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .and_then(|e| e.command.take())
    }
}

impl<S> fmt::Debug for Controller<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("triggers", &self.entries.len())
            .field("pending_removals", &self.removals.pending())
            .field("config", &self.config)
            .finish()
    }
}
