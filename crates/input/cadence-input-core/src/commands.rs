use std::fmt;

use hashbrown::HashMap;
use log::debug;

use crate::controller::TriggerFired;
use crate::error::InputError;

/// Callback registered under a command name.
pub type CommandHandler = Box<dyn FnMut()>;

/// Named command handlers. Triggers refer to commands by name through
/// [`crate::Controller::bind_command`].
#[derive(Default)]
pub struct CommandTable {
    handlers: HashMap<String, CommandHandler>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`. Returns true if it replaced an existing one.
    pub fn register(&mut self, name: impl Into<String>, handler: impl FnMut() + 'static) -> bool {
        let name = name.into();
        debug!("registered command '{name}'");
        self.handlers.insert(name, Box::new(handler)).is_some()
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.handlers.remove(name).is_some()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn execute(&mut self, name: &str) -> Result<(), InputError> {
        let handler = self
            .handlers
            .get_mut(name)
            .ok_or_else(|| InputError::UnknownCommand {
                name: name.to_string(),
            })?;
        handler();
        Ok(())
    }

    /// Execute the commands bound to `events`, in order. Returns how many ran.
    pub fn dispatch(&mut self, events: &[TriggerFired]) -> Result<usize, InputError> {
        let mut executed = 0;
        for name in events.iter().filter_map(|e| e.command.as_deref()) {
            self.execute(name)?;
            executed += 1;
        }
        Ok(executed)
    }
}

impl fmt::Debug for CommandTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("CommandTable").field("commands", &names).finish()
    }
}
