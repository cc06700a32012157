//! src/model/registry.rs
//! ============================================================================
//! # CommandRegistry: Explicit Catalog of Live Command Objects
//!
//! Built once at application startup and passed by reference to consumers
//! (menu builder, toolbar, shortcut dispatcher, view bootstrap); there is no
//! ambient global catalog. Commands are held as `Rc<Command>` so consumers
//! can keep their own handles; iteration order is registration order, which
//! for the builtin catalog is menu declaration order.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use compact_str::CompactString;
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::config::CommandConfig;
use crate::error::AppError;
use crate::model::catalog::{BUILTIN_COMMANDS, CommandId, CommandSpec};
use crate::model::command::Command;

#[derive(Default)]
pub struct CommandRegistry {
    commands: IndexMap<CommandId, Rc<Command>>,
}

impl CommandRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Create a registry populated with the builtin catalog.
    #[must_use]
    pub fn with_builtin() -> Self {
        Self::with_builtin_and_overrides(&CommandConfig::default())
    }

    /// Create a registry populated with the builtin catalog, with user config
    /// overrides merged into each entry before construction.
    ///
    /// Override keys that do not name a builtin command are logged and
    /// skipped; a stale config file must not take the editor down.
    #[must_use]
    pub fn with_builtin_and_overrides(config: &CommandConfig) -> Self {
        let mut registry: Self = Self::new();

        for key in config.command_keys() {
            if CommandId::from_str(key).is_err() {
                warn!(key, "ignoring config override for unknown command");
            }
        }

        for spec in BUILTIN_COMMANDS {
            let command: Command = build_command(spec, config);

            // Catalog ids are unique (enforced by test), so this cannot fail.
            let _ = registry.register(command);
        }

        info!("command registry initialized with {} commands", registry.len());

        registry
    }

    /// Add a command. Fails if a command with the same id is already
    /// registered.
    pub fn register(&mut self, command: Command) -> Result<Rc<Command>, AppError> {
        let id: CommandId = command.id();

        if self.commands.contains_key(&id) {
            return Err(AppError::DuplicateCommand(id));
        }

        let command: Rc<Command> = Rc::new(command);
        self.commands.insert(id, Rc::clone(&command));

        Ok(command)
    }

    /// Look up a command by id.
    #[must_use]
    pub fn get(&self, id: CommandId) -> Option<&Rc<Command>> {
        self.commands.get(&id)
    }

    /// Iterate commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Rc<Command>> {
        self.commands.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Merge one catalog row with its config override, if any.
fn build_command(spec: &CommandSpec, config: &CommandConfig) -> Command {
    let mut command: Command = Command::from_spec(spec);

    if let Some(over) = config.get(spec.id) {
        if let Some(label) = &over.label {
            command = command.label(label.as_str());
        }
        if let Some(shortcuts) = &over.shortcuts {
            command = command.shortcuts(shortcuts.iter().map(|s| CompactString::from(s.as_str())));
        }
        if let Some(enabled) = over.enabled {
            command = command.enabled(enabled);
        }
    }

    command
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("command_count", &self.commands.len())
            .finish()
    }
}
