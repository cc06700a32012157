//! src/lib.rs
//! ============================================================================
//! # mindmap-core: Command Catalog for the Mindmap Editor
//!
//! The invocable-action layer of the editor: a declarative catalog of
//! commands (id, label, icon, shortcuts, description), live `Command` objects
//! with an attachable handler and an enabled flag, synchronous change
//! notifications for UI chrome, and the registry that owns it all.
//!
//! Menus, toolbars, the shortcut dispatcher, the undo engine and document
//! persistence are consumers of this crate, not part of it.

pub mod error;

pub mod config;

pub mod logging;

pub mod model {
    pub mod catalog;
    pub use catalog::{BUILTIN_COMMANDS, CommandId, CommandSpec};

    pub mod command;
    pub use command::{Command, CommandEvent, Shortcuts};

    pub mod notifier;
    pub use notifier::{Notifier, SubscriptionId};

    pub mod registry;
    pub use registry::CommandRegistry;
}

pub use config::{CommandConfig, CommandOverride};

pub use error::AppError;

pub use logging::{LogRotation, Logger, LoggerConfig};

pub use model::{
    BUILTIN_COMMANDS, Command, CommandEvent, CommandId, CommandRegistry, CommandSpec, Notifier,
    SubscriptionId,
};
