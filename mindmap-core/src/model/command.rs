//! src/model/command.rs
//! ============================================================================
//! # Command: One Invocable, Bindable, Toggleable UI Action
//!
//! A `Command` bundles a stable identifier, display metadata, keyboard
//! shortcut strings and an optional handler function, and notifies observers
//! when its state changes. Menus, toolbars and the shortcut dispatcher read
//! the metadata; whichever view currently owns the action attaches and
//! detaches the handler as it activates and deactivates.
//!
//! Commands live for the application's lifetime and are shared as
//! `Rc<Command>` handles out of the [`CommandRegistry`](crate::model::registry::CommandRegistry).
//! Everything is single-threaded: interior mutability via `Cell`/`RefCell`,
//! synchronous event delivery, and full reentrancy (a subscriber or handler
//! may call back into the command mid-notification).

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use compact_str::CompactString;
use smallvec::SmallVec;
use tracing::debug;

use super::catalog::{CommandId, CommandSpec};
use super::notifier::{Notifier, SubscriptionId};

/// State change notifications emitted by a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    /// A handler was installed via [`Command::set_handler`].
    HandlerRegistered,

    /// The handler was cleared, either by [`Command::remove_handler`] or by
    /// replacement in [`Command::set_handler`].
    HandlerRemoved,

    /// The enabled flag changed; carries the new value.
    EnabledChanged(bool),
}

type Handler = Rc<dyn Fn()>;

/// Most commands carry one or two shortcut strings; none allocates.
pub type Shortcuts = SmallVec<[CompactString; 2]>;

pub struct Command {
    id: CommandId,
    label: Option<CompactString>,
    icon: Option<CompactString>,
    description: Option<CompactString>,
    shortcuts: Shortcuts,

    handler: RefCell<Option<Handler>>,
    enabled: Cell<bool>,
    events: Notifier<CommandEvent>,
}

impl Command {
    /// Create a bare command: no metadata, no handler, disabled.
    #[must_use]
    pub fn new(id: CommandId) -> Self {
        Self {
            id,
            label: None,
            icon: None,
            description: None,
            shortcuts: SmallVec::new(),
            handler: RefCell::new(None),
            enabled: Cell::new(false),
            events: Notifier::new(),
        }
    }

    /// Build a command from one catalog row.
    #[must_use]
    pub fn from_spec(spec: &CommandSpec) -> Self {
        let mut command: Self = Self::new(spec.id);

        command.label = spec.label.map(CompactString::from);
        command.icon = spec.icon.map(CompactString::from);
        command.description = spec.description.map(CompactString::from);
        command.shortcuts = spec.shortcuts.iter().copied().map(CompactString::from).collect();
        command.enabled = Cell::new(spec.enabled);

        command
    }

    // Construction-time builder methods, used by the registry when merging
    // config overrides and by tests.

    #[must_use]
    pub fn label(mut self, label: impl Into<CompactString>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<CompactString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<CompactString>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn shortcut(mut self, shortcut: impl Into<CompactString>) -> Self {
        self.shortcuts.push(shortcut.into());
        self
    }

    #[must_use]
    pub fn shortcuts(mut self, shortcuts: impl IntoIterator<Item = CompactString>) -> Self {
        self.shortcuts = shortcuts.into_iter().collect();
        self
    }

    #[must_use]
    pub fn enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }

    // ------------------------------------------------------------------
    // Metadata accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn id(&self) -> CommandId {
        self.id
    }

    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn display_icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn shortcut_strings(&self) -> &[CompactString] {
        &self.shortcuts
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    #[must_use]
    pub fn has_handler(&self) -> bool {
        self.handler.borrow().is_some()
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Execute the command: invoke the attached handler, if any.
    ///
    /// A missing handler is a normal state, not an error; the command is
    /// simply inert. Whatever the handler does (including panicking) is the
    /// handler's own responsibility.
    pub fn execute(&self) {
        // Clone the handle out and drop the borrow before calling: the
        // handler may call back into this command.
        let handler: Option<Handler> = self.handler.borrow().clone();

        match handler {
            Some(handler) => {
                debug!(id = %self.id, "executing command handler");
                handler();
            }
            None => {
                debug!(id = %self.id, "execute with no handler attached");
            }
        }
    }

    /// Install `handler`, replacing any previous one.
    ///
    /// Emits [`CommandEvent::HandlerRemoved`] first when a handler was
    /// attached, then [`CommandEvent::HandlerRegistered`]. At most one
    /// handler is attached at a time.
    pub fn set_handler<F>(&self, handler: F)
    where
        F: Fn() + 'static,
    {
        let previous: Option<Handler> = self.handler.borrow_mut().take();
        if previous.is_some() {
            self.events.publish(&CommandEvent::HandlerRemoved);
        }

        *self.handler.borrow_mut() = Some(Rc::new(handler));
        self.events.publish(&CommandEvent::HandlerRegistered);
    }

    /// Clear the handler. Emits [`CommandEvent::HandlerRemoved`]
    /// unconditionally, even when no handler was attached; callers detaching
    /// a view do not need to track whether they ever wired one up.
    pub fn remove_handler(&self) {
        self.handler.borrow_mut().take();
        self.events.publish(&CommandEvent::HandlerRemoved);
    }

    /// Set the enabled flag and emit [`CommandEvent::EnabledChanged`] with
    /// the new value.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
        self.events.publish(&CommandEvent::EnabledChanged(enabled));
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Subscribe to this command's state change events.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&CommandEvent) + 'static,
    {
        self.events.subscribe(callback)
    }

    /// Remove a subscription created by [`Command::subscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("shortcuts", &self.shortcuts)
            .field("enabled", &self.enabled.get())
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn record_events(command: &Command) -> Rc<RefCell<Vec<CommandEvent>>> {
        let log: Rc<RefCell<Vec<CommandEvent>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        command.subscribe(move |event| sink.borrow_mut().push(*event));

        log
    }

    #[test]
    fn execute_without_handler_is_a_silent_noop() {
        let command = Command::new(CommandId::Undo);
        let events = record_events(&command);

        command.execute();

        assert!(events.borrow().is_empty());
        assert!(!command.has_handler());
    }

    #[test]
    fn execute_invokes_handler_exactly_once() {
        let command = Command::new(CommandId::Undo);
        let calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        command.set_handler(move || *counter.borrow_mut() += 1);
        command.execute();

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn first_set_handler_emits_only_registered() {
        let command = Command::new(CommandId::Copy);
        let events = record_events(&command);

        command.set_handler(|| {});

        assert_eq!(*events.borrow(), vec![CommandEvent::HandlerRegistered]);
    }

    #[test]
    fn replacing_handler_emits_removed_then_registered() {
        let command = Command::new(CommandId::Copy);
        let first_calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));
        let second_calls: Rc<RefCell<u32>> = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&first_calls);
        command.set_handler(move || *counter.borrow_mut() += 1);

        let events = record_events(&command);

        let counter = Rc::clone(&second_calls);
        command.set_handler(move || *counter.borrow_mut() += 1);
        command.execute();

        assert_eq!(
            *events.borrow(),
            vec![CommandEvent::HandlerRemoved, CommandEvent::HandlerRegistered]
        );
        assert_eq!(*first_calls.borrow(), 0);
        assert_eq!(*second_calls.borrow(), 1);
    }

    #[test]
    fn remove_handler_always_notifies() {
        let command = Command::new(CommandId::Paste);
        let events = record_events(&command);

        command.remove_handler();
        command.remove_handler();

        assert_eq!(
            *events.borrow(),
            vec![CommandEvent::HandlerRemoved, CommandEvent::HandlerRemoved]
        );

        command.execute(); // still a no-op
        assert!(!command.has_handler());
    }

    #[test]
    fn set_enabled_notifies_with_payload_in_order() {
        let command = Command::new(CommandId::SaveDocument);
        let events = record_events(&command);

        command.set_enabled(true);
        command.set_enabled(false);

        assert_eq!(
            *events.borrow(),
            vec![
                CommandEvent::EnabledChanged(true),
                CommandEvent::EnabledChanged(false)
            ]
        );
        assert!(!command.is_enabled());
    }

    #[test]
    fn full_lifecycle_event_sequence() {
        // Fresh command, no handler, disabled. Wire a view, enable, execute,
        // unwire. The handler must run between the enable notification and
        // the removal notification.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Step {
            Event(CommandEvent),
            HandlerCalled,
        }

        let command: Rc<Command> = Rc::new(Command::new(CommandId::CreateNode));
        assert!(!command.is_enabled());

        let log: Rc<RefCell<Vec<Step>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&log);
        command.subscribe(move |event| sink.borrow_mut().push(Step::Event(*event)));

        let sink = Rc::clone(&log);
        command.set_handler(move || sink.borrow_mut().push(Step::HandlerCalled));
        command.set_enabled(true);
        command.execute();
        command.remove_handler();

        assert_eq!(
            *log.borrow(),
            vec![
                Step::Event(CommandEvent::HandlerRegistered),
                Step::Event(CommandEvent::EnabledChanged(true)),
                Step::HandlerCalled,
                Step::Event(CommandEvent::HandlerRemoved),
            ]
        );
    }

    #[test]
    fn handler_may_reenter_the_command() {
        let command: Rc<Command> = Rc::new(Command::new(CommandId::CloseDocument));

        let inner = Rc::clone(&command);
        command.set_handler(move || {
            inner.set_enabled(false);
            inner.remove_handler();
        });

        command.set_enabled(true);
        command.execute();

        assert!(!command.is_enabled());
        assert!(!command.has_handler());

        // Handler removed itself; a second execute is inert.
        command.execute();
    }

    #[test]
    fn subscriber_may_reenter_the_command() {
        let command: Rc<Command> = Rc::new(Command::new(CommandId::Help));

        let inner = Rc::clone(&command);
        command.subscribe(move |event| {
            if matches!(event, CommandEvent::HandlerRegistered) {
                // A menu item reading state back during notification.
                assert!(inner.has_handler());
                assert!(!inner.is_enabled());
            }
        });

        command.set_handler(|| {});
    }

    #[test]
    fn from_spec_copies_catalog_metadata() {
        use crate::model::catalog::BUILTIN_COMMANDS;

        let spec = BUILTIN_COMMANDS
            .iter()
            .find(|spec| spec.id == CommandId::DeleteNode)
            .unwrap();
        let command = Command::from_spec(spec);

        assert_eq!(command.id(), CommandId::DeleteNode);
        assert_eq!(command.display_label(), Some("Apagar"));
        assert_eq!(command.display_icon(), Some("ui-icon-minusthick"));
        assert_eq!(command.shortcut_strings(), &["del", "backspace"]);
        assert!(!command.is_enabled());
    }
}
