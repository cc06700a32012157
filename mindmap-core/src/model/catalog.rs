//! src/model/catalog.rs
//! ============================================================================
//! # Catalog: Builtin Command Identifiers and Metadata Table
//!
//! Every user-invokable action in the editor has one entry here. The catalog
//! is a flat declarative table; behavior lives entirely in
//! [`Command`](crate::model::command::Command). Shortcut strings are opaque
//! data to this crate; binding them to key events is the shortcut
//! dispatcher's job.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Identifier of a builtin command. The string form (`as_str`) is the stable
/// id used in menus, config files and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    CreateNode,
    CreateSiblingNode,
    DeleteNode,
    EditNodeCaption,
    ToggleNodeFolded,
    Undo,
    Redo,
    Copy,
    Cut,
    Paste,
    NewDocument,
    OpenDocument,
    SaveDocument,
    CloseDocument,
    Help,
    Print,
    Export,
}

impl CommandId {
    /// All ids, in catalog order.
    pub const ALL: [Self; 17] = [
        Self::CreateNode,
        Self::CreateSiblingNode,
        Self::DeleteNode,
        Self::EditNodeCaption,
        Self::ToggleNodeFolded,
        Self::Undo,
        Self::Redo,
        Self::Copy,
        Self::Cut,
        Self::Paste,
        Self::NewDocument,
        Self::OpenDocument,
        Self::SaveDocument,
        Self::CloseDocument,
        Self::Help,
        Self::Print,
        Self::Export,
    ];

    /// Stable string form of the id.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateNode => "CREATE_NODE_COMMAND",
            Self::CreateSiblingNode => "CREATE_SIBLING_NODE_COMMAND",
            Self::DeleteNode => "DELETE_NODE_COMMAND",
            Self::EditNodeCaption => "EDIT_NODE_CAPTION_COMMAND",
            Self::ToggleNodeFolded => "TOGGLE_NODE_FOLDED_COMMAND",
            Self::Undo => "UNDO_COMMAND",
            Self::Redo => "REDO_COMMAND",
            Self::Copy => "COPY_COMMAND",
            Self::Cut => "CUT_COMMAND",
            Self::Paste => "PASTE_COMMAND",
            Self::NewDocument => "NEW_DOCUMENT_COMMAND",
            Self::OpenDocument => "OPEN_DOCUMENT_COMMAND",
            Self::SaveDocument => "SAVE_DOCUMENT_COMMAND",
            Self::CloseDocument => "CLOSE_DOCUMENT_COMMAND",
            Self::Help => "HELP_COMMAND",
            Self::Print => "PRINT_COMMAND",
            Self::Export => "EXPORT_COMMAND",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::UnknownCommand(s.to_string()))
    }
}

/// One row of the builtin catalog: static metadata for a single command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub id: CommandId,
    pub shortcuts: &'static [&'static str],
    pub label: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub description: Option<&'static str>,
    /// Initial enabled state. Commands start disabled until the owning view
    /// wires them up; help is always available.
    pub enabled: bool,
}

/// The builtin command table, in menu declaration order.
pub const BUILTIN_COMMANDS: &[CommandSpec] = &[
    // Node commands
    CommandSpec {
        id: CommandId::CreateNode,
        shortcuts: &["tab"],
        label: Some("Inserir"),
        icon: Some("ui-icon-plusthick"),
        description: Some("Cria um novo nó"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::CreateSiblingNode,
        shortcuts: &["shift+tab"],
        label: Some("Inserir"),
        icon: Some("ui-icon-plusthick"),
        description: Some("Cria um novo nó filho"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::DeleteNode,
        shortcuts: &["del", "backspace"],
        label: Some("Apagar"),
        icon: Some("ui-icon-minusthick"),
        description: Some("Apaga um nó"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::EditNodeCaption,
        shortcuts: &["F2", "return"],
        label: Some("Editar o texto do nó"),
        icon: None,
        description: Some("Edita o texto do nó"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::ToggleNodeFolded,
        shortcuts: &["space"],
        label: None,
        icon: None,
        description: Some("Exibe ou esconde nós filhos"),
        enabled: false,
    },
    // Undo commands
    CommandSpec {
        id: CommandId::Undo,
        shortcuts: &["ctrl+z", "meta+z"],
        label: Some("Voltar"),
        icon: Some("ui-icon-arrowreturnthick-1-w"),
        description: Some("Voltar"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::Redo,
        shortcuts: &["ctrl+y", "meta+shift+z"],
        label: Some("Redo"),
        icon: Some("ui-icon-arrowreturnthick-1-e"),
        description: Some("Redo"),
        enabled: false,
    },
    // Clipboard commands
    CommandSpec {
        id: CommandId::Copy,
        shortcuts: &["ctrl+c", "meta+c"],
        label: Some("Copiar"),
        icon: Some("ui-icon-copy"),
        description: Some("Copia uma ramificação"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::Cut,
        shortcuts: &["ctrl+x", "meta+x"],
        label: Some("Recortar"),
        icon: Some("ui-icon-scissors"),
        description: Some("Recorta uma ramificação"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::Paste,
        shortcuts: &["ctrl+v", "meta+v"],
        label: Some("Colar"),
        icon: Some("ui-icon-clipboard"),
        description: Some("Cola uma ramificação"),
        enabled: false,
    },
    // Document commands
    CommandSpec {
        id: CommandId::NewDocument,
        shortcuts: &[],
        label: Some("Novo"),
        icon: Some("ui-icon-document-b"),
        description: Some("Inicia um novo mapa mental"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::OpenDocument,
        shortcuts: &["ctrl+o", "meta+o"],
        label: Some("Abrir..."),
        icon: Some("ui-icon-folder-open"),
        description: Some("Abre um mapa mental"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::SaveDocument,
        shortcuts: &["ctrl+s", "meta+s"],
        label: Some("Salvar..."),
        icon: Some("ui-icon-disk"),
        description: Some("Salva um mapa mental"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::CloseDocument,
        shortcuts: &[],
        label: Some("Fechar"),
        icon: Some("ui-icon-close"),
        description: Some("Fechar o mapa mental"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::Help,
        shortcuts: &["F1"],
        label: Some("Ajuda"),
        icon: Some("ui-icon-help"),
        description: Some("Inicia a ajuda"),
        enabled: true,
    },
    CommandSpec {
        id: CommandId::Print,
        shortcuts: &["ctrl+p", "meta+p"],
        label: Some("Imprimir"),
        icon: Some("ui-icon-print"),
        description: Some("Imprime um mapa mental"),
        enabled: false,
    },
    CommandSpec {
        id: CommandId::Export,
        shortcuts: &[],
        label: Some("Exportar como imagem"),
        icon: Some("ui-icon-image"),
        description: Some("Exporta o mapa mental em formato de imagem"),
        enabled: false,
    },
];
