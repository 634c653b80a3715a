use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Conversations,
    Filters,
    Joins,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Conversations => Focus::Filters,
            Focus::Filters => Focus::Joins,
            Focus::Joins => Focus::Conversations,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Conversations => Focus::Joins,
            Focus::Filters => Focus::Conversations,
            Focus::Joins => Focus::Filters,
        }
    }

    pub fn from_panel(panel: PanelType) -> Option<Self> {
        match panel {
            PanelType::Conversations => Some(Focus::Conversations),
            PanelType::Filters => Some(Focus::Filters),
            PanelType::Joins => Some(Focus::Joins),
            PanelType::Topbar | PanelType::StatusBar => None,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub resource_key: String,
    pub table: Option<TableKey>,
    pub detail: TableDetail,
    pub conversations: ConversationsStore,
    pub layout: LayoutState,
    pub keybinds: Keybinds,
    pub focus: Focus,
    pub conversations_scroll: u16,
    pub filters_scroll: u16,
    pub joins_scroll: u16,
    pub show_help: bool,
    pub last_error: Option<String>,
    /// Set when `last_error` came from the conversations fetch.
    pub last_error_from_fetch: bool,
    pub show_error_details: bool,
}

impl App {
    /// Starts the conversations flow, so it needs a tokio runtime context.
    pub fn new(
        config: Config,
        resource_key: impl Into<String>,
        source: Arc<dyn ConversationSource>,
    ) -> Self {
        Self {
            should_quit: false,
            config,
            resource_key: resource_key.into(),
            table: None,
            detail: TableDetail::default(),
            conversations: ConversationsStore::start(source),
            layout: LayoutState::default(),
            keybinds: Keybinds,
            focus: Focus::Conversations,
            conversations_scroll: 0,
            filters_scroll: 0,
            joins_scroll: 0,
            show_help: false,
            last_error: None,
            last_error_from_fetch: false,
            show_error_details: false,
        }
    }

    /// Table name used to tell this table's columns apart in filters.
    pub fn table_name(&self) -> &str {
        self.table
            .as_ref()
            .map(|t| t.table.as_str())
            .unwrap_or(self.resource_key.as_str())
    }
}
