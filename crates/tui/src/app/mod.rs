use crate::keybinds::Keybinds;
use crate::ui::layout::LayoutState;
use crate::ui::panel::PanelType;
use crate::Config;
use anyhow::Result;
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::Frame;
use std::sync::Arc;
use stemma_view_metadata::{TableDetail, TableKey};
use stemma_view_slack::{ConversationSource, ConversationsAction, ConversationsStore};

mod actions;
mod effects;
mod input;
mod render;
mod state;

pub use state::{App, Focus};

impl App {
    pub(super) fn report_error(&mut self, context: &str, error: impl std::fmt::Display) {
        let message = format!("{context}: {error}");
        self.last_error = Some(message.clone());
        self.last_error_from_fetch = false;
        tracing::warn!("{message}");
    }

    pub(super) fn clear_error(&mut self) {
        self.last_error = None;
        self.last_error_from_fetch = false;
        self.show_error_details = false;
    }
}
