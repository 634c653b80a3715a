use super::*;

const PAGE: u16 = 10;

impl App {
    pub(super) fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub(super) fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub(super) fn focus_panel(&mut self, panel: PanelType) {
        if let Some(focus) = Focus::from_panel(panel) {
            self.focus = focus;
        }
    }

    fn scroll_slot(&mut self, focus: Focus) -> &mut u16 {
        match focus {
            Focus::Conversations => &mut self.conversations_scroll,
            Focus::Filters => &mut self.filters_scroll,
            Focus::Joins => &mut self.joins_scroll,
        }
    }

    pub(super) fn scroll_focused(&mut self, delta: i32) {
        self.scroll(self.focus, delta);
    }

    pub(super) fn scroll(&mut self, focus: Focus, delta: i32) {
        let slot = self.scroll_slot(focus);
        *slot = (*slot as i32 + delta).clamp(0, u16::MAX as i32) as u16;
    }

    pub(super) fn page_focused(&mut self, down: bool) {
        let delta = if down { PAGE as i32 } else { -(PAGE as i32) };
        self.scroll_focused(delta);
    }

    pub(super) fn scroll_offset(&self, focus: Focus) -> u16 {
        match focus {
            Focus::Conversations => self.conversations_scroll,
            Focus::Filters => self.filters_scroll,
            Focus::Joins => self.joins_scroll,
        }
    }
}
