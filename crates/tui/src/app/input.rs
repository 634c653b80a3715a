use super::*;

impl App {
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => Ok(false),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<bool> {
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        if key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.show_error_details {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('E')) {
                self.show_error_details = false;
            }
            return Ok(false);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('r') => self.request_conversations(),
            KeyCode::Char('E') => {
                if self.last_error.is_some() {
                    self.show_error_details = true;
                }
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_previous(),
            KeyCode::Up => self.scroll_focused(-1),
            KeyCode::Down => self.scroll_focused(1),
            KeyCode::PageUp => self.page_focused(false),
            KeyCode::PageDown => self.page_focused(true),
            KeyCode::Char('<') => self.layout.resize_side(-2),
            KeyCode::Char('>') => self.layout.resize_side(2),
            _ => {}
        }

        Ok(false)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<bool> {
        let Some(panel) = self.layout.panel_at(mouse.column, mouse.row) else {
            return Ok(false);
        };

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.focus_panel(panel),
            MouseEventKind::ScrollDown => {
                if let Some(focus) = Focus::from_panel(panel) {
                    self.scroll(focus, 3);
                }
            }
            MouseEventKind::ScrollUp => {
                if let Some(focus) = Focus::from_panel(panel) {
                    self.scroll(focus, -3);
                }
            }
            _ => {}
        }

        Ok(false)
    }
}
