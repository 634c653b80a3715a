use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::panel::{Panel, PanelType};

const MIN_SIDE_WIDTH: u16 = 30;
const MAX_SIDE_WIDTH: u16 = 90;
const TOPBAR_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

pub struct LayoutState {
    side_width: u16,
    cached_panels: Vec<Panel>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            side_width: 50,
            cached_panels: Vec::new(),
        }
    }
}

impl LayoutState {
    pub fn calculate_layout(&mut self, area: Rect) -> &[Panel] {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOPBAR_HEIGHT),
                Constraint::Min(1),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let content_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(self.side_width)])
            .split(main_layout[1]);

        let side_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_layout[1]);

        self.cached_panels = vec![
            Panel {
                panel_type: PanelType::Topbar,
                rect: main_layout[0],
            },
            Panel {
                panel_type: PanelType::Conversations,
                rect: content_layout[0],
            },
            Panel {
                panel_type: PanelType::Filters,
                rect: side_layout[0],
            },
            Panel {
                panel_type: PanelType::Joins,
                rect: side_layout[1],
            },
            Panel {
                panel_type: PanelType::StatusBar,
                rect: main_layout[2],
            },
        ];

        &self.cached_panels
    }

    pub fn get_panels(&self) -> &[Panel] {
        &self.cached_panels
    }

    pub fn side_width(&self) -> u16 {
        self.side_width
    }

    pub fn resize_side(&mut self, delta: i16) {
        self.side_width = (self.side_width as i16 - delta)
            .clamp(MIN_SIDE_WIDTH as i16, MAX_SIDE_WIDTH as i16) as u16;
    }

    pub fn panel_at(&self, col: u16, row: u16) -> Option<PanelType> {
        self.cached_panels
            .iter()
            .find(|p| {
                col >= p.rect.x
                    && col < p.rect.x + p.rect.width
                    && row >= p.rect.y
                    && row < p.rect.y + p.rect.height
            })
            .map(|p| p.panel_type)
    }
}
