use super::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use stemma_view_metadata::{CommonFilter, CommonJoin, FilterSegment};
use stemma_view_slack::ConversationsState;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Topbar => self.render_topbar(frame, panel.rect),
                PanelType::Conversations => self.render_conversations(frame, panel.rect),
                PanelType::Filters => self.render_filters(frame, panel.rect),
                PanelType::Joins => self.render_joins(frame, panel.rect),
                PanelType::StatusBar => self.render_status_bar(frame, panel.rect),
            }
        }

        if self.show_help {
            self.render_help(frame, area);
        }

        if self.show_error_details {
            self.render_error_details(frame, area);
        }
    }

    fn render_topbar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::Paragraph;

        let (name, url) = match self.table {
            Some(ref key) => (key.to_table_ref().qualified_name(), key.url()),
            None => (self.resource_key.clone(), String::new()),
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" ● {name} "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(url, Style::default().fg(Color::DarkGray)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    fn panel_block(&self, title: String, focus: Focus) -> ratatui::widgets::Block<'static> {
        use ratatui::widgets::{Block, Borders};

        let border_style = if self.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title)
    }

    fn render_conversations(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Paragraph, Wrap};

        let state = self.conversations.state();
        let title = format!(" Slack conversations ({}) ", state.conversations.len());

        frame.render_widget(
            Paragraph::new(conversation_lines(state))
                .block(self.panel_block(title, Focus::Conversations))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll_offset(Focus::Conversations), 0)),
            area,
        );
    }

    fn render_filters(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Paragraph, Wrap};

        let filters = &self.detail.common_filters;
        frame.render_widget(
            Paragraph::new(filter_lines(filters, self.table_name()))
                .block(self.panel_block(
                    format!(" Common filters ({}) ", filters.len()),
                    Focus::Filters,
                ))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll_offset(Focus::Filters), 0)),
            area,
        );
    }

    fn render_joins(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Paragraph, Wrap};

        let joins = &self.detail.common_joins;
        frame.render_widget(
            Paragraph::new(join_lines(joins))
                .block(self.panel_block(format!(" Common joins ({}) ", joins.len()), Focus::Joins))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll_offset(Focus::Joins), 0)),
            area,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::Paragraph;

        let state = self.conversations.state();
        let status = match (state.is_loading, state.status_code) {
            (true, _) => "loading".to_string(),
            (false, Some(code)) => format!("status {code}"),
            (false, None) => "no response".to_string(),
        };
        let error = if self.last_error.is_some() {
            "   ⚠ error [E]"
        } else {
            ""
        };

        let text = format!(" {status}{error}   [Tab] focus   [r] reload   [?] help   [q] quit");
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};
        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press ? to close "),
            ),
            popup_area,
        );
    }

    fn render_error_details(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

        let popup_area = self.centered_rect(60, 20, area);
        let details = self
            .last_error
            .as_deref()
            .unwrap_or("No error details available.");
        let text = format!("{details}\n\n[Esc] or [Enter] to close");

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Error Details "),
                ),
            popup_area,
        );
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        use ratatui::layout::{Constraint, Direction, Layout};

        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

fn link_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED)
}

fn label_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(super) fn conversation_lines(state: &ConversationsState) -> Vec<Line<'static>> {
    if state.is_loading {
        return vec![Line::from("Loading conversations...")];
    }

    let mut lines = Vec::new();
    if state.is_error() {
        let reason = match state.status_code {
            Some(code) => format!("Could not load conversations (status {code})."),
            None => "Could not reach the catalog.".to_string(),
        };
        lines.push(Line::styled(reason, Style::default().fg(Color::Red)));
        lines.push(Line::from("Press [r] to retry."));
    }

    for conversation in &state.conversations {
        let time = conversation
            .message_time()
            .map(|t| t.format("%B %-d, %Y at %-I:%M %p").to_string())
            .unwrap_or_else(|| conversation.message.thread_ts.clone());

        lines.push(Line::from(vec![
            Span::styled(
                conversation.author.label().to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {time} - #{}", conversation.message.channel),
                label_style(),
            ),
        ]));
        for text_line in conversation.message.text.lines() {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::styled(
            format!("({} Replies)", conversation.display_replies()),
            label_style(),
        ));
        lines.push(Line::from(vec![
            Span::raw("View in Slack: "),
            Span::styled(conversation.permalink.clone(), link_style()),
        ]));
        lines.push(Line::default());
    }

    lines
}

pub(super) fn filter_lines(filters: &[CommonFilter], this_table: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for filter in filters {
        let spans: Vec<Span<'static>> = filter
            .segments(this_table)
            .into_iter()
            .flat_map(|segment| {
                let span = match segment {
                    FilterSegment::Text(text) => Span::raw(text),
                    FilterSegment::Link { table, column, .. } => {
                        Span::styled(format!("{table}.{column}"), link_style())
                    }
                };
                [span, Span::raw(" ")]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }
    lines
}

pub(super) fn join_lines(joins: &[CommonJoin]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for join in joins {
        for row in join.rows() {
            let value = match row.url {
                Some(url) => vec![
                    Span::styled(row.value, link_style()),
                    Span::styled(format!("  {url}"), label_style()),
                ],
                None => vec![Span::raw(row.value)],
            };
            let mut spans = vec![Span::styled(format!("{:<10}", row.label), label_style())];
            spans.extend(value);
            lines.push(Line::from(spans));
        }
        lines.push(Line::default());
    }
    lines
}
