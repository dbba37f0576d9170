use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Draw a centered popup frame and return its inner area.
    fn render_frame(frame: &mut Frame, title: &str, width: u16, height: u16, theme: &Theme) -> Rect {
        let area = frame.area();
        let popup_width = width.min(area.width.saturating_sub(4));
        let popup_height = height.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);
        inner
    }

    /// Share menu: one row per provider plus a close hint.
    pub fn render_share_menu(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let inner = Self::render_frame(frame, "Share", 52, 8, theme);

        let key_style = Style::default().fg(theme.green).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.fg0);
        let rows = [
            ("t", "Twitter   — open a pre-filled tweet"),
            ("f", "Facebook  — share the page link"),
            ("e", "Email     — open a draft message"),
        ];

        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, text)| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("[{}]", key), key_style),
                    Span::styled(format!(" {}", text), text_style),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled("Esc to close", Style::default().fg(theme.grey1)))
                .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }

    /// Help overlay listing the page keybindings.
    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let inner = Self::render_frame(frame, "Help", 46, 14, theme);

        let rows = [
            ("j/k", "scroll the page"),
            ("Ctrl-d/u", "half page down/up"),
            ("gg/G", "jump to top/bottom"),
            ("Tab/1-5", "jump between sections"),
            ("c", "edit the calculator"),
            ("s", "share menu"),
            ("o", "open the page in a browser"),
            ("q", "quit"),
        ];

        let key_style = Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.fg0);
        let mut lines: Vec<Line> = rows
            .iter()
            .map(|(key, text)| {
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<10}", key), key_style),
                    Span::styled(*text, text_style),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey1),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
