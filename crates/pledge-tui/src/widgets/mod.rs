pub mod calculator;
pub mod hero;
pub mod info;
pub mod page;
pub mod popup;
pub mod share;
pub mod stats;
pub mod status_bar;

pub use calculator::CalculatorWidget;
pub use hero::HeroWidget;
pub use info::InfoCardsWidget;
pub use page::PageWidget;
pub use popup::PopupWidget;
pub use share::ShareWidget;
pub use stats::StatsWidget;
pub use status_bar::StatusBarWidget;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::reveal::RevealPhase;
use crate::theme::Theme;

/// Build a line with its content spans centered within `width` columns.
pub(crate) fn centered_line(spans: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let pad = (width as usize).saturating_sub(len) / 2;
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(" ".repeat(pad)));
    all.extend(spans);
    Line::from(all)
}

/// Word-wrap plain text to `width` columns.
pub(crate) fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Section heading: a blank line, a titled rule, and a blank line.
pub(crate) fn section_heading(title: &str, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let rule = width.saturating_sub(title.chars().count() as u16 + 6) as usize;
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("── ".to_string(), Style::default().fg(theme.grey0)),
            Span::styled(
                title.to_string(),
                Style::default().fg(theme.grey2).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", "─".repeat(rule)), Style::default().fg(theme.grey0)),
        ]),
        Line::from(""),
    ]
}

/// Apply a reveal phase to a card's lines: hidden cards keep their height
/// but render blank, fading cards render dimmed.
pub(crate) fn apply_phase(lines: Vec<Line<'static>>, phase: RevealPhase) -> Vec<Line<'static>> {
    match phase {
        RevealPhase::Visible => lines,
        RevealPhase::Hidden => lines.iter().map(|_| Line::from("")).collect(),
        RevealPhase::Fading => lines
            .into_iter()
            .map(|line| {
                let spans: Vec<Span<'static>> = line
                    .spans
                    .into_iter()
                    .map(|s| Span::styled(s.content, s.style.add_modifier(Modifier::DIM)))
                    .collect();
                Line::from(spans)
            })
            .collect(),
    }
}
