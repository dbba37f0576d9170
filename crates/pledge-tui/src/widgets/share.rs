use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::SectionKind;
use crate::theme::Theme;

use super::{apply_phase, section_heading};

pub struct ShareWidget;

impl ShareWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut lines = section_heading(SectionKind::Share.title(), width, theme);

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(app.content.share_prompt, Style::default().fg(theme.fg0)),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            keycap("t", theme),
            Span::styled(" Twitter    ", Style::default().fg(theme.fg1)),
            keycap("f", theme),
            Span::styled(" Facebook    ", Style::default().fg(theme.fg1)),
            keycap("e", theme),
            Span::styled(" Email", Style::default().fg(theme.fg1)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "press s for the share menu, o to open the page in a browser",
                Style::default().fg(theme.grey1),
            ),
        ]));
        lines.push(Line::from(""));

        apply_phase(lines, app.reveal.phase(SectionKind::Share, 0))
    }
}

fn keycap(key: &str, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("[{}]", key),
        Style::default().fg(theme.green).add_modifier(Modifier::BOLD),
    )
}
