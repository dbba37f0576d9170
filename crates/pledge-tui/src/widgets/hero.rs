use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use pledge_core::calc::group_digits;

use crate::app::App;
use crate::page::SectionKind;

use super::{apply_phase, centered_line};

pub struct HeroWidget;

impl HeroWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let content = &app.content;
        let mut lines = Vec::new();

        lines.push(Line::from(""));
        lines.push(centered_line(
            vec![Span::styled(
                content.hero_title,
                Style::default().fg(theme.orange).add_modifier(Modifier::BOLD),
            )],
            width,
        ));
        lines.push(Line::from(""));
        lines.push(centered_line(
            vec![Span::styled(
                content.hero_tagline,
                Style::default().fg(theme.fg1).add_modifier(Modifier::ITALIC),
            )],
            width,
        ));
        lines.push(Line::from(""));

        // Simulated live toll
        lines.push(centered_line(
            vec![
                Span::styled(
                    format!("▲ {} ", app.live.value()),
                    Style::default().fg(theme.yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(content.live_label, Style::default().fg(theme.grey2)),
            ],
            width,
        ));
        lines.push(Line::from(""));

        // Headline counter(s), animated from zero on reveal
        for counter in app.section_counters(SectionKind::Hero) {
            lines.push(centered_line(
                vec![Span::styled(
                    group_digits(&counter.display().to_string()),
                    Style::default().fg(theme.red).add_modifier(Modifier::BOLD),
                )],
                width,
            ));
            lines.push(centered_line(
                vec![Span::styled(counter.label, Style::default().fg(theme.grey2))],
                width,
            ));
        }
        lines.push(Line::from(""));

        apply_phase(lines, app.reveal.phase(SectionKind::Hero, 0))
    }
}
