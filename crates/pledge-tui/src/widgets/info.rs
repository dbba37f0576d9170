use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::SectionKind;

use super::{apply_phase, section_heading, wrap_text};

pub struct InfoCardsWidget;

impl InfoCardsWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;

        let mut lines = apply_phase(
            section_heading(SectionKind::InfoCards.title(), width, theme),
            app.reveal.phase(SectionKind::InfoCards, 0),
        );

        let text_width = width.saturating_sub(4);
        for (i, card) in app.content.info_cards.iter().enumerate() {
            let mut card_lines = Vec::new();
            card_lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("• {}", card.title),
                    Style::default().fg(theme.blue).add_modifier(Modifier::BOLD),
                ),
            ]));
            for body_line in wrap_text(card.body, text_width) {
                card_lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(body_line, Style::default().fg(theme.fg0)),
                ]));
            }
            card_lines.push(Line::from(""));

            lines.extend(apply_phase(
                card_lines,
                app.reveal.phase(SectionKind::InfoCards, i),
            ));
        }

        lines
    }
}
