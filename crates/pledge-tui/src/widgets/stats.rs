use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use pledge_core::calc::group_digits;

use crate::app::App;
use crate::page::SectionKind;
use crate::reveal::RevealPhase;

use super::{apply_phase, section_heading};

pub struct StatsWidget;

impl StatsWidget {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let counters: Vec<_> = app.section_counters(SectionKind::Stats).collect();

        let heading_phase = app.reveal.phase(SectionKind::Stats, 0);
        let mut lines = apply_phase(
            section_heading(SectionKind::Stats.title(), width, theme),
            heading_phase,
        );
        if counters.is_empty() {
            return lines;
        }

        // Cards side by side, each with its own staggered reveal
        let cell = (width / counters.len() as u16).max(1);
        let accents = [theme.yellow, theme.orange, theme.aqua];

        let mut value_spans = Vec::new();
        let mut label_spans = Vec::new();
        for (i, counter) in counters.iter().enumerate() {
            let phase = app.reveal.phase(SectionKind::Stats, i);

            let (value_text, label_text) = if phase == RevealPhase::Hidden {
                (" ".repeat(cell as usize), " ".repeat(cell as usize))
            } else {
                (
                    pad_cell(&group_digits(&counter.display().to_string()), cell),
                    pad_cell(counter.label, cell),
                )
            };

            let mut value_style = Style::default()
                .fg(accents[i % accents.len()])
                .add_modifier(Modifier::BOLD);
            let mut label_style = Style::default().fg(theme.grey2);
            if phase == RevealPhase::Fading {
                value_style = value_style.add_modifier(Modifier::DIM);
                label_style = label_style.add_modifier(Modifier::DIM);
            }

            value_spans.push(Span::styled(value_text, value_style));
            label_spans.push(Span::styled(label_text, label_style));
        }

        lines.push(Line::from(value_spans));
        lines.push(Line::from(label_spans));
        lines.push(Line::from(""));
        lines
    }
}

/// Center text within a fixed-width card cell, truncating if necessary.
fn pad_cell(text: &str, cell: u16) -> String {
    let cell = cell as usize;
    let truncated: String = text.chars().take(cell).collect();
    let len = truncated.chars().count();
    let left = (cell - len) / 2;
    let right = cell - len - left;
    format!("{}{}{}", " ".repeat(left), truncated, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_cell_is_exact_width() {
        assert_eq!(pad_cell("ab", 6).len(), 6);
        assert_eq!(pad_cell("ab", 6), "  ab  ");
        assert_eq!(pad_cell("abcdefgh", 4), "abcd");
    }
}
