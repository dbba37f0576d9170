use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use pledge_core::calc::{format_lives_per_year, format_money, format_nets, format_ten_year};

use crate::app::{App, Focus};
use crate::calculator::CalcField;
use crate::page::SectionKind;
use crate::reveal::RevealPhase;

use super::{apply_phase, section_heading};

/// Label column width for the form rows.
const LABEL_WIDTH: usize = 16;
/// Income field width after the `$`: 12 digits plus separators.
const INPUT_WIDTH: usize = 16;
/// Columns before the first income digit: indent + label + `[` + `$`.
const FIELD_START: u16 = 2 + LABEL_WIDTH as u16 + 2;

pub struct CalculatorWidget;

impl CalculatorWidget {
    /// Build the section lines plus, when the income field is being
    /// edited, the cursor position relative to the section's first line.
    pub fn lines(app: &App, width: u16) -> (Vec<Line<'static>>, Option<(u16, u16)>) {
        let theme = &app.theme;
        let calc = &app.calculator;
        let focused = app.focus == Focus::Calculator;
        let phase = app.reveal.phase(SectionKind::Calculator, 0);

        let mut lines = section_heading(SectionKind::Calculator.title(), width, theme);
        let income_row = lines.len() as u16;

        let label_style = Style::default().fg(theme.grey2);
        let bracket_style = Style::default().fg(theme.grey1);
        let income_focused = focused && calc.field == CalcField::Income;
        let percent_focused = focused && calc.field == CalcField::Percent;

        let field_style = |active: bool| {
            if active {
                Style::default().fg(theme.fg0).bg(theme.selection)
            } else {
                Style::default().fg(theme.fg1).bg(theme.bg1)
            }
        };

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<width$}", "Annual income", width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled("[", bracket_style),
            Span::styled(
                format!("${:<width$}", calc.income_text, width = INPUT_WIDTH),
                field_style(income_focused),
            ),
            Span::styled("]", bracket_style),
        ]));

        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{:<width$}", "Pledge", width = LABEL_WIDTH),
                label_style,
            ),
            Span::styled("[", bracket_style),
            Span::styled(
                format!("◂ {:>5.1}% ▸", calc.percent),
                field_style(percent_focused),
            ),
            Span::styled("]", bracket_style),
        ]));
        lines.push(Line::from(""));

        let result_style = Style::default().fg(theme.green).add_modifier(Modifier::BOLD);
        let results = [
            ("Donation", format_money(calc.stats.donation)),
            ("Lives saved", format_lives_per_year(calc.stats.lives_per_year)),
            ("Nets funded", format_nets(calc.stats.nets)),
            ("Over ten years", format_ten_year(calc.stats.ten_year_lives)),
        ];
        for (label, value) in results {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
                Span::styled(value, result_style),
            ]));
        }
        lines.push(Line::from(""));

        let hint = if focused {
            "type digits · Tab switch field · Esc done"
        } else {
            "press c to edit the calculator"
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(hint, Style::default().fg(theme.grey1)),
        ]));
        lines.push(Line::from(""));

        let cursor = if income_focused && phase == RevealPhase::Visible {
            Some((FIELD_START + calc.cursor as u16, income_row))
        } else {
            None
        };

        (apply_phase(lines, phase), cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use pledge_core::share::ShareLinks;
    use pledge_core::AppConfig;
    use std::sync::Arc;

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let share_links = ShareLinks::build(&config.campaign).unwrap();
        App::new(config, Theme::default(), share_links)
    }

    #[test]
    fn test_height_is_stable_across_focus_and_phase() {
        let mut app = app();
        let (unfocused, _) = CalculatorWidget::lines(&app, 80);
        app.focus = Focus::Calculator;
        let (focused, _) = CalculatorWidget::lines(&app, 80);
        assert_eq!(unfocused.len(), focused.len());
    }

    #[test]
    fn test_cursor_hidden_before_reveal() {
        let mut app = app();
        app.focus = Focus::Calculator;
        // Section not yet revealed: no cursor even while editing
        let (_, cursor) = CalculatorWidget::lines(&app, 80);
        assert_eq!(cursor, None);
    }
}
