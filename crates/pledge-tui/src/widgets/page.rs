use ratatui::{layout::Rect, style::Style, text::Text, widgets::Paragraph, Frame};

use crate::app::{App, Focus};
use crate::calculator::CalcField;
use crate::page::{PageLayout, SectionKind};

use super::{CalculatorWidget, HeroWidget, InfoCardsWidget, ShareWidget, StatsWidget};

/// The scrollable page itself.
///
/// Each render pass asks every section for its lines, records the resulting
/// geometry into `app.layout` (which drives reveal triggering and anchor
/// navigation next frame), and draws the whole column as one scrolled
/// paragraph. Lines are pre-wrapped to the area width, so row counts and
/// scroll offsets always agree.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.viewport_height = area.height;
        let width = area.width;

        let mut layout = PageLayout::new();
        let mut lines = Vec::new();
        let mut income_cursor: Option<(u16, u16)> = None;

        for kind in SectionKind::ORDER {
            let section_lines = match kind {
                SectionKind::Hero => HeroWidget::lines(app, width),
                SectionKind::Stats => StatsWidget::lines(app, width),
                SectionKind::InfoCards => InfoCardsWidget::lines(app, width),
                SectionKind::Calculator => {
                    let (section_lines, cursor) = CalculatorWidget::lines(app, width);
                    if let Some((cx, cy)) = cursor {
                        income_cursor = Some((cx, layout.total_height() + cy));
                    }
                    section_lines
                }
                SectionKind::Share => ShareWidget::lines(app, width),
            };
            layout.push(kind, section_lines.len() as u16);
            lines.extend(section_lines);
        }
        app.layout = layout;

        let scroll = app.scroll.position();
        let paragraph = Paragraph::new(Text::from(lines))
            .style(Style::default().bg(app.theme.bg0))
            .scroll((scroll, 0));
        frame.render_widget(paragraph, area);

        // Place the terminal cursor in the income field while it is edited
        // and actually on screen.
        if app.focus == Focus::Calculator && app.calculator.field == CalcField::Income {
            if let Some((cx, cy)) = income_cursor {
                if cy >= scroll && cy < scroll + area.height && cx < area.width {
                    frame.set_cursor_position((area.x + cx, area.y + cy - scroll));
                }
            }
        }
    }
}
