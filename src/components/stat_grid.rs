use crate::ui::theme::THEME;
use tui::buffer::Buffer;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Modifier, Style};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

const BOX_HEIGHT: u16 = 4;

/// The detail screen's stat grid: six bordered boxes, three per row, each
/// with its title top-left and its (possibly "N/A") value bold bottom-right.
pub struct StatGrid<'a> {
    pub cells: &'a [(&'static str, String)],
}

impl Widget for StatGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < BOX_HEIGHT {
            return;
        }

        let rows = self.cells.chunks(3);
        let row_count = rows.len() as u16;
        let constraints: Vec<Constraint> = (0..row_count)
            .map(|_| Constraint::Length(BOX_HEIGHT))
            .chain([Constraint::Fill(1)])
            .collect();
        let row_areas = Layout::vertical(constraints).split(area);

        for (row_cells, row_area) in rows.zip(row_areas.iter()) {
            let cols = Layout::horizontal([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(*row_area);

            for ((title, value), cell) in row_cells.iter().zip(cols.iter()) {
                render_box(title, value, *cell, buf);
            }
        }
    }
}

fn render_box(title: &str, value: &str, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.border));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    Paragraph::new(title)
        .style(Style::default().fg(THEME.muted))
        .render(Rect { height: 1, ..inner }, buf);

    let value_row = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    Paragraph::new(value)
        .alignment(Alignment::Right)
        .style(Style::default().fg(THEME.value).add_modifier(Modifier::BOLD))
        .render(value_row, buf);
}
