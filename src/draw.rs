use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, Screen};
use crate::components::roster::{row_label, visible_window};
use crate::components::stat_grid::StatGrid;
use crate::state::network::LoadingState;
use crate::ui::layout::LayoutAreas;
use crate::ui::theme::THEME;

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            layout.update(f.area(), app.settings.full_screen);

            if !app.settings.full_screen {
                draw_header(f, layout.header, app);
            }

            match app.state.screen {
                Screen::PlayerList => draw_roster(f, layout.main, app),
                Screen::PlayerDetail => draw_player_detail(f, layout.main, app),
                Screen::Help => draw_help(f, layout.main),
            }

            if app.state.show_logs {
                draw_logs(f, layout.main);
            }

            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(THEME.border);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [title_area, help_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(10)]).areas(inner);

    let title = Line::from(vec![
        Span::styled("mpgtui", Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {}", app.state.screen.title()),
            Style::default().fg(THEME.text),
        ),
    ]);
    f.render_widget(Paragraph::new(title), title_area);

    f.render_widget(
        Paragraph::new("Help: ?")
            .alignment(Alignment::Right)
            .style(Style::default().fg(THEME.muted)),
        help_area,
    );
}

fn draw_roster(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(THEME.border).title(" Player List ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

    draw_search_input(f, search_area, app);

    let roster = &app.state.roster;
    if roster.players.is_empty() {
        // Covers both the in-flight fetch and a failed one; failures only
        // show up in the log pane.
        f.render_widget(
            Paragraph::new("Loading players...")
                .style(Style::default().fg(THEME.muted))
                .alignment(Alignment::Center),
            list_area,
        );
        return;
    }

    let filtered = roster.filtered();
    if filtered.is_empty() {
        f.render_widget(
            Paragraph::new("No players match")
                .style(Style::default().fg(THEME.muted))
                .alignment(Alignment::Center),
            list_area,
        );
        return;
    }

    let (start, end) = visible_window(filtered.len(), roster.selected, list_area.height as usize);
    let mut lines = Vec::with_capacity(end - start);
    for (idx, player) in filtered[start..end].iter().enumerate() {
        let selected = start + idx == roster.selected;
        let marker = if selected { '>' } else { ' ' };
        let style = if selected {
            Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(THEME.text)
        };
        let text: String = format!("{marker} {}", row_label(player))
            .chars()
            .take(list_area.width as usize)
            .collect();
        lines.push(Line::from(Span::styled(text, style)));
    }
    f.render_widget(Paragraph::new(lines), list_area);
}

fn draw_search_input(f: &mut Frame, area: Rect, app: &App) {
    let roster = &app.state.roster;
    let (text, style) = if roster.searching {
        (
            format!("/ {}_", roster.search),
            Style::default().fg(THEME.accent),
        )
    } else if roster.search.is_empty() {
        (
            "Search players...  (press / to type, Enter for detail)".to_string(),
            Style::default().fg(THEME.muted),
        )
    } else {
        (
            format!("/ {}", roster.search),
            Style::default().fg(THEME.text),
        )
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_player_detail(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(THEME.border).title(" Player Detail ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(route) = app.state.detail.route.as_ref() else {
        f.render_widget(
            Paragraph::new("Select a player from the list")
                .style(Style::default().fg(THEME.muted))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    if inner.height < 4 {
        return;
    }

    let [name_area, position_area, _gap, body_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    // The name comes from the route params and renders before any fetch
    // resolves.
    f.render_widget(
        Paragraph::new(route.full_name())
            .style(Style::default().fg(THEME.text).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        name_area,
    );
    f.render_widget(
        Paragraph::new(route.position_label().unwrap_or(""))
            .style(Style::default().fg(THEME.muted))
            .alignment(Alignment::Center),
        position_area,
    );

    // The stats request gates everything below the name; the club request
    // does not.
    if app.state.detail.is_loading() {
        f.render_widget(
            Paragraph::new("Loading...")
                .style(Style::default().fg(THEME.muted))
                .alignment(Alignment::Center),
            body_area,
        );
        return;
    }

    let mut club_lines = vec![Line::from(vec![
        Span::styled("Club: ", Style::default().fg(THEME.muted)),
        Span::styled(app.state.detail.club_name(), Style::default().fg(THEME.text)),
    ])];
    if let Some(url) = app.state.detail.crest_url() {
        club_lines.push(Line::from(vec![
            Span::styled("Crest: ", Style::default().fg(THEME.muted)),
            Span::styled(url.to_owned(), Style::default().fg(THEME.text)),
        ]));
    }
    if let Some(joined) = app.state.detail.join_date() {
        club_lines.push(Line::from(vec![
            Span::styled("Joined: ", Style::default().fg(THEME.muted)),
            Span::styled(joined, Style::default().fg(THEME.text)),
        ]));
    }

    let [club_area, grid_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Fill(1)]).areas(body_area);
    f.render_widget(Paragraph::new(club_lines), club_area);

    let cells = app.state.detail.stat_rows();
    f.render_widget(StatGrid { cells: &cells }, grid_area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(THEME.border).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(
            "q=quit  /=search  j/k=move  Enter=player detail  Esc=back  \"=logs  f=fullscreen",
        )
        .style(Style::default().fg(THEME.muted))
        .alignment(Alignment::Center),
        inner,
    );
}

/// Diagnostic log pane over the bottom half of the screen. This is the only
/// place request failures are visible.
fn draw_logs(f: &mut Frame, area: Rect) {
    let [_, log_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
    let widget = TuiLoggerWidget::default()
        .block(default_border(THEME.accent).title(" Logs "))
        .style(Style::default().fg(THEME.text));
    f.render_widget(widget, log_area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading {
        return;
    }
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(Style::default().fg(THEME.text));
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
