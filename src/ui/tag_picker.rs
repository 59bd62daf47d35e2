use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use swatchbook::app::App;

use super::colors;

pub fn render(f: &mut Frame, app: &App, cursor: usize, area: Rect) {
    let mut items = vec![ListItem::new(" All tags")];
    items.extend(app.state.tags().iter().map(|t| ListItem::new(format!(" {t}"))));

    let longest = app.state.tags().iter().map(|t| t.chars().count()).max().unwrap_or(0);
    let width = (longest.max(14) as u16 + 6).min(area.width);
    let height = (items.len() as u16 + 2).min(area.height);
    let rect = centered(area, width, height);

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Filter by tag ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::ACCENT)),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .bg(colors::ACTIVE_BG)
                .fg(colors::ACTIVE_FG)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(cursor));

    f.render_widget(Clear, rect);
    f.render_stateful_widget(list, rect, &mut state);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
