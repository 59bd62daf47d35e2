use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use swatchbook::app::App;
use swatchbook::palette::CopyFormat;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" swatchbook ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::MUTED));

    let mut spans = vec![Span::styled(" Copy as ", Style::default().fg(colors::MUTED))];
    for (i, format) in CopyFormat::ALL.iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, format.as_str().to_uppercase());
        let style = if *format == app.state.copy_format() {
            Style::default()
                .bg(colors::ACTIVE_BG)
                .fg(colors::ACTIVE_FG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::styled("  \u{2502}  ", Style::default().fg(colors::MUTED)));
    spans.push(Span::styled("[v] ", Style::default().fg(colors::MUTED)));
    spans.push(favorites_toggle(app.state.show_favorites_only()));

    spans.push(Span::styled("  \u{2502}  ", Style::default().fg(colors::MUTED)));
    spans.push(Span::styled("[t] Tag: ", Style::default().fg(colors::MUTED)));
    spans.push(Span::styled(
        app.state.selected_tag().unwrap_or("All tags").to_string(),
        Style::default().fg(Color::Yellow),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn favorites_toggle(active: bool) -> Span<'static> {
    if active {
        Span::styled(
            "\u{2605} Show All Palettes",
            Style::default().fg(colors::FAVORITE).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("\u{2606} Show Favorites Only", Style::default().fg(Color::White))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_follows_mode() {
        assert_eq!(favorites_toggle(false).content, "\u{2606} Show Favorites Only");
        assert_eq!(favorites_toggle(true).content, "\u{2605} Show All Palettes");
        assert_eq!(favorites_toggle(true).style.fg, Some(colors::FAVORITE));
    }
}
