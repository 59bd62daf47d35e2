use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use swatchbook::app::App;
use swatchbook::layout;
use swatchbook::palette::Palette;

use super::colors;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let visible = app.state.visible_indices();
    if visible.is_empty() {
        let message = if app.state.show_favorites_only() {
            "  No favorite palettes to show"
        } else {
            "  No palettes match the current filter"
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(message, Style::default().fg(colors::MUTED)))),
            area,
        );
        return;
    }

    for slot in 0..layout::cards_per_page(area) {
        let card = app.scroll + slot;
        let Some(palette) = app.state.visible_at(card) else {
            break;
        };
        let rect = layout::card_rect(area, slot);
        if rect.height < 2 {
            break;
        }
        render_card(f, app, palette, card == app.selected, rect);
    }
}

fn render_card(f: &mut Frame, app: &App, palette: &Palette, is_selected: bool, rect: Rect) {
    let border_style = if is_selected {
        Style::default().fg(colors::ACCENT)
    } else {
        Style::default().fg(colors::MUTED)
    };

    let block = Block::default()
        .title(card_title(app, palette, is_selected))
        .borders(Borders::ALL)
        .border_style(border_style);
    f.render_widget(block, rect);

    let inner = layout::card_inner(rect);
    for (i, (color, swatch)) in palette
        .colors
        .iter()
        .zip(layout::swatch_rects(inner, palette.colors.len()))
        .enumerate()
    {
        let bg = colors::swatch_color(&color.hex);
        let fg = colors::label_color(&color.hex);
        let marker = if is_selected && i == app.swatch { "\u{25cf}" } else { "" };
        let lines = vec![
            Line::from(marker),
            Line::from(color.hex.as_str()),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(bg).fg(fg)),
            swatch,
        );
    }

    let favorited = app.state.is_favorite(&palette.name);
    let (star, star_color) = if favorited {
        (" \u{2605} ", colors::FAVORITE)
    } else {
        (" \u{2606} ", colors::MUTED)
    };
    f.render_widget(
        Paragraph::new(Span::styled(star, Style::default().fg(star_color))),
        layout::star_rect(rect),
    );
}

/// Palette name, followed by the focused swatch's values on the selected card.
fn card_title<'a>(app: &'a App, palette: &'a Palette, is_selected: bool) -> Line<'a> {
    let mut spans = vec![Span::styled(
        format!(" {} ", palette.name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if is_selected {
        if let Some(color) = app.selected_color() {
            spans.push(Span::styled(
                format!("{} ", color.hex),
                Style::default().fg(colors::ACTIVE_FG),
            ));
            spans.push(Span::styled(
                format!("{} ", color.rgb),
                Style::default().fg(colors::MUTED),
            ));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use swatchbook::catalog::fallback_catalog;
    use swatchbook::clipboard::{ClipboardError, ClipboardSink};
    use swatchbook::favorites::MemoryStore;
    use swatchbook::state::PaletteState;

    struct NullClipboard;

    impl ClipboardSink for NullClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn test_app() -> App {
        let state = PaletteState::new(fallback_catalog(), Box::new(MemoryStore::new()));
        App::new(state, Box::new(NullClipboard))
    }

    fn row_text(backend: &TestBackend, row: u16) -> String {
        let buf = backend.buffer();
        (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect()
    }

    fn draw(app: &App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| render(f, app, f.area())).unwrap();
        terminal
    }

    #[test]
    fn swatches_use_palette_colors() {
        let app = test_app();
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        assert_eq!(buf[(1, 1)].bg, Color::Rgb(46, 134, 171));
        assert_eq!(buf[(78, 2)].bg, Color::Rgb(59, 31, 43));
    }

    #[test]
    fn selected_card_previews_focused_swatch() {
        let mut app = test_app();
        app.swatch = 2;
        let terminal = draw(&app);
        let title = row_text(terminal.backend(), 0);
        assert!(title.contains("Ocean Breeze"));
        assert!(title.contains("#F18F01"));
        assert!(title.contains("rgb(241, 143, 1)"));
    }

    #[test]
    fn star_reflects_favorite_state() {
        let mut app = test_app();
        let terminal = draw(&app);
        assert!(row_text(terminal.backend(), 0).contains('\u{2606}'));

        app.state.toggle_favorite("Ocean Breeze");
        let terminal = draw(&app);
        let buf = terminal.backend().buffer();
        assert!(row_text(terminal.backend(), 0).contains('\u{2605}'));
        assert_eq!(buf[(77, 0)].fg, colors::FAVORITE);
    }

    #[test]
    fn empty_favorites_view_shows_hint() {
        let mut app = test_app();
        app.state.set_show_favorites_only(true);
        let terminal = draw(&app);
        assert!(row_text(terminal.backend(), 0).contains("No favorite palettes"));
    }
}
