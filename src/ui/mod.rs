pub mod colors;
pub mod notifications;
pub mod palette_grid;
pub mod tag_picker;
pub mod toolbar;

use ratatui::Frame;

use swatchbook::app::{App, Mode};
use swatchbook::layout;

pub fn render(f: &mut Frame, app: &App) {
    let screen = layout::screen(f.area());

    toolbar::render(f, app, screen.toolbar);
    palette_grid::render(f, app, screen.grid);
    render_status_bar(f, app, screen.status);

    if let Mode::TagPicker { cursor } = app.mode {
        tag_picker::render(f, app, cursor, screen.grid);
    }
    notifications::render(f, app.state.toasts.active(), screen.grid);
}

fn render_status_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    use ratatui::style::{Color, Style};
    use ratatui::text::{Line, Span};
    use ratatui::widgets::Paragraph;

    let shown = app.state.visible_indices().len();
    let total = app.state.catalog().len();

    let status = Line::from(vec![
        Span::styled(" [q]", Style::default().fg(Color::Gray)),
        Span::raw("uit "),
        Span::styled("[h/l]", Style::default().fg(Color::Gray)),
        Span::raw("swatch "),
        Span::styled("[enter]", Style::default().fg(Color::Gray)),
        Span::raw("copy "),
        Span::styled("[s]", Style::default().fg(Color::Gray)),
        Span::raw("tar "),
        Span::styled("[f]", Style::default().fg(Color::Gray)),
        Span::raw("ormat "),
        Span::styled(format!(" {shown}/{total} palettes "), Style::default().fg(Color::Yellow)),
    ]);

    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White)),
        area,
    );

    if app.show_top_button() {
        f.render_widget(
            Paragraph::new(layout::TOP_BUTTON)
                .style(Style::default().bg(colors::ACCENT).fg(Color::Black)),
            layout::top_button_rect(area),
        );
    }
}
