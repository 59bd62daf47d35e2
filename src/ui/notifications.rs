use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use swatchbook::toast::Toast;

use super::colors;

/// Stack toasts in the top-right corner of `area`, newest on top.
pub fn render(f: &mut Frame, toasts: &[Toast], area: Rect) {
    let mut y = area.y;
    for toast in toasts.iter().rev() {
        if y + 3 > area.y + area.height {
            break;
        }
        let width = (toast.message.chars().count() as u16 + 4).min(area.width);
        let rect = Rect {
            x: area.x + area.width - width,
            y,
            width,
            height: 3,
        };
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(format!(" {}", toast.message))
                .style(Style::default().bg(colors::TOAST_BG).fg(colors::TOAST_FG))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(colors::ACCENT)),
                ),
            rect,
        );
        y += 3;
    }
}
