// ABOUTME: Chat widget — renders chat messages into styled ratatui Lines.
// ABOUTME: User and assistant messages get distinct prefixes; each carries its HH:MM time.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::chat::{Message, Sender};

/// Render chat messages into styled Lines for display. When `sending` is set,
/// a placeholder line for the pending reply is appended.
pub fn render_chat_lines(messages: &[Message], sending: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let time_style = Style::default().fg(Color::DarkGray);

    for (idx, msg) in messages.iter().enumerate() {
        if idx > 0 {
            lines.push(Line::from(""));
        }

        let (prefix, prefix_style) = match msg.sender {
            Sender::User => (
                "❯ ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Sender::Assistant => (
                "⏺ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        };

        // First line gets the prefix and time, subsequent lines are indented.
        for (i, text) in msg.text.split('\n').enumerate() {
            if i == 0 {
                lines.push(Line::from(vec![
                    Span::styled(prefix, prefix_style),
                    Span::raw(text.to_string()),
                    Span::styled(format!("  {}", msg.display_time()), time_style),
                ]));
            } else {
                lines.push(Line::from(Span::raw(format!("  {}", text))));
            }
        }
    }

    if sending {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "⏺ …",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}
