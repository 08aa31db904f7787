// ABOUTME: Quick-action bar — one line listing the function-key shortcuts for canned requests.
// ABOUTME: Dimmed while a request is outstanding, since new submissions are ignored.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::chat::QuickAction;

fn action_color(action: QuickAction) -> Color {
    match action {
        QuickAction::Shelter => Color::Red,
        QuickAction::Food => Color::Magenta,
        QuickAction::Healthcare => Color::Green,
        QuickAction::Map => Color::Blue,
    }
}

pub fn quick_action_line(sending: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, action) in QuickAction::ALL.into_iter().enumerate() {
        let style = if sending {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(action_color(action))
        };
        spans.push(Span::styled(
            format!(" F{} ", i + 1),
            style.add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{} ", action.label()), style));
    }
    Line::from(spans)
}
