// ABOUTME: Main TUI rendering function — assembles header, tab bar, active view, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::directory::{emergency_contacts, nearby_resources};
use crate::tui::state::{ChatView, Tab, TuiState};
use crate::tui::widgets::chat::render_chat_lines;
use crate::tui::widgets::directory::{contact_lines, resource_lines};
use crate::tui::widgets::quick_actions::quick_action_line;
use crate::tui::widgets::status::{StatusBarParams, status_line};

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, state: &mut TuiState, chat: &ChatView<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Active view
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(
            " SafeConnect",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " — Community Support Assistant",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let titles: Vec<Line<'static>> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[1]);

    match state.tab {
        Tab::Chat => render_chat_tab(frame, state, chat, chunks[2]),
        Tab::Resources => {
            render_directory(frame, state, resource_lines(&nearby_resources()), chunks[2])
        }
        Tab::Emergency => {
            render_directory(frame, state, contact_lines(&emergency_contacts()), chunks[2])
        }
    }

    // Status bar
    let status = status_line(&StatusBarParams {
        endpoint: &state.endpoint,
        message_count: chat.messages.len(),
        session_start: state.session_start,
        sending: chat.sending,
    });
    frame.render_widget(Paragraph::new(status), chunks[3]);
}

fn render_chat_tab(frame: &mut Frame, state: &mut TuiState, chat: &ChatView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Messages
            Constraint::Length(1), // Quick actions
            Constraint::Length(3), // Input
        ])
        .split(area);

    let chat_chunk = chunks[0];
    let chat_paragraph =
        Paragraph::new(render_chat_lines(chat.messages, chat.sending)).wrap(Wrap { trim: false });

    // Use ratatui's own line_count() so the scroll bound matches the wrapped
    // rendering exactly.
    let total_lines = wrapped_height(&chat_paragraph, chat_chunk.width);
    let max_scroll = total_lines.saturating_sub(chat_chunk.height);
    if state.scroll_offset > max_scroll {
        state.scroll_offset = max_scroll;
    }

    // scroll_offset is lines scrolled up from the bottom (0 = at bottom)
    let scroll = max_scroll.saturating_sub(state.scroll_offset);
    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);

    frame.render_widget(Paragraph::new(quick_action_line(chat.sending)), chunks[1]);

    // Input area
    let input_chunk = chunks[2];
    let mut input_block = Block::default().borders(Borders::TOP | Borders::BOTTOM);
    if chat.sending {
        input_block = input_block.title(Span::styled(
            " sending... ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let input = if state.input.is_empty() && !chat.sending {
        Paragraph::new(Span::styled(
            "Type your message...",
            Style::default().fg(Color::DarkGray),
        ))
    } else if chat.sending {
        Paragraph::new(Span::styled(
            state.input.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(state.input.clone())
    };
    frame.render_widget(input.block(input_block), input_chunk);

    if !chat.sending && input_chunk.width > 0 && input_chunk.height > 1 {
        state.clamp_cursor();

        // Visual width of the text before the cursor.
        let prefix: String = state.input.chars().take(state.cursor_pos).collect();
        let visual_col = UnicodeWidthStr::width(prefix.as_str());
        let max_visual_col = input_chunk.width.saturating_sub(1) as usize;
        let clamped_visual_col = visual_col.min(max_visual_col);

        let cursor_x = input_chunk.x.saturating_add(clamped_visual_col as u16);
        // +1 for the top border.
        let cursor_y = input_chunk.y.saturating_add(1);
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn render_directory(frame: &mut Frame, state: &mut TuiState, lines: Vec<Line<'static>>, area: Rect) {
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total_lines = wrapped_height(&paragraph, area.width);
    let max_scroll = total_lines.saturating_sub(area.height);
    if state.directory_scroll > max_scroll {
        state.directory_scroll = max_scroll;
    }
    frame.render_widget(paragraph.scroll((state.directory_scroll, 0)), area);
}

/// Rendered height of a wrapped paragraph, saturating at `u16::MAX`.
fn wrapped_height(paragraph: &Paragraph<'_>, width: u16) -> u16 {
    u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX)
}
