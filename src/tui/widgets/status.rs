// ABOUTME: Status bar widget — renders endpoint, message count, session time, and sending indicator.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use std::time::Instant;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Inputs for the status bar.
pub struct StatusBarParams<'a> {
    pub endpoint: &'a str,
    pub message_count: usize,
    pub session_start: Instant,
    pub sending: bool,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams<'_>) -> Line<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", params.endpoint),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} messages ", params.message_count),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
        Span::styled(
            format!("{} ", format_elapsed(params.session_start.elapsed().as_secs())),
            Style::default().fg(Color::White),
        ),
    ];

    if params.sending {
        spans.push(Span::styled("| ", dim));
        spans.push(Span::styled(
            "sending... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

/// Format elapsed seconds as `Xm YYs`, or `Xh YYm` past an hour.
pub fn format_elapsed(secs: u64) -> String {
    if secs >= 3600 {
        format!("{}h {:02}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn format_elapsed_minutes_and_hours() {
        assert_eq!(format_elapsed(0), "0m 00s");
        assert_eq!(format_elapsed(75), "1m 15s");
        assert_eq!(format_elapsed(3600), "1h 00m");
        assert_eq!(format_elapsed(7325), "2h 02m");
    }

    #[test]
    fn status_line_shows_sending() {
        let line = status_line(&StatusBarParams {
            endpoint: "http://localhost:8000/chat",
            message_count: 3,
            session_start: Instant::now(),
            sending: true,
        });
        let text = text_of(&line);
        assert!(text.contains("http://localhost:8000/chat"));
        assert!(text.contains("3 messages"));
        assert!(text.contains("sending..."));
    }

    #[test]
    fn status_line_idle() {
        let line = status_line(&StatusBarParams {
            endpoint: "http://x/chat",
            message_count: 1,
            session_start: Instant::now(),
            sending: false,
        });
        assert!(!text_of(&line).contains("sending"));
    }
}
