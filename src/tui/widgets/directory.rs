// ABOUTME: Directory widgets — resource and emergency-contact cards as styled ratatui Lines.
// ABOUTME: Used by the Find Services and Emergency tabs.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::directory::{
    ContactKind, EmergencyContact, Resource, ResourceKind, SAFETY_REMINDER, SEARCH_RADIUS,
};

fn resource_color(kind: ResourceKind) -> Color {
    match kind {
        ResourceKind::Shelter => Color::Red,
        ResourceKind::Food => Color::Magenta,
        ResourceKind::Healthcare => Color::Green,
        ResourceKind::Services => Color::White,
    }
}

fn contact_color(kind: ContactKind) -> Color {
    match kind {
        ContactKind::Emergency => Color::Red,
        ContactKind::Crisis => Color::Magenta,
        ContactKind::Support => Color::Green,
        ContactKind::Services => Color::White,
    }
}

/// Render the Find Services tab: a heading, a map placeholder, and one card per resource.
pub fn resource_lines(resources: &[Resource]) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Displaying resources within {}", SEARCH_RADIUS),
            dim.add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Nearby Resources", bold),
            Span::styled(format!("  ({} locations)", resources.len()), dim),
        ]),
    ];

    for resource in resources {
        lines.push(Line::from(""));

        let badge = if resource.available {
            Span::styled(" [Available]", Style::default().fg(Color::Green))
        } else {
            Span::styled(" [Full]", dim)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("■ {}", resource.name),
                bold.fg(resource_color(resource.kind)),
            ),
            badge,
        ]));
        lines.push(Line::from(vec![
            Span::raw(format!("  {}", resource.address)),
            Span::styled(format!("  · {}", resource.distance), dim),
        ]));
        if let Some(phone) = resource.phone {
            lines.push(Line::from(Span::raw(format!("  ☎ {}", phone))));
        }
        lines.push(Line::from(Span::styled(
            format!("  {} · {}", resource.hours, resource.kind.label()),
            dim,
        )));
    }

    lines
}

/// Render the Emergency tab: one card per contact plus the safety reminder.
pub fn contact_lines(contacts: &[EmergencyContact]) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(Span::styled(
            "Emergency Contacts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get immediate help when you need it most",
            dim,
        )),
    ];

    for contact in contacts {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("■ {}", contact.name),
            Style::default()
                .fg(contact_color(contact.kind))
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", contact.description),
            dim,
        )));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  ☎ {}", contact.phone),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  Available {}", contact.available), dim),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        SAFETY_REMINDER,
        dim.add_modifier(Modifier::ITALIC),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{emergency_contacts, nearby_resources};

    fn text_of(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn resource_cards_show_details() {
        let text = text_of(&resource_lines(&nearby_resources()));
        assert!(text.contains("(4 locations)"));
        assert!(text.contains("Downtown Emergency Shelter [Available]"));
        assert!(text.contains("123 Main St, Downtown"));
        assert!(text.contains("0.3 mi"));
        assert!(text.contains("(555) 123-4567"));
        assert!(text.contains("Mon-Fri 9AM-5PM"));
    }

    #[test]
    fn full_resource_is_marked() {
        let mut resources = nearby_resources();
        resources[0].available = false;
        resources[0].phone = None;
        let lines = resource_lines(&resources[..1]);
        let text = text_of(&lines);
        assert!(text.contains("[Full]"));
        assert!(!text.contains("☎"));
    }

    #[test]
    fn contact_cards_end_with_reminder() {
        let lines = contact_lines(&emergency_contacts());
        let text = text_of(&lines);
        assert!(text.contains("Crisis Hotline"));
        assert!(text.contains("☎ 988"));
        assert!(text.contains("Available 24/7"));
        assert_eq!(text_of(&lines[lines.len() - 1..]), SAFETY_REMINDER);
    }
}
