// ABOUTME: Emergency contacts — hotlines for emergencies, crises, support, and local services.
// ABOUTME: Fixed listing shown on the Emergency tab.

/// Category of an emergency contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Crisis,
    Emergency,
    Support,
    Services,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub phone: &'static str,
    pub description: &'static str,
    pub kind: ContactKind,
    pub available: &'static str,
}

/// Footer shown below the contact list.
pub const SAFETY_REMINDER: &str = "Remember: If you're in immediate danger, call 911. \
All hotlines listed here are free and confidential.";

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "Emergency Services",
            phone: "911",
            description: "Police, Fire, Medical Emergency",
            kind: ContactKind::Emergency,
            available: "24/7",
        },
        EmergencyContact {
            name: "Crisis Hotline",
            phone: "988",
            description: "Suicide & Crisis Lifeline",
            kind: ContactKind::Crisis,
            available: "24/7",
        },
        EmergencyContact {
            name: "Homeless Services Hotline",
            phone: "211",
            description: "Connect to local resources and services",
            kind: ContactKind::Services,
            available: "24/7",
        },
        EmergencyContact {
            name: "Domestic Violence Hotline",
            phone: "1-800-799-7233",
            description: "National domestic violence support",
            kind: ContactKind::Support,
            available: "24/7",
        },
    ]
}
