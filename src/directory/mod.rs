// ABOUTME: Directory module — static listings of nearby resources and emergency contacts.
// ABOUTME: Purely descriptive data rendered as cards by the TUI.

pub mod contacts;
pub mod resources;

pub use contacts::{ContactKind, EmergencyContact, SAFETY_REMINDER, emergency_contacts};
pub use resources::{Resource, ResourceKind, SEARCH_RADIUS, nearby_resources};
