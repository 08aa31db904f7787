// ABOUTME: Nearby community resources — shelters, food banks, clinics, and social services.
// ABOUTME: Fixed listing shown on the Find Services tab.

/// Category of a community resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Shelter,
    Food,
    Healthcare,
    Services,
}

impl ResourceKind {
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Shelter => "shelter",
            ResourceKind::Food => "food",
            ResourceKind::Healthcare => "healthcare",
            ResourceKind::Services => "services",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub name: &'static str,
    pub kind: ResourceKind,
    pub address: &'static str,
    pub phone: Option<&'static str>,
    pub hours: &'static str,
    pub distance: &'static str,
    pub available: bool,
}

/// Radius the listing covers.
pub const SEARCH_RADIUS: &str = "2 miles";

pub fn nearby_resources() -> Vec<Resource> {
    vec![
        Resource {
            name: "Downtown Emergency Shelter",
            kind: ResourceKind::Shelter,
            address: "123 Main St, Downtown",
            phone: Some("(555) 123-4567"),
            hours: "24/7",
            distance: "0.3 mi",
            available: true,
        },
        Resource {
            name: "Community Food Bank",
            kind: ResourceKind::Food,
            address: "456 Oak Ave",
            phone: Some("(555) 234-5678"),
            hours: "Mon-Fri 9AM-5PM",
            distance: "0.5 mi",
            available: true,
        },
        Resource {
            name: "Free Health Clinic",
            kind: ResourceKind::Healthcare,
            address: "789 Pine St",
            phone: Some("(555) 345-6789"),
            hours: "Tue, Thu 8AM-4PM",
            distance: "0.7 mi",
            available: true,
        },
        Resource {
            name: "Social Services Center",
            kind: ResourceKind::Services,
            address: "321 Elm St",
            phone: Some("(555) 456-7890"),
            hours: "Mon-Fri 8AM-6PM",
            distance: "1.2 mi",
            available: true,
        },
    ]
}
