/// Static portfolio entry shown in the project gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub thumbnail: &'static str,
    pub description: Option<&'static str>,
    pub goal: Option<&'static str>,
    pub solution: Option<&'static str>,
    pub key_points: &'static [&'static str],
    pub stack: &'static [&'static str],
    pub url: Option<&'static str>,
}

pub static PROJECTS: &[Project] = &[
    Project {
        id: "kvarum",
        title: "Kvarum",
        subtitle: "Scheduling application for lectors and listeners to stay in touch",
        thumbnail: "/images/kvarum-thumb.jpg",
        description: Some("A comprehensive scheduling platform that connects educators with their audience. Built with real-time synchronization, calendar integration, and notification systems."),
        goal: Some("Create a seamless scheduling experience that bridges the gap between expert lecturers and students, ensuring real-time availability and easy communication."),
        solution: Some("Developed a robust frontend with WebSockets for real-time updates, different calendar visualizations and implemented a custom notification engine to keep all parties informed."),
        key_points: &[
            "Real-time synchronization",
            "Complex time zone handling",
            "Optimized calendar rendering",
            "Desktop and mobile versions",
            "Scalable notification system",
        ],
        stack: &[
            "Next.js",
            "TypeScript",
            "CSS-in-JS (Styled Components)",
            "AntDesign",
            "WebSockets",
            "Figma",
        ],
        url: Some("https://kvarum.app"),
    },
    Project {
        id: "bus-tracker",
        title: "Bus Tracker",
        subtitle: "Platform to track current bus locations according schedule",
        thumbnail: "/images/bus-tracker-thumb.jpg",
        description: Some("Buses in my city don't have GPS tracking, so I created this platform to track current bus locations according to the schedule."),
        goal: Some("Provide commuters with reliable, real-time bus location estimates in a city lacking GPS-equipped public transit."),
        solution: Some("Engineered a predictive algorithm using GTFS static data and historical transit patterns to interpolate bus positions, visualized through a high-performance Leaflet map interface."),
        key_points: &[
            "Schedule-based position interpolation",
            "GTFS static data processing",
            "Real-time delay compensation logic",
            "Optimized map rendering for transit routes",
            "Flexible UI",
        ],
        stack: &["React", "TypeScript", "Tailwind CSS", "OpenStreetMap", "Leaflet"],
        url: Some("https://lexeor.github.io/bus-tracker/"),
    },
    Project {
        id: "craftistry",
        title: "Craftistry",
        subtitle: "Platform for artisans to sell their products",
        thumbnail: "/images/craftistry-thumb.jpg",
        description: Some("E-commerce marketplace tailored for handmade goods. Includes custom storefront builder, secure payments, and inventory management."),
        goal: Some("Empower independent artisans by providing a specialized platform that combines ease of use with powerful marketing and sales tools."),
        solution: Some("Built a drag-and-drop storefront builder, integrated Stripe for multi-party payments, and designed an intuitive dashboard for artisans to manage their digital and physical inventory."),
        key_points: &[
            "Dynamic storefront builder",
            "Responsive artisan dashboard with drag-and-drop functionality",
            "Telegram API integration",
            "Telegram Mini App integration",
        ],
        stack: &["Remix", "TypeScript", "Tailwind CSS", "Figma"],
        url: None,
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_find_project() {
        assert_eq!(find_project("kvarum").map(|p| p.title), Some("Kvarum"));
        assert!(find_project("configurator").is_none());
    }
}
