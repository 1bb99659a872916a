/// Scroll offset inside the expanded card past which the title floats over the image.
pub const FLOATING_TITLE_THRESHOLD: i32 = 20;
/// Query parameter that links to an expanded project.
pub const PROJECT_QUERY: &str = "project";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Collapsed,
    Expanded(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    Open(String),
    Backdrop,
    Close,
    Escape,
}

impl GalleryState {
    pub fn expanded(&self) -> Option<&str> {
        match self {
            GalleryState::Collapsed => None,
            GalleryState::Expanded(id) => Some(id),
        }
    }

    /// State a `?project=<id>` link opens the page with.
    pub fn from_link(id: &str, is_known: impl Fn(&str) -> bool) -> Self {
        let mut state = GalleryState::default();
        state.apply(GalleryEvent::Open(id.to_string()), is_known);
        state
    }

    /// Page path mirroring this state.
    pub fn path(&self) -> String {
        project_path(self.expanded())
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, GalleryState::Expanded(_))
    }

    /// Applies `event` and returns whether the state changed.
    ///
    /// Opening replaces whatever was expanded. Opening an id that `is_known`
    /// rejects collapses the gallery instead.
    pub fn apply(&mut self, event: GalleryEvent, is_known: impl Fn(&str) -> bool) -> bool {
        let next = match event {
            GalleryEvent::Open(id) if is_known(&id) => GalleryState::Expanded(id),
            GalleryEvent::Open(id) => {
                log::debug!("unknown project {id}, collapsing");
                GalleryState::Collapsed
            }
            GalleryEvent::Backdrop | GalleryEvent::Close | GalleryEvent::Escape => {
                GalleryState::Collapsed
            }
        };
        if next == *self {
            return false;
        }
        *self = next;
        true
    }
}

pub fn project_path(expanded: Option<&str>) -> String {
    match expanded {
        Some(id) => format!("/?{PROJECT_QUERY}={id}"),
        None => "/".to_string(),
    }
}

pub fn shows_floating_title(scroll_top: i32) -> bool {
    scroll_top > FLOATING_TITLE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::find_project;

    fn known(id: &str) -> bool {
        find_project(id).is_some()
    }

    #[test]
    fn test_open_and_close() {
        let mut state = GalleryState::default();
        assert!(state.apply(GalleryEvent::Open("kvarum".into()), known));
        assert_eq!(state.expanded(), Some("kvarum"));
        assert!(state.apply(GalleryEvent::Backdrop, known));
        assert_eq!(state, GalleryState::Collapsed);

        state.apply(GalleryEvent::Open("kvarum".into()), known);
        assert!(state.apply(GalleryEvent::Close, known));
        assert!(!state.is_expanded());
    }

    #[test]
    fn test_opening_another_replaces_expanded() {
        let mut state = GalleryState::default();
        state.apply(GalleryEvent::Open("kvarum".into()), known);
        assert!(state.apply(GalleryEvent::Open("bus-tracker".into()), known));
        assert_eq!(state, GalleryState::Expanded("bus-tracker".into()));
        assert!(!state.apply(GalleryEvent::Open("bus-tracker".into()), known));
    }

    #[test]
    fn test_escape() {
        let mut state = GalleryState::default();
        assert!(!state.apply(GalleryEvent::Escape, known));
        assert_eq!(state, GalleryState::Collapsed);
        state.apply(GalleryEvent::Open("craftistry".into()), known);
        assert!(state.apply(GalleryEvent::Escape, known));
        assert_eq!(state, GalleryState::Collapsed);
    }

    #[test]
    fn test_unknown_project_collapses() {
        let mut state = GalleryState::default();
        state.apply(GalleryEvent::Open("kvarum".into()), known);
        assert!(state.apply(GalleryEvent::Open("configurator".into()), known));
        assert_eq!(state, GalleryState::Collapsed);
    }

    #[test]
    fn test_links() {
        let state = GalleryState::from_link("kvarum", known);
        assert_eq!(state, GalleryState::Expanded("kvarum".into()));
        assert_eq!(state.path(), "/?project=kvarum");

        // an unknown id must not stay in the address bar
        let state = GalleryState::from_link("configurator", known);
        assert_eq!(state, GalleryState::Collapsed);
        assert_eq!(state.path(), "/");
    }

    #[test]
    fn test_floating_title() {
        assert!(!shows_floating_title(0));
        assert!(!shows_floating_title(20));
        assert!(shows_floating_title(21));
    }
}
