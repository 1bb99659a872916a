use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener_with_options, UseEventListenerOptions};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::scroll::{ScrollTracker, SectionGeometry, Viewport};

pub const SECTION_COUNT: usize = 6;

/// Node references for the scroll container and each slide section.
///
/// A reference reads `None` until its element mounts, which doubles as the
/// readiness signal for everything that measures the page.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    container: NodeRef<html::Div>,
    sections: [NodeRef<html::Section>; SECTION_COUNT],
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            container: NodeRef::new(),
            sections: std::array::from_fn(|_| NodeRef::new()),
        }
    }

    pub fn container(&self) -> NodeRef<html::Div> {
        self.container
    }

    pub fn section(&self, index: usize) -> NodeRef<html::Section> {
        self.sections[index]
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.container.get_untracked().map(|el| {
            Viewport::new(el.scroll_top() as f64, el.client_height() as f64)
        })
    }

    fn section_geometry(&self) -> Vec<Option<SectionGeometry>> {
        self.sections
            .iter()
            .map(|s| {
                s.get_untracked().map(|el| {
                    SectionGeometry::new(el.offset_top() as f64, el.offset_height() as f64)
                })
            })
            .collect()
    }

    /// Placement of any descendant element in container coordinates.
    pub fn geometry_of(&self, el: &web_sys::Element) -> Option<SectionGeometry> {
        let container = self.container.get_untracked()?;
        let outer = container.get_bounding_client_rect();
        let inner = el.get_bounding_client_rect();
        Some(SectionGeometry::new(
            inner.top() - outer.top() + container.scroll_top() as f64,
            inner.height(),
        ))
    }

    /// Smooth-scrolls section `index` to the top of the container.
    /// Unknown or unmounted sections are ignored.
    pub fn scroll_to(&self, index: usize) {
        let Some(section) = self.sections.get(index).and_then(|s| s.get_untracked()) else {
            log::debug!("section {index} is not mounted");
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Index of the section nearest the viewport centre, updated on scroll while
/// `enabled` is true.
pub fn use_scroll_tracking(refs: SectionRefs, enabled: Signal<bool>) -> ReadSignal<usize> {
    let tracker = StoredValue::new(ScrollTracker::default());
    let (active, set_active) = signal(0usize);

    let recompute = move || {
        if !enabled.get_untracked() {
            return;
        }
        let changed = tracker
            .try_update_value(|t| t.update(&refs.section_geometry(), refs.viewport()))
            .flatten();
        if let Some(index) = changed {
            set_active.set(index);
        }
    };

    let _ = use_event_listener_with_options(
        refs.container,
        ev::scroll,
        move |_| recompute(),
        UseEventListenerOptions::default().passive(true),
    );

    // runs once the container mounts, and again whenever tracking switches on
    Effect::new(move |_| {
        if refs.container.get().is_some() && enabled.get() {
            recompute();
        }
    });

    active
}
