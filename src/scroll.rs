/// Vertical placement of a mounted section inside the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.offset_top + self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.offset_top + self.height
    }
}

/// The visible window of the scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub client_height: f64,
}

impl Viewport {
    pub fn new(scroll_top: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            client_height,
        }
    }

    pub fn midpoint(&self) -> f64 {
        self.scroll_top + self.client_height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.client_height
    }
}

/// Index of the section whose midpoint is closest to the viewport midpoint.
///
/// Ties go to the lowest index, so a section only takes over once it is
/// strictly closer. Returns `None` while any section is unmounted (`None`) or
/// the list is empty.
pub fn nearest_section(sections: &[Option<SectionGeometry>], viewport: Viewport) -> Option<usize> {
    let center = viewport.midpoint();
    let mut closest: Option<(usize, f64)> = None;
    for (index, section) in sections.iter().enumerate() {
        let section = section.as_ref()?;
        let distance = (section.midpoint() - center).abs();
        if distance.is_nan() {
            continue;
        }
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((index, distance)),
        }
    }
    closest.map(|(index, _)| index)
}

/// Remembers the active section between scroll events.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    active: usize,
}

impl ScrollTracker {
    pub fn active(&self) -> usize {
        self.active
    }

    /// Recomputes the active section. Returns the new index only when it changed.
    ///
    /// A missing viewport (container not mounted yet) or any unmounted section
    /// leaves the previous index in place.
    pub fn update(
        &mut self,
        sections: &[Option<SectionGeometry>],
        viewport: Option<Viewport>,
    ) -> Option<usize> {
        let next = nearest_section(sections, viewport?)?;
        if next == self.active {
            return None;
        }
        self.active = next;
        Some(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Scroll,
    Hidden,
}

impl Overflow {
    pub fn as_css(self) -> &'static str {
        match self {
            Overflow::Scroll => "scroll",
            Overflow::Hidden => "hidden",
        }
    }
}

/// The page only scrolls once a language is chosen, and never while the
/// loading gate is up or a project overlay is open.
pub fn container_overflow(
    language_selected: bool,
    global_loading: bool,
    gallery_expanded: bool,
) -> Overflow {
    if language_selected && !global_loading && !gallery_expanded {
        Overflow::Scroll
    } else {
        Overflow::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f64]) -> Vec<Option<SectionGeometry>> {
        let mut top = 0.0;
        heights
            .iter()
            .map(|h| {
                let g = SectionGeometry::new(top, *h);
                top += h;
                Some(g)
            })
            .collect()
    }

    #[test]
    fn test_three_equal_sections() {
        let sections = stacked(&[800.0, 800.0, 800.0]);
        assert_eq!(nearest_section(&sections, Viewport::new(0.0, 1000.0)), Some(0));
        assert_eq!(nearest_section(&sections, Viewport::new(800.0, 1000.0)), Some(1));
        assert_eq!(nearest_section(&sections, Viewport::new(1600.0, 1000.0)), Some(2));
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        // viewport midpoint 500, midpoints 300 and 700
        let sections = vec![
            Some(SectionGeometry::new(0.0, 600.0)),
            Some(SectionGeometry::new(600.0, 200.0)),
        ];
        assert_eq!(nearest_section(&sections, Viewport::new(0.0, 1000.0)), Some(0));
    }

    #[test]
    fn test_result_matches_brute_force_minimum() {
        let sections = stacked(&[900.0, 1200.0, 400.0, 1000.0, 700.0]);
        let mut scroll_top = 0.0;
        while scroll_top <= 4200.0 {
            let viewport = Viewport::new(scroll_top, 900.0);
            let index = nearest_section(&sections, viewport).expect("sections are mounted");
            assert!(index < sections.len());
            let distances = sections
                .iter()
                .map(|s| (s.unwrap().midpoint() - viewport.midpoint()).abs())
                .collect::<Vec<_>>();
            let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
            let first_min = distances.iter().position(|d| *d == min).unwrap();
            assert_eq!(index, first_min, "scroll_top = {scroll_top}");
            scroll_top += 37.0;
        }
    }

    #[test]
    fn test_any_unmounted_section_blocks_the_computation() {
        let mut sections = stacked(&[800.0, 800.0, 800.0]);
        sections[1] = None;
        assert_eq!(nearest_section(&sections, Viewport::new(600.0, 1000.0)), None);
        assert_eq!(nearest_section(&sections, Viewport::new(1600.0, 1000.0)), None);
        assert_eq!(nearest_section(&[None, None], Viewport::new(0.0, 1000.0)), None);
        assert_eq!(nearest_section(&[], Viewport::new(0.0, 1000.0)), None);
    }

    #[test]
    fn test_tracker_keeps_index_while_a_section_is_unmounted() {
        let mut sections = stacked(&[800.0, 800.0, 800.0]);
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.update(&sections, Some(Viewport::new(800.0, 1000.0))), Some(1));

        sections[1] = None;
        assert_eq!(tracker.update(&sections, Some(Viewport::new(1600.0, 1000.0))), None);
        assert_eq!(tracker.active(), 1);
    }

    #[test]
    fn test_tracker_reports_changes_only() {
        let sections = stacked(&[800.0, 800.0, 800.0]);
        let mut tracker = ScrollTracker::default();
        assert_eq!(tracker.update(&sections, Some(Viewport::new(0.0, 1000.0))), None);
        assert_eq!(tracker.update(&sections, Some(Viewport::new(800.0, 1000.0))), Some(1));
        assert_eq!(tracker.update(&sections, Some(Viewport::new(810.0, 1000.0))), None);
        assert_eq!(tracker.active(), 1);
        assert_eq!(tracker.update(&sections, Some(Viewport::new(1600.0, 1000.0))), Some(2));
    }

    #[test]
    fn test_tracker_keeps_index_when_not_ready() {
        let sections = stacked(&[800.0, 800.0, 800.0]);
        let mut tracker = ScrollTracker::default();
        tracker.update(&sections, Some(Viewport::new(1600.0, 1000.0)));
        assert_eq!(tracker.update(&sections, None), None);
        assert_eq!(tracker.update(&[None, None, None], Some(Viewport::new(0.0, 1000.0))), None);
        assert_eq!(tracker.active(), 2);
    }

    #[test]
    fn test_container_overflow() {
        assert_eq!(container_overflow(true, false, false), Overflow::Scroll);
        assert_eq!(container_overflow(false, false, false), Overflow::Hidden);
        assert_eq!(container_overflow(true, true, false), Overflow::Hidden);
        assert_eq!(container_overflow(true, false, true), Overflow::Hidden);
        assert_eq!(Overflow::Hidden.as_css(), "hidden");
    }
}
