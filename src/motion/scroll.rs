use super::TimerState;

/// Window geometry at the time of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollSample {
    pub y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSample {
    fn distance_from_bottom(&self) -> f64 {
        self.document_height - (self.y + self.viewport_height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub header: bool,
    pub bottom_nav: bool,
}

impl Default for Visibility {
    fn default() -> Self {
        Self {
            header: true,
            bottom_nav: true,
        }
    }
}

/// Derives header / bottom-nav visibility from the scroll direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollWatcher {
    state: TimerState,
    hide_offset: f64,
    footer_threshold: f64,
    pinned: bool,
    last_y: f64,
    visibility: Visibility,
}

impl ScrollWatcher {
    pub fn new(hide_offset: f64, footer_threshold: f64) -> Self {
        Self {
            state: TimerState::Idle,
            hide_offset,
            footer_threshold,
            pinned: false,
            last_y: 0.0,
            visibility: Visibility::default(),
        }
    }

    pub fn start(&mut self, y: f64) -> bool {
        let started = self.state.start();
        if started {
            self.last_y = y;
        }
        started
    }

    pub fn cancel(&mut self) {
        self.state.cancel();
    }

    /// Keep the header visible regardless of direction (used on the home route).
    pub fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
        if pinned {
            self.visibility.header = true;
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Feed one scroll event. Returns the new visibility, or `None` when the
    /// watcher is not running.
    pub fn observe(&mut self, sample: ScrollSample) -> Option<Visibility> {
        if !self.state.is_running() {
            return None;
        }
        let y = sample.y;
        if self.pinned {
            self.visibility.header = true;
        } else if y > self.last_y && y > self.hide_offset {
            self.visibility.header = false;
        } else if y < self.last_y {
            self.visibility.header = true;
        }
        if sample.document_height > 0.0 {
            self.visibility.bottom_nav = sample.distance_from_bottom() > self.footer_threshold;
        }
        self.last_y = y;
        Some(self.visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn watcher() -> ScrollWatcher {
        let mut w = ScrollWatcher::new(100.0, 200.0);
        assert!(w.start(0.0));
        w
    }

    fn at(y: f64) -> ScrollSample {
        ScrollSample {
            y,
            ..Default::default()
        }
    }

    fn header(w: &mut ScrollWatcher, y: f64) -> bool {
        w.observe(at(y)).expect("running").header
    }

    #[test]
    fn test_no_hide_near_top() {
        let mut w = watcher();
        assert!(header(&mut w, 40.0));
        assert!(header(&mut w, 100.0));
        assert!(!header(&mut w, 101.0));
    }

    #[test]
    fn test_direction_changes() {
        let mut w = watcher();
        assert!(!header(&mut w, 500.0));
        assert!(!header(&mut w, 500.0));
        assert!(header(&mut w, 450.0));
        assert!(!header(&mut w, 460.0));
    }

    #[test]
    fn test_pinned_header() {
        let mut w = watcher();
        assert!(!header(&mut w, 500.0));
        w.set_pinned(true);
        assert!(w.visibility().header);
        assert!(header(&mut w, 900.0));
    }

    #[test]
    fn test_bottom_nav_hides_near_footer() {
        let mut w = watcher();
        let far = ScrollSample {
            y: 100.0,
            viewport_height: 800.0,
            document_height: 3000.0,
        };
        assert!(w.observe(far).expect("running").bottom_nav);
        let near = ScrollSample { y: 2000.0, ..far };
        assert!(!w.observe(near).expect("running").bottom_nav);
    }

    #[test]
    fn test_cancelled_ignores_events() {
        let mut w = watcher();
        w.cancel();
        assert_eq!(w.observe(at(900.0)), None);
        assert!(w.visibility().header);
    }
}
