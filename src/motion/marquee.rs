use thiserror::Error;

use super::tween::lerp;

/// Distances this close to the seam count as the start of the loop.
const SEAM_EPSILON: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("marquee speed must be a positive number of pixels per second, got {0}")]
    InvalidSpeed(f64),
}

/// Outcome of handing a measured track width to the marquee.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// Width was zero or unusable; try again next frame.
    Deferred,
    /// Loop is ready; one full pass takes `duration` seconds.
    Ready { duration: f64 },
}

/// The renderable sequence: the input followed by itself, so that sliding
/// by exactly one copy and snapping back to zero is invisible.
pub fn loop_items<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().chain(items.iter()).cloned().collect()
}

/// Scroll state for an endlessly looping, constant-speed horizontal track.
///
/// Internally the position is kept as a travelled `distance` in
/// `[0, track_width)`; the rendered translation is its negation.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    speed: f64,
    track_width: Option<f64>,
    paused: bool,
    reduced_motion: bool,
    frozen: f64,
    /// Current segment: `(start distance, start time)`.
    segment: Option<(f64, f64)>,
}

impl MarqueeState {
    pub fn new(speed: f64) -> Result<Self, MotionError> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(MotionError::InvalidSpeed(speed));
        }
        Ok(Self {
            speed,
            track_width: None,
            paused: false,
            reduced_motion: false,
            frozen: 0.0,
            segment: None,
        })
    }

    /// State for a strip of `len` items. An empty strip has nothing to
    /// measure or animate, so no state is created for it.
    pub fn for_items(len: usize, speed: f64) -> Result<Option<Self>, MotionError> {
        if len == 0 {
            return Ok(None);
        }
        Self::new(speed).map(Some)
    }

    pub fn track_width(&self) -> Option<f64> {
        self.track_width
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_measured(&self) -> bool {
        self.track_width.is_some()
    }

    pub fn is_animating(&self) -> bool {
        self.track_width.is_some() && !self.paused && !self.reduced_motion
    }

    /// Seconds for one full pass over the track.
    pub fn loop_duration(&self) -> Option<f64> {
        self.track_width.map(|w| w / self.speed)
    }

    /// Record the width of one copy of the track and (re)start the loop from
    /// offset 0 at `now`. A paused marquee stays paused.
    pub fn measure(&mut self, width: f64, now: f64) -> Measure {
        if !(width.is_finite() && width > 0.0) {
            return Measure::Deferred;
        }
        self.track_width = Some(width);
        self.frozen = 0.0;
        self.segment = if self.paused { None } else { Some((0.0, now)) };
        Measure::Ready {
            duration: width / self.speed,
        }
    }

    /// Drop the measurement after a resize. The next `measure` restarts the
    /// loop from offset 0.
    pub fn invalidate(&mut self) {
        self.track_width = None;
        self.frozen = 0.0;
        self.segment = None;
    }

    pub fn set_reduced_motion(&mut self, reduced: bool, now: f64) {
        if reduced == self.reduced_motion {
            return;
        }
        self.reduced_motion = reduced;
        self.frozen = 0.0;
        self.segment = match (reduced, self.paused, self.track_width) {
            (false, false, Some(_)) => Some((0.0, now)),
            _ => None,
        };
    }

    fn distance_at(&self, now: f64) -> f64 {
        let width = match self.track_width {
            Some(w) if !self.reduced_motion => w,
            _ => return 0.0,
        };
        if self.paused {
            return self.frozen;
        }
        let Some((from, anchor)) = self.segment else {
            return 0.0;
        };
        let elapsed = (now - anchor).max(0.0);
        let first = (width - from) / self.speed;
        let distance = if elapsed < first {
            lerp(elapsed, first, from, width)
        } else {
            let full = width / self.speed;
            lerp((elapsed - first) % full, full, 0.0, width)
        };
        if distance >= width - SEAM_EPSILON {
            0.0
        } else {
            distance
        }
    }

    /// Horizontal translation in pixels at `now`, in `(-track_width, 0]`.
    pub fn offset_at(&self, now: f64) -> f64 {
        -self.distance_at(now)
    }

    /// Freeze at the interpolated position for `now`. Returns the frozen
    /// offset.
    pub fn pause(&mut self, now: f64) -> f64 {
        if !self.paused {
            self.frozen = self.distance_at(now);
            self.paused = true;
            self.segment = None;
        }
        -self.frozen
    }

    /// Continue from the frozen offset at constant speed. Returns the
    /// duration of the segment up to the seam, or `None` if there was
    /// nothing to resume or no measurement yet.
    pub fn resume(&mut self, now: f64) -> Option<f64> {
        if !self.paused {
            return None;
        }
        self.paused = false;
        let width = self.track_width?;
        if self.frozen >= width - SEAM_EPSILON {
            self.frozen = 0.0;
        }
        if self.reduced_motion {
            return None;
        }
        self.segment = Some((self.frozen, now));
        Some((width - self.frozen) / self.speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn running(speed: f64, width: f64, now: f64) -> MarqueeState {
        let mut m = MarqueeState::new(speed).expect("valid speed");
        assert_eq!(
            m.measure(width, now),
            Measure::Ready {
                duration: width / speed
            }
        );
        m
    }

    #[test]
    fn test_loop_items_duplicates_in_order() {
        assert_eq!(loop_items(&["a", "b", "c"]), vec!["a", "b", "c", "a", "b", "c"]);
        assert!(loop_items::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_empty_strip_has_no_state() {
        assert_eq!(MarqueeState::for_items(0, 80.0), Ok(None));
        // emptiness wins over a bad speed: nothing to warn about
        assert_eq!(MarqueeState::for_items(0, 0.0), Ok(None));
        let m = MarqueeState::for_items(3, 80.0)
            .expect("valid speed")
            .expect("non-empty");
        assert!(!m.is_measured());
        assert_eq!(m.offset_at(5.0), 0.0);
        assert_eq!(
            MarqueeState::for_items(3, f64::NAN).map_err(|e| matches!(e, MotionError::InvalidSpeed(_))),
            Err(true)
        );
    }

    #[test]
    fn test_measurement_sticks_until_invalidated() {
        let mut m = running(100.0, 300.0, 0.0);
        for now in [0.5, 1.0, 10.0] {
            assert!(m.is_measured());
            assert!(m.is_animating());
            m.offset_at(now);
        }
        m.pause(10.0);
        assert!(m.is_measured());
        assert!(!m.is_animating());
        m.invalidate();
        assert!(!m.is_measured());
        assert_eq!(m.track_width(), None);
    }

    #[test]
    fn test_invalid_speed() {
        assert_eq!(MarqueeState::new(0.0), Err(MotionError::InvalidSpeed(0.0)));
        assert!(MarqueeState::new(-5.0).is_err());
        assert!(MarqueeState::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_width_defers() {
        let mut m = MarqueeState::new(80.0).expect("valid speed");
        assert_eq!(m.measure(0.0, 0.0), Measure::Deferred);
        assert_eq!(m.measure(f64::NAN, 0.0), Measure::Deferred);
        assert!(!m.is_measured());
        assert_eq!(m.loop_duration(), None);
        assert_eq!(m.offset_at(10.0), 0.0);
        assert!(matches!(m.measure(640.0, 1.0), Measure::Ready { .. }));
    }

    #[test]
    fn test_periodicity() {
        for (speed, width) in [(80.0, 960.0), (100.0, 300.0), (37.5, 1234.5), (1.0, 1.0)] {
            let m = running(speed, width, 2.0);
            let duration = m.loop_duration().expect("measured");
            assert!(close(duration, width / speed));
            assert_eq!(m.offset_at(2.0), 0.0);
            assert!(close(m.offset_at(2.0 + duration), 0.0));
            let mid = 2.0 + duration * 0.3;
            assert!(close(m.offset_at(mid), m.offset_at(mid + duration)));
            assert!(m.offset_at(mid) < 0.0 && m.offset_at(mid) > -width);
        }
    }

    #[test]
    fn test_pause_preserves_offset() {
        let mut m = running(80.0, 800.0, 0.0);
        let before = m.offset_at(2.5);
        assert!(close(before, -200.0));
        assert!(close(m.pause(2.5), -200.0));
        assert!(m.is_paused());
        // time passes, nothing moves
        assert!(close(m.offset_at(60.0), -200.0));
        let remaining = m.resume(60.0).expect("was paused");
        assert!(close(remaining, (800.0 - 200.0) / 80.0));
        assert!(close(m.offset_at(60.0), -200.0));
        assert!(close(m.offset_at(61.0), -280.0));
        // seam then second pass at full duration
        assert!(close(m.offset_at(60.0 + remaining), 0.0));
        assert!(close(m.offset_at(60.0 + remaining + 5.0), -400.0));
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut m = running(100.0, 300.0, 0.0);
        assert!(close(m.pause(1.0), -100.0));
        assert!(close(m.pause(2.0), -100.0));
        assert!(m.resume(3.0).is_some());
        assert_eq!(m.resume(3.0), None);
    }

    #[test]
    fn test_resume_at_seam_wraps_to_zero() {
        let mut m = running(100.0, 300.0, 0.0);
        assert!(close(m.pause(2.0), -200.0));
        // frozen exactly on the seam
        m.frozen = 300.0;
        let remaining = m.resume(5.0).expect("was paused");
        assert!(close(remaining, 3.0));
        assert_eq!(m.offset_at(5.0), 0.0);
    }

    #[test]
    fn test_resize_restarts_from_zero() {
        let mut m = running(100.0, 300.0, 0.0);
        m.pause(1.0);
        m.invalidate();
        assert!(!m.is_measured());
        assert!(matches!(m.measure(500.0, 4.0), Measure::Ready { .. }));
        assert!(m.is_paused());
        assert_eq!(m.offset_at(9.0), 0.0);
        assert!(close(m.resume(9.0).expect("was paused"), 5.0));
        assert!(close(m.offset_at(10.0), -100.0));
    }

    #[test]
    fn test_reduced_motion_is_static() {
        let mut m = running(100.0, 300.0, 0.0);
        m.set_reduced_motion(true, 1.0);
        assert!(!m.is_animating());
        assert_eq!(m.offset_at(1.5), 0.0);
        assert_eq!(m.offset_at(100.0), 0.0);
        m.set_reduced_motion(false, 100.0);
        assert!(m.is_animating());
        assert!(close(m.offset_at(101.0), -100.0));
    }

    #[test]
    fn test_three_items_end_to_end() {
        let items = loop_items(&['A', 'B', 'C']);
        assert_eq!(items.len(), 6);
        let mut m = MarqueeState::new(100.0).expect("valid speed");
        assert_eq!(m.measure(0.0, 0.0), Measure::Deferred);
        assert_eq!(m.measure(300.0, 0.0), Measure::Ready { duration: 3.0 });
        assert!(close(m.pause(1.5), -150.0));
        let remaining = m.resume(7.0).expect("was paused");
        assert!(close(remaining, 1.5));
        assert!(close(m.offset_at(7.0 + 1.5), 0.0));
        assert!(close(m.offset_at(7.0 + 1.5 + 3.0), 0.0));
        assert!(close(m.offset_at(7.0 + 1.5 + 1.0), -100.0));
    }
}
