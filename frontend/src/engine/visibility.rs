//! On-screen state for a single observed element.
//!
//! The tracker is driven by the intersection hook in `hooks::use_on_screen`
//! and holds no platform handles itself: the hook acquires an observer when
//! [`VisibilityTracker::attach`] says so and releases it on teardown.

/// Fraction of the element that must enter the viewport to count as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// What the caller should do with its observer after a callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Keep,
    Detach,
}

#[derive(Clone, Debug)]
pub struct VisibilityTracker {
    trigger_once: bool,
    on_screen: bool,
    attached: bool,
    registrations: u32,
    deregistrations: u32,
}

impl VisibilityTracker {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            on_screen: false,
            attached: false,
            registrations: 0,
            deregistrations: 0,
        }
    }

    pub fn is_on_screen(&self) -> bool {
        self.on_screen
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[cfg(test)]
    pub fn registrations(&self) -> u32 {
        self.registrations
    }

    #[cfg(test)]
    pub fn deregistrations(&self) -> u32 {
        self.deregistrations
    }

    /// Called when an element handle becomes available. Returns `false` when
    /// no observer is needed, either because one is already attached or
    /// because a one-shot tracker has already fired.
    pub fn attach(&mut self) -> bool {
        if self.attached || (self.trigger_once && self.on_screen) {
            return false;
        }
        self.attached = true;
        self.registrations += 1;
        tracing::trace!(registrations = self.registrations, "Visibility observer attached");
        true
    }

    /// Feeds one intersection notification into the tracker.
    pub fn on_intersection(&mut self, intersecting: bool) -> Observation {
        if !self.attached {
            return Observation::Detach;
        }

        if intersecting {
            self.on_screen = true;
            if self.trigger_once {
                self.release();
                return Observation::Detach;
            }
        } else if !self.trigger_once {
            self.on_screen = false;
        }
        Observation::Keep
    }

    /// Teardown or handle change. Safe to call repeatedly.
    pub fn detach(&mut self) {
        if self.attached {
            self.release();
        }
    }

    /// Used when the host cannot observe intersections at all.
    pub fn degrade_to_visible(&mut self) {
        tracing::debug!("Intersection observation unavailable, reporting visible");
        self.detach();
        self.on_screen = true;
    }

    fn release(&mut self) {
        self.attached = false;
        self.deregistrations += 1;
        tracing::trace!(deregistrations = self.deregistrations, "Visibility observer released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_detached() {
        let tracker = VisibilityTracker::new(true);
        assert!(!tracker.is_on_screen());
        assert!(!tracker.is_attached());
        assert_eq!(tracker.registrations(), 0);
    }

    #[test]
    fn trigger_once_is_sticky() {
        let mut tracker = VisibilityTracker::new(true);
        assert!(tracker.attach());

        assert_eq!(tracker.on_intersection(false), Observation::Keep);
        assert!(!tracker.is_on_screen());

        assert_eq!(tracker.on_intersection(true), Observation::Detach);
        assert!(tracker.is_on_screen());
        assert!(!tracker.is_attached());

        // Late callbacks after detaching change nothing.
        assert_eq!(tracker.on_intersection(false), Observation::Detach);
        assert!(tracker.is_on_screen());

        // A new handle does not re-arm a fired one-shot tracker.
        assert!(!tracker.attach());
        tracker.detach();

        assert_eq!(tracker.registrations(), 1);
        assert_eq!(tracker.deregistrations(), 1);
    }

    #[test]
    fn continuous_mode_follows_latest_callback() {
        let mut tracker = VisibilityTracker::new(false);
        assert!(tracker.attach());

        let sequence = [true, false, false, true, true, false];
        for intersecting in sequence {
            assert_eq!(tracker.on_intersection(intersecting), Observation::Keep);
            assert_eq!(tracker.is_on_screen(), intersecting);
        }
        assert!(tracker.is_attached());

        tracker.detach();
        tracker.detach();
        assert_eq!(tracker.registrations(), 1);
        assert_eq!(tracker.deregistrations(), 1);
    }

    #[test]
    fn attach_twice_registers_once() {
        let mut tracker = VisibilityTracker::new(false);
        assert!(tracker.attach());
        assert!(!tracker.attach());
        assert_eq!(tracker.registrations(), 1);
    }

    #[test]
    fn reattach_after_handle_change() {
        let mut tracker = VisibilityTracker::new(false);
        assert!(tracker.attach());
        tracker.on_intersection(true);
        tracker.detach();
        assert!(tracker.attach());
        assert_eq!(tracker.registrations(), 2);
        assert_eq!(tracker.deregistrations(), 1);
        assert!(tracker.is_on_screen());
    }

    #[test]
    fn degraded_tracker_reports_visible() {
        let mut tracker = VisibilityTracker::new(true);
        tracker.degrade_to_visible();
        assert!(tracker.is_on_screen());
        assert!(!tracker.attach());
    }
}
