//! Time-based interpolation for the animated number counters.

pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Result of advancing the animation to a frame timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterStep {
    Running(f64),
    Finished(f64),
}

impl CounterStep {
    pub fn value(self) -> f64 {
        match self {
            CounterStep::Running(v) | CounterStep::Finished(v) => v,
        }
    }

    pub fn is_finished(self) -> bool {
        matches!(self, CounterStep::Finished(_))
    }
}

/// Linear ramp from 0 to a target over a fixed duration.
///
/// The rounding mode is fixed when the target is set: targets with a
/// fractional part are shown with one decimal, whole targets are floored.
/// Every restart begins again from 0.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    duration_ms: f64,
    float_format: bool,
    started_at: Option<f64>,
    displayed: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(end: f64, duration_ms: f64) -> Self {
        let target = sanitize(end);
        Self {
            target,
            duration_ms,
            float_format: target.fract() != 0.0,
            started_at: None,
            displayed: 0.0,
            finished: false,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn displayed(&self) -> f64 {
        self.displayed
    }

    pub fn is_float_format(&self) -> bool {
        self.float_format
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Points the counter at a new target and rewinds it to 0. The next
    /// [`advance`](Self::advance) call becomes the start of the ramp.
    pub fn retarget(&mut self, end: f64, duration_ms: f64) {
        *self = Self::new(end, duration_ms);
    }

    /// Advances to the frame timestamp `now` (milliseconds).
    pub fn advance(&mut self, now: f64) -> CounterStep {
        if self.finished {
            return CounterStep::Finished(self.displayed);
        }

        let start = *self.started_at.get_or_insert(now);
        let fraction = if self.duration_ms > 0.0 && self.duration_ms.is_finite() {
            ((now - start) / self.duration_ms).max(0.0)
        } else {
            1.0
        };

        if fraction < 1.0 {
            self.displayed = self.round(fraction * self.target);
            CounterStep::Running(self.displayed)
        } else {
            self.displayed = self.target;
            self.finished = true;
            tracing::trace!(target = self.target, "Counter finished");
            CounterStep::Finished(self.displayed)
        }
    }

    fn round(&self, value: f64) -> f64 {
        if self.float_format {
            (value * 10.0).round() / 10.0
        } else {
            value.floor()
        }
    }
}

fn sanitize(end: f64) -> f64 {
    if end.is_finite() {
        end
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(end: f64, duration: f64, frame_ms: f64) -> Vec<f64> {
        let mut animation = CounterAnimation::new(end, duration);
        let mut now = 1_000.0;
        let mut values = Vec::new();
        loop {
            let step = animation.advance(now);
            values.push(step.value());
            if step.is_finished() {
                break;
            }
            now += frame_ms;
        }
        values
    }

    fn has_at_most_one_decimal(v: f64) -> bool {
        let scaled = v * 10.0;
        (scaled - scaled.round()).abs() < 1e-9
    }

    #[test]
    fn integer_target_ramps_monotonically_and_lands_exactly() {
        for end in [1.0, 20.0, 1200.0, 350_000.0, 2_000_000.0] {
            let values = run(end, DEFAULT_DURATION_MS, 16.0);
            assert_eq!(*values.last().unwrap(), end);
            assert!(values.windows(2).all(|w| w[0] <= w[1]), "ramp for {end} not monotonic");
            assert!(values.iter().all(|v| v.fract() == 0.0));
        }
    }

    #[test]
    fn fractional_target_keeps_one_decimal() {
        let values = run(6.2, DEFAULT_DURATION_MS, 16.0);
        assert!(values.iter().all(|v| has_at_most_one_decimal(*v)));
        assert_eq!(*values.last().unwrap(), 6.2);
    }

    #[test]
    fn float_format_is_decided_by_target() {
        assert!(CounterAnimation::new(4.8, 1000.0).is_float_format());
        assert!(CounterAnimation::new(-12.5, 1000.0).is_float_format());
        assert!(!CounterAnimation::new(12.0, 1000.0).is_float_format());
    }

    #[test]
    fn first_frame_starts_at_zero() {
        let mut animation = CounterAnimation::new(100.0, 1000.0);
        assert_eq!(animation.advance(5_000.0), CounterStep::Running(0.0));
        assert_eq!(animation.advance(5_500.0), CounterStep::Running(50.0));
        assert_eq!(animation.advance(6_000.0), CounterStep::Finished(100.0));
        assert!(animation.is_finished());
        assert_eq!(animation.advance(9_000.0), CounterStep::Finished(100.0));
    }

    #[test]
    fn zero_target_is_trivial() {
        let values = run(0.0, 500.0, 100.0);
        assert!(values.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn negative_target_interpolates_linearly() {
        let mut animation = CounterAnimation::new(-12.5, 1000.0);
        animation.advance(0.0);
        assert_eq!(animation.advance(500.0), CounterStep::Running(-6.3));
        assert_eq!(animation.advance(1000.0), CounterStep::Finished(-12.5));
    }

    #[test]
    fn nan_target_renders_zero() {
        let mut animation = CounterAnimation::new(f64::NAN, 1000.0);
        assert_eq!(animation.target(), 0.0);
        animation.advance(0.0);
        assert_eq!(animation.advance(2000.0), CounterStep::Finished(0.0));
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let mut animation = CounterAnimation::new(42.0, 0.0);
        assert_eq!(animation.advance(10.0), CounterStep::Finished(42.0));
    }

    #[test]
    fn retarget_restarts_from_zero() {
        let mut animation = CounterAnimation::new(100.0, 1000.0);
        animation.advance(0.0);
        animation.advance(1000.0);
        assert_eq!(animation.displayed(), 100.0);

        // Restart-from-zero: the new ramp does not continue from 100.
        animation.retarget(367.0, 1000.0);
        assert_eq!(animation.displayed(), 0.0);
        assert_eq!(animation.advance(2000.0), CounterStep::Running(0.0));
        assert_eq!(animation.advance(2500.0), CounterStep::Running(183.0));
    }

    #[test]
    fn retarget_to_same_value_replays_ramp() {
        let mut animation = CounterAnimation::new(10.0, 100.0);
        animation.advance(0.0);
        animation.advance(100.0);
        animation.retarget(10.0, 100.0);
        assert!(!animation.is_finished());
        assert_eq!(animation.advance(500.0), CounterStep::Running(0.0));
    }
}
