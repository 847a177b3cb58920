//! Progress notification.
//!
//! A [`ProgressSink`] is handed to a solve call by the caller and borrowed
//! for its duration only. Reports arrive synchronously on the solving
//! thread, one per outer annealing step, with non-decreasing values in
//! `[0, 1]` and a final value of exactly `1.0`.
//!
//! A sink must not call back into the [`RouteFinder`](crate::RouteFinder)
//! that is reporting to it. The route is not cached until the solve
//! returns, so such a call re-enters the solve and panics.

use std::sync::mpsc::Sender;

/// Receives fractional progress of a running solve.
///
/// Implementations must not query the finder being solved; doing so
/// panics.
pub trait ProgressSink {
    /// Called with the completed fraction, in `[0, 1]`.
    fn report(&mut self, value: f64);
}

impl<F: FnMut(f64)> ProgressSink for F {
    fn report(&mut self, value: f64) {
        self(value)
    }
}

/// A sink that discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _value: f64) {}
}

/// Forwards progress values into an mpsc channel.
///
/// A disconnected receiver is not an error; the report is dropped.
#[derive(Debug, Clone)]
pub struct ChannelProgress(pub Sender<f64>);

impl ProgressSink for ChannelProgress {
    fn report(&mut self, value: f64) {
        let _ = self.0.send(value);
    }
}

/// Fraction of `total` steps done after `completed`, clamped to `[0, 1]`.
pub(crate) fn fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (completed as f64 / total as f64).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |v: f64| seen.push(v);
            let sink: &mut dyn ProgressSink = &mut sink;
            sink.report(0.25);
            sink.report(1.0);
        }
        assert_eq!(seen, vec![0.25, 1.0]);
    }

    #[test]
    fn test_channel_sink() {
        let (tx, rx) = mpsc::channel();
        let mut sink = ChannelProgress(tx);
        sink.report(0.5);
        sink.report(1.0);
        drop(sink);
        assert_eq!(rx.iter().collect::<Vec<_>>(), vec![0.5, 1.0]);
    }

    #[test]
    fn test_channel_sink_disconnected() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        ChannelProgress(tx).report(0.5);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(0, 4), 0.0);
        assert_eq!(fraction(1, 4), 0.25);
        assert_eq!(fraction(4, 4), 1.0);
        assert_eq!(fraction(9, 4), 1.0);
        assert_eq!(fraction(0, 0), 1.0);
    }
}
