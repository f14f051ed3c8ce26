//! Per-iteration run telemetry.
//!
//! Search loops emit one [`IterationEvent`] per iteration. Every runner
//! collects the events into a [`Trace`] returned with its result, and
//! `run_with_sink` additionally forwards them to a caller-supplied
//! [`TelemetrySink`]. Plotting and reporting live outside the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scores observed at the end of one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationEvent {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Score of the solution the search is currently standing on.
    pub explored: f64,
    /// Best score seen so far.
    pub best: f64,
    /// Population mean (genetic algorithm only).
    pub average: Option<f64>,
    /// Temperature used this iteration (simulated annealing only).
    pub temperature: Option<f64>,
}

impl IterationEvent {
    pub fn new(iteration: usize, explored: f64, best: f64) -> Self {
        Self {
            iteration,
            explored,
            best,
            average: None,
            temperature: None,
        }
    }

    pub fn with_average(mut self, average: f64) -> Self {
        self.average = Some(average);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Receives iteration events as they happen.
pub trait TelemetrySink {
    fn record(&mut self, event: &IterationEvent);
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &mut S {
    fn record(&mut self, event: &IterationEvent) {
        (**self).record(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TelemetrySink for NullSink {
    fn record(&mut self, _event: &IterationEvent) {}
}

/// Forwards events to the `log` facade at trace level.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    label: &'static str,
}

impl LogSink {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl TelemetrySink for LogSink {
    fn record(&mut self, event: &IterationEvent) {
        log::trace!(
            "{}: iteration {} explored={} best={}{}{}",
            self.label,
            event.iteration,
            event.explored,
            event.best,
            event
                .average
                .map(|a| format!(" average={a}"))
                .unwrap_or_default(),
            event
                .temperature
                .map(|t| format!(" temperature={t}"))
                .unwrap_or_default(),
        );
    }
}

/// Equal-length per-iteration series.
///
/// `explored` and `best` always have one entry per iteration. `average`
/// and `temperature` are either empty or the same length, depending on
/// whether the strategy reports them.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    pub explored: Vec<f64>,
    pub best: Vec<f64>,
    pub average: Vec<f64>,
    pub temperature: Vec<f64>,
}

impl Trace {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            explored: Vec::with_capacity(n),
            best: Vec::with_capacity(n),
            average: Vec::new(),
            temperature: Vec::new(),
        }
    }

    /// Number of recorded iterations.
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl TelemetrySink for Trace {
    fn record(&mut self, event: &IterationEvent) {
        self.explored.push(event.explored);
        self.best.push(event.best);
        if let Some(a) = event.average {
            self.average.push(a);
        }
        if let Some(t) = event.temperature {
            self.temperature.push(t);
        }
    }
}

/// Fans one event out to the run's own trace and the caller's sink.
pub(crate) struct Recorder<'a> {
    trace: Trace,
    sink: &'a mut dyn TelemetrySink,
}

impl<'a> Recorder<'a> {
    pub(crate) fn new(capacity: usize, sink: &'a mut dyn TelemetrySink) -> Self {
        Self {
            trace: Trace::with_capacity(capacity),
            sink,
        }
    }

    pub(crate) fn record(&mut self, event: IterationEvent) {
        self.trace.record(&event);
        self.sink.record(&event);
    }

    pub(crate) fn finish(self) -> Trace {
        self.trace
    }
}
