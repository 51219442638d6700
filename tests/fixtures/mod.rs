//! Test fixtures and utilities for lm35-poll testing.
//!
//! Provides:
//! - `MockAdc`: scripted implementation of the PollAdc trait
//! - Constructors for the common busy/idle/failing peripheral scenarios

#![allow(dead_code)]

use lm35_poll::{AdcState, PollAdc};
use std::collections::VecDeque;

// ============================================================================
// MockAdc - Scripted Peripheral Implementation
// ============================================================================

/// Mock ADC peripheral for testing.
///
/// Scripts the state, per-call poll outcomes, and per-call samples, and
/// records every start/poll/stop so tests can assert on the exact call
/// pattern the driver produced. Uses `std` types (VecDeque, Vec) since
/// tests run with std support.
#[derive(Debug)]
pub struct MockAdc {
    /// State reported to every `state()` query
    state: AdcState,

    /// Outcome queue for `poll_for_conversion()`; `Ok` once drained
    poll_outcomes: VecDeque<Result<(), ()>>,

    /// Sample queue for `sample()`; repeats the last value once drained
    samples: VecDeque<u16>,
    last_sample: u16,

    /// Number of `start_conversion()` calls
    pub starts: usize,

    /// Number of `stop_conversion()` calls
    pub stops: usize,

    /// Number of `sample()` calls
    pub sample_reads: usize,

    /// Timeout argument of every `poll_for_conversion()` call, in order
    pub poll_timeouts: Vec<u32>,
}

impl MockAdc {
    /// Idle peripheral that converts `raw` on every acquisition.
    pub fn idle(raw: u16) -> Self {
        Self {
            state: AdcState::Idle,
            poll_outcomes: VecDeque::new(),
            samples: VecDeque::new(),
            last_sample: raw,
            starts: 0,
            stops: 0,
            sample_reads: 0,
            poll_timeouts: Vec::new(),
        }
    }

    /// Peripheral whose regular channel is mid-conversion.
    pub fn busy() -> Self {
        let mut adc = Self::idle(0);
        adc.state = AdcState::Busy;
        adc
    }

    /// Idle peripheral whose every poll times out.
    pub fn poll_fails() -> Self {
        let mut adc = Self::idle(0);
        adc.poll_outcomes.push_back(Err(()));
        adc
    }

    /// Idle peripheral converting the given codes on successive acquisitions.
    pub fn idle_sequence(raws: &[u16]) -> Self {
        let mut adc = Self::idle(*raws.last().unwrap_or(&0));
        adc.samples = raws.iter().copied().collect();
        adc
    }

    /// Script the outcome of the next poll (queued after earlier scripts).
    pub fn script_poll(&mut self, outcome: Result<(), ()>) {
        self.poll_outcomes.push_back(outcome);
    }

    /// Flip the reported channel state.
    pub fn set_state(&mut self, state: AdcState) {
        self.state = state;
    }

    /// True if the driver never touched start/poll/stop.
    pub fn untouched(&self) -> bool {
        self.starts == 0 && self.stops == 0 && self.poll_timeouts.is_empty()
    }
}

impl PollAdc for MockAdc {
    type Error = ();

    fn state(&self) -> AdcState {
        self.state
    }

    fn start_conversion(&mut self) {
        self.starts += 1;
    }

    fn poll_for_conversion(&mut self, timeout_ms: u32) -> Result<(), ()> {
        self.poll_timeouts.push(timeout_ms);
        self.poll_outcomes.pop_front().unwrap_or(Ok(()))
    }

    fn sample(&mut self) -> u16 {
        self.sample_reads += 1;
        if let Some(raw) = self.samples.pop_front() {
            self.last_sample = raw;
        }
        self.last_sample
    }

    fn stop_conversion(&mut self) {
        self.stops += 1;
    }
}
