//! The temperature reader: one acquisition routine plus comparison queries.
//!
//! `Lm35` owns the ADC peripheral for its lifetime (constructor
//! injection, no process-wide handle) and exposes blocking reads of the
//! sensed temperature along with three comparison queries layered on the
//! same acquisition sequence.

use core::marker::PhantomData;

use crate::adc::{AdcState, PollAdc};
use crate::config::{Lm35dConfig, SensorConfig};
use crate::error::ReadError;

/// Polling-mode LM35 temperature reader.
///
/// Generic over the ADC capability `A` and the scaling configuration `C`
/// (defaults to [`Lm35dConfig`], a 3.3 V reference). All reads take
/// `&mut self`; exclusive ownership of the peripheral for the duration
/// of one acquisition is enforced by the borrow, not by locking.
///
/// Every operation is a single best-effort attempt:
/// - a busy channel returns [`ReadError::Busy`] without touching the
///   peripheral, so high-frequency pollers never stack conversions
/// - a poll that exceeds the configured budget returns
///   [`ReadError::Conversion`] after stopping the channel, so a stuck
///   peripheral cannot hang the caller forever
///
/// The comparison queries propagate errors instead of comparing them.
/// The C API this design descends from compared its -2 conversion-error
/// code against the threshold as if it were a temperature, so an error
/// could satisfy `< t` for large `t`; the `Result` return closes that
/// hole.
#[derive(Debug)]
pub struct Lm35<A: PollAdc, C: SensorConfig = Lm35dConfig> {
    adc: A,
    _config: PhantomData<C>,
}

impl<A: PollAdc, C: SensorConfig> Lm35<A, C> {
    /// Create a reader from an externally-initialized ADC.
    ///
    /// The peripheral must already be configured (clocks, channel,
    /// sample time); no validation is performed here.
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            _config: PhantomData,
        }
    }

    /// Consume the reader and hand the peripheral back.
    pub fn release(self) -> A {
        self.adc
    }

    /// One conversion: busy guard, start, bounded poll, read, stop.
    ///
    /// The stop runs on the success and the poll-failure path alike; the
    /// busy early-return never started a conversion, so there is nothing
    /// to stop there.
    fn acquire(&mut self) -> Result<u16, ReadError> {
        if self.adc.state() == AdcState::Busy {
            return Err(ReadError::Busy);
        }

        self.adc.start_conversion();
        let raw = self
            .adc
            .poll_for_conversion(C::POLL_TIMEOUT_MS)
            .map(|()| self.adc.sample());
        self.adc.stop_conversion();

        raw.map_err(|_| ReadError::Conversion)
    }

    /// Read one raw ADC code in `[0, 4095]`.
    pub fn read_raw(&mut self) -> Result<u16, ReadError> {
        self.acquire()
    }

    /// Read the temperature in degrees Celsius.
    ///
    /// Scales the raw code with the configured transfer function. The
    /// value is not clamped to the sensor's nominal 0-100 degC span.
    pub fn read_celsius(&mut self) -> Result<f32, ReadError> {
        let raw = self.acquire()?;
        Ok(C::celsius_from_raw(raw))
    }

    /// Is the temperature strictly below `threshold` degC?
    ///
    /// Returns `Ok(false)` at equality.
    pub fn is_below(&mut self, threshold: f32) -> Result<bool, ReadError> {
        let celsius = self.read_celsius()?;
        Ok(celsius < threshold)
    }

    /// Is the temperature strictly above `threshold` degC?
    ///
    /// Returns `Ok(false)` at equality.
    pub fn is_above(&mut self, threshold: f32) -> Result<bool, ReadError> {
        let celsius = self.read_celsius()?;
        Ok(celsius > threshold)
    }

    /// Is the temperature within `[low, high]` degC, inclusive on both ends?
    pub fn is_within(&mut self, low: f32, high: f32) -> Result<bool, ReadError> {
        let celsius = self.read_celsius()?;
        Ok(celsius >= low && celsius <= high)
    }
}
