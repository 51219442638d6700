//! ADC peripheral abstraction for platform-agnostic acquisition.
//!
//! The `PollAdc` trait models the handful of operations a polling-mode
//! acquisition needs from a regular-conversion ADC channel: query the
//! busy/idle state, start a conversion, wait for completion within a
//! budget, read the converted code, and stop the conversion. Any HAL
//! (STM32, RP2040, a host-side simulation, ...) can implement it.

/// Regular-conversion channel state as reported by the peripheral.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcState {
    /// No conversion in flight; the channel may be started.
    Idle,

    /// A conversion is in flight on the regular channel.
    Busy,
}

/// Platform-agnostic polling-mode ADC trait.
///
/// The driver calls these in a fixed sequence per acquisition:
/// `state()`, then (if idle) `start_conversion()`,
/// `poll_for_conversion()`, `sample()` on success, and finally
/// `stop_conversion()` on every path that started a conversion.
///
/// Implementations must not block in `state()`; it is the cheap guard
/// callers rely on to avoid stacking conversions on a channel mid-cycle.
pub trait PollAdc {
    /// Platform-specific poll failure type.
    type Error;

    /// Non-blocking state query for the regular-conversion channel.
    fn state(&self) -> AdcState;

    /// Start a conversion on the regular channel.
    fn start_conversion(&mut self);

    /// Block until the conversion completes or `timeout_ms` elapses.
    ///
    /// Returns:
    /// - `Ok(())` when the conversion finished and a sample is available
    /// - `Err(Self::Error)` on timeout or hardware-reported failure
    fn poll_for_conversion(&mut self, timeout_ms: u32) -> Result<(), Self::Error>;

    /// Read the most recently converted raw code.
    ///
    /// Only meaningful after `poll_for_conversion()` returned `Ok`.
    /// The LM35 driver expects 12-bit codes in `[0, 4095]`.
    fn sample(&mut self) -> u16;

    /// Stop the conversion and return the channel to idle.
    fn stop_conversion(&mut self);
}
