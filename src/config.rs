//! Configuration traits and implementations for sensor scaling.
//!
//! The `SensorConfig` trait allows compile-time configuration of the
//! reference voltage, full-scale divisor, sensor gain, and poll timeout
//! without runtime overhead.

/// Sensor configuration trait defining scaling constants and the poll budget.
///
/// All values are const (zero runtime cost). The provided
/// `celsius_from_raw()` applies the LM35 transfer function:
/// `raw * VREF_VOLTS / FULL_SCALE * DEGREES_PER_VOLT`.
///
/// The result is not clamped to the sensor's nominal 0-100 degC span;
/// out-of-range codes scale to out-of-range temperatures.
pub trait SensorConfig {
    /// ADC reference voltage in volts (default: 3.3)
    const VREF_VOLTS: f32;

    /// Divisor for the raw code (default: 4095.0 for a 12-bit converter)
    const FULL_SCALE: f32;

    /// Degrees Celsius per volt of sensor output (default: 100.0, the
    /// inverse of the LM35's 10 mV/degC gain)
    const DEGREES_PER_VOLT: f32;

    /// Fixed poll budget per conversion, in milliseconds (default: 100)
    const POLL_TIMEOUT_MS: u32;

    /// Scale a raw ADC code to degrees Celsius.
    fn celsius_from_raw(raw: u16) -> f32 {
        raw as f32 * Self::VREF_VOLTS / Self::FULL_SCALE * Self::DEGREES_PER_VOLT
    }
}

/// Configuration for an LM35D on a 3.3 V reference.
///
/// The common case for 3.3 V parts (STM32, RP2040):
/// - VREF_VOLTS: 3.3
/// - FULL_SCALE: 4095.0
/// - DEGREES_PER_VOLT: 100.0
/// - POLL_TIMEOUT_MS: 100
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Lm35dConfig;

impl SensorConfig for Lm35dConfig {
    const VREF_VOLTS: f32 = 3.3;
    const FULL_SCALE: f32 = 4095.0;
    const DEGREES_PER_VOLT: f32 = 100.0;
    const POLL_TIMEOUT_MS: u32 = 100;
}

/// Configuration for an LM35 on a 5 V reference.
///
/// For boards running the sensor and converter from a 5 V rail:
/// - VREF_VOLTS: 5.0
/// - FULL_SCALE: 4095.0
/// - DEGREES_PER_VOLT: 100.0
/// - POLL_TIMEOUT_MS: 100
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Lm35Vref5Config;

impl SensorConfig for Lm35Vref5Config {
    const VREF_VOLTS: f32 = 5.0;
    const FULL_SCALE: f32 = 4095.0;
    const DEGREES_PER_VOLT: f32 = 100.0;
    const POLL_TIMEOUT_MS: u32 = 100;
}
