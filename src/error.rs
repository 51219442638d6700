//! Error types for acquisition operations.
//!
//! The `ReadError` enum represents the two recoverable conditions a
//! polling-mode acquisition can hit. Both are single best-effort
//! failures; retry policy belongs to the caller.

use core::fmt;

/// Acquisition error type.
///
/// Replaces the sentinel codes of the classic C-style API (-1 for busy,
/// -2 for conversion failure) with an out-of-band error channel, so a
/// failure can never be mistaken for a valid temperature.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError {
    /// The regular-conversion channel was busy at call time.
    ///
    /// No conversion was started; retry once the channel is idle.
    Busy,

    /// The conversion timed out or the hardware reported a failure.
    ///
    /// The channel was stopped before this was returned.
    Conversion,
}

impl ReadError {
    /// The sentinel code the original C API used for this condition.
    ///
    /// -1 for [`ReadError::Busy`], -2 for [`ReadError::Conversion`].
    /// Offered for hosts migrating from a firmware that exchanged these
    /// codes over a wire; new code should match on the enum instead.
    pub fn legacy_code(&self) -> i8 {
        match self {
            ReadError::Busy => -1,
            ReadError::Conversion => -2,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Busy => write!(f, "ADC busy"),
            ReadError::Conversion => write!(f, "Conversion failed"),
        }
    }
}
