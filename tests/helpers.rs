//! Shared test helpers to reduce duplication across integration tests.

#![allow(dead_code)]

#[allow(clippy::duplicate_mod)]
#[path = "fixtures/mod.rs"]
mod fixtures;

use fixtures::MockAdc;
use lm35_poll::{Lm35, Lm35dConfig};

// ============================================================================
// Reader Creation Helpers
// ============================================================================

/// Create a reader over an idle peripheral converting `raw` every time.
pub fn reader_with_sample(raw: u16) -> Lm35<MockAdc, Lm35dConfig> {
    Lm35::new(MockAdc::idle(raw))
}

/// Create a reader over a peripheral that is mid-conversion.
pub fn reader_busy() -> Lm35<MockAdc, Lm35dConfig> {
    Lm35::new(MockAdc::busy())
}

/// Create a reader over a peripheral whose poll times out.
pub fn reader_poll_fails() -> Lm35<MockAdc, Lm35dConfig> {
    Lm35::new(MockAdc::poll_fails())
}

// ============================================================================
// Scaling Helpers
// ============================================================================

/// Expected Celsius value for a raw code under the 3.3 V configuration.
pub fn expected_celsius(raw: u16) -> f32 {
    raw as f32 * 3.3 / 4095.0 * 100.0
}

/// Assert two temperatures agree within floating-point tolerance.
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {} degC, got {}",
        expected,
        actual
    );
}
