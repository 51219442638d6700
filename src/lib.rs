//! # lm35-poll
//!
//! Polling-mode driver for the LM35 analog temperature sensor read
//! through a microcontroller ADC.
//!
//! **Key features:**
//! - **Single acquisition routine** - busy guard, bounded poll, scale to Celsius
//! - **Explicit errors** - `Result` with [`ReadError`], no in-band sentinel codes
//! - **Platform-agnostic** - any HAL can implement the [`PollAdc`] trait
//! - **Const configuration** - reference voltage and poll budget fixed at compile time
//! - **embedded-hal bridge** - run on any `embedded_hal::adc::OneShot` converter
//!
//! One conversion per call, no internal retry, no buffering, no
//! calibration. The caller owns retry policy on [`ReadError::Busy`] and
//! [`ReadError::Conversion`].
//!
//! ## Optional Features
//!
//! - `defmt` - derive `defmt::Format` on public enums for RTT logging hosts
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate embedded_hal;
extern crate nb;

// Optional dependencies (feature-gated)
#[cfg(feature = "defmt")]
extern crate defmt;

// ============================================================================
// Module Declarations
// ============================================================================

// Peripheral capability
pub mod adc;

// Compile-time scaling configuration
pub mod config;

// Error handling
pub mod error;

// Acquisition and comparison queries
pub mod reader;

// embedded-hal one-shot bridge
pub mod adapter;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Peripheral capability
pub use adc::{AdcState, PollAdc};

// Configuration
pub use config::{Lm35Vref5Config, Lm35dConfig, SensorConfig};

// Error types
pub use error::ReadError;

// The reader
pub use reader::Lm35;

// Bridge
pub use adapter::OneShotAdapter;

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
