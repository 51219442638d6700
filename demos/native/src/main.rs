//! Demo driving the lm35-poll reader against a simulated peripheral.
//!
//! Simulates a converter whose input drifts through the sensor's span,
//! with the occasional busy cycle and poll timeout sprinkled in, and
//! prints the reading plus the three comparison queries for each poll.
//!
//! ```bash
//! cargo run
//! ```

use lm35_poll::{AdcState, Lm35, Lm35dConfig, PollAdc, ReadError};

// =============================================================================
// Simulated Peripheral
// =============================================================================

/// Converter whose code ramps across the 12-bit range, reporting itself
/// busy every 5th cycle and timing out every 7th.
struct SimulatedAdc {
    cycle: u32,
    code: u16,
}

impl SimulatedAdc {
    fn new() -> Self {
        Self { cycle: 0, code: 200 }
    }
}

impl PollAdc for SimulatedAdc {
    type Error = ();

    fn state(&self) -> AdcState {
        if self.cycle % 5 == 4 {
            AdcState::Busy
        } else {
            AdcState::Idle
        }
    }

    fn start_conversion(&mut self) {
        self.code = (self.code + 37) % 4096;
    }

    fn poll_for_conversion(&mut self, _timeout_ms: u32) -> Result<(), ()> {
        if self.cycle % 7 == 6 { Err(()) } else { Ok(()) }
    }

    fn sample(&mut self) -> u16 {
        self.code
    }

    fn stop_conversion(&mut self) {}
}

// =============================================================================
// Polling Loop
// =============================================================================

fn main() {
    let mut adc = SimulatedAdc::new();

    for cycle in 0..20 {
        adc.cycle = cycle;
        let mut reader: Lm35<SimulatedAdc, Lm35dConfig> = Lm35::new(adc);

        match reader.read_celsius() {
            Ok(celsius) => {
                let below = reader.is_below(25.0);
                let above = reader.is_above(25.0);
                let comfy = reader.is_within(20.0, 25.0);
                println!(
                    "cycle {cycle:2}: {celsius:6.2} degC  below25={below:?}  above25={above:?}  comfort={comfy:?}"
                );
            }
            Err(ReadError::Busy) => println!("cycle {cycle:2}: channel busy, retry next cycle"),
            Err(ReadError::Conversion) => println!("cycle {cycle:2}: conversion timed out"),
        }

        adc = reader.release();
    }
}
