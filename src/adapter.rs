//! Bridge from `embedded-hal` one-shot ADCs to the [`PollAdc`] capability.
//!
//! HALs that expose their converter through
//! [`embedded_hal::adc::OneShot`] (RP2040, MSP430, ...) hide the
//! start/poll/stop cycle behind a single blocking read. `OneShotAdapter`
//! wraps such an ADC plus one channel pin so the [`Lm35`](crate::Lm35)
//! reader can drive it unchanged.

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::adc::{AdcState, PollAdc};

/// Adapter implementing [`PollAdc`] over an `embedded-hal` 0.2 one-shot ADC.
///
/// Semantics relative to a register-level implementation:
/// - the channel is never observably `Busy` (the HAL read does not
///   return until the conversion finished), so the busy guard always
///   passes
/// - `start_conversion()` and `stop_conversion()` are no-ops; the HAL
///   owns the conversion cycle
/// - `poll_for_conversion()` performs the blocking read; the millisecond
///   budget is advisory because `OneShot` offers no deadline hook
#[derive(Debug)]
pub struct OneShotAdapter<ADC, A, Pin> {
    adc: A,
    pin: Pin,
    sample: u16,
    _adc_marker: PhantomData<ADC>,
}

impl<ADC, A, Pin> OneShotAdapter<ADC, A, Pin>
where
    A: OneShot<ADC, u16, Pin>,
    Pin: Channel<ADC>,
{
    /// Wrap a one-shot ADC and the channel pin the sensor is wired to.
    pub fn new(adc: A, pin: Pin) -> Self {
        Self {
            adc,
            pin,
            sample: 0,
            _adc_marker: PhantomData,
        }
    }

    /// Consume the adapter and hand back the ADC and pin.
    pub fn release(self) -> (A, Pin) {
        (self.adc, self.pin)
    }
}

impl<ADC, A, Pin> PollAdc for OneShotAdapter<ADC, A, Pin>
where
    A: OneShot<ADC, u16, Pin>,
    Pin: Channel<ADC>,
{
    type Error = A::Error;

    fn state(&self) -> AdcState {
        AdcState::Idle
    }

    fn start_conversion(&mut self) {}

    fn poll_for_conversion(&mut self, _timeout_ms: u32) -> Result<(), Self::Error> {
        self.sample = nb::block!(self.adc.read(&mut self.pin))?;
        Ok(())
    }

    fn sample(&mut self) -> u16 {
        self.sample
    }

    fn stop_conversion(&mut self) {}
}
