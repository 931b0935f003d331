//! Hardware sampling interface

/// Source of raw analog readings
///
/// Implemented by the platform's ADC driver. A call is expected to return
/// quickly (one conversion) and never fails; readings are nominally 0-1023.
pub trait AnalogSampler {
    /// Read the current raw value on `pin`
    fn sample(&mut self, pin: u8) -> u16;
}

impl<F> AnalogSampler for F
where
    F: FnMut(u8) -> u16,
{
    fn sample(&mut self, pin: u8) -> u16 {
        self(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sampler() {
        let mut adc = |pin: u8| u16::from(pin) * 100;
        assert_eq!(adc.sample(3), 300);
        assert_eq!(adc.sample(0), 0);
    }

    #[test]
    fn test_dyn_sampler() {
        let mut count = 0u16;
        let mut adc = move |_pin: u8| {
            count += 1;
            count
        };
        let sampler: &mut dyn AnalogSampler = &mut adc;
        assert_eq!(sampler.sample(0), 1);
        assert_eq!(sampler.sample(0), 2);
    }
}
