/// Linear conversion from the conditioned sensor voltage to gauge pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transducer {
    /// psig per millivolt of differential input
    pub psig_per_millivolt: f32,
    /// psig at 0 mV
    pub offset_psig: f32,
    /// Sensor range limits, readings are passed through unchanged when `None`
    pub clamp: Option<(f32, f32)>,
}

impl Transducer {
    /// Sensor rated 0..100 psig
    pub const RATED_RANGE: (f32, f32) = (0.0, 100.0);

    pub fn pressure(&self, millivolts: f32) -> f32 {
        let psig = millivolts * self.psig_per_millivolt + self.offset_psig;
        match self.clamp {
            Some((min, max)) => psig.clamp(min, max),
            None => psig,
        }
    }
}

impl Default for Transducer {
    /// 1 mV reads as 1 psig, no clamping
    fn default() -> Self {
        Self {
            psig_per_millivolt: 1.0,
            offset_psig: 0.0,
            clamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ads1115::{Gain, Reading};

    #[test]
    fn identity_mapping() {
        let transducer = Transducer::default();
        assert_eq!(transducer.pressure(0.0), 0.0);
        assert_eq!(transducer.pressure(42.5), 42.5);
        assert_eq!(transducer.pressure(-3.25), -3.25);
    }

    #[test]
    fn raw_to_psig() {
        let reading = Reading::from_raw(799, Gain::One);
        let psig = Transducer::default().pressure(reading.millivolts());
        assert!((psig - 99.9).abs() < 0.05, "{}", psig);
        assert_eq!(psig, 799.0 * Gain::One.lsb() * 1000.0);
    }

    #[test]
    fn out_of_range_passes_through() {
        let transducer = Transducer::default();
        let full_scale = Reading::from_raw(i16::MAX, Gain::TwoThirds).millivolts();
        assert!(transducer.pressure(full_scale) > 6000.0);

        let negative = Reading::from_raw(i16::MIN, Gain::Sixteen).millivolts();
        assert!(transducer.pressure(negative) < -250.0);
    }

    #[test]
    fn clamp_when_enabled() {
        let transducer = Transducer {
            clamp: Some(Transducer::RATED_RANGE),
            ..Transducer::default()
        };
        assert_eq!(transducer.pressure(-12.0), 0.0);
        assert_eq!(transducer.pressure(55.5), 55.5);
        assert_eq!(transducer.pressure(250.0), 100.0);
    }

    #[test]
    fn scale_and_offset() {
        let transducer = Transducer {
            psig_per_millivolt: 0.5,
            offset_psig: -2.0,
            clamp: None,
        };
        assert_eq!(transducer.pressure(10.0), 3.0);
    }
}
