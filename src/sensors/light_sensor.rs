//! Ambient light (photoresistor) input channel.
//!
//! A light-dependent resistor in a voltage divider, read through an
//! ESP32-S3 ADC channel and normalized to 0.0 – 1.0 (0.0 = dark,
//! 1.0 = full daylight).  Same dual-target layout as
//! [`mode_dial`](super::mode_dial).

use core::sync::atomic::{AtomicU16, Ordering};

static SIM_LIGHT_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_light_adc(raw: u16) {
    SIM_LIGHT_ADC.store(raw, Ordering::Relaxed);
}

const ADC_FULL_SCALE: u16 = 4095;

pub struct LightSensor {
    _adc_gpio: i32,
}

impl LightSensor {
    pub fn new(adc_gpio: i32) -> Self {
        Self {
            _adc_gpio: adc_gpio,
        }
    }

    /// Current ambient light level, normalized to 0.0 – 1.0.
    pub fn read(&mut self) -> f32 {
        let raw = self.read_adc();
        f32::from(raw.min(ADC_FULL_SCALE)) / f32::from(ADC_FULL_SCALE)
    }

    #[cfg(target_os = "espidf")]
    fn read_adc(&self) -> u16 {
        crate::drivers::hw_init::adc1_read(crate::drivers::hw_init::ADC1_CH_LIGHT)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_adc(&self) -> u16 {
        SIM_LIGHT_ADC.load(Ordering::Relaxed)
    }
}
