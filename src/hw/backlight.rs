//! RGB key backlight on three PWM channels.
//!
//! The green and blue LEDs share one PWM slice (adjacent GPIOs), red
//! has its own. Perceived output per channel is `channel x level`,
//! recomputed whenever either the fill color or the brightness
//! changes.

use deckpad::sinks::{BacklightSink, Rgb};
use embassy_rp::peripherals::{PWM_SLICE1, PWM_SLICE2};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::Peri;

/// Full-scale PWM counter value.
const PWM_TOP: u16 = 0xFFFF;

pub struct PwmBacklight {
    red: Pwm<'static>,
    green_blue: Pwm<'static>,
    color: Rgb,
    level: f32,
}

impl PwmBacklight {
    pub fn new(
        slice_r: Peri<'static, PWM_SLICE1>,
        pin_r: Peri<'static, embassy_rp::peripherals::PIN_19>,
        slice_gb: Peri<'static, PWM_SLICE2>,
        pin_g: Peri<'static, embassy_rp::peripherals::PIN_20>,
        pin_b: Peri<'static, embassy_rp::peripherals::PIN_21>,
        color: Rgb,
        level: f32,
    ) -> Self {
        let mut config = PwmConfig::default();
        config.top = PWM_TOP;

        let red = Pwm::new_output_b(slice_r, pin_r, config.clone());
        let green_blue = Pwm::new_output_ab(slice_gb, pin_g, pin_b, config);

        let mut backlight = Self { red, green_blue, color, level };
        backlight.apply();
        backlight
    }

    fn apply(&mut self) {
        let duty = |channel: u8| -> u16 {
            let scaled = channel as f32 / 255.0 * self.level;
            (scaled * PWM_TOP as f32) as u16
        };

        let mut red_config = PwmConfig::default();
        red_config.top = PWM_TOP;
        red_config.compare_b = duty(self.color.r);
        self.red.set_config(&red_config);

        let mut gb_config = PwmConfig::default();
        gb_config.top = PWM_TOP;
        gb_config.compare_a = duty(self.color.g);
        gb_config.compare_b = duty(self.color.b);
        self.green_blue.set_config(&gb_config);
    }
}

impl BacklightSink for PwmBacklight {
    fn set_brightness(&mut self, level: f32) {
        self.level = level;
        self.apply();
    }

    fn fill(&mut self, color: Rgb) {
        self.color = color;
        self.apply();
    }
}
