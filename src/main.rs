//! deckpad - embedded entry point.
//!
//! Bring-up order: USB first (enumeration starts while the splash is
//! up), then the display, splash, backlight and input devices, then
//! the dispatch controller takes over in a single cooperative loop.
//!
//! Pin map (macro keypad wiring):
//!   Keys 1-12      -> GP1..GP12 (active-low)
//!   Encoder button -> GP0
//!   Encoder A/B    -> GP17/GP18
//!   Backlight RGB  -> GP19 (R), GP20 (G), GP21 (B)
//!   OLED SPI1      -> SCK GP26, MOSI GP27, DC GP24, RST GP23, CS GP22

#![no_std]
#![no_main]

mod hw;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use deckpad::bindings::ModeRegistry;
use deckpad::config;
use deckpad::keymap;
use deckpad::menu::Menu;
use deckpad::sinks::{DisplaySink, WHITE};
use deckpad::ui::Controller;

use hw::backlight::PwmBacklight;
use hw::display::Oled;
use hw::encoder::{EncoderButton, RotaryEncoder};
use hw::keys::KeyScanner;
use hw::BlockingDelay;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("deckpad starting");

    let hid = hw::usb::init(&spawner, p.USB);

    let mut display = hw::display::init(
        p.SPI1, p.PIN_26, p.PIN_27, p.PIN_24, p.PIN_23, p.PIN_22,
    )
    .await;

    let mut button = EncoderButton::new(p.PIN_0.into());
    let mut encoder = RotaryEncoder::new(p.PIN_17.into(), p.PIN_18.into());

    let mut keys = KeyScanner::new([
        p.PIN_1.into(),
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
        p.PIN_8.into(),
        p.PIN_9.into(),
        p.PIN_10.into(),
        p.PIN_11.into(),
        p.PIN_12.into(),
    ]);

    let backlight = PwmBacklight::new(
        p.PWM_SLICE1,
        p.PIN_19,
        p.PWM_SLICE2,
        p.PIN_20,
        p.PIN_21,
        WHITE,
        config::INITIAL_BRIGHTNESS,
    );

    splash(&mut display, &mut button, config::SPLASH_MS, false).await;

    let menu = match Menu::new(&keymap::MENU) {
        Ok(menu) => menu,
        Err(e) => {
            error!("fatal configuration error: {}", e);
            halt().await
        }
    };

    let mut controller = match Controller::new(
        menu,
        ModeRegistry::new(&keymap::MODE_TABLES),
        display,
        hid,
        backlight,
        BlockingDelay,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            error!("fatal configuration error: {}", e);
            halt().await
        }
    };

    controller.start(Instant::now().as_millis());
    info!("entering dispatch loop");

    loop {
        let now = Instant::now().as_millis();

        let delta = encoder.poll();
        if delta != 0 {
            controller.on_encoder_delta(delta, now);
        }

        if button.poll_fell() {
            controller.on_encoder_press(now);
        }

        if let Some(event) = keys.poll() {
            controller.on_key(event.index, event.pressed, now);
        }

        controller.tick(now);
        Timer::after_millis(config::LOOP_TICK_MS).await;
    }
}

/// Boot logo. Waits out the duration, or returns early on an encoder
/// press when `wait_for_press` is set. Blocks the loop by design;
/// input during the splash is dropped.
async fn splash(display: &mut Oled, button: &mut EncoderButton, duration_ms: u64, wait_for_press: bool) {
    if display.show_image(keymap::LOGO).is_err() {
        error!("splash image rejected");
    }

    let deadline = Instant::now() + Duration::from_millis(duration_ms);
    while Instant::now() < deadline {
        if wait_for_press && button.poll_fell() {
            break;
        }
        Timer::after_millis(config::LOOP_TICK_MS).await;
    }

    display.release_image();
}

async fn halt() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}
