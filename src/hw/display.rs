//! SSD1306 OLED panel over SPI, composing the UI regions.
//!
//! Layout: title centered on the top line, the menu image centered in
//! the body, the info line above the footer, the footer on the bottom
//! line. The centered overlay, when visible, owns the whole panel.
//!
//! The panel holds at most one image resource; showing a new one
//! releases the previous first.

use deckpad::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use deckpad::error::Error;
use deckpad::sinks::{DisplaySink, ImageRef};
use defmt::{error, info, warn};
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{Blocking, ClkPin, Config as SpiConfig, MosiPin, Spi};
use embassy_rp::Peri;
use embassy_time::Timer;
use embedded_graphics::image::{Image, ImageRaw};
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18_BOLD};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text};
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

type Panel = Ssd1306<
    SPIInterface<
        ExclusiveDevice<Spi<'static, SPI1, Blocking>, Output<'static>, NoDelay>,
        Output<'static>,
    >,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct Oled {
    panel: Panel,
    image: Option<ImageRef>,
    centered: Option<(heapless::String<32>, u8)>,
    title: heapless::String<32>,
    footer: heapless::String<40>,
    info: heapless::String<24>,
}

/// Bring up the SPI bus and the panel. A panel that fails to
/// initialise logs and stays dark; the device keeps running.
pub async fn init(
    spi: Peri<'static, SPI1>,
    pin_clk: Peri<'static, impl ClkPin<SPI1>>,
    pin_mosi: Peri<'static, impl MosiPin<SPI1>>,
    pin_dc: Peri<'static, impl embassy_rp::gpio::Pin>,
    pin_rst: Peri<'static, impl embassy_rp::gpio::Pin>,
    pin_cs: Peri<'static, impl embassy_rp::gpio::Pin>,
) -> Oled {
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 8_000_000; // 8 MHz

    let spi = Spi::new_blocking_txonly(spi, pin_clk, pin_mosi, spi_config);

    let dc_pin = Output::new(pin_dc, Level::Low);
    let mut rst_pin = Output::new(pin_rst, Level::High);
    let cs_pin = Output::new(pin_cs, Level::High);

    // Reset pulse
    rst_pin.set_low();
    Timer::after_millis(10).await;
    rst_pin.set_high();
    Timer::after_millis(10).await;

    let spi_device = ExclusiveDevice::new_no_delay(spi, cs_pin).unwrap();
    let interface = SPIInterface::new(spi_device, dc_pin);

    let mut panel = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();

    match panel.init() {
        Ok(()) => info!("display initialized"),
        Err(_) => error!("display initialization failed"),
    }

    Oled {
        panel,
        image: None,
        centered: None,
        title: heapless::String::new(),
        footer: heapless::String::new(),
        info: heapless::String::new(),
    }
}

fn small_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

fn overlay_font(scale: u8) -> &'static MonoFont<'static> {
    match scale {
        0 | 1 => &FONT_6X10,
        2 => &FONT_9X18_BOLD,
        _ => &FONT_10X20,
    }
}

impl Oled {
    fn redraw(&mut self) {
        self.panel.clear_buffer();

        if let Some((text, scale)) = &self.centered {
            // Overlay owns the panel.
            let style = MonoTextStyleBuilder::new()
                .font(overlay_font(*scale))
                .text_color(BinaryColor::On)
                .build();
            let center = Point::new(DISPLAY_WIDTH as i32 / 2, DISPLAY_HEIGHT as i32 / 2);
            let _ = Text::with_text_style(
                text.as_str(),
                center,
                style,
                embedded_graphics::text::TextStyleBuilder::new()
                    .alignment(Alignment::Center)
                    .baseline(Baseline::Middle)
                    .build(),
            )
            .draw(&mut self.panel);
        } else {
            if !self.title.is_empty() {
                let _ = Text::with_alignment(
                    self.title.as_str(),
                    Point::new(DISPLAY_WIDTH as i32 / 2, 10),
                    small_style(),
                    Alignment::Center,
                )
                .draw(&mut self.panel);
            }

            if let Some(image) = self.image {
                let raw = ImageRaw::<BinaryColor>::new(image.data, image.width);
                let top_left = Point::new(
                    ((DISPLAY_WIDTH - image.width.min(DISPLAY_WIDTH)) / 2) as i32,
                    ((DISPLAY_HEIGHT - image.height.min(DISPLAY_HEIGHT)) / 2) as i32,
                );
                let _ = Image::new(&raw, top_left).draw(&mut self.panel);
            }

            if !self.info.is_empty() {
                let _ = Text::with_alignment(
                    self.info.as_str(),
                    Point::new(DISPLAY_WIDTH as i32 / 2, DISPLAY_HEIGHT as i32 - 14),
                    small_style(),
                    Alignment::Center,
                )
                .draw(&mut self.panel);
            }

            if !self.footer.is_empty() {
                let _ = Text::with_alignment(
                    self.footer.as_str(),
                    Point::new(DISPLAY_WIDTH as i32 / 2, DISPLAY_HEIGHT as i32 - 2),
                    small_style(),
                    Alignment::Center,
                )
                .draw(&mut self.panel);
            }
        }

        if self.panel.flush().is_err() {
            warn!("display flush failed");
        }
    }

    fn copy_into<const N: usize>(text: &str, slot: &mut heapless::String<N>) {
        slot.clear();
        // Longer text is cut at capacity; every shipped string fits.
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
    }
}

impl DisplaySink for Oled {
    fn show_image(&mut self, image: ImageRef) -> Result<(), Error> {
        let row_bytes = (image.width + 7) / 8;
        if (image.data.len() as u32) < row_bytes * image.height {
            return Err(Error::Display);
        }
        self.image = Some(image);
        self.redraw();
        Ok(())
    }

    fn release_image(&mut self) {
        self.image = None;
        self.redraw();
    }

    fn show_centered(&mut self, text: &str, scale: u8) {
        let mut copy = heapless::String::new();
        Self::copy_into(text, &mut copy);
        self.centered = Some((copy, scale));
        self.redraw();
    }

    fn clear_centered(&mut self) {
        self.centered = None;
        self.redraw();
    }

    fn set_title(&mut self, text: &str) {
        let mut title = heapless::String::new();
        Self::copy_into(text, &mut title);
        self.title = title;
        self.redraw();
    }

    fn set_footer(&mut self, text: &str) {
        let mut footer = heapless::String::new();
        Self::copy_into(text, &mut footer);
        self.footer = footer;
        self.redraw();
    }

    fn set_info(&mut self, text: &str) {
        let mut info = heapless::String::new();
        Self::copy_into(text, &mut info);
        self.info = info;
        self.redraw();
    }
}
