//! USB HID boot-protocol keyboard.
//!
//! The dispatch loop mutates a [`KeyState`] and pushes full report
//! snapshots into a fixed-capacity channel; a dedicated task drains the
//! channel and writes reports to the host. A full channel is reported
//! as [`Error::Hid`] and surfaced in the footer - the loop itself never
//! blocks on the transport.

use deckpad::config;
use deckpad::error::Error;
use deckpad::hid::layout;
use deckpad::hid::{KeyState, KeyboardReport, KEYBOARD_REPORT_SIZE};
use deckpad::sinks::HidSink;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_rp::{bind_interrupts, Peri};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::Channel;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config as UsbConfig, UsbDevice};
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport as UsbReport, SerializedDescriptor};

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static HID_STATE: StaticCell<State> = StaticCell::new();

/// Report snapshots queued for the writer task. Sized for the longest
/// tap macro (per-character press/release pairs plus the chords), which
/// queues in full before the writer task gets a turn.
static REPORT_CHANNEL: Channel<ThreadModeRawMutex, KeyboardReport, 64> = Channel::new();

/// Initialise the USB stack and spawn the device + writer tasks.
/// Must be called exactly once. Returns the sink handed to the
/// dispatch controller.
pub fn init(spawner: &Spawner, usb: Peri<'static, USB>) -> UsbHidSink {
    let mut usb_config = UsbConfig::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        Driver::new(usb, Irqs),
        usb_config,
        CONFIG_DESCRIPTOR.init([0; 256]),
        BOS_DESCRIPTOR.init([0; 256]),
        &mut [], // no msos descriptors
        CONTROL_BUF.init([0; 64]),
    );

    let hid_config = HidConfig {
        report_descriptor: UsbReport::desc(),
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let writer = HidWriter::<_, 8>::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    spawner.must_spawn(usb_device_task(builder.build()));
    spawner.must_spawn(report_writer_task(writer));

    UsbHidSink { state: KeyState::new() }
}

#[embassy_executor::task]
async fn usb_device_task(mut device: UsbDevice<'static, Driver<'static, USB>>) {
    device.run().await;
}

#[embassy_executor::task]
async fn report_writer_task(mut writer: HidWriter<'static, Driver<'static, USB>, 8>) {
    info!("USB HID writer task started");

    loop {
        let report = REPORT_CHANNEL.receive().await;
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        report.serialize(&mut buf);
        if let Err(e) = writer.write(&buf).await {
            warn!("HID report write failed: {}", e);
        }
    }
}

/// HID sink backed by the report channel.
pub struct UsbHidSink {
    state: KeyState,
}

impl UsbHidSink {
    fn push(&self, report: KeyboardReport) -> Result<(), Error> {
        REPORT_CHANNEL.try_send(report).map_err(|_| Error::Hid)
    }

    fn push_state(&self) -> Result<(), Error> {
        self.push(self.state.report())
    }
}

impl HidSink for UsbHidSink {
    fn key_down(&mut self, codes: &[u8]) -> Result<(), Error> {
        self.state.press_all(codes);
        self.push_state()
    }

    fn key_up(&mut self, codes: &[u8]) -> Result<(), Error> {
        self.state.release_all(codes);
        self.push_state()
    }

    fn send_key(&mut self, code: u8) -> Result<(), Error> {
        self.state.press(code);
        let result = self.push_state();
        self.state.release(code);
        result.and(self.push_state())
    }

    fn type_text(&mut self, text: &str) -> Result<(), Error> {
        for c in text.chars() {
            let (modifier, code) = match layout::lookup(c) {
                Some(pair) => pair,
                // Characters outside the layout are skipped.
                None => continue,
            };

            // Overlay the character on whatever is currently held, with
            // an interleaved release so repeated letters register.
            let mut press = self.state.report();
            press.modifier |= modifier;
            for slot in press.keycodes.iter_mut() {
                if *slot == 0 {
                    *slot = code;
                    break;
                }
            }
            self.push(press)?;
            self.push_state()?;
        }
        Ok(())
    }
}
