//! Arduino Uno demonstration firmware
//!
//! Sleeps in power-down until the wake button on pin 8 is pressed, lighting
//! the on-board LED while awake and turning it off on the way back to
//! sleep. Everything interesting happens in `hypnos-core`; this binary
//! only wires the board together.

#![no_std]
#![no_main]

use panic_halt as _;

use avr_device::atmega328p::{Peripherals, PORTB};
use hypnos_core::SleepController;
use hypnos_hal::SleepMode;
use hypnos_hal_avr::{ExintWakeInterrupts, SmcrSleepControl};

mod config;

/// Light the LED. Runs as the post-wake hook, where no peripheral
/// handle is in scope, so the port is stolen for the single write.
fn led_on() {
    let portb = unsafe { &*PORTB::ptr() };
    portb
        .portb
        .modify(|r, w| unsafe { w.bits(r.bits() | config::LED_MASK) });
}

/// Extinguish the LED. Runs as the pre-sleep hook.
fn led_off() {
    let portb = unsafe { &*PORTB::ptr() };
    portb
        .portb
        .modify(|r, w| unsafe { w.bits(r.bits() & !config::LED_MASK) });
}

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().unwrap();

    // LED as output, pull-up on the wake button
    dp.PORTB
        .ddrb
        .modify(|r, w| unsafe { w.bits(r.bits() | config::LED_MASK) });
    dp.PORTB
        .portb
        .modify(|r, w| unsafe { w.bits(r.bits() | config::BUTTON_MASK) });

    let wake = ExintWakeInterrupts::new(dp.EXINT);
    let power = SmcrSleepControl::new(dp.CPU);

    // Pin-change interrupts wake from power-down, so the demo can take
    // the deepest depth available
    let mut sleeper = SleepController::with_mode(wake, power, SleepMode::PowerDown);
    sleeper.register_wake_source(config::WAKE_BUTTON_PIN);
    sleeper.set_on_sleep(Some(led_off));
    sleeper.set_on_wake(Some(led_on));

    // Pin-change wake only works with global interrupts enabled
    // SAFETY: no interrupt-driven shared state exists yet
    unsafe { avr_device::interrupt::enable() };

    loop {
        sleeper.sleep();

        // Hold the LED long enough for the wake to be visible
        for _ in 0..config::WAKE_HOLD_LOOPS {
            avr_device::asm::nop();
        }
    }
}
