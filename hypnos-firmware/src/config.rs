//! Board constants for the Arduino Uno demo

/// Arduino pin wired to the wake button (PB0, PCINT0)
pub const WAKE_BUTTON_PIN: u8 = 8;

/// PORTB mask for the wake button pull-up (PB0)
pub const BUTTON_MASK: u8 = 1 << 0;

/// PORTB mask for the on-board LED (PB5, Arduino pin 13)
pub const LED_MASK: u8 = 1 << 5;

/// Busy-wait iterations keeping the LED lit after each wake
pub const WAKE_HOLD_LOOPS: u32 = 200_000;
