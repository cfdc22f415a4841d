//! Arduino Uno pin-number to pin-change register mapping
//!
//! The ATmega328P spreads its 23 pin-change inputs over three groups,
//! each with its own mask register and a shared bit position in the
//! control and flag registers. Board pin numbering does not follow the
//! group layout, so the lookup is a plain table.

/// Pin-change interrupt group
///
/// Each group has one mask register (PCMSK0/1/2) and one bit in the
/// group control (PCICR) and flag (PCIFR) registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PcintGroup {
    /// PCINT7:0 - digital pins 8-13, masked by PCMSK0
    Group0,
    /// PCINT14:8 - analog pins A0-A5, masked by PCMSK1
    Group1,
    /// PCINT23:16 - digital pins 0-7, masked by PCMSK2
    Group2,
}

impl PcintGroup {
    /// Bit position of this group in PCICR and PCIFR
    pub fn control_bit(self) -> u8 {
        match self {
            PcintGroup::Group0 => 0,
            PcintGroup::Group1 => 1,
            PcintGroup::Group2 => 2,
        }
    }
}

/// Map an Arduino Uno pin number to its group and mask register bit
///
/// Pins 0-13 are the digital header, 14-19 are A0-A5. Pins without
/// pin-change capability (anything above 19) map to nothing.
pub fn pcint_lookup(pin: u8) -> Option<(PcintGroup, u8)> {
    match pin {
        0..=7 => Some((PcintGroup::Group2, pin)),
        8..=13 => Some((PcintGroup::Group0, pin - 8)),
        14..=19 => Some((PcintGroup::Group1, pin - 14)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digital_pins_map_to_group2() {
        for pin in 0..=7 {
            assert_eq!(pcint_lookup(pin), Some((PcintGroup::Group2, pin)));
        }
    }

    #[test]
    fn test_high_digital_pins_map_to_group0() {
        assert_eq!(pcint_lookup(8), Some((PcintGroup::Group0, 0)));
        assert_eq!(pcint_lookup(13), Some((PcintGroup::Group0, 5)));
    }

    #[test]
    fn test_analog_pins_map_to_group1() {
        assert_eq!(pcint_lookup(14), Some((PcintGroup::Group1, 0)));
        assert_eq!(pcint_lookup(19), Some((PcintGroup::Group1, 5)));
    }

    #[test]
    fn test_unmapped_pins() {
        assert_eq!(pcint_lookup(20), None);
        assert_eq!(pcint_lookup(255), None);
    }

    #[test]
    fn test_control_bits() {
        assert_eq!(PcintGroup::Group0.control_bit(), 0);
        assert_eq!(PcintGroup::Group1.control_bit(), 1);
        assert_eq!(PcintGroup::Group2.control_bit(), 2);
    }
}
