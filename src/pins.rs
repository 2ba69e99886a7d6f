//! Pin-read capability consumed by the debounce engine.
//!
//! Defines the [`PinReader`] trait for hardware abstraction and the
//! [`PinLevel`] type it reports. With the `embedded-hal` feature enabled,
//! [`HalPins`] serves `PinReader` from a table of `embedded-hal` input pins.

/// Logic level of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    /// Logic 0.
    #[default]
    Low,
    /// Logic 1.
    High,
}

impl PinLevel {
    /// Returns the opposite level.
    #[inline]
    pub fn inverted(self) -> Self {
        match self {
            PinLevel::Low => PinLevel::High,
            PinLevel::High => PinLevel::Low,
        }
    }

    /// Returns `true` for [`PinLevel::High`].
    #[inline]
    pub fn is_high(self) -> bool {
        self == PinLevel::High
    }
}

impl From<bool> for PinLevel {
    fn from(high: bool) -> Self {
        if high { PinLevel::High } else { PinLevel::Low }
    }
}

impl From<PinLevel> for bool {
    fn from(level: PinLevel) -> Self {
        level.is_high()
    }
}

/// Trait for abstracting digital input hardware.
///
/// Implement this for your board's GPIO (register reads, a HAL's input pins,
/// an I/O expander, etc.) so the debounce engine can sample buttons. Port and
/// pin are opaque identifiers chosen by the integrator when registering
/// buttons. The read is synchronous and cannot fail; handle hardware errors
/// internally and report a level.
pub trait PinReader {
    /// Returns the current logic level of `pin` on `port`.
    fn read_pin(&mut self, port: u8, pin: u8) -> PinLevel;
}

#[cfg(feature = "embedded-hal")]
pub use hal::HalPins;

#[cfg(feature = "embedded-hal")]
mod hal {
    use super::{PinLevel, PinReader};
    use embedded_hal::digital::InputPin;

    /// A port × pin table of `embedded-hal` input pins.
    ///
    /// Coordinates that have no pin attached, or that fall outside the table,
    /// read as [`PinLevel::Low`]. So do pins whose read returns an error.
    ///
    /// # Type Parameters
    /// * `P` - Input pin type (must be the same for every slot, use a
    ///   type-erased pin such as an `AnyPin`-backed input)
    /// * `PORTS` - Number of ports in the table
    /// * `PINS` - Number of pins per port
    pub struct HalPins<P: InputPin, const PORTS: usize, const PINS: usize> {
        ports: [[Option<P>; PINS]; PORTS],
    }

    impl<P: InputPin, const PORTS: usize, const PINS: usize> HalPins<P, PORTS, PINS> {
        /// Creates an empty table.
        pub fn new() -> Self {
            Self {
                ports: core::array::from_fn(|_| core::array::from_fn(|_| None)),
            }
        }

        /// Attaches `input` at `port`/`pin`.
        ///
        /// # Returns
        /// * `Ok(Some(previous))` - A pin was already attached there and is handed back
        /// * `Ok(None)` - The slot was empty
        /// * `Err(input)` - The coordinates are outside the table
        pub fn attach(&mut self, port: u8, pin: u8, input: P) -> Result<Option<P>, P> {
            match self.slot_mut(port, pin) {
                Some(slot) => Ok(slot.replace(input)),
                None => Err(input),
            }
        }

        /// Detaches and returns the pin at `port`/`pin`, if any.
        pub fn detach(&mut self, port: u8, pin: u8) -> Option<P> {
            self.slot_mut(port, pin).and_then(Option::take)
        }

        fn slot_mut(&mut self, port: u8, pin: u8) -> Option<&mut Option<P>> {
            self.ports
                .get_mut(usize::from(port))
                .and_then(|pins| pins.get_mut(usize::from(pin)))
        }
    }

    impl<P: InputPin, const PORTS: usize, const PINS: usize> Default for HalPins<P, PORTS, PINS> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<P: InputPin, const PORTS: usize, const PINS: usize> PinReader for HalPins<P, PORTS, PINS> {
        fn read_pin(&mut self, port: u8, pin: u8) -> PinLevel {
            let Some(input) = self.slot_mut(port, pin).and_then(Option::as_mut) else {
                return PinLevel::Low;
            };

            match input.is_high() {
                Ok(high) => PinLevel::from(high),
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("pin read failed on port {=u8} pin {=u8}", port, pin);
                    PinLevel::Low
                }
            }
        }
    }
}
