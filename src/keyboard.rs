//! Polled button debouncer with state management and event hand-off.
//!
//! Provides [`Keyboard`] which samples a set of registered buttons on every
//! call to [`Keyboard::main_function`] and converts raw pin levels into a
//! confirmed [`ButtonStatus`] plus a one-shot [`ButtonEvent`] per button.
//!
//! An edge is trusted only after the configured number of consecutive samples
//! show the new level. Any contradicting sample during confirmation drops the
//! attempt without emitting an event.

use crate::pins::{PinLevel, PinReader};

/// Confirmed state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonStatus {
    /// Released, or never confirmed as pressed.
    #[default]
    Inactive,
    /// Pressed and held.
    Active,
}

/// Edge reported once per confirmed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button has been pressed.
    Pressed,
    /// The button has been released.
    Released,
}

/// Handle to a registered button.
///
/// Ids are 1-based in registration order. Id 0 is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonId(pub u8);

impl From<u8> for ButtonId {
    fn from(id: u8) -> Self {
        ButtonId(id)
    }
}

impl From<ButtonId> for u8 {
    fn from(id: ButtonId) -> Self {
        id.0
    }
}

/// Errors that can occur during keyboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyboardError {
    /// Every storage slot already holds a registered button.
    CapacityExceeded { capacity: usize },
}

impl core::fmt::Display for KeyboardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeyboardError::CapacityExceeded { capacity } => {
                write!(f, "keyboard is full, all {} buttons registered", capacity)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeyboardError {}

/// Phase of the per-button debounce state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Phase {
    /// Waiting for the active level.
    Idle,
    /// Confirming a press.
    Press,
    /// Pressed, waiting for the inactive level.
    Hold,
    /// Confirming a release.
    Release,
}

/// One physical input and its debounce state.
///
/// Values created with [`Button::new`] are empty storage slots; the keyboard
/// fills them in on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pin: u8,
    port: u8,
    active_level: PinLevel,
    counter: u8,
    status: ButtonStatus,
    event: Option<ButtonEvent>,
    phase: Phase,
}

impl Button {
    /// Creates an empty storage slot.
    pub const fn new() -> Self {
        Self {
            pin: 0,
            port: 0,
            active_level: PinLevel::Low,
            counter: 0,
            status: ButtonStatus::Inactive,
            event: None,
            phase: Phase::Idle,
        }
    }

    fn registered(pin: u8, port: u8, active_level: PinLevel) -> Self {
        Self {
            pin,
            port,
            active_level,
            ..Self::new()
        }
    }

    /// Pin the button is wired to.
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Port the pin belongs to.
    pub fn port(&self) -> u8 {
        self.port
    }

    /// Level that means "pressed".
    pub fn active_level(&self) -> PinLevel {
        self.active_level
    }

    /// Last confirmed status.
    pub fn status(&self) -> ButtonStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == ButtonStatus::Active
    }

    /// Returns `true` if an event is waiting to be taken. Does not clear it.
    pub fn has_event(&self) -> bool {
        self.event.is_some()
    }

    /// Advances the state machine by one sample.
    ///
    /// The mismatch check runs before the threshold check and ends the tick,
    /// so a contradicting sample never confirms an edge.
    fn sample(&mut self, level: PinLevel, samples: u8) {
        let active = level == self.active_level;

        match self.phase {
            Phase::Idle => {
                if active {
                    self.phase = Phase::Press;
                    self.counter = 0;
                    self.confirm_press(samples);
                }
            }
            Phase::Press => {
                if !active {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("press glitch on port {=u8} pin {=u8}", self.port, self.pin);
                    self.phase = Phase::Idle;
                    return;
                }
                self.confirm_press(samples);
            }
            Phase::Hold => {
                if !active {
                    self.phase = Phase::Release;
                    self.counter = 0;
                    self.confirm_release(samples);
                }
            }
            Phase::Release => {
                if active {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("release glitch on port {=u8} pin {=u8}", self.port, self.pin);
                    self.phase = Phase::Hold;
                    return;
                }
                self.confirm_release(samples);
            }
        }
    }

    fn confirm_press(&mut self, samples: u8) {
        self.counter = self.counter.saturating_add(1);
        if self.counter >= samples {
            #[cfg(feature = "defmt")]
            defmt::trace!("pressed on port {=u8} pin {=u8}", self.port, self.pin);
            self.event = Some(ButtonEvent::Pressed);
            self.status = ButtonStatus::Active;
            self.phase = Phase::Hold;
        }
    }

    fn confirm_release(&mut self, samples: u8) {
        self.counter = self.counter.saturating_add(1);
        if self.counter >= samples {
            #[cfg(feature = "defmt")]
            defmt::trace!("released on port {=u8} pin {=u8}", self.port, self.pin);
            self.event = Some(ButtonEvent::Released);
            self.status = ButtonStatus::Inactive;
            self.phase = Phase::Idle;
        }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounces a set of buttons sampled from a single periodic context.
///
/// The keyboard borrows caller-allocated storage for its buttons and owns the
/// pin reader it samples them through. Call [`main_function`](Self::main_function)
/// at a fixed period; that period is the debounce time unit.
///
/// # Type Parameters
/// * `'a` - Lifetime of the button storage
/// * `P` - Pin reader implementation type
pub struct Keyboard<'a, P: PinReader> {
    buttons: &'a mut [Button],
    registered: usize,
    samples: u8,
    pins: P,
}

impl<'a, P: PinReader> Keyboard<'a, P> {
    /// Creates a keyboard with no registered buttons.
    ///
    /// # Arguments
    /// * `storage` - Button slots; its length is the keyboard capacity
    /// * `samples` - Consecutive samples required to confirm an edge
    /// * `pins` - Pin reader used to sample every button
    pub fn new(storage: &'a mut [Button], samples: u8, pins: P) -> Self {
        Self {
            buttons: storage,
            registered: 0,
            samples,
            pins,
        }
    }

    /// Registers a button in the next free slot.
    ///
    /// The new button starts inactive, with no pending event.
    ///
    /// # Errors
    /// * `CapacityExceeded` - Every slot is already registered; nothing changes
    pub fn register(
        &mut self,
        pin: u8,
        port: u8,
        active_level: PinLevel,
    ) -> Result<ButtonId, KeyboardError> {
        let capacity = self.capacity();
        let id = u8::try_from(self.registered + 1)
            .map_err(|_| KeyboardError::CapacityExceeded { capacity })?;

        let Some(slot) = self.buttons.get_mut(self.registered) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("button registration rejected, capacity {=usize}", capacity);
            return Err(KeyboardError::CapacityExceeded { capacity });
        };

        *slot = Button::registered(pin, port, active_level);
        self.registered += 1;

        #[cfg(feature = "defmt")]
        defmt::debug!("registered button {=u8} on port {=u8} pin {=u8}", id, port, pin);

        Ok(ButtonId(id))
    }

    /// Returns the confirmed status of a button.
    ///
    /// Unknown ids report [`ButtonStatus::Inactive`].
    pub fn status(&self, id: ButtonId) -> ButtonStatus {
        self.button(id)
            .map_or(ButtonStatus::Inactive, Button::status)
    }

    /// Takes the pending event of a button, leaving none behind.
    ///
    /// Each confirmed edge is returned at most once. Unknown ids report `None`.
    pub fn take_event(&mut self, id: ButtonId) -> Option<ButtonEvent> {
        self.button_mut(id).and_then(|button| button.event.take())
    }

    /// Samples every registered button once, in registration order.
    pub fn main_function(&mut self) {
        let samples = self.samples;

        for button in self.buttons[..self.registered].iter_mut() {
            let level = self.pins.read_pin(button.port, button.pin);
            button.sample(level, samples);
        }
    }

    /// Returns the registered button with this id.
    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        let idx = usize::from(id.0).checked_sub(1)?;
        self.registered_buttons().get(idx)
    }

    fn button_mut(&mut self, id: ButtonId) -> Option<&mut Button> {
        let idx = usize::from(id.0).checked_sub(1)?;
        self.buttons[..self.registered].get_mut(idx)
    }

    fn registered_buttons(&self) -> &[Button] {
        &self.buttons[..self.registered]
    }

    /// Iterates over registered buttons with their ids.
    pub fn buttons(&self) -> impl Iterator<Item = (ButtonId, &Button)> {
        self.registered_buttons()
            .iter()
            .enumerate()
            .map(|(idx, button)| (ButtonId(idx as u8 + 1), button))
    }

    /// Maximum number of buttons this keyboard can hold.
    pub fn capacity(&self) -> usize {
        self.buttons.len().min(usize::from(u8::MAX))
    }

    /// Number of registered buttons.
    pub fn len(&self) -> usize {
        self.registered
    }

    pub fn is_empty(&self) -> bool {
        self.registered == 0
    }

    pub fn is_full(&self) -> bool {
        self.registered >= self.capacity()
    }

    /// Consecutive samples required to confirm an edge.
    pub fn samples(&self) -> u8 {
        self.samples
    }

    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Consumes the keyboard and returns the pin reader.
    pub fn release(self) -> P {
        self.pins
    }
}
