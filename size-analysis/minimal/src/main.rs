#![no_std]
#![no_main]

use cortex_m_rt::entry;
use keypad_queue::{Button, CircularQueue, Keyboard, PinLevel, PinReader};
use panic_halt as _;

// ============================================================================
// Minimal PinReader Implementation
// ============================================================================

/// Reads levels from a volatile word so the optimizer cannot fold the
/// debounce state machine away
pub struct MinimalPins {
    word: u32,
}

impl PinReader for MinimalPins {
    fn read_pin(&mut self, port: u8, pin: u8) -> PinLevel {
        let word = core::hint::black_box(self.word);
        let bit = (u32::from(port) * 8 + u32::from(pin)) & 31;
        PinLevel::from(word & (1 << bit) != 0)
    }
}

/// Record size typical of a key-event log entry
#[derive(Clone, Copy, Default)]
pub struct KeyRecord {
    id: u8,
    pressed: bool,
    tick: u32,
}

// ============================================================================
// Library Usage
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn exercise_library() {
    let mut buttons = [Button::new(); 8];
    let mut keyboard = Keyboard::new(&mut buttons, 5, MinimalPins { word: 0 });

    for pin in 0..8 {
        let _ = keyboard.register(pin, 0, PinLevel::Low);
    }

    let mut slots = [KeyRecord::default(); 16];
    let mut queue = CircularQueue::new(&mut slots);

    for tick in 0..32u32 {
        keyboard.pins_mut().word = core::hint::black_box(tick.wrapping_mul(0x9E37_79B9));
        keyboard.main_function();

        for id in 1..=8u8 {
            if let Some(event) = keyboard.take_event(id.into()) {
                let _ = queue.write(KeyRecord {
                    id,
                    pressed: event == keypad_queue::ButtonEvent::Pressed,
                    tick,
                });
            }
        }
    }

    while let Ok(record) = queue.read() {
        core::hint::black_box((record.id, record.pressed, record.tick));
    }
    queue.flush();

    core::hint::black_box(queue);
    core::hint::black_box(keyboard);
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    exercise_library();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
