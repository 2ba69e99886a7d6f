//! Shared test infrastructure for keypad-queue integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use keypad_queue::{PinLevel, PinReader};

// ============================================================================
// Mock Pins
// ============================================================================

pub const PORTS: usize = 4;
pub const PINS: usize = 16;

/// Mock GPIO with settable levels that records every read
pub struct MockPins {
    levels: [[PinLevel; PINS]; PORTS],
    reads: heapless::Vec<(u8, u8), 64>,
}

impl MockPins {
    /// All pins start low
    pub fn new() -> Self {
        Self {
            levels: [[PinLevel::Low; PINS]; PORTS],
            reads: heapless::Vec::new(),
        }
    }

    /// All pins start high, as with pull-ups on every input
    pub fn pulled_up() -> Self {
        Self {
            levels: [[PinLevel::High; PINS]; PORTS],
            reads: heapless::Vec::new(),
        }
    }

    pub fn set(&mut self, port: u8, pin: u8, level: PinLevel) {
        self.levels[port as usize][pin as usize] = level;
    }

    /// (port, pin) pairs in the order they were read
    pub fn reads(&self) -> &[(u8, u8)] {
        &self.reads
    }

    pub fn clear_reads(&mut self) {
        self.reads.clear();
    }
}

impl PinReader for MockPins {
    fn read_pin(&mut self, port: u8, pin: u8) -> PinLevel {
        let _ = self.reads.push((port, pin));
        self.levels[port as usize][pin as usize]
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub const A: PinLevel = PinLevel::High;
pub const I: PinLevel = PinLevel::Low;

/// Byte-sized record used to check element-exact copies through the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Record {
    pub id: u16,
    pub payload: [u8; 5],
    pub flag: bool,
}

impl Record {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            payload: [id as u8, 0xA5, 0x5A, (id >> 8) as u8, 0xFF],
            flag: id % 2 == 0,
        }
    }
}
