#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Keyboard`**: Debounces a set of buttons sampled from one periodic context
//! - **`Button`**: A storage slot holding one registered input and its debounce state
//! - **`ButtonId`**: 1-based handle returned when registering a button
//! - **`ButtonStatus`**: Last confirmed state (`Active` or `Inactive`)
//! - **`ButtonEvent`**: One-shot edge (`Pressed` or `Released`), taken once
//! - **`PinReader`**: Trait to implement for your GPIO
//! - **`CircularQueue`**: Fixed-capacity FIFO over caller-provided storage
//!
//! Neither component allocates. Storage for buttons and queue slots is owned
//! by the caller and borrowed for the component's lifetime, so both can live
//! in `static` memory or on the stack of the main loop.

pub mod keyboard;
pub mod pins;
pub mod queue;

pub use keyboard::{Button, ButtonEvent, ButtonId, ButtonStatus, Keyboard, KeyboardError};
pub use pins::{PinLevel, PinReader};
pub use queue::{CircularQueue, QueueError};

#[cfg(feature = "embedded-hal")]
pub use pins::HalPins;
