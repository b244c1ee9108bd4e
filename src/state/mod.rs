//! State Module - Keyboard input types
//!
//! - **Keyboard** - Event, modifier and key state types handed to the key
//!   interceptor and carried inside `KeyEvent`
//! - **Input** - Conversion from crossterm key events

pub mod input;
pub mod keyboard;

pub use input::convert_key_event;
pub use keyboard::*;
