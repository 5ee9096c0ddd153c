//! Output writers for placed LEDs.

pub mod eagle;
