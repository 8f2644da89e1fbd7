#![warn(clippy::pedantic)]

pub mod memory;
