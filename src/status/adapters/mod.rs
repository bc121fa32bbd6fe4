//! Adapter implementations for status persistence.

pub mod memory;
pub mod postgres;
