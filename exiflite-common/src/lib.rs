//! Primitives shared by the exiflite crates
//!
//! Bounds-checked reads of integers from borrowed byte buffers, the TIFF byte
//! order, checked offset arithmetic and helper macros for integer backed
//! enums.

pub mod byte_order;
pub mod math;
pub mod orientation;
pub mod read;
pub mod utils;

#[doc(hidden)]
pub use paste;
