/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Logging shims used when the `log` feature is disabled
//!
//! Every macro accepts the same arguments as its `log` crate
//! counterpart and expands to nothing.

// #[macro_export] places the macro in the crate root,
// #[doc(hidden)] + "pub use" namespaces it under `zune_dip::log`.
pub use crate::{__debug as debug, __trace as trace, __warn as warn};

#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {};
}
