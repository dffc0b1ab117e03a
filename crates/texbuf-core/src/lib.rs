/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the texbuf family of crates
//!
//! This crate provides the primitives a pixel buffer and its
//! encoders need to agree on
//!
//! It currently contains
//!
//! - The uncompressed pixel format enumeration and its per-format layout queries
//! - The per-pixel channel codec, mapping a channel selector to bytes and back
//! - The compressed texture format enumeration (classification only, no codecs)
//! - Unorm quantization helpers
//! - Encoder options shared by encoders for texbuf buffers
//!
//! This library is `#[no_std]` with the `alloc` feature needed for defining `Vec`
//! which some helpers use.
//!
//! # Features
//!  - `std`: Enables `#[no_std]` compilation support.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
//!  - `log`: Routes the crate's diagnostics through the `log` crate,
//!     otherwise they compile to nothing
//!
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod codec;
pub mod compressed;
pub mod log;
pub mod options;
pub mod pixel_format;
pub mod serde;
pub mod unorm;
