//! # rds-decode - A Rust crate for decoding RDS/RBDS radio data groups
//!
//! `rds-decode` turns a stream of four-block RDS (Radio Data System) /
//! RBDS groups, each carrying a per-block error indicator from the
//! tuner's demodulator, into a persistent, incrementally-updated
//! `DataRecord`: station identity, Program Service name, Radiotext,
//! Alternative Frequencies, clock time, and the other fields the
//! sixteen RDS group types carry.
//!
//! ## Usage
//!
//! To use the rds-decode crate in your Rust project, add the following to
//! your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! rds-decode = "0.1.0"
//! ```
//!
//! Then, in your Rust code, you can import the necessary modules and
//! functions:
//!
//! ```rust
//! use rds_decode::{Decoder, DecoderConfig, DataRecord, Group, Block, Bler};
//!
//! let mut data = DataRecord::new();
//! let decoder = Decoder::new(DecoderConfig { advanced_ps_decoding: true });
//! let group = Group::new(
//!     Block::new(0x1234, Bler::None),
//!     Block::new(0x0000, Bler::None),
//!     Block::new(0x0000, Bler::None),
//!     Block::new(0x0000, Bler::None),
//! );
//! decoder.decode(&mut data, &group);
//! ```

pub mod af;
pub mod block;
pub mod constants;
pub mod data;
pub mod decoder;
pub mod error;
pub mod frequency;
pub mod group;
mod groups;
pub mod log_reader;
pub mod logging;
pub mod oda;
pub mod validation;

pub use crate::block::{Bler, Block};
pub use crate::data::{DataRecord, ValidFields};
pub use crate::decoder::{Decoder, DecoderConfig};
pub use crate::error::RdsError;
pub use crate::group::{Group, GroupType, Version};
pub use crate::logging::{init_logger, log_info};
pub use crate::oda::{OdaClearCallback, OdaDecodeCallback, OdaEntry};
