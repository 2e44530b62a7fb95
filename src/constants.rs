//! RDS/RBDS Protocol Constants
//!
//! Tunable compile-time constants named in the protocol's design: per-block
//! BLER acceptance thresholds, PS/RT validation limits, and the fixed pool
//! sizes for AF tables, ODA registrations, and transparent data channels.

use crate::block::Bler;

/// Block A is accepted for PI-code extraction up to this error rate.
pub const PI_BLOCK_A_THRESHOLD: Bler = Bler::ThreeToFive;

/// Block B above this error rate aborts the entire group.
pub const BLOCK_B_THRESHOLD: Bler = Bler::OneOrTwo;

/// Blocks C and D are accepted up to this error rate.
pub const BLOCK_CD_THRESHOLD: Bler = Bler::ThreeToFive;

/// Number of characters in the Program Service name.
pub const PS_LENGTH: usize = 8;

/// Number of characters in one Radiotext buffer.
pub const RT_LENGTH: usize = 64;

/// Number of characters in the Program Type Name.
pub const PTYN_LENGTH: usize = 8;

/// Hit-count threshold at which a confidence-tracked character is
/// considered stable, for both PS and RT.
pub const PS_VALIDATION_LIMIT: u8 = 2;
pub const RT_VALIDATION_LIMIT: u8 = 2;

/// Maximum number of alternative-frequency decode tables tracked at once.
pub const AF_TABLE_POOL_SIZE: usize = 20;

/// Maximum number of unique frequencies stored per AF table.
pub const AF_TABLE_MAX_ENTRIES: usize = 25;

/// Maximum number of concurrently registered open data applications.
pub const ODA_POOL_SIZE: usize = 10;

/// Number of transparent data channels.
pub const TDC_CHANNEL_COUNT: usize = 32;

/// Bytes of FIFO storage per transparent data channel.
pub const TDC_CHANNEL_BYTES: usize = 32;

/// Radiotext end-of-text sentinel character.
pub const RT_END_OF_TEXT: u8 = 0x0D;

/// AF count-frame code range: `first - 224` is the number of frequencies
/// the new table declares.
pub const AF_COUNT_CODE_MIN: u8 = 225;
pub const AF_COUNT_CODE_MAX: u8 = 249;

/// AF filler code: decrements the expected count, contributes no frequency.
pub const AF_FILLER_CODE: u8 = 205;

/// AF sentinel meaning "LF/MF frequencies follow", switches the current band.
pub const AF_LF_MF_FOLLOWS_CODE: u8 = 250;
