//! The top-level `Decoder`: consumes one four-block group at a time and
//! mutates a caller-owned `DataRecord` in place.

use crate::constants::{BLOCK_B_THRESHOLD, BLOCK_CD_THRESHOLD, PI_BLOCK_A_THRESHOLD};
use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};
use crate::groups;
use crate::logging::log_trace;

/// Decoder configuration. The single knob controls whether PS and Radiotext
/// use the confidence-tracked update path or write characters directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoderConfig {
    pub advanced_ps_decoding: bool,
}

/// A single-threaded, non-reentrant RDS group decoder. The caller owns the
/// `DataRecord` it decodes into; nothing here is safe to share across
/// threads or to re-enter from within an ODA callback.
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Decoder { config }
    }

    /// Zeros `data` back to its initial state, including the AF pool and
    /// ODA registrations, and invokes the registered ODA clear callback.
    pub fn reset(&self, data: &mut DataRecord) {
        data.oda.reset();
        data.reset();
    }

    /// Decodes one group into `data`, per the six-step contract: PI
    /// extraction, block-B gate, group-type extraction, B-version PI
    /// redundancy, unconditional TP/PTY update, and dispatch.
    pub fn decode(&self, data: &mut DataRecord, group: &Group) {
        if group.a.acceptable(PI_BLOCK_A_THRESHOLD) {
            data.pi_code = group.a.value;
            data.valid.insert(ValidFields::PI_CODE);
        }

        if !group.b.acceptable(BLOCK_B_THRESHOLD) {
            data.block_b_rejections += 1;
            return;
        }

        let group_type = group.group_type();
        log_trace(&format!("dispatching group type {group_type}"));

        if group_type.version == Version::B
            && group.c.acceptable(BLOCK_CD_THRESHOLD)
            && group.c.errors < group.b.errors
        {
            data.pi_code = group.c.value;
            data.valid.insert(ValidFields::PI_CODE);
        }

        data.tp_code = (group.b.value >> 10) & 1 == 1;
        data.pty = ((group.b.value >> 5) & 0x1F) as u8;
        data.valid.insert(ValidFields::TP | ValidFields::PTY);

        groups::dispatch(data, group, group_type, self.config.advanced_ps_decoding);
    }
}
