//! The decoder's aggregated, persistent output: one `DataRecord` per
//! tuned station, updated incrementally as groups arrive.

use bitflags::bitflags;

use crate::af::AfTableGroup;
use crate::constants::{PS_VALIDATION_LIMIT, PTYN_LENGTH, RT_VALIDATION_LIMIT, TDC_CHANNEL_BYTES, TDC_CHANNEL_COUNT};
use crate::group::Version;
use crate::oda::OdaRegistry;
use crate::validation::{Ps, RadioText};

bitflags! {
    /// Tracks which `DataRecord` fields have ever been populated. A field
    /// is undefined until its bit is set; this is the sole channel (besides
    /// debug counters) through which decode success is observed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ValidFields: u32 {
        const PI_CODE = 1 << 0;
        const PTY     = 1 << 1;
        const TP      = 1 << 2;
        const TA      = 1 << 3;
        const MUSIC   = 1 << 4;
        const PS      = 1 << 5;
        const RT      = 1 << 6;
        const CLOCK   = 1 << 7;
        const SLC     = 1 << 8;
        const PIC     = 1 << 9;
        const AF      = 1 << 10;
        const PTYN    = 1 << 11;
        const TDC     = 1 << 12;
        const EWS     = 1 << 13;
        const EON     = 1 << 14;
        const ODA     = 1 << 15;
    }
}

/// Program Item Number: identifies the current program's scheduled slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgramItemNumber {
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

/// Modified Julian Day clock, decoded from group type 4A.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    pub mjd: u32,
    pub hour: u8,
    pub minute: u8,
    /// Signed UTC offset in half-hours.
    pub utc_offset_half_hours: i8,
}

/// Slow-labeling code payload, tagged by the 3-bit variant code carried in
/// group type 1A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlcVariant {
    Paging { value: u16 },
    TmcId { value: u16 },
    PagingId { value: u16 },
    Languages { value: u16 },
    Broadcasters { value: u16 },
    EwsChannelId { value: u16 },
    /// Variant code observed but not one of the six documented payloads.
    Reserved { variant_code: u8, value: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slc {
    pub linkage_actuator: bool,
    pub variant: SlcVariant,
}

/// Transparent Data Channel storage: a fixed number of channels, each a
/// 32-byte sliding FIFO window.
#[derive(Debug, Clone)]
pub struct Tdc {
    pub channels: [[u8; TDC_CHANNEL_BYTES]; TDC_CHANNEL_COUNT],
    pub len: [usize; TDC_CHANNEL_COUNT],
}

impl Default for Tdc {
    fn default() -> Self {
        Tdc {
            channels: [[0u8; TDC_CHANNEL_BYTES]; TDC_CHANNEL_COUNT],
            len: [0usize; TDC_CHANNEL_COUNT],
        }
    }
}

impl Tdc {
    /// Appends `bytes` to `channel`'s sliding window, dropping the oldest
    /// bytes once the 32-byte window is full.
    pub fn append(&mut self, channel: usize, bytes: &[u8]) {
        let buf = &mut self.channels[channel];
        let cur_len = self.len[channel];
        let total = cur_len + bytes.len();
        if total <= TDC_CHANNEL_BYTES {
            buf[cur_len..total].copy_from_slice(bytes);
            self.len[channel] = total;
        } else {
            let shift = total - TDC_CHANNEL_BYTES;
            buf.copy_within(shift.min(cur_len).., 0);
            let kept = cur_len.saturating_sub(shift);
            buf[kept..kept + bytes.len().min(TDC_CHANNEL_BYTES - kept)]
                .copy_from_slice(&bytes[..bytes.len().min(TDC_CHANNEL_BYTES - kept)]);
            self.len[channel] = TDC_CHANNEL_BYTES;
        }
    }
}

/// Raw Emergency Warning System blocks, stashed without interpretation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ews {
    pub channel_id: u8,
    pub block_c: u16,
    pub block_d: u16,
}

/// Other-network station metadata decoded from group type 14.
#[derive(Debug, Clone)]
pub struct OtherNetwork {
    pub ps: [u8; 8],
    pub pty: u8,
    pub tp: bool,
    pub ta: bool,
    pub pi_code: u16,
    pub pic: ProgramItemNumber,
    pub af: AfTableGroup,
}

impl Default for OtherNetwork {
    fn default() -> Self {
        OtherNetwork {
            ps: [0; 8],
            pty: 0,
            tp: false,
            ta: false,
            pi_code: 0,
            pic: ProgramItemNumber::default(),
            af: AfTableGroup::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Eon {
    pub on: OtherNetwork,
}

/// Program Type Name: 8 characters, written in two 4-character halves.
#[derive(Debug, Clone)]
pub struct Ptyn {
    pub display: [u8; PTYN_LENGTH],
    pub ab_flag: Version,
}

impl Default for Ptyn {
    fn default() -> Self {
        Ptyn { display: [0; PTYN_LENGTH], ab_flag: Version::A }
    }
}

/// Aggregated decoded state for one tuned RDS/RBDS station.
#[derive(Debug, Clone)]
pub struct DataRecord {
    pub pi_code: u16,
    pub pty: u8,
    pub tp_code: bool,
    pub ta_code: bool,
    pub music: bool,

    pub ps: Ps,
    pub rt: RadioText,

    pub clock: Clock,
    pub slc: Option<Slc>,
    pub pic: ProgramItemNumber,
    pub af: AfTableGroup,
    pub ptyn: Ptyn,
    pub tdc: Tdc,
    pub ews: Ews,
    pub eon: Eon,
    pub oda: OdaRegistry,

    pub valid: ValidFields,

    /// Count of groups rejected at block-B threshold, observable in debug
    /// builds only (spec §7's "debug block-B counter").
    pub block_b_rejections: u64,
}

impl Default for DataRecord {
    fn default() -> Self {
        DataRecord {
            pi_code: 0,
            pty: 0,
            tp_code: false,
            ta_code: false,
            music: false,
            ps: Ps::new(PS_VALIDATION_LIMIT),
            rt: RadioText::new(RT_VALIDATION_LIMIT),
            clock: Clock::default(),
            slc: None,
            pic: ProgramItemNumber::default(),
            af: AfTableGroup::new(),
            ptyn: Ptyn::default(),
            tdc: Tdc::default(),
            ews: Ews::default(),
            eon: Eon::default(),
            oda: OdaRegistry::default(),
            valid: ValidFields::empty(),
            block_b_rejections: 0,
        }
    }
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeros the record back to its initial state. Does not reset the
    /// block-B rejection counter, matching the teacher's pattern of
    /// instrumentation counters surviving a protocol reset. The ODA
    /// registry is preserved as-is: callers reset its entries explicitly
    /// (via `OdaRegistry::reset`, which also fires the clear callback)
    /// before or after calling this, since its host-bound callbacks are
    /// configuration, not decoded state.
    pub fn reset(&mut self) {
        let rejections = self.block_b_rejections;
        let oda = std::mem::take(&mut self.oda);
        *self = Self::default();
        self.block_b_rejections = rejections;
        self.oda = oda;
    }

    pub fn is_valid(&self, field: ValidFields) -> bool {
        self.valid.contains(field)
    }
}
