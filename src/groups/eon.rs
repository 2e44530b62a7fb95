//! Group type 14A/14B: Enhanced Other Networks.

use crate::constants::BLOCK_CD_THRESHOLD;
use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::common::char_at;

fn decode_14a(data: &mut DataRecord, group: &Group) {
    if !group.c.acceptable(BLOCK_CD_THRESHOLD) {
        return;
    }
    let variant = (group.b.value & 0xF) as u8;
    match variant {
        0..=3 => {
            let base = variant as usize * 2;
            data.eon.on.ps[base] = char_at(group.c.value, true);
            data.eon.on.ps[base + 1] = char_at(group.c.value, false);
        }
        4 => {
            data.eon.on.af.decode_freq_group_block(group.c.value);
        }
        13 => {
            // The source computed `pty = C > 11` (a boolean) instead of the
            // top five bits of C; use `(C >> 11) & 0x1F`.
            data.eon.on.pty = ((group.c.value >> 11) & 0x1F) as u8;
            data.eon.on.ta = group.c.value & 1 == 1;
        }
        _ => {}
    }
    data.valid.insert(ValidFields::EON);
}

fn decode_14b(data: &mut DataRecord, group: &Group) {
    if group.d.acceptable(BLOCK_CD_THRESHOLD) {
        data.eon.on.pi_code = group.d.value;
    }
    data.eon.on.tp = (group.b.value >> 3) & 1 == 1;
    data.eon.on.ta = (group.b.value >> 2) & 1 == 1;
    data.valid.insert(ValidFields::EON);
}

pub fn decode_14(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    match group_type.version {
        Version::A => decode_14a(data, group),
        Version::B => decode_14b(data, group),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Bler, Block};

    fn block(value: u16) -> Block {
        Block::new(value, Bler::None)
    }

    #[test]
    fn decode_14a_variant_zero_writes_ps_pair() {
        let mut data = DataRecord::new();
        let c = (b'A' as u16) << 8 | b'B' as u16;
        let group = Group::new(block(0), block(0), block(c), block(0));
        decode_14(&mut data, &group, GroupType { code: 14, version: Version::A });
        assert_eq!(&data.eon.on.ps[0..2], b"AB");
    }

    #[test]
    fn decode_14a_variant_thirteen_extracts_top_five_bits() {
        let mut data = DataRecord::new();
        let b = 13u16;
        let c = (0b10101u16 << 11) | 1; // pty=0b10101, ta=1
        let group = Group::new(block(0), block(b), block(c), block(0));
        decode_14(&mut data, &group, GroupType { code: 14, version: Version::A });
        assert_eq!(data.eon.on.pty, 0b10101);
        assert!(data.eon.on.ta);
    }

    #[test]
    fn decode_14b_reads_pi_tp_ta_from_other_network() {
        let mut data = DataRecord::new();
        let b = (1u16 << 3) | (1u16 << 2);
        let group = Group::new(block(0), block(b), block(0), block(0xBEEF));
        decode_14(&mut data, &group, GroupType { code: 14, version: Version::B });
        assert_eq!(data.eon.on.pi_code, 0xBEEF);
        assert!(data.eon.on.tp);
        assert!(data.eon.on.ta);
    }
}
