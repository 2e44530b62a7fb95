//! Group types 2A/2B: Radiotext.

use crate::constants::{BLOCK_CD_THRESHOLD, RT_END_OF_TEXT};
use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::common;

pub fn decode_2(data: &mut DataRecord, group: &Group, group_type: GroupType, advanced: bool) {
    let ab_flag = if (group.b.value >> 4) & 1 == 1 { Version::B } else { Version::A };
    if ab_flag != data.rt.current {
        data.rt.active_mut().bump_validation_count();
        data.rt.current = ab_flag;
    }

    let addr = (group.b.value & 0xF) as usize;
    let buf = data.rt.active_mut();

    if group_type.version == Version::A {
        if !group.c.acceptable(BLOCK_CD_THRESHOLD) || !group.d.acceptable(BLOCK_CD_THRESHOLD) {
            return;
        }
        let base = addr * 4;
        let chars = [
            common::char_at(group.c.value, true),
            common::char_at(group.c.value, false),
            common::char_at(group.d.value, true),
            common::char_at(group.d.value, false),
        ];
        for (offset, c) in chars.into_iter().enumerate() {
            let i = base + offset;
            if advanced {
                buf.update_advanced(i, c);
            } else {
                buf.write_simple(i, c, RT_END_OF_TEXT);
            }
        }
    } else {
        if !group.d.acceptable(BLOCK_CD_THRESHOLD) {
            return;
        }
        // A 2B radiotext message only ever uses the first 32 characters;
        // force the boundary closed so a stale 2A tail can't linger.
        buf.buf.display[32] = RT_END_OF_TEXT;
        let base = addr * 2;
        let chars = [common::char_at(group.d.value, true), common::char_at(group.d.value, false)];
        for (offset, c) in chars.into_iter().enumerate() {
            let i = base + offset;
            if advanced {
                buf.update_advanced(i, c);
            } else {
                buf.write_simple(i, c, RT_END_OF_TEXT);
            }
        }
    }

    data.rt.valid = true;
    data.valid.insert(ValidFields::RT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Bler, Block};

    fn block(value: u16) -> Block {
        Block::new(value, Bler::None)
    }

    #[test]
    fn decode_2a_writes_four_characters_at_address() {
        let mut data = DataRecord::new();
        let b = 0u16; // A/B flag=0 (A), address=0
        let c = (b'T' as u16) << 8 | b'E' as u16;
        let d = (b'S' as u16) << 8 | b'T' as u16;
        let group = Group::new(block(0), block(b), block(c), block(d));
        decode_2(&mut data, &group, GroupType { code: 2, version: Version::A }, false);
        assert_eq!(&data.rt.a.buf.display[0..4], b"TEST");
    }

    #[test]
    fn ab_flag_transition_bumps_validation() {
        let mut data = DataRecord::new();
        data.rt.a.update_advanced(0, b'A');
        data.rt.a.update_advanced(0, b'A');
        assert!(data.rt.a.buf.hit_cnt[0] >= 2);

        let b_flagged = 1u16 << 4;
        let group = Group::new(block(0), block(b_flagged), block(0), block(0));
        decode_2(&mut data, &group, GroupType { code: 2, version: Version::B }, true);
        assert_eq!(data.rt.current, Version::B);
        assert_eq!(data.rt.a.buf.hit_cnt[0], 0);
    }
}
