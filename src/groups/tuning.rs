//! Group types 0A/0B (basic tuning and switching) and 15A/15B (fast basic
//! tuning, phased out in 0A/0B's favor).

use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::common;

fn decode_ta_ms(data: &mut DataRecord, b: u16) {
    data.ta_code = (b >> 4) & 1 == 1;
    data.music = (b >> 3) & 1 == 1;
    data.valid.insert(ValidFields::TA | ValidFields::MUSIC);
}

fn decode_ps_pair(data: &mut DataRecord, group: &Group, advanced: bool) {
    if !group.d.acceptable(crate::constants::BLOCK_CD_THRESHOLD) {
        return;
    }
    let pair = (group.b.value & 0b11) as usize * 2;
    let chars = [common::char_at(group.d.value, true), common::char_at(group.d.value, false)];
    for (offset, c) in chars.into_iter().enumerate() {
        let i = pair + offset;
        if advanced {
            data.ps.update_advanced(i, c);
        } else {
            data.ps.update_simple(i, c);
        }
    }
    data.valid.insert(ValidFields::PS);
}

/// 0A/0B: TA/MS from B, two PS characters from D; 0A additionally decodes
/// two AF codes from C.
pub fn decode_0(data: &mut DataRecord, group: &Group, group_type: GroupType, advanced_ps: bool) {
    decode_ta_ms(data, group.b.value);
    decode_ps_pair(data, group, advanced_ps);

    if group_type.version == Version::A && group.c.acceptable(crate::constants::BLOCK_CD_THRESHOLD) {
        data.af.decode_freq_group_block(group.c.value);
        data.valid.insert(ValidFields::AF);
    }
}

/// 15A is phased out and decodes nothing; 15B decodes TA the same as 0A/0B.
pub fn decode_15(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    if group_type.version == Version::B {
        data.ta_code = (group.b.value >> 4) & 1 == 1;
        data.valid.insert(ValidFields::TA);
    }
}
