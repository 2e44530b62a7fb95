//! Group type 10A/10B: Program Type Name, or ODA.

use crate::constants::BLOCK_CD_THRESHOLD;
use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::common::char_at;
use super::oda_registration::passthrough;

pub fn decode_10(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    if group_type.version == Version::B {
        passthrough(data, group, group_type);
        return;
    }

    let ab_flag = if (group.b.value >> 4) & 1 == 1 { Version::B } else { Version::A };
    if ab_flag != data.ptyn.ab_flag {
        data.ptyn.display = [0; crate::constants::PTYN_LENGTH];
        data.ptyn.ab_flag = ab_flag;
    }

    if !group.c.acceptable(BLOCK_CD_THRESHOLD) || !group.d.acceptable(BLOCK_CD_THRESHOLD) {
        return;
    }
    let base = if group.b.value & 1 == 1 { 4 } else { 0 };
    let chars = [
        char_at(group.c.value, true),
        char_at(group.c.value, false),
        char_at(group.d.value, true),
        char_at(group.d.value, false),
    ];
    for (offset, c) in chars.into_iter().enumerate() {
        data.ptyn.display[base + offset] = c;
    }
    data.valid.insert(ValidFields::PTYN);
}
