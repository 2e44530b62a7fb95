//! Group types 5A/5B: Transparent Data Channels, or ODA passthrough when the
//! (code, version) pair has been claimed by a registered application.

use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::common::char_at;
use super::oda_registration::passthrough;

pub fn decode_5(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    if data.oda.is_registered(group_type) {
        passthrough(data, group, group_type);
        return;
    }

    // The source mis-wrote this mask as 0x11111; the channel address is 5
    // bits (0..31), so the mask is 0x1F.
    let channel = (group.b.value & 0x1F) as usize;

    let mut bytes = Vec::with_capacity(4);
    if group_type.version == Version::A {
        if group.c.acceptable(crate::constants::BLOCK_CD_THRESHOLD) {
            bytes.push(char_at(group.c.value, true));
            bytes.push(char_at(group.c.value, false));
        }
    }
    if group.d.acceptable(crate::constants::BLOCK_CD_THRESHOLD) {
        bytes.push(char_at(group.d.value, true));
        bytes.push(char_at(group.d.value, false));
    }
    if bytes.is_empty() {
        return;
    }
    data.tdc.append(channel, &bytes);
    data.valid.insert(ValidFields::TDC);
}
