//! Group type 9A/9B: Emergency Warning System raw blocks, or ODA.

use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

use super::oda_registration::passthrough;

pub fn decode_9(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    if group_type.version == Version::B {
        passthrough(data, group, group_type);
        return;
    }
    data.ews.channel_id = (group.b.value & 0x1F) as u8;
    data.ews.block_c = group.c.value;
    data.ews.block_d = group.d.value;
    data.valid.insert(ValidFields::EWS);
}
