//! Group type 4A: clock time.

use crate::block::Bler;
use crate::data::{DataRecord, ValidFields};
use crate::group::Group;

pub fn decode_4a(data: &mut DataRecord, group: &Group) {
    let threshold = crate::constants::BLOCK_B_THRESHOLD;
    if !group.b.acceptable(threshold) || !group.c.acceptable(threshold) || !group.d.acceptable(threshold) {
        return;
    }
    let combined_rank = group.b.errors as u8 + group.c.errors as u8 + group.d.errors as u8;
    if combined_rank > threshold as u8 {
        return;
    }

    let mjd = ((group.b.value & 0b11) as u32) << 15 | (group.c.value >> 1) as u32;
    let hour = (((group.c.value & 1) as u8) << 4) | ((group.d.value >> 12) as u8 & 0xF);
    let minute = ((group.d.value >> 6) & 0x3F) as u8;
    let magnitude = (group.d.value & 0x1F) as i8;
    let offset = if (group.d.value >> 5) & 1 == 1 { -magnitude } else { magnitude };

    data.clock.mjd = mjd;
    data.clock.hour = hour;
    data.clock.minute = minute;
    data.clock.utc_offset_half_hours = offset;
    data.valid.insert(ValidFields::CLOCK);
}
