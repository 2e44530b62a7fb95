//! Group types 1A/1B: Program Item Number, plus 1A's slow-labeling codes.

use crate::constants::BLOCK_CD_THRESHOLD;
use crate::data::{DataRecord, SlcVariant, ValidFields};
use crate::group::{Group, GroupType, Version};

/// Decodes the Program Item Number from block D, common to 1A and 1B.
fn decode_pic(data: &mut DataRecord, group: &Group) {
    if !group.d.acceptable(BLOCK_CD_THRESHOLD) {
        return;
    }
    let d = group.d.value;
    let day = (d >> 11) & 0x1F;
    data.pic.day = day as u8;
    if day != 0 {
        data.pic.hour = ((d >> 6) & 0x1F) as u8;
        data.pic.minute = (d & 0x3F) as u8;
    }
    data.valid.insert(ValidFields::PIC);
}

fn slc_variant(variant_code: u8, value: u16) -> SlcVariant {
    match variant_code {
        0 => SlcVariant::Paging { value },
        1 => SlcVariant::TmcId { value },
        2 => SlcVariant::PagingId { value },
        3 => SlcVariant::Languages { value },
        6 => SlcVariant::Broadcasters { value },
        7 => SlcVariant::EwsChannelId { value },
        other => SlcVariant::Reserved { variant_code: other, value },
    }
}

fn decode_labeling_codes(data: &mut DataRecord, group: &Group) {
    if !group.c.acceptable(BLOCK_CD_THRESHOLD) {
        return;
    }
    let c = group.c.value;
    let linkage_actuator = (c >> 15) & 1 == 1;
    let variant_code = ((c >> 12) & 0b111) as u8;
    let value = c & 0x0FFF;
    data.slc = Some(crate::data::Slc { linkage_actuator, variant: slc_variant(variant_code, value) });
    data.valid.insert(ValidFields::SLC);
}

pub fn decode_1(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    decode_pic(data, group);
    if group_type.version == Version::A {
        decode_labeling_codes(data, group);
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
    fn decodes_pic_day_hour_minute() {
        let mut data = DataRecord::new();
        let day = 5u16;
        let hour = 14u16;
        let minute = 30u16;
        let d = (day << 11) | (hour << 6) | minute;
        let group = Group::new(block(0), block(0), block(0), block(d));
        decode_1(&mut data, &group, GroupType { code: 1, version: Version::B });
        assert_eq!(data.pic.day, 5);
        assert_eq!(data.pic.hour, 14);
        assert_eq!(data.pic.minute, 30);
    }

    #[test]
    fn decodes_slc_variant_and_linkage_actuator() {
        let mut data = DataRecord::new();
        let c = (1u16 << 15) | (1u16 << 12) | 0x0AB;
        let group = Group::new(block(0), block(0), block(c), block(0));
        decode_1(&mut data, &group, GroupType { code: 1, version: Version::A });
        let slc = data.slc.expect("slc decoded");
        assert!(slc.linkage_actuator);
        assert_eq!(slc.variant, SlcVariant::TmcId { value: 0x0AB });
    }
}
