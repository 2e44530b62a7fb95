//! Group type 3A/3B: Open Data Application registration, and the generic
//! ODA passthrough shared by group types 6, 7, 8, 11, 12 and 13.

use crate::data::{DataRecord, ValidFields};
use crate::group::{Group, GroupType, Version};

pub fn decode_3(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    if group_type.version == Version::A {
        if !group.d.acceptable(crate::constants::BLOCK_CD_THRESHOLD) {
            return;
        }
        let app_id = group.d.value;
        let code = ((group.b.value >> 1) & 0b1111) as u8;
        let version = if group.b.value & 1 == 1 { Version::B } else { Version::A };
        data.oda.register(app_id, GroupType { code, version });
        data.valid.insert(ValidFields::ODA);
    } else {
        passthrough(data, group, group_type);
    }
}

/// Routes an otherwise-unhandled group type to its registered ODA callback,
/// if any is registered; a no-op otherwise.
///
/// The registry is swapped out for the duration of the dispatch so the
/// callback can borrow `data` (including the registry's own counters)
/// immutably without aliasing the `&mut` used to hold it.
pub fn passthrough(data: &mut DataRecord, group: &Group, group_type: GroupType) {
    let mut oda = std::mem::take(&mut data.oda);
    if oda.is_registered(group_type) {
        oda.dispatch(data, group, group_type);
    }
    data.oda = oda;
}
