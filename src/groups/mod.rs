//! Per-group-type decoders, dispatched by `GroupType.code`.

mod clock;
mod common;
mod eon;
mod ews;
mod oda_registration;
mod ptyn;
mod radiotext;
mod slc;
mod tdc;
mod tuning;

use crate::data::DataRecord;
use crate::group::{Group, GroupType};

/// Routes one group to its type-specific decoder. `advanced` selects the
/// confidence-tracked PS/RT update path over the simple overwrite path.
pub fn dispatch(data: &mut DataRecord, group: &Group, group_type: GroupType, advanced: bool) {
    match group_type.code {
        0 => tuning::decode_0(data, group, group_type, advanced),
        1 => slc::decode_1(data, group, group_type),
        2 => radiotext::decode_2(data, group, group_type, advanced),
        3 => oda_registration::decode_3(data, group, group_type),
        4 if group_type.version == crate::group::Version::A => clock::decode_4a(data, group),
        5 => tdc::decode_5(data, group, group_type),
        6 | 7 | 8 | 11 | 12 | 13 => oda_registration::passthrough(data, group, group_type),
        9 => ews::decode_9(data, group, group_type),
        10 => ptyn::decode_10(data, group, group_type),
        14 => eon::decode_14(data, group, group_type),
        15 => tuning::decode_15(data, group, group_type),
        _ => {}
    }
}
