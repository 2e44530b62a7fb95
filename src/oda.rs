//! Open Data Application (ODA) registration and dispatch.
//!
//! ODA payload decoding itself (RT+, TMC, iTunes tagging, ...) is delegated
//! to a host-registered callback; this module only tracks which
//! `(app_id, group_type)` pairs are registered and invokes the callback
//! synchronously when a matching group arrives.

use crate::constants::ODA_POOL_SIZE;
use crate::data::DataRecord;
use crate::group::{Group, GroupType};

/// One registered open data application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OdaEntry {
    pub app_id: u16,
    pub group_type: GroupType,
    pub pkt_count: u32,
}

/// Signature for the decode callback: receives the owning app id, the data
/// record, the raw group, and the group type that triggered dispatch.
pub type OdaDecodeCallback = Box<dyn FnMut(u16, &DataRecord, &Group, GroupType)>;
/// Signature for the clear callback, invoked on `Decoder::reset`.
pub type OdaClearCallback = Box<dyn FnMut()>;

/// Fixed pool of ODA registrations plus the callback pair used to dispatch
/// application-specific decoding.
#[derive(Default)]
pub struct OdaRegistry {
    entries: Vec<OdaEntry>,
    decode_cb: Option<OdaDecodeCallback>,
    clear_cb: Option<OdaClearCallback>,
}

impl std::fmt::Debug for OdaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OdaRegistry")
            .field("entries", &self.entries)
            .field("decode_cb", &self.decode_cb.is_some())
            .field("clear_cb", &self.clear_cb.is_some())
            .finish()
    }
}

impl Clone for OdaRegistry {
    fn clone(&self) -> Self {
        // Callbacks are not `Clone`; a cloned record starts with no
        // callbacks bound, matching the "caller binds callbacks" contract.
        OdaRegistry { entries: self.entries.clone(), decode_cb: None, clear_cb: None }
    }
}

impl OdaRegistry {
    pub fn set_callbacks(&mut self, decode: Option<OdaDecodeCallback>, clear: Option<OdaClearCallback>) {
        self.decode_cb = decode;
        self.clear_cb = clear;
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        if let Some(cb) = self.clear_cb.as_mut() {
            cb();
        }
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[OdaEntry] {
        &self.entries
    }

    /// Registers or updates the group type an `app_id` decodes under.
    /// Application id 0 is never stored.
    pub fn register(&mut self, app_id: u16, group_type: GroupType) {
        if app_id == 0 {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.app_id == app_id) {
            entry.group_type = group_type;
            return;
        }
        if self.entries.len() >= ODA_POOL_SIZE {
            return;
        }
        self.entries.push(OdaEntry { app_id, group_type, pkt_count: 0 });
    }

    pub fn is_registered(&self, group_type: GroupType) -> bool {
        self.entries.iter().any(|e| e.group_type == group_type)
    }

    /// If `group_type` is registered, increments its counter and invokes
    /// the decode callback synchronously.
    pub fn dispatch(&mut self, data: &DataRecord, group: &Group, group_type: GroupType) {
        let app_id = match self.entries.iter_mut().find(|e| e.group_type == group_type) {
            Some(entry) => {
                entry.pkt_count += 1;
                entry.app_id
            }
            None => return,
        };
        if let Some(cb) = self.decode_cb.as_mut() {
            cb(app_id, data, group, group_type);
        }
    }
}
