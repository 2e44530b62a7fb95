//! Alternative-Frequency (AF) table decoder.
//!
//! Reconstructs variable-size AF lists from an interleaved stream of count
//! frames, frequency frames, and sentinel codes, per the RBDS AF annex.
//! Encoding method (A: flat list, B: each alternative paired with the
//! tuned frequency to disambiguate regional variants) is inferred from the
//! stream itself rather than declared up front.

use crate::constants::{
    AF_COUNT_CODE_MAX, AF_COUNT_CODE_MIN, AF_FILLER_CODE, AF_LF_MF_FOLLOWS_CODE,
    AF_TABLE_MAX_ENTRIES, AF_TABLE_POOL_SIZE,
};
use crate::frequency::{af_code_to_freq, Attribute, Band, Frequency};
use crate::logging::log_debug;

/// Encoding method inferred for a given AF table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMethod {
    Unknown,
    A,
    B,
}

/// A single station's tuned-frequency anchor plus its alternative list.
#[derive(Debug, Clone, Default)]
pub struct AfTable {
    /// The anchor frequency this table disambiguates against (method B),
    /// or `None` for the station's own universal method-A table.
    pub tuned_freq: Option<u16>,
    pub entries: Vec<Frequency>,
}

impl AfTable {
    /// Inserts `freq` if not already present and the table has room.
    /// Returns `true` if inserted.
    pub fn insert_unique(&mut self, freq: Frequency) -> bool {
        if self.entries.len() >= AF_TABLE_MAX_ENTRIES {
            return false;
        }
        if self.entries.iter().any(|f| f.band == freq.band && f.freq == freq.freq) {
            return false;
        }
        self.entries.push(freq);
        true
    }
}

/// An `AfTable` plus the decode state needed to interpret its byte stream.
#[derive(Debug, Clone)]
pub struct AfDecodeTable {
    pub table: AfTable,
    pub method: EncodingMethod,
    pub expected_count: u8,
    pub current_band: Band,
    /// One candidate frequency (or `None` for a sentinel) left over from
    /// the first byte of a pair, waiting for its partner.
    pending_candidate: Option<Option<u16>>,
}

impl Default for AfDecodeTable {
    fn default() -> Self {
        AfDecodeTable {
            table: AfTable::default(),
            method: EncodingMethod::Unknown,
            expected_count: 0,
            current_band: Band::Uhf,
            pending_candidate: None,
        }
    }
}

/// Pool of AF decode tables for a single station's (or other-network's)
/// alternative-frequency stream.
#[derive(Debug, Clone, Default)]
pub struct AfTableGroup {
    tables: Vec<AfDecodeTable>,
    current_table_idx: Option<usize>,
}

impl AfTableGroup {
    pub fn new() -> Self {
        AfTableGroup { tables: Vec::with_capacity(AF_TABLE_POOL_SIZE), current_table_idx: None }
    }

    pub fn reset(&mut self) {
        self.tables.clear();
        self.current_table_idx = None;
    }

    pub fn tables(&self) -> &[AfDecodeTable] {
        &self.tables
    }

    pub fn current_table(&self) -> Option<&AfDecodeTable> {
        self.current_table_idx.map(|i| &self.tables[i])
    }

    fn method_a_index(&self) -> Option<usize> {
        self.tables.iter().position(|t| t.method == EncodingMethod::A)
    }

    fn find_by_tuned_freq(&self, freq: u16) -> Option<usize> {
        self.tables.iter().position(|t| t.table.tuned_freq == Some(freq))
    }

    /// Feeds one 16-bit AF block (two byte codes) into the decoder.
    pub fn decode_freq_group_block(&mut self, block16: u16) {
        let first = (block16 >> 8) as u8;
        let second = (block16 & 0xFF) as u8;

        if (AF_COUNT_CODE_MIN..=AF_COUNT_CODE_MAX).contains(&first) {
            let num_freqs = first - AF_COUNT_CODE_MIN + 1;
            self.start_table(num_freqs, second);
        } else {
            match self.current_table_idx {
                Some(idx) => self.continue_table(idx, first, second),
                None => log_debug("AF continuation block received with no current table; dropped"),
            }
        }
    }

    fn start_table(&mut self, num_freqs: u8, second: u8) {
        // Check 1: an existing universal method-A table takes priority.
        if let Some(idx) = self.method_a_index() {
            self.current_table_idx = Some(idx);
            self.tables[idx].expected_count = num_freqs;
            self.tables[idx].pending_candidate = None;
            self.consume_method_a_byte(idx, second);
            return;
        }

        // Check 2: a declared count of exactly one can only be method A.
        if num_freqs == 1 {
            if self.tables.len() >= AF_TABLE_POOL_SIZE {
                log_debug("AF table pool exhausted; dropping new method-A table");
                return;
            }
            let mut t = AfDecodeTable::default();
            t.method = EncodingMethod::A;
            t.expected_count = num_freqs;
            self.tables.push(t);
            self.current_table_idx = Some(self.tables.len() - 1);
            let idx = self.current_table_idx.unwrap();
            self.consume_method_a_byte(idx, second);
            return;
        }

        // Check 3: `second` names the UHF tuned frequency this table anchors.
        match af_code_to_freq(second, Band::Uhf) {
            Some(freq) => {
                if let Some(idx) = self.find_by_tuned_freq(freq) {
                    self.current_table_idx = Some(idx);
                    self.tables[idx].expected_count = num_freqs;
                    self.tables[idx].pending_candidate = None;
                    return;
                }
                if self.tables.len() >= AF_TABLE_POOL_SIZE {
                    log_debug("AF table pool exhausted; dropping new table");
                    return;
                }
                let mut t = AfDecodeTable::default();
                t.table.tuned_freq = Some(freq);
                t.expected_count = num_freqs.saturating_sub(1);
                self.tables.push(t);
                self.current_table_idx = Some(self.tables.len() - 1);
            }
            None => {
                log_debug("AF start block's second byte is not a valid UHF anchor; dropped");
                self.current_table_idx = None;
            }
        }
    }

    /// Consumes the single leftover byte of a start block whose method is
    /// already known to be A.
    fn consume_method_a_byte(&mut self, idx: usize, byte: u8) {
        let band = self.resolve_sentinel(idx, byte);
        if let Some(freq) = band.and_then(|b| af_code_to_freq(byte, b)) {
            let b = band.unwrap();
            self.tables[idx].table.insert_unique(Frequency::new(b, Attribute::SameProgram, freq));
        }
        self.decrement_expected(idx);
    }

    /// Applies a band-switch sentinel's side effect and returns the band to
    /// interpret `byte` under, or `None` if `byte` is the filler sentinel
    /// (never a frequency).
    fn resolve_sentinel(&mut self, idx: usize, byte: u8) -> Option<Band> {
        if byte == AF_FILLER_CODE {
            return None;
        }
        if byte == AF_LF_MF_FOLLOWS_CODE {
            self.tables[idx].current_band = Band::LfMf;
            return None;
        }
        Some(self.tables[idx].current_band)
    }

    fn decrement_expected(&mut self, idx: usize) {
        self.tables[idx].expected_count = self.tables[idx].expected_count.saturating_sub(1);
    }

    fn continue_table(&mut self, idx: usize, first: u8, second: u8) {
        for byte in [first, second] {
            let candidate = self.resolve_sentinel(idx, byte).and_then(|b| af_code_to_freq(byte, b));
            self.decrement_expected(idx);
            self.feed_candidate(idx, candidate);
        }
    }

    /// Routes one resolved candidate (`Some(freq)` or `None` for a
    /// sentinel) into the table according to its current method.
    fn feed_candidate(&mut self, idx: usize, candidate: Option<u16>) {
        match self.tables[idx].method {
            EncodingMethod::A => {
                if let Some(freq) = candidate {
                    let band = self.tables[idx].current_band;
                    self.tables[idx]
                        .table
                        .insert_unique(Frequency::new(band, Attribute::SameProgram, freq));
                }
            }
            EncodingMethod::B | EncodingMethod::Unknown => {
                match self.tables[idx].pending_candidate.take() {
                    None => self.tables[idx].pending_candidate = Some(candidate),
                    Some(prev) => self.insert_pair(idx, prev, candidate),
                }
            }
        }
    }

    /// Handles one complete pair of candidates for method B (known) or
    /// Unknown (inferring the method from this pair).
    fn insert_pair(&mut self, idx: usize, a: Option<u16>, b: Option<u16>) {
        let tuned = self.tables[idx].table.tuned_freq;

        let method = if self.tables[idx].method == EncodingMethod::B {
            EncodingMethod::B
        } else {
            match (a, b) {
                (None, None) => {
                    // Still unknown; nothing to insert this round.
                    return;
                }
                (Some(_), None) | (None, Some(_)) => EncodingMethod::A,
                (Some(x), Some(y)) => {
                    if tuned == Some(x) || tuned == Some(y) {
                        EncodingMethod::B
                    } else {
                        EncodingMethod::A
                    }
                }
            }
        };
        self.tables[idx].method = method;

        let band = self.tables[idx].current_band;
        match method {
            EncodingMethod::A => {
                if let Some(anchor) = self.tables[idx].table.tuned_freq.take() {
                    self.tables[idx]
                        .table
                        .insert_unique(Frequency::new(Band::Uhf, Attribute::SameProgram, anchor));
                }
                for freq in [a, b].into_iter().flatten() {
                    self.tables[idx]
                        .table
                        .insert_unique(Frequency::new(band, Attribute::SameProgram, freq));
                }
            }
            EncodingMethod::B => self.insert_method_b_pair(idx, a, b, band),
            EncodingMethod::Unknown => unreachable!(),
        }
    }

    /// Given up to two candidate frequencies from one pair, find the one
    /// matching `tuned_freq` (UHF) and store the other as an alternative.
    fn insert_method_b_pair(&mut self, idx: usize, a: Option<u16>, b: Option<u16>, band: Band) {
        let tuned = self.tables[idx].table.tuned_freq;
        let candidates: Vec<u16> = [a, b].into_iter().flatten().collect();

        let tuned_present = band == Band::Uhf && candidates.iter().any(|f| Some(*f) == tuned);
        if !tuned_present {
            log_debug("AF method B pair matched no tuned frequency; dropped");
            return;
        }

        for freq in candidates {
            if Some(freq) == tuned {
                continue;
            }
            let attribute = match tuned {
                Some(t) if freq > t => Attribute::SameProgram,
                Some(_) => Attribute::RegionalVariant,
                None => Attribute::SameProgram,
            };
            self.tables[idx].table.insert_unique(Frequency::new(band, attribute, freq));
        }
    }
}
