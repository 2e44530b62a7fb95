//! Frequency representation and the AF code-to-frequency mapping.

/// Radio band a frequency belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// UHF (FM broadcast band), units of 0.1 MHz.
    Uhf,
    /// LF/MF (AM broadcast band), units of kHz.
    LfMf,
}

/// Whether an alternative frequency carries the same program or a
/// regionally-varied version of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    SameProgram,
    RegionalVariant,
}

/// A single frequency entry, as stored in an AF table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frequency {
    pub band: Band,
    pub attribute: Attribute,
    pub freq: u16,
}

impl Frequency {
    pub fn new(band: Band, attribute: Attribute, freq: u16) -> Self {
        Frequency { band, attribute, freq }
    }
}

impl PartialOrd for Frequency {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frequency {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.band, other.band) {
            (Band::Uhf, Band::Uhf) | (Band::LfMf, Band::LfMf) => self.freq.cmp(&other.freq),
            (Band::LfMf, Band::Uhf) => Ordering::Less,
            (Band::Uhf, Band::LfMf) => Ordering::Greater,
        }
    }
}

/// Maps an AF code byte to a frequency value in the given band, per the
/// RBDS annex: UHF codes 1..204 are `876 + c - 1` tenths of a MHz; LF codes
/// 1..15 are `153 + 9*(c-1)` kHz; MF codes 16.. are `531 + 9*(c-16)` kHz.
/// Returns `None` for codes outside the valid frequency ranges (sentinels
/// and reserved codes are handled by the AF decode state machine, not here).
pub fn af_code_to_freq(code: u8, band: Band) -> Option<u16> {
    match band {
        Band::Uhf => {
            if (1..=204).contains(&code) {
                Some(876 + code as u16 - 1)
            } else {
                None
            }
        }
        Band::LfMf => {
            if (1..=15).contains(&code) {
                Some(153 + 9 * (code as u16 - 1))
            } else if (16..=135).contains(&code) {
                Some(531 + 9 * (code as u16 - 16))
            } else {
                None
            }
        }
    }
}

/// True if `code` is a real (non-sentinel, non-reserved) AF frequency code
/// in the given band.
pub fn is_frequency_code(code: u8, band: Band) -> bool {
    af_code_to_freq(code, band).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uhf_mapping_matches_spec() {
        assert_eq!(af_code_to_freq(1, Band::Uhf), Some(876));
        assert_eq!(af_code_to_freq(9, Band::Uhf), Some(884));
        assert_eq!(af_code_to_freq(204, Band::Uhf), Some(876 + 203));
        assert_eq!(af_code_to_freq(0, Band::Uhf), None);
        assert_eq!(af_code_to_freq(205, Band::Uhf), None);
    }

    #[test]
    fn lf_mapping_matches_spec() {
        assert_eq!(af_code_to_freq(1, Band::LfMf), Some(153));
        assert_eq!(af_code_to_freq(15, Band::LfMf), Some(153 + 9 * 14));
    }

    #[test]
    fn mf_mapping_matches_spec() {
        assert_eq!(af_code_to_freq(16, Band::LfMf), Some(531));
        assert_eq!(af_code_to_freq(17, Band::LfMf), Some(540));
    }

    #[test]
    fn lf_mf_is_always_less_than_uhf() {
        let lf = Frequency::new(Band::LfMf, Attribute::SameProgram, 60000);
        let uhf = Frequency::new(Band::Uhf, Attribute::SameProgram, 1);
        assert!(lf < uhf);
    }

    #[test]
    fn same_band_compares_by_freq() {
        let a = Frequency::new(Band::Uhf, Attribute::SameProgram, 881);
        let b = Frequency::new(Band::Uhf, Attribute::SameProgram, 987);
        assert!(a < b);
    }
}
