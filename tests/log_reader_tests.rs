use std::io::Write;

use rds_decode::log_reader::read_log;
use rds_decode::{Bler, Decoder, DecoderConfig, DataRecord};

#[test]
fn reads_groups_and_decodes_them() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1234:0 0000:0 0000:0 0000:0").unwrap();
    writeln!(file, "0000:1 2000:0 ABCD:0 0000:0").unwrap();
    let groups = read_log(file.path()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].a.value, 0x1234);
    assert_eq!(groups[0].a.errors, Bler::None);
    assert_eq!(groups[1].a.errors, Bler::OneOrTwo);

    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();
    for group in &groups {
        decoder.decode(&mut data, group);
    }
    assert_eq!(data.pi_code, 0x1234);
}

#[test]
fn uncorrectable_suffix_maps_to_six_plus() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1234:U 0000 0000 0000").unwrap();
    let groups = read_log(file.path()).unwrap();
    assert_eq!(groups[0].a.errors, Bler::SixPlus);
}

#[test]
fn empty_file_is_reported() {
    let file = tempfile::NamedTempFile::new().unwrap();
    assert!(read_log(file.path()).is_err());
}

#[test]
fn missing_file_is_reported() {
    assert!(read_log(std::path::Path::new("/no/such/file.log")).is_err());
}
