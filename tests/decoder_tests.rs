use rds_decode::{Bler, Block, DataRecord, Decoder, DecoderConfig, Group, GroupType, ValidFields, Version};

fn block(value: u16, errors: Bler) -> Block {
    Block::new(value, errors)
}

#[test]
fn basic_pi_and_tp_pty_from_block_b() {
    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();
    let pty = 0b10101u16;
    let b = (pty << 5) | (1 << 10);
    let group = Group::new(
        block(0x1234, Bler::None),
        block(b, Bler::OneOrTwo),
        block(0, Bler::None),
        block(0, Bler::None),
    );
    decoder.decode(&mut data, &group);
    assert_eq!(data.pi_code, 0x1234);
    assert!(data.is_valid(ValidFields::PI_CODE));
    assert!(data.tp_code);
    assert_eq!(data.pty, 0b10101);
}

#[test]
fn pi_via_b_version_redundancy() {
    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();
    let b = (0u16 << 12) | (1 << 11); // 0B
    let group = Group::new(
        block(0x0000, Bler::OneOrTwo),
        block(b, Bler::OneOrTwo),
        block(0xABCD, Bler::None),
        block(0, Bler::None),
    );
    decoder.decode(&mut data, &group);
    assert_eq!(data.pi_code, 0xABCD);
}

#[test]
fn group_above_block_b_threshold_only_touches_debug_counter() {
    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();
    data.pi_code = 0x9999;
    data.valid.insert(ValidFields::PI_CODE);

    let group = Group::new(
        block(0x1234, Bler::None),
        block(0, Bler::ThreeToFive),
        block(0, Bler::None),
        block(0, Bler::None),
    );
    decoder.decode(&mut data, &group);

    // Block A is still acceptable so pi_code updates from step 1, but
    // nothing downstream of the block-B gate changes.
    assert_eq!(data.pi_code, 0x1234);
    assert_eq!(data.block_b_rejections, 1);
    assert!(!data.is_valid(ValidFields::TP));
}

#[test]
fn reset_zeros_decodable_fields_and_validity() {
    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();
    let group = Group::new(
        block(0x1234, Bler::None),
        block(0, Bler::None),
        block(0, Bler::None),
        block(0, Bler::None),
    );
    decoder.decode(&mut data, &group);
    assert_ne!(data.valid, ValidFields::empty());

    decoder.reset(&mut data);
    assert_eq!(data.valid, ValidFields::empty());
    assert_eq!(data.pi_code, 0);
}

#[test]
fn oda_registration_then_dispatch_fires_callback_with_app_id() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let decoder = Decoder::new(DecoderConfig::default());
    let mut data = DataRecord::new();

    let seen = Rc::new(RefCell::new(None));
    let seen2 = seen.clone();
    data.oda.set_callbacks(
        Some(Box::new(move |app_id, _data, _group, _gt| {
            *seen2.borrow_mut() = Some(app_id);
        })),
        None,
    );

    // 3A registers app 0x4BD7 under group type 11A.
    let reg_code = 11u16;
    let reg_version_bit = 0u16; // A
    let b3a = (3u16 << 12) | (reg_code << 1) | reg_version_bit;
    let group3a = Group::new(
        block(0, Bler::None),
        block(b3a, Bler::None),
        block(0, Bler::None),
        block(0x4BD7, Bler::None),
    );
    decoder.decode(&mut data, &group3a);
    assert_eq!(data.oda.count(), 1);

    // 11A arrives; callback should fire with the registered app id.
    let b11a = 11u16 << 12;
    let group11a = Group::new(
        block(0, Bler::None),
        block(b11a, Bler::None),
        block(0, Bler::None),
        block(0, Bler::None),
    );
    assert_eq!(group11a.group_type(), GroupType { code: 11, version: Version::A });
    decoder.decode(&mut data, &group11a);

    assert_eq!(*seen.borrow(), Some(0x4BD7));
}
