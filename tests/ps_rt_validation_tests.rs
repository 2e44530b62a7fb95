use rds_decode::{Bler, Block, DataRecord, Decoder, DecoderConfig, Group};

fn block(value: u16, errors: Bler) -> Block {
    Block::new(value, errors)
}

fn feed_ps_rotation(decoder: &Decoder, data: &mut DataRecord, text: &[u8; 8]) {
    for pair in 0..4u16 {
        let b = pair; // pair index in bits 1..0, TA/MS bits left 0
        let i = pair as usize * 2;
        let d = (text[i] as u16) << 8 | text[i + 1] as u16;
        let group = Group::new(block(0, Bler::None), block(b, Bler::None), block(0, Bler::None), block(d, Bler::None));
        decoder.decode(data, &group);
    }
}

#[test]
fn ps_advanced_convergence_after_two_consistent_rotations() {
    let decoder = Decoder::new(DecoderConfig { advanced_ps_decoding: true });
    let mut data = DataRecord::new();
    let hello = *b"HELLO!  ";

    feed_ps_rotation(&decoder, &mut data, &hello);
    feed_ps_rotation(&decoder, &mut data, &hello);

    assert!(data.ps.valid);
    assert_eq!(&data.ps.buf.display, &hello);
}

#[test]
fn ps_transition_suppression_after_convergence() {
    let decoder = Decoder::new(DecoderConfig { advanced_ps_decoding: true });
    let mut data = DataRecord::new();
    let hello = *b"HELLO!  ";
    let world = *b"WORLD!  ";

    feed_ps_rotation(&decoder, &mut data, &hello);
    feed_ps_rotation(&decoder, &mut data, &hello);
    assert_eq!(&data.ps.buf.display, &hello);

    feed_ps_rotation(&decoder, &mut data, &world);
    // Still HELLO! until WORLD! re-saturates the hit counts.
    assert_eq!(&data.ps.buf.display, &hello);
}
