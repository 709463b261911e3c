use embedded_hal_mock::eh1::i2c::Mock;

use crate::*;
use super::*;

#[test]
fn test_legacy_decoding_boundaries() {
    let decoding = SignDecoding::Legacy;
    assert_eq!(decoding.decode(0x0000), 0);
    assert_eq!(decoding.decode(0x0100), 256);
    assert_eq!(decoding.decode(0x7FFF), 32767);
    assert_eq!(decoding.decode(0x8000), 32768);
    assert_eq!(decoding.decode(0x8001), -32767);
    assert_eq!(decoding.decode(0xFFFF), -1);
}

#[test]
fn test_legacy_decoding_whole_range() {
    for word in 0..=u16::MAX {
        let expected = if word <= 0x8000 { word as i32 } else { word as i32 - 65536 };
        assert_eq!(SignDecoding::Legacy.decode(word), expected, "word {:#06x}", word);
    }
}

#[test]
fn test_twos_complement_decoding() {
    let decoding = SignDecoding::TwosComplement;
    assert_eq!(decoding.decode(0x7FFF), 32767);
    assert_eq!(decoding.decode(0x8000), -32768);
    assert_eq!(decoding.decode(0xFFFF), -1);
}

#[test]
fn test_decodings_only_differ_at_0x8000() {
    for word in 0..=u16::MAX {
        let legacy = SignDecoding::Legacy.decode(word);
        let conventional = SignDecoding::TwosComplement.decode(word);
        if word == 0x8000 {
            assert_eq!(legacy - conventional, 65536);
        } else {
            assert_eq!(legacy, conventional, "word {:#06x}", word);
        }
    }
}

#[test]
fn test_read_word_reads_high_then_low() {
    let mut bus = Mock::new(&expect_read_word(0x68, 0x3B, 0x12, 0x34));
    assert_eq!(read_word(&mut bus, 0x68, 0x3B), Ok(0x1234));
    bus.done();
}

#[test]
fn test_read_word_signed_uses_decoding() {
    let mut expectations = expect_read_word(0x69, 0x43, 0x80, 0x00);
    expectations.extend(expect_read_word(0x69, 0x43, 0x80, 0x00));
    let mut bus = Mock::new(&expectations);
    assert_eq!(read_word_signed(&mut bus, 0x69, 0x43, SignDecoding::Legacy), Ok(32768));
    assert_eq!(read_word_signed(&mut bus, 0x69, 0x43, SignDecoding::TwosComplement), Ok(-32768));
    bus.done();
}
