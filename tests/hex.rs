use p256_core::field::U256;

#[test]
fn hex_encode_pads_to_64_chars() {
    let buffer = U256::from_hex("deadbeef").to_hex();
    assert_eq!(
        &buffer[..],
        b"00000000000000000000000000000000000000000000000000000000deadbeef"
    );

    let buffer = U256::ZERO.to_hex();
    assert_eq!(&buffer[..], [b'0'; 64]);
}

#[test]
fn hex_round_trip_full_width() {
    let text = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";
    let value = U256::from_hex(text);

    assert_eq!(&value.to_hex()[..], text.as_bytes());
    assert_eq!(value.to_string(), text);
}

#[test]
fn hex_decode_accepts_both_cases() {
    let lower = U256::from_hex("deadbeef");
    let upper = U256::from_hex("DEADBEEF");
    let mixed = U256::from_hex("DeAdBeEf");

    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn hex_decode_skips_non_hex_bytes() {
    let plain = U256::from_hex("deadbeef");

    assert_eq!(U256::from_hex("0xdeadbeef"), U256::from_hex("0deadbeef"));
    assert_eq!(U256::from_hex("de:ad:be:ef"), plain);
    assert_eq!(U256::from_hex("  dead beef\n"), plain);
    assert_eq!(U256::from_hex("zzz"), U256::ZERO);
}

#[test]
fn hex_decode_right_aligns_short_input() {
    let value = U256::from_hex("1");
    assert_eq!(value, U256::ONE);

    // nine nibbles straddle the first limb boundary
    let value = U256::from_hex("123456789");
    assert_eq!(value.limbs()[..2], [0x23456789, 0x1]);
}

#[test]
fn hex_decode_discards_nibbles_beyond_window() {
    // 66 nibbles: the two leading ones fall outside the 256-bit window
    let long = "ab112233445566778899aabbccddeeff00112233445566778899aabbccddeeff11";
    let short = "112233445566778899aabbccddeeff00112233445566778899aabbccddeeff11";

    assert_eq!(U256::from_hex(long), U256::from_hex(short));
}

#[test]
fn hex_decode_matches_reference_decoder() {
    let text = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

    // independent decode: big-endian bytes folded into little-endian limbs
    let bytes = hex::decode(text).unwrap();
    let mut limbs = [0u32; 8];
    for (i, chunk) in bytes.chunks_exact(4).rev().enumerate() {
        limbs[i] = u32::from_be_bytes(chunk.try_into().unwrap());
    }

    assert_eq!(U256::from_hex(text), U256::from_limbs(limbs));
    assert_eq!(hex::encode(&bytes), U256::from_hex(text).to_string());
}
