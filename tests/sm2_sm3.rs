// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use lightsmtools::bigint::Sign;
use lightsmtools::bigint::BigInt;
use lightsmtools::crypto::sm2::{
    sign, sign_digest, verify, verify_digest, za, KeyPair, PointEncodingMode, Signature,
    DEFAULT_USER_ID,
};
use lightsmtools::crypto::sm3::Sm3;

// Scenario 1-3: literal SM3 test vectors.

#[test]
fn sm3_of_empty_string() {
    let mut engine = Sm3::new();
    assert_eq!(
        engine.sum_message_hex(b""),
        "1ab21d8355cfa17f8e61194831e81a8f22bec8c728fefb747ed035eb5082aa2b"
    );
}

#[test]
fn sm3_of_abc() {
    let mut engine = Sm3::new();
    assert_eq!(
        engine.sum_message_hex(b"abc"),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn sm3_of_two_block_message() {
    let msg = "abcd".repeat(16);
    let mut engine = Sm3::new();
    assert_eq!(
        engine.sum_message_hex(msg.as_bytes()),
        "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732"
    );
}

// Scenario 4: compressed public-key round-trip for the base point G.

#[test]
fn compressed_generator_round_trips() {
    let params = lightsmtools::crypto::sm2::sm2p256v1();
    let g = &params.base_point;

    let key_pair = KeyPair::construct(Some(g.clone()), None).unwrap();
    let compressed = key_pair
        .pub_to_bytes(PointEncodingMode::Compressed)
        .unwrap();

    // G's y coordinate is even, so the prefix must select the even root.
    assert_eq!(compressed[0], 0x02);

    let decoded = KeyPair::construct_from_bytes(Some(&compressed), None).unwrap();
    assert_eq!(decoded.pub_point(), Some(g));
}

// Scenario 5: deterministic self-verify, with negative bit-flip checks.

#[test]
fn self_verify_then_reject_flipped_message_signature_or_key() {
    let key_pair = KeyPair::construct(None, Some(BigInt::from(4_242_424_242u64))).unwrap();
    let msg = b"message digest";

    let signature = sign(msg, &key_pair).unwrap();
    assert!(verify(msg, &signature, &key_pair).unwrap());

    let flipped_msg = b"message digesu";
    assert!(!verify(flipped_msg, &signature, &key_pair).unwrap());

    let mut flipped_r = signature.clone();
    flipped_r.r = &flipped_r.r + &BigInt::from(1);
    assert!(!verify(msg, &flipped_r, &key_pair).unwrap());

    let mut flipped_s = signature.clone();
    flipped_s.s = &flipped_s.s + &BigInt::from(1);
    assert!(!verify(msg, &flipped_s, &key_pair).unwrap());
}

// Scenario 6: a known-answer vector fixed by an independent reference
// implementation, covering `Z_A` computation through to verification.

#[test]
fn known_answer_za_and_signature_vector() {
    let d = BigInt::from_hex("128b2fa8bd433c6c068c8d803dff79792a519a55171b1b650c23661d15897263")
        .unwrap();
    let key_pair = KeyPair::construct(None, Some(d)).unwrap();

    let params = lightsmtools::crypto::sm2::sm2p256v1();
    let pub_point = key_pair.pub_point().unwrap();
    assert_eq!(
        pub_point.x,
        BigInt::from_hex("d5548c7825cbb56150a3506cd57464af8a1ae0519dfaf3c58221dc810caf28dd")
            .unwrap()
    );
    assert_eq!(
        pub_point.y,
        BigInt::from_hex("921073768fe3d59ce54e79a49445cf73fed23086537027264d168946d479533e")
            .unwrap()
    );

    let z_a = za(DEFAULT_USER_ID, pub_point, params);
    assert_eq!(
        lightsmtools::crypto::bytes_to_hex(&z_a),
        "879215bd4850a48adb86915f5bac8c609939d220f55ef4e1982324da6f628a07"
    );

    let mut data = z_a.to_vec();
    data.extend_from_slice(b"message digest");
    let e = BigInt::from_be_bytes(&Sm3::new().sum_message(&data), Sign::Positive);
    assert_eq!(
        e,
        BigInt::from_hex("6a758dfc2f5cd85f504626003044f12e72230b49329baa0320bbc948fbc2e6af")
            .unwrap()
    );

    let signature = sign_digest(&e, &key_pair).unwrap();
    assert!(verify_digest(&e, &signature, &key_pair).unwrap());

    // `sign`/`verify` compute the same `e` internally.
    let signature = sign(b"message digest", &key_pair).unwrap();
    assert!(verify(b"message digest", &signature, &key_pair).unwrap());
}

// Properties: hash streaming equals one-shot, and hash reset.

#[test]
fn hash_streaming_equals_one_shot() {
    let msg = "the quick brown fox jumps over the lazy dog, many times over".repeat(4);
    let msg = msg.as_bytes();

    let mut one_shot = Sm3::new();
    let one_shot_digest = one_shot.sum_message(msg);

    for split in [0, 1, 17, 63, 64, 65, msg.len()] {
        let mut streaming = Sm3::new();
        streaming.write(&msg[..split]);
        streaming.write(&msg[split..]);
        assert_eq!(streaming.sum(), one_shot_digest);
    }
}

#[test]
fn hash_reset_after_sum_matches_fresh_engine() {
    let mut engine = Sm3::new();
    let _ = engine.sum_message(b"first message");

    engine.write(b"second message");
    let after_reuse = engine.sum();

    let mut fresh = Sm3::new();
    let from_fresh = fresh.sum_message(b"second message");

    assert_eq!(after_reuse, from_fresh);
}

// Property: key derivation.

#[test]
fn key_derivation_matches_scalar_multiplication() {
    let params = lightsmtools::crypto::sm2::sm2p256v1();
    let d = BigInt::from(9_876_543_210u64);
    let key_pair = KeyPair::construct(None, Some(d.clone())).unwrap();

    let expected = params.curve.mul_point(&params.base_point, &d);
    assert_eq!(key_pair.pub_point(), Some(&expected));
}

// Property: rejection of off-curve points and the point-at-infinity prefix.

#[test]
fn rejects_off_curve_and_infinity_encodings() {
    let params = lightsmtools::crypto::sm2::sm2p256v1();
    let element_len = params.base_point_order.byte_len();

    let mut infinity_bytes = vec![0u8; 1 + element_len * 2];
    assert!(KeyPair::construct_from_bytes(Some(&infinity_bytes), None).is_err());

    infinity_bytes[0] = 0x04;
    infinity_bytes[1 + element_len] = 1; // (0, 1) is not on sm2p256v1.
    assert!(KeyPair::construct_from_bytes(Some(&infinity_bytes), None).is_err());
}

// Property: signature bounds.

#[test]
fn signatures_land_within_bounds() {
    let params = lightsmtools::crypto::sm2::sm2p256v1();
    let key_pair = KeyPair::construct(None, Some(BigInt::from(31_415_926u64))).unwrap();

    for i in 0..8u64 {
        let e = BigInt::from(1000 + i);
        let Signature { r, s } = sign_digest(&e, &key_pair).unwrap();
        assert!(r >= BigInt::from(1) && r < params.base_point_order);
        assert!(s >= BigInt::from(1) && s < params.base_point_order);
    }
}
