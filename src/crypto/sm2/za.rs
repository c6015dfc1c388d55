// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Z_A`, the domain-separation preamble hashed ahead of the message in
//! `sign`/`verify`, binding a signature to the curve parameters, the
//! signer's identifier, and the signer's public key.

use crate::crypto::sm2::domain::CurveParams;
use crate::math::elliptic_curve::Point;

/// The sample identifier used throughout GM/T 0003's worked examples.
pub const DEFAULT_USER_ID: &str = "1234567812345678";

/// Computes `Z_A = SM3(ENTL_A || ID_A || a || b || Gx || Gy || pubX || pubY)`.
///
/// `ENTL_A` is the 16-bit big-endian bit length of `id`. `id` MUST be at
/// most `0x1fff` bytes long, the largest length `ENTL_A` can represent.
pub fn za(id: &str, pub_point: &Point, params: &CurveParams) -> [u8; 32] {
    let id_bytes = id.as_bytes();
    let entl = (id_bytes.len() as u64) * 8;
    assert!(entl <= u16::MAX as u64, "user id too long to encode in ENTL_A");

    let element_len = params.base_point_order.byte_len();
    let mut data = Vec::with_capacity(2 + id_bytes.len() + element_len * 6);
    data.extend_from_slice(&(entl as u16).to_be_bytes());
    data.extend_from_slice(id_bytes);
    data.extend(left_pad(&params.curve.a.to_be_bytes(), element_len));
    data.extend(left_pad(&params.curve.b.to_be_bytes(), element_len));
    data.extend(left_pad(&params.base_point.x.to_be_bytes(), element_len));
    data.extend(left_pad(&params.base_point.y.to_be_bytes(), element_len));
    data.extend(left_pad(&pub_point.x.to_be_bytes(), element_len));
    data.extend(left_pad(&pub_point.y.to_be_bytes(), element_len));

    crate::crypto::sm3::sm3(&data)
}

fn left_pad(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(bytes);
    out
}
