// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Encodes and decodes SM2 public-key points per GM/T 0009's byte-prefix table.
//!
//! Generalizes the compressed/uncompressed point codec of SEC1 with the two
//! extra "mixed" forms SM2 defines, and an explicit reject for the
//! point-at-infinity prefix.

use crate::bigint::Sign;
use crate::bigint::BigInt;
use crate::crypto::sm2::domain::CurveParams;
use crate::crypto::sm2::error::PointDecodingError;
use crate::math::elliptic_curve::Point;
use crate::math::modular::sqrt;

const PREFIX_INFINITY: u8 = 0x00;
const PREFIX_COMPRESSED_EVEN: u8 = 0x02;
const PREFIX_COMPRESSED_ODD: u8 = 0x03;
const PREFIX_UNCOMPRESSED: u8 = 0x04;
const PREFIX_MIXED_EVEN: u8 = 0x06;
const PREFIX_MIXED_ODD: u8 = 0x07;

/// The three on-wire forms a public-key point may take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointEncodingMode {
    Compressed,
    Uncompressed,
    /// Both coordinates are sent, alongside the parity tag of a compressed encoding.
    Mixed,
}

/// Encodes `point` per `mode`.
///
/// `point` is assumed to already be validated against `params`; this function
/// does not re-check it.
pub(crate) fn encode_point(point: &Point, params: &CurveParams, mode: PointEncodingMode) -> Vec<u8> {
    let element_len = params.base_point_order.byte_len();
    let x_bytes = left_pad(&point.x.to_be_bytes(), element_len);
    let y_bytes = left_pad(&point.y.to_be_bytes(), element_len);
    let y_even = point.y.is_even();

    match mode {
        PointEncodingMode::Compressed => {
            let mut out = Vec::with_capacity(1 + element_len);
            out.push(if y_even { PREFIX_COMPRESSED_EVEN } else { PREFIX_COMPRESSED_ODD });
            out.extend(x_bytes);
            out
        }
        PointEncodingMode::Uncompressed => {
            let mut out = Vec::with_capacity(1 + element_len * 2);
            out.push(PREFIX_UNCOMPRESSED);
            out.extend(x_bytes);
            out.extend(y_bytes);
            out
        }
        PointEncodingMode::Mixed => {
            let mut out = Vec::with_capacity(1 + element_len * 2);
            out.push(if y_even { PREFIX_MIXED_EVEN } else { PREFIX_MIXED_ODD });
            out.extend(x_bytes);
            out.extend(y_bytes);
            out
        }
    }
}

/// Decodes `bytes` into a curve point, per the prefix table.
///
/// The decoded point is guaranteed to lie on the curve and not be the identity.
pub(crate) fn decode_point(
    bytes: &[u8],
    params: &CurveParams,
) -> Result<Point, PointDecodingError> {
    let element_len = params.base_point_order.byte_len();
    let (&prefix, rest) = bytes
        .split_first()
        .ok_or(PointDecodingError::InvalidEncoding)?;

    match prefix {
        PREFIX_INFINITY => Err(PointDecodingError::PointAtInfinity),
        PREFIX_COMPRESSED_EVEN | PREFIX_COMPRESSED_ODD => {
            if rest.len() != element_len {
                return Err(PointDecodingError::InvalidEncoding);
            }
            let x = BigInt::from_be_bytes(rest, Sign::Positive);

            let y_square = &x * &x * &x + &params.curve.a * &x + &params.curve.b;
            let y_square = params.curve.modulo(&y_square);
            let (root1, root2) = sqrt(&y_square, &params.curve.p)
                .ok_or(PointDecodingError::YNotFound)?;

            let want_even = prefix == PREFIX_COMPRESSED_EVEN;
            let y = if root1.is_even() == want_even {
                root1
            } else if root2.is_even() == want_even {
                root2
            } else {
                return Err(PointDecodingError::YNotFound);
            };

            let point = Point { x, y };
            validate(&point, params)
        }
        PREFIX_UNCOMPRESSED | PREFIX_MIXED_EVEN | PREFIX_MIXED_ODD => {
            if rest.len() != element_len * 2 {
                return Err(PointDecodingError::InvalidEncoding);
            }
            let x = BigInt::from_be_bytes(&rest[..element_len], Sign::Positive);
            let y = BigInt::from_be_bytes(&rest[element_len..], Sign::Positive);

            // Mixed forms additionally carry a parity tag; since both coordinates
            // are present, the reader trusts `y` directly and only checks the curve equation.
            let point = Point { x, y };
            validate(&point, params)
        }
        _ => Err(PointDecodingError::InvalidEncoding),
    }
}

fn validate(point: &Point, params: &CurveParams) -> Result<Point, PointDecodingError> {
    if !params.validate_point(point) {
        return Err(PointDecodingError::NotOnCurve);
    }
    Ok(point.clone())
}

fn left_pad(bytes: &[u8], len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(bytes);
    out
}
