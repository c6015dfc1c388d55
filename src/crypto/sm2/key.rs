// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A SM2 key pair: a private scalar `pri`, a public point `pub = [pri]*G`,
//! or both together.

use crate::bigint::Sign;
use crate::bigint::BigInt;
use crate::crypto::sm2::domain::{sm2p256v1, CurveParams};
use crate::crypto::sm2::error::InvalidKeyError;
use crate::crypto::sm2::point_encoding::{decode_point, encode_point, PointEncodingMode};
use crate::crypto::sm2::za::za;
use crate::math::elliptic_curve::Point;

/// A SM2 key pair. Either field may be absent: a signer holds `pri` (and
/// derives `pub` lazily), while a verifier holds only `pub`.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyPair {
    pub_point: Option<Point>,
    pri_scalar: Option<BigInt>,
}

impl KeyPair {
    /// Builds a key pair from an already-parsed point and/or scalar, validating
    /// both per §4.D:
    /// - `pub`, if present, must not be the identity, must lie on the curve,
    ///   and must be in the base point's subgroup.
    /// - `pri`, if present, must be in `[1, n - 2]`.
    /// - if both are present, `pub` must equal `[pri] * G`.
    pub fn construct(
        pub_point: Option<Point>,
        pri_scalar: Option<BigInt>,
    ) -> Result<KeyPair, InvalidKeyError> {
        let params = sm2p256v1();

        if let Some(ref p) = pub_point {
            if !params.validate_point(p) {
                return Err(InvalidKeyError::PublicKeyNotOnCurve);
            }
            // `EllipticCurveParams::validate_point` only runs the subgroup
            // check when `cofactor != 1`; sm2p256v1 has cofactor 1, so it is
            // checked here explicitly.
            let subgroup_check = params.curve.mul_point(p, &params.base_point_order);
            if !subgroup_check.is_identity_element() {
                return Err(InvalidKeyError::PublicKeyNotOnCurve);
            }
        }

        if let Some(ref d) = pri_scalar {
            let one = BigInt::from(1);
            let n_minus_2 = &params.base_point_order - &BigInt::from(2);
            if d < &one || d > &n_minus_2 {
                return Err(InvalidKeyError::PrivateKeyOutOfRange);
            }
        }

        let resolved_pub = match (&pub_point, &pri_scalar) {
            (Some(p), Some(d)) => {
                let derived = params.curve.mul_point(&params.base_point, d);
                if &derived != p {
                    return Err(InvalidKeyError::KeyPairMismatch);
                }
                Some(p.clone())
            }
            (Some(p), None) => Some(p.clone()),
            (None, Some(d)) => Some(params.curve.mul_point(&params.base_point, d)),
            (None, None) => None,
        };

        Ok(KeyPair {
            pub_point: resolved_pub,
            pri_scalar,
        })
    }

    /// Builds a key pair from a decoded public-key byte string and/or a
    /// 32-byte big-endian private scalar.
    pub fn construct_from_bytes(
        pub_bytes: Option<&[u8]>,
        pri_bytes: Option<&[u8]>,
    ) -> Result<KeyPair, InvalidKeyError> {
        let pub_point = match pub_bytes {
            Some(bytes) => {
                let params = sm2p256v1();
                Some(
                    decode_point(bytes, params)
                        .map_err(InvalidKeyError::InvalidPublicKeyEncoding)?,
                )
            }
            None => None,
        };
        let pri_scalar = pri_bytes.map(|bytes| BigInt::from_be_bytes(bytes, Sign::Positive));

        KeyPair::construct(pub_point, pri_scalar)
    }

    pub fn pub_point(&self) -> Option<&Point> {
        self.pub_point.as_ref()
    }

    pub fn pri_scalar(&self) -> Option<&BigInt> {
        self.pri_scalar.as_ref()
    }

    /// Encodes `pub` per `mode`, or `None` if this key pair has no public key.
    pub fn pub_to_bytes(&self, mode: PointEncodingMode) -> Option<Vec<u8>> {
        let params = sm2p256v1();
        self.pub_point
            .as_ref()
            .map(|p| encode_point(p, params, mode))
    }

    /// `Z_A` for this key pair's public key under `id`.
    pub(crate) fn za(&self, id: &str) -> Option<[u8; 32]> {
        let params = sm2p256v1();
        self.pub_point.as_ref().map(|p| za(id, p, params))
    }

    pub(crate) fn curve_params(&self) -> &'static CurveParams {
        sm2p256v1()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_from_private_scalar_derives_public() {
        let params = sm2p256v1();
        let d = BigInt::from(12345);
        let key_pair = KeyPair::construct(None, Some(d.clone())).unwrap();

        let expected_pub = params.curve.mul_point(&params.base_point, &d);
        assert_eq!(key_pair.pub_point(), Some(&expected_pub));
        assert_eq!(key_pair.pri_scalar(), Some(&d));
    }

    #[test]
    fn test_construct_rejects_out_of_range_private_scalar() {
        let params = sm2p256v1();
        let n_minus_1 = &params.base_point_order - &BigInt::from(1);

        assert_eq!(
            KeyPair::construct(None, Some(BigInt::zero())).unwrap_err(),
            InvalidKeyError::PrivateKeyOutOfRange
        );
        assert_eq!(
            KeyPair::construct(None, Some(n_minus_1)).unwrap_err(),
            InvalidKeyError::PrivateKeyOutOfRange
        );
    }

    #[test]
    fn test_construct_rejects_mismatched_pair() {
        let params = sm2p256v1();
        let d = BigInt::from(12345);
        let wrong_pub = params.curve.mul_point(&params.base_point, &BigInt::from(7));

        assert_eq!(
            KeyPair::construct(Some(wrong_pub), Some(d)).unwrap_err(),
            InvalidKeyError::KeyPairMismatch
        );
    }

    #[test]
    fn test_construct_rejects_identity_public_key() {
        assert_eq!(
            KeyPair::construct(Some(Point::identity_element()), None).unwrap_err(),
            InvalidKeyError::PublicKeyNotOnCurve
        );
    }

    #[test]
    fn test_construct_accepts_matching_pair() {
        let params = sm2p256v1();
        let d = BigInt::from(999);
        let p = params.curve.mul_point(&params.base_point, &d);
        assert!(KeyPair::construct(Some(p), Some(d)).is_ok());
    }

    #[test]
    fn test_pub_to_bytes_round_trips_through_construct_from_bytes() {
        let d = BigInt::from(42);
        let key_pair = KeyPair::construct(None, Some(d)).unwrap();
        let encoded = key_pair
            .pub_to_bytes(PointEncodingMode::Compressed)
            .unwrap();

        let decoded = KeyPair::construct_from_bytes(Some(&encoded), None).unwrap();
        assert_eq!(decoded.pub_point(), key_pair.pub_point());
    }
}
