// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Named curve parameters for `sm2p256v1`, the curve standardized by GM/T 0003.

use crate::bigint::BigInt;
use crate::crypto::elliptic_curve_params::EllipticCurveParams;
use crate::math::elliptic_curve::{Curve, Point};

/// Curve parameters: prime `p`, coefficients `a`/`b`, base point `G`, and its order `n`.
pub type CurveParams = EllipticCurveParams;

/// Returns the parameters of `sm2p256v1`, the curve defined by GM/T 0003.2.
pub fn sm2p256v1() -> &'static CurveParams {
    use std::sync::OnceLock;
    static CURVE: OnceLock<CurveParams> = OnceLock::new();

    CURVE.get_or_init(|| CurveParams {
        curve: Curve {
            p: BigInt::from_hex(
                "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFF",
            )
            .unwrap(),
            a: BigInt::from_hex(
                "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF00000000FFFFFFFFFFFFFFFC",
            )
            .unwrap(),
            b: BigInt::from_hex(
                "28E9FA9E9D9F5E344D5A9E4BCF6509A7F39789F515AB8F92DDBCBD414D940E93",
            )
            .unwrap(),
        },
        base_point: Point {
            x: BigInt::from_hex(
                "32C4AE2C1F1981195F9904466A39C9948FE30BBFF2660BE1715A4589334C74C7",
            )
            .unwrap(),
            y: BigInt::from_hex(
                "BC3736A2F4F6779C59BDCEE36B692153D0A9877CC62A474002DF32E52139F0A0",
            )
            .unwrap(),
        },
        base_point_order: BigInt::from_hex(
            "FFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFF7203DF6B21C6052B53BBF40939D54123",
        )
        .unwrap(),
        cofactor: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sm2p256v1_self_consistent() {
        let params = sm2p256v1();

        assert!(params.validate_point(&params.base_point));

        // n * G = O
        let o = params
            .curve
            .mul_point(&params.base_point, &params.base_point_order);
        assert!(o.is_identity_element());

        // a = p - 3, as required by the short-Weierstrass form used throughout.
        let three = BigInt::from(3);
        assert_eq!(params.curve.a, &params.curve.p - &three);
    }
}
