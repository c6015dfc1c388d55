// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The SM2 elliptic-curve digital signature scheme, over the recommended
//! curve `sm2p256v1`.

pub(crate) mod domain;
mod error;
mod key;
mod keygen;
mod point_encoding;
mod rng;
mod signing;
mod verifying;
mod za;

pub use domain::{sm2p256v1, CurveParams};
pub use error::{GenerateScalarError, InvalidKeyError, PointDecodingError, SigningError, VerifyingError};
pub use key::KeyPair;
pub use keygen::{generate_key_pair, generate_key_pair_with_rng};
pub use point_encoding::PointEncodingMode;
pub use rng::{OsRandomSource, RandomSource};
pub use signing::{
    sign, sign_digest, sign_digest_with_rng, sign_raw, sign_raw_with_rng, sign_with_id,
    sign_with_id_with_rng, Signature,
};
pub use verifying::{verify, verify_digest, verify_raw, verify_with_id};
pub use za::{za, DEFAULT_USER_ID};
