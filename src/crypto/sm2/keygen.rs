// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Uniform scalar generation: private keys (this module) and nonces
//! (`crate::crypto::sm2::signing`) both draw via rejection sampling over an
//! injected [`RandomSource`].

use crate::bigint::Sign;
use crate::bigint::BigInt;
use crate::crypto::sm2::domain::sm2p256v1;
use crate::crypto::sm2::error::GenerateScalarError;
use crate::crypto::sm2::key::KeyPair;
use crate::crypto::sm2::rng::{OsRandomSource, RandomSource};

/// Draws are expected to land in range on the first try; this bounds the
/// rejection loop against a broken RNG rather than bad luck.
const MAX_ATTEMPTS: u32 = 16;

/// Draws a scalar uniformly from `[1, max]` by rejection sampling 32 random
/// bytes from `rng`. Used both for private keys (`max = n - 2`, §4.G) and
/// signing nonces (`max = n - 1`, §4.E).
pub(crate) fn generate_scalar_in_range(
    max: &BigInt,
    rng: &dyn RandomSource,
) -> Result<BigInt, GenerateScalarError> {
    let one = BigInt::from(1);

    for _ in 0..MAX_ATTEMPTS {
        let bytes = rng
            .next_bytes(32)
            .map_err(GenerateScalarError::GetOsRandomBytes)?;
        let d = BigInt::from_be_bytes(&bytes, Sign::Positive);
        if &d >= &one && &d <= max {
            return Ok(d);
        }
    }

    Err(GenerateScalarError::AttemptsExceeded)
}

/// Draws a scalar uniformly from `[1, n - 2]` via `rng`, per §4.G.
pub(crate) fn generate_scalar_with_rng(
    rng: &dyn RandomSource,
) -> Result<BigInt, GenerateScalarError> {
    let params = sm2p256v1();
    let n_minus_2 = &params.base_point_order - &BigInt::from(2);
    generate_scalar_in_range(&n_minus_2, rng)
}

/// Draws a scalar uniformly from `[1, n - 2]` from the default OS source.
pub(crate) fn generate_scalar() -> Result<BigInt, GenerateScalarError> {
    generate_scalar_with_rng(&OsRandomSource)
}

/// Generates a fresh key pair from `rng`: `KeyPair(None, d)` with `d` drawn
/// uniformly, and `pub` derived lazily from it.
pub fn generate_key_pair_with_rng(rng: &dyn RandomSource) -> Result<KeyPair, GenerateScalarError> {
    let d = generate_scalar_with_rng(rng)?;
    // `d` was just drawn in range, so construction cannot fail its own checks.
    Ok(KeyPair::construct(None, Some(d)).expect("freshly generated scalar is always in range"))
}

/// Generates a fresh key pair from the default OS random source.
pub fn generate_key_pair() -> Result<KeyPair, GenerateScalarError> {
    generate_key_pair_with_rng(&OsRandomSource)
}
