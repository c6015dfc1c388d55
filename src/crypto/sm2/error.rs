// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;

/// Failures decoding an encoded public-key point, per the prefix table of GM/T 0009.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PointDecodingError {
    /// Wrong length, or a prefix byte not in `{0x00, 0x02, 0x03, 0x04, 0x06, 0x07}`.
    InvalidEncoding,
    /// Prefix `0x00`, the point-at-infinity encoding, which is always rejected on input.
    PointAtInfinity,
    /// No square root of `x^3 + a*x + b` exists modulo `p`, or the recovered root's
    /// parity does not match the prefix's parity tag.
    YNotFound,
    /// The decoded coordinates do not satisfy the curve equation, or denote the identity.
    NotOnCurve,
}

impl Display for PointDecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointDecodingError::InvalidEncoding => write!(f, "invalid point encoding"),
            PointDecodingError::PointAtInfinity => write!(f, "point at infinity is not a valid public key"),
            PointDecodingError::YNotFound => write!(f, "no y coordinate matches the requested parity"),
            PointDecodingError::NotOnCurve => write!(f, "decoded point is not on the curve"),
        }
    }
}

impl std::error::Error for PointDecodingError {}

/// Failures constructing or validating a key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidKeyError {
    /// `pub` failed to decode.
    InvalidPublicKeyEncoding(PointDecodingError),
    /// `pub` is the identity element, not on the curve, or not in the base point's subgroup.
    PublicKeyNotOnCurve,
    /// `pri` is zero or greater than `n - 2`.
    PrivateKeyOutOfRange,
    /// Both `pub` and `pri` were given, but `pub != [pri] * G`.
    KeyPairMismatch,
}

impl Display for InvalidKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidKeyError::InvalidPublicKeyEncoding(err) => {
                write!(f, "invalid public key encoding: {err}")
            }
            InvalidKeyError::PublicKeyNotOnCurve => write!(f, "public key is not a valid curve point"),
            InvalidKeyError::PrivateKeyOutOfRange => {
                write!(f, "private key is out of range [1, n - 2]")
            }
            InvalidKeyError::KeyPairMismatch => write!(f, "public key does not match private key"),
        }
    }
}

impl std::error::Error for InvalidKeyError {}

/// Failures producing a signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SigningError {
    /// `sign`/`signRaw`/`signDigest` called on a key pair with no private key.
    MissingPrivateKey,
    /// `pri = n - 1`, so `(1 + pri)^-1 mod n` does not exist.
    InvalidPrivateKey,
    /// The retry loop exceeded its sanity bound without producing a valid `(r, s)`.
    ///
    /// Each retry condition (`r = 0`, `r + k = n`, `s = 0`) fires with negligible
    /// probability; exhausting the bound indicates a broken RNG, not bad luck.
    SigningAttemptsExceeded,
}

impl Display for SigningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningError::MissingPrivateKey => write!(f, "signing requires a private key"),
            SigningError::InvalidPrivateKey => write!(f, "private key equals n - 1, no inverse of (1 + pri) exists"),
            SigningError::SigningAttemptsExceeded => {
                write!(f, "exceeded the maximum number of signing attempts")
            }
        }
    }
}

impl std::error::Error for SigningError {}

/// Failures evaluating a signature.
///
/// Unlike the other error kinds, a signature simply failing to verify is
/// reported as `Ok(false)`, never as one of these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerifyingError {
    /// `verify`/`verifyRaw`/`verifyDigest` called on a key pair with no public key.
    MissingPublicKey,
}

impl Display for VerifyingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyingError::MissingPublicKey => write!(f, "verifying requires a public key"),
        }
    }
}

impl std::error::Error for VerifyingError {}

/// Failures drawing a uniformly random scalar (a private key or a nonce `k`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateScalarError {
    /// The OS random byte source failed.
    GetOsRandomBytes(crate::random::GetOsRandomBytesError),
    /// Rejection sampling exceeded its sanity bound without landing in range.
    ///
    /// Each draw lands outside `[1, n - 2]` with negligible probability;
    /// exhausting the bound indicates a broken RNG, not bad luck.
    AttemptsExceeded,
}

impl Display for GenerateScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateScalarError::GetOsRandomBytes(err) => {
                write!(f, "failed to draw random bytes: {err}")
            }
            GenerateScalarError::AttemptsExceeded => {
                write!(f, "exceeded the maximum number of scalar generation attempts")
            }
        }
    }
}

impl std::error::Error for GenerateScalarError {}
