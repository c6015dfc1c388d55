// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Injectable randomness for key generation and signing.
//!
//! Signing and key generation draw scalars from a [`RandomSource`] handle
//! passed down the call path, rather than reaching for a process-wide
//! singleton directly. The default, [`OsRandomSource`], is a zero-sized
//! handle onto the OS CSPRNG and costs nothing to construct per call; tests
//! inject their own sources to exercise the retry loops deterministically.

use crate::random::generator::get_os_random_bytes;
use crate::random::GetOsRandomBytesError;

/// A source of cryptographically secure random bytes.
pub trait RandomSource {
    fn next_bytes(&self, len: u32) -> Result<Vec<u8>, GetOsRandomBytesError>;
}

/// The default source: the OS CSPRNG, lazily available with no setup cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn next_bytes(&self, len: u32) -> Result<Vec<u8>, GetOsRandomBytesError> {
        get_os_random_bytes(len)
    }
}
