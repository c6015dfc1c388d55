// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::fmt::Display;

/// An error returned by [`get_os_random_bytes`](super::os_random::get_os_random_bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GetOsRandomBytesError {
    #[cfg(target_os = "macos")]
    AppleSecRandom(crate::os::SecOsStatus),
    #[cfg(target_os = "linux")]
    LinuxGetRandom(crate::os::LibcErrno),
    #[cfg(target_os = "linux")]
    LinuxGetRandomCopiedNumberLessThanRequested,
    #[cfg(target_os = "windows")]
    WindowsBCryptGenRandom(crate::os::NtStatus),
}

impl Display for GetOsRandomBytesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(target_os = "macos")]
            GetOsRandomBytesError::AppleSecRandom(ret) => {
                write!(f, "SecRandomCopyBytes failed with result {ret}")
            }
            #[cfg(target_os = "linux")]
            GetOsRandomBytesError::LinuxGetRandom(errno) => {
                write!(f, "getrandom(2) failed with errno {errno}")
            }
            #[cfg(target_os = "linux")]
            GetOsRandomBytesError::LinuxGetRandomCopiedNumberLessThanRequested => {
                write!(f, "getrandom(2) copied fewer bytes than requested")
            }
            #[cfg(target_os = "windows")]
            GetOsRandomBytesError::WindowsBCryptGenRandom(status) => {
                write!(f, "BCryptGenRandom failed with NTSTATUS {status:#x}")
            }
        }
    }
}

impl std::error::Error for GetOsRandomBytesError {}
