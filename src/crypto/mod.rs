// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub(crate) mod codecs;
pub(crate) mod elliptic_curve_params;
pub(crate) mod hash;
pub mod sm2;
pub mod sm3;

pub use codecs::bytes_to_hex;
pub use codecs::hex_to_bytes;
pub use codecs::CodecsError;
