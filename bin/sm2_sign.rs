// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Signs a message with a freshly generated SM2 key pair, then verifies the
//! signature against the same key pair, printing `(r, s)` and the
//! verification result.
//!
//! # Examples
//!
//! cargo run --bin sm2_sign -- "message digest"

use lightsmtools::crypto::sm2::{generate_key_pair, sign, verify};

fn main() {
    let message = std::env::args()
        .nth(1)
        .expect("Error: the message parameter is missing");

    let key_pair = generate_key_pair().expect("Error: failed to generate a key pair");

    let signature = sign(message.as_bytes(), &key_pair).expect("Error: failed to sign");
    println!("r: {}", signature.r.to_hex());
    println!("s: {}", signature.s.to_hex());

    let ok = verify(message.as_bytes(), &signature, &key_pair).expect("Error: failed to verify");
    println!("verified: {ok}");
}
