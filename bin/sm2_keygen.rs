// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generates a SM2 key pair and prints the private scalar and the
//! uncompressed public key, both in hex.
//!
//! # Examples
//!
//! cargo run --bin sm2_keygen

use lightsmtools::bigint::BigInt;
use lightsmtools::crypto::bytes_to_hex;
use lightsmtools::crypto::sm2::{generate_key_pair, PointEncodingMode};

fn main() {
    match generate_key_pair() {
        Ok(key_pair) => {
            let pri: &BigInt = key_pair.pri_scalar().expect("freshly generated key pair always has a private key");
            let pub_bytes = key_pair
                .pub_to_bytes(PointEncodingMode::Uncompressed)
                .expect("freshly generated key pair always has a public key");

            println!("private: {}", pri.to_hex());
            println!("public:  0x{}", bytes_to_hex(&pub_bytes));
        }
        Err(err) => {
            println!("Error: {err}");
        }
    }
}
