// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

///! Implements SM3, the OSCCA commercial cryptography hash standard.
///
/// GM/T 0004-2012.
use crate::crypto::codecs::bytes_to_hex;
use crate::crypto::hash::UnkeyedHash;

const BLOCK_BYTE_LEN: usize = 64;
const DIGEST_BYTE_LEN: usize = 32;

const T0: u32 = 0x79cc4519;
const T1: u32 = 0x7a879d8a;

const IV: [u32; 8] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

/// A streaming SM3 hash engine.
///
/// The engine accumulates bytes across any number of [`write`](Sm3::write) calls,
/// and produces the 32-byte digest on [`sum`](Sm3::sum). After `sum` returns, the
/// engine is reset and ready to process a new, unrelated message.
pub struct Sm3 {
    v: [u32; 8],
    buffer: Vec<u8>,
    // total bytes consumed since construction or the last `reset`.
    length: u64,
}

impl Sm3 {
    pub fn new() -> Sm3 {
        Sm3 {
            v: IV,
            buffer: Vec::with_capacity(BLOCK_BYTE_LEN),
            length: 0,
        }
    }

    /// Restores the engine to its just-constructed state.
    pub fn reset(&mut self) {
        self.v = IV;
        self.buffer.clear();
        self.length = 0;
    }

    /// Feeds `data` into the engine, compressing any full 64-byte blocks
    /// immediately and keeping the remainder buffered.
    pub fn write<T: AsRef<[u8]>>(&mut self, data: T) {
        let data = data.as_ref();
        self.length += data.len() as u64;
        self.buffer.extend_from_slice(data);

        let mut offset = 0;
        while self.buffer.len() - offset >= BLOCK_BYTE_LEN {
            let block: [u8; BLOCK_BYTE_LEN] =
                self.buffer[offset..offset + BLOCK_BYTE_LEN].try_into().unwrap();
            compress(&mut self.v, &block);
            offset += BLOCK_BYTE_LEN;
        }
        self.buffer.drain(..offset);
    }

    /// Pads and compresses the remaining buffered bytes, returns the 32-byte
    /// digest, and resets the engine so it is immediately reusable.
    pub fn sum(&mut self) -> [u8; DIGEST_BYTE_LEN] {
        let bit_len = self.length * 8;

        // Appends `0x80`, then zero bytes until the length is `56 mod 64`,
        // then the original bit length as a 64-bit big-endian integer.
        self.buffer.push(0x80);
        while self.buffer.len() % BLOCK_BYTE_LEN != 56 {
            self.buffer.push(0);
        }
        self.buffer.extend_from_slice(&bit_len.to_be_bytes());

        debug_assert_eq!(self.buffer.len() % BLOCK_BYTE_LEN, 0);
        for block in self.buffer.chunks_exact(BLOCK_BYTE_LEN) {
            compress(&mut self.v, block.try_into().unwrap());
        }

        let mut digest = [0u8; DIGEST_BYTE_LEN];
        for (word, chunk) in self.v.iter().zip(digest.chunks_exact_mut(4)) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.reset();
        digest
    }

    /// Equivalent to `reset(); write(msg); sum()`.
    pub fn sum_message<T: AsRef<[u8]>>(&mut self, msg: T) -> [u8; DIGEST_BYTE_LEN] {
        self.reset();
        self.write(msg);
        self.sum()
    }

    /// Lowercase, zero-padded 64-character hex rendering of [`sum`](Sm3::sum).
    pub fn sum_hex(&mut self) -> String {
        bytes_to_hex(&self.sum())
    }

    /// Lowercase, zero-padded 64-character hex rendering of [`sum_message`](Sm3::sum_message).
    pub fn sum_message_hex<T: AsRef<[u8]>>(&mut self, msg: T) -> String {
        bytes_to_hex(&self.sum_message(msg))
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

impl UnkeyedHash for Sm3 {
    const MESSAGE_BLOCK_BYTE_LENGTH: usize = BLOCK_BYTE_LEN;
    const DIGEST_OUTPUT_BYTE_LENGTH: usize = DIGEST_BYTE_LEN;

    fn digest<T: AsRef<[u8]>>(&mut self, message: T) -> Vec<u8> {
        self.sum_message(message).to_vec()
    }
}

/// One-shot convenience wrapper: `Sm3::new().digest(msg)`.
pub fn sm3<T: AsRef<[u8]>>(msg: T) -> [u8; DIGEST_BYTE_LEN] {
    Sm3::new().sum_message(msg)
}

#[inline(always)]
fn ff(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(j: usize, x: u32, y: u32, z: u32) -> u32 {
    if j < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

fn compress(v: &mut [u32; 8], block: &[u8; BLOCK_BYTE_LEN]) {
    let mut w = [0u32; 68];
    for (word, chunk) in w[..16].iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w1 = [0u32; 64];
    for j in 0..64 {
        w1[j] = w[j] ^ w[j + 4];
    }

    let mut a = v[0];
    let mut b = v[1];
    let mut c = v[2];
    let mut d = v[3];
    let mut e = v[4];
    let mut f = v[5];
    let mut g = v[6];
    let mut h = v[7];

    for j in 0..64 {
        let t = if j < 16 { T0 } else { T1 };
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t.rotate_left((j % 32) as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let tt1 = ff(j, a, b, c)
            .wrapping_add(d)
            .wrapping_add(ss2)
            .wrapping_add(w1[j]);
        let tt2 = gg(j, e, f, g)
            .wrapping_add(h)
            .wrapping_add(ss1)
            .wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    v[0] ^= a;
    v[1] ^= b;
    v[2] ^= c;
    v[3] ^= d;
    v[4] ^= e;
    v[5] ^= f;
    v[6] ^= g;
    v[7] ^= h;
}
