// Copyright 2022 Developers of the lightcryptotools project.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Constant-time implementation for hex/bytes conversion.
//!
//! From time to time, your colleagues pass down some [mysterious code snippets][1] that
//! you can copy and paste into your project, and they just work.
//! This implementation is one of them.
//! The same code can be found in [libsodium][2] and [WireGuard][3].
//! Original code by [CodesInChaos][4].
//!
//! [1]: https://www.reddit.com/r/HalfLife/comments/nwrtol/valve_still_uses_the_same_light_flicker_pattern/
//! [2]: https://github.com/jedisct1/libsodium/blob/64129657a5c67f3bab84562aa8d57dacc685cc75/src/libsodium/sodium/codecs.c#L12-L101
//! [3]: https://git.zx2c4.com/wireguard-tools/tree/src/encoding.c?id=d8230ea0dcb02d716125b2b3c076f2de40ebed99#n74
//! [4]: https://stackoverflow.com/questions/311165/how-do-you-convert-a-byte-array-to-a-hexadecimal-string-and-vice-versa#answer-14333437

use std::fmt;
use std::fmt::Display;

/// Converts `bytes` into a lowercase hexadecimal representation.
///
/// Each byte is converted into the corresponding 2-digit hex representation.
///
/// # Examples
///
/// ```
/// use lightsmtools::crypto::bytes_to_hex;
///
/// let hex = bytes_to_hex(&[0x13, 0x7a, 0xcf]);
/// assert_eq!(hex, "137acf");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    // 1 byte expands to 2 corresponding UTF8 chars.
    let mut data = Vec::with_capacity(bytes.len() * 2);

    for byte in bytes {
        let low_nibble = (byte & 0x0f) as i8;
        let high_nibble = (byte >> 4) as i8;

        // A nibble is 4 bits, representing [0x0, 0xf]
        //
        // 1. `nibble - 10`:
        //
        //     The result is < 0 for nibble in [0x0, 0x9] (char: 0-9),
        //     and >= 0 for nibble in [0xa, 0xf] (char: a-f)
        //
        // 2. ``lhs_i8 >> 7``:
        //
        //     Using ``>> 7`` on lhs_i8 extracts the sign, thanks to sign extension.
        //     The result is -1 for lhs_i8 < 0, and 0 for lhs_i8 >= 0.
        //
        // 3. Combining 1 and 2, `(nibble - 10) >> 7`:
        //    The result is -1 for nibble in [0x0, 0x9], and 0 for nibble in [0xa, 0xf]
        //
        // 4. `-1 & -39` and `0 & -39`:
        //
        //     The result is -39 for `-1 & -39`, 0 for `0 & -39`
        //
        // 5. `87 + nibble + (-39)` or `87 + nibble + 0`:
        //
        //     Combining 3 and 4,
        //     the result is [48, 57] for [0x0, 0x9], and [97, 102] for [0xa, 0xf].
        //     In ASCII, [48, 57] represents chars '0' to '9',
        //     and [97, 102] represents chars 'a' to 'f'.
        data.push((87 + high_nibble + (((high_nibble - 10) >> 7) & -39)) as u8);
        data.push((87 + low_nibble + (((low_nibble - 10) >> 7) & -39)) as u8);
    }

    unsafe { String::from_utf8_unchecked(data) }
}

/// Alias of [`bytes_to_hex`] used at call sites that want to make the
/// "lowercase, fixed-case" guarantee explicit (e.g. point/signature encoders).
pub(crate) fn bytes_to_lower_hex(bytes: &[u8]) -> String {
    bytes_to_hex(bytes)
}

/// Converts a hexadecimal representation `hex` into bytes.
///
/// `hex` must have an even length and consist only of `[0-9a-fA-F]`.
///
/// # Examples
///
/// ```
/// use lightsmtools::crypto::hex_to_bytes;
///
/// let bytes = hex_to_bytes("137acf").unwrap();
/// assert_eq!(bytes, vec![0x13, 0x7a, 0xcf]);
/// ```
pub fn hex_to_bytes<T: AsRef<[u8]>>(hex: T) -> Result<Vec<u8>, CodecsError> {
    let hex = hex.as_ref();
    if hex.len() & 1 != 0 {
        return Err(CodecsError::OddLength);
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for pair in hex.chunks_exact(2) {
        let high = nibble_from_hex_char(pair[0])?;
        let low = nibble_from_hex_char(pair[1])?;
        bytes.push((high << 4) | low);
    }

    Ok(bytes)
}

fn nibble_from_hex_char(c: u8) -> Result<u8, CodecsError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(CodecsError::InvalidCharFound),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecsError {
    OddLength,
    InvalidCharFound,
}

impl Display for CodecsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecsError::OddLength => write!(f, "hex string has an odd length"),
            CodecsError::InvalidCharFound => write!(f, "invalid hex character found"),
        }
    }
}

impl std::error::Error for CodecsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_hex() {
        assert_eq!(bytes_to_hex(&[]), "");
        assert_eq!(bytes_to_hex(&[0x00, 0xff]), "00ff");
        assert_eq!(bytes_to_hex(&[0x13, 0x7a, 0xcf]), "137acf");
    }

    #[test]
    fn test_hex_to_bytes() {
        assert_eq!(hex_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(hex_to_bytes("00ff").unwrap(), vec![0x00, 0xff]);
        assert_eq!(hex_to_bytes("137ACF").unwrap(), vec![0x13, 0x7a, 0xcf]);
        assert_eq!(hex_to_bytes("1").unwrap_err(), CodecsError::OddLength);
        assert_eq!(
            hex_to_bytes("zz").unwrap_err(),
            CodecsError::InvalidCharFound
        );
    }

    #[test]
    fn round_trip() {
        let bytes = [0x00, 0x01, 0x7f, 0x80, 0xff];
        assert_eq!(hex_to_bytes(bytes_to_hex(&bytes)).unwrap(), bytes);
    }
}
