/*++

Licensed under the Apache-2.0 license.

File Name:

    checker.rs

Abstract:

    File contains the host checker digest of the matrix fixture. It uses the
    reflected (zlib compatible) CRC-32 and is independent of the on-target
    verification pipeline.

--*/

use crate::crc32::{CRC32_POLYNOMIAL, CRC32_TABLE_LEN};
use crate::matrix::Fixture;
use zerocopy::AsBytes;

/// Digest the host checker reports for the fixture.
pub const CHECKER_DIGEST: u32 = 0xB555_A39C;

/// Generator polynomial in LSB-first form
pub const CRC32_REFLECTED_POLYNOMIAL: u32 = CRC32_POLYNOMIAL.reverse_bits();

static REFLECTED_TABLE: [u32; CRC32_TABLE_LEN] = reflected_table();

const fn reflected_table() -> [u32; CRC32_TABLE_LEN] {
    let mut table = [0u32; CRC32_TABLE_LEN];
    let mut i = 0;
    while i < CRC32_TABLE_LEN {
        let mut crc = i as u32;
        let mut j = 0;
        while j < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ CRC32_REFLECTED_POLYNOMIAL
            } else {
                crc >> 1
            };
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// IEEE CRC-32 of `data` (init and xorout 0xFFFFFFFF, reflected)
pub fn crc32_ieee(data: &[u8]) -> u32 {
    let crc = data.iter().fold(!0u32, |crc, &byte| {
        (crc >> 8) ^ REFLECTED_TABLE[usize::from((crc as u8) ^ byte)]
    });
    !crc
}

/// XOR of the IEEE CRC-32 of each matrix
pub fn checker_digest(fixture: &Fixture) -> u32 {
    fixture
        .matrices()
        .iter()
        .fold(0, |digest, m| digest ^ crc32_ieee(m.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc32_ieee(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32_ieee(&[]), 0);
    }

    #[test]
    fn test_matches_crc_crate() {
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        assert_eq!(crc32_ieee(&data), crc::crc32::checksum_ieee(&data));
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_fixture_digest() {
        let fixture = Fixture::new();
        assert_eq!(checker_digest(&fixture), CHECKER_DIGEST);

        // A and B are equal, so their terms cancel.
        assert_eq!(crc32_ieee(fixture.c.as_bytes()), CHECKER_DIGEST);

        let expected = fixture
            .matrices()
            .iter()
            .fold(0, |acc, m| acc ^ crc::crc32::checksum_ieee(m.as_bytes()));
        assert_eq!(expected, CHECKER_DIGEST);
    }

    #[test]
    fn test_reflected_polynomial() {
        assert_eq!(CRC32_REFLECTED_POLYNOMIAL, 0xEDB8_8320);
        assert_eq!(REFLECTED_TABLE[1], 0x7707_3096);
        assert_eq!(REFLECTED_TABLE[128], 0xEDB8_8320);
    }
}
