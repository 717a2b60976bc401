/*++

Licensed under the Apache-2.0 license.

File Name:

    verify.rs

Abstract:

    File contains the checksum verification pipeline for the matrix fixture.

--*/

use crate::crc32::Crc32Table;
use crate::matrix::Fixture;
use zerocopy::AsBytes;

/// Checksum of A, B and C folded through three chained CRC updates.
pub const EXPECTED_CHECKSUM: u32 = 0xC972_09DF;

/// Outcome of the verification pipeline
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Verdict {
    /// Final accumulator
    pub checksum: u32,

    /// Constant the checksum was compared against
    pub expected: u32,

    /// Set iff `checksum == expected`
    pub success: bool,
}

impl Verdict {
    /// Compare `checksum` against `expected`
    pub fn new(checksum: u32, expected: u32) -> Self {
        Self {
            checksum,
            expected,
            success: checksum == expected,
        }
    }
}

/// Fold the native-endian bytes of A, then B, then C into one accumulator.
///
/// Every matrix is a separate `update` call, so the accumulator is
/// complemented after each of them.
pub fn fixture_checksum(fixture: &Fixture, table: &Crc32Table) -> u32 {
    fixture
        .matrices()
        .iter()
        .fold(0, |crc_accum, m| table.update(crc_accum, m.as_bytes()))
}

/// Checksum the fixture and compare it against [`EXPECTED_CHECKSUM`]
pub fn verify(fixture: &Fixture, table: &Crc32Table) -> Verdict {
    Verdict::new(fixture_checksum(fixture, table), EXPECTED_CHECKSUM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc32::CRC32_TABLE;
    use crate::matrix::{Matrix, MATRIX_SIZE};

    #[test]
    #[cfg(target_endian = "little")]
    fn test_fixture_checksum() {
        let fixture = Fixture::new();
        assert_eq!(fixture_checksum(&fixture, &CRC32_TABLE), 0xC972_09DF);

        let verdict = verify(&fixture, &CRC32_TABLE);
        assert_eq!(verdict.checksum, EXPECTED_CHECKSUM);
        assert_eq!(verdict.expected, EXPECTED_CHECKSUM);
        assert!(verdict.success);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_checksum_differs_from_single_stream() {
        let fixture = Fixture::new();
        let mut stream = [0u8; 3 * MATRIX_SIZE];
        for (chunk, m) in stream.chunks_exact_mut(MATRIX_SIZE).zip(fixture.matrices()) {
            chunk.copy_from_slice(m.as_bytes());
        }
        let once = CRC32_TABLE.update(0, &stream);
        assert_eq!(once, 0x1CEB_AD32);
        assert_ne!(once, fixture_checksum(&fixture, &CRC32_TABLE));
    }

    #[test]
    fn test_documented_constant_is_not_pipeline_value() {
        assert_ne!(
            fixture_checksum(&Fixture::new(), &CRC32_TABLE),
            crate::checker::CHECKER_DIGEST
        );
    }

    #[test]
    fn test_verdict_requires_equality() {
        assert!(Verdict::new(0x1234, 0x1234).success);
        assert!(!Verdict::new(0x1234, 0x1235).success);
        assert!(!Verdict::new(0, EXPECTED_CHECKSUM).success);
    }

    #[test]
    fn test_single_byte_perturbation_clears_flag() {
        let pristine = Fixture::new();
        for which in 0..3 {
            for offset in 0..MATRIX_SIZE {
                for flip in [0x01u8, 0x80, 0xFF] {
                    let mut fixture = pristine;
                    let m: &mut Matrix = match which {
                        0 => &mut fixture.a,
                        1 => &mut fixture.b,
                        _ => &mut fixture.c,
                    };
                    m.as_bytes_mut()[offset] ^= flip;

                    let verdict = verify(&fixture, &CRC32_TABLE);
                    assert!(
                        !verdict.success,
                        "matrix {which} byte {offset} flip {flip:#04x}"
                    );
                    assert_ne!(verdict.checksum, EXPECTED_CHECKSUM);
                }
            }
        }
    }
}
