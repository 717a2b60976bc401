/*++

Licensed under the Apache-2.0 license.

File Name:

    selftest_kat.rs

Abstract:

    File contains function to execute all the Known Answer Tests (KAT) of the
    matrix multiplication self-test.

--*/

use crate::{Crc32Kat, FixtureKat, KatsEnv};
use ndsmd_error::{NdsmdError, NdsmdResult};
use ndsmd_selftest::{verify, Fixture, Verdict};

#[derive(Default, Debug)]
pub struct SelftestKat {}

impl SelftestKat {
    /// This function executes all the Known Answer Tests (aka KAT) and then
    /// the checksum oracle over a freshly computed fixture.
    ///
    /// # Arguments
    ///
    /// * `env` - KAT environment
    ///
    /// # Returns
    ///
    /// * `NdsmdResult<Verdict>` - Verdict of a passing checksum oracle.
    pub fn execute(&self, env: &KatsEnv) -> NdsmdResult<Verdict> {
        Crc32Kat::default().execute(env.crc32_table)?;

        let fixture = Fixture::new();
        FixtureKat::default().execute(&fixture)?;

        let verdict = verify(&fixture, env.crc32_table);
        if !verdict.success {
            Err(NdsmdError::SELFTEST_CHECKSUM_MISMATCH)?;
        }
        Ok(verdict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndsmd_selftest::{Crc32Table, CRC32_TABLE, EXPECTED_CHECKSUM};

    #[test]
    #[cfg(target_endian = "little")]
    fn test_selftest_kat_passes() {
        let env = KatsEnv {
            crc32_table: &CRC32_TABLE,
        };
        let verdict = SelftestKat::default().execute(&env).unwrap();
        assert_eq!(verdict.checksum, EXPECTED_CHECKSUM);
    }

    #[test]
    fn test_selftest_kat_stops_at_engine_failure() {
        let table = Crc32Table::from_entries([0; 256]);
        let env = KatsEnv {
            crc32_table: &table,
        };
        assert_eq!(
            SelftestKat::default().execute(&env),
            Err(NdsmdError::KAT_CRC32_TABLE_FAILURE)
        );
    }
}
