/*++

Licensed under the Apache-2.0 license.

File Name:

    crc32_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for the CRC-32 engine.

--*/

use ndsmd_error::{NdsmdError, NdsmdResult};
use ndsmd_selftest::{Crc32Table, CRC32_POLYNOMIAL};

const CHECK_DATA: &[u8] = b"123456789";

// Init 0, complemented once
const CHECK_VALUE: u32 = 0x765E_7680;

const TABLE_SPOT_CHECKS: [(u8, u32); 4] = [
    (0x00, 0x0000_0000),
    (0x01, CRC32_POLYNOMIAL),
    (0x80, 0x690C_E0EE),
    (0xFF, 0xB1F7_40B4),
];

#[derive(Default, Debug)]
pub struct Crc32Kat {}

impl Crc32Kat {
    /// This function executes the Known Answer Tests (aka KAT) for CRC-32.
    ///
    /// # Arguments
    ///
    /// * `table` - Remainder table under test
    ///
    /// # Returns
    ///
    /// * `NdsmdResult` - Result denoting the KAT outcome.
    pub fn execute(&self, table: &Crc32Table) -> NdsmdResult<()> {
        self.kat_table(table)?;
        self.kat_check_value(table)?;
        self.kat_chaining(table)?;
        Ok(())
    }

    fn kat_table(&self, table: &Crc32Table) -> NdsmdResult<()> {
        for (index, expected) in TABLE_SPOT_CHECKS {
            if table.get(index) != expected {
                Err(NdsmdError::KAT_CRC32_TABLE_FAILURE)?;
            }
        }
        Ok(())
    }

    fn kat_check_value(&self, table: &Crc32Table) -> NdsmdResult<()> {
        if table.update(0, CHECK_DATA) != CHECK_VALUE {
            Err(NdsmdError::KAT_CRC32_CHECK_VALUE_FAILURE)?;
        }
        Ok(())
    }

    fn kat_chaining(&self, table: &Crc32Table) -> NdsmdResult<()> {
        let (head, tail) = CHECK_DATA.split_at(5);
        let partial = table.update(0, head);
        if table.update(!partial, tail) != CHECK_VALUE {
            Err(NdsmdError::KAT_CRC32_CHAINING_FAILURE)?;
        }
        Ok(())
    }
}
