// Licensed under the Apache-2.0 license

use ndsmd_selftest::Crc32Table;

pub struct KatsEnv<'a> {
    /// CRC32 remainder table used by the verification pipeline
    pub crc32_table: &'a Crc32Table,
}
