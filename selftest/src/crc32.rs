/*++

Licensed under the Apache-2.0 license.

File Name:

    crc32.rs

Abstract:

    File contains the table driven CRC-32 engine used as the self-test oracle.

--*/

/// Generator polynomial (MSB-first form)
pub const CRC32_POLYNOMIAL: u32 = 0x04C1_1DB7;

/// Number of entries in the remainder table
pub const CRC32_TABLE_LEN: usize = 256;

/// Table of 8-bit remainders for [`CRC32_POLYNOMIAL`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Crc32Table([u32; CRC32_TABLE_LEN]);

/// Process wide remainder table, evaluated at compile time.
pub static CRC32_TABLE: Crc32Table = Crc32Table::build();

impl Crc32Table {
    /// Build the remainder table
    ///
    /// Each byte value is shifted into the top 8 bits of the accumulator and
    /// divided by the generator polynomial over 8 rounds.
    pub const fn build() -> Self {
        let mut table = [0u32; CRC32_TABLE_LEN];
        let mut i = 0;
        while i < CRC32_TABLE_LEN {
            let mut crc_accum = (i as u32) << 24;
            let mut j = 0;
            while j < 8 {
                crc_accum = if crc_accum & 0x8000_0000 != 0 {
                    (crc_accum << 1) ^ CRC32_POLYNOMIAL
                } else {
                    crc_accum << 1
                };
                j += 1;
            }
            table[i] = crc_accum;
            i += 1;
        }
        Self(table)
    }

    /// Wrap precomputed entries
    pub const fn from_entries(entries: [u32; CRC32_TABLE_LEN]) -> Self {
        Self(entries)
    }

    /// Remainder for `index`
    #[inline]
    pub fn get(&self, index: u8) -> u32 {
        self.0[usize::from(index)]
    }

    /// Table entries in byte value order
    pub fn entries(&self) -> &[u32; CRC32_TABLE_LEN] {
        &self.0
    }

    /// Fold `data` into `crc_accum` and return the complemented result.
    ///
    /// The complement is applied on every call. Chained callers feed the
    /// previous (already complemented) result straight back in.
    ///
    /// # Arguments
    ///
    /// * `crc_accum` - Running accumulator
    /// * `data` - Bytes to fold
    ///
    /// # Returns
    ///
    /// * `u32` - Bitwise NOT of the updated accumulator
    pub fn update(&self, mut crc_accum: u32, data: &[u8]) -> u32 {
        for &byte in data {
            let index = ((crc_accum >> 24) as u8) ^ byte;
            crc_accum = (crc_accum << 8) ^ self.get(index);
        }
        !crc_accum
    }
}

impl Default for Crc32Table {
    fn default() -> Self {
        CRC32_TABLE.clone()
    }
}

/// Build a fresh remainder table
pub const fn build_table() -> Crc32Table {
    Crc32Table::build()
}

/// Fold `data` into `crc_accum` using `table`. See [`Crc32Table::update`].
pub fn update_crc(crc_accum: u32, data: &[u8], table: &Crc32Table) -> u32 {
    table.update(crc_accum, data)
}
