/*++

Licensed under the Apache-2.0 license.

File Name:

    expected.rs

Abstract:

    Host side rendition of the self-test run: the values the firmware is
    expected to report, and the fixture dump behind them.

--*/

use ndsmd_selftest::{
    checker_digest, fixture_checksum, run, Fixture, RunConfig, CHECKER_DIGEST, CRC32_TABLE,
    EXPECTED_CHECKSUM,
};
use ufmt::uwrite;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ExpectedValues {
    /// Chained pipeline checksum computed on this host
    pub checksum: u32,

    /// Reflected checker digest computed on this host
    pub digest: u32,
}

impl ExpectedValues {
    /// Both values agree with the constants built into the firmware
    pub fn matches_firmware(&self) -> bool {
        self.checksum == EXPECTED_CHECKSUM && self.digest == CHECKER_DIGEST
    }
}

pub fn expected_values() -> ExpectedValues {
    let fixture = Fixture::new();
    ExpectedValues {
        checksum: fixture_checksum(&fixture, &CRC32_TABLE),
        digest: checker_digest(&fixture),
    }
}

/// Text printed by the `expected` subcommand. With `verbose` the matrix
/// dump of a diagnostic run comes first.
pub fn render_expected(verbose: bool) -> String {
    let mut out = String::new();
    if verbose {
        if let Some(report) = run(&RunConfig::new(true)).report {
            uwrite!(&mut out, "{}", report).unwrap_or_else(|e| match e {});
        }
    }

    let values = expected_values();
    out.push_str(&format!("pipeline checksum: {:#010x}\n", values.checksum));
    out.push_str(&format!("checker digest:    {:#010x}\n", values.digest));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_endian = "little")]
    fn test_expected_values() {
        let values = expected_values();
        assert_eq!(values.checksum, 0xc972_09df);
        assert_eq!(values.digest, 0xb555_a39c);
        assert!(values.matches_firmware());
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn test_render_expected() {
        assert_eq!(
            render_expected(false),
            "pipeline checksum: 0xc97209df\n\
             checker digest:    0xb555a39c\n"
        );
    }

    #[test]
    fn test_render_verbose() {
        let text = render_expected(true);
        assert_eq!(text.lines().filter(|l| l.starts_with('*')).count(), 4);
        assert!(text.contains("Expected: c97209df; Actual: "));
        assert!(text.ends_with(&render_expected(false)));
    }
}
