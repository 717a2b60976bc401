/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the matrix multiplication self-test. The
    computation is free of any output or hardware access; callers decide
    what to do with the returned outcome.

--*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod checker;
pub mod crc32;
pub mod matrix;
pub mod report;
pub mod verify;

pub use checker::{checker_digest, crc32_ieee, CHECKER_DIGEST};
pub use crc32::{build_table, update_crc, Crc32Table, CRC32_POLYNOMIAL, CRC32_TABLE};
pub use matrix::{Fixture, Matrix, MATRIX_LEN, MATRIX_SIZE, NCOLS, NROWS};
pub use report::{Hex32, MatrixDump, Report};
pub use verify::{fixture_checksum, verify, Verdict, EXPECTED_CHECKSUM};

/// Self-test run configuration
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunConfig {
    /// Capture a diagnostic report
    pub diagnostics: bool,
}

impl RunConfig {
    pub const fn new(diagnostics: bool) -> Self {
        Self { diagnostics }
    }
}

/// Result of a self-test run
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub verdict: Verdict,

    /// Present iff diagnostics were requested
    pub report: Option<Report>,
}

impl Outcome {
    /// Success flag
    pub fn success(&self) -> bool {
        self.verdict.success
    }

    /// Final checksum
    pub fn checksum(&self) -> u32 {
        self.verdict.checksum
    }
}

/// Run the self-test once
///
/// Fills A and B, zeroes C, multiplies, then checksums A, B and C and
/// compares against [`EXPECTED_CHECKSUM`].
///
/// # Arguments
///
/// * `config` - Run configuration
///
/// # Returns
///
/// * `Outcome` - Verdict and optional report
pub fn run(config: &RunConfig) -> Outcome {
    let mut fixture = Fixture::default();
    fixture.fill_inputs();
    fixture.clear_output();
    let cleared = fixture.c;
    fixture.multiply();

    let verdict = verify(&fixture, &CRC32_TABLE);
    let report = config
        .diagnostics
        .then(|| Report::new(&fixture, cleared, verdict));

    Outcome { verdict, report }
}
