/*++

Licensed under the Apache-2.0 license.

File Name:

    report.rs

Abstract:

    File contains the human readable diagnostic report of a self-test run.

--*/

use crate::matrix::{Fixture, Matrix, NROWS};
use crate::verify::Verdict;
use ufmt::{uDisplay, uWrite, uwrite};

/// Width of the banner printed ahead of every matrix
pub const BANNER_WIDTH: usize = 100;

/// Lowercase hexadecimal without leading zeros
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Hex32(pub u32);

impl uDisplay for Hex32 {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        let mut started = false;
        for shift in (0..8).rev() {
            let c = ((self.0 >> (shift * 4)) & 0xf) as u8;
            if c == 0 && !started && shift != 0 {
                continue;
            }
            started = true;
            if c < 10 {
                f.write_char((c + b'0') as char)?;
            } else {
                f.write_char((c - 10 + b'a') as char)?;
            }
        }
        Ok(())
    }
}

/// Banner followed by one line of space separated elements per row
pub struct MatrixDump<'a>(pub &'a Matrix);

impl uDisplay for MatrixDump<'_> {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for _ in 0..BANNER_WIDTH {
            f.write_char('*')?;
        }
        f.write_char('\n')?;

        for i in 0..NROWS {
            for val in self.0.row(i) {
                uwrite!(f, "{} ", *val)?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

/// Snapshot of every phase of a run plus its verdict
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Report {
    /// A after filling
    pub a: Matrix,

    /// B after filling
    pub b: Matrix,

    /// C after zeroing
    pub cleared: Matrix,

    /// C after the product
    pub product: Matrix,

    pub verdict: Verdict,
}

impl Report {
    pub fn new(fixture: &Fixture, cleared: Matrix, verdict: Verdict) -> Self {
        Self {
            a: fixture.a,
            b: fixture.b,
            cleared,
            product: fixture.c,
            verdict,
        }
    }
}

impl uDisplay for Report {
    fn fmt<W>(&self, f: &mut ufmt::Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        for m in [&self.a, &self.b, &self.cleared, &self.product] {
            uwrite!(f, "{}", MatrixDump(m))?;
        }
        uwrite!(
            f,
            "Expected: {}; Actual: {}\n",
            Hex32(self.verdict.expected),
            Hex32(self.verdict.checksum)
        )
    }
}
