/*++

Licensed under the Apache-2.0 license.

File Name:

    fixture_kat.rs

Abstract:

    File contains the Known Answer Tests (KAT) for the matrix fixture.

--*/

use ndsmd_error::{NdsmdError, NdsmdResult};
use ndsmd_selftest::{Fixture, NCOLS, NROWS};

// (row, col, value) of the product
const PRODUCT_SPOT_CHECKS: [(usize, usize, i32); 4] =
    [(0, 0, 0), (1, 1, 14), (2, 3, 84), (3, 3, 126)];

#[derive(Default, Debug)]
pub struct FixtureKat {}

impl FixtureKat {
    /// This function executes the Known Answer Tests (aka KAT) for the
    /// matrix fixture.
    ///
    /// # Arguments
    ///
    /// * `fixture` - Fixture after the product phase
    ///
    /// # Returns
    ///
    /// * `NdsmdResult` - Result denoting the KAT outcome.
    pub fn execute(&self, fixture: &Fixture) -> NdsmdResult<()> {
        self.kat_inputs(fixture)?;
        self.kat_product(fixture)?;
        Ok(())
    }

    fn kat_inputs(&self, fixture: &Fixture) -> NdsmdResult<()> {
        for i in 0..NROWS {
            for j in 0..NCOLS {
                let expected = (i * j) as i32;
                if fixture.a.get(i, j) != expected || fixture.b.get(i, j) != expected {
                    Err(NdsmdError::KAT_FIXTURE_INPUT_MISMATCH)?;
                }
            }
        }
        Ok(())
    }

    fn kat_product(&self, fixture: &Fixture) -> NdsmdResult<()> {
        for (row, col, expected) in PRODUCT_SPOT_CHECKS {
            if fixture.c.get(row, col) != expected {
                Err(NdsmdError::KAT_FIXTURE_PRODUCT_MISMATCH)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kat_passes() {
        assert_eq!(FixtureKat::default().execute(&Fixture::new()), Ok(()));
    }

    #[test]
    fn test_kat_detects_input_mismatch() {
        let mut fixture = Fixture::new();
        fixture.b.set(3, 2, 7);
        assert_eq!(
            FixtureKat::default().execute(&fixture),
            Err(NdsmdError::KAT_FIXTURE_INPUT_MISMATCH)
        );
    }

    #[test]
    fn test_kat_detects_missing_product() {
        let mut fixture = Fixture::new();
        fixture.clear_output();
        assert_eq!(
            FixtureKat::default().execute(&fixture),
            Err(NdsmdError::KAT_FIXTURE_PRODUCT_MISMATCH)
        );
    }
}
