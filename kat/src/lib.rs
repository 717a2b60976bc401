/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the self-test Known Answer Tests.

--*/

#![cfg_attr(not(test), no_std)]

mod crc32_kat;
mod fixture_kat;
mod kats_env;
mod selftest_kat;

pub use crc32_kat::Crc32Kat;
pub use fixture_kat::FixtureKat;
pub use kats_env::KatsEnv;
pub use ndsmd_error::{NdsmdError, NdsmdResult};
pub use selftest_kat::SelftestKat;
