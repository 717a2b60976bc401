/*++

Licensed under the Apache-2.0 license.

File Name:

    main.rs

Abstract:

    File contains main entry point for the matrix multiplication self-test
    firmware.

--*/
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]

use ndsmd_drivers::{
    cprint, cprintln, report_fw_error, report_selftest_status, reset_selftest_status, ExitCtrl,
};
use ndsmd_error::NdsmdResult;
use ndsmd_kat::{Crc32Kat, FixtureKat, KatsEnv};
use ndsmd_selftest::{Fixture, Outcome, RunConfig, CRC32_TABLE};

// Pulls in the reset trampoline and the trap handler
use ndsmd_cpu as _;

const BANNER: &str = "Running matmult self-test ...";

/// Known answer tests ahead of the run. Failures are recorded, not fatal.
fn run_kats(env: &KatsEnv) -> NdsmdResult<()> {
    Crc32Kat::default().execute(env.crc32_table)?;
    FixtureKat::default().execute(&Fixture::new())?;
    Ok(())
}

/// Run the self-test and publish the verdict
fn selftest_main() -> Outcome {
    reset_selftest_status();
    if cfg!(feature = "debug-print") {
        cprintln!("{}", BANNER);
    }

    let env = KatsEnv {
        crc32_table: &CRC32_TABLE,
    };
    if let Err(e) = run_kats(&env) {
        cprintln!("[kat] failed 0x{}", ndsmd_selftest::Hex32(e.into()));
        report_fw_error(e.into());
    }

    let outcome = ndsmd_selftest::run(&RunConfig::new(cfg!(feature = "debug-print")));
    if let Some(report) = &outcome.report {
        cprint!("{}", *report);
    }

    report_selftest_status(outcome.checksum(), outcome.success());
    outcome
}

/// Terminal state once the status block is written
fn finish(outcome: &Outcome) {
    if cfg!(feature = "infinite-loop") {
        if cfg!(any(feature = "emu", feature = "std")) {
            ExitCtrl::exit(if outcome.success() { 0 } else { 1 });
        }
        ExitCtrl::halt();
    }
}

#[cfg(not(feature = "std"))]
#[no_mangle]
pub extern "C" fn main() {
    let outcome = selftest_main();
    finish(&outcome);
}

#[cfg(feature = "std")]
pub fn main() {
    let outcome = selftest_main();
    if !cfg!(feature = "debug-print") {
        cprintln!(
            "checksum 0x{} {}",
            ndsmd_selftest::Hex32(outcome.checksum()),
            if outcome.success() { "[ok]" } else { "[failed]" }
        );
    }
    finish(&outcome);
}

#[cfg(not(feature = "std"))]
#[panic_handler]
#[inline(never)]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    cprintln!("[matmult] panic");
    report_fw_error(ndsmd_error::NdsmdError::MATMULT_PANIC.into());
    ExitCtrl::exit(u32::MAX)
}
