/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains exports for the self-test firmware drivers.

--*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod exit_ctrl;
pub mod memory_layout;
mod mmio;
pub mod printer;
mod status_reporter;
mod uart;

pub use exit_ctrl::ExitCtrl;
pub use status_reporter::{
    report_fw_error, report_selftest_status, report_trap, reset_selftest_status,
    selftest_status, SelftestStatus, STATUS_COMPLETE, STATUS_SUCCESS,
};
pub use uart::Uart;
