/*++

Licensed under the Apache-2.0 license.

File Name:

    status_reporter.rs

Abstract:

    File contains API for reporting the self-test outcome, firmware errors
    and trap details through the status block.

--*/

use crate::memory_layout::{
    SELFTEST_CHECKSUM_ORG, SELFTEST_ERROR_ORG, SELFTEST_STATUS_ORG, TRAP_MCAUSE_ORG,
    TRAP_MEPC_ORG, TRAP_MTVAL_ORG,
};
use crate::mmio;

/// Set once the self-test has produced a verdict
pub const STATUS_COMPLETE: u32 = 1 << 31;

/// Set iff the checksum matched
pub const STATUS_SUCCESS: u32 = 1 << 0;

/// Status block contents, as read back by an external harness
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SelftestStatus {
    pub complete: bool,
    pub success: bool,
    pub checksum: u32,

    /// First firmware error code, zero if none
    pub error: u32,
}

/// Clear the status block
pub fn reset_selftest_status() {
    for addr in [
        SELFTEST_STATUS_ORG,
        SELFTEST_CHECKSUM_ORG,
        SELFTEST_ERROR_ORG,
        TRAP_MCAUSE_ORG,
        TRAP_MEPC_ORG,
        TRAP_MTVAL_ORG,
    ] {
        mmio::write(addr, 0);
    }
}

/// Report the self-test verdict
///
/// # Arguments
///
/// * `checksum` - Final checksum
/// * `success` - Success flag
pub fn report_selftest_status(checksum: u32, success: bool) {
    mmio::write(SELFTEST_CHECKSUM_ORG, checksum);
    let status = STATUS_COMPLETE | if success { STATUS_SUCCESS } else { 0 };
    mmio::write(SELFTEST_STATUS_ORG, status);
}

/// Report F/W error. Only the first error is kept.
///
/// # Arguments
///
/// * `val` - F/W error code.
pub fn report_fw_error(val: u32) {
    if mmio::read(SELFTEST_ERROR_ORG) == 0 {
        mmio::write(SELFTEST_ERROR_ORG, val);
    }
}

/// Record the CSRs of a trap taken by the hart
pub fn report_trap(mcause: u32, mepc: u32, mtval: u32) {
    mmio::write(TRAP_MCAUSE_ORG, mcause);
    mmio::write(TRAP_MEPC_ORG, mepc);
    mmio::write(TRAP_MTVAL_ORG, mtval);
}

/// Read back the status block
pub fn selftest_status() -> SelftestStatus {
    let status = mmio::read(SELFTEST_STATUS_ORG);
    SelftestStatus {
        complete: status & STATUS_COMPLETE != 0,
        success: status & STATUS_SUCCESS != 0,
        checksum: mmio::read(SELFTEST_CHECKSUM_ORG),
        error: mmio::read(SELFTEST_ERROR_ORG),
    }
}
