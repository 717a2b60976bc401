// Licensed under the Apache-2.0 license

#![cfg_attr(not(test), no_std)]
#[cfg(feature = "riscv")]
core::arch::global_asm!(include_str!("start.S"));

pub mod trap;

use ndsmd_drivers::{report_fw_error, report_trap};
use ndsmd_error::NdsmdError;
pub use trap::{Exception, Interrupt, Trap};

/// Record a trap in the status block and decode its cause
pub fn log_trap_record(mcause: u32, mepc: u32, mtval: u32) -> Trap {
    report_trap(mcause, mepc, mtval);
    report_fw_error(NdsmdError::CPU_UNHANDLED_TRAP.into());
    Trap::from(mcause)
}

/// Entered from the trap catch in start.S
#[cfg(feature = "riscv")]
#[no_mangle]
#[inline(never)]
extern "C" fn trap_handler(mcause: u32, mepc: u32, mtval: u32) -> ! {
    use ndsmd_drivers::{cprintln, ExitCtrl};

    log_trap_record(mcause, mepc, mtval);
    cprintln!("TRAP mcause={} mepc={} mtval={}", mcause, mepc, mtval);
    ExitCtrl::exit(u32::from(NdsmdError::CPU_UNHANDLED_TRAP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndsmd_drivers::{reset_selftest_status, selftest_status};

    #[test]
    fn test_log_trap_record() {
        reset_selftest_status();
        let trap = log_trap_record(2, 0x0000_0040, 0);
        assert_eq!(trap, Trap::Synchronous(Exception::IllegalInstruction));
        assert_eq!(
            selftest_status().error,
            u32::from(NdsmdError::CPU_UNHANDLED_TRAP)
        );
        assert!(!selftest_status().complete);
    }
}
