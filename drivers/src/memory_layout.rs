/*++
Licensed under the Apache-2.0 license.

File Name:

    memory_layout.rs

Abstract:

    The file contains the layout of memory. The constants defined
    in this file define the memory layout. The linker script emitted by
    ndsmd-cpu uses the same values.

--*/

//
// Memory Addresses
//
pub const ROM_ORG: u32 = 0x00000000;
pub const RAM_ORG: u32 = 0x10000000;
pub const STACK_ORG: u32 = 0x10003000;
pub const MMIO_ORG: u32 = 0x20000000;

//
// MMIO Registers
//
pub const GENERIC_OUTPUT_ORG: u32 = MMIO_ORG;
pub const SELFTEST_STATUS_ORG: u32 = MMIO_ORG + 0x10;
pub const SELFTEST_CHECKSUM_ORG: u32 = MMIO_ORG + 0x14;
pub const SELFTEST_ERROR_ORG: u32 = MMIO_ORG + 0x18;
pub const TRAP_MCAUSE_ORG: u32 = MMIO_ORG + 0x1C;
pub const TRAP_MEPC_ORG: u32 = MMIO_ORG + 0x20;
pub const TRAP_MTVAL_ORG: u32 = MMIO_ORG + 0x24;

//
// Memory Sizes In Bytes
//
pub const ROM_SIZE: u32 = 32 * 1024;
pub const RAM_SIZE: u32 = 16 * 1024;
pub const STACK_SIZE: u32 = 4 * 1024;
pub const MMIO_SIZE: u32 = 0x40;

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_regions() {
    assert!(ROM_ORG + ROM_SIZE <= RAM_ORG);
    assert!(RAM_ORG + RAM_SIZE <= MMIO_ORG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_stack() {
    assert_eq!(STACK_ORG + STACK_SIZE, RAM_ORG + RAM_SIZE);
    assert_eq!(STACK_ORG % 16, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mem_layout_test_mmio() {
    let regs = [
        GENERIC_OUTPUT_ORG,
        SELFTEST_STATUS_ORG,
        SELFTEST_CHECKSUM_ORG,
        SELFTEST_ERROR_ORG,
        TRAP_MCAUSE_ORG,
        TRAP_MEPC_ORG,
        TRAP_MTVAL_ORG,
    ];
    for pair in regs.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    for reg in regs {
        assert_eq!(reg % 4, 0);
        assert!(reg + 4 <= MMIO_ORG + MMIO_SIZE);
    }
}
