/*++

Licensed under the Apache-2.0 license.

File Name:

    mmio.rs

Abstract:

    File contains word access to the memory mapped peripheral window. Host
    builds route the accesses to an in-process register shadow.

--*/

use crate::memory_layout::{MMIO_ORG, MMIO_SIZE};

cfg_if::cfg_if! {
    if #[cfg(any(test, feature = "std"))] {
        use core::sync::atomic::{AtomicU32, Ordering};

        const MMIO_WORDS: usize = (MMIO_SIZE / 4) as usize;

        #[allow(clippy::declare_interior_mutable_const)]
        const RESET_VALUE: AtomicU32 = AtomicU32::new(0);

        static SHADOW: [AtomicU32; MMIO_WORDS] = [RESET_VALUE; MMIO_WORDS];

        fn slot(addr: u32) -> &'static AtomicU32 {
            &SHADOW[word_index(addr)]
        }

        pub(crate) fn write(addr: u32, val: u32) {
            slot(addr).store(val, Ordering::SeqCst);
        }

        pub(crate) fn read(addr: u32) -> u32 {
            slot(addr).load(Ordering::SeqCst)
        }
    } else {
        pub(crate) fn write(addr: u32, val: u32) {
            let _ = word_index(addr);
            unsafe { core::ptr::write_volatile(addr as *mut u32, val) }
        }

        pub(crate) fn read(addr: u32) -> u32 {
            let _ = word_index(addr);
            unsafe { core::ptr::read_volatile(addr as *const u32) }
        }
    }
}

/// Index of the word at `addr` within the peripheral window
#[inline(always)]
fn word_index(addr: u32) -> usize {
    debug_assert!(addr >= MMIO_ORG && addr < MMIO_ORG + MMIO_SIZE && addr % 4 == 0);
    ((addr - MMIO_ORG) / 4) as usize
}
