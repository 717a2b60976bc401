/*++

Licensed under the Apache-2.0 license.

File Name:

    exit_ctrl.rs

Abstract:

    File contains API for exit control and the terminal halt loop

--*/

use core::sync::atomic::{self, Ordering};

/// Exit control
pub enum ExitCtrl {}

impl ExitCtrl {
    /// Exit the emulator
    ///
    /// # Arguments
    ///
    /// * `exit_code`: Code to exit the emulator process with
    ///
    /// # Returns
    ///
    /// This method does not return
    #[cfg(not(feature = "std"))]
    pub fn exit(exit_code: u32) -> ! {
        if cfg!(feature = "emu") {
            crate::mmio::write(
                crate::memory_layout::GENERIC_OUTPUT_ORG,
                if exit_code == 0 { 0xff } else { 0x01 },
            );
        }
        Self::halt()
    }

    /// Exit the host process
    #[cfg(feature = "std")]
    pub fn exit(exit_code: u32) -> ! {
        std::process::exit(if exit_code == 0 { 0 } else { 1 })
    }

    /// Park the hart forever
    ///
    /// # Returns
    ///
    /// This method does not return
    pub fn halt() -> ! {
        loop {
            atomic::compiler_fence(Ordering::SeqCst);
        }
    }
}
