/*++

Licensed under the Apache-2.0 license.

File Name:

    uart.rs

Abstract:

    File contains API for accessing the UART

References:
    https://os.phil-opp.com/vga-text-mode for output functionality.

--*/

use core::fmt;

use crate::memory_layout::GENERIC_OUTPUT_ORG;
use crate::mmio;

/// Emulator console UART
#[derive(Default, Debug)]
pub struct Uart {}

impl Uart {
    /// Create an instance of the UART
    pub fn new() -> Self {
        Self {}
    }

    /// Write the string to UART
    ///
    /// # Arguments
    ///
    /// `str` - String to write to UART
    pub fn write(&mut self, str: &str) {
        for byte in str.bytes() {
            match byte {
                0x20..=0x7e | b'\n' | b'\t' => self.write_byte(byte),
                _ => self.write_byte(0xfe),
            }
        }
    }

    /// Write the byte to UART
    ///
    /// # Arguments
    ///
    /// `byte` - Byte to write to UART
    pub fn write_byte(&mut self, byte: u8) {
        mmio::write(GENERIC_OUTPUT_ORG, u32::from(byte));
    }
}

impl fmt::Write for Uart {
    /// Writes a [`char`] into this writer, returning whether the write succeeded.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write(s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_printable_is_replaced() {
        let mut uart = Uart::new();
        uart.write("ok");
        assert_eq!(mmio::read(GENERIC_OUTPUT_ORG), u32::from(b'k'));
        uart.write("\x07");
        assert_eq!(mmio::read(GENERIC_OUTPUT_ORG), 0xfe);
        uart.write("\t");
        assert_eq!(mmio::read(GENERIC_OUTPUT_ORG), u32::from(b'\t'));
    }
}
