/*++

Licensed under the Apache-2.0 license.

File Name:

    trap.rs

Abstract:

    File contains RISCV trap related types.

--*/

/// Interrupt flag of the machine cause register
pub const MCAUSE_INTERRUPT: u32 = 1 << 31;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Trap {
    Synchronous(Exception),
    Asynchronous(Interrupt),
}

impl From<u32> for Trap {
    /// Decode the machine cause register
    fn from(mcause: u32) -> Self {
        let code = mcause & !MCAUSE_INTERRUPT;
        if mcause & MCAUSE_INTERRUPT != 0 {
            Trap::Asynchronous(Interrupt::from(code))
        } else {
            Trap::Synchronous(Exception::from(code))
        }
    }
}

/// Exceptions are unusual conditions that occur at run time, associated with an instruction in the current RISC-V hart.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Exception {
    /// Instruction address misaligned
    InstructionMisaligned,
    /// Instruction access fault
    InstructionAccessFault,
    /// Illegal instruction
    IllegalInstruction,
    /// Breakpoint
    Breakpoint,
    /// Load address misaligned
    LoadMisaligned,
    /// Load access fault
    LoadAccessFault,
    /// Store/AMO address misaligned
    StoreMisaligned,
    /// Store access fault
    StoreAccessFault,
    /// Environment call from M-mode
    MachineEnvCall,
    // Not Implemented
    NotImplemented,
}

// Convert machine cause register value to Exception
impl From<u32> for Exception {
    #[inline(always)]
    fn from(val: u32) -> Exception {
        match val {
            0x00 => Exception::InstructionMisaligned,
            0x01 => Exception::InstructionAccessFault,
            0x02 => Exception::IllegalInstruction,
            0x03 => Exception::Breakpoint,
            0x04 => Exception::LoadMisaligned,
            0x05 => Exception::LoadAccessFault,
            0x06 => Exception::StoreMisaligned,
            0x07 => Exception::StoreAccessFault,
            0x0b => Exception::MachineEnvCall,
            _ => Exception::NotImplemented,
        }
    }
}

/// Interrupts are events that occur asynchronously outside any of the RISC-V harts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Interrupt {
    MachineSoftwareInterrupt,
    MachineTimerInterrupt,
    MachineExternalInterrupt,
    NotImplemented,
}

impl From<u32> for Interrupt {
    #[inline(always)]
    fn from(val: u32) -> Self {
        match val {
            0x03 => Self::MachineSoftwareInterrupt,
            0x07 => Self::MachineTimerInterrupt,
            0x0b => Self::MachineExternalInterrupt,
            _ => Self::NotImplemented,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_exceptions() {
        assert_eq!(
            Trap::from(2),
            Trap::Synchronous(Exception::IllegalInstruction)
        );
        assert_eq!(Trap::from(6), Trap::Synchronous(Exception::StoreMisaligned));
        assert_eq!(Trap::from(7), Trap::Synchronous(Exception::StoreAccessFault));
        assert_eq!(Trap::from(0x0b), Trap::Synchronous(Exception::MachineEnvCall));
        assert_eq!(Trap::from(0x0a), Trap::Synchronous(Exception::NotImplemented));
    }

    #[test]
    fn test_decode_interrupts() {
        assert_eq!(
            Trap::from(MCAUSE_INTERRUPT | 7),
            Trap::Asynchronous(Interrupt::MachineTimerInterrupt)
        );
        assert_eq!(
            Trap::from(MCAUSE_INTERRUPT | 2),
            Trap::Asynchronous(Interrupt::NotImplemented)
        );
    }
}
