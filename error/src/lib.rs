/*++

Licensed under the Apache-2.0 license.

File Name:

    lib.rs

Abstract:

    File contains API and macros used by the self-test firmware for error handling

--*/
#![cfg_attr(not(any(test, feature = "std")), no_std)]
use core::convert::From;
use core::num::{NonZeroU32, TryFromIntError};

/// Self-test Error Type
/// Derives debug, copy, clone, eq, and partial eq
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NdsmdError(pub NonZeroU32);

/// Macro to define error constants ensuring uniqueness
///
/// This macro takes a list of (name, value, doc) tuples and generates
/// constant definitions for each error code.
#[macro_export]
macro_rules! define_error_constants {
    ($(($name:ident, $value:expr, $doc:expr)),* $(,)?) => {
        $(
            #[doc = $doc]
            pub const $name: NdsmdError = NdsmdError::new_const($value);
        )*

        #[cfg(test)]
        /// Returns a vector of all defined error constants for testing uniqueness
        pub fn all_constants() -> Vec<(&'static str, u32)> {
            vec![
                $(
                    (stringify!($name), $value),
                )*
            ]
        }
    };
}

impl NdsmdError {
    /// Create an error; intended to only be used from const contexts, as we don't want
    /// runtime panics if val is zero. The preferred way to get an NdsmdError from a u32 is to
    /// use `NdsmdError::try_from()` from the `TryFrom` trait impl.
    const fn new_const(val: u32) -> Self {
        match NonZeroU32::new(val) {
            Some(val) => Self(val),
            None => panic!("NdsmdError cannot be 0"),
        }
    }

    /// Component identifier stored in the upper half of the code
    pub const fn component(&self) -> u16 {
        (self.0.get() >> 16) as u16
    }

    define_error_constants![
        (
            KAT_CRC32_TABLE_FAILURE,
            0x00010001,
            "CRC32 KAT: remainder table entry mismatch"
        ),
        (
            KAT_CRC32_CHECK_VALUE_FAILURE,
            0x00010002,
            "CRC32 KAT: check value for \"123456789\" mismatch"
        ),
        (
            KAT_CRC32_CHAINING_FAILURE,
            0x00010003,
            "CRC32 KAT: complement-per-call chaining law violated"
        ),
        (
            KAT_FIXTURE_INPUT_MISMATCH,
            0x00020001,
            "Fixture KAT: input matrix does not follow the row*col pattern"
        ),
        (
            KAT_FIXTURE_PRODUCT_MISMATCH,
            0x00020002,
            "Fixture KAT: product matrix element mismatch"
        ),
        (
            SELFTEST_CHECKSUM_MISMATCH,
            0x00030001,
            "Self-test: fixture checksum does not match the expected constant"
        ),
        (
            CPU_UNHANDLED_TRAP,
            0x00040001,
            "CPU: unhandled trap taken during self-test"
        ),
        (
            MATMULT_PANIC,
            0x00050001,
            "Firmware: panic handler entered"
        ),
    ];
}

impl From<core::num::NonZeroU32> for crate::NdsmdError {
    fn from(val: core::num::NonZeroU32) -> Self {
        crate::NdsmdError(val)
    }
}

impl From<NdsmdError> for core::num::NonZeroU32 {
    fn from(val: NdsmdError) -> Self {
        val.0
    }
}

impl From<NdsmdError> for u32 {
    fn from(val: NdsmdError) -> Self {
        core::num::NonZeroU32::from(val).get()
    }
}

impl TryFrom<u32> for NdsmdError {
    type Error = TryFromIntError;
    fn try_from(val: u32) -> Result<Self, TryFromIntError> {
        match NonZeroU32::try_from(val) {
            Ok(val) => Ok(NdsmdError(val)),
            Err(err) => Err(err),
        }
    }
}

pub type NdsmdResult<T> = Result<T, NdsmdError>;
