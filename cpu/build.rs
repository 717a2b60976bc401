// Licensed under the Apache-2.0 license

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Put the linker script somewhere the linker can find it. The regions
    // mirror ndsmd_drivers::memory_layout.
    fs::write(
        out_dir.join("link.x"),
        r#"MEMORY
    {
        ROM   (rx)  : ORIGIN = 0x00000000, LENGTH = 32K
        RAM   (rwx) : ORIGIN = 0x10000000, LENGTH = 12K
        STACK (rw)  : ORIGIN = 0x10003000, LENGTH = 4K
    }

    ENTRY(_start)

    STACK_SIZE = 0x1000;

    SECTIONS
    {
        .text : ALIGN(4)
        {
            _stext = .;

            KEEP(*(.init .init.*));
            *(.text .text.*);

            . = ALIGN(4);
            _etext = .;
        } > ROM

        .rodata : ALIGN(4)
        {
            _srodata = .;

            *(.srodata .srodata.*);
            *(.rodata .rodata.*);

            . = ALIGN(4);
            _erodata = .;
        } > ROM

        .data : ALIGN(4)
        {
            _sidata = LOADADDR(.data);
            _sdata = .;

            /* Must be called __global_pointer$ for linker relaxations to work. */
            PROVIDE(__global_pointer$ = . + 0x800);

            *(.sdata .sdata.* .sdata2 .sdata2.*);
            *(.data .data.*);

            . = ALIGN(4);
            _edata = .;
        } > RAM AT > ROM

        .bss (NOLOAD) : ALIGN(4)
        {
            _sbss = .;

            *(.sbss*)
            *(.bss*)
            *(COMMON)
            . = ALIGN(4);

            _ebss = .;
        } > RAM

        .stack (NOLOAD) : ALIGN(16)
        {
            _estack = .;

            . = . + STACK_SIZE;

            . = ALIGN(16);
            _sstack = .;
        } > STACK

        .got (INFO) :
        {
            KEEP(*(.got .got.*));
        }

        .eh_frame (INFO) :
        {
            KEEP(*(.eh_frame))
        }

        .eh_frame_hdr (INFO) :
        {
            *(.eh_frame_hdr)
        }
    }

    ASSERT(SIZEOF(.got) == 0, ".got section detected");
    ASSERT(SIZEOF(.stack) == STACK_SIZE, ".stack section overflow");"#
            .as_bytes(),
    )
    .unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rerun-if-changed=build.rs");
}
