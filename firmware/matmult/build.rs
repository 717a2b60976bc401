/*++

Licensed under the Apache-2.0 license.

File Name:

    build.rs

Abstract:

    Build script for the matrix multiplication self-test firmware. The
    linker script itself is emitted by ndsmd-cpu.

--*/

fn main() {
    if std::env::var("CARGO_CFG_TARGET_ARCH").as_deref() == Ok("riscv32") {
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
