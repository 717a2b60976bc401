// Licensed under the Apache-2.0 license

use std::{
    env::temp_dir,
    fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

const PROGRAM_BIN: &str = env!("CARGO_BIN_EXE_ndsmd-tools");

#[test]
fn test_help() {
    let out = Command::new(PROGRAM_BIN)
        .arg("--help")
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = std::str::from_utf8(&out.stdout).unwrap();
    assert!(stdout.contains("bin2data"));
    assert!(stdout.contains("expected"));
}

#[test]
fn test_bin2data_next_to_input() {
    let tmp_dir = TmpDir::new("ndsmd-tools-test-bin2data-default").unwrap();
    tmp_dir.write("matmult.bin", &[0x13, 0x00, 0x00, 0x00, 0x6f, 0x00, 0x00, 0x00]);
    let out = Command::new(PROGRAM_BIN)
        .current_dir(&tmp_dir.0)
        .args(["bin2data", "matmult.bin"])
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        tmp_dir.read("matmult.data"),
        "00000000000000000000000000010011\n\
         00000000000000000000000001101111\n"
    );
}

#[test]
fn test_bin2data_explicit_output() {
    let tmp_dir = TmpDir::new("ndsmd-tools-test-bin2data-out").unwrap();
    tmp_dir.write("fw.bin", &0xdead_beefu32.to_le_bytes());
    let out = Command::new(PROGRAM_BIN)
        .current_dir(&tmp_dir.0)
        .args(["bin2data", "fw.bin", "--out", "mem/rom.data"])
        .stderr(Stdio::inherit())
        .output();
    // The parent directory is not created
    assert_eq!(out.unwrap().status.code(), Some(1));

    fs::create_dir(tmp_dir.0.join("mem")).unwrap();
    let out = Command::new(PROGRAM_BIN)
        .current_dir(&tmp_dir.0)
        .args(["bin2data", "fw.bin", "--out", "mem/rom.data"])
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        tmp_dir.read("mem/rom.data"),
        "11011110101011011011111011101111\n"
    );
    assert!(!tmp_dir.0.join("fw.data").exists());
}

#[test]
fn test_bin2data_truncated_image() {
    let tmp_dir = TmpDir::new("ndsmd-tools-test-bin2data-truncated").unwrap();
    tmp_dir.write("bad.bin", &[1, 2, 3, 4, 5, 6]);
    let out = Command::new(PROGRAM_BIN)
        .current_dir(&tmp_dir.0)
        .args(["bin2data", "bad.bin"])
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!tmp_dir.0.join("bad.data").exists());
}

#[test]
fn test_bin2data_missing_input() {
    let tmp_dir = TmpDir::new("ndsmd-tools-test-bin2data-missing").unwrap();
    let out = Command::new(PROGRAM_BIN)
        .current_dir(&tmp_dir.0)
        .args(["bin2data", "nope.bin"])
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
#[cfg(target_endian = "little")]
fn test_expected() {
    let out = Command::new(PROGRAM_BIN)
        .arg("expected")
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        std::str::from_utf8(&out.stdout),
        Ok("pipeline checksum: 0xc97209df\n\
            checker digest:    0xb555a39c\n")
    );
}

#[test]
#[cfg(target_endian = "little")]
fn test_expected_verbose() {
    let out = Command::new(PROGRAM_BIN)
        .args(["expected", "--verbose"])
        .stderr(Stdio::inherit())
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    let stdout = std::str::from_utf8(&out.stdout).unwrap();
    assert!(stdout.contains("0 14 28 42 "));
    assert!(stdout.contains("Expected: c97209df; Actual: c97209df"));
}

struct TmpDir(pub PathBuf);
impl TmpDir {
    fn new(name: &str) -> std::io::Result<Self> {
        let dir = temp_dir().join(name);
        fs::remove_dir_all(&dir).ok();
        fs::create_dir(&dir)?;
        Ok(Self(dir))
    }
    fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(self.0.join(path)).unwrap()
    }
    fn write(&self, path: impl AsRef<Path>, contents: &[u8]) {
        let path = self.0.join(path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}
impl Drop for TmpDir {
    fn drop(&mut self) {
        fs::remove_dir_all(&self.0).ok();
    }
}
