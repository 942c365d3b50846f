use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

pub const SECTOR_SIZE: usize = 512;
pub const FLOPPY_SIZE: usize = 1_474_560;

/// The 36-byte boot record of a 1.44MB floppy with 224 root directory entries
#[rustfmt::skip]
pub const FLOPPY_BOOT_RECORD: [u8; 36] = [
    0xEB, 0x3C, 0x90,
    b'M', b'S', b'D', b'O', b'S', b'5', b'.', b'0',
    0x00, 0x02, 0x01, 0x01, 0x00, 0x02, 0xE0, 0x00,
    0x40, 0x0B, 0xF0, 0x09, 0x00, 0x12, 0x00, 0x02, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// A scratch path unique to this test process, removed if it already exists
pub fn scratch_img_path(name: &str) -> PathBuf {
    let mut path_buf = env::temp_dir();
    path_buf.push(format!("fat12-qformat-{}-{}.img", std::process::id(), name));
    let _ = fs::remove_file(&path_buf);
    path_buf
}

/// A full floppy image where every byte of sector `n` past the boot record is `n % 250 + 1`
pub fn populated_floppy() -> Vec<u8> {
    let mut image: Vec<u8> = (0..FLOPPY_SIZE)
        .map(|i| (i / SECTOR_SIZE % 250) as u8 + 1)
        .collect();
    image[..FLOPPY_BOOT_RECORD.len()].copy_from_slice(&FLOPPY_BOOT_RECORD);
    image
}

/// Run the formatter binary with the given arguments
pub fn run_formatter<I, A>(args: I) -> Output
where
    I: IntoIterator<Item = A>,
    A: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_fat12-qformat"))
        .args(args)
        .output()
        .unwrap()
}
