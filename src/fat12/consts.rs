/// The size (in bytes) of the encoded boot record
pub const BOOT_RECORD_SIZE: usize = 36;
/// The size (in bytes) of a single root directory entry
pub const DIRENTRY_SIZE: u32 = 32;
/// The sector the boot record lives in
pub const BOOT_SECTOR: u32 = 0;

/// Place this in the `bootjmp` field to hang if a computer attempts to boot this image
/// The first two bytes jump to 0 on all bit modes and the third byte is just a NOP
pub const INFINITE_LOOP: [u8; 3] = [0xEB, 0xFE, 0x90];

// 3.5" 1.44MB high density floppy
pub const DEFAULT_OEM_ID: [u8; 8] = *b"MSWIN4.1";
pub const DEFAULT_SECTOR_SIZE: u16 = 512;
pub const DEFAULT_SECTORS_PER_CLUSTER: u8 = 1;
pub const DEFAULT_RESERVED_SECTOR_COUNT: u16 = 1;
pub const DEFAULT_NUMBER_OF_FATS: u8 = 2;
pub const DEFAULT_NUMBER_OF_DIRENTS: u16 = 224;
pub const DEFAULT_SECTOR_COUNT: u16 = 2880;
pub const DEFAULT_MEDIA_TYPE: u8 = 0xF0;
pub const DEFAULT_FAT_SIZE_SECTORS: u16 = 9;
pub const DEFAULT_SECTORS_PER_TRACK: u16 = 18;
pub const DEFAULT_NHEADS: u16 = 2;
pub const DEFAULT_SECTORS_HIDDEN: u32 = 0;
pub const DEFAULT_SECTOR_COUNT_LARGE: u32 = 0;
