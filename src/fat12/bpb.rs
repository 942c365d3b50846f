use super::*;

use core::{fmt, ops::RangeInclusive};

use bincode::{Decode, Encode};

use crate::utils::bincode::bincode_config;

/// The BIOS Parameter Block of a FAT12 volume, found at the very beginning of sector 0
///
/// Read verbatim from an existing image (nothing is validated) or built from the
/// 1.44MB floppy defaults through [`Default`]
#[derive(Encode, Decode, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootRecord {
    /// Boot jump instruction, never interpreted
    pub bootjmp: [u8; 3],
    pub oem_id: [u8; 8],
    /// Bytes per sector
    pub sector_size: u16,
    pub sectors_per_cluster: u8,
    /// Sectors before the first FAT, boot sector included
    pub reserved_sector_count: u16,
    pub number_of_fats: u8,
    /// Root directory entry capacity
    pub number_of_dirents: u16,
    // If this is 0, check `sector_count_large`
    pub sector_count: u16,
    pub media_type: u8,
    /// Size of a single FAT, in sectors
    pub fat_size_sectors: u16,
    pub sectors_per_track: u16,
    pub nheads: u16,
    pub sectors_hidden: u32,
    pub sector_count_large: u32,
}

impl Default for BootRecord {
    fn default() -> Self {
        Self {
            bootjmp: INFINITE_LOOP,
            oem_id: DEFAULT_OEM_ID,
            sector_size: DEFAULT_SECTOR_SIZE,
            sectors_per_cluster: DEFAULT_SECTORS_PER_CLUSTER,
            reserved_sector_count: DEFAULT_RESERVED_SECTOR_COUNT,
            number_of_fats: DEFAULT_NUMBER_OF_FATS,
            number_of_dirents: DEFAULT_NUMBER_OF_DIRENTS,
            sector_count: DEFAULT_SECTOR_COUNT,
            media_type: DEFAULT_MEDIA_TYPE,
            fat_size_sectors: DEFAULT_FAT_SIZE_SECTORS,
            sectors_per_track: DEFAULT_SECTORS_PER_TRACK,
            nheads: DEFAULT_NHEADS,
            sectors_hidden: DEFAULT_SECTORS_HIDDEN,
            sector_count_large: DEFAULT_SECTOR_COUNT_LARGE,
        }
    }
}

/// Encoding & decoding
impl BootRecord {
    /// Decode a boot record from the first [`BOOT_RECORD_SIZE`] bytes of `bytes`
    ///
    /// Fails if `bytes` is shorter than that
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::error::DecodeError> {
        let (boot_record, _) = bincode::decode_from_slice(bytes, bincode_config())?;

        Ok(boot_record)
    }

    /// Encode this boot record into its on-disk representation
    pub fn to_bytes(&self) -> Result<[u8; BOOT_RECORD_SIZE], bincode::error::EncodeError> {
        let mut bytes = [0; BOOT_RECORD_SIZE];
        bincode::encode_into_slice(*self, &mut bytes, bincode_config())?;

        Ok(bytes)
    }

    /// Encode this boot record into a zero-padded sector of `sector_size` bytes
    pub(crate) fn to_sector(
        &self,
        sector_size: usize,
    ) -> Result<SectorBuffer, bincode::error::EncodeError> {
        let mut sector = SectorBuffer::zeroed(sector_size);
        bincode::encode_into_slice(*self, &mut sector, bincode_config())?;

        Ok(sector)
    }
}

/// Geometry calculations
impl BootRecord {
    #[inline]
    /// Total sectors in the image (including the boot sector)
    pub fn total_sectors(&self) -> u32 {
        if self.sector_count == 0 {
            self.sector_count_large
        } else {
            self.sector_count.into()
        }
    }

    #[inline]
    /// The size of the whole image in bytes
    pub fn image_size(&self) -> u64 {
        u64::from(self.sector_size) * u64::from(self.total_sectors())
    }

    #[inline]
    /// The number of sectors taken up by all FAT copies together
    pub fn fat_sectors(&self) -> u32 {
        u32::from(self.number_of_fats) * u32::from(self.fat_size_sectors)
    }

    #[inline]
    /// The size of the root directory in sectors
    ///
    /// This calculation rounds down. Returns [`None`] if the sector size is zero
    pub fn root_dir_sectors(&self) -> Option<u32> {
        (u32::from(self.number_of_dirents) * DIRENTRY_SIZE).checked_div(self.sector_size.into())
    }

    /// The sectors a quick format overwrites with zeroes
    ///
    /// Starts right after the reserved sectors. The upper bound is inclusive,
    /// so the first sector after the root directory is part of the range too
    pub fn quick_format_sectors(&self) -> Option<RangeInclusive<u32>> {
        self.root_dir_sectors()
            .map(|root_dir_sectors| self.metadata_sectors(root_dir_sectors))
    }

    #[inline]
    /// The reserved sectors are followed by the FATs, then by `root_dir_sectors` of root directory
    pub(crate) fn metadata_sectors(&self, root_dir_sectors: u32) -> RangeInclusive<u32> {
        let first = u32::from(self.reserved_sector_count);

        first..=first + self.fat_sectors() + root_dir_sectors
    }

    #[inline]
    /// Render the geometry fields an operator cares about, one per line
    pub fn summary(&self) -> Summary<'_> {
        Summary(self)
    }
}

/// A printable summary of a [`BootRecord`], see [`BootRecord::summary`]
#[derive(Debug)]
pub struct Summary<'a>(&'a BootRecord);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let boot_record = self.0;

        writeln!(f, "sector_size: {}", boot_record.sector_size)?;
        writeln!(f, "sectors_per_cluster: {}", boot_record.sectors_per_cluster)?;
        writeln!(f, "number_of_fats: {}", boot_record.number_of_fats)?;
        writeln!(f, "fat_size_sectors: {}", boot_record.fat_size_sectors)?;
        writeln!(f, "number_of_dirents: {}", boot_record.number_of_dirents)?;
        writeln!(f, "sector_count: {}", boot_record.sector_count)
    }
}
