use super::*;

use core::ops::RangeInclusive;

use crate::{error::*, io::prelude::*};

/// What [`FloppyImage::open_or_create`] ended up doing to the storage medium
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The storage medium was empty, a new image was created
    Created,
    /// An existing image was quick-formatted. Holds the sectors that were zeroed
    QuickFormatted(RangeInclusive<u32>),
}

/// A FAT12 floppy image backed by some storage medium
///
/// The storage medium is owned by this struct for as long as it lives
#[derive(Debug)]
pub struct FloppyImage<S>
where
    S: Read + Write + Seek,
{
    /// Any struct that implements the [`Read`], [`Write`] & [`Seek`] traits
    storage: S,

    boot_record: BootRecord,
}

/// Getter functions
impl<S> FloppyImage<S>
where
    S: Read + Write + Seek,
{
    /// The [`BootRecord`] this image was created with or read from
    #[inline]
    pub fn boot_record(&self) -> &BootRecord {
        &self.boot_record
    }

    /// Give back the underlying storage medium
    #[inline]
    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Constructors
impl<S> FloppyImage<S>
where
    S: Read + Write + Seek,
{
    /// Read the [`BootRecord`] at the beginning of an existing image
    ///
    /// The boot record isn't validated in any way. Fails if the storage medium
    /// is too small to even contain one
    pub fn open(mut storage: S) -> FormatResult<Self, S::Error> {
        let mut buffer = [0_u8; BOOT_RECORD_SIZE];

        storage.rewind()?;
        match storage.read_exact(&mut buffer) {
            Ok(()) => (),
            Err(e) if e.kind().is_unexpected_eof() => {
                log::error!(
                    "image is smaller than a boot record ({} bytes)",
                    BOOT_RECORD_SIZE
                );
                return Err(FormatError::ImageTooSmall);
            }
            Err(e) => return Err(e.into()),
        }

        let boot_record = BootRecord::from_bytes(&buffer)?;
        log::debug!("read boot record: {:?}", boot_record);

        Ok(Self {
            storage,
            boot_record,
        })
    }

    /// Create a brand new image on `storage`
    ///
    /// The storage medium is resized to [`BootRecord::image_size`] bytes and
    /// `boot_record` is written to the boot sector. Everything else reads as zeroes
    pub fn create(mut storage: S, boot_record: BootRecord) -> FormatResult<Self, S::Error>
    where
        S: SetLen,
    {
        if usize::from(boot_record.sector_size) < BOOT_RECORD_SIZE {
            log::error!(
                "a {} byte sector can't hold the boot record",
                boot_record.sector_size
            );
            return Err(FormatError::InvalidSectorSize(boot_record.sector_size));
        }

        let image_size = boot_record.image_size();
        log::info!(
            "creating a new {} byte image ({} sectors of {} bytes)",
            image_size,
            boot_record.total_sectors(),
            boot_record.sector_size
        );
        storage.set_len(image_size)?;

        let mut image = Self {
            storage,
            boot_record,
        };

        let boot_sector = boot_record.to_sector(boot_record.sector_size.into())?;
        image.write_nth_sector(BOOT_SECTOR, &boot_sector)?;
        image.storage.flush()?;

        Ok(image)
    }

    /// Create a new image if `storage` is empty, otherwise quick-format the existing one
    ///
    /// New images get the [`Default`] [`BootRecord`]
    pub fn open_or_create(mut storage: S) -> FormatResult<(Self, Action), S::Error>
    where
        S: SetLen,
    {
        let len = storage.stream_len()?;
        log::debug!("storage medium is {} bytes long", len);

        if len == 0 {
            let image = Self::create(storage, BootRecord::default())?;

            Ok((image, Action::Created))
        } else {
            let mut image = Self::open(storage)?;
            let sectors = image.quick_format()?;

            Ok((image, Action::QuickFormatted(sectors)))
        }
    }
}

/// Formatting
impl<S> FloppyImage<S>
where
    S: Read + Write + Seek,
{
    /// Fill the FAT tables and the root directory with zeroes, leaving everything else untouched
    ///
    /// Neither the FAT entries nor the directory entries are checked beforehand,
    /// and the data region isn't wiped, so file contents may still be recoverable.
    /// The range is inclusive of its last sector, which is the first sector of the data region
    ///
    /// Returns the range of sectors that were zeroed
    pub fn quick_format(&mut self) -> FormatResult<RangeInclusive<u32>, S::Error> {
        let Some(root_dir_sectors) = self.boot_record.root_dir_sectors() else {
            log::error!("boot record has a sector size of 0");
            return Err(FormatError::InvalidSectorSize(self.boot_record.sector_size));
        };
        let sectors = self.boot_record.metadata_sectors(root_dir_sectors);

        log::debug!(
            "FAT region: {} sectors, root directory: {} sectors",
            self.boot_record.fat_sectors(),
            root_dir_sectors
        );
        log::info!(
            "zeroing sectors {} through {}",
            sectors.start(),
            sectors.end()
        );

        let zeroed_sector = SectorBuffer::zeroed(self.boot_record.sector_size.into());
        for n in sectors.clone() {
            self.write_nth_sector(n, &zeroed_sector)?;
        }
        self.storage.flush()?;

        Ok(sectors)
    }
}

/// Internal [`Write`]-related low-level functions
impl<S> FloppyImage<S>
where
    S: Read + Write + Seek,
{
    /// Write `buffer` at the beginning of the `n`th sector of the image
    ///
    /// Errors out if the storage medium doesn't land exactly where we asked it to,
    /// or if it doesn't accept the whole sector in one go
    pub(crate) fn write_nth_sector(
        &mut self,
        n: u32,
        buffer: &SectorBuffer,
    ) -> FormatResult<(), S::Error> {
        let sector_size = u64::from(self.boot_record.sector_size);
        let expected = u64::from(n) * sector_size;

        let found = self.storage.seek(SeekFrom::Start(expected))?;
        if found != expected {
            log::error!("seek to sector {} landed at offset {}", n, found);
            return Err(FormatError::UnexpectedOffset { expected, found });
        }

        let written = self.storage.write(buffer)?;
        if written != buffer.len() {
            log::error!(
                "sector {} was only partially written ({} bytes)",
                n,
                written
            );
            return Err(FormatError::ShortWrite {
                expected: buffer.len(),
                written,
            });
        }

        log::trace!("wrote sector {}", n);

        Ok(())
    }
}
