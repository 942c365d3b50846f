use crate::error::IOError;

pub mod prelude {
    pub use super::{IOBase, Read, Seek, SeekFrom, SetLen, Write};
}

// Modelled after the Rust Standard Library's IO traits, trimmed down to what formatting a disk image needs

/// The base trait on which [`Read`], [`Write`], [`Seek`] and [`SetLen`] build
/// Mainly used to provide a shared error type
pub trait IOBase {
    /// The error type
    type Error: IOError;
}

/// A simplified version of [`std::io::Read`] for use within a `no_std` context
pub trait Read: IOBase {
    /// Read the exact number of bytes required to fill `buf`.
    ///
    /// Blocks until enough bytes could be read
    ///
    /// Returns an error if EOF is met.
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// A simplified version of `std::io::Write` for use within a `no_std` context
pub trait Write: IOBase {
    /// Write a buffer into this writer with a single call, returning how many bytes were written.
    ///
    /// Unlike `write_all`, this doesn't retry if the storage medium accepts fewer bytes than requested
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error>;

    /// Flush this output stream, ensuring that all intermediately buffered contents reach their destination.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A trimmed copy of the `std::io::SeekFrom` enum for use within a `no_std` context
pub enum SeekFrom {
    /// Sets the offset to the provided number of bytes.
    Start(u64),

    /// Sets the offset to the size of this object plus the specified number of
    /// bytes.
    End(i64),
}

#[cfg(feature = "std")]
impl From<SeekFrom> for std::io::SeekFrom {
    fn from(value: SeekFrom) -> Self {
        match value {
            SeekFrom::Start(offset) => std::io::SeekFrom::Start(offset),
            SeekFrom::End(offset) => std::io::SeekFrom::End(offset),
        }
    }
}

/// A simplified version of `std::io::Seek` for use within a `no_std` context
pub trait Seek: IOBase {
    /// Seek to an offset, in bytes, in a stream.
    ///
    /// If the seek operation completed successfully, this method returns the new position from the start of the stream.
    ///
    /// # Errors
    /// Seeking to a negative offset is considered an error.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error>;

    /// Rewind to the beginning of a stream.
    ///
    /// This is a convenience method, equivalent to `seek(SeekFrom::Start(0))`.
    fn rewind(&mut self) -> Result<(), Self::Error> {
        self.seek(SeekFrom::Start(0))?;

        Ok(())
    }

    /// Returns the length of this stream in bytes, leaving the cursor at its end
    fn stream_len(&mut self) -> Result<u64, Self::Error> {
        self.seek(SeekFrom::End(0))
    }
}

/// Storage media whose length can be changed, such as files
pub trait SetLen: IOBase {
    /// Truncate or extend the storage medium to exactly `size` bytes.
    ///
    /// Any newly added bytes must read back as zeroes.
    fn set_len(&mut self, size: u64) -> Result<(), Self::Error>;
}

#[cfg(feature = "std")]
impl<T> IOBase for T
where
    T: std::io::Read + std::io::Write + std::io::Seek,
{
    type Error = std::io::Error;
}

#[cfg(feature = "std")]
impl<T> Read for T
where
    T: std::io::Read + IOBase<Error = std::io::Error>,
{
    #[inline]
    fn read_exact(&mut self, data: &mut [u8]) -> Result<(), Self::Error> {
        std::io::Read::read_exact(self, data)
    }
}

#[cfg(feature = "std")]
impl<T> Write for T
where
    T: std::io::Write + IOBase<Error = std::io::Error>,
{
    #[inline]
    fn write(&mut self, data: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(self, data)
    }

    #[inline]
    fn flush(&mut self) -> Result<(), Self::Error> {
        std::io::Write::flush(self)
    }
}

#[cfg(feature = "std")]
impl<T> Seek for T
where
    T: std::io::Seek + IOBase<Error = std::io::Error>,
{
    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, Self::Error> {
        std::io::Seek::seek(self, pos.into())
    }

    #[inline]
    fn rewind(&mut self) -> Result<(), Self::Error> {
        std::io::Seek::rewind(self)
    }
}

#[cfg(feature = "std")]
impl SetLen for std::fs::File {
    #[inline]
    fn set_len(&mut self, size: u64) -> Result<(), Self::Error> {
        std::fs::File::set_len(self, size)
    }
}

#[cfg(feature = "std")]
impl SetLen for std::io::Cursor<alloc::vec::Vec<u8>> {
    fn set_len(&mut self, size: u64) -> Result<(), Self::Error> {
        let size = usize::try_from(size).map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "image size doesn't fit in memory",
            )
        })?;
        self.get_mut().resize(size, 0);

        Ok(())
    }
}
