#[cfg(not(feature = "std"))]
use core::*;
#[cfg(feature = "std")]
use std::*;

/// Base error type
///
/// To be replaced with [`core::error`] when feature [`error_in_core`](https://github.com/rust-lang/rust/issues/103765) gets pushed to `stable`
pub trait Error: fmt::Debug + fmt::Display {}

#[cfg(feature = "std")]
impl Error for std::io::Error {}

/// Base IO error type
pub trait IOError: Error {
    /// The type of the kind of this [`IOError`]
    type Kind: IOErrorKind;

    /// Get the kind of this [`IOError`]
    fn kind(&self) -> Self::Kind;
}

#[cfg(feature = "std")]
impl IOError for std::io::Error {
    type Kind = std::io::ErrorKind;

    #[inline]
    fn kind(&self) -> Self::Kind {
        self.kind()
    }
}

/// The kind of an [`IOError`]
pub trait IOErrorKind: PartialEq + Sized {
    /// Create a new `UnexpectedEOF` [`IOErrorKind`]
    fn new_unexpected_eof() -> Self;

    #[inline]
    /// Check whether this [`IOErrorKind`] is of kind `UnexpectedEOF`
    fn is_unexpected_eof(&self) -> bool {
        self == &Self::new_unexpected_eof()
    }
}

#[cfg(feature = "std")]
impl IOErrorKind for std::io::ErrorKind {
    #[inline]
    fn new_unexpected_eof() -> Self {
        std::io::ErrorKind::UnexpectedEof
    }
}

/// An error indicating that creating or quick-formatting an image has failed
#[derive(Debug, displaydoc::Display)]
pub enum FormatError<I>
where
    I: IOError,
{
    /// The image is too small to contain a boot record
    ImageTooSmall,
    /// Invalid sector size {0} in the boot record
    InvalidSectorSize(u16),
    /// Seek landed at offset {found} instead of {expected}
    UnexpectedOffset {
        /// The offset we asked for
        expected: u64,
        /// The offset the storage medium reported
        found: u64,
    },
    /// Wrote {written} out of {expected} bytes of a sector
    ShortWrite {
        /// The sector size
        expected: usize,
        /// How many bytes the storage medium accepted
        written: usize,
    },
    /**
     [`bincode`] errored out while encoding the boot record

     This error variant should NEVER be raised.
    */
    #[displaydoc("Failed to encode the boot record: {0}")]
    BincodeEncode(bincode::error::EncodeError),
    /// Failed to decode the boot record: {0}
    BincodeDecode(bincode::error::DecodeError),
    /// An IO error occured
    #[displaydoc("An IO error occured: {0}")]
    IOError(I),
}

impl<I> From<I> for FormatError<I>
where
    I: IOError,
{
    #[inline]
    fn from(value: I) -> Self {
        FormatError::IOError(value)
    }
}

impl<I> From<bincode::error::EncodeError> for FormatError<I>
where
    I: IOError,
{
    #[inline]
    fn from(value: bincode::error::EncodeError) -> Self {
        FormatError::BincodeEncode(value)
    }
}

impl<I> From<bincode::error::DecodeError> for FormatError<I>
where
    I: IOError,
{
    #[inline]
    fn from(value: bincode::error::DecodeError) -> Self {
        FormatError::BincodeDecode(value)
    }
}

impl<I> Error for FormatError<I> where I: IOError {}

/// An alias for a [`Result`] with a [`FormatError`] error type
pub type FormatResult<T, E> = Result<T, FormatError<E>>;
