use core::ops::{Deref, DerefMut};

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec};

/// An owned buffer exactly one sector long
#[derive(Debug)]
pub(crate) struct SectorBuffer {
    pub(crate) slice: Box<[u8]>,
}

impl SectorBuffer {
    /// A sector filled with zeroes
    pub(crate) fn zeroed(sector_size: usize) -> Self {
        Self {
            slice: vec![0; sector_size].into_boxed_slice(),
        }
    }
}

impl Deref for SectorBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.slice
    }
}

impl DerefMut for SectorBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slice
    }
}
