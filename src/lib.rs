#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod fat12;
pub mod io;
mod utils;

pub use error::*;
pub use fat12::*;
