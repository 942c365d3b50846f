mod bpb;
mod consts;
mod image;
mod storage;

pub use bpb::*;
pub use consts::*;
pub use image::*;
use storage::*;
