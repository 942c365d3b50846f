use bincode::config::{standard as StandardOptions, Config};

#[inline]
// an easy way to universally use the same bincode (de)serialization options
pub(crate) const fn bincode_config() -> impl Config {
    // on-disk structures are fixed-width and little-endian, and arrays carry no length prefix
    StandardOptions()
        .with_fixed_int_encoding()
        .with_no_limit()
        .with_little_endian()
}
