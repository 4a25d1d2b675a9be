use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("sampling parameter {bits} out of range (this bucket type supports 1..={max})")]
    InvalidSampling { bits: u32, max: u32 },

    #[error("bulk keys must be strictly ascending (violated at position {position})")]
    UnsortedKeys { position: usize },

    #[error("key {key:#x} does not fit the 40-bit index universe")]
    KeyOutOfRange { key: u64 },
}
