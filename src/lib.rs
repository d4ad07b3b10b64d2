pub mod config;
pub mod core;
pub mod error;

pub use config::{load_cipher, CipherConfig, SymbolEntry};
pub use core::decoder::{decode, DecodeFsm};
pub use core::encoder::encode;
pub use core::tables::CipherTables;
pub use error::ConfigError;
