// Library for the binaries and tests to access modules

pub mod compressor;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;

pub use error::{Error, Result};
