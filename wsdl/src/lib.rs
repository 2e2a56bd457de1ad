//! Decodes WSDL 1.1 documents and their embedded XML Schema into a typed
//! [`Document`](types::Document).
//!
//! The model is a lossy projection: elements and attributes it has no
//! field for are skipped. Imports are recorded but never followed.

use std::io::BufRead;

mod parser;

pub mod error;
pub mod location;
pub mod options;
pub mod resolver;
pub mod types;

pub use error::{Error, ErrorKind};
pub use options::{DecodeOptions, MissingRefPolicy};
pub use types::Document;

pub fn from_reader<R: BufRead>(reader: R) -> Result<Document, Error> {
    from_reader_with_options(reader, &DecodeOptions::default())
}

pub fn from_reader_with_options<R: BufRead>(
    reader: R,
    options: &DecodeOptions,
) -> Result<Document, Error> {
    parser::parse(reader, options)
}

pub fn from_slice(bytes: &[u8]) -> Result<Document, Error> {
    from_reader(bytes)
}

pub fn from_slice_with_options(bytes: &[u8], options: &DecodeOptions) -> Result<Document, Error> {
    from_reader_with_options(bytes, options)
}

pub fn from_str(input: &str) -> Result<Document, Error> {
    from_slice(input.as_bytes())
}

pub fn from_str_with_options(input: &str, options: &DecodeOptions) -> Result<Document, Error> {
    from_slice_with_options(input.as_bytes(), options)
}

/// Decodes the document at `location`, an absolute URL or a filesystem
/// path. `file`, `http` and `https` URLs are supported.
pub fn parse<S: AsRef<str>>(location: S) -> Result<Document, Error> {
    parse_with_options(location, &DecodeOptions::default())
}

pub fn parse_with_options<S: AsRef<str>>(
    location: S,
    options: &DecodeOptions,
) -> Result<Document, Error> {
    let url = location::to_url(location.as_ref())?;
    from_reader_with_options(location::open(&url)?, options)
}
