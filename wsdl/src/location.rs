use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;
use url::Url;

use super::error;

/// Turns an absolute URL or a filesystem path into a URL.
pub fn to_url(location: &str) -> Result<Url, error::Error> {
    match Url::parse(location) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let path = Path::new(location)
                .canonicalize()
                .map_err(|err| error::Error::PathConversionError(Some(err)))?;

            Url::from_file_path(&path).map_err(|()| error::Error::PathConversionError(None))
        }
        Err(err) => Err(err.into()),
    }
}

/// Opens the document at `url` for reading.
pub fn open(url: &Url) -> Result<Box<dyn BufRead>, error::Error> {
    debug!("opening {}", url);

    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| error::Error::PathConversionError(None))?;
            let file = File::open(path).map_err(error::Error::FileOpenError)?;

            Ok(Box::new(BufReader::new(file)))
        }

        "http" | "https" => {
            let response = reqwest::blocking::get(url.clone())?.error_for_status()?;
            Ok(Box::new(BufReader::new(response)))
        }

        other => Err(error::Error::UnsupportedScheme(other.into())),
    }
}

/// Resolves an import's `location` against the URL of the document that
/// declared it.
pub fn resolve(base: &Url, reference: &str) -> Result<Url, error::Error> {
    Ok(base.join(reference)?)
}
