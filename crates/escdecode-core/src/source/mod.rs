mod analyzer;

pub use analyzer::CsvSampleSource;

use thiserror::Error;

use crate::Sample;

/// Pull interface over captured samples in input order.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Option<Sample>, SourceError>;

    /// Adapt the source into an iterator that stops after the first error.
    fn into_samples(self) -> SampleIter<Self>
    where
        Self: Sized,
    {
        SampleIter {
            source: self,
            done: false,
        }
    }
}

/// Iterator view of a [`SampleSource`].
pub struct SampleIter<S> {
    source: S,
    done: bool,
}

impl<S: SampleSource> Iterator for SampleIter<S> {
    type Item = Result<Sample, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.next_sample() {
            Ok(Some(sample)) => Some(Ok(sample)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV parse error: {0}")]
    Csv(String),
}

impl From<analyzer::error::CsvSourceError> for SourceError {
    fn from(value: analyzer::error::CsvSourceError) -> Self {
        match value {
            analyzer::error::CsvSourceError::Io(err) => SourceError::Io(err),
            analyzer::error::CsvSourceError::Csv { context, message } => {
                SourceError::Csv(format!("{context}: {message}"))
            }
            other => SourceError::Csv(other.to_string()),
        }
    }
}
