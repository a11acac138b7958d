//! Wikipedia-backed description enrichment.
//!
//! Fetches the REST summary for a place name and clips it to a few
//! sentences. Absence — a missing page, a network failure, an empty
//! extract — must never fail the pipeline, so `describe` degrades to
//! `None` in every unhappy path.

use std::time::Duration;

use log::warn;
use serde::Deserialize;
use thiserror::Error;
use tripweaver_core::DescriptionProvider;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
const DEFAULT_SENTENCES: usize = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while constructing a [`WikipediaDescriber`].
#[derive(Debug, Error)]
pub enum DescriberBuildError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build the HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The summary base URL is not a valid URL.
    #[error("invalid summary base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("summary request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("summary base URL cannot take a path segment")]
    OpaqueBaseUrl,
}

/// A [`DescriptionProvider`] over the Wikipedia REST summary endpoint.
pub struct WikipediaDescriber {
    client: reqwest::blocking::Client,
    base_url: Url,
    sentences: usize,
}

impl WikipediaDescriber {
    /// Build a describer against the public English Wikipedia.
    ///
    /// # Errors
    /// Returns [`DescriberBuildError`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, DescriberBuildError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Build a describer against a custom summary endpoint.
    ///
    /// # Errors
    /// Returns [`DescriberBuildError`] when the URL is invalid or the HTTP
    /// client cannot be constructed.
    pub fn with_base_url(base_url: &str) -> Result<Self, DescriberBuildError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            sentences: DEFAULT_SENTENCES,
        })
    }

    fn fetch(&self, place: &str) -> Result<Option<String>, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::OpaqueBaseUrl)?
            .push(place);

        let response = self.client.get(url).send()?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let summary: SummaryResponse = response.error_for_status()?.json()?;
        Ok(summary
            .extract
            .map(|text| clip_sentences(&text, self.sentences))
            .filter(|text| !text.is_empty()))
    }
}

impl DescriptionProvider for WikipediaDescriber {
    fn describe(&self, place: &str) -> Option<String> {
        match self.fetch(place) {
            Ok(summary) => summary,
            Err(err) => {
                warn!("description lookup for {place:?} failed: {err}");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

/// Keep at most `max` sentences, where a sentence boundary is terminal
/// punctuation followed by whitespace and an uppercase letter. The
/// uppercase requirement keeps abbreviations like "approx. four" intact.
#[expect(
    clippy::string_slice,
    reason = "slice indices come from char_indices boundaries"
)]
fn clip_sentences(text: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let mut seen = 0_usize;
    for (index, ch) in text.char_indices() {
        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }
        let rest = &text[index + ch.len_utf8()..];
        let boundary = rest.starts_with(char::is_whitespace)
            && rest
                .trim_start()
                .chars()
                .next()
                .is_some_and(char::is_uppercase);
        if boundary {
            seen += 1;
            if seen == max {
                return text[..index + ch.len_utf8()].trim_end().to_owned();
            }
        }
    }
    text.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXTRACT: &str = "Washington Square Park is a public park. It sits in \
        Greenwich Village. The arch honours George Washington. Buskers gather daily.";

    #[rstest]
    fn clips_to_the_requested_sentence_count() {
        let clipped = clip_sentences(EXTRACT, 2);
        assert_eq!(
            clipped,
            "Washington Square Park is a public park. It sits in Greenwich Village."
        );
    }

    #[rstest]
    fn shorter_texts_pass_through_whole() {
        let text = "One sentence only.";
        assert_eq!(clip_sentences(text, 3), text);
    }

    #[rstest]
    fn abbreviations_do_not_end_a_sentence() {
        let text = "The tower is approx. three hundred metres tall. It opened in 1889.";
        assert_eq!(
            clip_sentences(text, 1),
            "The tower is approx. three hundred metres tall."
        );
    }

    #[rstest]
    fn zero_sentences_yield_an_empty_string() {
        assert_eq!(clip_sentences(EXTRACT, 0), "");
    }
}
