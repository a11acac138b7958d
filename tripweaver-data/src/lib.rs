//! Data adapters for the TripWeaver engine.
//!
//! Covers both sides of the data-source boundary: the offline dataset loader
//! that normalises a heterogeneous CSV into the canonical
//! [`PoiTable`](tripweaver_core::PoiTable), and the live HTTP adapters — a
//! text-search [`PoiSource`](tripweaver_core::PoiSource) and a Wikipedia
//! [`DescriptionProvider`](tripweaver_core::DescriptionProvider). The live
//! adapters never surface errors to the pipeline: failures degrade to zero
//! candidates or an absent description, logged through the `log` facade.

#![forbid(unsafe_code)]

pub mod coord;
mod loader;
mod search;
mod wiki;

pub use loader::{LoadError, load_catalog, read_catalog};
pub use search::{HttpPoiSource, SearchBuildError};
pub use wiki::{DescriberBuildError, WikipediaDescriber};
