pub mod client;
pub mod enrich;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod request;
pub mod types;
pub mod walker;

pub use client::{PlacesApi, PlacesClient};
pub use error::PlacesError;
pub use normalize::normalize_record;
pub use pipeline::{run_search, PipelineOptions};
pub use request::{SearchRequest, ValidatedSearch, HARD_CEILING};
pub use types::{Coordinates, EntityDetail, NormalizedRecord, SearchSummary};
