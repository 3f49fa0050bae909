//! Access to the remote movie directory.
//!
//! - [`client`]: builds tagged search and lookup requests from configuration
//! - [`request`]: fetch kinds, generations and the request/response envelopes
//! - [`omdb`]: decodes OMDb JSON bodies into domain types

pub mod client;
pub mod omdb;
pub mod request;

pub use client::{MovieDirectory, DEFAULT_API_URL};
pub use omdb::{decode_detail, decode_search, SearchOutcome};
pub use request::{FetchKind, FetchRequest, FetchResponse, Generation, GenerationCounter, RequestContext};
