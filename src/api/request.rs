//! Request tagging for superseding stale responses.
//!
//! Every outgoing request carries a small context map (fetch kind and a
//! generation number). Zellij hands the same map back with the
//! `WebRequestResult` event, so the stores can tell whether a response still
//! belongs to the most recent request of its kind.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const KIND_KEY: &str = "popcorn_kind";
const GENERATION_KEY: &str = "popcorn_generation";

/// Which of the two independent fetches a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    /// Title search driven by the query.
    Search,
    /// Id lookup driven by the selection.
    Detail,
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Detail => f.write_str("detail"),
        }
    }
}

impl FromStr for FetchKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" => Ok(Self::Search),
            "detail" => Ok(Self::Detail),
            _ => Err(()),
        }
    }
}

/// Monotonically increasing request number, one sequence per [`FetchKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Hands out increasing generations for one fetch kind.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    last: u64,
}

impl GenerationCounter {
    /// Advances the counter and returns the new generation.
    pub fn advance(&mut self) -> Generation {
        self.last += 1;
        Generation(self.last)
    }
}

/// Kind and generation carried through the host alongside a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub kind: FetchKind,
    pub generation: Generation,
}

impl RequestContext {
    #[must_use]
    pub const fn new(kind: FetchKind, generation: Generation) -> Self {
        Self { kind, generation }
    }

    /// Encodes the context into the map passed to `web_request`.
    #[must_use]
    pub fn encode(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(KIND_KEY.to_string(), self.kind.to_string());
        context.insert(GENERATION_KEY.to_string(), self.generation.0.to_string());
        context
    }

    /// Recovers a context from the map returned with a `WebRequestResult`.
    ///
    /// Returns `None` for requests this plugin did not tag.
    #[must_use]
    pub fn decode(context: &BTreeMap<String, String>) -> Option<Self> {
        let kind = context.get(KIND_KEY)?.parse().ok()?;
        let generation = context.get(GENERATION_KEY)?.parse::<u64>().ok()?;
        Some(Self::new(kind, Generation(generation)))
    }
}

/// An outgoing GET request, ready for the plugin runtime to issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub context: RequestContext,
}

/// A completed request as reported back by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub context: RequestContext,
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Whether the host reported a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_issues_strictly_increasing_generations() {
        let mut counter = GenerationCounter::default();
        let first = counter.advance();
        let second = counter.advance();
        assert!(second > first);
        assert_eq!(second, Generation::new(first.value() + 1));
    }

    #[test]
    fn context_survives_the_host_round_trip() {
        let context = RequestContext::new(FetchKind::Detail, Generation::new(42));
        assert_eq!(RequestContext::decode(&context.encode()), Some(context));
    }

    #[test]
    fn foreign_context_is_not_decoded() {
        let mut foreign = BTreeMap::new();
        foreign.insert("popcorn_kind".to_string(), "poster".to_string());
        foreign.insert("popcorn_generation".to_string(), "1".to_string());
        assert_eq!(RequestContext::decode(&foreign), None);
        assert_eq!(RequestContext::decode(&BTreeMap::new()), None);
    }
}
