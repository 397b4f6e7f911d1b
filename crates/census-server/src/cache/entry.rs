//! Memoized results of upstream calls.

use census_client::UpstreamError;
use census_core::{ErrorPayload, RecordList, Table};
use serde::Serialize;
use tokio::time::Instant;

use crate::cache::keys::CacheKey;

/// `message` of a failed variables call whose request did not complete.
pub const VARIABLES_TRANSPORT_MESSAGE: &str = "unable to query census endpoint for the headers";
/// `message` of a variables call that returned an undecodable body.
pub const VARIABLES_MALFORMED_MESSAGE: &str = "unable to query census endpoint";
/// `message` of any failed dataset call.
pub const DATASET_FAILURE_MESSAGE: &str = "unable to query census dataset endpoint";

/// What a caller gets back: decoded records or the error payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchResult {
    Records(RecordList),
    Failed(ErrorPayload),
}

/// One memoized upstream call.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    result: FetchResult,
    timestamp: Instant,
    errored: bool,
}

impl CacheEntry {
    pub fn new(result: FetchResult, timestamp: Instant, errored: bool) -> Self {
        Self {
            result,
            timestamp,
            errored,
        }
    }

    /// Builds the entry for an upstream outcome.
    ///
    /// A blank body becomes an empty record list that is still flagged
    /// `errored`, so callers see no rows while the next lookup refetches.
    pub fn from_outcome(key: &CacheKey, outcome: Result<Table, UpstreamError>, now: Instant) -> Self {
        match outcome {
            Ok(table) => {
                let records = match key {
                    CacheKey::Variables { .. } => table.into_variable_records(),
                    CacheKey::Dataset { .. } => table.into_records(),
                };
                Self::new(FetchResult::Records(records), now, false)
            },
            Err(UpstreamError::EmptyBody) => Self::new(FetchResult::Records(Vec::new()), now, true),
            Err(error) => {
                let payload = ErrorPayload::new(failure_message(key, &error), error.endpoint_error());
                Self::new(FetchResult::Failed(payload), now, true)
            },
        }
    }

    pub fn result(&self) -> &FetchResult {
        &self.result
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    /// Whether the upstream call behind this entry failed.
    pub fn errored(&self) -> bool {
        self.errored
    }

    /// Records served on success, `None` when the entry holds an error payload.
    pub fn records(&self) -> Option<&RecordList> {
        match &self.result {
            FetchResult::Records(records) => Some(records),
            FetchResult::Failed(_) => None,
        }
    }
}

fn failure_message(key: &CacheKey, error: &UpstreamError) -> &'static str {
    match key {
        CacheKey::Variables { .. } if error.is_transport() => VARIABLES_TRANSPORT_MESSAGE,
        CacheKey::Variables { .. } => VARIABLES_MALFORMED_MESSAGE,
        CacheKey::Dataset { .. } => DATASET_FAILURE_MESSAGE,
    }
}
