//! Outbound query marshaling: request body and endpoint routing.

use serde::Serialize;

use crate::core::config::Config;
use crate::core::error::RenderError;

/// Model selector value that asks the backend to answer with every compared model.
pub const COMPARE_ALL: &str = "compare-both";

/// Model used when none is selected.
pub const DEFAULT_MODEL: &str = "llama3.1";

/// JSON body posted to `/query` or `/compare`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub model: String,
}

impl QueryRequest {
    /// Build a request from raw input. The query is trimmed and must not be empty.
    pub fn new(query: &str, model: &str) -> Result<Self, RenderError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RenderError::EmptyQuery);
        }
        Ok(Self {
            query: query.to_string(),
            model: model.to_string(),
        })
    }

    pub fn route(&self) -> Route {
        Route::for_model(&self.model)
    }
}

/// Which backend endpoint answers a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Query,
    Compare,
    /// Document re-indexing job; posted without a body.
    ProcessDocs,
}

impl Route {
    pub fn for_model(model: &str) -> Self {
        if model == COMPARE_ALL {
            Route::Compare
        } else {
            Route::Query
        }
    }

    pub fn endpoint<'a>(&self, config: &'a Config) -> &'a str {
        match self {
            Route::Query => &config.query_endpoint,
            Route::Compare => &config.compare_endpoint,
            Route::ProcessDocs => &config.processdocs_endpoint,
        }
    }
}
