//! Direct research responder
//!
//! Builds a [`ResearchResponse`] for a query without touching the network,
//! a cache or any authentication layer. Records come from a [`ResultSource`];
//! the shipped [`StaticSource`] returns three fixed, query-templated entries.
//!
//! # Usage Patterns
//!
//! ## One-off calls
//! ```
//! let response = suna_research::perform_research("rust async", None);
//! assert!(response.is_direct());
//! assert_eq!(response.results().len(), 3);
//! ```
//!
//! ## Injected source and logger
//! ```
//! use suna_research::research::{ResearchResponder, StaticSource};
//! use suna_research::TargetLogger;
//!
//! let responder = ResearchResponder::new(StaticSource, TargetLogger::new("research"));
//! let response = responder.perform_research("rust async", Some("sess-42"));
//! assert_eq!(response.session_id.as_deref(), Some("sess-42"));
//! ```

mod source;
mod types;

pub use source::{ResultSource, StaticSource};
pub use types::{DirectFlag, ResearchOutcome, ResearchResponse, ResearchResult};

use crate::utils::constants::RESULT_COUNT;
use crate::utils::errors::ResearchError;
use crate::utils::logging::{ResearchLog, TargetLogger};

/// Turns a query into a research response using an injected source and logger
pub struct ResearchResponder {
    source: Box<dyn ResultSource>,
    logger: Box<dyn ResearchLog>,
}

impl ResearchResponder {
    pub fn new(source: impl ResultSource + 'static, logger: impl ResearchLog + 'static) -> Self {
        Self {
            source: Box::new(source),
            logger: Box::new(logger),
        }
    }

    /// Perform research on a query
    ///
    /// Never fails: a fault raised by the source is logged and returned as a
    /// response carrying `error` and an empty `results` list.
    pub fn perform_research(&self, query: &str, session_id: Option<&str>) -> ResearchResponse {
        self.logger.info(&format!("Performing research for query: {query}"));

        let session_id = session_id.map(str::to_string);

        match self.collect(query) {
            Ok(results) => ResearchResponse::direct(query.to_string(), session_id, results),
            Err(e) => {
                self.logger.error(&format!("Error in research function: {e}"));
                ResearchResponse::failed(query.to_string(), session_id, e.to_string())
            }
        }
    }

    fn collect(&self, query: &str) -> Result<Vec<ResearchResult>, ResearchError> {
        let results = self.source.results(query)?;

        if results.len() != RESULT_COUNT {
            return Err(ResearchError::internal(format!(
                "expected {RESULT_COUNT} results, source produced {}",
                results.len()
            )));
        }

        Ok(results)
    }
}

impl Default for ResearchResponder {
    fn default() -> Self {
        Self::new(StaticSource, TargetLogger::default())
    }
}

/// Perform research with the default static source and `research` logger
pub fn perform_research(query: &str, session_id: Option<&str>) -> ResearchResponse {
    ResearchResponder::default().perform_research(query, session_id)
}
