//! Result sources the responder draws its records from

use super::types::ResearchResult;
use crate::utils::errors::ResearchError;

/// Produces the ranked records for a query
///
/// Any fault a source raises is captured by the responder and surfaced in the
/// response's `error` field; it never propagates to the caller.
pub trait ResultSource {
    fn results(&self, query: &str) -> Result<Vec<ResearchResult>, ResearchError>;
}

/// Fixed three-record result set with the query interpolated into each title
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSource;

struct Template {
    title_prefix: &'static str,
    snippet: &'static str,
    link: &'static str,
    display_link: &'static str,
}

const TEMPLATES: [Template; 3] = [
    Template {
        title_prefix: "Research result for: ",
        snippet: "This is a direct implementation result from the Suna research.py module.",
        link: "https://example.com/result1",
        display_link: "example.com/result1",
    },
    Template {
        title_prefix: "How to ",
        snippet: "Step-by-step guide on how to accomplish this task effectively.",
        link: "https://example.com/result2",
        display_link: "example.com/result2",
    },
    Template {
        title_prefix: "Best practices for ",
        snippet: "Learn the industry best practices and expert recommendations.",
        link: "https://example.com/result3",
        display_link: "example.com/result3",
    },
];

impl ResultSource for StaticSource {
    fn results(&self, query: &str) -> Result<Vec<ResearchResult>, ResearchError> {
        TEMPLATES
            .iter()
            .zip(1u32..)
            .map(|(template, position)| {
                Ok(ResearchResult {
                    title: format!("{}{query}", template.title_prefix),
                    snippet: template.snippet.to_string(),
                    link: template.link.to_string(),
                    display_link: template.display_link.to_string(),
                    position,
                })
            })
            .collect()
    }
}
