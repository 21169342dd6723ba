//! Association edge construction from row fields

use super::error::ParseError;
use super::fields::{optional_int, present};
use crate::graph::AssociationEdge;

/// Raw association fields of one row; `None` for columns a dataset lacks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssociationFields<'a> {
    pub score: Option<&'a str>,
    pub pmid: Option<&'a str>,
    /// `;`-separated origins
    pub sources: Option<&'a str>,
    /// `,`-separated information resources
    pub infores: Option<&'a str>,
    pub qualifier: Option<&'a str>,
}

/// Build an edge; invalid numbers in `score` or `pmid` reject the row.
pub fn build_association(
    predicate: &str,
    fields: &AssociationFields<'_>,
) -> Result<AssociationEdge, ParseError> {
    let score = fields
        .score
        .map(|raw| optional_int("score", raw))
        .transpose()?
        .flatten();
    let pmid = fields
        .pmid
        .map(|raw| optional_int("pmid", raw))
        .transpose()?
        .flatten();

    Ok(AssociationEdge::builder(predicate)
        .score(score)
        .pmid(pmid)
        .sources(fields.sources.and_then(|raw| split_list(raw, ';')))
        .infores(fields.infores.and_then(|raw| split_list(raw, ',')))
        .qualifier(fields.qualifier.and_then(normalize_qualifier))
        .build())
}

/// Split a delimited list into trimmed lowercase tokens; absent text gives `None`.
pub fn split_list(raw: &str, separator: char) -> Option<Vec<String>> {
    present(raw).map(|text| {
        text.split(separator)
            .map(|token| token.trim().to_lowercase())
            .collect()
    })
}

/// Lowercase a qualifier and map "elevated"/"reduced" onto "increase"/"decrease".
pub fn normalize_qualifier(raw: &str) -> Option<String> {
    present(raw).map(|text| {
        text.to_lowercase()
            .replace("elevated", "increase")
            .replace("reduced", "decrease")
    })
}
