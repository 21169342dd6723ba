//! Free-text annotation splitting
//!
//! Annotations read either `description` or `description [reference]`.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Description and reference parsed from one annotation field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub description: Option<String>,
    pub reference: Option<String>,
}

fn trailing_reference() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(.+?)\s*\[(.+)\]\n?$").expect("annotation pattern is valid"))
}

/// Split an annotation into description and trailing bracketed reference.
///
/// Text containing `[` that does not end in a `[reference]` yields neither
/// field.
pub fn split_annotation(text: &str) -> Annotation {
    if !text.contains('[') {
        return Annotation {
            description: Some(text.trim().to_string()),
            reference: None,
        };
    }

    match trailing_reference().captures(text) {
        Some(caps) => Annotation {
            description: caps.get(1).map(|m| m.as_str().trim().to_string()),
            reference: caps.get(2).map(|m| m.as_str().trim().to_string()),
        },
        None => {
            tracing::trace!(text, "annotation has a bracket but no trailing reference");
            Annotation::default()
        }
    }
}
