//! Ordered edit plan for a single run.
//!
//! Edits are applied sequentially in a fixed order. When two edits target the
//! same directive the later one replaces the earlier block entirely
//! (last writer wins); values are never merged.

use serde::Deserialize;

use crate::core::document::Document;
use crate::core::error::EditError;
use crate::core::mutator::{Replacement, replace_custom_values, replace_values};

pub const DNS_DATABASE_INFO: &str = "DNSDatabaseInfo";
pub const DATABASE_MIRROR: &str = "DatabaseMirror";
pub const PRIVATE_MIRROR: &str = "PrivateMirror";

/// Replacement values requested by the caller, before planning.
///
/// Also the shape of a TOML edit profile; see [`crate::io::profile`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditRequest {
    /// Single value for `DNSDatabaseInfo`.
    pub dns_database_info: Option<String>,
    /// Values for `DatabaseMirror`.
    pub database_mirror: Vec<String>,
    /// Values for `PrivateMirror`.
    pub private_mirror: Vec<String>,
    /// Free-form `"<name> <value>"` entries.
    pub custom_value: Vec<String>,
}

impl EditRequest {
    /// Fill every field not set in `self` from `fallback`.
    ///
    /// Fields are taken wholesale; lists are not concatenated.
    pub fn or(self, fallback: EditRequest) -> EditRequest {
        fn pick(primary: Vec<String>, fallback: Vec<String>) -> Vec<String> {
            if primary.is_empty() { fallback } else { primary }
        }

        EditRequest {
            dns_database_info: self.dns_database_info.or(fallback.dns_database_info),
            database_mirror: pick(self.database_mirror, fallback.database_mirror),
            private_mirror: pick(self.private_mirror, fallback.private_mirror),
            custom_value: pick(self.custom_value, fallback.custom_value),
        }
    }
}

/// A single planned edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace a named directive with the given values.
    Replace { name: String, values: Vec<String> },
    /// Apply free-form `"<name> <value>"` entries.
    Custom(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan {
    pub edits: Vec<Edit>,
}

impl EditPlan {
    /// Plan `request` in the fixed order: `DNSDatabaseInfo`, `DatabaseMirror`,
    /// `PrivateMirror`, then custom values. Absent and empty requests are
    /// skipped.
    pub fn from_request(request: &EditRequest) -> Self {
        let mut edits = Vec::new();

        if let Some(value) = request.dns_database_info.as_deref().filter(|v| !v.is_empty()) {
            edits.push(Edit::Replace {
                name: DNS_DATABASE_INFO.to_string(),
                values: vec![value.to_string()],
            });
        }
        for (name, values) in [
            (DATABASE_MIRROR, &request.database_mirror),
            (PRIVATE_MIRROR, &request.private_mirror),
        ] {
            if !values.is_empty() {
                edits.push(Edit::Replace {
                    name: name.to_string(),
                    values: values.clone(),
                });
            }
        }
        if !request.custom_value.is_empty() {
            edits.push(Edit::Custom(request.custom_value.clone()));
        }

        Self { edits }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

/// Replacements performed by [`apply_plan`], in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSummary {
    pub replacements: Vec<Replacement>,
}

impl PlanSummary {
    /// Directive names replaced, in application order (repeats kept).
    pub fn names(&self) -> Vec<&str> {
        self.replacements.iter().map(|r| r.name.as_str()).collect()
    }
}

/// Apply every edit of `plan` to `doc`, in order.
///
/// Stops at the first failing edit. The caller must discard `doc` on error.
pub fn apply_plan(doc: &mut Document, plan: &EditPlan) -> Result<PlanSummary, EditError> {
    let mut summary = PlanSummary::default();
    for edit in &plan.edits {
        match edit {
            Edit::Replace { name, values } => {
                summary.replacements.push(replace_values(doc, name, values)?);
            }
            Edit::Custom(entries) => {
                summary
                    .replacements
                    .extend(replace_custom_values(doc, entries)?);
            }
        }
    }
    Ok(summary)
}
