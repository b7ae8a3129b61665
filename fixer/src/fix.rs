//! Orchestration for a single parse, edit and write cycle.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::plan::{EditPlan, EditRequest, PlanSummary, apply_plan};
use crate::core::serializer::render;
use crate::io::conf_file::{read_document, write_document};

/// Inputs for [`run_fix`].
#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Source configuration file.
    pub config: PathBuf,
    /// Destination file; defaults to `config`.
    pub result: Option<PathBuf>,
    /// Render without writing.
    pub dry_run: bool,
    pub request: EditRequest,
}

impl FixOptions {
    pub fn destination(&self) -> &PathBuf {
        self.result.as_ref().unwrap_or(&self.config)
    }
}

/// Outcome of [`run_fix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub destination: PathBuf,
    /// Rendered configuration text.
    pub rendered: String,
    pub summary: PlanSummary,
    /// False for a dry run.
    pub written: bool,
}

/// Read the source config, apply the request and write the destination.
///
/// The document is fully edited in memory first; any failure returns before
/// the destination is touched.
pub fn run_fix(options: &FixOptions) -> Result<FixOutcome> {
    let mut doc = read_document(&options.config)?;
    let plan = EditPlan::from_request(&options.request);
    let summary = apply_plan(&mut doc, &plan)
        .with_context(|| format!("edit {}", options.config.display()))?;

    for replacement in &summary.replacements {
        info!(
            name = %replacement.name,
            removed = replacement.removed,
            values = ?doc.values(&replacement.name),
            "directive replaced"
        );
    }

    let destination = options.destination().clone();
    let written = !options.dry_run;
    if written {
        write_document(&destination, &doc)?;
        info!(path = %destination.display(), edits = plan.edits.len(), "config written");
    }

    Ok(FixOutcome {
        destination,
        rendered: render(&doc),
        summary,
        written,
    })
}
