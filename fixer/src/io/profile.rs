//! Optional TOML edit profile.
//!
//! A profile stores the same replacement requests as the command line so a
//! site's mirror setup can be kept in version control:
//!
//! ```toml
//! dns_database_info = "current.cvd.example.net"
//! database_mirror = ["mirror1.example.net", "mirror2.example.net"]
//! custom_value = ["Checks 12"]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::plan::EditRequest;

/// Load an edit profile. Missing fields default to "no change".
pub fn load_profile(path: &Path) -> Result<EditRequest> {
    debug!(path = %path.display(), "loading edit profile");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read profile {}", path.display()))?;
    let request: EditRequest =
        toml::from_str(&contents).with_context(|| format!("parse profile {}", path.display()))?;
    Ok(request)
}
