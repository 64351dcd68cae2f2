//! Firmware variable enumeration over the efivarfs layout.
//!
//! efivarfs exposes one file per variable, named `<Name>-<VendorGUID>`.
//! Entries are returned sorted by vendor GUID, then name.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use uuid::Uuid;

static ENTRY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.+)-([0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12})$",
    )
    .unwrap()
});

/// One firmware variable: vendor GUID plus variable name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EfiVariable {
    pub guid: Uuid,
    pub name: String,
}

impl fmt::Display for EfiVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guid, self.name)
    }
}

/// Split an efivarfs file name into its variable name and GUID.
pub fn parse_entry(file_name: &str) -> Option<EfiVariable> {
    let caps = ENTRY_NAME.captures(file_name)?;
    let guid = Uuid::parse_str(&caps[2]).ok()?;
    Some(EfiVariable {
        guid,
        name: caps[1].to_string(),
    })
}

/// Enumerate every variable under `dir`.
///
/// Fails when the directory does not exist. Entries whose names do not
/// parse are logged and skipped.
pub fn enumerate(dir: &Path) -> Result<Vec<EfiVariable>> {
    if !dir.is_dir() {
        bail!("EFI variables not available ({} not found)", dir.display());
    }
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read {}", dir.display()))?;

    let mut vars = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            tracing::warn!("skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };
        match parse_entry(file_name) {
            Some(var) => vars.push(var),
            None => tracing::warn!("skipping unrecognized entry '{file_name}'"),
        }
    }

    vars.sort();
    tracing::debug!("enumerated {} variables from {}", vars.len(), dir.display());
    Ok(vars)
}

/// Listing printed by `epochal vars`.
pub fn render_listing(vars: &[EfiVariable]) -> String {
    let mut out = String::from("EFI Variables:\n");
    for var in vars {
        out.push_str(&format!("{var}\n"));
    }
    out.push_str(&format!("\nTotal: {} variables\n", vars.len()));
    out
}

/// `<guid>:<name>` lines accumulated into one blob for persistence.
pub fn render_blob(vars: &[EfiVariable]) -> String {
    vars.iter().map(|var| format!("{var}\n")).collect()
}
