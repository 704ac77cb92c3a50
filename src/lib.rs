//! Best-effort extraction of a package name and version from an archive
//! file name.
//!
//! Archive names carry their metadata in loosely conventional shapes:
//! `WebTest-2.0.35.tar.gz`, `curl_7.74.0-1.3_deb11u3.tar.gz`,
//! `velero.1.2.zip`. The heuristic here lowercases the name, picks a
//! delimiter, walks the delimited subparts until one of them reads as a
//! version, and strips distro and build-tool noise from it. The result is
//! advisory: callers get `None` when the name has no usable structure, and
//! a `version` of `None` when only a name could be read.
//!
//! ```
//! use pkg_filename::extract_name_version;
//!
//! let nv = extract_name_version("WebTest-2.0.35.tar.gz").unwrap();
//! assert_eq!(nv.name, "webtest");
//! assert_eq!(nv.version.as_deref(), Some("2.0.35"));
//! ```

mod noise;
mod subparts;
mod suffix;

pub use crate::noise::NOISE_TOKENS;

use std::borrow::Cow;

use log::debug;

use crate::subparts::Delimiter;

/// A package name and optional version extracted from a file name.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NameVersion {
    pub name: String,
    pub version: Option<String>,
}

impl std::fmt::Display for NameVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => f.write_str(&self.name),
        }
    }
}

/// Toggles for historically divergent behavior. Two generations of this
/// heuristic disagreed on two points; both live on here as settings, and
/// the defaults enable the union.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseSettings {
    /// Route names without any `-` or `_` through the dotted suffix chain
    /// instead of rejecting them.
    pub suffix_fallback: bool,
    /// In underscore-delimited names left untouched by the `_N_` collapse,
    /// drop the first all-numeric subpart, an injected index segment.
    pub drop_numeric_subpart: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            suffix_fallback: true,
            drop_numeric_subpart: true,
        }
    }
}

/// Extract a package name and version from an archive file name, with
/// default settings.
pub fn extract_name_version(file_name: &str) -> Option<NameVersion> {
    extract_name_version_with(file_name, &ParseSettings::default())
}

/// Extract a package name and version from an archive file name.
///
/// The name is lowercased before analysis, so the result is lowercase too.
/// Returns `None` when the file name has no recognizable structure.
pub fn extract_name_version_with(
    file_name: &str,
    settings: &ParseSettings,
) -> Option<NameVersion> {
    if file_name.is_empty() {
        return None;
    }
    let lowered = file_name.to_lowercase();
    let normalized = noise::collapse_index_segments(&lowered);
    // at most one index segment goes per parse; a collapse that took one
    // turns the numeric-subpart drop off
    let drop_numeric = settings.drop_numeric_subpart && matches!(normalized, Cow::Borrowed(_));
    let delimiter = subparts::select_delimiter(&normalized);
    let tokens: Vec<&str> = match delimiter {
        Some(delimiter) => subparts::split_subparts(&normalized, delimiter, drop_numeric),
        None if settings.suffix_fallback => vec![normalized.as_ref()],
        None => {
            debug!("no delimiter in {:?}", file_name);
            return None;
        }
    };
    let (name, version) = if let [subpart] = tokens.as_slice() {
        debug!(
            "single subpart {:?}, falling back to the suffix chain",
            subpart
        );
        suffix::split_suffix_chain(subpart)
    } else {
        walk_subparts(&tokens)
    };
    let (name, version) = repair_underscored_version(name, version, delimiter);
    if name.is_empty() && version.is_none() {
        return None;
    }
    Some(NameVersion { name, version })
}

enum SubpartWalk {
    AccumulatingName,
    FoundBoundary { version: Option<String> },
}

/// Grow the name subpart by subpart until one reads as a version.
fn walk_subparts(tokens: &[&str]) -> (String, Option<String>) {
    let last = tokens.len() - 1;
    let mut name_parts: Vec<&str> = Vec::new();
    let mut state = SubpartWalk::AccumulatingName;
    for (position, &subpart) in tokens.iter().enumerate() {
        if subpart.is_empty() {
            continue;
        }
        if name_parts.is_empty() {
            name_parts.push(subpart);
            continue;
        }
        let version_bearing =
            subpart.contains('.') || subpart.starts_with(|c: char| c.is_ascii_digit());
        if !version_bearing {
            name_parts.push(subpart);
            continue;
        }
        let stripped = noise::strip_noise(subpart);
        // digit-free and final: a trailing qualifier, not a version
        if position == last && !noise::has_digits(stripped) {
            name_parts.push(stripped);
            state = SubpartWalk::FoundBoundary { version: None };
        } else {
            state = SubpartWalk::FoundBoundary {
                version: Some(stripped.to_string()).filter(|v| !v.is_empty()),
            };
        }
        break;
    }
    let version = match state {
        SubpartWalk::AccumulatingName => None,
        SubpartWalk::FoundBoundary { version } => version,
    };
    (name_parts.join("-"), version)
}

/// Dash-delimited names keep underscores inside their subparts, so a
/// version like `helpers_1.60` can still open with a name fragment.
fn repair_underscored_version(
    name: String,
    version: Option<String>,
    delimiter: Option<Delimiter>,
) -> (String, Option<String>) {
    if delimiter != Some(Delimiter::Dash) {
        return (name, version);
    }
    match version {
        Some(version) => match version.split_once('_') {
            Some((fragment, rest)) => (
                format!("{}-{}", name, fragment),
                Some(rest.to_string()).filter(|v| !v.is_empty()),
            ),
            None => (name, Some(version)),
        },
        None => (name, None),
    }
}
