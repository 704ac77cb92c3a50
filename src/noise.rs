//! Noise in archive file names: injected index segments and the distro or
//! build-tool tags that get glued onto versions.

use std::borrow::Cow;

use lazy_regex::{regex, regex_is_match};

/// Noise substrings stripped from version-bearing subparts, in the order
/// they are tried. Each entry found in the current text truncates it at
/// that entry's first occurrence, and later entries see the truncated
/// text.
pub const NOISE_TOKENS: &[&str] = &[
    "ubuntu",
    "+dfsg",
    ".dfsg",
    "+deb",
    "+nmu",
    "+git",
    "~",
    "+",
    ".stx",
    ".tar.gz",
    ".tar.bz2",
    ".tar.xz",
    ".zip",
];

pub(crate) fn has_digits(s: &str) -> bool {
    regex_is_match!(r"\d", s)
}

// whole runs go at once; a_1_1_b collapses to a_b in a single pass
pub(crate) fn collapse_index_segments(name: &str) -> Cow<'_, str> {
    regex!(r"_([0-9]*_)+").replace_all(name, "_")
}

pub(crate) fn strip_noise(subpart: &str) -> &str {
    let mut stripped = subpart;
    for token in NOISE_TOKENS {
        if let Some(at) = stripped.find(token) {
            stripped = &stripped[..at];
        }
    }
    stripped
}
