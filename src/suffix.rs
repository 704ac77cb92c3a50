//! Dotted suffix chains for undelimited names. A name with no delimiter,
//! like `velero.1.2.zip`, only has its chained extensions to go by.

use log::debug;

use crate::noise::has_digits;

// a trailing dot disables the chain and leading dots never start a suffix
pub(crate) fn suffix_starts(name: &str) -> Vec<usize> {
    if name.ends_with('.') {
        return Vec::new();
    }
    let body_start = name.len() - name.trim_start_matches('.').len();
    name[body_start..]
        .match_indices('.')
        .map(|(at, _)| body_start + at)
        .collect()
}

/// Decide name and version for a lone subpart from its suffix chain.
pub(crate) fn split_suffix_chain(subpart: &str) -> (String, Option<String>) {
    let starts = suffix_starts(subpart);
    let suffix = |i: usize| {
        let end = starts.get(i + 1).copied().unwrap_or(subpart.len());
        &subpart[starts[i]..end]
    };
    match starts.len() {
        0 => (subpart.to_string(), None),
        1 => (subpart[..starts[0]].to_string(), None),
        // the last two suffixes are the compression pair; digit-bearing
        // suffixes right before them form the version
        n if (0..n).any(|i| suffix(i) == ".tar") => {
            let pair = n - 2;
            let mut run = pair;
            while run > 0 && has_digits(suffix(run - 1)) {
                run -= 1;
            }
            let name = subpart[..starts[run]].to_string();
            if run == pair {
                debug!("nothing but the compression pair behind {:?}", subpart);
                (name, None)
            } else {
                // the run is contiguous; drop its leading dot
                let version = subpart[starts[run] + 1..starts[pair]].to_string();
                (name, Some(version))
            }
        }
        // without .tar the trailing suffix is the only extension and the
        // rest is the version
        n => {
            let name = subpart[..starts[0]].to_string();
            let version = subpart[starts[0] + 1..starts[n - 1]].to_string();
            (name, Some(version).filter(|v| !v.is_empty()))
        }
    }
}
