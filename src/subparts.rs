//! Delimiter choice and subpart splitting.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Delimiter {
    Dash,
    Underscore,
}

impl Delimiter {
    pub(crate) fn as_char(self) -> char {
        match self {
            Delimiter::Dash => '-',
            Delimiter::Underscore => '_',
        }
    }
}

pub(crate) fn select_delimiter(name: &str) -> Option<Delimiter> {
    match (name.find('-'), name.find('_')) {
        (None, None) => None,
        (Some(_), None) => Some(Delimiter::Dash),
        (None, Some(_)) => Some(Delimiter::Underscore),
        (Some(dash), Some(underscore)) => {
            if dash < underscore {
                Some(Delimiter::Dash)
            } else {
                Some(Delimiter::Underscore)
            }
        }
    }
}

// empty subparts stay in the sequence; the walk skips them but counts
// their positions
pub(crate) fn split_subparts(name: &str, delimiter: Delimiter, drop_numeric: bool) -> Vec<&str> {
    let mut subparts: Vec<&str> = name.split(delimiter.as_char()).collect();
    // an injected index segment the `_N_` collapse cannot reach
    if drop_numeric && delimiter == Delimiter::Underscore && subparts.len() > 1 {
        let numeric = subparts
            .iter()
            .position(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()));
        if let Some(at) = numeric {
            subparts.remove(at);
        }
    }
    subparts
}
