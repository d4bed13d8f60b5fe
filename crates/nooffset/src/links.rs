//! Navigation links back into request parameters.

use crate::core::{config::ParamNames, cursor::NavLink, paginate::Direction};

/// Query-string pair carrying `link` under the configured names.
#[must_use]
pub fn param(link: NavLink, names: &ParamNames) -> (&str, String) {
    let name = match link.direction {
        Direction::Forward => names.forward.as_str(),
        Direction::Backward => names.backward.as_str(),
    };

    (name, names.cursor_encoding.encode(link.cursor_id))
}

/// Point `base` at `link`.
///
/// Cursor parameters already in `base` are replaced, so a link built from
/// the current page URL carries exactly one cursor. Other parameters and
/// any fragment are kept.
#[must_use]
pub fn href(base: &str, link: NavLink, names: &ParamNames) -> String {
    let (name, value) = param(link, names);
    let (base, fragment) = base.split_once('#').map_or((base, None), |(b, f)| (b, Some(f)));
    let (path, query) = base.split_once('?').unwrap_or((base, ""));

    let cursor = format!("{name}={value}");
    let mut pairs: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            key != names.forward && key != names.backward
        })
        .collect();
    pairs.push(&cursor);

    let mut out = format!("{path}?{}", pairs.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }

    out
}

///
/// TESTS
///
