//! Request parameters into typed pagination options.
//!
//! Parameter names come from `ParamNames`, so a host can keep its existing
//! query-string vocabulary. Empty values count as absent and the last
//! occurrence of a repeated name wins.

use crate::core::{
    config::ParamNames,
    error::RequestError,
    paginate::PaginationOptions,
    types::{PageSize, is_valid_field_name},
};

/// Extract pagination options from query-string pairs.
///
/// A cursor that does not decode is dropped, so the request renders the
/// first page. An invalid page size, sort order, or sort field is rejected.
pub fn extract<I, K, V>(pairs: I, names: &ParamNames) -> Result<PaginationOptions, RequestError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut options = PaginationOptions::new();

    for (name, value) in pairs {
        let (name, value) = (name.as_ref(), value.as_ref().trim());
        if value.is_empty() {
            continue;
        }

        if name == names.forward {
            options.cursor_forward = names.cursor_encoding.decode(value);
        } else if name == names.backward {
            options.cursor_backward = names.cursor_encoding.decode(value);
        } else if name == names.page_size {
            options.page_size = Some(parse_page_size(value)?);
        } else if name == names.sort_field {
            if !is_valid_field_name(value) {
                return Err(RequestError::InvalidFieldName {
                    field: value.to_string(),
                });
            }
            options.sort_field = Some(value.to_string());
        } else if name == names.sort_order {
            options.sort_order = Some(value.parse()?);
        }
    }

    Ok(options)
}

// Unparseable input is reported as zero.
fn parse_page_size(raw: &str) -> Result<PageSize, RequestError> {
    let value = raw
        .parse::<i64>()
        .map_err(|_| RequestError::InvalidPageSize { value: 0 })?;

    PageSize::try_from(value)
}

///
/// TESTS
///
