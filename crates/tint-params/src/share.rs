//! Shareable links.

use tint_common::types::SlotSet;
use tint_common::{Result, TintError};
use url::Url;

use crate::codec::encode_query;

/// `base` (an absolute http or https URL) with its query replaced by the
/// encoded slots and any fragment removed.
pub fn share_url(base: &str, slots: &SlotSet) -> Result<String> {
    let invalid = |reason: String| TintError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".into()));
    }

    let query = encode_query(slots);
    url.set_query(Some(query.trim_start_matches('?')));
    url.set_fragment(None);
    Ok(url.into())
}
