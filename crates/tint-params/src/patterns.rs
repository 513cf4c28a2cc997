use regex::Regex;
use std::sync::LazyLock;

/// Exactly 3 or 6 hex digits, no `#`.
pub(crate) static PARAM_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Legacy bare `r,g,b` triple.
pub(crate) static RGB_TRIPLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3},\s*\d{1,3},\s*\d{1,3}$").unwrap());

/// What a hand-typed hex value must look like before it is committed.
pub(crate) static TYPED_HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9a-fA-F]{3,8}$").unwrap());
