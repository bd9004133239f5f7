//! Records search responses as offline fixtures (`test-mode` only).
//!
//! With `GF_RECORD=1` every successful body is written to
//! `<GF_FIXDIR or tests/fixtures>/<fixture_name(query)>.json`, the same
//! name the offline tests read back.

use std::{env, fs, path::PathBuf};

use crate::{
    core::log::{feed_debug, feed_warn},
    news::SearchQuery,
};

fn fixture_dir() -> PathBuf {
    env::var_os("GF_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    )
}

/// `search_<term>`, with `_<order-by>` appended for non-default orderings.
/// Characters outside `[A-Za-z0-9]` become `_`.
pub(crate) fn fixture_name(query: &SearchQuery) -> String {
    let defaults = SearchQuery::default();
    let mut name = format!("search_{}", query.term);
    if query.order_by != defaults.order_by {
        name.push('_');
        name.push_str(&query.order_by);
    }
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Writes `body` when recording is switched on. Failures are logged, never returned.
pub(crate) fn maybe_record(query: &SearchQuery, body: &str) {
    if env::var("GF_RECORD").ok().as_deref() != Some("1") {
        return;
    }
    let dir = fixture_dir();
    let path = dir.join(format!("{}.json", fixture_name(query)));
    match fs::create_dir_all(&dir).and_then(|()| fs::write(&path, body)) {
        Ok(()) => feed_debug!(path = %path.display(), "recorded search fixture"),
        Err(_e) => feed_warn!(path = %path.display(), error = %_e, "failed to record search fixture"),
    }
}
