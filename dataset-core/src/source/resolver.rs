#[cfg(test)]
#[path = "../../tests/unit/source/resolver_test.rs"]
mod resolver_test;

use super::SourceKind;
use std::path::Path;

/// Resolves effective source kind from partially specified parameters.
///
/// An explicit kind is returned unchanged even if the corresponding identifier is missing: such
/// mismatch surfaces later as a load time error. When kind is `auto`, the first present identifier
/// wins in the following priority order: registry id, url, local path. An empty identifier is
/// treated as absent. When no identifier is present, `none` is returned.
pub fn resolve_source_kind(
    explicit_kind: SourceKind,
    registry_id: Option<&str>,
    url: Option<&str>,
    local_path: Option<&Path>,
) -> SourceKind {
    if explicit_kind != SourceKind::Auto {
        return explicit_kind;
    }

    let is_set = |value: Option<&str>| value.is_some_and(|value| !value.is_empty());

    if is_set(registry_id) {
        SourceKind::Registry
    } else if is_set(url) {
        SourceKind::Url
    } else if local_path.is_some_and(|path| !path.as_os_str().is_empty()) {
        SourceKind::Local
    } else {
        SourceKind::None
    }
}
