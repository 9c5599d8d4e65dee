//! Document name and namespace derivation.

use crate::model::SourceMetadata;
use uuid::Uuid;

/// Lexically normalize a slash-separated path.
///
/// Collapses repeated separators, removes `.` segments and resolves `..`
/// against preceding segments. An empty result becomes `.` (or `/` when the
/// input was rooted).
#[must_use]
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Make a source name safe for use inside a namespace URI
#[must_use]
pub fn clean_name(name: &str) -> String {
    clean_path(&name.replace(['#', ':'], "-"))
}

/// Document name for a source; unknown sources are named by the document UUID
#[must_use]
pub fn document_name(source: &SourceMetadata, document_uuid: &Uuid) -> String {
    let raw = match source {
        SourceMetadata::Image { user_input } => user_input.as_str(),
        SourceMetadata::Directory { path } | SourceMetadata::File { path } => path.as_str(),
        SourceMetadata::Unknown => "",
    };
    if raw.is_empty() {
        document_uuid.to_string()
    } else {
        clean_name(raw)
    }
}

/// Unique document namespace URI.
///
/// `<base>/<scheme>/<name>-<uuid>`, or `<base>/<scheme>/<uuid>` when the
/// name is `.`.
#[must_use]
pub fn document_namespace(
    base: &str,
    source: &SourceMetadata,
    name: &str,
    document_uuid: &Uuid,
) -> String {
    let name = clean_name(name);
    let identifier = if name == "." {
        document_uuid.to_string()
    } else {
        format!("{name}-{document_uuid}")
    };
    let path = clean_path(&format!("{}/{identifier}", source.scheme_label()));
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
