use camino::{Utf8Path, Utf8PathBuf};
use peerdrift_domain::model::PeerDependencyDecl;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A manifest that could not be loaded. Read and parse failures are kept
/// apart so callers can tell a missing file from broken JSON.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse {path}")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read a manifest file as UTF-8 and parse it as JSON.
pub(crate) fn read_manifest(path: &Utf8Path) -> Result<Value, ManifestError> {
    let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
        path: path.to_owned(),
        source,
    })
}

/// The root manifest's `devDependencies`, or the empty map when absent.
pub(crate) fn dev_dependencies(doc: &Value) -> BTreeMap<String, String> {
    string_entries(doc, "devDependencies")
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

/// A sub-package's `peerDependencies` in document order, or empty when absent.
pub(crate) fn peer_dependencies(doc: &Value) -> Vec<PeerDependencyDecl> {
    string_entries(doc, "peerDependencies")
        .map(|(name, version)| PeerDependencyDecl {
            name: name.to_string(),
            version: version.to_string(),
        })
        .collect()
}

/// Entries of an object-of-strings field, in document order.
///
/// Lenient by contract: a missing field, a non-object field, and non-string
/// values all yield nothing. Only the shapes the data model names are
/// consumed.
fn string_entries<'a>(doc: &'a Value, field: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
    doc.get(field)
        .and_then(Value::as_object)
        .into_iter()
        .flat_map(|map| {
            map.iter()
                .filter_map(|(name, v)| v.as_str().map(|version| (name.as_str(), version)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn dev_dependencies_of_plain_manifest() {
        let doc: Value = serde_json::from_str(
            r#"{"name": "root", "devDependencies": {"lodash": "4.17.21", "react": "18.0.0"}}"#,
        )
        .unwrap();
        let deps = dev_dependencies(&doc);
        assert_eq!(deps.get("lodash").map(String::as_str), Some("4.17.21"));
        assert_eq!(deps.get("react").map(String::as_str), Some("18.0.0"));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn missing_field_yields_empty() {
        let doc: Value = serde_json::from_str(r#"{"name": "root"}"#).unwrap();
        assert!(dev_dependencies(&doc).is_empty());
        assert!(peer_dependencies(&doc).is_empty());
    }

    #[test]
    fn non_object_document_yields_empty() {
        // Valid JSON that is not an object carries no dependency fields.
        let doc: Value = serde_json::from_str("[1, 2, 3]").unwrap();
        assert!(dev_dependencies(&doc).is_empty());
        assert!(peer_dependencies(&doc).is_empty());
    }

    #[test]
    fn peer_dependencies_keep_document_order() {
        let doc: Value = serde_json::from_str(
            r#"{"peerDependencies": {"zeta": "1.0.0", "alpha": "2.0.0", "mid": "3.0.0"}}"#,
        )
        .unwrap();
        let decls = peer_dependencies(&doc);
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn non_string_versions_are_skipped() {
        let doc: Value = serde_json::from_str(
            r#"{"peerDependencies": {"good": "1.0.0", "bad": 5, "worse": {"v": "1"}}}"#,
        )
        .unwrap();
        let decls = peer_dependencies(&doc);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "good");
    }

    proptest! {
        #[test]
        fn extraction_never_panics(input in ".*") {
            if let Ok(doc) = serde_json::from_str::<Value>(&input) {
                let _ = dev_dependencies(&doc);
                let _ = peer_dependencies(&doc);
            }
        }
    }
}
