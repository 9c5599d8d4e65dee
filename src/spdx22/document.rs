//! SPDX 2.2 JSON document model.
//!
//! Field names follow the SPDX 2.2 JSON schema. Optional strings and
//! collections are omitted when empty so the serialized document carries
//! only what the converter actually knows.

use super::file_type::FileType;
use super::relationship_type::SpdxRelationshipType;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Version tag written to `spdxVersion`
pub const SPDX_VERSION: &str = "SPDX-2.2";

/// Sentinel for "the creator makes no assertion"
pub const NOASSERTION: &str = "NOASSERTION";

/// Sentinel for "there is no value"
pub const NONE: &str = "NONE";

fn serialize_created<S: Serializer>(
    created: &DateTime<Utc>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// A complete SPDX 2.2 document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    pub spdx_version: String,
    pub creation_info: CreationInfo,
    pub data_license: String,
    pub document_namespace: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_document_refs: Vec<ExternalDocumentRef>,
    #[serde(default)]
    pub packages: Vec<Package>,
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

/// Who created the document and when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreationInfo {
    #[serde(serialize_with = "serialize_created")]
    pub created: DateTime<Utc>,
    pub creators: Vec<String>,
    pub license_list_version: String,
}

/// Algorithm plus value, as SPDX wants it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checksum {
    pub algorithm: String,
    pub checksum_value: String,
}

/// Reference to another SPDX document this one points into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDocumentRef {
    pub external_document_id: String,
    pub checksum: Checksum,
    pub spdx_document: String,
}

/// Category of an external package reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceCategory {
    Security,
    PackageManager,
}

/// An external reference attached to a package (CPE, purl)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRef {
    pub reference_category: ReferenceCategory,
    pub reference_locator: String,
    pub reference_type: String,
}

/// An SPDX package record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version_info: String,
    pub license_concluded: String,
    pub license_declared: String,
    pub download_location: String,
    pub files_analyzed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub has_files: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<ExternalRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_info: Option<String>,
}

/// An SPDX file record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    #[serde(rename = "SPDXID")]
    pub spdx_id: String,
    pub file_name: String,
    pub license_concluded: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checksums: Vec<Checksum>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub file_types: Vec<FileType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An SPDX relationship record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub spdx_element_id: String,
    pub relationship_type: SpdxRelationshipType,
    pub related_spdx_element: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Document {
    /// Look up a package record by its SPDX id
    #[must_use]
    pub fn package(&self, spdx_id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.spdx_id == spdx_id)
    }

    /// Look up a file record by its SPDX id
    #[must_use]
    pub fn file(&self, spdx_id: &str) -> Option<&File> {
        self.files.iter().find(|f| f.spdx_id == spdx_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn file_record() -> File {
        File {
            spdx_id: "SPDXRef-f1".to_string(),
            file_name: "/etc/os-release".to_string(),
            license_concluded: NOASSERTION.to_string(),
            checksums: vec![Checksum {
                algorithm: "SHA256".to_string(),
                checksum_value: "abc".to_string(),
            }],
            file_types: vec![FileType::Text],
            comment: Some("layerID: sha256:1234".to_string()),
        }
    }

    #[test]
    fn test_file_record_shape() {
        insta::assert_json_snapshot!(file_record(), @r###"
        {
          "SPDXID": "SPDXRef-f1",
          "fileName": "/etc/os-release",
          "licenseConcluded": "NOASSERTION",
          "checksums": [
            {
              "algorithm": "SHA256",
              "checksumValue": "abc"
            }
          ],
          "fileTypes": [
            "TEXT"
          ],
          "comment": "layerID: sha256:1234"
        }
        "###);
    }

    #[test]
    fn test_empty_optionals_are_omitted() {
        let file = File {
            checksums: Vec::new(),
            file_types: Vec::new(),
            comment: None,
            ..file_record()
        };
        let value = serde_json::to_value(&file).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("checksums"));
        assert!(!object.contains_key("fileTypes"));
        assert!(!object.contains_key("comment"));
    }

    #[test]
    fn test_created_is_second_precision_utc() {
        let info = CreationInfo {
            created: Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
            creators: vec!["Tool: x-1".to_string()],
            license_list_version: "3.20".to_string(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["created"], "2024-03-01T12:30:05Z");
        assert_eq!(value["licenseListVersion"], "3.20");

        let back: CreationInfo = serde_json::from_value(value).unwrap();
        assert_eq!(back, info);
    }

    #[test]
    fn test_external_ref_shape() {
        let reference = ExternalRef {
            reference_category: ReferenceCategory::PackageManager,
            reference_locator: "pkg:apk/alpine/musl@1.2.4".to_string(),
            reference_type: "purl".to_string(),
        };
        let value = serde_json::to_value(&reference).unwrap();
        assert_eq!(value["referenceCategory"], "PACKAGE_MANAGER");
        assert_eq!(value.as_object().unwrap().len(), 3);

        assert!(serde_json::from_str::<ReferenceCategory>(r#""OTHER""#).is_err());
    }

    #[test]
    fn test_relationship_field_names() {
        let rel = Relationship {
            spdx_element_id: "SPDXRef-a".to_string(),
            relationship_type: SpdxRelationshipType::Contains,
            related_spdx_element: "SPDXRef-b".to_string(),
            comment: None,
        };
        let json = serde_json::to_string(&rel).unwrap();
        assert_eq!(
            json,
            r#"{"spdxElementId":"SPDXRef-a","relationshipType":"CONTAINS","relatedSpdxElement":"SPDXRef-b"}"#
        );
    }
}
