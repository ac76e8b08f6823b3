//! Record types for AQL search results.
//!
//! Every field is optional: the server only returns what a query's include
//! clause asks for, so an all-`None` record is valid. Child fields hold
//! ordered sequences of nested records and may cycle (an [`Item`] can carry
//! [`Archive`]s whose [`Entry`]s carry archives again); every edge goes
//! through `Option<Vec<_>>`, which is also what keeps `None` (field not
//! returned) distinct from `Some(vec![])` (returned and empty).
//!
//! Binding is strict: a mapping with a key no record declares is rejected
//! rather than skipped.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use crate::timestamp::Timestamp;

/// Entry kind filter used when narrowing item searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Plain files.
    File,
    /// Folders.
    Folder,
    /// Both files and folders.
    Any,
}

impl ItemType {
    /// Wire spelling of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored file or folder matched by an item search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Repository key the item lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Path of the item's parent folder inside the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// File or folder name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Deployment time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Last content modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    /// Last database update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,

    /// Principal that deployed the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Principal behind the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    /// Entry kind as reported by the server, `file` or `folder`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Number of path segments between the repository root and the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<i64>,

    /// MD5 recorded by the deploying client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_md5: Option<String>,
    /// MD5 computed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_md5: Option<String>,
    /// SHA-1 recorded by the deploying client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_sha1: Option<String>,
    /// SHA-1 computed by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_sha1: Option<String>,
    /// SHA-256 of the stored blob.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,

    /// Blob size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,

    /// Virtual repositories the item is reachable through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_repos: Option<String>,

    /// Properties set on the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    /// Archive listings, present when archive indexing is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archives: Option<Vec<Archive>>,
    /// Build dependencies that resolve to the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
    /// Release-bundle artifacts referencing the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub releases: Option<Vec<ReleaseArtifact>>,
    /// Download statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    /// Build artifacts that produced the item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
}

/// Archive listing attached to an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Archive {
    /// Files inside the archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Entry>>,
    /// Items the archive belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

/// A single file inside an archive.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    /// File name of the entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Directory path of the entry inside the archive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Nested archives, for archives stored inside archives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archives: Option<Vec<Archive>>,
}

/// Promotion event recorded against a build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Promotion {
    /// Promotion time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Principal that triggered the promotion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Target status, e.g. `released` or `staged`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Repository the build was promoted to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Free-form promotion comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// User the promotion was performed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Builds covered by the promotion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<Vec<Build>>,
}

/// A CI build known to the repository.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Build {
    /// Link back to the build in the CI server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Build name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Build number; a string on the wire, not an integer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,

    /// Time the build record was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Time the build record was last modified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<Timestamp>,
    /// Time the build itself started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started: Option<Timestamp>,

    /// Principal behind the last modification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    /// Principal that uploaded the build record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Modules produced by the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    /// Properties attached to the build.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

/// A key/value property attached to items, builds, or modules.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Property {
    /// Property key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Property value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Items carrying the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Modules carrying the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    /// Builds carrying the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<Vec<Build>>,
    /// Promotions carrying the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions: Option<Vec<Promotion>>,
}

/// Download statistics for an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    /// Time of the most recent download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded: Option<Timestamp>,
    /// Total download count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<i64>,
    /// Principal behind the most recent download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloaded_by: Option<String>,

    /// Download count through smart remote repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_downloads: Option<i64>,
    /// Time of the most recent remote download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_downloaded: Option<Timestamp>,
    /// Principal behind the most recent remote download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_downloaded_by: Option<String>,

    /// Origin host of the remote download.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_origin: Option<String>,
    /// Path requested on the remote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_path: Option<String>,

    /// Items the statistics belong to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}

/// An artifact produced by a build module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Artifact {
    /// Artifact file name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Packaging type, e.g. `jar` or `pom`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// SHA-1 checksum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// MD5 checksum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    /// Stored items backing the artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Modules the artifact belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<Module>>,
    /// Dependencies resolved against the artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<Dependency>>,
}

/// A module within a build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Module {
    /// Module identifier, e.g. `org.jfrog.test:multi2:3.0.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Artifacts produced by the module.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<Artifact>>,
    /// Builds the module belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builds: Option<Vec<Build>>,
}

/// A dependency consumed by a build module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dependency {
    /// Dependency identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolution scope, e.g. `compile` or `test`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// Packaging type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    /// SHA-1 checksum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1: Option<String>,
    /// MD5 checksum.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub md5: Option<String>,

    /// Stored items the dependency resolves to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    /// Modules declaring the dependency; the wire name is singular.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<Vec<Module>>,
    /// Properties attached to the dependency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
}

/// A release bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Release {
    /// Release bundle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Release bundle version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Detached GPG signature of the bundle manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,

    /// Artifacts captured in the bundle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Vec<ReleaseArtifact>>,
}

/// An artifact captured in a release bundle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseArtifact {
    /// Repository path of the released artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Stored items backing the released artifact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
}
