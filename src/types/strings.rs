use aliri_braid::braid;

/// Phenotype Database account user name.
#[braid(serde)]
pub struct Username;

/// Session token issued by `authenticate`.
#[braid(serde)]
pub struct ApiToken;

/// Device identifier: lowercase hex MD5 of the machine fingerprint and user name.
#[braid(serde)]
pub struct DeviceId;

/// Per-request validation hash.
#[braid(serde)]
pub struct Validation;

/// Opaque identifier of a study, as found in the `token` field of `getStudies` results.
#[braid(serde)]
pub struct StudyToken;

/// Opaque identifier of an assay, as found in the `token` field of `getAssaysForStudy` results.
#[braid(serde)]
pub struct AssayToken;
