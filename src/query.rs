//! The fixed set of remote operations offered by the Phenotype Database API.

use std::fmt::{Display, Formatter};

/// A remote operation. Each has a name (the last path segment of its URL),
/// a top-level key holding its result, and the token it is scoped by.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Query {
    Studies,
    SubjectsForStudy,
    SubjectGroupsForStudy,
    SampleAndTreatmentGroupsForStudy,
    TreatmentTypesForStudy,
    SampleTypesForStudy,
    AssaysForStudy,
    SamplesForStudy,
    SubjectsForAssay,
    SamplesForAssay,
    FeaturesForAssay,
    MeasurementDataForAssay,
}

/// Which token, if any, a [Query] must be given.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Scope {
    Unscoped,
    Study,
    Assay,
}

impl Scope {
    /// Name of the query parameter carrying the token.
    pub const fn param(self) -> Option<&'static str> {
        match self {
            Scope::Unscoped => None,
            Scope::Study => Some("studyToken"),
            Scope::Assay => Some("assayToken"),
        }
    }
}

impl Query {
    pub const ALL: [Query; 12] = [
        Query::Studies,
        Query::SubjectsForStudy,
        Query::SubjectGroupsForStudy,
        Query::SampleAndTreatmentGroupsForStudy,
        Query::TreatmentTypesForStudy,
        Query::SampleTypesForStudy,
        Query::AssaysForStudy,
        Query::SamplesForStudy,
        Query::SubjectsForAssay,
        Query::SamplesForAssay,
        Query::FeaturesForAssay,
        Query::MeasurementDataForAssay,
    ];

    /// Remote operation name, e.g. `getStudies`.
    pub const fn name(self) -> &'static str {
        match self {
            Query::Studies => "getStudies",
            Query::SubjectsForStudy => "getSubjectsForStudy",
            Query::SubjectGroupsForStudy => "getSubjectGroupsForStudy",
            Query::SampleAndTreatmentGroupsForStudy => "getSampleAndTreatmentGroupsForStudy",
            Query::TreatmentTypesForStudy => "getTreatmentTypesForStudy",
            Query::SampleTypesForStudy => "getSampleTypesForStudy",
            Query::AssaysForStudy => "getAssaysForStudy",
            Query::SamplesForStudy => "getSamplesForStudy",
            Query::SubjectsForAssay => "getSubjectsForAssay",
            Query::SamplesForAssay => "getSamplesForAssay",
            Query::FeaturesForAssay => "getFeaturesForAssay",
            Query::MeasurementDataForAssay => "getMeasurementDataForAssay",
        }
    }

    /// Top-level key of the response body which holds the result.
    pub const fn result_key(self) -> &'static str {
        match self {
            Query::Studies => "studies",
            Query::SubjectsForStudy => "subjects",
            Query::SubjectGroupsForStudy => "subjectGroups",
            Query::SampleAndTreatmentGroupsForStudy => "sampleAndTreatmentGroups",
            Query::TreatmentTypesForStudy => "treatmentTypes",
            Query::SampleTypesForStudy => "sampleTypes",
            Query::AssaysForStudy => "assays",
            Query::SamplesForStudy => "samples",
            Query::SubjectsForAssay => "subjects",
            Query::SamplesForAssay => "samples",
            Query::FeaturesForAssay => "features",
            Query::MeasurementDataForAssay => "measurements",
        }
    }

    pub const fn scope(self) -> Scope {
        match self {
            Query::Studies => Scope::Unscoped,
            Query::SubjectsForStudy
            | Query::SubjectGroupsForStudy
            | Query::SampleAndTreatmentGroupsForStudy
            | Query::TreatmentTypesForStudy
            | Query::SampleTypesForStudy
            | Query::AssaysForStudy
            | Query::SamplesForStudy => Scope::Study,
            Query::SubjectsForAssay
            | Query::SamplesForAssay
            | Query::FeaturesForAssay
            | Query::MeasurementDataForAssay => Scope::Assay,
        }
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
