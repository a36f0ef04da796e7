//! One accessor per remote operation. Each returns the value under the
//! operation's result key, e.g. the `studies` array of `getStudies`.

use super::PhenoDbClient;
use crate::errors::PhenoDbError;
use crate::query::Query;
use crate::types::{AssayTokenRef, StudyTokenRef};
use serde_json::Value;

impl PhenoDbClient {
    /// All studies visible to the user.
    pub fn get_studies(&mut self) -> Result<Value, PhenoDbError> {
        self.fetch(Query::Studies, None)
    }

    /// Subjects of a study.
    pub fn get_subjects_for_study(&mut self, study: &StudyTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SubjectsForStudy, Some(study.as_str()))
    }

    /// Subject groups of a study.
    pub fn get_subject_groups_for_study(
        &mut self,
        study: &StudyTokenRef,
    ) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SubjectGroupsForStudy, Some(study.as_str()))
    }

    /// Sample and treatment groups of a study.
    pub fn get_sample_and_treatment_groups_for_study(
        &mut self,
        study: &StudyTokenRef,
    ) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SampleAndTreatmentGroupsForStudy, Some(study.as_str()))
    }

    /// Treatment types of a study.
    pub fn get_treatment_types_for_study(
        &mut self,
        study: &StudyTokenRef,
    ) -> Result<Value, PhenoDbError> {
        self.fetch(Query::TreatmentTypesForStudy, Some(study.as_str()))
    }

    /// Sample types of a study.
    pub fn get_sample_types_for_study(
        &mut self,
        study: &StudyTokenRef,
    ) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SampleTypesForStudy, Some(study.as_str()))
    }

    /// Assays of a study.
    pub fn get_assays_for_study(&mut self, study: &StudyTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::AssaysForStudy, Some(study.as_str()))
    }

    /// Samples of a study.
    pub fn get_samples_for_study(&mut self, study: &StudyTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SamplesForStudy, Some(study.as_str()))
    }

    /// Subjects measured in an assay.
    pub fn get_subjects_for_assay(&mut self, assay: &AssayTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SubjectsForAssay, Some(assay.as_str()))
    }

    /// Samples measured in an assay.
    pub fn get_samples_for_assay(&mut self, assay: &AssayTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::SamplesForAssay, Some(assay.as_str()))
    }

    /// Features measured in an assay.
    pub fn get_features_for_assay(&mut self, assay: &AssayTokenRef) -> Result<Value, PhenoDbError> {
        self.fetch(Query::FeaturesForAssay, Some(assay.as_str()))
    }

    /// Measurements of an assay.
    pub fn get_measurement_data_for_assay(
        &mut self,
        assay: &AssayTokenRef,
    ) -> Result<Value, PhenoDbError> {
        self.fetch(Query::MeasurementDataForAssay, Some(assay.as_str()))
    }
}
