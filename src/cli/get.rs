use clap::ValueEnum;
use color_eyre::eyre::{self, WrapErr};
use phenodb::{PhenoDbClient, Query};

/// Query names as typed on the command line.
#[derive(ValueEnum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum QueryArg {
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

impl From<QueryArg> for Query {
    fn from(value: QueryArg) -> Self {
        match value {
            QueryArg::Studies => Query::Studies,
            QueryArg::SubjectsForStudy => Query::SubjectsForStudy,
            QueryArg::SubjectGroupsForStudy => Query::SubjectGroupsForStudy,
            QueryArg::SampleAndTreatmentGroupsForStudy => Query::SampleAndTreatmentGroupsForStudy,
            QueryArg::TreatmentTypesForStudy => Query::TreatmentTypesForStudy,
            QueryArg::SampleTypesForStudy => Query::SampleTypesForStudy,
            QueryArg::AssaysForStudy => Query::AssaysForStudy,
            QueryArg::SamplesForStudy => Query::SamplesForStudy,
            QueryArg::SubjectsForAssay => Query::SubjectsForAssay,
            QueryArg::SamplesForAssay => Query::SamplesForAssay,
            QueryArg::FeaturesForAssay => Query::FeaturesForAssay,
            QueryArg::MeasurementDataForAssay => Query::MeasurementDataForAssay,
        }
    }
}

/// `phenodb get`: run a query and print its result as JSON.
pub fn get(client: &mut PhenoDbClient, query: QueryArg, token: Option<String>) -> eyre::Result<()> {
    let query = Query::from(query);
    let value = client
        .fetch(query, token.as_deref())
        .wrap_err_with(|| format!("{} failed", query))?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
