use crate::types::PhenoDbUrl;
use lazy_static::lazy_static;

lazy_static! {
    /// Root of the public Phenotype Database API.
    pub static ref DEFAULT_URL: PhenoDbUrl =
        PhenoDbUrl::from_static("https://dashin.eu/interventionstudies/api/");
}
