/// Primitive Phenotype Database API data types and NewType-patterns.
mod phenodb_url;
mod strings;

pub use phenodb_url::*;
pub use strings::*;
