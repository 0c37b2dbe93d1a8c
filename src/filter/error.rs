use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid pattern rule `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
