use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row references another row that could not be loaded.
    ///
    /// Foreign keys should make this impossible. Results in a 500 Internal Server
    /// Error with a generic message returned to client.
    #[error("{entity} {id} references missing {related}")]
    MissingRelation {
        /// Entity holding the reference
        entity: &'static str,
        /// Primary key of the referencing row
        id: i32,
        /// Entity that could not be found
        related: &'static str,
    },
}
