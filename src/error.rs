use std::path::PathBuf;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced while loading puzzle inputs or writing output.
///
/// An unsatisfiable puzzle is *not* an error: propagation reports that case
/// with a boolean and the search engine with an absent assignment.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("structure file contains no rows")]
    EmptyStructure,
}
