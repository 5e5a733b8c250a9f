pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no records supplied")]
    EmptyInput,

    #[error("record {index} has no `parent` field")]
    MissingParent { index: usize },

    #[error("record {index} has an invalid `color` (expected an integer in 0..=3)")]
    InvalidColor { index: usize },

    #[error("record {index} has an invalid `parentColor` (expected an integer in 0..=4)")]
    InvalidParentColor { index: usize },

    #[error("layout cannot place any blocks: {message}")]
    InvalidLayoutConfig { message: String },
}
