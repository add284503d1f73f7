use enough::StopReason;

/// Errors from decoding, encoding, resampling and comparing images.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ImageError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("unexpected end of input while reading {context}")]
    UnexpectedEof { context: &'static str },

    #[error("failed to read pixel row {row}")]
    TruncatedRow { row: u32 },

    #[error("failed to read {plane} plane")]
    TruncatedPlane { plane: &'static str },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image dimensions differ: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch { left: (u32, u32), right: (u32, u32) },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("buffer size mismatch: need {needed} pixels, got {actual}")]
    BufferSizeMismatch { needed: usize, actual: usize },

    #[error("planar formats carry no header; width and height must be supplied")]
    MissingDimensions,

    #[error("scale factor must be positive, got {0}")]
    InvalidFactor(u32),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of an [`ImageError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or unexpected header contents.
    Format,
    /// Short read, short write, or an unusable handle.
    Io,
    /// Two images of different size compared without opting into overlap.
    DimensionMismatch,
    /// Caller-supplied arguments that cannot describe a valid image.
    InvalidInput,
    /// A configured [`crate::Limits`] bound was exceeded.
    Limit,
    /// A [`enough::Stop`] token requested cancellation.
    Cancelled,
}

impl ImageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedFormat | Self::InvalidHeader(_) | Self::UnsupportedVariant(_) => {
                ErrorKind::Format
            }
            Self::UnexpectedEof { .. }
            | Self::TruncatedRow { .. }
            | Self::TruncatedPlane { .. }
            | Self::Io(_) => ErrorKind::Io,
            Self::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            Self::DimensionsTooLarge { .. }
            | Self::BufferSizeMismatch { .. }
            | Self::MissingDimensions
            | Self::InvalidFactor(_) => ErrorKind::InvalidInput,
            Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::Cancelled(_) => ErrorKind::Cancelled,
        }
    }
}

impl From<StopReason> for ImageError {
    fn from(r: StopReason) -> Self {
        ImageError::Cancelled(r)
    }
}
