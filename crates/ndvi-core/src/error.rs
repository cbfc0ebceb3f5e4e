use thiserror::Error;

#[derive(Error, Debug)]
pub enum NdviError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Grid shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Grid rows have inconsistent lengths: row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Non-finite value {value} at row {row}, col {col}")]
    InvalidValue { row: usize, col: usize, value: f32 },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, NdviError>;
