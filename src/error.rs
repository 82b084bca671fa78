use crate::charts::RenderError;
use crate::data::DataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ChartError>;
