use integral_enum::IntegralEnum;
use thiserror::Error;

#[derive(Error, IntegralEnum)]
pub enum IdRequestError {
    #[error("every id in the range is currently in use")]
    ExhaustedRange,
}
