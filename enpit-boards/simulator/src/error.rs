use core::convert::Infallible;

use enpit_common::{DisplayError, PlayerError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("buzzer: {0}")]
    Buzzer(#[from] PlayerError<Infallible>),

    #[error("display: {0}")]
    Display(#[from] DisplayError<Infallible>),
}

pub type Result<T> = core::result::Result<T, AppError>;
