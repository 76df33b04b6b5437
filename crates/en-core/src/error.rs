use thiserror::Error;

pub type EnResult<T> = Result<T, EnError>;

#[derive(Error, Debug)]
pub enum EnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
