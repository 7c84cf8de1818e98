use crate::utils::exit_code::ExitCode;

pub enum Error {
    ExitWithError(ExitCode, eyre::Report),
    Exit(ExitCode),
}

pub type Result<T> = std::result::Result<T, Error>;

impl<E> From<E> for Error
where
    E: Into<eyre::Report>,
{
    #[track_caller]
    fn from(error: E) -> Self {
        let r: eyre::Report = error.into();
        Self::ExitWithError(ExitCode::Error, r)
    }
}
