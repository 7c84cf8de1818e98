/// Standard Unix exit codes from `<sysexits.h>`, restricted to the ones the
/// commands actually return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// A generic or unspecified error occurred.
    Error = 1,

    /// The command was used incorrectly. (EX_USAGE)
    Usage = 64,

    /// User-supplied data was incorrect. (EX_DATAERR)
    DataError = 65,

    /// A specified user did not exist. (EX_NOUSER)
    NoUser = 67,

    /// A configuration error was detected. (EX_CONFIG)
    ConfigError = 78,
}

impl ExitCode {
    /// Terminates the current process with the corresponding exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_sysexits() {
        assert_eq!(ExitCode::Error as i32, 1);
        assert_eq!(ExitCode::Usage as i32, 64);
        assert_eq!(ExitCode::DataError as i32, 65);
        assert_eq!(ExitCode::NoUser as i32, 67);
        assert_eq!(ExitCode::ConfigError as i32, 78);
    }
}
