use thiserror::Error;

// Symbols a password may not contain. `$ - _ @ ( ) &` remain allowed.
const DISALLOWED_SYMBOLS: [char; 18] = [
    '#', '%', '!', '^', '*', '=', '+', ':', ';', '"', '\'', '\\', '|', '{', '/', '}', '[', ']',
];

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 16;

// The first password rule a candidate breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("length should be at least 8")]
    TooShort,

    #[error("length should be not be greater than 16")]
    TooLong,

    #[error("Password should have at least one numeral")]
    MissingDigit,

    #[error("Password should have at least one uppercase letter")]
    MissingUppercase,

    #[error("Password should have at least one lowercase letter")]
    MissingLowercase,

    #[error("Password can't have any Special Symbols except: $, -, _, @, (, ), &")]
    DisallowedSymbol,
}

// Checks a candidate password against the account rules.
//
// Rules are evaluated in a fixed order and only the first violation is
// reported: length bounds, then digit, uppercase and lowercase presence,
// then the symbol blacklist.
pub fn validate_password(candidate: &str) -> Result<(), PasswordError> {
    let length = candidate.chars().count();

    if length < MIN_LENGTH {
        return Err(PasswordError::TooShort);
    }
    if length > MAX_LENGTH {
        return Err(PasswordError::TooLong);
    }
    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Err(PasswordError::MissingDigit);
    }
    if !candidate.chars().any(char::is_uppercase) {
        return Err(PasswordError::MissingUppercase);
    }
    if !candidate.chars().any(char::is_lowercase) {
        return Err(PasswordError::MissingLowercase);
    }
    if candidate.chars().any(|c| DISALLOWED_SYMBOLS.contains(&c)) {
        return Err(PasswordError::DisallowedSymbol);
    }

    Ok(())
}
