use garde::Validate;

use crate::server::{error::validation::ValidationError, model::user::User};

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 50;
pub const EMAIL_MAX_LEN: usize = 100;
pub const FULL_NAME_MAX_LEN: usize = 100;

/// Rejects ids that cannot belong to a persisted user.
pub fn validate_id(id: i64) -> Result<(), ValidationError> {
    if id < 1 {
        return Err(ValidationError::InvalidId);
    }
    Ok(())
}

/// Checks the username is between 3 and 50 characters inclusive.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < USERNAME_MIN_LEN {
        return Err(ValidationError::ShortUsername);
    }
    if len > USERNAME_MAX_LEN {
        return Err(ValidationError::LongUsername);
    }
    Ok(())
}

/// Single mail address checked by garde's email rule.
#[derive(Validate)]
struct Mailbox {
    #[garde(email)]
    address: String,
}

/// Checks the email is present, at most 100 characters, and a single mail address.
///
/// Length is checked before the address is parsed. Surrounding whitespace is ignored and
/// a `Display Name <local@domain>` mailbox is checked on its bracketed address.
pub fn validate_email(address: &str) -> Result<(), ValidationError> {
    if address.chars().count() > EMAIL_MAX_LEN {
        return Err(ValidationError::LongEmail);
    }

    let address = address.trim();
    if address.is_empty() {
        return Err(ValidationError::NoEmail);
    }

    let mailbox = Mailbox {
        address: addr_spec(address).to_string(),
    };
    mailbox
        .validate()
        .map_err(|_| ValidationError::InvalidEmail)
}

/// Address between the final `<` and a trailing `>`, or the whole input without brackets.
fn addr_spec(address: &str) -> &str {
    match address
        .strip_suffix('>')
        .and_then(|rest| rest.rsplit_once('<'))
    {
        Some((_, inner)) => inner.trim(),
        None => address,
    }
}

/// Checks the full name is at most 100 characters. Empty is allowed.
pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if full_name.chars().count() > FULL_NAME_MAX_LEN {
        return Err(ValidationError::LongFullName);
    }
    Ok(())
}

/// Runs the username, email and full name checks in that order, stopping at the
/// first failure.
pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    validate_username(&user.username)?;
    validate_email(&user.email)?;
    validate_full_name(&user.full_name)?;
    Ok(())
}
