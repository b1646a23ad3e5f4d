//! Client-side form field rules.
//!
//! Each check returns the first failing message for one field. Forms collect
//! per-field messages into [`FieldErrors`] so every invalid field is reported
//! at once.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

pub const USERNAME_MIN_CHARS: usize = 3;
pub const USERNAME_MAX_CHARS: usize = 30;
pub const PASSWORD_MIN_CHARS: usize = 6;

/// Field name to message, in field-name order.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn check_username(raw: &str) -> Result<(), &'static str> {
    let len = raw.chars().count();
    if raw.is_empty() {
        Err("Name is required")
    } else if len < USERNAME_MIN_CHARS {
        Err("Name should be at least 3 characters")
    } else if len > USERNAME_MAX_CHARS {
        Err("Name should not exceed 30 characters")
    } else {
        Ok(())
    }
}

pub fn check_email(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        Err("Email is required")
    } else if is_email(raw) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

pub fn check_password(raw: &str) -> Result<(), &'static str> {
    if raw.is_empty() {
        Err("Password is required")
    } else if raw.chars().count() < PASSWORD_MIN_CHARS {
        Err("Password should be at least 6 characters")
    } else {
        Ok(())
    }
}

pub fn check_repeat_password(password: &str, repeat: &str) -> Result<(), &'static str> {
    if repeat.is_empty() {
        Err("Repeat password is required")
    } else if repeat != password {
        Err("Passwords do not match")
    } else {
        Ok(())
    }
}

pub fn check_title(raw: &str) -> Result<(), &'static str> {
    if raw.trim().is_empty() { Err("Title is required") } else { Ok(()) }
}

/// Record `result` under `field` when it failed.
pub fn collect(errors: &mut FieldErrors, field: &'static str, result: Result<(), &'static str>) {
    if let Err(message) = result {
        errors.insert(field, message);
    }
}

/// `local@domain.tld` shape without whitespace; top-level domains are not
/// checked against a list.
fn is_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
