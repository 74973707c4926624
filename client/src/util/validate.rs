//! Pure form validation for the auth and post forms.
//!
//! DESIGN
//! ======
//! Each validator returns a [`FieldErrors`] map keyed by form field name; an
//! empty map means the form may be submitted. Lengths are counted in `char`s
//! so Hangul titles measure the same as ASCII ones.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

pub const USERNAME_MAX_CHARS: usize = 100;
pub const NICKNAME_MAX_CHARS: usize = 15;
pub const TITLE_MAX_CHARS: usize = 200;
pub const BODY_MAX_CHARS: usize = 5000;

/// Field name to first failing message.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

pub fn validate_login(username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if username.is_empty() {
        errors.insert("username", "Enter your username.");
    }
    if password.is_empty() {
        errors.insert("password", "Enter your password.");
    }
    errors
}

pub fn validate_register(username: &str, email: &str, nickname: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if username.is_empty() {
        errors.insert("username", "Enter a username.");
    } else if username.chars().count() > USERNAME_MAX_CHARS {
        errors.insert("username", "Usernames are at most 100 characters.");
    }
    if email.is_empty() {
        errors.insert("email", "Enter an email address.");
    } else if !is_email_shaped(email) {
        errors.insert("email", "Enter a valid email address (e.g. example@gmail.com).");
    }
    if nickname.is_empty() {
        errors.insert("nickname", "Enter a nickname.");
    } else if nickname.chars().count() > NICKNAME_MAX_CHARS {
        errors.insert("nickname", "Nicknames are at most 15 characters.");
    }
    if password.is_empty() {
        errors.insert("password", "Enter a password.");
    }
    errors
}

pub fn validate_post(title: &str, body: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if title.is_empty() {
        errors.insert("title", "Enter a title.");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        errors.insert("title", "Titles are at most 200 characters.");
    }
    if body.is_empty() {
        errors.insert("body", "Enter some content.");
    } else if body.chars().count() > BODY_MAX_CHARS {
        errors.insert("body", "Content is at most 5000 characters.");
    }
    errors
}

/// `local@domain.tld` with no whitespace and a non-empty part on each side.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Parse a `:id` route segment into a positive post id.
pub fn parse_post_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
