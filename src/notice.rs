//! User-facing notices produced at the controller boundary.
//!
//! Remote failures never escape a controller; they come back as an error notice with the
//! best message available.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { level: Level::Success, title: title.into(), description: description.into() }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self { level: Level::Error, title: "Error".into(), description: description.into() }
    }

    pub fn is_success(&self) -> bool {
        self.level == Level::Success
    }

    pub fn login(success: bool) -> Self {
        if success {
            Self::success("Login Successful", "Welcome to the Coding Questions Platform!")
        } else {
            Self {
                level: Level::Error,
                title: "Login Failed".into(),
                description: "Invalid username or password. Please try again.".into(),
            }
        }
    }

    pub fn logged_out() -> Self {
        Self::success("Logged Out", "You have been successfully logged out.")
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
