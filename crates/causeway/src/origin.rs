// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt;
use std::panic::Location;

/// The source location at which an [`Error`](crate::Error) was constructed.
///
/// Origins are captured through `#[track_caller]`, so the location points at the
/// code that called the constructor, not at the constructor itself. They exist for
/// diagnostics only.
///
/// The enclosing function is known only for errors built with the
/// [`errorf!`](crate::errorf) and [`wrapf!`](crate::wrapf) macros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    location: &'static Location<'static>,
    function: Option<&'static str>,
}

impl Origin {
    /// Captures the location of the caller.
    #[must_use]
    #[track_caller]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            function: None,
        }
    }

    /// Records the path of the enclosing function.
    #[must_use]
    pub fn with_function(self, function: &'static str) -> Self {
        Self {
            function: Some(function),
            ..self
        }
    }

    /// Source file of the call site.
    #[must_use]
    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    /// Path of the enclosing function, if it was captured.
    #[must_use]
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Line of the call site.
    #[must_use]
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Column of the call site.
    #[must_use]
    pub fn column(&self) -> u32 {
        self.location.column()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.function {
            Some(function) => write!(f, "{}:{function}:{}:{}", self.file(), self.line(), self.column()),
            None => write!(f, "{}:{}:{}", self.file(), self.line(), self.column()),
        }
    }
}

impl From<&'static Location<'static>> for Origin {
    fn from(location: &'static Location<'static>) -> Self {
        Self { location, function: None }
    }
}
