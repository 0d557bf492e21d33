// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::Error;

/// The error wrapped by an [`Error`]: either another link of the chain or a foreign error.
#[derive(Clone)]
pub enum Cause {
    /// Another `causeway` error.
    Chain(Error),
    /// Any other error. The chain ends here.
    Foreign(Arc<dyn StdError + Send + Sync>),
}

impl Cause {
    /// Sorts a boxed error into a chain link or a foreign leaf.
    pub(crate) fn from_boxed(error: Box<dyn StdError + Send + Sync>) -> Self {
        match error.downcast::<Error>() {
            Ok(node) => Self::Chain(*node),
            Err(foreign) => Self::Foreign(Arc::from(foreign)),
        }
    }

    /// The cause as a standard error trait object.
    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        match self {
            Self::Chain(node) => node,
            Self::Foreign(foreign) => foreign.as_ref(),
        }
    }

    /// Returns the chain link, if this cause is one.
    #[must_use]
    pub fn as_chain(&self) -> Option<&Error> {
        match self {
            Self::Chain(node) => Some(node),
            Self::Foreign(_) => None,
        }
    }

    /// Resolves the root cause of this cause, using the cache of chain links.
    pub(crate) fn root(&self) -> Self {
        match self {
            Self::Chain(node) => node.root_cause_entry().cloned().unwrap_or_else(|| self.clone()),
            Self::Foreign(_) => self.clone(),
        }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(node) => fmt::Display::fmt(node, f),
            Self::Foreign(foreign) => fmt::Display::fmt(foreign, f),
        }
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chain(node) => f.debug_tuple("Chain").field(&node.message()).finish(),
            Self::Foreign(foreign) => f.debug_tuple("Foreign").field(foreign).finish(),
        }
    }
}
