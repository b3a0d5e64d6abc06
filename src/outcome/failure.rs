use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error carrying nothing but a message, used by [`Failure::msg`]
#[derive(Error, Debug)]
#[error("{0}")]
struct MessageError(String);

/// Opaque error captured from a failed operation
///
/// Stores whatever error the wrapped operation produced, without inspecting or
/// reclassifying it. `Display` and `source()` are those of the captured error,
/// and the concrete type can be recovered with [`Failure::downcast_ref`].
pub struct Failure {
    inner: BoxError,
}

impl Failure {
    /// Capture an error
    ///
    /// A `Failure` passed in is returned as is rather than wrapped again.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let boxed: BoxError = Box::new(error);
        match boxed.downcast::<Failure>() {
            Ok(failure) => *failure,
            Err(inner) => Self { inner },
        }
    }

    /// Create a failure from a plain message
    pub fn msg(message: impl Into<String>) -> Self {
        Self {
            inner: Box::new(MessageError(message.into())),
        }
    }

    /// Display text of the captured error
    pub fn message(&self) -> String {
        self.inner.to_string()
    }

    /// The captured error as a trait object
    pub(crate) fn as_error(&self) -> &(dyn StdError + 'static) {
        &*self.inner
    }

    /// Iterate over the captured error followed by its chain of sources
    pub fn chain(&self) -> Chain<'_> {
        Chain {
            next: Some(self.as_error()),
        }
    }

    /// The innermost error of the chain
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut cause: &(dyn StdError + 'static) = &*self.inner;
        while let Some(next) = cause.source() {
            cause = next;
        }
        cause
    }

    /// Check whether the captured error is of type `E`
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Borrow the captured error as its concrete type
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Take the captured error back as its concrete type
    pub fn downcast<E>(self) -> Result<E, Self>
    where
        E: StdError + 'static,
    {
        self.inner
            .downcast::<E>()
            .map(|error| *error)
            .map_err(|inner| Self { inner })
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

/// Iterator over a [`Failure`] and its sources, outermost first
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}
