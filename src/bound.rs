use std::{fmt, ops::Deref};

/// A decoded model paired with the client it was fetched through.
///
/// Chained operations (`job.delete()`, `view.add_job(..)`) reuse that client,
/// and with it the same credentials and connection pool. Clients are `Arc`
/// handles, so holding one here is cheap. `Bound` dereferences to the model.
#[derive(Clone)]
pub struct Bound<T, C> {
    data: T,
    client: C,
}

impl<T, C> Bound<T, C> {
    pub(crate) fn new(data: T, client: C) -> Self {
        Self { data, client }
    }

    #[must_use]
    pub fn data(&self) -> &T {
        &self.data
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    #[must_use]
    pub fn into_parts(self) -> (T, C) {
        (self.data, self.client)
    }

    /// Transform the model, keeping the client.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Bound<U, C> {
        Bound {
            data: f(self.data),
            client: self.client,
        }
    }
}

impl<T, C> Deref for Bound<T, C> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T, C> AsRef<T> for Bound<T, C> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Bound<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.data, f)
    }
}

impl<T: PartialEq, C> PartialEq<T> for Bound<T, C> {
    fn eq(&self, other: &T) -> bool {
        self.data == *other
    }
}
