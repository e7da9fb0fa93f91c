//! Best-effort cleanup of repository statement and result-set handles
//!
//! Close failures are recovered locally: they are logged at ERROR level and
//! never returned to the caller. Only `Err` returns are recovered; a panic
//! inside [`Close::close`] unwinds as usual.

use std::ops::{Deref, DerefMut};

use tracing::{error, trace};

use crate::error::Result;

/// A repository resource that must be explicitly closed
pub trait Close {
    /// Release the resource. Closing an already closed handle is up to the
    /// implementation.
    fn close(&mut self) -> Result<()>;
}

/// Marker for prepared or plain statement handles
pub trait Statement: Close {}

/// Marker for result-set handles
pub trait ResultSet: Close {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResourceKind {
    Statement,
    ResultSet,
    Resource,
}

impl ResourceKind {
    fn label(self) -> &'static str {
        match self {
            ResourceKind::Statement => "statement",
            ResourceKind::ResultSet => "result set",
            ResourceKind::Resource => "resource",
        }
    }
}

fn close_quietly<C: Close + ?Sized>(handle: &mut C, kind: ResourceKind) {
    match handle.close() {
        Ok(()) => trace!(resource = kind.label(), "Closed {}", kind.label()),
        Err(e) => error!(
            resource = kind.label(),
            error = %e,
            "Exception during closing {}",
            kind.label()
        ),
    }
}

/// Close all given statements
///
/// Handles are closed in input order and `None` entries are skipped. Any
/// close failure is logged and otherwise ignored.
///
/// # Example
/// ```
/// use sql_repo_common::{close_statements, Close, Result, Statement};
///
/// struct Prepared;
///
/// impl Close for Prepared {
///     fn close(&mut self) -> Result<()> {
///         Ok(())
///     }
/// }
///
/// impl Statement for Prepared {}
///
/// let mut insert = Prepared;
/// let mut update = Prepared;
/// close_statements([Some(&mut insert), None, Some(&mut update)]);
/// ```
pub fn close_statements<'a, S, I>(statements: I)
where
    S: Statement + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a mut S>>,
{
    for statement in statements.into_iter().flatten() {
        close_quietly(statement, ResourceKind::Statement);
    }
}

/// Close all given result sets
///
/// Same contract as [`close_statements`].
pub fn close_result_sets<'a, R, I>(result_sets: I)
where
    R: ResultSet + ?Sized + 'a,
    I: IntoIterator<Item = Option<&'a mut R>>,
{
    for result_set in result_sets.into_iter().flatten() {
        close_quietly(result_set, ResourceKind::ResultSet);
    }
}

/// Closes the borrowed handle when dropped
///
/// Dropping the guard closes the handle best-effort, logging any failure.
/// Call [`ClosingGuard::close`] to observe the close result instead.
pub struct ClosingGuard<'a, H: Close + ?Sized> {
    handle: &'a mut H,
    armed: bool,
}

impl<'a, H: Close + ?Sized> ClosingGuard<'a, H> {
    pub fn new(handle: &'a mut H) -> Self {
        Self {
            handle,
            armed: true,
        }
    }

    /// Close now and return the outcome to the caller
    pub fn close(mut self) -> Result<()> {
        self.armed = false;
        self.handle.close()
    }
}

impl<H: Close + ?Sized> Deref for ClosingGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.handle
    }
}

impl<H: Close + ?Sized> DerefMut for ClosingGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.handle
    }
}

impl<H: Close + ?Sized> Drop for ClosingGuard<'_, H> {
    fn drop(&mut self) {
        if self.armed {
            close_quietly(&mut *self.handle, ResourceKind::Resource);
        }
    }
}
