//! Command trait: the unit of behavior attached to an outcome branch.

use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

/// A unit of behavior invoked by an [`Executor`](crate::Executor).
///
/// The input is optional: `None` means the caller supplied no override via
/// [`Executor::with_data`](crate::Executor::with_data), and the command is
/// expected to fall back to its own default.
pub trait Command {
    type Input;
    type Output;

    fn execute(&self, input: Option<Self::Input>) -> Self::Output;
}

impl<C: Command + ?Sized> Command for &C {
    type Input = C::Input;
    type Output = C::Output;

    fn execute(&self, input: Option<Self::Input>) -> Self::Output {
        (**self).execute(input)
    }
}

impl<C: Command + ?Sized> Command for Box<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn execute(&self, input: Option<Self::Input>) -> Self::Output {
        (**self).execute(input)
    }
}

impl<C: Command + ?Sized> Command for Rc<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn execute(&self, input: Option<Self::Input>) -> Self::Output {
        (**self).execute(input)
    }
}

impl<C: Command + ?Sized> Command for Arc<C> {
    type Input = C::Input;
    type Output = C::Output;

    fn execute(&self, input: Option<Self::Input>) -> Self::Output {
        (**self).execute(input)
    }
}

/// Command backed by a closure. Built with [`from_fn`].
pub struct FnCommand<F, I> {
    f: F,
    _input: PhantomData<fn(I)>,
}

impl<F, I, O> Command for FnCommand<F, I>
where
    F: Fn(Option<I>) -> O,
{
    type Input = I;
    type Output = O;

    fn execute(&self, input: Option<I>) -> O {
        (self.f)(input)
    }
}

impl<F, I> std::fmt::Debug for FnCommand<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnCommand").finish_non_exhaustive()
    }
}

/// Adapt a closure into a [`Command`].
///
/// ```
/// use railyard_core::{from_fn, Outcome};
///
/// let greet = from_fn(|name: Option<String>| format!("hello {}", name.as_deref().unwrap_or("world")));
/// let outcome = Outcome::ok(());
/// assert_eq!(outcome.execute(&greet).on_success(), Some("hello world".to_string()));
/// ```
pub const fn from_fn<F, I, O>(f: F) -> FnCommand<F, I>
where
    F: Fn(Option<I>) -> O,
{
    FnCommand {
        f,
        _input: PhantomData,
    }
}
