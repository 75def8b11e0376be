// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*!
Scope-bound binding of OpenGL resources.

Most GL operations act on whatever object is currently bound to a target, so a
resource has to be bound before use and unbound afterwards.  [`Binder`] does both,
the same way a mutex guard locks and unlocks:

```
use prgl::{Bind, Binder, Shared};
use std::cell::Cell;

#[derive(Default)]
struct VertexArray {
    bound: Cell<bool>,
}
impl Bind for VertexArray {
    fn bind(&self, bound: bool) {
        self.bound.set(bound);
    }
}

let vao = Shared::new(VertexArray::default());
{
    let _binder = Binder::new(&vao);
    assert!(vao.bound.get());
}
assert!(!vao.bound.get());
```

A binder can't be duplicated or made from nothing, since either would bind or
unbind the resource a second time:

```compile_fail
# use prgl::{Bind, Binder, Shared};
# struct R;
# impl Bind for R { fn bind(&self, _: bool) {} }
let r = Shared::new(R);
let a = Binder::new(&r);
let b = a.clone();
```

```compile_fail
# use prgl::{Bind, Binder};
# struct R;
# impl Bind for R { fn bind(&self, _: bool) {} }
let b: Binder<'static, R> = Default::default();
```

Binding is state of the thread-current context, so a binder stays on its thread:

```compile_fail
# use prgl::{Bind, Binder, Shared};
# struct R;
# impl Bind for R { fn bind(&self, _: bool) {} }
fn send<T: Send>(_: T) {}
let r = Shared::new(R);
send(Binder::new(&r));
```
*/

use crate::types::Shared;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::Deref;

/// A resource that can be made the current target of its kind.
///
/// `bind(true)` makes the resource current; `bind(false)` clears it.  Resources are
/// shared behind [`Shared`], so `bind` takes `&self`; keep any bookkeeping in a
/// `Cell` or similar.
pub trait Bind {
    fn bind(&self, bound: bool);
}

/// Binds a resource for as long as the binder lives.
///
/// [`Binder::new`] calls `bind(true)`, dropping the binder calls `bind(false)`.  Drop
/// runs on every way out of the scope, including `?` and panics, so the resource is
/// never left bound.  Binders for different resources unwind in reverse order of
/// creation.
///
/// The binder borrows the shared handle; it never clones it, so the reference count
/// is untouched.
#[must_use = "the resource is unbound as soon as the binder is dropped"]
pub struct Binder<'a, T: Bind + ?Sized> {
    bindable: &'a Shared<T>,
    // bind state belongs to the thread-current context
    _not_send: PhantomData<*const ()>,
}

impl<'a, T: Bind + ?Sized> Binder<'a, T> {
    /// Binds `bindable`.
    pub fn new(bindable: &'a Shared<T>) -> Self {
        logwise::trace_sync!(
            "Binder::new {ty}",
            ty = logwise::privacy::LogIt(&std::any::type_name::<T>())
        );
        bindable.bind(true);
        Binder {
            bindable,
            _not_send: PhantomData,
        }
    }

    /// The shared handle this binder was created from.
    pub fn bindable(&self) -> &'a Shared<T> {
        self.bindable
    }
}

impl<T: Bind + ?Sized> Drop for Binder<'_, T> {
    fn drop(&mut self) {
        logwise::trace_sync!(
            "Binder::drop {ty}",
            ty = logwise::privacy::LogIt(&std::any::type_name::<T>())
        );
        self.bindable.bind(false);
    }
}

impl<T: Bind + ?Sized> Deref for Binder<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.bindable
    }
}

impl<T: Bind + Debug + ?Sized> Debug for Binder<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("bindable", &self.bindable)
            .finish()
    }
}
