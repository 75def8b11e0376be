// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
/*! prgl is a thin convenience layer over OpenGL.

It does not render anything on its own.  It provides the small pieces every
OpenGL wrapper ends up writing:

| Piece                         | Purpose                                                           |
|-------------------------------|-------------------------------------------------------------------|
| [`DataType`]                  | The GL element type constants, as a closed enum                   |
| [`HasDataType`]               | Compile-time table from `u8`, `f32`, ... to their [`DataType`]    |
| [`check_gl_error!`]           | Drain `glGetError` after a call and report with the call site     |
| [`Binder`]                    | Bind a resource for the rest of a scope, unbind on every exit     |

# Plugging in a context

prgl does not load OpenGL.  The two seams to your context are [`diagnostics::ErrorQuery`],
implemented for any `Fn() -> u32`, and [`Bind`], implemented by your resource types.

```
use prgl::{Bind, Binder, Shared};
use std::cell::Cell;

struct Texture {
    name: u32,
    bound: Cell<bool>,
}

impl Bind for Texture {
    fn bind(&self, bound: bool) {
        // gl.bind_texture(TEXTURE_2D, bound.then_some(self.name));
        self.bound.set(bound);
    }
}

let texture = Shared::new(Texture { name: 7, bound: Cell::new(false) });
{
    let bound = Binder::new(&texture);
    assert!(bound.bound.get());
    // glGetError, as your loader exposes it
    let get_error = || prgl::constants::NO_ERROR;
    prgl::check_gl_error!(&get_error);
}
assert!(!texture.bound.get());
```
*/

pub mod binder;
pub mod constants;
pub mod data_type;
pub mod diagnostics;
pub mod error;
mod types;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use binder::{Bind, Binder};
pub use data_type::{DataType, HasDataType, data_type_of};
pub use diagnostics::{ErrorPolicy, check_gl_error};
pub use error::{GlError, UnknownDataType};
pub use types::{Handle, INVALID_HANDLE, Shared};

pub use half::f16;
