// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Aliases shared by every resource wrapper.

/// Raw name of an OpenGL object (texture, buffer, shader, program, ...).
pub type Handle = u32;

/// Handle of a shader, texture, etc. that has not been created yet.
///
/// OpenGL never hands out the name 0 from `glGen*`/`glCreate*`.
pub const INVALID_HANDLE: Handle = 0;

/// Shared-ownership pointer that resources are held behind.
///
/// [`crate::Binder`] borrows one of these for the length of a scope.
pub type Shared<T> = std::sync::Arc<T>;
