// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
use crate::constants;
use logwise::LogRecord;
use logwise::privacy::Loggable;

/// An error flag reported by `glGetError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum GlError {
    #[error("GL_INVALID_ENUM")]
    InvalidEnum,
    #[error("GL_INVALID_VALUE")]
    InvalidValue,
    #[error("GL_INVALID_OPERATION")]
    InvalidOperation,
    #[error("GL_STACK_OVERFLOW")]
    StackOverflow,
    #[error("GL_STACK_UNDERFLOW")]
    StackUnderflow,
    #[error("GL_OUT_OF_MEMORY")]
    OutOfMemory,
    #[error("GL_INVALID_FRAMEBUFFER_OPERATION")]
    InvalidFramebufferOperation,
    #[error("GL_CONTEXT_LOST")]
    ContextLost,
    /// A code this crate does not know, e.g. from a vendor extension.
    #[error("unknown GL error {0:#06x}")]
    Unknown(u32),
}

impl GlError {
    /// Interprets a `glGetError` result.  `GL_NO_ERROR` is `None`.
    pub const fn from_code(code: u32) -> Option<GlError> {
        Some(match code {
            constants::NO_ERROR => return None,
            constants::INVALID_ENUM => GlError::InvalidEnum,
            constants::INVALID_VALUE => GlError::InvalidValue,
            constants::INVALID_OPERATION => GlError::InvalidOperation,
            constants::STACK_OVERFLOW => GlError::StackOverflow,
            constants::STACK_UNDERFLOW => GlError::StackUnderflow,
            constants::OUT_OF_MEMORY => GlError::OutOfMemory,
            constants::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            constants::CONTEXT_LOST => GlError::ContextLost,
            other => GlError::Unknown(other),
        })
    }

    /// The raw code, as `glGetError` returned it.
    pub const fn code(self) -> u32 {
        match self {
            GlError::InvalidEnum => constants::INVALID_ENUM,
            GlError::InvalidValue => constants::INVALID_VALUE,
            GlError::InvalidOperation => constants::INVALID_OPERATION,
            GlError::StackOverflow => constants::STACK_OVERFLOW,
            GlError::StackUnderflow => constants::STACK_UNDERFLOW,
            GlError::OutOfMemory => constants::OUT_OF_MEMORY,
            GlError::InvalidFramebufferOperation => constants::INVALID_FRAMEBUFFER_OPERATION,
            GlError::ContextLost => constants::CONTEXT_LOST,
            GlError::Unknown(code) => code,
        }
    }
}

/// GL error names are public; they are logged in full under redaction.
impl Loggable for GlError {
    fn log_redacting_private_info(&self, record: &mut LogRecord) {
        self.log_all(record);
    }
    fn log_all(&self, record: &mut LogRecord) {
        record.log_owned(self.to_string());
    }
}

/// A raw value that is not one of the nine GL data type constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0:#06x} is not a GL data type")]
pub struct UnknownDataType(pub u32);
