//! Argument model for registered operations
//!
//! Argument specifications are declared heterogeneously in the step catalog:
//! some steps take nothing, some a single flag or threshold, some a fixed
//! tuple of positional values. The tagged [`ArgSpec`] resolves that shape at
//! registration time; the checked [`ArgValue`] accessors cover the remaining
//! value-level decoding.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single declared argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgValue {
    /// An intentionally absent optional value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Argument specification for one registered operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArgSpec {
    /// Call with no arguments
    None,
    /// Call with one positional value
    Scalar(ArgValue),
    /// Call with a fixed tuple of positional values
    Tuple(Vec<ArgValue>),
}

/// Error decoding a declared argument value at call time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("expected {expected} argument, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected {expected} positional arguments, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("argument out of range: {0}")]
    OutOfRange(String),

    #[error("call shape mismatch: operation is {operation}, spec is {spec}")]
    ShapeMismatch {
        operation: &'static str,
        spec: &'static str,
    },
}

impl ArgValue {
    /// Name of this value's variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Null => "null",
            ArgValue::Bool(_) => "bool",
            ArgValue::Int(_) => "int",
            ArgValue::Float(_) => "float",
            ArgValue::Str(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Result<bool, ArgError> {
        match self {
            ArgValue::Bool(b) => Ok(*b),
            other => Err(ArgError::TypeMismatch {
                expected: "bool",
                found: other.type_name(),
            }),
        }
    }

    pub fn as_float(&self) -> Result<f64, ArgError> {
        match self {
            ArgValue::Float(f) => Ok(*f),
            other => Err(ArgError::TypeMismatch {
                expected: "float",
                found: other.type_name(),
            }),
        }
    }

    pub fn as_usize(&self) -> Result<usize, ArgError> {
        match self {
            ArgValue::Int(i) if *i >= 0 => Ok(*i as usize),
            ArgValue::Int(i) => Err(ArgError::OutOfRange(format!(
                "{i} is negative, expected a count"
            ))),
            other => Err(ArgError::TypeMismatch {
                expected: "int",
                found: other.type_name(),
            }),
        }
    }

    pub fn as_str(&self) -> Result<&str, ArgError> {
        match self {
            ArgValue::Str(s) => Ok(s),
            other => Err(ArgError::TypeMismatch {
                expected: "string",
                found: other.type_name(),
            }),
        }
    }

    /// Null becomes `None`; a string becomes `Some`.
    pub fn as_opt_str(&self) -> Result<Option<&str>, ArgError> {
        match self {
            ArgValue::Null => Ok(None),
            ArgValue::Str(s) => Ok(Some(s)),
            other => Err(ArgError::TypeMismatch {
                expected: "string or null",
                found: other.type_name(),
            }),
        }
    }

    /// Null becomes `None`; a float becomes `Some`.
    pub fn as_opt_float(&self) -> Result<Option<f64>, ArgError> {
        match self {
            ArgValue::Null => Ok(None),
            ArgValue::Float(f) => Ok(Some(*f)),
            other => Err(ArgError::TypeMismatch {
                expected: "float or null",
                found: other.type_name(),
            }),
        }
    }
}

/// Check a tuple spec's length before indexing into it.
pub fn expect_arity(args: &[ArgValue], expected: usize) -> Result<(), ArgError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ArgError::Arity {
            expected,
            found: args.len(),
        })
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Null => write!(f, "null"),
            ArgValue::Bool(b) => write!(f, "{b}"),
            ArgValue::Int(i) => write!(f, "{i}"),
            ArgValue::Float(v) => write!(f, "{v}"),
            ArgValue::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

impl ArgSpec {
    /// Name of this spec's shape, for mismatch errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            ArgSpec::None => "none",
            ArgSpec::Scalar(_) => "scalar",
            ArgSpec::Tuple(_) => "tuple",
        }
    }
}

impl fmt::Display for ArgSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgSpec::None => write!(f, "none"),
            ArgSpec::Scalar(value) => write!(f, "{value}"),
            ArgSpec::Tuple(values) => {
                write!(f, "(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ")")
            }
        }
    }
}
