//! Argument dispatcher - invokes a registered operation with its declared call shape
//!
//! Call shapes are resolved when the registry is built, so dispatch is a
//! direct match instead of trial-and-error invocation. The dispatcher never
//! inspects what an operation produces; operations mutate the state they are
//! bound to and only report success or failure.

use crate::core::args::{ArgError, ArgSpec};
use crate::core::blueprint::Blueprint;
use crate::core::error::PipelineError;
use crate::core::registry::{Binding, InvokeError, OperationEntry};

/// Invoke the entry's bound operation against the blueprint.
pub fn invoke<B: Blueprint>(
    entry: &OperationEntry<B>,
    blueprint: &mut B,
) -> Result<(), PipelineError> {
    let result = match (&entry.call, &entry.args) {
        (Binding::Nullary(op), ArgSpec::None) => op(blueprint),
        (Binding::Unary(op), ArgSpec::Scalar(value)) => op(blueprint, value),
        (Binding::Variadic(op), ArgSpec::Tuple(values)) => op(blueprint, values),
        (call, args) => Err(InvokeError::Arguments(ArgError::ShapeMismatch {
            operation: call.shape_name(),
            spec: args.shape_name(),
        })),
    };

    result.map_err(|e| match e {
        InvokeError::Arguments(source) => PipelineError::Arguments {
            step: entry.name,
            source,
        },
        InvokeError::Step(source) => PipelineError::Step {
            step: entry.name,
            source,
        },
    })
}
