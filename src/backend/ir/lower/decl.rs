//! Declaration lowering: the per-function entry point and the program walk.

use bramble_syntax::ast::{Declaration, FunctionDecl, Program, Statement};

use super::errors::LoweringError;
use super::{FunctionLowering, LoweredFunction, LoweringConfig};

/// Lower the body of one function.
///
/// # Returns
///
/// The command list, the number of locals it uses and any warnings.
///
/// # Errors
///
/// Returns [`LoweringError::NotImplemented`] as soon as the body contains a construct lowering has no rule for.
/// Nothing of the partially lowered body is returned in that case.
#[tracing::instrument(skip_all, fields(function = %function.name))]
pub fn lower_function(function: &FunctionDecl, config: &LoweringConfig) -> Result<LoweredFunction, LoweringError> {
    let mut lowering = FunctionLowering::new(config, function.name.span);
    if let Err(error) = lowering.lower_block(&function.body) {
        tracing::debug!(%error, "lowering aborted");
        return Err(error);
    }

    Ok(LoweredFunction {
        name: function.name.node.clone(),
        locals: lowering.slots.used(),
        commands: lowering.commands,
        diagnostics: lowering.diagnostics,
    })
}

/// Lower every function declared at the top level of `program`.
///
/// Exported and decorated functions are included. Each function gets its own result, in source order, so one
/// function that cannot be lowered does not hide the others.
#[tracing::instrument(skip_all, fields(function_count = tracing::field::Empty))]
pub fn lower_program(program: &Program, config: &LoweringConfig) -> Vec<Result<LoweredFunction, LoweringError>> {
    let functions = collect_functions(program);
    tracing::Span::current().record("function_count", functions.len());

    functions
        .into_iter()
        .map(|function| lower_function(function, config))
        .collect()
}

fn collect_functions(program: &Program) -> Vec<&FunctionDecl> {
    let mut functions = Vec::new();
    for statement in &program.statements {
        match statement {
            Statement::Function(function) => functions.push(function),
            Statement::Export(declaration) => collect_declared(declaration, &mut functions),
            Statement::Decorator(decorator) => collect_declared(&decorator.target, &mut functions),
            _ => {}
        }
    }
    functions
}

/// Unwrap decorator chains down to the declaration they decorate.
fn collect_declared<'p>(declaration: &'p Declaration, functions: &mut Vec<&'p FunctionDecl>) {
    match declaration {
        Declaration::Function(function) => functions.push(function),
        Declaration::Decorator(decorator) => collect_declared(&decorator.target, functions),
        Declaration::Variable(_) | Declaration::Class(_) | Declaration::Macro(_) => {}
    }
}
