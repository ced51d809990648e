//! Statement lowering.
//!
//! Only expression statements produce commands. Recovery placeholders are skipped, and every other statement
//! kind is not implemented yet.

use bramble_syntax::ast::{Expr, Span, Statement};
use bramble_syntax::diagnostics::errors;

use super::FunctionLowering;
use super::errors::LoweringError;
use super::expr::Evaluated;

impl FunctionLowering<'_> {
    pub(super) fn lower_block(&mut self, body: &[Statement]) -> Result<(), LoweringError> {
        for statement in body {
            self.lower_statement(statement)?;
        }
        Ok(())
    }

    fn lower_statement(&mut self, statement: &Statement) -> Result<(), LoweringError> {
        match statement {
            Statement::Noop => Ok(()),
            Statement::Expression(expr) => self.lower_expression_statement(expr),
            other => Err(LoweringError::not_implemented(
                format!("{} statement", statement_kind(other)),
                statement_span(other).unwrap_or(self.fallback_span),
            )),
        }
    }

    /// Lower `expr` for its effects.
    ///
    /// A statement without a call in it cannot have an effect. It is reported and its commands are dropped.
    fn lower_expression_statement(&mut self, expr: &Expr) -> Result<(), LoweringError> {
        match self.evaluate(expr)? {
            Evaluated::Lowered(commands) if has_effect(expr) => self.commands.extend(commands),
            Evaluated::Lowered(_) | Evaluated::Pure(_) => self.diagnostics.push(errors::no_effect(expr.span())),
        }
        Ok(())
    }
}

/// Calls are the only side effects lowering can produce.
fn has_effect(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) => true,
        Expr::Binary { left, right, .. } => has_effect(left) || has_effect(right),
        _ => false,
    }
}

fn statement_kind(statement: &Statement) -> &'static str {
    match statement {
        Statement::Noop => "empty",
        Statement::Export(_) => "export",
        Statement::Intrinsic(_) => "intrinsic",
        Statement::Decorator(_) => "decorator",
        Statement::Return(_) => "return",
        Statement::Break => "break",
        Statement::Continue => "continue",
        Statement::While { .. } => "while",
        Statement::DoWhile { .. } => "do-while",
        Statement::If { .. } => "if",
        Statement::For(_) => "for",
        Statement::Loop(_) => "loop",
        Statement::Match(_) => "match",
        Statement::Scope(_) => "block",
        Statement::Macro(_) => "macro",
        Statement::Import(_) | Statement::ImportDefault(_) => "import",
        Statement::Class(_) => "class",
        Statement::Function(_) => "function",
        Statement::Variable(_) => "variable",
        Statement::Expression(_) => "expression",
    }
}

/// Best source anchor for a statement. Statements keep no span of their own.
fn statement_span(statement: &Statement) -> Option<Span> {
    match statement {
        Statement::Return(Some(expr))
        | Statement::While { condition: expr, .. }
        | Statement::DoWhile { condition: expr, .. }
        | Statement::If { condition: expr, .. }
        | Statement::Expression(expr) => Some(expr.span()),
        Statement::For(for_stmt) => Some(for_stmt.condition.span()),
        Statement::Match(match_stmt) => Some(match_stmt.value.span()),
        Statement::Intrinsic(code) => Some(code.span),
        Statement::Macro(macro_decl) => Some(macro_decl.name.span),
        Statement::Class(class) => Some(class.name.span),
        Statement::Function(function) => Some(function.name.span),
        Statement::Variable(variable) => variable.bindings.first().map(|binding| binding.name.span),
        Statement::Loop(body) | Statement::Scope(body) => body.iter().find_map(statement_span),
        _ => None,
    }
}
