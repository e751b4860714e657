//! Traversal adapter: hooks the rewrite driver into the tree walk.

use oxc::ast::ast::{Expression, JSXExpression};
use oxc_traverse::{Traverse, TraverseCtx};

use super::ResugarTraverser;

impl<'a> Traverse<'a> for ResugarTraverser<'a> {
	fn enter_expression(&mut self, node: &mut Expression<'a>, _ctx: &mut TraverseCtx<'a>) {
		let Expression::CallExpression(call) = node else {
			return;
		};
		if let Some(markup) = self.translate(call) {
			// Replacing on enter lets the walker descend into the
			// produced markup, so constructor calls nested inside
			// untranslated subexpressions are restored on the same pass.
			*node = markup;
			self.rewrites += 1;
		}
	}

	fn enter_jsx_expression(&mut self, node: &mut JSXExpression<'a>, _ctx: &mut TraverseCtx<'a>) {
		let JSXExpression::CallExpression(call) = node else {
			return;
		};
		if let Some(markup) = self.translate(call) {
			*node = markup.into();
			self.rewrites += 1;
		}
	}
}
