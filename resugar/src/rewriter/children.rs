//! Normalization of children under both calling conventions.
//!
//! The variadic convention carries children as trailing call arguments;
//! the props-object convention folds them into a `children` entry of the
//! props. Both feed the same per-child conversion.

use oxc::{
	allocator::{Box, CloneIn, Vec},
	ast::ast::{
		Argument, ArrayExpressionElement, Expression, JSXChild, JSXExpressionContainer, JSXText,
	},
	span::GetSpan,
};

use super::ResugarTraverser;
use crate::classify;

impl<'a> ResugarTraverser<'a> {
	/// Converts the trailing arguments of a variadic-convention call.
	///
	/// Null-like arguments are dropped; every remaining argument must
	/// convert, otherwise the whole call's translation aborts.
	pub(crate) fn variadic_children(
		&self,
		args: &[Argument<'a>],
	) -> Option<Vec<'a, JSXChild<'a>>> {
		// Some generations emit `[]` placeholders for "no children";
		// a run of them counts as zero children without inspection.
		if classify::is_empty_children(args) {
			return Some(Vec::new_in(self.allocator));
		}

		let mut children = Vec::new_in(self.allocator);
		for arg in args {
			let expr = match arg {
				Argument::SpreadElement(_) => return None,
				arg => arg.to_expression(),
			};
			if classify::is_null_like(expr) {
				continue;
			}
			children.push(self.child_of(expr)?);
		}
		Some(children)
	}

	/// Converts the `children` entry embedded in a props-object call.
	///
	/// A props argument that is missing, not an object literal, or has no
	/// `children` key means zero children. An array value converts
	/// element-wise; a single value converts alone. Null-like entries are
	/// kept as expression children here — this convention never filtered
	/// them.
	pub(crate) fn props_object_children(
		&self,
		props: Option<&Expression<'a>>,
	) -> Option<Vec<'a, JSXChild<'a>>> {
		let Some(Expression::ObjectExpression(object)) = props else {
			return Some(Vec::new_in(self.allocator));
		};
		let Some(value) = classify::children_prop_value(object) else {
			return Some(Vec::new_in(self.allocator));
		};

		match value {
			Expression::ArrayExpression(array) => {
				let mut children = Vec::with_capacity_in(array.elements.len(), self.allocator);
				for element in &array.elements {
					let expr = match element {
						ArrayExpressionElement::SpreadElement(_)
						| ArrayExpressionElement::Elision(_) => return None,
						element => element.to_expression(),
					};
					children.push(self.child_of(expr)?);
				}
				Some(children)
			}
			value => {
				let mut children = Vec::with_capacity_in(1, self.allocator);
				children.push(self.child_of(value)?);
				Some(children)
			}
		}
	}

	/// Converts one child expression.
	///
	/// String literals become text children; recognized constructor calls
	/// recurse through [`ResugarTraverser::translate`] so nested calls
	/// come out as nested markup; any other expression is wrapped in a
	/// container. A recognized call that fails to translate aborts.
	fn child_of(&self, node: &Expression<'a>) -> Option<JSXChild<'a>> {
		match node {
			Expression::StringLiteral(lit) => {
				// The printer emits the raw text; pinning it to the
				// literal's value keeps the source bytes from being
				// re-escaped.
				Some(JSXChild::Text(Box::new_in(
					JSXText {
						span: lit.span,
						value: lit.value,
						raw: Some(lit.value),
					},
					self.allocator,
				)))
			}
			Expression::CallExpression(call)
				if classify::jsx_version_of(call, self.restrict).is_some() =>
			{
				match self.translate(call)? {
					Expression::JSXElement(element) => Some(JSXChild::Element(element)),
					Expression::JSXFragment(fragment) => Some(JSXChild::Fragment(fragment)),
					_ => unreachable!("translate produces only markup expressions"),
				}
			}
			_ => Some(JSXChild::ExpressionContainer(Box::new_in(
				JSXExpressionContainer {
					span: node.span(),
					expression: node.clone_in(self.allocator).into(),
				},
				self.allocator,
			))),
		}
	}
}
