//! The recognition-and-rewrite driver.
//!
//! [`ResugarTraverser::translate`] is the single decision point: given a
//! call expression it either produces one complete markup node or reports
//! that the call is not translatable. There is no partial success — a
//! failure anywhere (name, one prop, one child) leaves the whole call
//! untouched in the tree.

mod children;
mod name;
mod oxc_impl;
mod props;

use oxc::{
	allocator::{Allocator, Box, CloneIn, Vec},
	ast::ast::{
		Argument, CallExpression, Expression, JSXAttributeItem, JSXChild, JSXClosingElement,
		JSXClosingFragment, JSXElement, JSXElementName, JSXFragment, JSXOpeningElement,
		JSXOpeningFragment,
	},
	span::Span,
};

use crate::classify::{self, JsxVersion};

/// Traverser that restores markup from constructor calls.
pub struct ResugarTraverser<'a> {
	/// When set, only calls of this convention are matched; the other
	/// convention's shapes are left untouched.
	pub restrict: Option<JsxVersion>,
	/// How many call expressions were replaced with markup.
	pub rewrites: usize,
	/// The underlying Bumpalo allocator.
	pub allocator: &'a Allocator,
}

impl<'a> ResugarTraverser<'a> {
	/// Creates a new traverser using the given Bumpalo allocator.
	pub fn new_in(restrict: Option<JsxVersion>, allocator: &'a Allocator) -> Self {
		Self {
			restrict,
			rewrites: 0,
			allocator,
		}
	}

	/// Translates one constructor call into a markup expression.
	///
	/// Returns `None` whenever the call does not match a translatable
	/// shape; the caller must then leave the original node unmodified.
	/// On success the result is always a `JSXElement` or `JSXFragment`
	/// expression.
	pub fn translate(&self, call: &CallExpression<'a>) -> Option<Expression<'a>> {
		let version = classify::jsx_version_of(call, self.restrict)?;

		// The name argument is mandatory; a spread can never name an element.
		let name_arg = match call.arguments.first() {
			None | Some(Argument::SpreadElement(_)) => return None,
			Some(arg) => arg.to_expression(),
		};
		let name = self.resolve_name(name_arg)?;

		let children = match version {
			JsxVersion::V3 => {
				self.variadic_children(call.arguments.get(2..).unwrap_or(&[]))?
			}
			JsxVersion::V4 => {
				let props = call.arguments.get(1).and_then(|arg| match arg {
					Argument::SpreadElement(_) => None,
					arg => Some(arg.to_expression()),
				});
				self.props_object_children(props)?
			}
		};

		// Fragments carry no attributes: whatever sits in the props slot
		// is discarded, valid or not.
		if classify::is_fragment_name(name_arg) {
			return Some(self.fragment(call.span, children));
		}

		let attributes = match call.arguments.get(1) {
			Some(Argument::SpreadElement(_)) => return None,
			Some(arg) => {
				let props = arg.to_expression();
				match (version, props) {
					// The embedded children entry must not also surface
					// as an attribute.
					(JsxVersion::V4, Expression::ObjectExpression(object))
						if classify::has_children_prop(object) =>
					{
						self.object_props(
							object
								.properties
								.iter()
								.filter(|prop| !classify::is_children_prop(prop)),
						)?
					}
					_ => self.resolve_props(Some(props))?,
				}
			}
			None => self.resolve_props(None)?,
		};

		Some(self.element(call.span, name, attributes, children))
	}

	/// Assembles an element node; self-closing exactly when childless.
	fn element(
		&self,
		span: Span,
		name: JSXElementName<'a>,
		attributes: Vec<'a, JSXAttributeItem<'a>>,
		children: Vec<'a, JSXChild<'a>>,
	) -> Expression<'a> {
		let self_closing = children.is_empty();
		let closing_element = if self_closing {
			None
		} else {
			Some(Box::new_in(
				JSXClosingElement {
					span,
					name: name.clone_in(self.allocator),
				},
				self.allocator,
			))
		};

		Expression::JSXElement(Box::new_in(
			JSXElement {
				span,
				opening_element: Box::new_in(
					JSXOpeningElement {
						span,
						name,
						attributes,
						self_closing,
						type_arguments: None,
					},
					self.allocator,
				),
				closing_element,
				children,
			},
			self.allocator,
		))
	}

	/// Assembles a fragment node wrapping the given children.
	fn fragment(&self, span: Span, children: Vec<'a, JSXChild<'a>>) -> Expression<'a> {
		Expression::JSXFragment(Box::new_in(
			JSXFragment {
				span,
				opening_fragment: JSXOpeningFragment { span },
				closing_fragment: JSXClosingFragment { span },
				children,
			},
			self.allocator,
		))
	}
}
