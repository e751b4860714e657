//! Normalization of a props argument into an ordered attribute list.

use oxc::{
	allocator::{Box, CloneIn, Vec},
	ast::ast::{
		Argument, CallExpression, Expression, JSXAttribute, JSXAttributeItem, JSXAttributeName,
		JSXAttributeValue, JSXExpressionContainer, JSXIdentifier, JSXSpreadAttribute,
		ObjectPropertyKind, PropertyKey, PropertyKind,
	},
	span::GetSpan,
};

use super::ResugarTraverser;
use crate::classify;

/// Resolves a property key into an attribute name.
///
/// Static identifiers and string-literal keys qualify; everything else
/// (notably computed keys) invalidates the whole props object.
fn key_identifier<'a>(key: &PropertyKey<'a>) -> Option<JSXIdentifier<'a>> {
	match key {
		PropertyKey::StaticIdentifier(ident) => Some(JSXIdentifier {
			span: ident.span,
			name: ident.name,
		}),
		PropertyKey::StringLiteral(lit) => Some(JSXIdentifier {
			span: lit.span,
			name: lit.value,
		}),
		_ => None,
	}
}

impl<'a> ResugarTraverser<'a> {
	/// Converts a props argument into markup attributes, in source order.
	///
	/// An absent or null-like argument is validly empty. A merge-helper
	/// call is flattened argument-by-argument so spread-derived props
	/// come out as an ordered attribute list; same-named attributes are
	/// deliberately not deduplicated — order alone decides which wins at
	/// render time. Any other non-object expression becomes a single
	/// opaque spread. Returns `None` only for an object literal with a
	/// property that has no attribute form.
	pub(crate) fn resolve_props(
		&self,
		node: Option<&Expression<'a>>,
	) -> Option<Vec<'a, JSXAttributeItem<'a>>> {
		let Some(node) = node else {
			return Some(Vec::new_in(self.allocator));
		};
		if classify::is_null_like(node) {
			return Some(Vec::new_in(self.allocator));
		}

		if let Some(merge) = classify::as_merge_call(node) {
			if let Some(flattened) = self.flatten_merge(merge) {
				return Some(flattened);
			}
			// A merge call whose pieces do not all flatten can still
			// stand as a single opaque spread below.
		}

		match node {
			Expression::ObjectExpression(object) => self.object_props(object.properties.iter()),
			_ => {
				let mut items = Vec::with_capacity_in(1, self.allocator);
				items.push(self.spread_attribute(node));
				Some(items)
			}
		}
	}

	/// Flattens a merge-helper call into one attribute list, left to
	/// right. Fails if any argument fails to resolve.
	fn flatten_merge(&self, call: &CallExpression<'a>) -> Option<Vec<'a, JSXAttributeItem<'a>>> {
		let mut items = Vec::new_in(self.allocator);
		for arg in &call.arguments {
			let expr = match arg {
				Argument::SpreadElement(_) => return None,
				arg => arg.to_expression(),
			};
			items.extend(self.resolve_props(Some(expr))?);
		}
		Some(items)
	}

	/// Converts object-literal properties into attributes, in order.
	pub(crate) fn object_props<'b>(
		&self,
		properties: impl Iterator<Item = &'b ObjectPropertyKind<'a>>,
	) -> Option<Vec<'a, JSXAttributeItem<'a>>>
	where
		'a: 'b,
	{
		let mut items = Vec::new_in(self.allocator);
		for prop in properties {
			match prop {
				ObjectPropertyKind::SpreadProperty(spread) => {
					items.push(self.spread_attribute(&spread.argument));
				}
				ObjectPropertyKind::ObjectProperty(prop) => {
					// Computed keys, methods and accessors have no
					// attribute form.
					if prop.computed || prop.method || !matches!(prop.kind, PropertyKind::Init) {
						return None;
					}
					let name = key_identifier(&prop.key)?;
					let value = self.attribute_value(&prop.value);
					items.push(JSXAttributeItem::Attribute(Box::new_in(
						JSXAttribute {
							span: prop.span,
							name: JSXAttributeName::Identifier(Box::new_in(name, self.allocator)),
							value: Some(value),
						},
						self.allocator,
					)));
				}
			}
		}
		Some(items)
	}

	/// Wraps one expression as a spread attribute.
	fn spread_attribute(&self, argument: &Expression<'a>) -> JSXAttributeItem<'a> {
		JSXAttributeItem::SpreadAttribute(Box::new_in(
			JSXSpreadAttribute {
				span: argument.span(),
				argument: argument.clone_in(self.allocator),
			},
			self.allocator,
		))
	}

	/// Converts a property value into an attribute value.
	///
	/// String literals keep their raw form; a value that already is
	/// markup passes through unchanged; everything else is wrapped in an
	/// expression container.
	fn attribute_value(&self, node: &Expression<'a>) -> JSXAttributeValue<'a> {
		match node {
			Expression::StringLiteral(lit) => {
				JSXAttributeValue::StringLiteral(lit.clone_in(self.allocator))
			}
			Expression::JSXElement(element) => {
				JSXAttributeValue::Element(element.clone_in(self.allocator))
			}
			_ => JSXAttributeValue::ExpressionContainer(Box::new_in(
				JSXExpressionContainer {
					span: node.span(),
					expression: node.clone_in(self.allocator).into(),
				},
				self.allocator,
			)),
		}
	}
}
