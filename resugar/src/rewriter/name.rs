//! Resolution of a constructor's type argument into a markup tag name.

use std::cell::Cell;

use oxc::{
	allocator::{Box, CloneIn},
	ast::ast::{
		Expression, IdentifierReference, JSXElementName, JSXIdentifier, JSXMemberExpression,
		JSXMemberExpressionObject,
	},
};

use super::ResugarTraverser;

impl<'a> ResugarTraverser<'a> {
	/// Resolves a name argument into an element name.
	///
	/// Identifiers are component references; string literals are accepted
	/// because some compiler generations encode lowercase host-element
	/// names as literals. Non-computed member accesses resolve
	/// recursively into dotted names of arbitrary depth. Anything else is
	/// unresolvable, which aborts the enclosing translation.
	pub(crate) fn resolve_name(&self, node: &Expression<'a>) -> Option<JSXElementName<'a>> {
		match node {
			Expression::Identifier(ident) => Some(JSXElementName::IdentifierReference(
				ident.clone_in(self.allocator),
			)),
			Expression::StringLiteral(lit) => Some(JSXElementName::Identifier(Box::new_in(
				JSXIdentifier {
					span: lit.span,
					name: lit.value,
				},
				self.allocator,
			))),
			Expression::StaticMemberExpression(member) => {
				let object = self.resolve_name_object(&member.object)?;
				Some(JSXElementName::MemberExpression(Box::new_in(
					JSXMemberExpression {
						span: member.span,
						object,
						property: JSXIdentifier {
							span: member.property.span,
							name: member.property.name,
						},
					},
					self.allocator,
				)))
			}
			_ => None,
		}
	}

	/// Resolves the object side of a dotted name.
	fn resolve_name_object(
		&self,
		node: &Expression<'a>,
	) -> Option<JSXMemberExpressionObject<'a>> {
		match node {
			Expression::Identifier(ident) => Some(JSXMemberExpressionObject::IdentifierReference(
				ident.clone_in(self.allocator),
			)),
			Expression::StringLiteral(lit) => {
				Some(JSXMemberExpressionObject::IdentifierReference(Box::new_in(
					IdentifierReference {
						span: lit.span,
						name: lit.value,
						reference_id: Cell::new(None),
					},
					self.allocator,
				)))
			}
			Expression::StaticMemberExpression(member) => {
				let object = self.resolve_name_object(&member.object)?;
				Some(JSXMemberExpressionObject::MemberExpression(Box::new_in(
					JSXMemberExpression {
						span: member.span,
						object,
						property: JSXIdentifier {
							span: member.property.span,
							name: member.property.name,
						},
					},
					self.allocator,
				)))
			}
			_ => None,
		}
	}
}
