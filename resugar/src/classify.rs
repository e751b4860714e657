//! Shape predicates over the input tree.
//!
//! Everything here is a pure read-only test; no node is allocated and
//! nothing is mutated. A non-match is a "skip this node" signal, never
//! an error.

use oxc::ast::ast::{
	Argument, CallExpression, Expression, ObjectExpression, ObjectPropertyKind, PropertyKey,
};

use crate::constants::{
	CHILDREN_PROP, CONTAINER_ALIASES, FRAGMENT_CONTAINERS, FRAGMENT_MEMBERS, MERGE_HELPER,
	PROPS_OBJECT_METHODS, UNDEFINED, VARIADIC_METHODS,
};

/// The two constructor-call conventions this restorer understands.
///
/// "v3" and "v4" follow the ReScript JSX version numbering that produced
/// the respective call shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsxVersion {
	/// The variadic convention: `Container.method(name, props, ...children)`.
	V3,
	/// The props-object convention: `Container.method(name, props)` where
	/// children live under a `children` key inside the props.
	V4,
}

/// Classifies a call expression's calling convention.
///
/// The callee must be a non-computed member access whose object is one of
/// the known container aliases and whose property is one of the known
/// method aliases. Computed access, other callee shapes, and unknown
/// names all yield `None`.
///
/// When `restrict` names a convention, calls matching the other
/// convention also yield `None` instead of cross-matching.
pub fn jsx_version_of(call: &CallExpression<'_>, restrict: Option<JsxVersion>) -> Option<JsxVersion> {
	let Expression::StaticMemberExpression(member) = &call.callee else {
		return None;
	};
	let Expression::Identifier(object) = &member.object else {
		return None;
	};
	if !CONTAINER_ALIASES.contains(&object.name.as_str()) {
		return None;
	}

	let method = member.property.name.as_str();
	let version = if VARIADIC_METHODS.contains(&method) {
		JsxVersion::V3
	} else if PROPS_OBJECT_METHODS.contains(&method) {
		JsxVersion::V4
	} else {
		return None;
	};

	match restrict {
		Some(only) if only != version => None,
		_ => Some(version),
	}
}

/// Tests whether a node is `null` or the `undefined` identifier.
///
/// Both conventions use either spelling to mean "omitted".
pub fn is_null_like(node: &Expression<'_>) -> bool {
	match node {
		Expression::NullLiteral(_) => true,
		Expression::Identifier(ident) => ident.name.as_str() == UNDEFINED,
		_ => false,
	}
}

/// Returns the inner call if `node` is an invocation of the object merge
/// helper, so its arguments can be flattened into one attribute list.
pub fn as_merge_call<'b, 'a>(node: &'b Expression<'a>) -> Option<&'b CallExpression<'a>> {
	let Expression::CallExpression(call) = node else {
		return None;
	};
	match &call.callee {
		Expression::Identifier(ident) if ident.name.as_str() == MERGE_HELPER => Some(&**call),
		_ => None,
	}
}

/// Tests whether a name argument denotes the fragment sentinel.
///
/// Any pairing of a known fragment container with a known fragment member
/// is accepted, so all historical spellings convert.
pub fn is_fragment_name(node: &Expression<'_>) -> bool {
	let Expression::StaticMemberExpression(member) = node else {
		return false;
	};
	let Expression::Identifier(object) = &member.object else {
		return false;
	};
	FRAGMENT_CONTAINERS.contains(&object.name.as_str())
		&& FRAGMENT_MEMBERS.contains(&member.property.name.as_str())
}

/// Tests whether every trailing argument is an empty array literal, an
/// artifact some compiler generations emit for "no children".
///
/// Vacuously true for an empty argument list.
pub fn is_empty_children(args: &[Argument<'_>]) -> bool {
	args.iter().all(|arg| {
		matches!(arg, Argument::ArrayExpression(array) if array.elements.is_empty())
	})
}

/// Tests whether an object property is a `children` entry.
///
/// Only a static (non-computed) identifier key counts; a computed
/// `[children]` key is an ordinary — and invalid — property.
pub fn is_children_prop(prop: &ObjectPropertyKind<'_>) -> bool {
	let ObjectPropertyKind::ObjectProperty(prop) = prop else {
		return false;
	};
	matches!(&prop.key, PropertyKey::StaticIdentifier(ident) if ident.name.as_str() == CHILDREN_PROP)
}

/// Tests whether a props object carries an embedded `children` entry.
pub fn has_children_prop(object: &ObjectExpression<'_>) -> bool {
	object.properties.iter().any(is_children_prop)
}

/// Returns the value of the first `children` entry of a props object.
pub fn children_prop_value<'b, 'a>(
	object: &'b ObjectExpression<'a>,
) -> Option<&'b Expression<'a>> {
	object.properties.iter().find_map(|prop| {
		if !is_children_prop(prop) {
			return None;
		}
		match prop {
			ObjectPropertyKind::ObjectProperty(prop) => Some(&prop.value),
			ObjectPropertyKind::SpreadProperty(_) => None,
		}
	})
}
