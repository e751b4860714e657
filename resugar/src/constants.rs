//! Holds the alias tables consulted by the call classifiers.
//!
//! Several compiler generations emitted the same element-construction
//! calls under different container and method names. Each table is a
//! closed enumeration; supporting another historical spelling is a
//! one-line addition here, not a new code path.

/// Names the constructor container has been known by.
pub const CONTAINER_ALIASES: &[&str] = &["JsxRuntime", "React", "ReactDOM", "ReactDOMRe"];

/// Method names of the variadic ("v3") convention:
/// `Container.method(name, props, ...children)`.
pub const VARIADIC_METHODS: &[&str] = &[
	"createElement",
	"createElementVariadic",
	"createDOMElementVariadic",
];

/// Method names of the props-object ("v4") convention:
/// `Container.method(name, props)` with children folded into the props.
pub const PROPS_OBJECT_METHODS: &[&str] = &["jsx", "jsxs", "jsxDEV"];

/// Container names under which a fragment sentinel may be referenced.
pub const FRAGMENT_CONTAINERS: &[&str] = &["JsxRuntime", "ReasonReact", "React"];

/// Member names denoting the fragment sentinel.
pub const FRAGMENT_MEMBERS: &[&str] = &["Fragment", "fragment", "jsxFragment"];

/// The shallow left-to-right object merge helper emitted for spread props.
pub const MERGE_HELPER: &str = "_extends";

/// The props key carrying embedded children in the props-object convention.
pub const CHILDREN_PROP: &str = "children";

/// The identifier treated as a null sentinel alongside `null` itself.
pub const UNDEFINED: &str = "undefined";
