//! Restoration of the props-object ("v4") convention:
//! `Container.jsx(name, props)` with children embedded in the props.

mod common;

use common::assert_converts;

#[test]
fn supports_all_constructor_aliases() {
	assert_converts(r#"JsxRuntime.jsx("h1")"#, "<h1 />;");
	assert_converts(r#"JsxRuntime.jsxs("h1")"#, "<h1 />;");
	assert_converts(r#"JsxRuntime.jsxDEV("h1")"#, "<h1 />;");
}

#[test]
fn converts_one_argument_calls() {
	assert_converts("JsxRuntime.jsx(Foo)", "<Foo />;");
	assert_converts("JsxRuntime.jsx(Foo.Bar)", "<Foo.Bar />;");
	assert_converts("JsxRuntime.jsx(Foo.Bar.Baz)", "<Foo.Bar.Baz />;");
}

#[test]
fn handles_props_without_children() {
	assert_converts(r#"JsxRuntime.jsx("h1", {hi: there})"#, "<h1 hi={there} />;");
	assert_converts(r#"JsxRuntime.jsx("h2", {"hi": there})"#, "<h2 hi={there} />;");
	assert_converts(
		r#"JsxRuntime.jsx("h3", {hi: "there"})"#,
		r#"<h3 hi="there" />;"#,
	);
}

#[test]
fn handles_spread_props() {
	assert_converts(r#"JsxRuntime.jsx("h1", props)"#, "<h1 {...props} />;");
	assert_converts(
		r#"JsxRuntime.jsx("h1", getProps())"#,
		"<h1 {...getProps()} />;",
	);
}

#[test]
fn flattens_merged_props_in_order() {
	assert_converts(
		r#"JsxRuntime.jsx("h1", _extends({ hi: "there" }, props))"#,
		r#"<h1 hi="there" {...props} />;"#,
	);
	assert_converts(
		r#"JsxRuntime.jsx("h1", _extends({}, props, { hi: "there" }))"#,
		r#"<h1 {...props} hi="there" />;"#,
	);
	assert_converts(
		r#"JsxRuntime.jsx("h1", { ...props, hi: "there" })"#,
		r#"<h1 {...props} hi="there" />;"#,
	);
}

#[test]
fn unfolds_a_single_embedded_child() {
	assert_converts(
		r#"JsxRuntime.jsx("h1", {hi: there, children: "Header"})"#,
		"<h1 hi={there}>Header</h1>;",
	);
}

#[test]
fn unfolds_embedded_child_arrays() {
	assert_converts(
		r#"JsxRuntime.jsx("h1", {hi: there, children: ["Header", " Footer"]})"#,
		"<h1 hi={there}>Header Footer</h1>;",
	);
	assert_converts(
		r#"JsxRuntime.jsx("h1", {hi: there, children: ["Header", JsxRuntime.jsx("div", {children: "Child"})]})"#,
		"<h1 hi={there}>Header<div>Child</div></h1>;",
	);
}

#[test]
fn restores_calls_nested_in_child_expressions() {
	assert_converts(
		r#"JsxRuntime.jsx("h1", {children: foo ? JsxRuntime.jsx("p") : null})"#,
		"<h1>{foo ? <p /> : null}</h1>;",
	);
}

#[test]
fn keeps_null_like_embedded_children() {
	// Unlike the variadic convention, embedded children are never
	// filtered.
	assert_converts(
		r#"JsxRuntime.jsx("h1", {children: [null]})"#,
		"<h1>{null}</h1>;",
	);
}

#[test]
fn unfolds_fragment_children() {
	assert_converts(
		r#"JsxRuntime.jsx(JsxRuntime.Fragment, {children: ["a", JsxRuntime.jsx("b", {children: "c"})]})"#,
		"<>a<b>c</b></>;",
	);
}

#[test]
fn spread_props_mean_no_embedded_children() {
	assert_converts(r#"JsxRuntime.jsx("h1", props)"#, "<h1 {...props} />;");
}
