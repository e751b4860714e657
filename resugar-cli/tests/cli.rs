//! End-to-end runs through the CLI pipeline.

use resugar_cli::{Args, run};

/// Default arguments: auto-detect conventions, plain JSX input, stdout.
fn args() -> Args {
	Args {
		output: None,
		jsx: None,
		warnings_as_errors: false,
		typescript: false,
		generate_sourcemaps: false,
		entry_point: None,
	}
}

#[test]
fn restores_markup_end_to_end() {
	let result = run(r#"React.createElement("h1", null, "hey");"#.into(), &args()).unwrap();
	assert!(result.errors.is_empty());
	assert_eq!(result.rewrites, 1);
	assert!(result.code.contains("<h1>hey</h1>"));
}

#[test]
fn counts_top_level_rewrites_only() {
	let source = r#"
		let a = React.createElement("h1");
		let b = JsxRuntime.jsx("h2", {children: JsxRuntime.jsx("i")});
	"#;
	let result = run(source.into(), &args()).unwrap();
	assert!(result.errors.is_empty());
	// The nested call is folded into its parent's rewrite.
	assert_eq!(result.rewrites, 2);
	assert!(result.code.contains("<h2><i /></h2>"));
}

#[test]
fn respects_the_jsx_restriction() {
	let mut restricted = args();
	restricted.jsx = Some("v3".into());
	let result = run(r#"JsxRuntime.jsx("h1");"#.into(), &restricted).unwrap();
	assert!(result.errors.is_empty());
	assert_eq!(result.rewrites, 0);
	assert!(result.code.contains("JsxRuntime.jsx"));
}

#[test]
fn rejects_unknown_jsx_modes() {
	let mut bad = args();
	bad.jsx = Some("v5".into());
	assert!(run("1;".into(), &bad).is_err());
}

#[test]
fn reports_parse_errors() {
	let result = run("let = ;".into(), &args()).unwrap();
	assert!(!result.errors.is_empty());
	assert!(result.code.is_empty());
}

#[test]
fn accepts_typescript_input() {
	let mut ts = args();
	ts.typescript = true;
	let result = run(
		r#"const el: unknown = React.createElement("h1");"#.into(),
		&ts,
	)
	.unwrap();
	assert!(result.errors.is_empty());
	assert!(result.code.contains("<h1 />"));
}
