//! Shared helpers driving the full parse → restore → print pipeline.
#![allow(dead_code)]

use oxc::{allocator::Allocator, codegen::Codegen, semantic::SemanticBuilder, span::SourceType};
use resugar::JsxVersion;

/// Parses `source`, restores markup (optionally restricted to one
/// convention) and prints the result.
pub fn convert_with(source: &str, restrict: Option<JsxVersion>) -> String {
	let allocator = Allocator::default();
	let parsed = oxc::parser::Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(parsed.errors.is_empty(), "failed to parse input: {source}");
	let mut program = parsed.program;

	let scoping = SemanticBuilder::new()
		.build(&program)
		.semantic
		.into_scoping();
	resugar::transform(&allocator, &mut program, scoping, restrict);

	Codegen::new().build(&program).code
}

/// Parses `source` with both conventions enabled and prints the result.
pub fn convert(source: &str) -> String {
	convert_with(source, None)
}

/// Prints `source` through the same printer without restoring, so
/// expectations never depend on formatting details.
pub fn printed(source: &str) -> String {
	let allocator = Allocator::default();
	let parsed = oxc::parser::Parser::new(&allocator, source, SourceType::jsx()).parse();
	assert!(
		parsed.errors.is_empty(),
		"failed to parse expectation: {source}"
	);
	Codegen::new().build(&parsed.program).code
}

/// Asserts that restoring `source` yields exactly `expected`.
pub fn assert_converts(source: &str, expected: &str) {
	assert_eq!(convert(source), printed(expected), "restoring: {source}");
}

/// Asserts that `source` is left completely untouched.
pub fn assert_untouched(source: &str) {
	assert_eq!(convert(source), printed(source), "expected no rewrite: {source}");
}
