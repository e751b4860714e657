//! High level CLI-as-a-library for the Resugar restorer.
//!
//! This is directly called to by the `resugar` CLI binary and by the
//! integration tests; it is the whole pipeline minus argument parsing
//! and I/O.
use std::sync::Arc;

use clap::Parser;
use oxc::{
	allocator::Allocator,
	codegen::{Codegen, CodegenOptions},
	diagnostics::Severity,
	semantic::SemanticBuilder,
	span::SourceType,
};
use resugar::JsxVersion;

/// The Resugar createElement-to-JSX restorer.
#[derive(Debug, Parser)]
pub struct Args {
	/// Where to output the restored source. Defaults to
	/// stdout; intermediate folders must exist
	#[arg(short = 'o', long = "output")]
	pub output: Option<String>,
	/// Restrict matching to one calling convention:
	/// `v3` (variadic), `v4` (props-object) or `auto` (both)
	#[arg(short = 'j', long = "jsx")]
	pub jsx: Option<String>,
	/// Treat warnings as errors
	#[arg(short = 'W')]
	pub warnings_as_errors: bool,
	/// Allow typescript syntax in the input
	#[arg(short = 'T', long = "typescript")]
	pub typescript: bool,
	/// When set, enables sourcemaps (embedded in the output).
	#[arg(short = 'm', long = "map")]
	pub generate_sourcemaps: bool,
	/// The entry point to restore (defaults to stdin)
	pub entry_point: Option<String>,
}

/// The `Ok` result type for the [`run`] function.
pub struct Compilation {
	/// The restored code.
	pub code: String,
	/// Any warnings
	pub warnings: Vec<String>,
	/// Any errors; if non-empty, `code` will be empty.
	pub errors: Vec<String>,
	/// How many constructor calls were rewritten into markup.
	pub rewrites: usize,
}

/// Parses the `--jsx` flag value into a convention restriction.
fn jsx_restriction(flag: Option<&str>) -> Result<Option<JsxVersion>, Box<dyn std::error::Error>> {
	match flag {
		None | Some("auto") => Ok(None),
		Some("v3") => Ok(Some(JsxVersion::V3)),
		Some("v4") => Ok(Some(JsxVersion::V4)),
		Some(other) => {
			Err(format!("unknown --jsx mode `{other}` (expected v3, v4 or auto)").into())
		}
	}
}

/// Runs the Resugar restorer with the given arguments.
///
/// This is identical to running the resugar CLI (except for parsing the
/// arguments and reading/writing files).
///
/// `Err` results indicate fatal errors that prevent the run from
/// completing. This does **not** include warnings or syntax errors, which
/// are included in the [`Compilation`] result.
pub fn run(source: String, args: &Args) -> Result<Compilation, Box<dyn std::error::Error>> {
	let restrict = jsx_restriction(args.jsx.as_deref())?;

	let mut result = Compilation {
		code: String::new(),
		warnings: Vec::new(),
		errors: Vec::new(),
		rewrites: 0,
	};

	let source = Arc::new(source);
	let mut errors = 0;

	let allocator = Allocator::default();
	let parse_result = oxc::parser::Parser::new(
		&allocator,
		&source,
		if args.typescript {
			SourceType::tsx()
		} else {
			SourceType::jsx()
		},
	)
	.parse();

	if parse_result.panicked || !parse_result.errors.is_empty() {
		if parse_result.errors.is_empty() {
			return Err("parser panicked, but no errors were reported".into());
		}

		for mut error in parse_result.errors {
			if args.warnings_as_errors {
				error = error.with_severity(Severity::Error);
			}

			let is_error = error.severity == Severity::Error;
			let rendered = format!("{:?}", error.with_source_code(Arc::clone(&source)));
			if is_error {
				errors += 1;
				result.errors.push(rendered);
			} else {
				result.warnings.push(rendered);
			}
		}

		if errors > 0 {
			return Ok(result);
		}
	}

	let mut program = parse_result.program;

	let semantic = SemanticBuilder::new()
		.with_check_syntax_error(true)
		.build(&program);

	if !semantic.errors.is_empty() {
		errors = 0;
		for mut error in semantic.errors {
			if args.warnings_as_errors {
				error = error.with_severity(Severity::Error);
			}

			let is_error = error.severity == Severity::Error;
			let rendered = format!("{:?}", error.with_source_code(Arc::clone(&source)));
			if is_error {
				errors += 1;
				result.errors.push(rendered);
			} else {
				result.warnings.push(rendered);
			}
		}

		if errors > 0 {
			return Ok(result);
		}
	}

	let scoping = semantic.semantic.into_scoping();
	let restored = resugar::transform(&allocator, &mut program, scoping, restrict);
	result.rewrites = restored.rewrites;

	let codegen_options = CodegenOptions {
		source_map_path: if args.generate_sourcemaps {
			if let Some(ref entry) = args.entry_point {
				Some(entry.into())
			} else {
				Some("resugar.js.map".into())
			}
		} else {
			None
		},
		..CodegenOptions::default()
	};

	let generated = Codegen::new().with_options(codegen_options).build(&program);

	let sourcemap_string = if args.generate_sourcemaps {
		if let Some(ref sourcemap) = generated.map {
			Some(sourcemap.to_data_url())
		} else {
			result
				.warnings
				.push("sourcemap generation requested, but no sourcemap was generated".into());
			None
		}
	} else {
		None
	};

	result.code = generated.code;
	if let Some(ref sm) = sourcemap_string {
		result.code.push_str("\n//# sourceMappingURL=");
		result.code.push_str(sm);
	}

	Ok(result)
}
