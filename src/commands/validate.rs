use crate::validation::{DocumentValidationResult, DocumentValidator};
use crate::{Result, SchemeGuardError, loader};
use colored::*;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// Validate the security schemes of every file. Returns `Ok(false)` when any
/// file fails to load or any scheme is rejected.
pub fn execute_validate(files: &[PathBuf], cancel: &CancellationToken) -> Result<bool> {
    let mut has_errors = false;

    for path in files {
        if cancel.is_cancelled() {
            return Err(SchemeGuardError::Cancelled);
        }
        if !validate_file(path, cancel)? {
            has_errors = true;
        }
        println!();
    }

    // Summary
    if has_errors {
        println!("{}", "✗ Validation completed with errors".red().bold());
        tracing::warn!(files = files.len(), "Validation completed with errors");
    } else {
        println!("{}", "✓ All security schemes are valid".green().bold());
        tracing::info!(files = files.len(), "All security schemes are valid");
    }

    Ok(!has_errors)
}

fn validate_file(path: &Path, cancel: &CancellationToken) -> Result<bool> {
    println!("{}", "Validating OpenAPI document...".bright_blue());
    println!("  Path: {}", path.display());

    let document = match loader::load_document(path) {
        Ok(document) => document,
        Err(e) => {
            println!("  {}", "✗ Failed to load document".red().bold());
            println!("    {}", e.to_string().red());
            tracing::warn!(path = %path.display(), error = %e, "Failed to load document");
            return Ok(false);
        }
    };

    let result = DocumentValidator::new(&document, cancel).validate_all()?;
    print_result(&result);

    Ok(result.is_valid)
}

fn print_result(result: &DocumentValidationResult) {
    for name in &result.accepted {
        println!("    {} {}", "✓".green(), name);
    }

    if !result.errors.is_empty() {
        println!("    {}", "✗ Rejected schemes:".red().bold());
        for error in &result.errors {
            println!("      - {}", error.format().red());
        }
    }

    if !result.warnings.is_empty() {
        println!("    {}", "⚠ Warnings:".yellow());
        for warning in &result.warnings {
            println!("      - {}", warning.format().yellow());
        }
    }
}
