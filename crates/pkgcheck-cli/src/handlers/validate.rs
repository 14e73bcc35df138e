//! Validation command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::handlers::utils::load_documents;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use pkgcheck_core::{Document, PackageVersion};
use pkgcheck_schemas::{
    validate_documents, validate_package_version_name, DocumentReport, FieldPath, ValidationConfig,
};
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(config, output), fields(files = args.files.len()))]
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("validate_command", &format!("files: {}", args.files.len()));
    let validation = effective_config(&args, &config.validation);
    debug!(?validation, "Using validation settings");

    let mut reports: Vec<DocumentReport> = Vec::new();
    let mut accepted_documents = Vec::new();

    for path in &args.files {
        output.info(&format!("Validating {}", path.display()))?;

        let documents = load_documents(path, args.kind.map(Into::into))?;
        debug!(file = %path.display(), count = documents.len(), "Loaded documents");
        if documents.is_empty() {
            output.warning(&format!("{} contains no documents", path.display()))?;
            continue;
        }

        let batch = {
            let _validation_timer = Timer::new("naming_validation");
            validate_documents(&documents, &validation)
        };

        for (document, report) in documents.iter().zip(batch) {
            trace_report(document, &report);
            if report.accepted && args.detailed {
                accepted_documents.push(document.clone());
            }
            reports.push(report.with_source(path.display().to_string()));
        }

        if validation.fail_fast && reports.iter().any(|r| !r.accepted) {
            info!("Stopping after first rejected document");
            break;
        }
    }

    output.reports(&reports)?;

    if args.detailed && !accepted_documents.is_empty() {
        output.section("Accepted Documents")?;
        output.data(&accepted_documents)?;
    }

    let total = reports.len();
    let rejected = reports.iter().filter(|r| !r.accepted).count();
    if rejected > 0 {
        warn!(rejected, total, "Validation failed");
        return Err(Error::ValidationFailed { rejected, total });
    }

    info!(total, "Validation completed successfully");
    output.success(&format!("✓ {} document(s) valid", total))?;
    Ok(())
}

/// Command-line flags override the configured batch settings
fn effective_config(args: &ValidateArgs, configured: &ValidationConfig) -> ValidationConfig {
    let mut validation = configured.clone();
    if args.fail_fast {
        validation = validation.with_fail_fast();
    }
    if let Some(max_errors) = args.max_errors {
        validation = validation.with_max_errors(max_errors);
    }
    validation
}

/// Emit diagnostics for one validated document
fn trace_report(document: &Document, report: &DocumentReport) {
    crate::log_with_request_id!(
        debug,
        kind = %report.kind,
        name = %report.name,
        errors = report.total_errors,
        "Validated document"
    );

    if let Document::PackageVersion(pv) = document {
        if name_prefix_rejected(pv, report) {
            debug!(
                version_name = %pv.metadata.name,
                package_name = %pv.spec.package_name,
                "PackageVersion name does not extend its package name"
            );
        }
    }
}

/// Whether the version name failed the package-name prefix rule
///
/// Read from the report's errors; the rule is re-run only when `max_errors`
/// dropped part of the list.
fn name_prefix_rejected(pv: &PackageVersion, report: &DocumentReport) -> bool {
    let name_field = FieldPath::new("metadata").child("name");
    if report.truncated() == 0 {
        return report.errors.at(&name_field).next().is_some();
    }
    !validate_package_version_name(&pv.metadata.name, &pv.spec.package_name, &name_field)
        .is_empty()
}
