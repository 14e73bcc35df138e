//! check-name command handler

use crate::cli::CheckNameArgs;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use pkgcheck_schemas::is_fully_qualified_name;
use tracing::{debug, instrument};

/// Handle the check-name command
#[instrument(skip(output), fields(name = %args.name, path = %args.path))]
pub fn handle_check_name(args: CheckNameArgs, output: &mut OutputWriter) -> Result<()> {
    let errors = is_fully_qualified_name(&args.path, &args.name);
    debug!(errors = errors.len(), "Checked name");

    if errors.is_empty() {
        output.success(&format!("✓ '{}' is a fully qualified name", args.name))?;
        return Ok(());
    }

    output.error(&format!("✗ '{}' is not a fully qualified name", args.name))?;
    output.field_errors(&errors)?;
    Err(Error::ValidationFailed {
        rejected: 1,
        total: 1,
    })
}
