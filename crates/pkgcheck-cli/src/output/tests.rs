// Tests for report and error formatting
//
// These exercise the human renderer directly and the machine formats through
// the OutputFormatter trait.

use super::*;
use pkgcheck_core::{Document, Package, PackageVersion};
use pkgcheck_schemas::{validate_documents, ValidationConfig};
use std::cell::RefCell;
use std::rc::Rc;

fn sample_reports(config: &ValidationConfig) -> Vec<DocumentReport> {
    let documents: Vec<Document> = vec![
        Package::new("my.pkg.example.com").into(),
        PackageVersion::new("x", "", "").into(),
    ];
    validate_documents(&documents, config)
        .into_iter()
        .map(|r| r.with_source("pkgs.yaml"))
        .collect()
}

/// Writer that keeps everything written for later inspection
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

#[test]
fn test_reports_human_plain() {
    let formatted = format_reports_human(&sample_reports(&ValidationConfig::default()), false);

    assert!(formatted.contains("OK pkgs.yaml#0 Package my.pkg.example.com\n"));
    assert!(formatted.contains("FAIL pkgs.yaml#1 PackageVersion x (4 error(s))\n"));
    assert!(formatted.contains("    spec.packageName: Required value: can not be empty\n"));
    assert!(formatted.contains("    spec.version: Required value: cannot be empty\n"));
    assert!(formatted.contains(
        "    metadata.name: Invalid value: \"x\": must begin with <spec.packageName> + '.'\n"
    ));
    assert!(!formatted.contains("more"));
}

#[test]
fn test_reports_human_truncated() {
    let config = ValidationConfig::default().with_max_errors(1);
    let formatted = format_reports_human(&sample_reports(&config), false);
    assert!(formatted.contains("(4 error(s))"));
    assert!(formatted.contains("    ... and 3 more\n"));
}

#[test]
fn test_unnamed_document() {
    let documents: Vec<Document> = vec![Package::default().into()];
    let reports = validate_documents(&documents, &ValidationConfig::default());
    let formatted = format_reports_human(&reports, false);
    assert!(formatted.starts_with("FAIL #0 Package <unnamed> (1 error(s))"));
}

#[test]
fn test_reports_json() {
    let reports = sample_reports(&ValidationConfig::default());
    let formatted = OutputFormat::Json.format_reports(&reports, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();

    assert_eq!(value[0]["accepted"], true);
    assert_eq!(value[1]["kind"], "PackageVersion");
    assert_eq!(value[1]["totalErrors"], 4);
    assert_eq!(value[1]["errors"]["errors"][3]["field"], "metadata.name");
    assert_eq!(value[1]["errors"]["errors"][3]["badValue"], "x");
}

#[test]
fn test_reports_yaml() {
    let reports = sample_reports(&ValidationConfig::default());
    let formatted = OutputFormat::Yaml.format_reports(&reports, false).unwrap();
    assert!(formatted.contains("kind: PackageVersion"));
    assert!(formatted.contains("source: pkgs.yaml"));
}

#[test]
fn test_quiet_human_shows_only_rejections() {
    let buffer = SharedBuffer::default();
    let mut writer =
        OutputWriter::with_writer(OutputFormat::Human, false, true, Box::new(buffer.clone()));

    writer.info("hidden").unwrap();
    writer.reports(&sample_reports(&ValidationConfig::default())).unwrap();

    let written = buffer.contents();
    assert!(!written.contains("hidden"));
    assert!(!written.contains("my.pkg.example.com"));
    assert!(written.starts_with("FAIL pkgs.yaml#1"));
}

#[test]
fn test_machine_format_skips_messages() {
    let buffer = SharedBuffer::default();
    let mut writer =
        OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(buffer.clone()));

    writer.info("hidden").unwrap();
    writer.success("hidden").unwrap();
    writer.warning("hidden").unwrap();
    writer.error("hidden").unwrap();
    writer.section("hidden").unwrap();
    writer.data(&serde_json::json!({"ok": true})).unwrap();

    assert_eq!(buffer.contents(), "{\"ok\":true}\n");
}

#[test]
fn test_field_errors_human() {
    let errs = pkgcheck_schemas::is_fully_qualified_name(
        &pkgcheck_schemas::FieldPath::new("metadata").child("name"),
        "a.b",
    );
    let formatted = OutputFormat::Human.format_field_errors(&errs).unwrap();
    assert_eq!(
        formatted,
        "  metadata.name: Invalid value: \"a.b\": should be a domain with at least three segments separated by dots\n"
    );
}
