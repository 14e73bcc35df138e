//! Unit tests for the name grammar
//!
//! These cover the fully-qualified-name checker on its own: emptiness,
//! DNS-1123 syntax, label/total length limits and the segment count.

use pkgcheck_schemas::{is_dns1123_subdomain, is_fully_qualified_name, ErrorKind, FieldPath};

fn path() -> FieldPath {
    FieldPath::new("metadata").child("name")
}

#[cfg(test)]
mod accepted_names {
    use super::*;

    #[test]
    fn test_typical_package_names() {
        for name in [
            "my.pkg.example.com",
            "cert-manager.community.tanzu.vmware.com",
            "a.b.c",
            "0.0.0",
            "pkg-1.corp-2.io",
        ] {
            let errs = is_fully_qualified_name(&path(), name);
            assert!(errs.is_empty(), "{name} should be accepted: {errs}");
        }
    }

    #[test]
    fn test_boundary_lengths() {
        let label = "a".repeat(63);
        let name = format!("{label}.{label}.{label}");
        assert!(is_fully_qualified_name(&path(), &name).is_empty());

        // 63 * 4 = 252 characters of labels plus 3 dots = 255, too long
        let too_long = format!("{label}.{label}.{label}.{label}");
        assert_eq!(too_long.len(), 255);
        assert!(!is_dns1123_subdomain(&too_long).is_empty());

        // exactly 253
        let exact = format!("{label}.{label}.{label}.{}", "a".repeat(61));
        assert_eq!(exact.len(), 253);
        assert!(is_fully_qualified_name(&path(), &exact).is_empty());
    }
}

#[cfg(test)]
mod rejected_names {
    use super::*;

    #[test]
    fn test_empty_is_single_required() {
        let errs = is_fully_qualified_name(&path(), "");
        assert_eq!(errs.len(), 1);
        let err = &errs.errors[0];
        assert_eq!(err.kind, ErrorKind::Required);
        assert_eq!(err.field, path());
        assert_eq!(err.bad_value, None);
    }

    #[test]
    fn test_too_few_segments() {
        for name in ["pkg", "pkg.example"] {
            let errs = is_fully_qualified_name(&path(), name);
            assert_eq!(errs.len(), 1, "{name}");
            assert_eq!(errs.errors[0].kind, ErrorKind::Invalid);
            assert!(errs.errors[0].detail.contains("at least three segments"));
            assert_eq!(errs.errors[0].bad_value.as_deref(), Some(name));
        }
    }

    #[test]
    fn test_bad_syntax_with_enough_segments() {
        for name in ["My.pkg.example.com", "my_pkg.example.com", "-my.pkg.com", "my.pkg.com-", "my..pkg.com"] {
            let errs = is_fully_qualified_name(&path(), name);
            assert_eq!(errs.len(), 1, "{name}");
            assert!(errs.errors[0].detail.contains("RFC 1123 subdomain"), "{name}");
        }
    }

    #[test]
    fn test_bad_syntax_and_too_few_segments() {
        let errs = is_fully_qualified_name(&path(), "UPPER");
        assert_eq!(errs.len(), 2);
        assert!(errs.errors[0].detail.contains("RFC 1123 subdomain"));
        assert!(errs.errors[1].detail.contains("at least three segments"));
    }

    #[test]
    fn test_error_renders_with_path() {
        let errs = is_fully_qualified_name(&path(), "a.b");
        assert_eq!(
            errs.to_string(),
            "metadata.name: Invalid value: \"a.b\": should be a domain with at least three segments separated by dots"
        );
    }
}
