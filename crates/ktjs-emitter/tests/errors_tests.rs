use super::*;
use ktjs_common::DiagnosticCategory;

fn file(name: &str) -> SourceFile {
    SourceFile::new(FileId(3), name, FqName::ROOT)
}

#[test]
fn test_tag_with_file_wraps_raw_failures() {
    let diagnostic = TranslationError::Runtime("boom".to_string()).tag_with_file(&file("a.kt"));
    assert_eq!(diagnostic.file_id, FileId(3));
    assert_eq!(diagnostic.file_name, "a.kt");
    assert!(matches!(*diagnostic.cause, TranslationError::Runtime(ref m) if m == "boom"));
    assert_eq!(diagnostic.to_string(), "failed to translate `a.kt`: boom");
}

#[test]
fn test_tag_with_file_keeps_existing_diagnostic() {
    let inner = TranslationDiagnostic::new(
        &file("inner.kt"),
        TranslationError::Assertion("bad".to_string()),
    );
    let error = TranslationError::from(inner);
    assert!(error.is_diagnostic());

    let tagged = error.tag_with_file(&file("outer.kt"));
    assert_eq!(tagged.file_name, "inner.kt");
    assert!(matches!(*tagged.cause, TranslationError::Assertion(_)));
}

#[test]
fn test_diagnostic_codes() {
    let runtime = TranslationDiagnostic::new(&file("a.kt"), TranslationError::Runtime("x".into()))
        .to_diagnostic();
    assert_eq!(runtime.code, diagnostic_codes::TRANSLATION_FAILED);
    assert_eq!(runtime.category, DiagnosticCategory::Error);
    assert_eq!(runtime.message_text, "Failed to translate file 'a.kt'.");
    assert_eq!(runtime.related_information, vec!["x".to_string()]);

    let assertion =
        TranslationDiagnostic::new(&file("a.kt"), TranslationError::Assertion("y".into()))
            .to_diagnostic();
    assert_eq!(assertion.code, diagnostic_codes::INTERNAL_ASSERTION_FAILED);
    assert_eq!(assertion.related_information, vec!["assertion failed: y".to_string()]);
}

#[test]
fn test_conflict_diagnostic_names_package_and_member() {
    let diagnostic = TranslationDiagnostic::new(
        &file("a.kt"),
        TranslationError::ConflictingDeclaration {
            package: FqName::parse("foo.bar").unwrap(),
            name: "x".to_string(),
        },
    )
    .to_diagnostic();
    assert_eq!(diagnostic.code, diagnostic_codes::CONFLICTING_DECLARATION);
    assert_eq!(
        diagnostic.message_text,
        "Conflicting declarations of 'x' in package 'foo.bar'."
    );
    assert!(diagnostic.related_information.is_empty());
}
