use super::*;
use crate::context::{BindingContext, JsName, Namer, NamerOptions};
use crate::declaration::PackageMember;
use crate::errors::TranslationDiagnostic;
use crate::ir::IRProperty;
use crate::source::{Declaration, FileId};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Created(String),
    Translated(String, String),
    Published { package: String, root_present: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Runtime,
    Assertion,
    Diagnostic,
}

type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Default)]
struct RecordingFactory {
    log: Log,
    fail_on_file: Option<(&'static str, Failure)>,
    fail_publish: bool,
}

struct RecordingTranslator {
    fq_name: FqName,
    log: Log,
    fail_on_file: Option<(&'static str, Failure)>,
    fail_publish: bool,
}

impl NamespaceTranslatorFactory for RecordingFactory {
    type Translator = RecordingTranslator;

    fn create(
        &mut self,
        fragment: &PackageFragment,
        _context: &TranslationContext<'_>,
    ) -> RecordingTranslator {
        self.log
            .borrow_mut()
            .push(Event::Created(fragment.fq_name.as_str().to_string()));
        RecordingTranslator {
            fq_name: fragment.fq_name.clone(),
            log: Rc::clone(&self.log),
            fail_on_file: self.fail_on_file,
            fail_publish: self.fail_publish,
        }
    }
}

impl NamespaceTranslator for RecordingTranslator {
    fn fq_name(&self) -> &FqName {
        &self.fq_name
    }

    fn translate(
        &mut self,
        file: &SourceFile,
        _context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        if let Some((name, failure)) = self.fail_on_file
            && name == file.name
        {
            return Err(match failure {
                Failure::Runtime => TranslationError::Runtime("boom".to_string()),
                Failure::Assertion => TranslationError::Assertion("unreachable state".to_string()),
                Failure::Diagnostic => TranslationError::Diagnostic(TranslationDiagnostic {
                    file_id: FileId(99),
                    file_name: "x.kt".to_string(),
                    cause: Box::new(TranslationError::Runtime("inner".to_string())),
                }),
            });
        }
        self.log.borrow_mut().push(Event::Translated(
            self.fq_name.as_str().to_string(),
            file.name.clone(),
        ));
        Ok(())
    }

    fn add(
        self,
        invocations: &mut DefineInvocationMap,
        _context: &TranslationContext<'_>,
    ) -> Result<(), TranslationError> {
        self.log.borrow_mut().push(Event::Published {
            package: self.fq_name.as_str().to_string(),
            root_present: invocations.contains(&FqName::ROOT),
        });
        if self.fail_publish {
            return Err(TranslationError::Runtime("publish failed".to_string()));
        }
        Ok(())
    }
}

fn fq(name: &str) -> FqName {
    FqName::parse(name).unwrap()
}

fn file(id: u32, name: &str, package: &str) -> SourceFile {
    SourceFile::new(FileId(id), name, fq(package))
}

fn kotlin_namer() -> Namer {
    Namer::new(NamerOptions {
        root_package_name: "Kotlin".to_string(),
        ..NamerOptions::default()
    })
}

fn single_vars(output: &[IRNode]) -> &IRVars {
    assert_eq!(output.len(), 1);
    match &output[0] {
        IRNode::VarStatement(vars) => vars,
        other => panic!("expected a var statement, got {other:?}"),
    }
}

#[test]
fn test_empty_input_emits_empty_var_statement() {
    let files: Vec<SourceFile> = Vec::new();
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, kotlin_namer());
    let factory = RecordingFactory::default();
    let log = Rc::clone(&factory.log);

    let output = PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap();

    let vars = single_vars(&output);
    assert!(vars.is_empty());
    assert!(vars.multiline);
    assert!(log.borrow().is_empty());
    // The root variable name is still bound, just never initialized
    assert_eq!(context.scope().find_name("Kotlin").map(JsName::as_str), Some("Kotlin"));
}

#[test]
fn test_root_file_initializes_root_variable() {
    let files = vec![file(0, "a.kt", "")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, kotlin_namer());

    let output = translate_files(&files, &mut context).unwrap();

    let vars = single_vars(&output);
    assert_eq!(vars.vars.len(), 1);
    let var = &vars.vars[0];
    assert_eq!(var.name.as_str(), "Kotlin");
    match var.initializer.as_deref() {
        Some(IRNode::CallExpr { callee, arguments }) => {
            assert_eq!(**callee, context.namer().root_package_definition_method_reference());
            assert_eq!(arguments.len(), 2);
            assert_eq!(arguments[0], IRNode::NullLiteral);
            assert_eq!(arguments[1], IRNode::object_multiline(Vec::new()));
        }
        other => panic!("expected a define call, got {other:?}"),
    }
}

#[test]
fn test_same_package_files_share_one_translator() {
    let files = vec![file(0, "a.kt", "foo.bar"), file(1, "b.kt", "foo.bar")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory::default();
    let log = Rc::clone(&factory.log);

    PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            Event::Created("foo.bar".to_string()),
            Event::Translated("foo.bar".to_string(), "a.kt".to_string()),
            Event::Translated("foo.bar".to_string(), "b.kt".to_string()),
            Event::Published {
                package: "foo.bar".to_string(),
                root_present: true,
            },
        ]
    );
}

#[test]
fn test_publication_follows_first_appearance_order() {
    let files = vec![
        file(0, "a.kt", "foo"),
        file(1, "b.kt", "bar"),
        file(2, "c.kt", "foo"),
    ];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory::default();
    let log = Rc::clone(&factory.log);

    PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap();

    let log = log.borrow();
    let created: Vec<_> = log
        .iter()
        .filter_map(|event| match event {
            Event::Created(package) => Some(package.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(created, vec!["foo", "bar"]);

    assert!(log.contains(&Event::Translated("foo".to_string(), "c.kt".to_string())));

    let published: Vec<_> = log
        .iter()
        .filter_map(|event| match event {
            Event::Published { package, .. } => Some(package.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(published, vec!["foo", "bar"]);
}

#[test]
fn test_runtime_failure_is_tagged_with_file() {
    let files = vec![file(0, "a.kt", "foo"), file(1, "b.kt", "foo")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory {
        fail_on_file: Some(("b.kt", Failure::Runtime)),
        ..RecordingFactory::default()
    };
    let log = Rc::clone(&factory.log);

    let err = PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap_err();

    match err {
        TranslationError::Diagnostic(diagnostic) => {
            assert_eq!(diagnostic.file_name, "b.kt");
            assert_eq!(diagnostic.file_id, FileId(1));
            assert!(matches!(*diagnostic.cause, TranslationError::Runtime(ref msg) if msg == "boom"));
        }
        other => panic!("expected a diagnostic, got {other:?}"),
    }
    assert!(
        !log.borrow()
            .iter()
            .any(|event| matches!(event, Event::Published { .. }))
    );
}

#[test]
fn test_assertion_failure_is_tagged_like_runtime_failure() {
    let files = vec![file(0, "a.kt", "foo")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory {
        fail_on_file: Some(("a.kt", Failure::Assertion)),
        ..RecordingFactory::default()
    };

    let err = PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap_err();

    match err {
        TranslationError::Diagnostic(diagnostic) => {
            assert_eq!(diagnostic.file_name, "a.kt");
            assert!(matches!(*diagnostic.cause, TranslationError::Assertion(_)));
        }
        other => panic!("expected a diagnostic, got {other:?}"),
    }
}

#[test]
fn test_existing_diagnostic_passes_through_unchanged() {
    let files = vec![file(0, "a.kt", "foo"), file(1, "b.kt", "bar")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory {
        fail_on_file: Some(("b.kt", Failure::Diagnostic)),
        ..RecordingFactory::default()
    };

    let err = PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap_err();

    match err {
        TranslationError::Diagnostic(diagnostic) => {
            assert_eq!(diagnostic.file_name, "x.kt");
            assert_eq!(diagnostic.file_id, FileId(99));
            assert!(matches!(*diagnostic.cause, TranslationError::Runtime(ref msg) if msg == "inner"));
        }
        other => panic!("expected a diagnostic, got {other:?}"),
    }
}

#[test]
fn test_missing_binding_is_fatal_and_unwrapped() {
    let files = vec![file(0, "a.kt", "foo"), file(1, "b.kt", "foo")];
    let binding = BindingContext::bind_by_package(&files[..1]);
    let mut context = TranslationContext::new(&binding, Namer::default());

    let err = translate_files(&files, &mut context).unwrap_err();

    assert!(matches!(
        err,
        TranslationError::MissingPackageFragment { ref file } if file == "b.kt"
    ));
}

#[test]
fn test_publication_failure_is_not_wrapped() {
    let files = vec![file(0, "a.kt", "foo")];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory {
        fail_publish: true,
        ..RecordingFactory::default()
    };

    let err = PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap_err();

    assert!(matches!(err, TranslationError::Runtime(ref msg) if msg == "publish failed"));
}

#[test]
fn test_root_bootstrap_is_idempotent() {
    let mut invocations = DefineInvocationMap::new();
    assert!(create_root_package_define_invocation_if_needed(&mut invocations).unwrap());

    invocations
        .get_mut(&FqName::ROOT)
        .unwrap()
        .add_member(PackageMember::Declaration(IRProperty::init(
            "main",
            IRNode::NullLiteral,
        )))
        .unwrap();

    assert!(!create_root_package_define_invocation_if_needed(&mut invocations).unwrap());
    assert!(!create_root_package_define_invocation_if_needed(&mut invocations).unwrap());
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations.get(&FqName::ROOT).unwrap().members().len(), 1);
}

#[test]
fn test_fragments_of_one_package_get_separate_translators() {
    let files = vec![
        file(0, "a.kt", "foo").with_module("core"),
        file(1, "b.kt", "foo").with_module("extras"),
        file(2, "c.kt", "foo").with_module("core"),
    ];
    let binding = BindingContext::bind_by_module(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());
    let factory = RecordingFactory::default();
    let log = Rc::clone(&factory.log);

    PackageDeclarationTranslator::new(factory)
        .translate(&files, &mut context)
        .unwrap();

    let created = log
        .borrow()
        .iter()
        .filter(|event| matches!(event, Event::Created(_)))
        .count();
    assert_eq!(created, 2);
}

#[test]
fn test_root_variable_name_is_declared_once() {
    let files = vec![
        file(0, "a.kt", "").with_declaration(Declaration::Member {
            name: "main".to_string(),
            value: IRNode::func_expr(None, Vec::new(), Vec::new()),
        }),
    ];
    let binding = BindingContext::bind_by_package(&files);
    let mut context = TranslationContext::new(&binding, Namer::default());

    translate_files(&files, &mut context).unwrap();

    assert_eq!(context.scope().len(), 1);
    assert!(context.scope().find_name("_").is_some());
}
