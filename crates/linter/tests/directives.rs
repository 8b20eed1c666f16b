use ui5lint_linter::{
    collect_directives, collect_markup_directives, collect_markup_directives_async,
    collect_script_directives, extract_directive, DirectiveAction, DirectiveScope, LintError,
};
use ui5lint_syntax::{LineCol, SourceFile};
use ui5lint_test_utils::ChunkedReader;

const VIEW: &str = r#"<mvc:View xmlns:mvc="sap.ui.core.mvc" xmlns="sap.m">
	<!-- ui5lint-disable-next-line no-deprecated-api -->
	<MessagePage />
	<!-- not a directive at all -->
	<!-- ui5lint-disable
		no-globals,
		no-pseudo-modules
	-->
	<Text text="Größe" /><!-- ui5lint-enable -->
</mvc:View>
"#;

#[test]
fn test_directive_grammar() {
    let directive = extract_directive(
        " ui5lint-disable-next-line no-deprecated-api ",
        LineCol::default(),
    )
    .unwrap();
    assert_eq!(directive.action, DirectiveAction::Disable);
    assert_eq!(directive.scope, Some(DirectiveScope::NextLine));
    assert_eq!(directive.rule_names, ["no-deprecated-api"]);

    assert_eq!(
        extract_directive(" not a directive at all ", LineCol::default()),
        None
    );
}

#[test]
fn test_markup_directives() {
    let directives = collect_markup_directives(VIEW.as_bytes()).unwrap();
    assert_eq!(directives.len(), 3);

    assert_eq!((directives[0].line(), directives[0].column()), (2, 2));
    assert_eq!(directives[0].scope, Some(DirectiveScope::NextLine));

    assert_eq!((directives[1].line(), directives[1].column()), (5, 2));
    assert_eq!(directives[1].rule_names, ["no-globals", "no-pseudo-modules"]);

    // "Größe" is one UTF-16 unit per character
    let line = VIEW.lines().nth(8).unwrap();
    let column = line[..line.find("<!--").unwrap()].chars().count() + 1;
    assert_eq!(directives[2].action, DirectiveAction::Enable);
    assert_eq!(
        (directives[2].line(), directives[2].column() as usize),
        (9, column)
    );
}

#[test]
fn test_markup_directives_do_not_depend_on_chunking() {
    let expected = collect_markup_directives(VIEW.as_bytes()).unwrap();
    for chunk_size in [1, 4, 13] {
        let directives = collect_markup_directives(ChunkedReader::new(VIEW, chunk_size)).unwrap();
        assert_eq!(directives, expected, "chunk size {chunk_size}");
    }
}

#[tokio::test]
async fn test_async_markup_directives() {
    let directives = collect_markup_directives_async(ChunkedReader::new(VIEW, 3))
        .await
        .unwrap();
    assert_eq!(directives, collect_markup_directives(VIEW.as_bytes()).unwrap());
}

#[test]
fn test_malformed_markup_fails_instead_of_returning_nothing() {
    let result = collect_markup_directives("<View><!-- ui5lint-disable".as_bytes());
    assert!(matches!(result, Err(LintError::Markup(_))));
}

#[test]
fn test_script_directives() {
    let code = "\
sap.ui.define([], function() {
    // ui5lint-disable-next-line no-globals
    jQuery.sap.log.info(\"x\");
    /* ui5lint-disable no-deprecated-api, no-globals -- legacy */
    /** JSDoc, not a directive */
});
";
    let file = SourceFile::new("/app/Component.js", code);
    let directives = collect_script_directives(&file).unwrap();

    assert_eq!(directives.len(), 2);
    assert_eq!((directives[0].line(), directives[0].column()), (2, 5));
    assert_eq!(directives[0].rule_names, ["no-globals"]);
    assert_eq!(directives[1].scope, None);
    assert_eq!(directives[1].rule_names, ["no-deprecated-api", "no-globals"]);
}

#[test]
fn test_collect_directives_dispatches_on_kind() {
    let view = SourceFile::new("/app/view/Main.view.xml", VIEW);
    assert_eq!(collect_directives(&view).unwrap().len(), 3);

    let script = SourceFile::new("/app/Component.ts", "// ui5lint-disable\nexport {};\n");
    assert_eq!(collect_directives(&script).unwrap().len(), 1);

    let manifest = SourceFile::new("/app/manifest.json", "{}");
    assert!(matches!(
        collect_directives(&manifest),
        Err(LintError::UnsupportedFile { .. })
    ));
}
