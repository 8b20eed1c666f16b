//! A detection pass over an XML view, driven the way the analysis runner
//! drives real passes: tokenize, report, flush, add directives, collect.

use ui5lint_config::LinterConfig;
use ui5lint_linter::{
    extract_directive, LintResult, LinterContext, MessageArgs, MessageOptions, SourceFileReporter,
};
use ui5lint_markup::{parse_xml, EventKinds, MarkupEvent};
use ui5lint_syntax::SourceFile;
use ui5lint_test_utils::format_texts;

const VIEW: &str = r#"<mvc:View xmlns:mvc="sap.ui.core.mvc" xmlns="sap.m" xmlns:html="http://www.w3.org/1999/xhtml">
	<!-- ui5lint-disable-next-line no-deprecated-api -->
	<html:div/>
	<html:span/>
	<MessagePage title="Gone"/>
</mvc:View>
"#;

fn lint_view(context: &LinterContext, file: &SourceFile) {
    let mut reporter = SourceFileReporter::new(context, file, None);
    let mut directives = Vec::new();

    parse_xml(
        file.text().as_bytes(),
        EventKinds::OPEN_TAG | EventKinds::COMMENT,
        |event| match event {
            MarkupEvent::OpenTag(tag) if tag.name.starts_with("html:") => {
                reporter
                    .add_message(MessageArgs::HtmlInXml, MessageOptions::at(&tag.open))
                    .unwrap();
            }
            MarkupEvent::OpenTag(tag) if tag.local_name() == "MessagePage" => {
                reporter
                    .add_message(
                        MessageArgs::DeprecatedClass {
                            class_name: "sap.m.MessagePage".to_string(),
                            details: Some("Use {@link sap.m.IllustratedMessage} instead".to_string()),
                        },
                        MessageOptions::at(&tag.open),
                    )
                    .unwrap();
            }
            MarkupEvent::Comment(comment) => {
                directives.extend(extract_directive(&comment.text, comment.span.start.line_col));
            }
            _ => {}
        },
    )
    .unwrap();

    reporter.flush();
    context.add_directives(file.path(), directives);
}

fn summarize(results: &[LintResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(|result| {
            result.messages.iter().map(move |message| {
                format!(
                    "{} {} {} {}",
                    result.file_path,
                    message.position.map(|p| p.to_string()).unwrap_or_default(),
                    message.rule,
                    message.message
                )
            })
        })
        .collect()
}

#[test]
fn test_view_results() {
    let context = LinterContext::default();
    let file = SourceFile::new("/app/view/Main.view.xml", VIEW);
    lint_view(&context, &file);

    let results = context.into_results();
    insta::assert_snapshot!("view_results", format_texts(&summarize(&results)));
}

#[test]
fn test_details_follow_config() {
    let file = SourceFile::new("/app/view/Main.view.xml", VIEW);

    let context = LinterContext::new(&LinterConfig {
        details: true,
        ..LinterConfig::default()
    })
    .unwrap();
    lint_view(&context, &file);
    let results = context.into_results();
    let details: Vec<_> = results[0]
        .messages
        .iter()
        .filter_map(|m| m.message_details.as_deref())
        .collect();
    assert_eq!(
        details,
        [
            "Use the sap.ui.core.HTML (https://ui5.sap.com/#/api/sap.ui.core.HTML) control or an XML fragment with UI5 controls instead",
            "Use sap.m.IllustratedMessage (https://ui5.sap.com/#/api/sap.m.IllustratedMessage) instead",
        ]
    );
}

#[test]
fn test_results_serialize_for_formatters() {
    let context = LinterContext::default();
    let file = SourceFile::new("/app/view/Main.view.xml", VIEW);
    lint_view(&context, &file);

    let json = serde_json::to_value(context.into_results()).unwrap();
    assert_eq!(json[0]["filePath"], "/app/view/Main.view.xml");
    assert_eq!(json[0]["messages"][0]["id"], "html-in-xml");
    assert_eq!(json[0]["messages"][0]["rule"], "no-deprecated-api");
    assert_eq!(json[0]["messages"][0]["position"]["line"], 4);
    assert!(json[0].get("coverageInfo").is_none());
}
