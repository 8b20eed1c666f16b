use std::io::Write;
use ui5lint_markup::{parse_xml, parse_xml_async, parse_xml_file, EventKinds, MarkupEvent};
use ui5lint_test_utils::ChunkedReader;

const VIEW: &str = r#"<mvc:View xmlns:mvc="sap.ui.core.mvc" xmlns="sap.m">
	<!-- ui5lint-disable-next-line no-deprecated-api -->
	<Button text="Größe" tap=".onTap" />
	<List items="{/entries}">
		<StandardListItem title="{name}"/>
	</List>
</mvc:View>
"#;

fn collect_sync(reader: impl std::io::Read) -> Vec<MarkupEvent> {
    let mut events = Vec::new();
    parse_xml(reader, EventKinds::ALL, |event| events.push(event)).unwrap();
    events
}

#[test]
fn test_chunking_does_not_change_events() {
    let expected = collect_sync(VIEW.as_bytes());
    assert_eq!(expected.len(), 9);

    for chunk_size in [1, 2, 3, 7, 64] {
        let events = collect_sync(ChunkedReader::new(VIEW, chunk_size));
        assert_eq!(events, expected, "chunk size {chunk_size}");
    }
}

#[test]
fn test_positions_after_multibyte_text() {
    let events = collect_sync(ChunkedReader::new(VIEW, 1));
    let button = events
        .iter()
        .find_map(|event| match event {
            MarkupEvent::OpenTag(tag) if tag.name == "Button" => Some(tag),
            _ => None,
        })
        .unwrap();

    let tap = button.attribute("tap").unwrap();
    let line = VIEW.lines().nth(2).unwrap();
    // "ö" and "ß" are two bytes each but one UTF-16 unit
    let expected_character = line[..line.find("tap").unwrap()].chars().count();
    assert_eq!(tap.name_span.start.line_col.line, 2);
    assert_eq!(
        tap.name_span.start.line_col.character as usize,
        expected_character
    );
    assert_eq!(button.attribute("text").unwrap().value, "Größe");
}

#[tokio::test]
async fn test_async_chunked_stream() {
    let mut events = Vec::new();
    parse_xml_async(ChunkedReader::new(VIEW, 5), EventKinds::COMMENT, |event| {
        events.push(event);
    })
    .await
    .unwrap();

    assert_eq!(events.len(), 1);
    let MarkupEvent::Comment(comment) = &events[0] else {
        panic!("expected a comment");
    };
    assert_eq!(comment.span.start.line_col.line, 1);
    assert_eq!(comment.span.start.line_col.character, 1);
}

#[tokio::test]
async fn test_parse_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(VIEW.as_bytes()).unwrap();

    let mut closed = Vec::new();
    parse_xml_file(file.path(), EventKinds::CLOSE_TAG, |event| {
        if let MarkupEvent::CloseTag(tag) = event {
            closed.push(tag.name);
        }
    })
    .await
    .unwrap();

    assert_eq!(closed, ["Button", "StandardListItem", "List", "mvc:View"]);
}

#[tokio::test]
async fn test_missing_file_is_an_io_error() {
    let result = parse_xml_file(
        std::path::Path::new("/nonexistent/Main.view.xml"),
        EventKinds::ALL,
        |_| {},
    )
    .await;
    assert!(matches!(result, Err(ui5lint_markup::TokenizerError::Io(_))));
}

/// Delivers `prefix` on the first read and fails every read after it.
struct FailingReader {
    prefix: Option<&'static [u8]>,
}

impl std::io::Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match self.prefix.take() {
            Some(prefix) => {
                buf[..prefix.len()].copy_from_slice(prefix);
                Ok(prefix.len())
            }
            None => Err(std::io::Error::other("disk gone")),
        }
    }
}

#[test]
fn test_read_failure_mid_stream_keeps_delivered_events() {
    let reader = FailingReader {
        prefix: Some(b"<View><Text/><!-- c -->"),
    };
    let mut events = Vec::new();
    let result = parse_xml(reader, EventKinds::ALL, |event| events.push(event));

    match result {
        Err(ui5lint_markup::TokenizerError::Io(err)) => assert_eq!(err.to_string(), "disk gone"),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    let kinds: Vec<_> = events.iter().map(MarkupEvent::kind).collect();
    assert_eq!(
        kinds,
        [
            EventKinds::OPEN_TAG,
            EventKinds::OPEN_TAG,
            EventKinds::CLOSE_TAG,
            EventKinds::COMMENT,
        ]
    );
}
