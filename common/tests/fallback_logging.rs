//! Debug diagnostics emitted when resolution falls back to message text.
//!
//! `logtest` installs a process-wide logger, so this binary holds a single test
//! that toggles the maximum level itself.

use log::{Level, LevelFilter};
use logtest::Logger;
use result_messages_common::testing::FailingSource;
use result_messages_common::{FALLBACK_LANGUAGE, ResultMessage, resolve_message_with_locale};

fn drain(logger: &mut Logger) -> Vec<(Level, String, String)> {
    let mut records = Vec::new();
    while let Some(record) = logger.pop() {
        records.push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }
    records
}

#[test]
fn fallback_is_logged_only_when_debug_is_enabled() {
    let mut logger = Logger::start();
    let message = ResultMessage::from_code("MSG001").with_text("MESSAGE_TEXT");

    log::set_max_level(LevelFilter::Debug);
    drain(&mut logger);
    let resolved = resolve_message_with_locale(&message, &FailingSource, &FALLBACK_LANGUAGE);

    assert_eq!(resolved.as_deref(), Ok("MESSAGE_TEXT"));
    let records = drain(&mut logger);
    assert_eq!(records.len(), 1, "expected one debug record: {records:?}");
    let (level, target, text) = &records[0];
    assert_eq!(*level, Level::Debug);
    assert_eq!(target, "result_messages::resolve");
    assert!(text.contains("MSG001"), "record should name the code: {text}");
    assert!(text.contains("MESSAGE_TEXT"), "record should name the text: {text}");

    log::set_max_level(LevelFilter::Info);
    let resolved = resolve_message_with_locale(&message, &FailingSource, &FALLBACK_LANGUAGE);

    assert_eq!(resolved.as_deref(), Ok("MESSAGE_TEXT"));
    assert!(drain(&mut logger).is_empty());

    let literal = ResultMessage::from_text("LITERAL");
    log::set_max_level(LevelFilter::Trace);
    let resolved = resolve_message_with_locale(&literal, &FailingSource, &FALLBACK_LANGUAGE);

    assert_eq!(resolved.as_deref(), Ok("LITERAL"));
    assert!(drain(&mut logger).is_empty());
}
