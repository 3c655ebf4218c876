use quick_xml::Reader;
use quick_xml::events::Event;
use rubi_config::furigana::FuriganaConfig;

use crate::error::LookupError;

/// Reading-service request URL. The selection is appended verbatim, exactly
/// as the service receives it from the menu activation.
pub fn request_url(config: &FuriganaConfig, selection: &str) -> String {
    format!(
        "{}{}&sentence={}",
        config.request_url, config.app_id, selection
    )
}

/// Collect the text of every reading element in document order and join them
/// with no separator.
///
/// When the response carries a breakdown marker the service has split the
/// sentence into sub-words and the first reading element is a whole-sentence
/// duplicate of the per-word readings that follow, so it is dropped.
pub fn extract_reading(xml: &str, config: &FuriganaConfig) -> Result<String, LookupError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut readings: Vec<String> = Vec::new();
    let mut has_subwords = false;
    let mut current: Option<String> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == config.reading_tag.as_bytes() {
                    current = Some(String::new());
                } else if e.name().as_ref() == config.subword_list_tag.as_bytes() {
                    has_subwords = true;
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == config.reading_tag.as_bytes() {
                    readings.push(String::new());
                } else if e.name().as_ref() == config.subword_list_tag.as_bytes() {
                    has_subwords = true;
                }
            }
            Ok(Event::Text(t)) => {
                if let Some(reading) = current.as_mut() {
                    let text = t
                        .unescape()
                        .map_err(|e| LookupError::Xml(e.to_string()))?;
                    reading.push_str(&text);
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == config.reading_tag.as_bytes()
                    && let Some(reading) = current.take()
                {
                    readings.push(reading);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(LookupError::Xml(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    let skip = usize::from(has_subwords);
    if readings.len() <= skip {
        return Err(LookupError::NoContent {
            provider: "furigana service",
        });
    }
    Ok(readings[skip..].concat())
}
