//! Template substitution and document formatting

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use super::{strip_blank_lines, INDENT};
use crate::error::Result;

/// Replace every occurrence of `placeholder` in `template` with `block`.
///
/// Returns `None` when the placeholder does not occur.
pub fn substitute(template: &str, placeholder: &str, block: &str) -> Option<String> {
    let occurrences = template.matches(placeholder).count();
    if occurrences == 0 {
        return None;
    }
    if occurrences > 1 {
        tracing::warn!(placeholder, occurrences, "Placeholder occurs more than once; replacing all");
    }
    Some(template.replace(placeholder, block))
}

/// Reformat a whole document with 4-space indentation and no blank lines.
///
/// Whitespace-only text is dropped and elements with no content are written
/// self-closing, so formatting an already formatted document is a no-op.
pub fn pretty_print(document: &str) -> Result<String> {
    let mut reader = Reader::from_str(document);
    reader.config_mut().trim_text(true);

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    // Start tag held back until we know whether the element has content
    let mut pending = None;

    loop {
        let event = reader.read_event()?;
        if let Event::Eof = event {
            break;
        }

        if let Some(start) = pending.take() {
            if let Event::End(_) = event {
                writer.write_event(Event::Empty(start))?;
                continue;
            }
            writer.write_event(Event::Start(start))?;
        }

        match event {
            Event::Start(start) => pending = Some(start),
            other => writer.write_event(other)?,
        }
    }

    if let Some(start) = pending.take() {
        writer.write_event(Event::Start(start))?;
    }

    let mut formatted = strip_blank_lines(&String::from_utf8(writer.into_inner())?);
    formatted.push('\n');
    Ok(formatted)
}
