//! Reader for `docProps/core.xml`.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Error, Result};
use crate::model::Metadata;

#[derive(Clone, Copy)]
enum Field {
    Title,
    Creator,
    Subject,
    LastModifiedBy,
    Created,
    Modified,
}

fn field_for(name: &[u8]) -> Option<Field> {
    match name {
        b"dc:title" => Some(Field::Title),
        b"dc:creator" => Some(Field::Creator),
        b"dc:subject" => Some(Field::Subject),
        b"cp:lastModifiedBy" => Some(Field::LastModifiedBy),
        b"dcterms:created" => Some(Field::Created),
        b"dcterms:modified" => Some(Field::Modified),
        _ => None,
    }
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

/// Parse the core properties part into document metadata.
pub(crate) fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let mut metadata = Metadata::default();

    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => field = field_for(e.name().as_ref()),
            Ok(Event::Text(e)) => {
                if let Some(current) = field {
                    let value = e
                        .unescape()
                        .map_err(|err| Error::Xml(format!("core.xml text: {}", err)))?
                        .into_owned();
                    match current {
                        Field::Title => metadata.title = Some(value),
                        Field::Creator => metadata.author = Some(value),
                        Field::Subject => metadata.subject = Some(value),
                        Field::LastModifiedBy => metadata.last_modified_by = Some(value),
                        Field::Created => metadata.created = parse_date(&value),
                        Field::Modified => metadata.modified = parse_date(&value),
                    }
                }
            }
            Ok(Event::End(_)) => field = None,
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(format!("core.xml: {}", e))),
            _ => {}
        }
        buf.clear();
    }

    Ok(metadata)
}
