//! XML document format for the Cases table.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <cases>
//!   <case>
//!     <case_id>5</case_id>
//!     <case_number>X</case_number>
//!     <opening_date>2024-02-02</opening_date>
//!     <description>d</description>
//!   </case>
//! </cases>
//! ```

use std::collections::HashSet;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use shared_types::{is_blank, parse_iso_date, trim_owned, Case};

pub const ROOT_ELEMENT: &str = "cases";
pub const CASE_ELEMENT: &str = "case";

#[derive(Debug, thiserror::Error)]
pub enum CaseXmlError {
    #[error("malformed document: {0}")]
    Parse(#[from] quick_xml::de::DeError),
    #[error("case #{position}: <{field}> is missing or empty")]
    MissingField { position: usize, field: &'static str },
    #[error("case #{position}: case_id {value:?} is not an integer")]
    InvalidId { position: usize, value: String },
    #[error("case #{position}: opening_date {value:?} is not a YYYY-MM-DD date")]
    InvalidDate { position: usize, value: String },
    #[error("case #{position}: case_id {case_id} already used by an earlier case")]
    DuplicateId { position: usize, case_id: i64 },
    #[error("failed to write document: {0}")]
    Write(String),
}

/// `<case>` elements need not be adjacent: comments and unrelated elements
/// between them are skipped.
#[derive(Debug, Deserialize)]
struct CasesDocument {
    #[serde(rename = "case", default)]
    cases: Vec<CaseElement>,
}

/// Children are optional here so that a missing element and an empty one
/// are reported the same way, with the case position attached.
#[derive(Debug, Deserialize)]
struct CaseElement {
    case_id: Option<String>,
    case_number: Option<String>,
    opening_date: Option<String>,
    description: Option<String>,
}

fn required(
    value: Option<String>,
    position: usize,
    field: &'static str,
) -> Result<String, CaseXmlError> {
    match value {
        Some(v) if !is_blank(&v) => Ok(trim_owned(v)),
        _ => Err(CaseXmlError::MissingField { position, field }),
    }
}

impl CaseElement {
    fn into_case(self, position: usize) -> Result<Case, CaseXmlError> {
        let case_id = required(self.case_id, position, "case_id")?;
        let case_number = required(self.case_number, position, "case_number")?;
        let opening_date = required(self.opening_date, position, "opening_date")?;
        let description = required(self.description, position, "description")?;

        let case_id = case_id
            .trim()
            .parse::<i64>()
            .map_err(|_| CaseXmlError::InvalidId {
                position,
                value: case_id.clone(),
            })?;

        if parse_iso_date(&opening_date).is_none() {
            return Err(CaseXmlError::InvalidDate {
                position,
                value: opening_date,
            });
        }

        Ok(Case {
            case_id,
            case_number,
            opening_date,
            description,
        })
    }
}

/// Parse a Cases document into records, validating every `<case>` before
/// returning. Either the whole document is accepted or nothing is.
pub fn parse_cases(xml: &str) -> Result<Vec<Case>, CaseXmlError> {
    let document: CasesDocument = quick_xml::de::from_str(xml)?;

    let mut seen = HashSet::with_capacity(document.cases.len());
    let mut cases = Vec::with_capacity(document.cases.len());
    for (index, element) in document.cases.into_iter().enumerate() {
        let position = index + 1;
        let case = element.into_case(position)?;
        if !seen.insert(case.case_id) {
            return Err(CaseXmlError::DuplicateId {
                position,
                case_id: case.case_id,
            });
        }
        cases.push(case);
    }
    Ok(cases)
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), CaseXmlError> {
    writer
        .write_event(event)
        .map_err(|e| CaseXmlError::Write(e.to_string()))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), CaseXmlError> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

/// Serialize cases as an indented Cases document, one `<case>` per record
/// in the order given.
pub fn render_cases(cases: &[Case]) -> Result<String, CaseXmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;

    if cases.is_empty() {
        write_event(&mut writer, Event::Empty(BytesStart::new(ROOT_ELEMENT)))?;
    } else {
        write_event(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        for case in cases {
            write_event(&mut writer, Event::Start(BytesStart::new(CASE_ELEMENT)))?;
            write_text_element(&mut writer, "case_id", &case.case_id.to_string())?;
            write_text_element(&mut writer, "case_number", &case.case_number)?;
            write_text_element(&mut writer, "opening_date", &case.opening_date)?;
            write_text_element(&mut writer, "description", &case.description)?;
            write_event(&mut writer, Event::End(BytesEnd::new(CASE_ELEMENT)))?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
    }

    String::from_utf8(writer.into_inner()).map_err(|e| CaseXmlError::Write(e.to_string()))
}
