//! Import-document generation.
//!
//! The destination service ingests `<imports>` documents: one `<import>`
//! element per object, carrying the common collection-object schema. The
//! event writer escapes text content, so raw ampersands and angle
//! brackets in the data need no special handling here.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use cts_model::ObjectRecord;

use crate::common::{COLLECTIONOBJECTS_NS, COLLECTIONOBJECTS_SCHEMA, file_stem_for};

/// Serialize one record into an import document.
pub fn write_import_xml(record: &ObjectRecord) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut xml = Writer::new_with_indent(&mut buffer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("imports")))?;

    let mut import = BytesStart::new("import");
    import.push_attribute(("seq", "1"));
    import.push_attribute(("service", "CollectionObjects"));
    import.push_attribute(("type", "CollectionObject"));
    xml.write_event(Event::Start(import))?;

    let mut schema = BytesStart::new("schema");
    schema.push_attribute((
        format!("xmlns:{COLLECTIONOBJECTS_SCHEMA}").as_str(),
        COLLECTIONOBJECTS_NS,
    ));
    schema.push_attribute(("name", COLLECTIONOBJECTS_SCHEMA));
    xml.write_event(Event::Start(schema))?;

    text_element(&mut xml, "objectNumber", record.acc_no())?;

    if let Some(title) = record.get_nonempty("title") {
        nested(&mut xml, "titleGroupList", |xml| {
            nested(xml, "titleGroup", |xml| {
                text_element(xml, "title", Some(title))?;
                text_element(xml, "titleLanguage", Some("eng"))
            })
        })?;
    }

    if let Some(date) = record.get_nonempty("date") {
        nested(&mut xml, "objectProductionDates", |xml| {
            text_element(xml, "objectProductionDate", Some(date))
        })?;
    }

    if let Some(medium) = record.get_nonempty("medium") {
        nested(&mut xml, "materialGroupList", |xml| {
            nested(xml, "materialGroup", |xml| {
                text_element(xml, "material", Some(medium))
            })
        })?;
    }

    if let Some(subjects) = record.get("iaia_subject") {
        nested(&mut xml, "contentConcepts", |xml| {
            for concept in subjects.values().filter(|value| !value.is_empty()) {
                text_element(xml, "contentConcept", Some(concept))?;
            }
            Ok(())
        })?;
    }

    if let Some(name) = record.get_nonempty("classification") {
        nested(&mut xml, "objectNameList", |xml| {
            nested(xml, "objectNameGroup", |xml| {
                text_element(xml, "objectName", Some(name))?;
                text_element(xml, "objectNameCurrency", Some("current"))?;
                text_element(xml, "objectNameType", Some("classified"))?;
                text_element(xml, "objectNameSystem", Some("In-house"))?;
                text_element(xml, "objectNameLanguage", Some("eng"))
            })
        })?;
    }

    text_element(
        &mut xml,
        "physicalDescription",
        record.get_nonempty("description"),
    )?;
    text_element(&mut xml, "editionNumber", record.get_nonempty("edition"))?;
    text_element(
        &mut xml,
        "dimensionSummary",
        record.get_nonempty("dimensions"),
    )?;
    text_element(
        &mut xml,
        "inscriptionContent",
        record.get_nonempty("inscription_location"),
    )?;

    if let Some(owner) = record.get_nonempty("source") {
        nested(&mut xml, "owners", |xml| {
            text_element(xml, "owner", Some(owner))
        })?;
    }

    if !record.agents.is_empty() {
        nested(&mut xml, "objectProductionPersonGroupList", |xml| {
            for agent in &record.agents {
                nested(xml, "objectProductionPersonGroup", |xml| {
                    text_element(
                        xml,
                        "objectProductionPerson",
                        Some(&agent.display_name()),
                    )?;
                    text_element(
                        xml,
                        "objectProductionPersonRole",
                        Some(&agent.agent_type.to_string()),
                    )
                })?;
            }
            Ok(())
        })?;
    }

    xml.write_event(Event::End(BytesEnd::new("schema")))?;
    xml.write_event(Event::End(BytesEnd::new("import")))?;
    xml.write_event(Event::End(BytesEnd::new("imports")))?;
    Ok(buffer)
}

/// Write one record's import document under the output directory, named
/// for its accession number.
pub fn write_import_file(output_dir: &Path, record: &ObjectRecord) -> Result<PathBuf> {
    let stem = file_stem_for(record.acc_no().unwrap_or(""));
    let path = output_dir.join(format!("{stem}.xml"));
    let bytes = write_import_xml(record)?;
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(path)
}

/// Write an import document per record; returns the written paths.
pub fn write_import_files(output_dir: &Path, records: &[ObjectRecord]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let mut paths = Vec::with_capacity(records.len());
    for record in records {
        paths.push(write_import_file(output_dir, record)?);
    }
    Ok(paths)
}

fn text_element<W: Write>(xml: &mut Writer<W>, name: &str, value: Option<&str>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };
    let qualified = format!("{COLLECTIONOBJECTS_SCHEMA}:{name}");
    xml.write_event(Event::Start(BytesStart::new(qualified.as_str())))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(qualified.as_str())))?;
    Ok(())
}

fn nested<W, F>(xml: &mut Writer<W>, name: &str, body: F) -> Result<()>
where
    W: Write,
    F: FnOnce(&mut Writer<W>) -> Result<()>,
{
    let qualified = format!("{COLLECTIONOBJECTS_SCHEMA}:{name}");
    xml.write_event(Event::Start(BytesStart::new(qualified.as_str())))?;
    body(xml)?;
    xml.write_event(Event::End(BytesEnd::new(qualified.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cts_model::{AgentRecord, AgentType, FieldValue};

    fn sample_record() -> ObjectRecord {
        let mut record = ObjectRecord::new();
        record.insert("acc_no", FieldValue::from("2011.404"));
        record.insert(
            "title",
            FieldValue::Multi(vec!["Smoke & Mirrors".to_string()]),
        );
        record.insert(
            "iaia_subject",
            FieldValue::Multi(vec!["portraits".to_string(), "landscape".to_string()]),
        );
        record.insert("date", FieldValue::from("1972"));
        let mut artist = AgentRecord::new(AgentType::Artist, "Doe");
        artist.first_name = Some("John".to_string());
        record.agents.push(artist);
        record
    }

    #[test]
    fn document_shape() {
        let xml = String::from_utf8(write_import_xml(&sample_record()).unwrap()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<import seq=\"1\" service=\"CollectionObjects\" type=\"CollectionObject\">"));
        assert!(xml.contains("<collectionobjects_common:objectNumber>2011.404</collectionobjects_common:objectNumber>"));
        assert!(xml.contains("<collectionobjects_common:objectProductionPerson>John Doe</collectionobjects_common:objectProductionPerson>"));
        assert!(xml.contains("<collectionobjects_common:objectProductionPersonRole>artist</collectionobjects_common:objectProductionPersonRole>"));
    }

    #[test]
    fn ampersands_are_escaped() {
        let xml = String::from_utf8(write_import_xml(&sample_record()).unwrap()).unwrap();
        assert!(xml.contains("Smoke &amp; Mirrors"));
        assert!(!xml.contains("Smoke & Mirrors"));
    }

    #[test]
    fn repeating_subjects_each_get_an_element() {
        let xml = String::from_utf8(write_import_xml(&sample_record()).unwrap()).unwrap();
        assert_eq!(xml.matches("<collectionobjects_common:contentConcept>").count(), 2);
        assert!(xml.contains(">portraits<"));
        assert!(xml.contains(">landscape<"));
    }

    #[test]
    fn absent_fields_are_omitted() {
        let mut record = ObjectRecord::new();
        record.insert("acc_no", FieldValue::from("87.12"));
        let xml = String::from_utf8(write_import_xml(&record).unwrap()).unwrap();
        assert!(!xml.contains("titleGroupList"));
        assert!(!xml.contains("physicalDescription"));
        assert!(!xml.contains("objectProductionPersonGroupList"));
    }

    #[test]
    fn files_are_named_for_the_accession_number() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_import_files(dir.path(), &[sample_record()]).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("2011.404.xml"));
        assert!(paths[0].exists());
    }
}
