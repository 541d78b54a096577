//! Per-record data-quality checks ported from the manual review logs kept
//! alongside the legacy database.

use cts_model::ObjectRecord;

use crate::diagnostics::{DiagnosticCategory, DiagnosticsSink};

/// Substrings in a parsed surname that suggest the name splitter got it
/// wrong.
const NAME_TROUBLE: [&str; 5] = [";", "&", ":", "(", "et al"];

/// Frame vocabulary that needs no human review, including the value
/// combinations that show up as pairs.
const UNDERSTOOD_FRAMES: &[&[&str]] = &[
    &["Artist Specified Framing"],
    &["Yes"],
    &["yes"],
    &["No"],
    &["no"],
    &["No Frame"],
    &["Unique Frame"],
    &["Frame"],
    &["no", "No Frame"],
    &["yes", "Frame"],
    &["Yes", "Frame"],
    &["No", "No Frame"],
    &["N.A.", "No Frame"],
    &["Frame", "Artist Specified Framing"],
];

/// Inspect one resolved record and report anything a curator should look
/// at before import. Never fails; findings go to the sink.
pub fn note_oddities(record: &ObjectRecord, sink: &dyn DiagnosticsSink) {
    let object_id = record.object_id();

    for agent in &record.agents {
        if NAME_TROUBLE
            .iter()
            .any(|trouble| agent.last_name.contains(trouble))
        {
            let creator = record.get_first("creator_text_inverted").unwrap_or("");
            sink.report(
                DiagnosticCategory::WeirdName,
                object_id,
                &format!(
                    "parsed '{creator}' into a suspicious surname '{}' ({})",
                    agent.last_name, agent.agent_type
                ),
            );
        }
    }

    if let Some(running_time) = record.get_nonempty("running_time")
        && !running_time.contains("inute")
    {
        sink.report(
            DiagnosticCategory::RunningTime,
            object_id,
            &format!("running time without a minutes marker: '{running_time}'"),
        );
    }

    if let Some(ethnicity) = record.get_nonempty("ethnicity")
        && ethnicity.chars().any(|ch| ch.is_ascii_digit())
    {
        sink.report(
            DiagnosticCategory::Ethnicity,
            object_id,
            &format!("digits in ethnicity: '{ethnicity}'"),
        );
    }

    if let Some(frame) = record.get("frame") {
        let values: Vec<&str> = frame.values().collect();
        if !values.is_empty()
            && !UNDERSTOOD_FRAMES
                .iter()
                .any(|known| *known == values.as_slice())
        {
            sink.report(
                DiagnosticCategory::Frame,
                object_id,
                &format!("unrecognized frame value: {values:?}"),
            );
        }
    }

    if let Some(editor) = record.get_nonempty("editor")
        && editor.contains("the undersigned")
    {
        sink.report(
            DiagnosticCategory::Editor,
            object_id,
            &format!("copyright boilerplate in editor: '{editor}'"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use cts_model::{AgentRecord, AgentType, FieldValue};

    fn base_record() -> ObjectRecord {
        let mut record = ObjectRecord::new();
        record.insert("object_id", FieldValue::from("9"));
        record
    }

    #[test]
    fn clean_record_reports_nothing() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert("running_time", FieldValue::from("12 minutes"));
        record.insert("frame", FieldValue::Multi(vec!["No Frame".to_string()]));
        record
            .agents
            .push(AgentRecord::new(AgentType::Artist, "Doe"));
        note_oddities(&record, &sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn suspicious_surname_is_flagged() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert("creator_text_inverted", FieldValue::from("Doe; et al"));
        record
            .agents
            .push(AgentRecord::new(AgentType::Artist, "Doe; et al"));
        note_oddities(&record, &sink);
        let reports = sink.take();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].category, DiagnosticCategory::WeirdName);
        assert_eq!(reports[0].object_id, "9");
    }

    #[test]
    fn running_time_needs_minutes() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert("running_time", FieldValue::from("3 hours"));
        note_oddities(&record, &sink);
        assert_eq!(sink.take()[0].category, DiagnosticCategory::RunningTime);

        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert("running_time", FieldValue::from("90 Minutes"));
        note_oddities(&record, &sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn numeric_ethnicity_is_flagged() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert("ethnicity", FieldValue::from("1942"));
        note_oddities(&record, &sink);
        assert_eq!(sink.take()[0].category, DiagnosticCategory::Ethnicity);
    }

    #[test]
    fn frame_vocabulary_pairs_are_understood() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert(
            "frame",
            FieldValue::Multi(vec!["N.A.".to_string(), "No Frame".to_string()]),
        );
        note_oddities(&record, &sink);
        assert!(sink.is_empty());

        let mut record = base_record();
        record.insert(
            "frame",
            FieldValue::Multi(vec!["gilt, ornate".to_string()]),
        );
        note_oddities(&record, &sink);
        assert_eq!(sink.take()[0].category, DiagnosticCategory::Frame);
    }

    #[test]
    fn editor_boilerplate_is_flagged() {
        let sink = CollectingSink::new();
        let mut record = base_record();
        record.insert(
            "editor",
            FieldValue::from("rights reserved by the undersigned"),
        );
        note_oddities(&record, &sink);
        assert_eq!(sink.take()[0].category, DiagnosticCategory::Editor);
    }
}
