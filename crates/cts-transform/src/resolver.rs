//! Agent resolution: creator, author, and editor columns into structured
//! person records.

use cts_model::{AgentRecord, AgentType, FieldValue, ObjectRecord};

use crate::diagnostics::{DiagnosticCategory, DiagnosticsSink};
use crate::names::{guess_name_order, unpack_agent_names};

/// Delimiters seen in the birth-year columns, tried in order; the first
/// one present wins.
const DATE_DELIMITERS: [char; 3] = ['/', ';', ','];

/// Resolve every person named on a record.
///
/// Result ordering contract: artists in creator-string order, then
/// authors in author-string order, then at most one editor. Index
/// correspondence matters: the i-th born / birth place / sex value
/// belongs to the i-th name, so distribution is strictly positional.
///
/// Data-quality problems never abort resolution; mismatches go to the
/// sink and the result stays best-effort.
pub fn resolve_agents(record: &ObjectRecord, sink: &dyn DiagnosticsSink) -> Vec<AgentRecord> {
    let mut agents = resolve_artists(record, sink);
    agents.extend(resolve_authors(record, sink));
    agents.extend(resolve_editor(record));
    for agent in &mut agents {
        agent.trim_in_place();
    }
    agents
}

fn resolve_artists(record: &ObjectRecord, sink: &dyn DiagnosticsSink) -> Vec<AgentRecord> {
    // The repeat separator is never intentionally used in the creator
    // column; if it shows up anyway, only the first piece is real.
    let creator = record
        .get("creator_text_inverted")
        .and_then(FieldValue::first)
        .unwrap_or("");
    let mut artists = unpack_into_agents(creator, AgentType::Artist);

    if let Some(born) = record.get_nonempty("born") {
        distribute_delimited(born, &mut artists, |agent, piece| agent.born = Some(piece));
        if let Some(first) = artists.first_mut()
            && first.born.is_none()
        {
            first.born = Some(born.to_string());
        }
    }

    distribute_positional(record, "birth_place", &mut artists, sink, |agent, value| {
        agent.birth_place = Some(value);
    });
    distribute_positional(record, "sex", &mut artists, sink, |agent, value| {
        agent.sex = Some(value);
    });

    // These rarely, if ever, repeat; they describe the first-listed artist.
    if let Some(first) = artists.first_mut() {
        first.died = record.get_nonempty("died").map(str::to_string);
        first.ethnicity = record.get_nonempty("ethnicity").map(str::to_string);
        first.nationality = record.get_nonempty("nationality").map(str::to_string);
    }

    artists
}

fn resolve_authors(record: &ObjectRecord, sink: &dyn DiagnosticsSink) -> Vec<AgentRecord> {
    let Some(author) = record.get_nonempty("author") else {
        return Vec::new();
    };
    let mut authors = unpack_into_agents(author, AgentType::Author);

    if let Some(first) = authors.first_mut() {
        first.born = record.get_nonempty("author_birth_year").map(str::to_string);
    }

    distribute_positional(
        record,
        "author_birth_place",
        &mut authors,
        sink,
        |agent, value| {
            agent.birth_place = Some(value);
        },
    );
    distribute_positional(
        record,
        "author_gender",
        &mut authors,
        sink,
        |agent, value| {
            agent.sex = Some(value);
        },
    );

    if let Some(first) = authors.first_mut() {
        first.died = record.get_nonempty("author_death_year").map(str::to_string);
        first.nationality = record
            .get_nonempty("author_nationality")
            .map(str::to_string);
    }

    authors
}

fn resolve_editor(record: &ObjectRecord) -> Option<AgentRecord> {
    // The editor column names exactly one person; no unpacking.
    let editor = record.get_nonempty("editor")?;
    Some(guess_name_order(editor).into_agent(AgentType::Editor))
}

fn unpack_into_agents(blob: &str, agent_type: AgentType) -> Vec<AgentRecord> {
    unpack_agent_names(blob)
        .into_iter()
        .map(|name| guess_name_order(&name).into_agent(agent_type))
        .collect()
}

/// Split `value` on the first date delimiter it contains and assign piece
/// *i* to agent *i*. Excess pieces are dropped. Returns whether a
/// delimiter was found.
fn distribute_delimited<F>(value: &str, agents: &mut [AgentRecord], mut assign: F) -> bool
where
    F: FnMut(&mut AgentRecord, String),
{
    for delim in DATE_DELIMITERS {
        if value.contains(delim) {
            for (agent, piece) in agents.iter_mut().zip(value.split(delim)) {
                assign(agent, piece.to_string());
            }
            return true;
        }
    }
    false
}

/// Assign element *i* of a sequence-valued field to agent *i*. Extra
/// values have no agent to land on; that is reported, not fatal.
fn distribute_positional<F>(
    record: &ObjectRecord,
    field: &str,
    agents: &mut [AgentRecord],
    sink: &dyn DiagnosticsSink,
    mut assign: F,
) where
    F: FnMut(&mut AgentRecord, String),
{
    let Some(value) = record.get(field) else {
        return;
    };
    let count = value.len();
    for (index, piece) in value.values().enumerate() {
        match agents.get_mut(index) {
            Some(agent) => assign(agent, piece.to_string()),
            None => {
                sink.report(
                    DiagnosticCategory::Alignment,
                    record.object_id(),
                    &format!(
                        "{field} has {count} values for {} agent(s): '{piece}' has no one to attach to",
                        agents.len()
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{CollectingSink, NullSink};
    use cts_model::FieldValue;

    fn record(fields: &[(&str, FieldValue)]) -> ObjectRecord {
        let mut record = ObjectRecord::new();
        for (name, value) in fields {
            record.insert(*name, value.clone());
        }
        record
    }

    #[test]
    fn single_artist_with_born() {
        let record = record(&[
            ("creator_text_inverted", FieldValue::from("Bob, Jim")),
            ("born", FieldValue::from("1900")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].agent_type, AgentType::Artist);
        assert_eq!(agents[0].last_name, "Bob");
        assert_eq!(agents[0].first_name.as_deref(), Some("Jim"));
        assert_eq!(agents[0].born.as_deref(), Some("1900"));
    }

    #[test]
    fn born_splits_across_artists() {
        let record = record(&[
            (
                "creator_text_inverted",
                FieldValue::from("Doe, John; Roe, Jane"),
            ),
            ("born", FieldValue::from("1900/1998")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents[0].born.as_deref(), Some("1900"));
        assert_eq!(agents[1].born.as_deref(), Some("1998"));
    }

    #[test]
    fn excess_born_pieces_are_dropped() {
        let record = record(&[
            ("creator_text_inverted", FieldValue::from("Doe, John")),
            ("born", FieldValue::from("1900/1998/2001")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].born.as_deref(), Some("1900"));
    }

    #[test]
    fn undelimited_born_goes_to_the_first_artist_only() {
        let record = record(&[
            (
                "creator_text_inverted",
                FieldValue::from("Doe, John; Roe, Jane"),
            ),
            ("born", FieldValue::from("1900")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents[0].born.as_deref(), Some("1900"));
        assert_eq!(agents[1].born, None);
    }

    #[test]
    fn first_artist_owns_the_unary_biographical_columns() {
        let record = record(&[
            (
                "creator_text_inverted",
                FieldValue::from("Doe, John; Roe, Jane"),
            ),
            ("died", FieldValue::from("1998")),
            ("nationality", FieldValue::from("American")),
            ("ethnicity", FieldValue::from("n/a")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents[0].died.as_deref(), Some("1998"));
        assert_eq!(agents[0].nationality.as_deref(), Some("American"));
        assert_eq!(agents[1].died, None);
        assert_eq!(agents[1].nationality, None);
    }

    #[test]
    fn sequence_columns_distribute_positionally() {
        let record = record(&[
            (
                "creator_text_inverted",
                FieldValue::from("Doe, John; Roe, Jane"),
            ),
            (
                "birth_place",
                FieldValue::Multi(vec!["Boston".to_string(), "Antigua".to_string()]),
            ),
            (
                "sex",
                FieldValue::Multi(vec!["M".to_string(), "F".to_string()]),
            ),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents[0].birth_place.as_deref(), Some("Boston"));
        assert_eq!(agents[1].birth_place.as_deref(), Some("Antigua"));
        assert_eq!(agents[0].sex.as_deref(), Some("M"));
        assert_eq!(agents[1].sex.as_deref(), Some("F"));
    }

    #[test]
    fn alignment_mismatch_reports_and_continues() {
        let sink = CollectingSink::new();
        let record = record(&[
            ("object_id", FieldValue::from("77")),
            ("creator_text_inverted", FieldValue::from("Doe, John")),
            (
                "sex",
                FieldValue::Multi(vec!["M".to_string(), "F".to_string(), "M".to_string()]),
            ),
        ]);
        let agents = resolve_agents(&record, &sink);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].sex.as_deref(), Some("M"));
        let reports = sink.take();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].category, DiagnosticCategory::Alignment);
        assert_eq!(reports[0].object_id, "77");
    }

    #[test]
    fn authors_follow_artists_and_editor_comes_last() {
        let record = record(&[
            (
                "creator_text_inverted",
                FieldValue::from("Bob, Jim; Bob, Jane"),
            ),
            ("author", FieldValue::from("Bennett, John; Thomas Cassidy")),
            ("author_birth_year", FieldValue::from("1975")),
            ("editor", FieldValue::from("Mekas, Jonas")),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents.len(), 5);
        assert_eq!(agents[0].last_name, "Bob");
        assert_eq!(agents[0].first_name.as_deref(), Some("Jim"));
        assert_eq!(agents[0].agent_type, AgentType::Artist);
        assert_eq!(agents[1].first_name.as_deref(), Some("Jane"));
        assert_eq!(agents[2].last_name, "Bennett");
        assert_eq!(agents[2].agent_type, AgentType::Author);
        assert_eq!(agents[2].born.as_deref(), Some("1975"));
        assert_eq!(agents[3].last_name, "Cassidy");
        assert_eq!(agents[3].first_name.as_deref(), Some("Thomas"));
        assert_eq!(agents[4].last_name, "Mekas");
        assert_eq!(agents[4].agent_type, AgentType::Editor);
    }

    #[test]
    fn author_biography_lands_on_author_zero() {
        let record = record(&[
            ("creator_text_inverted", FieldValue::from("Cher")),
            ("author", FieldValue::from("Brown, Rita Mae and Paul Smith")),
            ("author_death_year", FieldValue::from("2001")),
            ("author_nationality", FieldValue::from("American")),
            (
                "author_gender",
                FieldValue::Multi(vec!["F".to_string(), "M".to_string()]),
            ),
        ]);
        let agents = resolve_agents(&record, &NullSink);
        // Cher, two authors.
        assert_eq!(agents.len(), 3);
        assert_eq!(agents[1].died.as_deref(), Some("2001"));
        assert_eq!(agents[1].nationality.as_deref(), Some("American"));
        assert_eq!(agents[1].sex.as_deref(), Some("F"));
        assert_eq!(agents[2].sex.as_deref(), Some("M"));
        assert_eq!(agents[2].died, None);
    }

    #[test]
    fn missing_creator_degrades_to_one_empty_surname() {
        let record = record(&[]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].last_name, "");
        assert_eq!(agents[0].agent_type, AgentType::Artist);
    }

    #[test]
    fn creator_as_sequence_uses_the_first_element() {
        let record = record(&[(
            "creator_text_inverted",
            FieldValue::Multi(vec!["Doe, John".to_string(), "noise".to_string()]),
        )]);
        let agents = resolve_agents(&record, &NullSink);
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].last_name, "Doe");
    }
}
