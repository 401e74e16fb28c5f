//! Response Capture
//!
//! Turns submitted form values into label-keyed records and lays the
//! response log out as a table.
//!
//! Records are keyed by the label a field had at submission time, so a
//! renamed or removed field shows `-` for older rows.

use std::collections::BTreeMap;

use crate::models::{FieldDescriptor, FieldType, ResponseLog, ResponseRecord};

/// Recorded for a checkbox group with nothing ticked
pub const NO_SELECTION: &str = "None";
/// Shown in the table for a missing or empty answer
pub const MISSING_ANSWER: &str = "-";

/// Control name of the field at `index` in the live form
pub fn field_name(index: usize) -> String {
    format!("field-{}", index)
}

/// Collect one answer per field.
///
/// `values` returns every submitted value for a control name, in order.
pub fn collect_answers<F>(fields: &[FieldDescriptor], values: F) -> BTreeMap<String, String>
where
    F: Fn(&str) -> Vec<String>,
{
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let submitted = values(&field_name(index));
            let answer = match field.field_type {
                FieldType::Checkbox if submitted.is_empty() => NO_SELECTION.to_string(),
                FieldType::Checkbox => submitted.join(", "),
                _ => submitted.into_iter().next().unwrap_or_default(),
            };
            (field.label.clone(), answer)
        })
        .collect()
}

impl ResponseRecord {
    pub fn capture<F>(fields: &[FieldDescriptor], timestamp: String, values: F) -> Self
    where
        F: Fn(&str) -> Vec<String>,
    {
        Self {
            timestamp,
            data: collect_answers(fields, values),
        }
    }
}

/// Tabular view of the log against the current field list
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResponseTable {
    pub fn build(fields: &[FieldDescriptor], log: &ResponseLog) -> Self {
        let headers = std::iter::once("Timestamp".to_string())
            .chain(fields.iter().map(|f| f.label.clone()))
            .collect();

        let rows = log
            .records()
            .iter()
            .map(|record| {
                std::iter::once(record.timestamp.clone())
                    .chain(fields.iter().map(|field| {
                        record
                            .data
                            .get(&field.label)
                            .filter(|answer| !answer.is_empty())
                            .cloned()
                            .unwrap_or_else(|| MISSING_ANSWER.to_string())
                    }))
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldPatch;
    use crate::models::FormModel;
    use std::collections::HashMap;

    fn submitted(pairs: &[(&str, Vec<&str>)]) -> impl Fn(&str) -> Vec<String> {
        let map: HashMap<String, Vec<String>> = pairs
            .iter()
            .map(|(name, vals)| (name.to_string(), vals.iter().map(|v| v.to_string()).collect()))
            .collect();
        move |name: &str| map.get(name).cloned().unwrap_or_default()
    }

    fn name_and_interests() -> FormModel {
        let mut form = FormModel::default();
        form.add_field(FieldType::Text);
        form.edit_field(0, &FieldPatch { label: "Name".into(), required: true, ..Default::default() })
            .unwrap();
        form.add_field(FieldType::Checkbox);
        form.edit_field(1, &FieldPatch { label: "Interests".into(), options: "Art, Music".into(), ..Default::default() })
            .unwrap();
        form
    }

    #[test]
    fn test_checkbox_answers() {
        let form = name_and_interests();

        let none = collect_answers(&form.fields, submitted(&[]));
        assert_eq!(none["Interests"], "None");
        assert_eq!(none["Name"], "");

        let both = collect_answers(&form.fields, submitted(&[("field-1", vec!["A", "B"])]));
        assert_eq!(both["Interests"], "A, B");
    }

    #[test]
    fn test_submission_scenario() {
        let form = name_and_interests();
        let record = ResponseRecord::capture(
            &form.fields,
            "1/2/2025, 10:00:00 AM".to_string(),
            submitted(&[("field-0", vec!["Alice"]), ("field-1", vec!["Music"])]),
        );

        let expected: BTreeMap<String, String> = [("Name", "Alice"), ("Interests", "Music")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(record.data, expected);
        assert_eq!(record.timestamp, "1/2/2025, 10:00:00 AM");
    }

    #[test]
    fn test_single_value_takes_first() {
        let mut form = FormModel::default();
        form.add_field(FieldType::Radio);
        let answers = collect_answers(&form.fields, submitted(&[("field-0", vec!["Option 2", "Option 3"])]));
        assert_eq!(answers["Radio Buttons"], "Option 2");
    }

    #[test]
    fn test_table_uses_current_labels() {
        let mut form = name_and_interests();
        let mut log = ResponseLog::default();
        log.append(ResponseRecord::capture(
            &form.fields,
            "t1".to_string(),
            submitted(&[("field-0", vec!["Alice"])]),
        ));

        // Rename one field and add another after the submission
        form.edit_field(0, &FieldPatch { label: "Full name".into(), ..Default::default() })
            .unwrap();
        form.add_field(FieldType::Email);

        let table = ResponseTable::build(&form.fields, &log);
        assert_eq!(table.headers, vec!["Timestamp", "Full name", "Interests", "Email"]);
        assert_eq!(table.rows, vec![vec!["t1", "-", "None", "-"]]);
    }

    #[test]
    fn test_table_shows_dash_for_empty_answer() {
        let form = name_and_interests();
        let mut log = ResponseLog::default();
        log.append(ResponseRecord::capture(&form.fields, "t".to_string(), submitted(&[])));
        let table = ResponseTable::build(&form.fields, &log);
        assert_eq!(table.rows[0][1], "-");
    }
}
