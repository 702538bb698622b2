/*! Dialog assembly.

A [Turn] is an ordered field-name → value mapping built by zipping a corpus header
with a positional row of values. A [Dialog] is an ordered sequence of turns sharing an identifier.

Field order is the order of the header, and is kept through serialization.
!*/
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Positional values of a turn, before being zipped with a header.
pub type Row = Vec<Value>;

/// Enhanced anti-scam turn layout.
pub const ANTISCAM_HEADER: [&str; 7] = [
    "turn",
    "agent",
    "text",
    "tokens",
    "intent",
    "semantic_slot",
    "topics",
];

/// Enhanced persuasion turn layout.
pub const PERSUASION_HEADER: [&str; 7] = [
    "index",
    "text",
    "tokens",
    "topics",
    "turn",
    "role",
    "dialog_id",
];

/// Raw persuasion turn layout, as found in the source csv.
pub const PERSUASION_RAW_HEADER: [&str; 5] = ["index", "text", "turn", "role", "dialog_id"];

/// Inserts `value` at `index`, appending when `index` is past the end of the row.
///
/// Rows coming from sources can be shorter than expected,
/// in which case annotations land at the end of the row instead of failing.
pub fn insert_at(row: &mut Row, index: usize, value: Value) {
    let index = index.min(row.len());
    row.insert(index, value);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Turn(Map<String, Value>);

impl Turn {
    /// Zip a header with positional values.
    ///
    /// Values past the header length are dropped,
    /// and header fields without a value are absent from the turn.
    pub fn zip(header: &[&str], values: Row) -> Self {
        let fields = header
            .iter()
            .zip(values)
            .map(|(name, value)| (name.to_string(), value))
            .collect();
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field names, in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Ordered turns sharing an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    id: String,
    turns: Vec<Turn>,
}

impl Dialog {
    /// Builds a dialog by zipping each row with the same header.
    pub fn assemble(id: String, header: &[&str], rows: impl IntoIterator<Item = Row>) -> Self {
        let turns = rows.into_iter().map(|row| Turn::zip(header, row)).collect();
        Self { id, turns }
    }

    /// Get a reference to the dialog's id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get a reference to the dialog's turns.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn zip_keeps_header_order() {
        let row = vec![json!(0), json!("Scammer"), json!("hello")];
        let turn = Turn::zip(&["turn", "agent", "text"], row);
        let fields: Vec<&str> = turn.fields().collect();
        assert_eq!(fields, vec!["turn", "agent", "text"]);
        assert_eq!(turn.get("agent"), Some(&json!("Scammer")));
    }

    #[test]
    fn zip_drops_surplus_values() {
        let row = vec![json!("a"), json!("b"), json!("c")];
        let turn = Turn::zip(&["first", "second"], row);
        assert_eq!(turn.len(), 2);
        assert_eq!(turn.get("third"), None);
    }

    #[test]
    fn zip_short_row() {
        let row = vec![json!("a")];
        let turn = Turn::zip(&PERSUASION_RAW_HEADER, row);
        assert_eq!(turn.len(), 1);
        assert_eq!(turn.get("index"), Some(&json!("a")));
    }

    #[test]
    fn insert_past_end_appends() {
        let mut row = vec![json!(1), json!(2)];
        insert_at(&mut row, 6, json!(3));
        assert_eq!(row, vec![json!(1), json!(2), json!(3)]);

        insert_at(&mut row, 0, json!(0));
        assert_eq!(row, vec![json!(0), json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn serialized_order() {
        let turn = Turn::zip(&["z", "a", "m"], vec![json!(1), json!(2), json!(3)]);
        let s = serde_json::to_string(&turn).unwrap();
        assert_eq!(s, r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn assemble() {
        let rows = vec![vec![json!("0"), json!("hi")], vec![json!("1"), json!("hello")]];
        let d = Dialog::assemble("20180904-045349_715_live".to_string(), &["index", "text"], rows);
        assert_eq!(d.len(), 2);
        assert_eq!(d.turns()[1].get("text"), Some(&json!("hello")));
        assert_eq!(d.id(), "20180904-045349_715_live");
    }
}
