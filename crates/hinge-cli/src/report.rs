use std::fmt::Write as _;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::util::Output;

/// Labelled results of a command, rendered as text or JSON.
#[derive(Debug, Clone)]
pub(crate) struct Report {
    data: Vec<f64>,
    entries: Vec<Entry>,
}

#[derive(Debug, Clone)]
struct Entry {
    label: String,
    key: String,
    value: Value,
}

impl Report {
    pub(crate) fn new(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
            entries: vec![],
        }
    }

    /// Adds a result shown as `label` in text output and stored under `key` in JSON output.
    pub(crate) fn push<T>(
        &mut self,
        label: impl Into<String>,
        key: impl Into<String>,
        value: T,
    ) -> anyhow::Result<()>
    where
        T: Serialize,
    {
        self.entries.push(Entry {
            label: label.into(),
            key: key.into(),
            value: serde_json::to_value(value)?,
        });
        Ok(())
    }

    pub(crate) fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("data".to_owned(), Value::from(self.data.clone()));
        for entry in &self.entries {
            map.insert(entry.key.clone(), entry.value.clone());
        }
        Value::Object(map)
    }

    pub(crate) fn to_text(&self) -> String {
        let mut text = String::new();
        let data = Value::from(self.data.clone());
        let _ = writeln!(text, "Data (json): {data}");
        for entry in &self.entries {
            let value = match &entry.value {
                Value::Null => "n/a".to_owned(),
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let _ = writeln!(text, "{}: {value}", entry.label);
        }
        text
    }

    pub(crate) fn write(&self, output: &mut Output, json: bool) -> anyhow::Result<()> {
        if json {
            output.write_json(&self.to_json())
        } else {
            output.write_text(&self.to_text())
        }
    }
}
