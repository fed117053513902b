//! Fight entities
//!
//! The input document is kept as raw JSON. Fields are looked up on demand so
//! that a record missing a field only fails when that field is actually used,
//! and the error names the exact key path (`fights[3].fighter2.lastName`).

use serde::Serialize;
use serde_json::Value;

use crate::domain::value_objects::FieldValue;
use crate::error::{RingsideError, RingsideResult};

/// Top-level key holding the fight array
pub const FIGHTS_KEY: &str = "fights";

/// Number of records listed under "Main card"
pub const MAIN_CARD_SIZE: usize = 5;

/// How absent or malformed record fields are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Any absent field is a fatal key-lookup error
    #[default]
    Strict,
    /// Absent flags are false, absent name parts render as `?`
    Lenient,
}

/// Which participant of a fight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    First,
    Second,
}

impl Corner {
    pub fn key(&self) -> &'static str {
        match self {
            Corner::First => "fighter1",
            Corner::Second => "fighter2",
        }
    }
}

/// The fight array extracted from an input document
#[derive(Debug, Clone)]
pub struct FightCard {
    fights: Vec<Value>,
}

impl FightCard {
    /// Parse a JSON document and extract its `fights` array
    pub fn parse(input: &str) -> RingsideResult<Self> {
        let document: Value = serde_json::from_str(input)?;
        Self::from_document(document)
    }

    pub fn from_document(document: Value) -> RingsideResult<Self> {
        let Value::Object(mut root) = document else {
            return Err(RingsideError::WrongType {
                key: "$".to_string(),
                expected: "an object",
            });
        };

        match root.remove(FIGHTS_KEY) {
            Some(Value::Array(fights)) => Ok(Self { fights }),
            Some(_) => Err(RingsideError::WrongType {
                key: FIGHTS_KEY.to_string(),
                expected: "an array",
            }),
            None => Err(RingsideError::MissingKey {
                key: FIGHTS_KEY.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.fights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fights.is_empty()
    }

    /// All records in array order
    pub fn records(&self) -> impl Iterator<Item = FightRecord<'_>> {
        self.fights
            .iter()
            .enumerate()
            .map(|(index, value)| FightRecord { index, value })
    }

    /// The first [`MAIN_CARD_SIZE`] records
    pub fn main_card(&self) -> impl Iterator<Item = FightRecord<'_>> {
        self.records().take(MAIN_CARD_SIZE)
    }
}

/// Borrowed view of one fight record
#[derive(Debug, Clone, Copy)]
pub struct FightRecord<'a> {
    index: usize,
    value: &'a Value,
}

impl<'a> FightRecord<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn has_started(&self, policy: FieldPolicy) -> RingsideResult<FieldValue> {
        self.field(&["hasStarted"], policy, || FieldValue::from(false))
    }

    pub fn is_complete(&self, policy: FieldPolicy) -> RingsideResult<FieldValue> {
        self.field(&["isComplete"], policy, || FieldValue::from(false))
    }

    pub fn fighter(&self, corner: Corner, policy: FieldPolicy) -> RingsideResult<FighterName> {
        let first_name = self.field(&[corner.key(), "firstName"], policy, FieldValue::placeholder)?;
        let last_name = self.field(&[corner.key(), "lastName"], policy, FieldValue::placeholder)?;
        Ok(FighterName {
            first_name,
            last_name,
        })
    }

    fn field(
        &self,
        path: &[&str],
        policy: FieldPolicy,
        fallback: impl FnOnce() -> FieldValue,
    ) -> RingsideResult<FieldValue> {
        match self.lookup(path) {
            Ok(value) => Ok(FieldValue::new(value.clone())),
            Err(_) if policy == FieldPolicy::Lenient => Ok(fallback()),
            Err(err) => Err(err),
        }
    }

    fn lookup(&self, path: &[&str]) -> RingsideResult<&'a Value> {
        let mut current = self.value;
        for (depth, key) in path.iter().enumerate() {
            let Value::Object(map) = current else {
                return Err(RingsideError::WrongType {
                    key: self.key_path(&path[..depth]),
                    expected: "an object",
                });
            };
            current = map.get(*key).ok_or_else(|| RingsideError::MissingKey {
                key: self.key_path(&path[..=depth]),
            })?;
        }
        Ok(current)
    }

    fn key_path(&self, segments: &[&str]) -> String {
        let mut key = format!("{}[{}]", FIGHTS_KEY, self.index);
        for segment in segments {
            key.push('.');
            key.push_str(segment);
        }
        key
    }
}

/// A participant's display name
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FighterName {
    pub first_name: FieldValue,
    pub last_name: FieldValue,
}

impl std::fmt::Display for FighterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// One line of the main-card listing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainCardEntry {
    pub fighter1: FighterName,
    pub fighter2: FighterName,
    pub has_started: FieldValue,
    pub is_complete: FieldValue,
}

impl MainCardEntry {
    /// Read the listed fields, in listing order
    pub fn from_record(record: &FightRecord<'_>, policy: FieldPolicy) -> RingsideResult<Self> {
        Ok(Self {
            fighter1: record.fighter(Corner::First, policy)?,
            fighter2: record.fighter(Corner::Second, policy)?,
            has_started: record.has_started(policy)?,
            is_complete: record.is_complete(policy)?,
        })
    }
}

impl std::fmt::Display for MainCardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} vs {}: hasStarted={}, complete={}",
            self.fighter1, self.fighter2, self.has_started, self.is_complete
        )
    }
}
