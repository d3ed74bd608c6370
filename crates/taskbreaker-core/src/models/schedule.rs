//! Ordered day/session schedule.

use std::fmt;

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A named slot holding the ids of subtasks scheduled together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    pub key: String,
    pub subtask_ids: Vec<String>,
}

/// Mapping from bucket key to subtask ids.
///
/// Serialized as a JSON object. Unlike a sorted map it keeps buckets in the
/// order they were filled, so `day10` stays after `day9`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule(Vec<Bucket>);

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a bucket. Ids pushed under an existing key extend that bucket.
    pub fn push(&mut self, key: impl Into<String>, subtask_ids: Vec<String>) {
        let key = key.into();
        match self.0.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.subtask_ids.extend(subtask_ids),
            None => self.0.push(Bucket { key, subtask_ids }),
        }
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Subtask ids of the bucket with the given key.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|b| b.key == key)
            .map(|b| b.subtask_ids.as_slice())
    }

    /// Key of the first bucket containing `subtask_id`.
    pub fn bucket_of(&self, subtask_id: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|b| b.subtask_ids.iter().any(|id| id == subtask_id))
            .map(|b| b.key.as_str())
    }

    /// Every scheduled id, in bucket order.
    pub fn subtask_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|b| b.subtask_ids.iter().map(String::as_str))
    }
}

impl Serialize for Schedule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in &self.0 {
            map.serialize_entry(&bucket.key, &bucket.subtask_ids)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Schedule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScheduleVisitor;

        impl<'de> Visitor<'de> for ScheduleVisitor {
            type Value = Schedule;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of bucket keys to subtask id lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Schedule, A::Error> {
                let mut schedule = Schedule::new();
                while let Some((key, ids)) = access.next_entry::<String, Vec<String>>()? {
                    schedule.push(key, ids);
                }
                Ok(schedule)
            }
        }

        deserializer.deserialize_map(ScheduleVisitor)
    }
}
