//! Capture document model and loader.
//!
//! This module defines the serde data structures for a logcat JSON export
//! and the file loader that produces a [`LogCapture`]. Every field carries
//! a declared default, decoded once at parse time: a record missing its
//! header, level, tag, or timestamp is a valid, non-error state of the
//! document. Scalar fields that arrive with the wrong JSON type (a numeric
//! pid, a quoted boolean) are normalized to strings instead of failing the
//! whole document.
//!
//! License: MIT OR Apache-2.0

use std::fmt;
use std::path::Path;

use log::{debug, info};
use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AnalysisError;

/// Severity value consumed by the extractor. The comparison is exact and
/// case-sensitive: `"error"` and `"Error"` do not qualify.
pub const ERROR_LEVEL: &str = "ERROR";

/// Structured capture time: whole seconds plus a sub-second component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.seconds, self.nanos)
    }
}

/// Header metadata of one raw log record. All fields default; `pid` keeps
/// its wire ambiguity (string or number) hidden behind a lenient decoder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogHeader {
    #[serde(deserialize_with = "lenient_string")]
    pub log_level: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tag: String,
    #[serde(deserialize_with = "lenient_string")]
    pub process_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub pid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub application_id: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<Timestamp>,
}

/// One raw entry of a capture. Both fields default, so a record missing
/// either its header or its message body still decodes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogRecord {
    pub header: LogHeader,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
}

/// The root parsed document of one log-collection session.
///
/// `records` preserves capture order, which is meaningful for the
/// time-ordered detail listings. A document without a `logcatMessages`
/// field decodes as zero records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LogCapture {
    #[serde(rename = "logcatMessages")]
    pub records: Vec<LogRecord>,
}

impl LogCapture {
    /// Loads a capture from a JSON file.
    ///
    /// Fails with [`AnalysisError::InputNotFound`] when the path does not
    /// exist and [`AnalysisError::Parse`] when the content is not valid
    /// JSON. The file is read in one scoped operation; the handle is
    /// released on every exit path, parse failure included.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AnalysisError::InputNotFound(path.to_path_buf()));
        }

        info!("Loading capture from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let capture: LogCapture =
            serde_json::from_str(&text).map_err(|source| AnalysisError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(
            "Loaded {} records from {}.",
            capture.records.len(),
            path.display()
        );
        Ok(capture)
    }
}

/// Decodes a scalar of any JSON type into a string. Absent and null fields
/// become the empty string; numbers and booleans are stringified; nested
/// structures are drained and discarded.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientStringVisitor;

    impl<'de> Visitor<'de> for LenientStringVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, boolean, or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_map<A>(self, mut map: A) -> Result<String, A::Error>
        where
            A: de::MapAccess<'de>,
        {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<String, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(LenientStringVisitor)
}

/// Decodes a timestamp object, treating any non-conforming shape (null, a
/// string, a negative nanos field) as absent rather than fatal.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
