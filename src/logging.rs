//! Structured JSON-lines logging.
//!
//! One serde_json object per line on stderr: ts, seq, level, event, plus
//! whatever fields the caller attaches. Level is read from `LOG_LEVEL`.

use chrono::Utc;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    pub fn from_env() -> Self {
        match std::env::var("LOG_LEVEL").as_deref() {
            Ok("debug") => Level::Debug,
            Ok("warn") => Level::Warn,
            Ok("error") => Level::Error,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst)
}

pub fn log_at(level: Level, event: &str, fields: Map<String, Value>) {
    if level < Level::from_env() {
        return;
    }
    let mut record = Map::new();
    record.insert("ts".to_string(), Value::String(Utc::now().to_rfc3339()));
    record.insert("seq".to_string(), Value::from(next_seq()));
    record.insert(
        "level".to_string(),
        Value::String(level.as_str().to_string()),
    );
    record.insert("event".to_string(), Value::String(event.to_string()));
    for (k, v) in fields {
        record.insert(k, v);
    }
    eprintln!("{}", Value::Object(record));
}

/// Info-level shorthand; the common case.
pub fn json_log(event: &str, fields: Map<String, Value>) {
    log_at(Level::Info, event, fields);
}

pub fn obj(pairs: &[(&str, Value)]) -> Map<String, Value> {
    let mut map = Map::new();
    for (k, v) in pairs {
        map.insert((*k).to_string(), v.clone());
    }
    map
}

pub fn v_str(s: &str) -> Value {
    Value::String(s.to_string())
}

pub fn v_num(n: f64) -> Value {
    serde_json::Number::from_f64(n)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
