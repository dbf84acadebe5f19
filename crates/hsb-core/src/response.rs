//! Shape validation of the homework API body.
//!
//! The API is decoded to `serde_json::Value` first so every constraint
//! violation gets a named error instead of a generic deserialization
//! failure: the body must be an object, it must carry `homeworks`, and that
//! key must hold a list.

use serde_json::Value;

use crate::{
    domain::{Homework, HomeworkStatus, RawHomework},
    errors::Error,
    Result,
};

/// Validate the decoded body and return the `homeworks` list.
pub fn check_response(body: &Value) -> Result<&[Value]> {
    let obj = body
        .as_object()
        .ok_or_else(|| Error::Shape("response body is not a JSON object".to_string()))?;

    let homeworks = obj
        .get("homeworks")
        .ok_or_else(|| Error::Shape("response has no `homeworks` key".to_string()))?;

    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| Error::Shape("`homeworks` is not a list".to_string()))
}

/// Parse one homework record and check its status against the fixed table.
pub fn parse_homework(raw: &Value) -> Result<Homework> {
    let record: RawHomework = serde_json::from_value(raw.clone())
        .map_err(|e| Error::Data(format!("malformed homework record: {e}")))?;

    let status = HomeworkStatus::parse(&record.status)
        .ok_or_else(|| Error::Data(format!("unrecognized homework status: {:?}", record.status)))?;

    Ok(Homework {
        name: record.homework_name,
        status,
    })
}
