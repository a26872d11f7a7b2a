//! Tolerant decoder for the persisted ledger document
//!
//! The document is read as an untyped JSON value and every field is looked
//! up by name, ignoring case and underscores, so `NextId`, `nextId` and
//! `next_id` all match. Missing fields take these defaults:
//!
//! | field            | default     |
//! |------------------|-------------|
//! | `expenses`       | empty list  |
//! | `next_id`        | 1           |
//! | `monthly_budget` | 0           |
//! | `description`    | ""          |
//! | `category`       | "General"   |
//!
//! An expense without `id`, `amount` or `date` makes the document malformed.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category, parse_date, Expense, ExpenseId, Ledger, Money};

/// Decode a ledger from a parsed JSON document
pub fn decode_ledger(document: &Value) -> ExpenseResult<Ledger> {
    let root = document
        .as_object()
        .ok_or_else(|| malformed("top level is not an object"))?;

    let records = match field(root, "expenses") {
        None => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(index, item)| decode_expense(item).map_err(|e| at_index(index, e)))
            .collect::<ExpenseResult<Vec<_>>>()?,
        Some(_) => return Err(malformed("'expenses' is not a list")),
    };

    let next_id = match field(root, "next_id") {
        None => ExpenseId::FIRST,
        // u32::MAX is allowed here and means every id is used up
        Some(value) => decode_id(value)
            .filter(|id| id.value() > 0)
            .ok_or_else(|| malformed("'next_id' is not a valid id"))?,
    };

    let monthly_budget = match field(root, "monthly_budget") {
        None => Money::zero(),
        Some(value) => decode_money(value)
            .ok_or_else(|| malformed("'monthly_budget' is not a decimal number"))?,
    };

    Ok(Ledger::from_parts(records, next_id, monthly_budget))
}

fn decode_expense(value: &Value) -> ExpenseResult<Expense> {
    let obj = value
        .as_object()
        .ok_or_else(|| malformed("expense is not an object"))?;

    let id = field(obj, "id").ok_or_else(|| malformed("missing 'id'"))?;
    // u32::MAX is reserved so the id after a stored one always exists
    let id = decode_id(id)
        .filter(|id| id.value() > 0 && id.value() < u32::MAX)
        .ok_or_else(|| malformed("'id' is not an integer in range"))?;

    let amount = field(obj, "amount")
        .ok_or_else(|| malformed("missing 'amount'"))?;
    let amount = decode_money(amount).ok_or_else(|| malformed("'amount' is not a decimal number"))?;

    let date = match field(obj, "date") {
        Some(Value::String(s)) => parse_date(s)?,
        Some(_) => return Err(malformed("'date' is not a string")),
        None => return Err(malformed("missing 'date'")),
    };

    let description = optional_string(obj, "description")?.unwrap_or_default();
    let category = optional_string(obj, "category")?.unwrap_or_default();

    Ok(Expense {
        id,
        description,
        amount,
        category: normalize_category(&category),
        date,
    })
}

/// Look up `name` ignoring case and underscores; `null` counts as missing
fn field<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    let wanted = normalize_key(name);
    obj.iter()
        .find(|(key, _)| normalize_key(key) == wanted)
        .map(|(_, value)| value)
        .filter(|value| !value.is_null())
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn optional_string(obj: &Map<String, Value>, name: &str) -> ExpenseResult<Option<String>> {
    match field(obj, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(malformed(&format!("'{}' is not a string", name))),
    }
}

fn decode_id(value: &Value) -> Option<ExpenseId> {
    let raw = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    raw.and_then(|n| u32::try_from(n).ok()).map(ExpenseId::new)
}

/// Amounts are stored as strings but numbers are accepted too
fn decode_money(value: &Value) -> Option<Money> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .map(Money::new)
}

fn malformed(reason: &str) -> ExpenseError {
    ExpenseError::Json(format!("Malformed ledger document: {}", reason))
}

fn at_index(index: usize, err: ExpenseError) -> ExpenseError {
    match err {
        ExpenseError::Json(msg) | ExpenseError::Parse(msg) => {
            ExpenseError::Json(format!("expense #{}: {}", index + 1, msg))
        }
        other => other,
    }
}
