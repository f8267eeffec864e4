//! Applies a resolved [`Rule`] to one submitted value.
//!
//! Checks normalise what they accept (trimmed text, integer amounts, arrays
//! for multi-choice answers) and collect every failure instead of stopping at
//! the first one.

use std::sync::LazyLock;

use chrono::{Datelike, Months, NaiveDate};
use regex::Regex;
use serde_json::{Map, Value, json};

use crate::data;
use crate::rule::{Check, Constraint, ErrorType, Issue, Rule};

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());
static PHONE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\+44|0044|0)\d{9,10}$").ok());
static POSTCODE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z]{1,2}[0-9][A-Z0-9]?\s?[0-9][A-Z]{2}$").ok()
});
static URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").ok());

const NAME_PART_MAX: usize = 40;
const ADDRESS_LINE_MAX: usize = 255;
const TOWN_MAX: usize = 40;

/// Everything a check may read besides the value itself.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub data: &'a Value,
    pub today: NaiveDate,
}

pub type CheckResult = Result<Option<Value>, Vec<Issue>>;

/// Runs `rule` against `value`. `Ok(None)` means an optional field was left
/// empty and contributes nothing to the validated output.
pub fn check(rule: &Rule, value: Option<&Value>, ctx: &CheckContext<'_>) -> CheckResult {
    let Some(value) = value.filter(|value| data::is_filled(value)) else {
        return if !rule.required {
            Ok(None)
        } else if matches!(value, Some(Value::String(_))) {
            Err(vec![Issue::new(ErrorType::AnyEmpty)])
        } else {
            Err(vec![Issue::new(ErrorType::AnyRequired)])
        };
    };

    let normalised = apply_check(&rule.check, value, ctx)?;

    let issues = rule
        .constraints
        .iter()
        .filter_map(|constraint| enforce_constraint(constraint, &rule.check, &normalised, ctx))
        .collect::<Vec<_>>();

    if issues.is_empty() {
        Ok(Some(normalised))
    } else {
        Err(issues)
    }
}

fn apply_check(check: &Check, value: &Value, ctx: &CheckContext<'_>) -> Result<Value, Vec<Issue>> {
    match check {
        Check::Text {
            max_length,
            min_words,
            max_words,
        } => check_text(value, *max_length, *min_words, *max_words),
        Check::Email => check_pattern(value, &EMAIL, ErrorType::StringEmail),
        Check::Phone => {
            let text = expect_string(value)?;
            let compact = text
                .chars()
                .filter(|ch| !matches!(ch, ' ' | '-' | '(' | ')'))
                .collect::<String>();
            if matches(&PHONE, &compact) {
                Ok(Value::String(text.to_string()))
            } else {
                Err(vec![Issue::new(ErrorType::StringPhone)])
            }
        }
        Check::Url { max_length } => {
            let normalised = check_pattern(value, &URL, ErrorType::StringUri)?;
            match (max_length, normalised.as_str()) {
                (Some(max), Some(text)) if text.chars().count() > *max => {
                    Err(vec![Issue::new(ErrorType::StringMax)])
                }
                _ => Ok(normalised),
            }
        }
        Check::Currency { min, max } => check_number(value, true, *min, *max),
        Check::Integer { min, max } => check_number(value, false, *min, *max),
        Check::Choice { allowed, multiple } => check_choice(value, allowed, *multiple),
        Check::Name => check_name(value),
        Check::Address => check_address(value),
        Check::Date { min_age } => check_date(value, *min_age, ctx.today),
        Check::DayMonth => check_day_month(value),
    }
}

fn expect_string(value: &Value) -> Result<&str, Vec<Issue>> {
    value
        .as_str()
        .map(str::trim)
        .ok_or_else(|| vec![Issue::new(ErrorType::StringBase)])
}

fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|regex| regex.is_match(text))
}

fn check_pattern(
    value: &Value,
    pattern: &LazyLock<Option<Regex>>,
    error_type: ErrorType,
) -> Result<Value, Vec<Issue>> {
    let text = expect_string(value)?;
    if matches(pattern, text) {
        Ok(Value::String(text.to_string()))
    } else {
        Err(vec![Issue::new(error_type)])
    }
}

pub(crate) fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn check_text(
    value: &Value,
    max_length: Option<usize>,
    min_words: Option<usize>,
    max_words: Option<usize>,
) -> Result<Value, Vec<Issue>> {
    let text = expect_string(value)?;
    let mut issues = Vec::new();

    if let Some(max) = max_length
        && text.chars().count() > max
    {
        issues.push(Issue::new(ErrorType::StringMax));
    }

    let words = word_count(text);
    if let Some(min) = min_words
        && words < min
    {
        issues.push(Issue::new(ErrorType::StringMinWords));
    }
    if let Some(max) = max_words
        && words > max
    {
        issues.push(Issue::new(ErrorType::StringMaxWords));
    }

    if issues.is_empty() {
        Ok(Value::String(text.to_string()))
    } else {
        Err(issues)
    }
}

/// Parses whole amounts such as `250000`, `"250,000"` or `"£250,000"`.
pub(crate) fn parse_amount(value: &Value, currency: bool) -> Result<i64, ErrorType> {
    match value {
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                Ok(whole)
            } else if number.as_f64().is_some_and(|float| float.fract() != 0.0) {
                Err(ErrorType::NumberInteger)
            } else {
                number
                    .as_f64()
                    .filter(|float| float.is_finite() && float.abs() < i64::MAX as f64)
                    .map(|float| float as i64)
                    .ok_or(ErrorType::NumberBase)
            }
        }
        Value::String(text) => {
            let cleaned = text
                .trim()
                .chars()
                .filter(|ch| !(*ch == ',' || ch.is_whitespace() || (currency && *ch == '£')))
                .collect::<String>();
            if let Ok(whole) = cleaned.parse::<i64>() {
                Ok(whole)
            } else if cleaned.parse::<f64>().is_ok_and(|float| float.is_finite()) {
                Err(ErrorType::NumberInteger)
            } else {
                Err(ErrorType::NumberBase)
            }
        }
        _ => Err(ErrorType::NumberBase),
    }
}

fn check_number(
    value: &Value,
    currency: bool,
    min: Option<i64>,
    max: Option<i64>,
) -> Result<Value, Vec<Issue>> {
    let amount = parse_amount(value, currency).map_err(|error| vec![Issue::new(error)])?;

    if let Some(min) = min
        && amount < min
    {
        return Err(vec![Issue::new(ErrorType::NumberMin)]);
    }
    if let Some(max) = max
        && amount > max
    {
        return Err(vec![Issue::new(ErrorType::NumberMax)]);
    }

    Ok(json!(amount))
}

fn check_choice(value: &Value, allowed: &[String], multiple: bool) -> Result<Value, Vec<Issue>> {
    if multiple {
        if !(value.is_array() || value.is_string() || value.is_number()) {
            return Err(vec![Issue::new(ErrorType::ArrayBase)]);
        }
        let mut selected: Vec<String> = Vec::new();
        for item in data::selections(Some(value)) {
            if !allowed.contains(&item) {
                return Err(vec![Issue::new(ErrorType::ArrayIncludes)]);
            }
            if !selected.contains(&item) {
                selected.push(item);
            }
        }
        if selected.is_empty() {
            return Err(vec![Issue::new(ErrorType::ArrayBase)]);
        }
        return Ok(json!(selected));
    }

    let Some(choice) = data::scalar_string(value) else {
        return Err(vec![Issue::new(ErrorType::StringBase)]);
    };
    if !allowed.contains(&choice) {
        return Err(vec![Issue::new(ErrorType::AnyOnly)]);
    }
    match value {
        Value::Number(_) => Ok(value.clone()),
        _ => Ok(Value::String(choice)),
    }
}

fn expect_object(value: &Value) -> Result<&Map<String, Value>, Vec<Issue>> {
    value
        .as_object()
        .ok_or_else(|| vec![Issue::new(ErrorType::ObjectBase)])
}

/// Reads one member of a structured answer as text, recording failures.
fn member(
    map: &Map<String, Value>,
    key: &str,
    required: bool,
    max: usize,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match map.get(key) {
        Some(Value::String(text)) if !text.trim().is_empty() => {
            let text = text.trim();
            if text.chars().count() > max {
                issues.push(Issue::at(ErrorType::StringMax, key));
            }
            Some(text.to_string())
        }
        Some(Value::String(_)) | Some(Value::Null) | None => {
            if required {
                issues.push(Issue::at(ErrorType::AnyEmpty, key));
            }
            None
        }
        Some(_) => {
            issues.push(Issue::at(ErrorType::StringBase, key));
            None
        }
    }
}

fn check_name(value: &Value) -> Result<Value, Vec<Issue>> {
    let map = expect_object(value)?;
    let mut issues = Vec::new();
    let first = member(map, "firstName", true, NAME_PART_MAX, &mut issues);
    let last = member(map, "lastName", true, NAME_PART_MAX, &mut issues);

    if !issues.is_empty() {
        return Err(issues);
    }
    Ok(json!({
        "firstName": first.unwrap_or_default(),
        "lastName": last.unwrap_or_default(),
    }))
}

fn check_address(value: &Value) -> Result<Value, Vec<Issue>> {
    let map = expect_object(value)?;
    let mut issues = Vec::new();
    let line1 = member(map, "line1", true, ADDRESS_LINE_MAX, &mut issues);
    let line2 = member(map, "line2", false, ADDRESS_LINE_MAX, &mut issues);
    let town = member(map, "townCity", true, TOWN_MAX, &mut issues);
    let county = member(map, "county", false, ADDRESS_LINE_MAX, &mut issues);
    let postcode = member(map, "postcode", true, 10, &mut issues);

    if let Some(postcode) = &postcode
        && !matches(&POSTCODE, postcode)
        && !issues.iter().any(|issue| issue.key.as_deref() == Some("postcode"))
    {
        issues.push(Issue::at(ErrorType::StringPostcode, "postcode"));
    }

    if !issues.is_empty() {
        return Err(issues);
    }

    let mut normalised = Map::new();
    normalised.insert("line1".into(), json!(line1.unwrap_or_default()));
    if let Some(line2) = line2 {
        normalised.insert("line2".into(), json!(line2));
    }
    normalised.insert("townCity".into(), json!(town.unwrap_or_default()));
    if let Some(county) = county {
        normalised.insert("county".into(), json!(county));
    }
    normalised.insert(
        "postcode".into(),
        json!(postcode.unwrap_or_default().to_uppercase()),
    );
    Ok(Value::Object(normalised))
}

fn date_part(map: &Map<String, Value>, key: &str) -> Option<u32> {
    let value = map.get(key)?;
    parse_amount(value, false)
        .ok()
        .and_then(|number| u32::try_from(number).ok())
}

/// Interprets `{day, month, year}` as a calendar date.
pub(crate) fn parse_date(value: &Value) -> Option<NaiveDate> {
    let map = value.as_object()?;
    let day = date_part(map, "day")?;
    let month = date_part(map, "month")?;
    let year = i32::try_from(date_part(map, "year")?).ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// The latest birth date that still meets `min_age` on `today`.
pub fn latest_birth_date(today: NaiveDate, min_age: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(min_age.saturating_mul(12)))
}

fn check_date(value: &Value, min_age: Option<u32>, today: NaiveDate) -> Result<Value, Vec<Issue>> {
    expect_object(value)?;
    let date = parse_date(value).ok_or_else(|| vec![Issue::new(ErrorType::DateBase)])?;

    if let Some(min_age) = min_age {
        if date > today {
            return Err(vec![Issue::new(ErrorType::DateBase)]);
        }
        match latest_birth_date(today, min_age) {
            Some(latest) if date <= latest => {}
            _ => return Err(vec![Issue::new(ErrorType::DateOfBirth)]),
        }
    }

    Ok(json!({
        "day": date.day(),
        "month": date.month(),
        "year": date.year(),
    }))
}

fn check_day_month(value: &Value) -> Result<Value, Vec<Issue>> {
    let map = expect_object(value)?;
    let parsed = date_part(map, "day").zip(date_part(map, "month"));
    // Leap year so that 29 February is accepted.
    match parsed.filter(|(day, month)| NaiveDate::from_ymd_opt(2000, *month, *day).is_some()) {
        Some((day, month)) => Ok(json!({ "day": day, "month": month })),
        None => Err(vec![Issue::new(ErrorType::DayMonthBase)]),
    }
}

fn enforce_constraint(
    constraint: &Constraint,
    check: &Check,
    value: &Value,
    ctx: &CheckContext<'_>,
) -> Option<Issue> {
    match constraint {
        Constraint::NotEqualTo { field } => {
            let sibling = ctx.data.get(field)?;
            let same = comparable(check, value)
                .zip(comparable(check, sibling))
                .is_some_and(|(left, right)| left == right);
            same.then(|| Issue::new(ErrorType::AnyInvalid))
        }
        Constraint::AtMost { field } => {
            let ceiling = parse_amount(ctx.data.get(field)?, true).ok()?;
            let amount = parse_amount(value, true).ok()?;
            (amount > ceiling).then(|| Issue::new(ErrorType::NumberMax))
        }
    }
}

/// Canonical form used for "must differ from" comparisons.
fn comparable(check: &Check, value: &Value) -> Option<String> {
    match (check, value) {
        (Check::Phone, Value::String(text)) => Some(
            text.chars()
                .filter(|ch| ch.is_ascii_digit())
                .collect::<String>(),
        ),
        (_, Value::String(text)) => {
            let folded = text.split_whitespace().collect::<Vec<_>>().join(" ");
            (!folded.is_empty()).then(|| folded.to_lowercase())
        }
        (_, Value::Object(map)) => {
            let keys: &[&str] = match check {
                Check::Name => &["firstName", "lastName"],
                Check::Address => &["line1", "townCity", "postcode"],
                _ => return Some(value.to_string().to_lowercase()),
            };
            let parts = keys
                .iter()
                .map(|key| {
                    map.get(*key)
                        .and_then(Value::as_str)
                        .map(|text| text.split_whitespace().collect::<String>().to_lowercase())
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>();
            parts
                .iter()
                .any(|part| !part.is_empty())
                .then(|| parts.join("|"))
        }
        (_, Value::Null) => None,
        (_, other) => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(data: &Value) -> CheckContext<'_> {
        CheckContext {
            data,
            today: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
        }
    }

    #[test]
    fn currency_accepts_formatted_amounts() {
        let data = json!({});
        let rule = Rule::new(Check::Currency {
            min: Some(10_001),
            max: None,
        });
        assert_eq!(
            check(&rule, Some(&json!("£250,000")), &ctx(&data)),
            Ok(Some(json!(250000)))
        );
        assert_eq!(
            check(&rule, Some(&json!("10000")), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::NumberMin)])
        );
        assert_eq!(
            check(&rule, Some(&json!("lots")), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::NumberBase)])
        );
        assert_eq!(
            check(&rule, Some(&json!("12000.50")), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::NumberInteger)])
        );
    }

    #[test]
    fn empty_string_and_missing_have_distinct_tags() {
        let data = json!({});
        let rule = Rule::new(Check::Email);
        assert_eq!(
            check(&rule, Some(&json!("  ")), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::AnyEmpty)])
        );
        assert_eq!(
            check(&rule, None, &ctx(&data)),
            Err(vec![Issue::new(ErrorType::AnyRequired)])
        );
        assert_eq!(check(&rule.clone().optional(), None, &ctx(&data)), Ok(None));
    }

    #[test]
    fn minimum_age_is_measured_from_today() {
        let data = json!({});
        let rule = Rule::new(Check::Date { min_age: Some(16) });
        let sixteen_today = json!({ "day": 15, "month": 6, "year": 2004 });
        let sixteen_tomorrow = json!({ "day": 16, "month": 6, "year": 2004 });
        assert!(check(&rule, Some(&sixteen_today), &ctx(&data)).is_ok());
        assert_eq!(
            check(&rule, Some(&sixteen_tomorrow), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::DateOfBirth)])
        );
    }

    #[test]
    fn address_reports_each_member() {
        let data = json!({});
        let rule = Rule::new(Check::Address);
        let result = check(
            &rule,
            Some(&json!({ "line1": "1 High Street", "postcode": "nope" })),
            &ctx(&data),
        );
        assert_eq!(
            result,
            Err(vec![
                Issue::at(ErrorType::AnyEmpty, "townCity"),
                Issue::at(ErrorType::StringPostcode, "postcode"),
            ])
        );
    }

    #[test]
    fn not_equal_ignores_case_and_spacing() {
        let data = json!({ "organisationLegalName": "Acme  Trust" });
        let rule = Rule::new(Check::Text {
            max_length: None,
            min_words: None,
            max_words: None,
        })
        .not_equal_to("organisationLegalName");
        assert_eq!(
            check(&rule, Some(&json!("acme trust")), &ctx(&data)),
            Err(vec![Issue::new(ErrorType::AnyInvalid)])
        );
        assert!(check(&rule, Some(&json!("Acme Services")), &ctx(&data)).is_ok());
    }
}
