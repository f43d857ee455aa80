//! Evaluation of `if` conditions against the target interpreter.
//!
//! Two targets are understood: `sys.version_info`, compared as a
//! `(major, minor, 0)` tuple of integers (optionally indexed or sliced), and
//! `sys.platform`, compared
//! for equality with a string. Both sides of `and`/`or` are always
//! evaluated so that a malformed condition is reported even when the other
//! side decides the result.

use pyi_ir::syntax::{CompareOp, CondValue, Condition, ItemKey};
use pyi_ir::Number;

use crate::BuildOptions;

const VERSION_INFO: &str = "sys.version_info";
const PLATFORM: &str = "sys.platform";

/// Length that version tuples are padded to before comparison.
const VERSION_LEN: usize = 3;

/// A condition the evaluator cannot decide.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConditionError {
    #[error("unsupported condition: {0}")]
    UnsupportedTarget(String),
    #[error("sys.platform supports only == and !=, found {0}")]
    PlatformOperator(CompareOp),
    #[error("sys.platform must be compared to a string")]
    PlatformValue,
    #[error("sys.platform cannot be subscripted")]
    PlatformKey,
    #[error("version tuple elements must be integers")]
    NonIntegerVersion,
    #[error("sys.version_info must be compared to a tuple")]
    VersionValue,
    #[error("version tuples have at most 3 elements, found {0}")]
    VersionLength(usize),
    #[error("sys.version_info[{0}] must be compared to an integer")]
    IndexValue(i64),
    #[error("sys.version_info index {0} out of range")]
    IndexRange(i64),
    #[error("slice step must be a positive integer")]
    SliceStep,
}

/// Decide `condition` for the interpreter described by `options`.
pub fn evaluate(condition: &Condition, options: &BuildOptions) -> Result<bool, ConditionError> {
    match condition {
        Condition::And(left, right) => {
            let left = evaluate(left, options)?;
            let right = evaluate(right, options)?;
            Ok(left && right)
        }
        Condition::Or(left, right) => {
            let left = evaluate(left, options)?;
            let right = evaluate(right, options)?;
            Ok(left || right)
        }
        Condition::Compare { target, op, value } => match target.name.as_str() {
            VERSION_INFO => {
                let (major, minor) = options.python_version;
                let version = [i64::from(major), i64::from(minor), 0];
                compare_version(&version, target.key.as_ref(), *op, value)
            }
            PLATFORM => {
                if target.key.is_some() {
                    return Err(ConditionError::PlatformKey);
                }
                compare_platform(&options.platform, *op, value)
            }
            other => Err(ConditionError::UnsupportedTarget(other.to_string())),
        },
    }
}

fn int(n: Number) -> Result<i64, ConditionError> {
    n.as_int().ok_or(ConditionError::NonIntegerVersion)
}

fn tuple(value: &CondValue) -> Result<Vec<i64>, ConditionError> {
    match value {
        CondValue::Version(parts) => parts.iter().map(|&n| int(n)).collect(),
        CondValue::Str(_) | CondValue::Number(_) => Err(ConditionError::VersionValue),
    }
}

fn compare_version(
    version: &[i64],
    key: Option<&ItemKey>,
    op: CompareOp,
    value: &CondValue,
) -> Result<bool, ConditionError> {
    match key {
        None => {
            let rhs = padded(tuple(value)?)?;
            Ok(op.holds(version.cmp(rhs.as_slice())))
        }
        Some(ItemKey::Index(index)) => {
            let index = int(*index)?;
            let element = element(version, index)?;
            let CondValue::Number(rhs) = value else {
                return Err(ConditionError::IndexValue(index));
            };
            Ok(op.holds(element.cmp(&int(*rhs)?)))
        }
        Some(ItemKey::Slice { start, stop, step }) => {
            let sliced = slice(version, *start, *stop, *step)?;
            let rhs = tuple(value)?;
            Ok(op.holds(sliced.as_slice().cmp(rhs.as_slice())))
        }
    }
}

/// `parts` extended with zeros to a full version tuple.
fn padded(mut parts: Vec<i64>) -> Result<Vec<i64>, ConditionError> {
    if parts.len() > VERSION_LEN {
        return Err(ConditionError::VersionLength(parts.len()));
    }
    parts.resize(VERSION_LEN, 0);
    Ok(parts)
}

/// `version[index]`, counting from the end for negative indices.
fn element(version: &[i64], index: i64) -> Result<i64, ConditionError> {
    let len = i64::try_from(version.len()).unwrap_or(i64::MAX);
    let position = if index < 0 { index + len } else { index };
    usize::try_from(position)
        .ok()
        .and_then(|p| version.get(p).copied())
        .ok_or(ConditionError::IndexRange(index))
}

/// `version[start:stop:step]` with the usual clamping of out-of-range bounds.
fn slice(
    version: &[i64],
    start: Option<Number>,
    stop: Option<Number>,
    step: Option<Number>,
) -> Result<Vec<i64>, ConditionError> {
    let len = version.len();
    let step = match step {
        None => 1,
        Some(step) => usize::try_from(int(step)?)
            .ok()
            .filter(|&s| s > 0)
            .ok_or(ConditionError::SliceStep)?,
    };
    let start = bound(start, 0, len)?;
    let stop = bound(stop, len, len)?;
    if start >= stop {
        return Ok(Vec::new());
    }
    Ok(version[start..stop].iter().step_by(step).copied().collect())
}

fn bound(value: Option<Number>, default: usize, len: usize) -> Result<usize, ConditionError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let value = int(value)?;
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let clamped = if value < 0 {
        (value + len_i).max(0)
    } else {
        value.min(len_i)
    };
    Ok(usize::try_from(clamped).unwrap_or(0))
}

fn compare_platform(platform: &str, op: CompareOp, value: &CondValue) -> Result<bool, ConditionError> {
    let CondValue::Str(rhs) = value else {
        return Err(ConditionError::PlatformValue);
    };
    match op {
        CompareOp::Eq => Ok(platform == rhs),
        CompareOp::Ne => Ok(platform != rhs),
        other => Err(ConditionError::PlatformOperator(other)),
    }
}
