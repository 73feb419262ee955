use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::AppError;
use crate::model::{PairingId, RoundKey, ScoreEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorecardRequest {
    pub pairing_id: PairingId,
    pub round: RoundKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerRequest {
    pub pairing_id: PairingId,
    pub round: RoundKey,
    pub hole_index: usize,
}

fn required<'a, S: BuildHasher>(
    query: &'a HashMap<String, String, S>,
    key: &str,
) -> Result<&'a str, AppError> {
    query
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Parse(format!("{key} parameter is required")))
}

fn parse_pairing<S: BuildHasher>(query: &HashMap<String, String, S>) -> Result<PairingId, AppError> {
    required(query, "pairing")?
        .parse()
        .map_err(|_| AppError::Parse("pairing must be a number".into()))
}

fn parse_hole<S: BuildHasher>(query: &HashMap<String, String, S>) -> Result<usize, AppError> {
    required(query, "hole")?
        .parse()
        .map_err(|_| AppError::Parse("hole must be a zero-based hole index".into()))
}

/// `1`/`true` are on, anything else (or missing) is off.
#[must_use]
pub fn flag<S: BuildHasher>(query: &HashMap<String, String, S>, key: &str) -> bool {
    match query.get(key).map(|s| s.trim()) {
        Some("1") => true,
        Some(other) => other.parse().unwrap_or(false),
        None => false,
    }
}

/// # Errors
///
/// Will return `Err` if `pairing` or `round` is missing or malformed
pub fn decode_scorecard<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<ScorecardRequest, AppError> {
    Ok(ScorecardRequest {
        pairing_id: parse_pairing(query)?,
        round: required(query, "round")?.parse()?,
    })
}

/// # Errors
///
/// Will return `Err` if `pairing`, `round` or `hole` is missing or malformed
pub fn decode_picker<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<PickerRequest, AppError> {
    let card = decode_scorecard(query)?;
    Ok(PickerRequest {
        pairing_id: card.pairing_id,
        round: card.round,
        hole_index: parse_hole(query)?,
    })
}

/// Reads an edit form. `clear=1` clears the hole; otherwise `score` must be a number.
/// Range checks against the roster and course happen when the edit is applied.
///
/// # Errors
///
/// Will return `Err` if a field is missing or malformed
pub fn decode_edit<S: BuildHasher>(
    form: &HashMap<String, String, S>,
) -> Result<ScoreEdit, AppError> {
    let picker = decode_picker(form)?;
    if flag(form, "clear") {
        return Ok(ScoreEdit::clear(
            picker.pairing_id,
            picker.round,
            picker.hole_index,
        ));
    }
    let score = required(form, "score")?
        .parse()
        .map_err(|_| AppError::Parse("score must be a number".into()))?;
    Ok(ScoreEdit::record(
        picker.pairing_id,
        picker.round,
        picker.hole_index,
        score,
    ))
}
