use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::course::{HOLES, NINE};
use super::roster::{PairingId, Roster};
use crate::error::AppError;

pub const MIN_STROKES: i32 = 1;
pub const MAX_STROKES: i32 = 10;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoundKey {
    #[serde(rename = "round1")]
    Round1,
    #[serde(rename = "round2")]
    Round2,
}

impl RoundKey {
    pub const ALL: [RoundKey; 2] = [RoundKey::Round1, RoundKey::Round2];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RoundKey::Round1 => "round1",
            RoundKey::Round2 => "round2",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            RoundKey::Round1 => "Round 1",
            RoundKey::Round2 => "Round 2",
        }
    }
}

impl fmt::Display for RoundKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "round1" | "1" => Ok(RoundKey::Round1),
            "round2" | "2" => Ok(RoundKey::Round2),
            other => Err(AppError::Parse(format!("unknown round '{other}'"))),
        }
    }
}

/// One round of 18 slots; slot `i` is hole `i + 1`. `None` is the only
/// marker for a hole that has not been played.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "Vec<Option<i32>>", into = "Vec<Option<i32>>")]
pub struct RoundScores([Option<i32>; HOLES]);

impl RoundScores {
    #[must_use]
    pub fn new(slots: [Option<i32>; HOLES]) -> Self {
        Self(slots)
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<i32>; HOLES] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, hole_index: usize) -> Option<i32> {
        self.0.get(hole_index).copied().flatten()
    }

    #[must_use]
    pub fn front_nine(&self) -> &[Option<i32>] {
        &self.0[..NINE]
    }

    #[must_use]
    pub fn back_nine(&self) -> &[Option<i32>] {
        &self.0[NINE..]
    }

    /// # Errors
    ///
    /// Will return `Err` if the hole index is past the last hole
    pub fn set(&mut self, hole_index: usize, score: Option<i32>) -> Result<(), AppError> {
        let slot = self.0.get_mut(hole_index).ok_or_else(|| {
            AppError::InvalidEdit(format!("hole index {hole_index} is out of range"))
        })?;
        *slot = score;
        Ok(())
    }
}

impl Default for RoundScores {
    fn default() -> Self {
        Self([None; HOLES])
    }
}

impl TryFrom<Vec<Option<i32>>> for RoundScores {
    type Error = String;

    fn try_from(value: Vec<Option<i32>>) -> Result<Self, Self::Error> {
        let len = value.len();
        <[Option<i32>; HOLES]>::try_from(value)
            .map(Self)
            .map_err(|_| format!("a round needs exactly {HOLES} holes, got {len}"))
    }
}

impl From<RoundScores> for Vec<Option<i32>> {
    fn from(value: RoundScores) -> Self {
        value.0.to_vec()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PairingScores {
    #[serde(default)]
    pub round1: RoundScores,
    #[serde(default)]
    pub round2: RoundScores,
}

impl PairingScores {
    #[must_use]
    pub fn round(&self, key: RoundKey) -> &RoundScores {
        match key {
            RoundKey::Round1 => &self.round1,
            RoundKey::Round2 => &self.round2,
        }
    }

    pub fn round_mut(&mut self, key: RoundKey) -> &mut RoundScores {
        match key {
            RoundKey::Round1 => &mut self.round1,
            RoundKey::Round2 => &mut self.round2,
        }
    }
}

/// Strokes per pairing. On the wire the pairing ids are the object keys.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ScoreTable(BTreeMap<PairingId, PairingScores>);

impl ScoreTable {
    /// An all-absent table with one entry per roster pairing.
    #[must_use]
    pub fn seeded(roster: &Roster) -> Self {
        Self(
            roster
                .pairings()
                .map(|(_, pairing)| (pairing.id, PairingScores::default()))
                .collect(),
        )
    }

    /// Keeps only roster pairings and gives any missing pairing an empty entry.
    #[must_use]
    pub fn conform_to(mut self, roster: &Roster) -> Self {
        self.0.retain(|id, _| roster.contains(*id));
        for (_, pairing) in roster.pairings() {
            self.0.entry(pairing.id).or_default();
        }
        self
    }

    #[must_use]
    pub fn pairing(&self, id: PairingId) -> Option<&PairingScores> {
        self.0.get(&id)
    }

    pub fn insert(&mut self, id: PairingId, scores: PairingScores) {
        self.0.insert(id, scores);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PairingId, &PairingScores)> {
        self.0.iter()
    }

    /// # Errors
    ///
    /// Will return `Err` if the pairing is not in the table or the hole index is out of range
    pub fn apply(&mut self, edit: &ScoreEdit) -> Result<(), AppError> {
        let scores = self
            .0
            .get_mut(&edit.pairing_id)
            .ok_or_else(|| AppError::NotFound(format!("pairing {}", edit.pairing_id)))?;
        scores.round_mut(edit.round).set(edit.hole_index, edit.score)
    }
}

/// A single-hole change, also the body of the remote update call.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEdit {
    pub pairing_id: PairingId,
    pub round: RoundKey,
    pub hole_index: usize,
    pub score: Option<i32>,
}

impl ScoreEdit {
    #[must_use]
    pub fn record(pairing_id: PairingId, round: RoundKey, hole_index: usize, score: i32) -> Self {
        Self {
            pairing_id,
            round,
            hole_index,
            score: Some(score),
        }
    }

    #[must_use]
    pub fn clear(pairing_id: PairingId, round: RoundKey, hole_index: usize) -> Self {
        Self {
            pairing_id,
            round,
            hole_index,
            score: None,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the pairing is not on the roster, the hole is not 0..=17,
    /// or a recorded score is outside 1..=10
    pub fn validate(&self, roster: &Roster) -> Result<(), AppError> {
        if !roster.contains(self.pairing_id) {
            return Err(AppError::NotFound(format!("pairing {}", self.pairing_id)));
        }
        if self.hole_index >= HOLES {
            return Err(AppError::InvalidEdit(format!(
                "hole index {} is out of range",
                self.hole_index
            )));
        }
        if let Some(score) = self.score {
            if !(MIN_STROKES..=MAX_STROKES).contains(&score) {
                return Err(AppError::InvalidEdit(format!(
                    "score {score} must be between {MIN_STROKES} and {MAX_STROKES}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub enum HoleResult {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
}

impl HoleResult {
    /// Classifies strokes relative to par; -3 and below is an albatross,
    /// +3 and above counts as a triple.
    #[must_use]
    pub fn from_i32(to_par: i32) -> Self {
        match to_par {
            i32::MIN..=-3 => HoleResult::Albatross,
            -2 => HoleResult::Eagle,
            -1 => HoleResult::Birdie,
            0 => HoleResult::Par,
            1 => HoleResult::Bogey,
            2 => HoleResult::DoubleBogey,
            _ => HoleResult::TripleBogey,
        }
    }

    #[must_use]
    pub fn for_hole(strokes: i32, par: i32) -> Self {
        Self::from_i32(strokes.saturating_sub(par))
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            HoleResult::Albatross => "albatross",
            HoleResult::Eagle => "eagle",
            HoleResult::Birdie => "birdie",
            HoleResult::Par => "par",
            HoleResult::Bogey => "bogey",
            HoleResult::DoubleBogey => "double-bogey",
            HoleResult::TripleBogey => "triple-bogey",
        }
    }
}

impl From<i32> for HoleResult {
    fn from(value: i32) -> Self {
        Self::from_i32(value)
    }
}
