use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::AppError;

pub type PairingId = i64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Pairing {
    pub id: PairingId,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub pairings: Vec<Pairing>,
}

/// Teams in display order. Order also decides ties between teams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// # Errors
    ///
    /// Will return `Err` if there are no teams, a team name is empty or repeats, or a pairing id repeats
    pub fn new(teams: Vec<Team>) -> Result<Self, AppError> {
        if teams.is_empty() {
            return Err(AppError::Config("the roster needs at least one team".into()));
        }
        let mut seen = HashSet::new();
        let mut names = HashSet::new();
        for team in &teams {
            if team.name.trim().is_empty() {
                return Err(AppError::Config("team names cannot be empty".into()));
            }
            if !names.insert(team.name.as_str()) {
                return Err(AppError::Config(format!(
                    "team {} appears more than once",
                    team.name
                )));
            }
            for pairing in &team.pairings {
                if !seen.insert(pairing.id) {
                    return Err(AppError::Config(format!(
                        "pairing id {} appears more than once",
                        pairing.id
                    )));
                }
            }
        }
        Ok(Self { teams })
    }

    #[must_use]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Every pairing with its team, teams in order and pairings in team order.
    pub fn pairings(&self) -> impl Iterator<Item = (&Team, &Pairing)> {
        self.teams
            .iter()
            .flat_map(|team| team.pairings.iter().map(move |pairing| (team, pairing)))
    }

    #[must_use]
    pub fn find(&self, id: PairingId) -> Option<(&Team, &Pairing)> {
        self.pairings().find(|(_, pairing)| pairing.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: PairingId) -> bool {
        self.find(id).is_some()
    }
}

impl Default for Roster {
    fn default() -> Self {
        let team = |name: &str, pairings: [(PairingId, &str); 4]| Team {
            name: name.to_string(),
            pairings: pairings
                .into_iter()
                .map(|(id, label)| Pairing {
                    id,
                    label: label.to_string(),
                })
                .collect(),
        };
        Self {
            teams: vec![
                team(
                    "Royals",
                    [
                        (5, "Dowell-Rick"),
                        (6, "Andy-Zac"),
                        (7, "Marrah-Ben"),
                        (8, "Ethan-Bross"),
                    ],
                ),
                team(
                    "Chiefs",
                    [
                        (1, "Chris-Tyler"),
                        (2, "Todd-Joe"),
                        (3, "Steve-Darby"),
                        (4, "Gardner-Russ"),
                    ],
                ),
            ],
        }
    }
}
