use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One normalized standings-table row.
///
/// Every stat field is kept as the source's display text. The page sometimes
/// pads or reformats numbers and nothing downstream does arithmetic on them,
/// so parsing to integers would only lose information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub uuid: String,
    pub position: String,
    pub team_name: String,
    pub played: String,
    pub won: String,
    pub drawn: String,
    pub lost: String,
    pub goals_for: String,
    pub goals_against: String,
    pub goal_difference: String,
    pub points: String,
    pub form: String,
}

impl Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>2}. {} — P{} W{} D{} L{} GD {} — {} pts",
            self.position,
            self.team_name,
            self.played,
            self.won,
            self.drawn,
            self.lost,
            self.goal_difference,
            self.points
        )?;
        if !self.form.is_empty() {
            write!(f, " [{}]", self.form)?;
        }
        Ok(())
    }
}
