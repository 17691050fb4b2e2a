use sqlx::mysql::{MySql, MySqlArguments, MySqlConnectOptions};
use sqlx::query::Query;
use sqlx::{Connection, MySqlConnection};

use crate::config::DbConfig;
use crate::types::Standing;

pub const TABLE: &str = "football_table";

const TRUNCATE_SQL: &str = "TRUNCATE TABLE football_table";

const INSERT_SQL: &str = "INSERT INTO football_table \
    (uuid, position, team_name, played, won, drawn, lost, goals_for, \
     goals_against, goal_difference, points, form) \
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// One connection to the destination database, scoped to the run.
pub struct Store {
    conn: MySqlConnection,
}

impl Store {
    pub async fn connect(config: &DbConfig) -> Result<Self, StoreError> {
        let (host, port) = config.host_and_port();
        let options = MySqlConnectOptions::new()
            .host(host)
            .port(port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let conn = MySqlConnection::connect_with(&options).await?;
        Ok(Self { conn })
    }

    /// Truncates the table, then inserts every standing in sequence.
    ///
    /// Truncate-then-insert makes re-runs non-accumulating, but the sequence
    /// is not wrapped in a transaction: a failure partway through leaves the
    /// table partially loaded. That matches the behaviour this table's
    /// consumers already live with; the first insert error halts the rest.
    pub async fn replace_all(&mut self, standings: &[Standing]) -> Result<(), StoreError> {
        for query in load_sequence(standings) {
            query.execute(&mut self.conn).await?;
        }
        log::info!("Reloaded {TABLE} with {} rows", standings.len());
        Ok(())
    }

    pub async fn close(self) -> Result<(), StoreError> {
        self.conn.close().await?;
        Ok(())
    }
}

/// The ordered statement sequence for one load: the truncate, then one
/// parameterized insert per standing in the order given.
fn load_sequence(standings: &[Standing]) -> Vec<Query<'_, MySql, MySqlArguments>> {
    let mut queries = Vec::with_capacity(standings.len() + 1);
    queries.push(sqlx::query(TRUNCATE_SQL));
    for standing in standings {
        queries.push(
            sqlx::query(INSERT_SQL)
                .bind(&standing.uuid)
                .bind(&standing.position)
                .bind(&standing.team_name)
                .bind(&standing.played)
                .bind(&standing.won)
                .bind(&standing.drawn)
                .bind(&standing.lost)
                .bind(&standing.goals_for)
                .bind(&standing.goals_against)
                .bind(&standing.goal_difference)
                .bind(&standing.points)
                .bind(&standing.form),
        );
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::COLUMNS;

    #[test]
    fn test_insert_has_one_placeholder_per_column() {
        let placeholders = INSERT_SQL.matches('?').count();
        assert_eq!(placeholders, COLUMNS.len());
    }

    #[test]
    fn test_insert_column_order_matches_csv_header() {
        let open = INSERT_SQL.find('(').unwrap();
        let close = INSERT_SQL.find(')').unwrap();
        let columns: Vec<&str> = INSERT_SQL[open + 1..close]
            .split(',')
            .map(str::trim)
            .collect();
        assert_eq!(columns, COLUMNS);
    }

    #[test]
    fn test_truncate_targets_destination_table() {
        assert_eq!(TRUNCATE_SQL, format!("TRUNCATE TABLE {TABLE}"));
        assert!(INSERT_SQL.starts_with(&format!("INSERT INTO {TABLE} ")));
    }

    fn sample(position: u32) -> Standing {
        Standing {
            uuid: format!("00000000-0000-4000-8000-{position:012}"),
            position: position.to_string(),
            team_name: format!("Team {position}"),
            played: "38".to_string(),
            won: "20".to_string(),
            drawn: "10".to_string(),
            lost: "8".to_string(),
            goals_for: "60".to_string(),
            goals_against: "40".to_string(),
            goal_difference: "20".to_string(),
            points: "70".to_string(),
            form: "WDLWW".to_string(),
        }
    }

    #[test]
    fn test_load_sequence_truncates_once_then_inserts_each_row() {
        use sqlx::Execute;

        let standings: Vec<Standing> = (1..=20).map(sample).collect();
        let sequence = load_sequence(&standings);

        assert_eq!(sequence.len(), 21, "One truncate plus one insert per row");
        assert_eq!(sequence[0].sql(), TRUNCATE_SQL);
        assert!(sequence[1..].iter().all(|q| q.sql() == INSERT_SQL));
    }

    #[test]
    fn test_load_sequence_truncates_even_with_no_rows() {
        use sqlx::Execute;

        let sequence = load_sequence(&[]);
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence[0].sql(), TRUNCATE_SQL);
    }
}
