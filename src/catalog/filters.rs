/// Query filters and the archive request they produce
///
/// Filters are combined with a logical AND. Filters that are not supplied are
/// left out of the predicate entirely rather than defaulted to a wide range.
/// The eccentricity cut is always the first clause.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{QueryError, QueryResult};
use crate::utils::config::{ARCHIVE_COLUMNS, MAX_ECCENTRICITY};

/// Archive table to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SourceTable {
    /// One row per planet with the archive's best parameter set (`pscomppars`)
    #[default]
    CompositeParameters,
    /// One row per planet per publication (`ps`)
    PlanetarySystems,
}

impl SourceTable {
    pub fn table_name(&self) -> &'static str {
        match self {
            SourceTable::CompositeParameters => "pscomppars",
            SourceTable::PlanetarySystems => "ps",
        }
    }

    /// Whether rows may repeat the same planet and need deduplication
    pub fn has_duplicates(&self) -> bool {
        matches!(self, SourceTable::PlanetarySystems)
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Open interval (min, max) on a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    fn validate(&self, column: &str) -> QueryResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(QueryError::InvalidFilter(format!(
                "{column} range bounds must be finite, got ({}, {})",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(QueryError::InvalidFilter(format!(
                "{column} range minimum {} must be below maximum {}",
                self.min, self.max
            )));
        }
        Ok(())
    }

    fn clause(&self, column: &str) -> String {
        format!("{column}>{} and {column}<{}", self.min, self.max)
    }
}

impl From<(f64, f64)> for Range {
    fn from((min, max): (f64, f64)) -> Self {
        Range::new(min, max)
    }
}

/// Optional filters for an archive query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilters {
    /// Host star name, matched with SQL `like` (so `%` wildcards work)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Stellar effective temperature range in K
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t_eff: Option<Range>,
    /// Declination range in degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dec: Option<Range>,
    /// Orbital period range in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<Range>,
    /// Exclude planets missing either mass or radius
    #[serde(default)]
    pub require_mass_and_radius: bool,
    #[serde(default)]
    pub table: SourceTable,
}

impl QueryFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn t_eff(mut self, range: impl Into<Range>) -> Self {
        self.t_eff = Some(range.into());
        self
    }

    pub fn dec(mut self, range: impl Into<Range>) -> Self {
        self.dec = Some(range.into());
        self
    }

    pub fn period(mut self, range: impl Into<Range>) -> Self {
        self.period = Some(range.into());
        self
    }

    pub fn require_mass_and_radius(mut self, required: bool) -> Self {
        self.require_mass_and_radius = required;
        self
    }

    pub fn table(mut self, table: SourceTable) -> Self {
        self.table = table;
        self
    }

    /// Build the AND-combined predicate clauses
    pub fn clauses(&self) -> QueryResult<Vec<String>> {
        let mut cuts = vec![format!("pl_orbeccen<{MAX_ECCENTRICITY}")];

        if self.require_mass_and_radius {
            cuts.push("pl_masse is not null and pl_rade is not null".to_string());
        }
        if let Some(hostname) = &self.hostname {
            cuts.push(format!("hostname like '{}'", escape_literal(hostname)));
        }

        let ranges = [
            ("st_teff", self.t_eff),
            ("dec", self.dec),
            ("pl_orbper", self.period),
        ];
        for (column, range) in ranges {
            if let Some(range) = range {
                range.validate(column)?;
                cuts.push(range.clause(column));
            }
        }

        Ok(cuts)
    }

    /// Full predicate string
    pub fn predicate(&self) -> QueryResult<String> {
        Ok(self.clauses()?.join(" and "))
    }

    /// Request for the standard column set with these filters
    pub fn to_request(&self) -> QueryResult<CatalogRequest> {
        Ok(CatalogRequest {
            table: self.table,
            columns: ARCHIVE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            predicate: self.predicate()?,
        })
    }
}

/// Double single quotes so a value can sit inside an ADQL string literal
fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// A single read-only catalog request: column selection plus predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRequest {
    pub table: SourceTable,
    pub columns: Vec<String>,
    pub predicate: String,
}

impl CatalogRequest {
    /// Render as an ADQL statement
    pub fn to_adql(&self) -> String {
        let mut adql = format!(
            "select {} from {}",
            self.columns.join(", "),
            self.table.table_name()
        );
        if !self.predicate.is_empty() {
            adql.push_str(" where ");
            adql.push_str(&self.predicate);
        }
        adql
    }
}
