//! Decision Matrix - Fixed-shape alternatives x criteria table of raw values.

use serde::Serialize;
use std::collections::HashSet;

use super::{TopsisValidation, MAX_ALTERNATIVES, MAX_CRITERIA, MIN_ALTERNATIVES, MIN_CRITERIA};

/// Fully populated, rectangular table of raw criterion values.
///
/// Rows follow alternative insertion order, columns follow criterion
/// insertion order. Instances only come out of [`DecisionMatrixBuilder::build`],
/// so every matrix has at least two rows and two columns, unique non-empty
/// names, and finite values in every cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    /// Row-major cell values.
    values: Vec<f64>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Builds a matrix directly from complete rows.
    pub fn from_rows(
        alternatives: Vec<impl Into<String>>,
        criteria: Vec<impl Into<String>>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, TopsisValidation> {
        let alternatives: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        if rows.len() != alternatives.len() {
            return Err(TopsisValidation::dimension_mismatch(
                "rows",
                alternatives.len(),
                rows.len(),
            ));
        }

        let mut builder = Self::builder()
            .alternatives(alternatives.clone())
            .criteria(criteria);
        for (name, row) in alternatives.into_iter().zip(rows) {
            builder = builder.row(name, row);
        }
        builder.build()
    }

    /// Returns the alternative names in row order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the criterion names in column order.
    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Returns the value at (alternative, criterion).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn value(&self, alternative: usize, criterion: usize) -> f64 {
        assert!(criterion < self.criteria.len(), "criterion index out of bounds");
        self.values[alternative * self.criteria.len() + criterion]
    }

    /// Returns one alternative's row.
    pub fn row(&self, alternative: usize) -> &[f64] {
        let width = self.criteria.len();
        &self.values[alternative * width..(alternative + 1) * width]
    }

    /// Iterates over all rows in alternative order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + Clone {
        self.values.chunks(self.criteria.len())
    }

    /// Iterates over one criterion's column.
    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.rows().map(move |row| row[criterion])
    }
}

/// Builder for constructing DecisionMatrix instances.
///
/// Cells may be supplied as whole rows or individually; any cell left unset
/// is reported as [`TopsisValidation::MissingCell`] by `build`.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    alternatives: Vec<String>,
    criteria: Vec<String>,
    rows: Vec<(String, Vec<Option<f64>>)>,
    cells: Vec<(String, String, f64)>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternatives.
    pub fn alternatives(mut self, names: Vec<impl Into<String>>) -> Self {
        self.alternatives = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the criteria.
    pub fn criteria(mut self, names: Vec<impl Into<String>>) -> Self {
        self.criteria = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets a complete row for an alternative.
    pub fn row(self, alternative: impl Into<String>, values: Vec<f64>) -> Self {
        self.partial_row(alternative, values.into_iter().map(Some).collect())
    }

    /// Sets a row that may contain missing cells.
    pub fn partial_row(mut self, alternative: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        self.rows.push((alternative.into(), values));
        self
    }

    /// Sets a single cell.
    pub fn cell(
        mut self,
        alternative: impl Into<String>,
        criterion: impl Into<String>,
        value: f64,
    ) -> Self {
        self.cells
            .push((alternative.into(), criterion.into(), value));
        self
    }

    /// Validates shape and contents, then builds the matrix.
    pub fn build(self) -> Result<DecisionMatrix, TopsisValidation> {
        check_count("alternative", self.alternatives.len(), MAX_ALTERNATIVES)?;
        if self.alternatives.len() < MIN_ALTERNATIVES {
            return Err(TopsisValidation::TooFewAlternatives {
                min: MIN_ALTERNATIVES,
                actual: self.alternatives.len(),
            });
        }
        check_count("criterion", self.criteria.len(), MAX_CRITERIA)?;
        if self.criteria.len() < MIN_CRITERIA {
            return Err(TopsisValidation::TooFewCriteria {
                min: MIN_CRITERIA,
                actual: self.criteria.len(),
            });
        }
        check_names("alternative", &self.alternatives)?;
        check_names("criterion", &self.criteria)?;

        let width = self.criteria.len();
        let mut grid: Vec<Option<f64>> = vec![None; self.alternatives.len() * width];

        for (name, values) in &self.rows {
            let i = position("alternative", &self.alternatives, name)?;
            if values.len() != width {
                return Err(TopsisValidation::dimension_mismatch(
                    format!("values for alternative '{}'", name),
                    width,
                    values.len(),
                ));
            }
            for (j, value) in values.iter().enumerate() {
                grid[i * width + j] = *value;
            }
        }

        for (alternative, criterion, value) in &self.cells {
            let i = position("alternative", &self.alternatives, alternative)?;
            let j = position("criterion", &self.criteria, criterion)?;
            grid[i * width + j] = Some(*value);
        }

        let mut values = Vec::with_capacity(grid.len());
        for (index, cell) in grid.into_iter().enumerate() {
            let (i, j) = (index / width, index % width);
            match cell {
                None => {
                    return Err(TopsisValidation::MissingCell {
                        alternative: self.alternatives[i].clone(),
                        criterion: self.criteria[j].clone(),
                    })
                }
                Some(v) if !v.is_finite() => {
                    return Err(TopsisValidation::NonFiniteValue {
                        alternative: self.alternatives[i].clone(),
                        criterion: self.criteria[j].clone(),
                    })
                }
                Some(v) => values.push(v),
            }
        }

        Ok(DecisionMatrix {
            alternatives: self.alternatives,
            criteria: self.criteria,
            values,
        })
    }
}

fn check_count(kind: &'static str, actual: usize, max: usize) -> Result<(), TopsisValidation> {
    if actual > max {
        return Err(TopsisValidation::TooLarge { kind, max, actual });
    }
    Ok(())
}

/// Names must be non-empty after trimming and unique.
fn check_names(kind: &'static str, names: &[String]) -> Result<(), TopsisValidation> {
    let mut seen = HashSet::with_capacity(names.len());
    for (position, name) in names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(TopsisValidation::EmptyName { kind, position });
        }
        if !seen.insert(name.as_str()) {
            return Err(TopsisValidation::DuplicateName {
                kind,
                name: name.clone(),
            });
        }
    }
    Ok(())
}

fn position(kind: &'static str, names: &[String], name: &str) -> Result<usize, TopsisValidation> {
    names
        .iter()
        .position(|n| n == name)
        .ok_or_else(|| TopsisValidation::UnknownName {
            kind,
            name: name.to_string(),
        })
}
