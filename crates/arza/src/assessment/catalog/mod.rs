//! Routine templates and exercises, either built in or imported from CSV.

mod parser;
mod standard;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::Category;
use super::routine::{
    Exercise, ExerciseCatalog, RoutineError, RoutineTemplate, TemplateCatalog,
    TrainingAvailability,
};

pub const TEMPLATES_FILE: &str = "templates.csv";
pub const EXERCISES_FILE: &str = "exercises.csv";

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownCategory { value: String },
    InconsistentTemplate { template_id: String },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read catalog: {err}"),
            CatalogError::Csv(err) => write!(f, "failed to parse catalog csv: {err}"),
            CatalogError::UnknownCategory { value } => {
                write!(f, "unknown exercise category '{value}'")
            }
            CatalogError::InconsistentTemplate { template_id } => write!(
                f,
                "template '{template_id}' lists blocks with different schedules"
            ),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::UnknownCategory { .. } | CatalogError::InconsistentTemplate { .. } => {
                None
            }
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Catalog held entirely in memory; serves both catalog traits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    templates: Vec<RoutineTemplate>,
    exercises: Vec<Exercise>,
}

impl InMemoryCatalog {
    pub fn new(templates: Vec<RoutineTemplate>, exercises: Vec<Exercise>) -> Self {
        Self {
            templates,
            exercises,
        }
    }

    pub fn standard() -> Self {
        Self::new(standard::templates(), standard::exercises())
    }

    pub fn from_readers<T: Read, E: Read>(
        templates: T,
        exercises: E,
    ) -> Result<Self, CatalogError> {
        Ok(Self::new(
            parser::parse_templates(templates)?,
            parser::parse_exercises(exercises)?,
        ))
    }

    /// Load `templates.csv` and `exercises.csv` from `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let templates = File::open(dir.join(TEMPLATES_FILE))?;
        let exercises = File::open(dir.join(EXERCISES_FILE))?;
        Self::from_readers(templates, exercises)
    }

    pub fn templates(&self) -> &[RoutineTemplate] {
        &self.templates
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}

impl TemplateCatalog for InMemoryCatalog {
    fn template_for(
        &self,
        availability: &TrainingAvailability,
    ) -> Result<Option<RoutineTemplate>, RoutineError> {
        Ok(self
            .templates
            .iter()
            .find(|template| template.matches(availability))
            .cloned())
    }
}

impl ExerciseCatalog for InMemoryCatalog {
    fn exercises_for(&self, category: Category, level: u8) -> Result<Vec<Exercise>, RoutineError> {
        Ok(self
            .exercises
            .iter()
            .filter(|exercise| exercise.category == category && exercise.level == level)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::profile::{DAYS_PER_WEEK, SESSION_MINUTES};

    #[test]
    fn standard_catalog_covers_every_schedule() {
        let catalog = InMemoryCatalog::standard();
        for days in DAYS_PER_WEEK {
            for minutes in SESSION_MINUTES {
                let availability =
                    TrainingAvailability::new(*days, *minutes).expect("supported schedule");
                let template = catalog
                    .template_for(&availability)
                    .expect("catalog lookup")
                    .expect("template exists");
                assert!(!template.blocks.is_empty());
            }
        }
    }

    #[test]
    fn standard_catalog_covers_every_tier() {
        let catalog = InMemoryCatalog::standard();
        let tiers = [
            (Category::Tiron, 3),
            (Category::Empuje, 3),
            (Category::Handstand, 6),
            (Category::FrontLever, 7),
            (Category::Planche, 8),
        ];
        for (category, top) in tiers {
            for level in 1..=top {
                let exercises = catalog
                    .exercises_for(category, level)
                    .expect("catalog lookup");
                assert!(!exercises.is_empty(), "{category:?} level {level}");
            }
        }
    }

    #[test]
    fn from_dir_propagates_missing_files() {
        let missing = std::env::temp_dir().join("arza-catalog-does-not-exist");
        match InMemoryCatalog::from_dir(&missing) {
            Err(CatalogError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
