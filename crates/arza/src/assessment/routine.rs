use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Category;
use super::profile::{DAYS_PER_WEEK, SESSION_MINUTES};
use super::record::{EvaluationId, UserId};
use super::scoring::LevelResult;

const EXERCISES_PER_BLOCK: usize = 3;
const DEFAULT_SERIES: u8 = 3;
const DEFAULT_REPETITIONS: &str = "8-12";
const DEFAULT_REST: &str = "90s";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoutineId(pub String);

/// Weekly schedule a routine template is chosen by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TrainingAvailability {
    days_per_week: u8,
    session_minutes: u16,
}

impl TrainingAvailability {
    pub fn new(days_per_week: u8, session_minutes: u16) -> Result<Self, RoutineError> {
        if !DAYS_PER_WEEK.contains(&days_per_week) || !SESSION_MINUTES.contains(&session_minutes)
        {
            return Err(RoutineError::UnsupportedAvailability {
                days_per_week,
                session_minutes,
            });
        }

        Ok(Self {
            days_per_week,
            session_minutes,
        })
    }

    pub fn days_per_week(&self) -> u8 {
        self.days_per_week
    }

    pub fn session_minutes(&self) -> u16 {
        self.session_minutes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineTemplate {
    pub id: String,
    pub name: String,
    pub days_per_week: u8,
    pub session_minutes: u16,
    pub blocks: Vec<TemplateBlock>,
}

impl RoutineTemplate {
    pub fn matches(&self, availability: &TrainingAvailability) -> bool {
        self.days_per_week == availability.days_per_week()
            && self.session_minutes == availability.session_minutes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBlock {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub order: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest: Option<String>,
}

/// Source of session templates.
pub trait TemplateCatalog: Send + Sync {
    fn template_for(
        &self,
        availability: &TrainingAvailability,
    ) -> Result<Option<RoutineTemplate>, RoutineError>;
}

/// Source of exercises, addressed by category and tier.
pub trait ExerciseCatalog: Send + Sync {
    fn exercises_for(&self, category: Category, level: u8) -> Result<Vec<Exercise>, RoutineError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineDetail {
    pub block_id: String,
    pub block_name: String,
    pub category: Category,
    pub order: u8,
    pub exercise_id: String,
    pub exercise_name: String,
    pub series: u8,
    pub repetitions: String,
    pub rest: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutinePlan {
    pub id: RoutineId,
    pub user_id: UserId,
    pub evaluation_id: EvaluationId,
    pub template_id: String,
    pub template_name: String,
    pub availability: TrainingAvailability,
    pub levels: LevelResult,
    pub details: Vec<RoutineDetail>,
    pub created_at: DateTime<Utc>,
}

/// Who the routine is for and which tiers drive exercise selection.
#[derive(Debug, Clone)]
pub struct RoutineRequest {
    pub user_id: UserId,
    pub evaluation_id: EvaluationId,
    pub levels: LevelResult,
    pub availability: TrainingAvailability,
}

/// Builds routines from a template and exercise catalog.
pub struct RoutinePlanner<C> {
    catalog: Arc<C>,
}

impl<C> Clone for RoutinePlanner<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<C> RoutinePlanner<C>
where
    C: TemplateCatalog + ExerciseCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn plan(
        &self,
        id: RoutineId,
        request: RoutineRequest,
        created_at: DateTime<Utc>,
    ) -> Result<RoutinePlan, RoutineError> {
        let availability = request.availability;
        let template = self.catalog.template_for(&availability)?.ok_or(
            RoutineError::NoTemplate {
                days_per_week: availability.days_per_week(),
                session_minutes: availability.session_minutes(),
            },
        )?;

        let mut blocks = template.blocks.clone();
        blocks.sort_by_key(|block| block.order);

        let mut details = Vec::new();
        for block in &blocks {
            let level = request.levels.level_for(block.category).unwrap_or(1);
            let exercises = self.catalog.exercises_for(block.category, level)?;

            for (index, exercise) in exercises.into_iter().take(EXERCISES_PER_BLOCK).enumerate() {
                details.push(RoutineDetail {
                    block_id: block.id.clone(),
                    block_name: block.name.clone(),
                    category: block.category,
                    order: index as u8 + 1,
                    exercise_id: exercise.id,
                    exercise_name: exercise.name,
                    series: block.series.unwrap_or(DEFAULT_SERIES),
                    repetitions: exercise
                        .repetitions
                        .unwrap_or_else(|| DEFAULT_REPETITIONS.to_string()),
                    rest: exercise.rest.unwrap_or_else(|| DEFAULT_REST.to_string()),
                });
            }
        }

        Ok(RoutinePlan {
            id,
            user_id: request.user_id,
            evaluation_id: request.evaluation_id,
            template_id: template.id,
            template_name: template.name,
            availability,
            levels: request.levels,
            details,
            created_at,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoutineError {
    #[error("no routine template for {days_per_week} days of {session_minutes} minutes")]
    NoTemplate {
        days_per_week: u8,
        session_minutes: u16,
    },
    #[error("unsupported schedule: {days_per_week} days of {session_minutes} minutes")]
    UnsupportedAvailability {
        days_per_week: u8,
        session_minutes: u16,
    },
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),
}
