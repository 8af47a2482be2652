use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::CatalogError;
use crate::assessment::domain::{AnswerOption, Category};
use crate::assessment::routine::{Exercise, RoutineTemplate, TemplateBlock};

pub(crate) fn parse_exercises<R: Read>(reader: R) -> Result<Vec<Exercise>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut exercises = Vec::new();

    for record in csv_reader.deserialize::<ExerciseRow>() {
        let row = record?;
        exercises.push(Exercise {
            category: parse_category(&row.category)?,
            id: row.id,
            name: row.name,
            level: row.level,
            repetitions: row.repetitions,
            rest: row.rest,
        });
    }

    Ok(exercises)
}

/// One row per template block; rows sharing a `template_id` form one template.
pub(crate) fn parse_templates<R: Read>(reader: R) -> Result<Vec<RoutineTemplate>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut order: Vec<String> = Vec::new();
    let mut templates: BTreeMap<String, RoutineTemplate> = BTreeMap::new();

    for record in csv_reader.deserialize::<TemplateRow>() {
        let row = record?;
        let block = TemplateBlock {
            id: row.block_id,
            name: row.block_name,
            category: parse_category(&row.category)?,
            order: row.order,
            series: row.series,
        };

        match templates.get_mut(&row.template_id) {
            Some(template) => {
                if template.days_per_week != row.days_per_week
                    || template.session_minutes != row.session_minutes
                {
                    return Err(CatalogError::InconsistentTemplate {
                        template_id: row.template_id,
                    });
                }
                template.blocks.push(block);
            }
            None => {
                order.push(row.template_id.clone());
                templates.insert(
                    row.template_id.clone(),
                    RoutineTemplate {
                        id: row.template_id,
                        name: row.template_name,
                        days_per_week: row.days_per_week,
                        session_minutes: row.session_minutes,
                        blocks: vec![block],
                    },
                );
            }
        }
    }

    Ok(order
        .into_iter()
        .filter_map(|id| templates.remove(&id))
        .collect())
}

fn parse_category(value: &str) -> Result<Category, CatalogError> {
    Category::from_code(value).ok_or_else(|| CatalogError::UnknownCategory {
        value: value.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct ExerciseRow {
    id: String,
    name: String,
    category: String,
    level: u8,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    repetitions: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rest: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TemplateRow {
    template_id: String,
    template_name: String,
    days_per_week: u8,
    session_minutes: u16,
    block_id: String,
    block_name: String,
    category: String,
    order: u8,
    #[serde(default, deserialize_with = "empty_series_as_none")]
    series: Option<u8>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn empty_series_as_none<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    match empty_string_as_none(deserializer)? {
        Some(value) => value
            .parse::<u8>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
