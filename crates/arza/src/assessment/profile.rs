use serde::{Deserialize, Deserializer, Serialize};

use super::routine::TrainingAvailability;
use super::validation::ValidationErrors;

pub const GENDERS: &[&str] = &["masculino", "femenino", "otro"];

pub const GOALS: &[&str] = &[
    "Bajar de peso",
    "Ganar fuerza",
    "Ganar masa muscular",
    "Mejorar habilidades",
];

pub const TRAINING_PLACES: &[&str] = &["casa", "parque", "gimnasio"];

pub const DAYS_PER_WEEK: &[u8] = &[3, 4, 5];

pub const SESSION_MINUTES: &[u16] = &[45, 60, 90];

const MIN_AGE: f64 = 14.0;
const MAX_AGE: f64 = 80.0;
const MIN_WEIGHT_KG: f64 = 20.0;
const MIN_HEIGHT_CM: f64 = 100.0;
const MIN_GOAL_TEXT: usize = 10;

/// Onboarding data collected before the assessment. Field names follow the signup form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "edad", deserialize_with = "number")]
    pub age: Option<f64>,
    #[serde(rename = "peso", deserialize_with = "number")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "altura", deserialize_with = "number")]
    pub height_cm: Option<f64>,
    #[serde(rename = "ciudad", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "pais", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "genero", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "objetivo")]
    pub goal: Option<String>,
    #[serde(rename = "meta_3_meses")]
    pub three_month_goal: String,
    #[serde(rename = "motivacion")]
    pub motivation: String,
    #[serde(rename = "dias_por_sem", deserialize_with = "number")]
    pub days_per_week: Option<f64>,
    #[serde(rename = "tiempo_sesion", deserialize_with = "number")]
    pub session_minutes: Option<f64>,
    #[serde(rename = "lugar_entrenamiento")]
    pub training_place: Option<String>,
    pub email: String,
}

impl UserProfile {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.insert("nombre", "Name is required");
        }

        match self.age {
            None => errors.insert("edad", "Age is required"),
            Some(age) if age < MIN_AGE => errors.insert("edad", "Minimum age is 14"),
            Some(age) if age > MAX_AGE => errors.insert("edad", "Maximum age is 80"),
            Some(_) => {}
        }

        if !self.weight_kg.map_or(false, |weight| weight >= MIN_WEIGHT_KG) {
            errors.insert("peso", "Invalid weight");
        }

        if !self.height_cm.map_or(false, |height| height >= MIN_HEIGHT_CM) {
            errors.insert("altura", "Invalid height");
        }

        if let Some(gender) = self.gender.as_deref().filter(|value| !value.is_empty()) {
            if !GENDERS.contains(&gender) {
                errors.insert("genero", "Unknown gender option");
            }
        }

        if !self
            .goal
            .as_deref()
            .map_or(false, |goal| GOALS.contains(&goal))
        {
            errors.insert("objetivo", "Select a training goal");
        }

        if self.three_month_goal.trim().chars().count() < MIN_GOAL_TEXT {
            errors.insert("meta_3_meses", "Use at least 10 characters");
        }

        if self.motivation.trim().chars().count() < MIN_GOAL_TEXT {
            errors.insert("motivacion", "Use at least 10 characters");
        }

        if self.training_days().is_none() {
            errors.insert("dias_por_sem", "Choose 3, 4 or 5 days per week");
        }

        if self.training_minutes().is_none() {
            errors.insert("tiempo_sesion", "Choose 45, 60 or 90 minute sessions");
        }

        if !self
            .training_place
            .as_deref()
            .map_or(false, |place| TRAINING_PLACES.contains(&place))
        {
            errors.insert("lugar_entrenamiento", "Select where you train");
        }

        if !is_valid_email(&self.email) {
            errors.insert("email", "Invalid email");
        }

        errors
    }

    /// Weekly schedule used to pick a routine template, when both values are supported.
    pub fn availability(&self) -> Option<TrainingAvailability> {
        TrainingAvailability::new(self.training_days()?, self.training_minutes()?).ok()
    }

    fn training_days(&self) -> Option<u8> {
        let days = whole(self.days_per_week?)?;
        let days = u8::try_from(days).ok()?;
        DAYS_PER_WEEK.contains(&days).then_some(days)
    }

    fn training_minutes(&self) -> Option<u16> {
        let minutes = whole(self.session_minutes?)?;
        let minutes = u16::try_from(minutes).ok()?;
        SESSION_MINUTES.contains(&minutes).then_some(minutes)
    }
}

fn whole(value: f64) -> Option<i64> {
    (value.fract() == 0.0).then_some(value as i64)
}

fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(number)) => Some(number),
        Some(NumberOrText::Text(text)) => text.trim().parse::<f64>().ok(),
        None => None,
    })
}
