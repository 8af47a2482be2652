use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    AbilitySet, Answer, AnswerOption, AssessmentAnswers, BeginnerAnswers, FrontLeverAnswers,
    HandstandAnswers, PlancheAnswers, PullAnswers, PushAnswers,
};

/// Questionnaire payload as submitted by the wizard.
///
/// Selects arrive as codes (tiers may be strings or integers, blank means unanswered) and
/// toggles as booleans. Conversion into [`AssessmentAnswers`] never fails; unknown codes are
/// preserved as unrecognized answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentResponses {
    pub abilities: Vec<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub pullups_reps: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub weighted_pullups_kg: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub muscle_ups_type: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub weighted_muscle_ups_kg: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub dips_reps: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub weighted_dips_kg: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub extreme_dips_kg: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub handstand_level: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub handstand_one_arm: bool,
    #[serde(rename = "handstand_90_degree", deserialize_with = "flag")]
    pub handstand_ninety_degree: bool,
    #[serde(deserialize_with = "flag")]
    pub handstand_dynamic_one_arm: bool,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub front_lever_level: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub front_lever_dynamic: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub front_lever_elite: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub front_lever_victorian: bool,
    #[serde(deserialize_with = "flag")]
    pub front_lever_sat_supino: bool,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub planche_level: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub planche_dynamic: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub planche_elite: Option<String>,
    #[serde(deserialize_with = "flag")]
    pub planche_zanetti: bool,
    #[serde(deserialize_with = "flag")]
    pub planche_pelican: bool,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub standard_pushups: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub knee_pushups_level: Option<String>,
    #[serde(deserialize_with = "code_or_blank", skip_serializing_if = "Option::is_none")]
    pub australian_rows_level: Option<String>,
}

impl AssessmentResponses {
    pub fn with_abilities<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abilities: codes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn answers(&self) -> AssessmentAnswers {
        AssessmentAnswers::from(self)
    }
}

impl From<&AssessmentResponses> for AssessmentAnswers {
    fn from(raw: &AssessmentResponses) -> Self {
        AssessmentAnswers {
            abilities: AbilitySet::from_codes(&raw.abilities),
            pull: PullAnswers {
                reps: Answer::parse(raw.pullups_reps.as_deref()),
                weighted_kg: Answer::parse(raw.weighted_pullups_kg.as_deref()),
                muscle_up: Answer::parse(raw.muscle_ups_type.as_deref()),
                weighted_muscle_up_kg: Answer::parse(raw.weighted_muscle_ups_kg.as_deref()),
            },
            push: PushAnswers {
                reps: Answer::parse(raw.dips_reps.as_deref()),
                weighted_kg: Answer::parse(raw.weighted_dips_kg.as_deref()),
                extreme_kg: Answer::parse(raw.extreme_dips_kg.as_deref()),
            },
            handstand: HandstandAnswers {
                level: Answer::parse(raw.handstand_level.as_deref()),
                one_arm: raw.handstand_one_arm,
                ninety_degree: raw.handstand_ninety_degree,
                dynamic_one_arm: raw.handstand_dynamic_one_arm,
            },
            front_lever: FrontLeverAnswers {
                level: Answer::parse(raw.front_lever_level.as_deref()),
                dynamic: Answer::parse(raw.front_lever_dynamic.as_deref()),
                elite: Answer::parse(raw.front_lever_elite.as_deref()),
                victorian: raw.front_lever_victorian,
                sat_supino: raw.front_lever_sat_supino,
            },
            planche: PlancheAnswers {
                level: Answer::parse(raw.planche_level.as_deref()),
                dynamic: Answer::parse(raw.planche_dynamic.as_deref()),
                elite: Answer::parse(raw.planche_elite.as_deref()),
                zanetti: raw.planche_zanetti,
                pelican: raw.planche_pelican,
            },
            beginner: BeginnerAnswers {
                standard_pushups: Answer::parse(raw.standard_pushups.as_deref()),
                knee_pushups: Answer::parse(raw.knee_pushups_level.as_deref()),
                australian_rows: Answer::parse(raw.australian_rows_level.as_deref()),
            },
        }
    }
}

impl From<AssessmentResponses> for AssessmentAnswers {
    fn from(raw: AssessmentResponses) -> Self {
        AssessmentAnswers::from(&raw)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Flag(bool),
    Integer(i64),
    Decimal(f64),
    Text(String),
}

fn code_or_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match value {
        None => None,
        Some(RawValue::Flag(flag)) => Some(if flag { "yes" } else { "no" }.to_string()),
        Some(RawValue::Integer(number)) => Some(number.to_string()),
        Some(RawValue::Decimal(number)) if number.fract() == 0.0 => {
            Some(format!("{}", number as i64))
        }
        Some(RawValue::Decimal(number)) => Some(number.to_string()),
        Some(RawValue::Text(text)) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
    })
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RawValue>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawValue::Flag(flag)) => flag,
        Some(RawValue::Integer(number)) => number != 0,
        Some(RawValue::Text(text)) => bool::from_code(&text).unwrap_or(false),
        Some(RawValue::Decimal(_)) | None => false,
    })
}
