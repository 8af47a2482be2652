use crate::infra::InMemoryEvaluationRepository;
use arza::assessment::{
    AssessmentEngine, AssessmentOutcome, AssessmentResponses, AssessmentService,
    AssessmentServiceError, Category, InMemoryCatalog, LevelResult, RoutinePlan, ScoringConfig,
    TrainingAvailability, UserId,
};
use arza::config::AppConfig;
use arza::error::AppError;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding the questionnaire answers
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the full outcome as JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Training days per week used for the routine (3, 4 or 5)
    #[arg(long, default_value_t = 4)]
    pub(crate) days: u8,
    /// Session length in minutes used for the routine (45, 60 or 90)
    #[arg(long, default_value_t = 60)]
    pub(crate) minutes: u16,
    /// Walk through the beginner path instead of the skills path
    #[arg(long)]
    pub(crate) beginner: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read_to_string(&args.input)?;
    let responses: AssessmentResponses = serde_json::from_str(&raw)?;

    let engine = AssessmentEngine::new(config.scoring);
    let outcome = engine.evaluate(&responses.answers());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render_outcome(&outcome);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let availability =
        TrainingAvailability::new(args.days, args.minutes).map_err(AssessmentServiceError::from)?;

    let service = AssessmentService::new(
        Arc::new(InMemoryEvaluationRepository::default()),
        Arc::new(InMemoryCatalog::standard()),
        ScoringConfig::default(),
    );

    let responses = if args.beginner {
        beginner_responses()
    } else {
        skills_responses()
    };

    println!("ARZA assessment demo");
    println!("Abilities: {}", responses.abilities.join(", "));

    let outcome = service.preview(&responses);
    render_outcome(&outcome);

    let results = service.submit(UserId("demo-athlete".to_string()), &responses)?;
    println!(
        "\nStored evaluation {} for {}",
        results.evaluation.id.0, results.evaluation.user_id.0
    );

    let routine = service.generate_routine(&results.evaluation.id, availability)?;
    render_routine(&routine);

    Ok(())
}

fn code(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn skills_responses() -> AssessmentResponses {
    AssessmentResponses {
        pullups_reps: code("18"),
        weighted_pullups_kg: code("20"),
        muscle_ups_type: code("strict"),
        weighted_muscle_ups_kg: code("7"),
        dips_reps: code("35"),
        weighted_dips_kg: code("multiple_40_60"),
        handstand_level: code("consistente"),
        front_lever_level: code("tuck_advanced"),
        front_lever_dynamic: code("tuck_pullup"),
        ..AssessmentResponses::with_abilities(["pullups", "dips", "handstand", "front_lever"])
    }
}

fn beginner_responses() -> AssessmentResponses {
    AssessmentResponses {
        standard_pushups: code("no"),
        knee_pushups_level: code("baja"),
        australian_rows_level: code("minima"),
        ..AssessmentResponses::with_abilities(["none"])
    }
}

fn render_outcome(outcome: &AssessmentOutcome) {
    if !outcome.is_complete() {
        println!("\nAssessment incomplete:");
        for (field, message) in outcome.validation.iter() {
            println!("- {field}: {message}");
        }
    }

    println!("\nCategory        Raw  Card  Level");
    for category in Category::ALL {
        let level = outcome
            .levels
            .level_for(category)
            .map(|level| level.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<14} {:>4} {:>5} {:>6}",
            category.label(),
            outcome.scores.get(category),
            outcome.normalized.get(category),
            level
        );
    }

    println!("\nARZA card: {}", outcome.overall.summary());
}

fn render_routine(routine: &RoutinePlan) {
    println!(
        "\nRoutine {} from template '{}' ({} days x {} min)",
        routine.id.0,
        routine.template_name,
        routine.availability.days_per_week(),
        routine.availability.session_minutes()
    );
    render_levels(&routine.levels);

    let mut current_block = None;
    for detail in &routine.details {
        if current_block != Some(&detail.block_id) {
            println!("\n  {}", detail.block_name);
            current_block = Some(&detail.block_id);
        }
        println!(
            "    {}. {} - {} x {} (rest {})",
            detail.order, detail.exercise_name, detail.series, detail.repetitions, detail.rest
        );
    }
}

fn render_levels(levels: &LevelResult) {
    let tiers: Vec<String> = Category::SKILLS
        .iter()
        .filter_map(|category| {
            levels
                .level_for(*category)
                .map(|level| format!("{} {level}", category.label()))
        })
        .collect();
    println!("Levels: {}", tiers.join(" | "));
}
