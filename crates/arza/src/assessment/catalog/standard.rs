use crate::assessment::domain::Category;
use crate::assessment::profile::{DAYS_PER_WEEK, SESSION_MINUTES};
use crate::assessment::routine::{Exercise, RoutineTemplate, TemplateBlock};

type ExerciseRow = (
    &'static str,
    &'static str,
    Category,
    u8,
    Option<&'static str>,
    Option<&'static str>,
);

#[rustfmt::skip]
const EXERCISES: &[ExerciseRow] = &[
    ("tiron-1-rows", "Australian rows", Category::Tiron, 1, Some("10-15"), None),
    ("tiron-1-negatives", "Negative pull-ups", Category::Tiron, 1, Some("5"), Some("120s")),
    ("tiron-1-scap", "Scapular pulls", Category::Tiron, 1, Some("10"), Some("60s")),
    ("tiron-2-pullups", "Pull-ups", Category::Tiron, 2, None, None),
    ("tiron-2-chinups", "Chin-ups", Category::Tiron, 2, None, None),
    ("tiron-2-archer-rows", "Archer rows", Category::Tiron, 2, Some("6-8"), None),
    ("tiron-3-weighted", "Weighted pull-ups", Category::Tiron, 3, Some("4-6"), Some("180s")),
    ("tiron-3-muscle-up", "Strict muscle-ups", Category::Tiron, 3, Some("3-5"), Some("180s")),
    ("tiron-3-archer", "Archer pull-ups", Category::Tiron, 3, Some("4-6"), Some("120s")),
    ("empuje-1-pushups", "Push-ups", Category::Empuje, 1, None, None),
    ("empuje-1-bench-dips", "Bench dips", Category::Empuje, 1, Some("10-15"), None),
    ("empuje-1-support", "Parallel bar support hold", Category::Empuje, 1, Some("20s"), Some("60s")),
    ("empuje-2-dips", "Dips", Category::Empuje, 2, None, None),
    ("empuje-2-pike", "Pike push-ups", Category::Empuje, 2, None, None),
    ("empuje-2-diamond", "Diamond push-ups", Category::Empuje, 2, None, None),
    ("empuje-3-weighted", "Weighted dips", Category::Empuje, 3, Some("4-6"), Some("180s")),
    ("empuje-3-korean", "Korean dips", Category::Empuje, 3, Some("6-8"), Some("120s")),
    ("empuje-3-ring", "Ring dips", Category::Empuje, 3, Some("6-10"), Some("120s")),
    ("hs-1-wall", "Wall handstand hold", Category::Handstand, 1, Some("30s"), Some("60s")),
    ("hs-1-kickups", "Kick-up drills", Category::Handstand, 1, Some("10"), Some("60s")),
    ("hs-2-chest", "Chest-to-wall handstand", Category::Handstand, 2, Some("45s"), Some("60s")),
    ("hs-2-shoulder-taps", "Wall shoulder taps", Category::Handstand, 2, Some("10"), Some("60s")),
    ("hs-3-free", "Freestanding handstand", Category::Handstand, 3, Some("20s"), Some("60s")),
    ("hs-3-pike-press", "Wall pike push-ups", Category::Handstand, 3, None, None),
    ("hs-4-hspu-wall", "Wall handstand push-ups", Category::Handstand, 4, Some("5-8"), Some("120s")),
    ("hs-4-line", "Freestanding line drills", Category::Handstand, 4, Some("30s"), Some("60s")),
    ("hs-5-hspu", "Freestanding handstand push-ups", Category::Handstand, 5, Some("3-5"), Some("150s")),
    ("hs-5-one-arm-lean", "One-arm handstand leans", Category::Handstand, 5, Some("15s"), Some("90s")),
    ("hs-6-one-arm", "One-arm handstand", Category::Handstand, 6, Some("10s"), Some("120s")),
    ("hs-6-90", "90 degree push-ups", Category::Handstand, 6, Some("3"), Some("180s")),
    ("fl-1-tuck-hold", "Tuck front lever hold", Category::FrontLever, 1, Some("10-15s"), None),
    ("fl-1-hollow", "Hollow body hold", Category::FrontLever, 1, Some("30s"), Some("60s")),
    ("fl-2-adv-tuck", "Advanced tuck hold", Category::FrontLever, 2, Some("10s"), None),
    ("fl-2-tuck-rows", "Tuck front lever rows", Category::FrontLever, 2, Some("5-8"), None),
    ("fl-3-one-leg", "One-leg front lever", Category::FrontLever, 3, Some("8s"), Some("120s")),
    ("fl-3-negatives", "Front lever negatives", Category::FrontLever, 3, Some("3-5"), Some("120s")),
    ("fl-4-straddle", "Straddle front lever", Category::FrontLever, 4, Some("8s"), Some("120s")),
    ("fl-4-tuck-pullups", "Tuck front lever pull-ups", Category::FrontLever, 4, Some("5"), Some("120s")),
    ("fl-5-full", "Full front lever hold", Category::FrontLever, 5, Some("5-8s"), Some("150s")),
    ("fl-5-rows", "Front lever rows", Category::FrontLever, 5, Some("3-5"), Some("150s")),
    ("fl-6-touch", "Front lever touch", Category::FrontLever, 6, Some("3"), Some("180s")),
    ("fl-6-pullups", "Front lever pull-ups", Category::FrontLever, 6, Some("3"), Some("180s")),
    ("fl-7-sat", "Front lever to sat", Category::FrontLever, 7, Some("1-3"), Some("180s")),
    ("fl-7-victorian", "Victorian negatives", Category::FrontLever, 7, Some("1-3"), Some("180s")),
    ("pl-1-lean", "Planche lean", Category::Planche, 1, Some("20s"), Some("60s")),
    ("pl-1-frog", "Frog stand", Category::Planche, 1, Some("20s"), Some("60s")),
    ("pl-2-tuck", "Tuck planche hold", Category::Planche, 2, Some("8-10s"), None),
    ("pl-2-pseudo", "Pseudo planche push-ups", Category::Planche, 2, Some("8"), None),
    ("pl-3-adv-tuck", "Advanced tuck planche", Category::Planche, 3, Some("8s"), Some("120s")),
    ("pl-3-tuck-press", "Tuck planche presses", Category::Planche, 3, Some("3-5"), Some("120s")),
    ("pl-4-straddle-neg", "Straddle planche negatives", Category::Planche, 4, Some("3"), Some("150s")),
    ("pl-4-adv-tuck-pushups", "Advanced tuck planche push-ups", Category::Planche, 4, Some("5"), Some("150s")),
    ("pl-5-straddle", "Straddle planche hold", Category::Planche, 5, Some("5s"), Some("150s")),
    ("pl-6-straddle-press", "Straddle planche presses", Category::Planche, 6, Some("3"), Some("180s")),
    ("pl-7-full", "Full planche hold", Category::Planche, 7, Some("3-5s"), Some("180s")),
    ("pl-8-maltese", "Maltese lean", Category::Planche, 8, Some("3s"), Some("180s")),
    ("pl-8-full-pushups", "Full planche push-ups", Category::Planche, 8, Some("1-3"), Some("180s")),
];

pub(super) fn exercises() -> Vec<Exercise> {
    EXERCISES
        .iter()
        .map(|(id, name, category, level, repetitions, rest)| Exercise {
            id: id.to_string(),
            name: name.to_string(),
            category: *category,
            level: *level,
            repetitions: repetitions.map(str::to_string),
            rest: rest.map(str::to_string),
        })
        .collect()
}

/// Block layout grows with session length; higher frequencies add series to skill work.
pub(super) fn templates() -> Vec<RoutineTemplate> {
    let mut templates = Vec::new();

    for days in DAYS_PER_WEEK {
        for minutes in SESSION_MINUTES {
            let mut categories = vec![Category::Tiron, Category::Empuje, Category::Handstand];
            if *minutes >= 60 {
                categories.push(Category::FrontLever);
            }
            if *minutes >= 90 {
                categories.push(Category::Planche);
            }

            let skill_series = if *days >= 5 { 4 } else { 3 };
            let blocks = categories
                .into_iter()
                .enumerate()
                .map(|(index, category)| TemplateBlock {
                    id: format!("{}-{}", category.key(), index + 1),
                    name: category.label().to_string(),
                    category,
                    order: index as u8 + 1,
                    series: match category {
                        Category::Tiron | Category::Empuje => None,
                        _ => Some(skill_series),
                    },
                })
                .collect();

            templates.push(RoutineTemplate {
                id: format!("arza-{days}x{minutes}"),
                name: format!("{days} days x {minutes} min"),
                days_per_week: *days,
                session_minutes: *minutes,
                blocks,
            });
        }
    }

    templates
}
