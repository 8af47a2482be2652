use super::{ScoreComponent, ScoreResult};
use crate::assessment::domain::{
    AnswerOption, AssessmentAnswers, BeginnerAnswers, Category, DipReps, ExtremeDipKg,
    FrontLeverAnswers, FrontLeverDynamic, FrontLeverElite, FrontLeverLevel, HandstandAnswers,
    HandstandLevel, MuscleUpType, PlancheAnswers, PlancheDynamic, PlancheElite, PlancheLevel,
    PullAnswers, PullReps, PushAnswers, VolumeTier, WeightedDipKg, WeightedMuscleUpKg,
    WeightedPullKg,
};
use crate::assessment::unlock::{self, AnswerField};

/// Fixed Tirón and Empuje score granted to subjects who select "none".
const BEGINNER_FLOOR: u8 = 20;

struct Tally<'a> {
    category: Category,
    points: u8,
    components: &'a mut Vec<ScoreComponent>,
}

impl<'a> Tally<'a> {
    fn new(category: Category, components: &'a mut Vec<ScoreComponent>) -> Self {
        Self {
            category,
            points: 0,
            components,
        }
    }

    fn award(&mut self, field: AnswerField, points: u8, note: impl Into<String>) {
        if points == 0 {
            return;
        }

        self.points = self.points.saturating_add(points);
        self.components.push(ScoreComponent {
            category: self.category,
            field: Some(field),
            points,
            note: note.into(),
        });
    }

    fn flag(&mut self, field: AnswerField, enabled: bool) {
        if enabled {
            self.award(field, 1, format!("{} achieved", field.key()));
        }
    }

    fn total(self) -> u8 {
        self.points
    }
}

/// Score every category over the effective answers (locked sub-answers discarded).
pub(crate) fn score_answers(answers: &AssessmentAnswers) -> (ScoreResult, Vec<ScoreComponent>) {
    let effective = unlock::effective_answers(answers);
    let mut components = Vec::new();

    let (tiron, empuje) = if effective.abilities.is_beginner() {
        (
            beginner_floor(Category::Tiron, &mut components),
            beginner_floor(Category::Empuje, &mut components),
        )
    } else {
        (
            score_tiron(&effective.pull, &mut components),
            score_empuje(&effective.push, &mut components),
        )
    };

    let scores = ScoreResult {
        tiron,
        empuje,
        handstand: score_handstand(&effective.handstand, &mut components),
        front_lever: score_front_lever(&effective.front_lever, &mut components),
        planche: score_planche(&effective.planche, &mut components),
        beginner: score_beginner(&effective.beginner, &mut components),
    };

    (scores, components)
}

fn beginner_floor(category: Category, components: &mut Vec<ScoreComponent>) -> u8 {
    components.push(ScoreComponent {
        category,
        field: None,
        points: BEGINNER_FLOOR,
        note: "beginner floor".to_string(),
    });
    BEGINNER_FLOOR
}

fn score_tiron(pull: &PullAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::Tiron, components);

    if let Some(reps) = pull.reps.given() {
        tally.award(
            AnswerField::PullupsReps,
            pull_reps_points(reps),
            format!("{} pull-ups", reps.reps()),
        );
    }
    if let Some(load) = pull.weighted_kg.given() {
        tally.award(
            AnswerField::WeightedPullupsKg,
            weighted_pull_points(load),
            format!("weighted pull-up +{} kg", load.kg()),
        );
    }
    if let Some(kind) = pull.muscle_up.given() {
        tally.award(
            AnswerField::MuscleUpsType,
            muscle_up_points(kind),
            format!("{} muscle-up", kind.code()),
        );
    }
    if let Some(load) = pull.weighted_muscle_up_kg.given() {
        tally.award(
            AnswerField::WeightedMuscleUpsKg,
            weighted_muscle_up_points(load),
            format!("weighted muscle-up +{} kg", load.kg()),
        );
    }

    tally.total()
}

fn score_empuje(push: &PushAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::Empuje, components);
    let high_tier = push.reps.given().map_or(false, DipReps::is_high_tier);

    if let Some(reps) = push.reps.given() {
        tally.award(
            AnswerField::DipsReps,
            dip_reps_points(reps),
            format!("{} dips", reps.reps()),
        );
    }
    if let Some(load) = push.weighted_kg.given() {
        tally.award(
            AnswerField::WeightedDipsKg,
            weighted_dip_points(load, high_tier),
            format!("weighted dips {}", load.code()),
        );
    }
    if let Some(load) = push.extreme_kg.given() {
        tally.award(
            AnswerField::ExtremeDipsKg,
            extreme_dip_points(load),
            format!("extreme dips {}", load.code()),
        );
    }

    tally.total()
}

fn score_handstand(handstand: &HandstandAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::Handstand, components);

    if let Some(level) = handstand.level.given() {
        tally.award(
            AnswerField::HandstandLevel,
            handstand_points(level),
            format!("{} handstand", level.code()),
        );
    }
    tally.flag(AnswerField::HandstandOneArm, handstand.one_arm);
    tally.flag(AnswerField::HandstandNinetyDegree, handstand.ninety_degree);
    tally.flag(AnswerField::HandstandDynamicOneArm, handstand.dynamic_one_arm);

    tally.total()
}

fn score_front_lever(front: &FrontLeverAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::FrontLever, components);

    if let Some(level) = front.level.given() {
        tally.award(
            AnswerField::FrontLeverLevel,
            front_lever_level_points(level),
            format!("{} hold", level.code()),
        );
    }
    if let Some(dynamic) = front.dynamic.given() {
        tally.award(
            AnswerField::FrontLeverDynamic,
            front_lever_dynamic_points(dynamic),
            format!("{} dynamic", dynamic.code()),
        );
    }
    if let Some(elite) = front.elite.given() {
        tally.award(
            AnswerField::FrontLeverElite,
            front_lever_elite_points(elite),
            format!("{} elite", elite.code()),
        );
    }
    tally.flag(AnswerField::FrontLeverVictorian, front.victorian);
    tally.flag(AnswerField::FrontLeverSatSupino, front.sat_supino);

    tally.total()
}

fn score_planche(planche: &PlancheAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::Planche, components);

    if let Some(level) = planche.level.given() {
        tally.award(
            AnswerField::PlancheLevel,
            planche_level_points(level),
            format!("{} planche", level.code()),
        );
    }
    if let Some(dynamic) = planche.dynamic.given() {
        tally.award(
            AnswerField::PlancheDynamic,
            planche_dynamic_points(dynamic),
            format!("{} dynamic", dynamic.code()),
        );
    }
    if let Some(elite) = planche.elite.given() {
        tally.award(
            AnswerField::PlancheElite,
            planche_elite_points(elite),
            format!("{} elite", elite.code()),
        );
    }
    tally.flag(AnswerField::PlancheZanetti, planche.zanetti);
    tally.flag(AnswerField::PlanchePelican, planche.pelican);

    tally.total()
}

fn score_beginner(beginner: &BeginnerAnswers, components: &mut Vec<ScoreComponent>) -> u8 {
    let mut tally = Tally::new(Category::Beginner, components);

    if beginner.standard_pushups.is(true) {
        tally.award(AnswerField::StandardPushups, 3, "standard push-ups");
    }
    if let Some(volume) = beginner.knee_pushups.given() {
        tally.award(
            AnswerField::KneePushupsLevel,
            volume_points(volume),
            format!("{} knee push-up volume", volume.code()),
        );
    }
    if let Some(volume) = beginner.australian_rows.given() {
        tally.award(
            AnswerField::AustralianRowsLevel,
            volume_points(volume),
            format!("{} australian row volume", volume.code()),
        );
    }

    tally.total()
}

fn pull_reps_points(reps: PullReps) -> u8 {
    match reps {
        PullReps::UpTo3 => 1,
        PullReps::UpTo10 => 2,
        PullReps::UpTo18 => 3,
        PullReps::UpTo30 => 4,
        PullReps::Over30 => 5,
    }
}

fn weighted_pull_points(load: WeightedPullKg) -> u8 {
    match load {
        WeightedPullKg::NotTried => 0,
        WeightedPullKg::Kg20 => 1,
        WeightedPullKg::Kg30 => 2,
        WeightedPullKg::Kg40 => 3,
        WeightedPullKg::Kg45 => 4,
    }
}

fn muscle_up_points(kind: MuscleUpType) -> u8 {
    match kind {
        MuscleUpType::Unable => 0,
        MuscleUpType::Kipping => 1,
        MuscleUpType::Strict => 2,
        MuscleUpType::MultipleStrict => 3,
    }
}

fn weighted_muscle_up_points(load: WeightedMuscleUpKg) -> u8 {
    match load {
        WeightedMuscleUpKg::NotTried => 0,
        WeightedMuscleUpKg::Kg7 => 1,
        WeightedMuscleUpKg::Kg14 => 2,
        WeightedMuscleUpKg::Kg15 => 3,
        WeightedMuscleUpKg::Kg20 => 4,
    }
}

fn dip_reps_points(reps: DipReps) -> u8 {
    match reps {
        DipReps::UpTo8 => 4,
        DipReps::UpTo18 => 5,
        DipReps::UpTo35 => 6,
        DipReps::Over35 => 7,
    }
}

/// The 60-80 kg brackets only score when the dips tier is high; at the low tier they are
/// not offered, and a stray value earns nothing.
fn weighted_dip_points(load: WeightedDipKg, high_tier: bool) -> u8 {
    match (load, high_tier) {
        (WeightedDipKg::NotTried, _) => 0,
        (WeightedDipKg::Single40To60, _) => 3,
        (WeightedDipKg::Multiple40To60, _) => 4,
        (WeightedDipKg::Single60To80, true) => 5,
        (WeightedDipKg::Multiple60To80, true) => 6,
        (WeightedDipKg::Single60To80 | WeightedDipKg::Multiple60To80, false) => 0,
    }
}

fn extreme_dip_points(load: ExtremeDipKg) -> u8 {
    match load {
        ExtremeDipKg::NotTried => 0,
        ExtremeDipKg::From80To100 => 1,
        ExtremeDipKg::From80To100Reps => 2,
        ExtremeDipKg::Kg100 => 3,
        ExtremeDipKg::Kg130 => 4,
    }
}

fn handstand_points(level: HandstandLevel) -> u8 {
    match level {
        HandstandLevel::Occasional => 1,
        HandstandLevel::Consistent => 2,
        HandstandLevel::Hspu => 3,
    }
}

fn front_lever_level_points(level: FrontLeverLevel) -> u8 {
    match level {
        FrontLeverLevel::Unable => 0,
        FrontLeverLevel::Tuck => 1,
        FrontLeverLevel::TuckAdvanced => 2,
        FrontLeverLevel::FrontLever => 3,
        FrontLeverLevel::FrontLeverTouch => 4,
    }
}

fn front_lever_dynamic_points(dynamic: FrontLeverDynamic) -> u8 {
    match dynamic {
        FrontLeverDynamic::NotYet => 0,
        FrontLeverDynamic::TuckPullup => 1,
        FrontLeverDynamic::Negative => 2,
        FrontLeverDynamic::Pullup => 3,
    }
}

fn front_lever_elite_points(elite: FrontLeverElite) -> u8 {
    match elite {
        FrontLeverElite::NotYet => 0,
        FrontLeverElite::Pullup => 1,
        FrontLeverElite::PullupTouch => 2,
        FrontLeverElite::TouchWide => 3,
        FrontLeverElite::Sat => 4,
    }
}

fn planche_level_points(level: PlancheLevel) -> u8 {
    match level {
        PlancheLevel::Unable => 0,
        PlancheLevel::Lean => 1,
        PlancheLevel::Tuck => 2,
        PlancheLevel::AdvancedTuck => 3,
        PlancheLevel::Straddle => 4,
        PlancheLevel::Full => 5,
    }
}

fn planche_dynamic_points(dynamic: PlancheDynamic) -> u8 {
    match dynamic {
        PlancheDynamic::NotYet => 0,
        PlancheDynamic::TuckNegative => 1,
        PlancheDynamic::TuckPress => 2,
        PlancheDynamic::StraddleNegative => 3,
    }
}

fn planche_elite_points(elite: PlancheElite) -> u8 {
    match elite {
        PlancheElite::NotYet => 0,
        PlancheElite::FullPress => 1,
        PlancheElite::FullPushup => 2,
        PlancheElite::Maltese => 3,
    }
}

fn volume_points(volume: VolumeTier) -> u8 {
    match volume {
        VolumeTier::Minima => 2,
        VolumeTier::Baja => 3,
        VolumeTier::Media => 4,
    }
}
