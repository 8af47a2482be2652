use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Questionnaire option with stable wire codes.
///
/// `OPTIONS` is the lookup table used for both parsing and rendering; when a variant is
/// listed more than once (aliases), the first code is the canonical one.
pub trait AnswerOption: Copy + PartialEq + Sized + 'static {
    const OPTIONS: &'static [(&'static str, Self)];

    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::OPTIONS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(code))
            .map(|(_, option)| *option)
    }

    fn code(self) -> &'static str {
        Self::OPTIONS
            .iter()
            .find(|(_, option)| *option == self)
            .map(|(code, _)| *code)
            .unwrap_or_default()
    }
}

impl AnswerOption for bool {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("yes", true),
        ("no", false),
        ("true", true),
        ("false", false),
        ("si", true),
        ("sí", true),
    ];
}

/// A single questionnaire answer.
///
/// Unrecognized codes are kept verbatim: they count as answered for validation purposes but
/// never contribute points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer<T> {
    Unanswered,
    Given(T),
    Unrecognized(String),
}

impl<T> Default for Answer<T> {
    fn default() -> Self {
        Answer::Unanswered
    }
}

impl<T: AnswerOption> Answer<T> {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            None => Answer::Unanswered,
            Some(code) => T::from_code(code)
                .map(Answer::Given)
                .unwrap_or_else(|| Answer::Unrecognized(code.to_string())),
        }
    }

    pub fn given(&self) -> Option<T> {
        match self {
            Answer::Given(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        !matches!(self, Answer::Unanswered)
    }

    pub fn is(&self, option: T) -> bool {
        self.given() == Some(option)
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Answer::Unanswered => None,
            Answer::Given(value) => Some(value.code()),
            Answer::Unrecognized(raw) => Some(raw.as_str()),
        }
    }
}

impl<T> From<T> for Answer<T> {
    fn from(value: T) -> Self {
        Answer::Given(value)
    }
}

/// Skill a subject claims competence in; `Beginner` is the "none of the above" choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Pullups,
    Dips,
    Handstand,
    FrontLever,
    Planche,
    #[serde(rename = "none", alias = "ninguno")]
    Beginner,
}

impl AnswerOption for Ability {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("pullups", Ability::Pullups),
        ("dips", Ability::Dips),
        ("handstand", Ability::Handstand),
        ("front_lever", Ability::FrontLever),
        ("planche", Ability::Planche),
        ("none", Ability::Beginner),
        ("ninguno", Ability::Beginner),
    ];
}

/// Selected abilities. Holding `Beginner` excludes every other member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Ability>", into = "Vec<Ability>")]
pub struct AbilitySet(BTreeSet<Ability>);

impl AbilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn beginner() -> Self {
        let mut set = Self::new();
        set.select(Ability::Beginner);
        set
    }

    /// Build a set from wire codes; unknown codes are ignored and `none` wins.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .filter_map(|code| Ability::from_code(code.as_ref()))
            .collect()
    }

    pub fn select(&mut self, ability: Ability) {
        if ability == Ability::Beginner {
            self.0.clear();
        } else {
            self.0.remove(&Ability::Beginner);
        }
        self.0.insert(ability);
    }

    /// Checkbox semantics of the skills step: `Beginner` always resets the selection,
    /// any other ability flips its membership and drops `Beginner`.
    pub fn toggle(&mut self, ability: Ability) {
        if ability == Ability::Beginner {
            self.select(ability);
            return;
        }

        self.0.remove(&Ability::Beginner);
        if !self.0.remove(&ability) {
            self.0.insert(ability);
        }
    }

    pub fn contains(&self, ability: Ability) -> bool {
        self.0.contains(&ability)
    }

    pub fn is_beginner(&self) -> bool {
        self.contains(Ability::Beginner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Ability> + '_ {
        self.0.iter().copied()
    }
}

/// Bulk construction is order independent: `Beginner` anywhere wins.
impl FromIterator<Ability> for AbilitySet {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let abilities: BTreeSet<Ability> = iter.into_iter().collect();
        if abilities.contains(&Ability::Beginner) {
            return Self::beginner();
        }
        Self(abilities)
    }
}

impl From<Vec<Ability>> for AbilitySet {
    fn from(value: Vec<Ability>) -> Self {
        value.into_iter().collect()
    }
}

impl From<AbilitySet> for Vec<Ability> {
    fn from(value: AbilitySet) -> Self {
        value.0.into_iter().collect()
    }
}

/// Scoring category. Tirón and Empuje are the pull and push families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Tiron,
    Empuje,
    Handstand,
    FrontLever,
    Planche,
    Beginner,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tiron,
        Category::Empuje,
        Category::Handstand,
        Category::FrontLever,
        Category::Planche,
        Category::Beginner,
    ];

    /// Categories shown on the card and tiered for routine selection.
    pub const SKILLS: [Category; 5] = [
        Category::Tiron,
        Category::Empuje,
        Category::Handstand,
        Category::FrontLever,
        Category::Planche,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Category::Tiron => "tiron",
            Category::Empuje => "empuje",
            Category::Handstand => "handstand",
            Category::FrontLever => "front_lever",
            Category::Planche => "planche",
            Category::Beginner => "beginner",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Tiron => "Tirón",
            Category::Empuje => "Empuje",
            Category::Handstand => "Handstand",
            Category::FrontLever => "Front Lever",
            Category::Planche => "Planche",
            Category::Beginner => "Principiante",
        }
    }

    /// Ability whose selection opens this category's questionnaire block.
    pub const fn ability(self) -> Ability {
        match self {
            Category::Tiron => Ability::Pullups,
            Category::Empuje => Ability::Dips,
            Category::Handstand => Ability::Handstand,
            Category::FrontLever => Ability::FrontLever,
            Category::Planche => Ability::Planche,
            Category::Beginner => Ability::Beginner,
        }
    }
}

impl AnswerOption for Category {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("tiron", Category::Tiron),
        ("empuje", Category::Empuje),
        ("handstand", Category::Handstand),
        ("front_lever", Category::FrontLever),
        ("planche", Category::Planche),
        ("beginner", Category::Beginner),
        ("pull", Category::Tiron),
        ("push", Category::Empuje),
        ("front", Category::FrontLever),
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullReps {
    UpTo3,
    UpTo10,
    UpTo18,
    UpTo30,
    Over30,
}

impl PullReps {
    /// Upper bound of the tier as sent by the questionnaire.
    pub const fn reps(self) -> u8 {
        match self {
            PullReps::UpTo3 => 3,
            PullReps::UpTo10 => 10,
            PullReps::UpTo18 => 18,
            PullReps::UpTo30 => 30,
            PullReps::Over30 => 35,
        }
    }
}

impl AnswerOption for PullReps {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("3", PullReps::UpTo3),
        ("10", PullReps::UpTo10),
        ("18", PullReps::UpTo18),
        ("30", PullReps::UpTo30),
        ("35", PullReps::Over30),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightedPullKg {
    NotTried,
    Kg20,
    Kg30,
    Kg40,
    Kg45,
}

impl WeightedPullKg {
    pub const fn kg(self) -> u8 {
        match self {
            WeightedPullKg::NotTried => 0,
            WeightedPullKg::Kg20 => 20,
            WeightedPullKg::Kg30 => 30,
            WeightedPullKg::Kg40 => 40,
            WeightedPullKg::Kg45 => 45,
        }
    }
}

impl AnswerOption for WeightedPullKg {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("0", WeightedPullKg::NotTried),
        ("20", WeightedPullKg::Kg20),
        ("30", WeightedPullKg::Kg30),
        ("40", WeightedPullKg::Kg40),
        ("45", WeightedPullKg::Kg45),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuscleUpType {
    Unable,
    Kipping,
    Strict,
    MultipleStrict,
}

impl MuscleUpType {
    pub const fn is_strict(self) -> bool {
        matches!(self, MuscleUpType::Strict | MuscleUpType::MultipleStrict)
    }
}

impl AnswerOption for MuscleUpType {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", MuscleUpType::Unable),
        ("kipping", MuscleUpType::Kipping),
        ("strict", MuscleUpType::Strict),
        ("multiple_strict", MuscleUpType::MultipleStrict),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightedMuscleUpKg {
    NotTried,
    Kg7,
    Kg14,
    Kg15,
    Kg20,
}

impl WeightedMuscleUpKg {
    pub const fn kg(self) -> u8 {
        match self {
            WeightedMuscleUpKg::NotTried => 0,
            WeightedMuscleUpKg::Kg7 => 7,
            WeightedMuscleUpKg::Kg14 => 14,
            WeightedMuscleUpKg::Kg15 => 15,
            WeightedMuscleUpKg::Kg20 => 20,
        }
    }
}

impl AnswerOption for WeightedMuscleUpKg {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("0", WeightedMuscleUpKg::NotTried),
        ("7", WeightedMuscleUpKg::Kg7),
        ("14", WeightedMuscleUpKg::Kg14),
        ("15", WeightedMuscleUpKg::Kg15),
        ("20", WeightedMuscleUpKg::Kg20),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DipReps {
    UpTo8,
    UpTo18,
    UpTo35,
    Over35,
}

impl DipReps {
    pub const fn reps(self) -> u8 {
        match self {
            DipReps::UpTo8 => 8,
            DipReps::UpTo18 => 18,
            DipReps::UpTo35 => 35,
            DipReps::Over35 => 40,
        }
    }

    /// 35+ repetitions open the 60-80 kg weighted options.
    pub const fn is_high_tier(self) -> bool {
        matches!(self, DipReps::UpTo35 | DipReps::Over35)
    }
}

impl AnswerOption for DipReps {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("8", DipReps::UpTo8),
        ("18", DipReps::UpTo18),
        ("35", DipReps::UpTo35),
        ("40", DipReps::Over35),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightedDipKg {
    NotTried,
    Single40To60,
    Multiple40To60,
    Single60To80,
    Multiple60To80,
}

impl WeightedDipKg {
    pub const fn is_top_tier(self) -> bool {
        matches!(
            self,
            WeightedDipKg::Single60To80 | WeightedDipKg::Multiple60To80
        )
    }

    pub const fn is_multiple(self) -> bool {
        matches!(
            self,
            WeightedDipKg::Multiple40To60 | WeightedDipKg::Multiple60To80
        )
    }

    /// Upper bound of the load bracket, as stored on evaluation records.
    pub const fn kg(self) -> Option<u8> {
        match self {
            WeightedDipKg::NotTried => None,
            WeightedDipKg::Single40To60 | WeightedDipKg::Multiple40To60 => Some(60),
            WeightedDipKg::Single60To80 | WeightedDipKg::Multiple60To80 => Some(80),
        }
    }
}

impl AnswerOption for WeightedDipKg {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", WeightedDipKg::NotTried),
        ("single_40_60", WeightedDipKg::Single40To60),
        ("multiple_40_60", WeightedDipKg::Multiple40To60),
        ("single_60_80", WeightedDipKg::Single60To80),
        ("multiple_60_80", WeightedDipKg::Multiple60To80),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeDipKg {
    NotTried,
    From80To100,
    From80To100Reps,
    Kg100,
    Kg130,
}

impl ExtremeDipKg {
    pub const fn kg(self) -> Option<u8> {
        match self {
            ExtremeDipKg::NotTried => None,
            ExtremeDipKg::From80To100 | ExtremeDipKg::From80To100Reps => Some(90),
            ExtremeDipKg::Kg100 => Some(100),
            ExtremeDipKg::Kg130 => Some(130),
        }
    }
}

impl AnswerOption for ExtremeDipKg {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", ExtremeDipKg::NotTried),
        ("80_100", ExtremeDipKg::From80To100),
        ("80_100_reps", ExtremeDipKg::From80To100Reps),
        ("100", ExtremeDipKg::Kg100),
        ("130", ExtremeDipKg::Kg130),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandstandLevel {
    Occasional,
    Consistent,
    Hspu,
}

impl HandstandLevel {
    pub const fn unlocks_variations(self) -> bool {
        matches!(self, HandstandLevel::Consistent | HandstandLevel::Hspu)
    }
}

impl AnswerOption for HandstandLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("ocasional", HandstandLevel::Occasional),
        ("consistente", HandstandLevel::Consistent),
        ("hspu", HandstandLevel::Hspu),
        ("occasional", HandstandLevel::Occasional),
        ("consistent", HandstandLevel::Consistent),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontLeverLevel {
    Unable,
    Tuck,
    TuckAdvanced,
    FrontLever,
    FrontLeverTouch,
}

impl AnswerOption for FrontLeverLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", FrontLeverLevel::Unable),
        ("tuck", FrontLeverLevel::Tuck),
        ("tuck_advanced", FrontLeverLevel::TuckAdvanced),
        ("front_lever", FrontLeverLevel::FrontLever),
        ("front_lever_touch", FrontLeverLevel::FrontLeverTouch),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontLeverDynamic {
    NotYet,
    TuckPullup,
    Negative,
    Pullup,
}

impl AnswerOption for FrontLeverDynamic {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", FrontLeverDynamic::NotYet),
        ("tuck_pullup", FrontLeverDynamic::TuckPullup),
        ("negative", FrontLeverDynamic::Negative),
        ("pullup", FrontLeverDynamic::Pullup),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontLeverElite {
    NotYet,
    Pullup,
    PullupTouch,
    TouchWide,
    Sat,
}

impl AnswerOption for FrontLeverElite {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", FrontLeverElite::NotYet),
        ("pullup", FrontLeverElite::Pullup),
        ("pullup_touch", FrontLeverElite::PullupTouch),
        ("touch_wide", FrontLeverElite::TouchWide),
        ("sat", FrontLeverElite::Sat),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlancheLevel {
    Unable,
    Lean,
    Tuck,
    AdvancedTuck,
    Straddle,
    Full,
}

impl AnswerOption for PlancheLevel {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", PlancheLevel::Unable),
        ("lean", PlancheLevel::Lean),
        ("tuck", PlancheLevel::Tuck),
        ("advanced_tuck", PlancheLevel::AdvancedTuck),
        ("straddle", PlancheLevel::Straddle),
        ("full", PlancheLevel::Full),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlancheDynamic {
    NotYet,
    TuckNegative,
    TuckPress,
    StraddleNegative,
}

impl AnswerOption for PlancheDynamic {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", PlancheDynamic::NotYet),
        ("tuck_negative", PlancheDynamic::TuckNegative),
        ("tuck_press", PlancheDynamic::TuckPress),
        ("straddle_negative", PlancheDynamic::StraddleNegative),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlancheElite {
    NotYet,
    FullPress,
    FullPushup,
    Maltese,
}

impl AnswerOption for PlancheElite {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("none", PlancheElite::NotYet),
        ("full_press", PlancheElite::FullPress),
        ("full_pushup", PlancheElite::FullPushup),
        ("maltese", PlancheElite::Maltese),
    ];
}

/// Repetition bracket used by the beginner block (<10, 10-20, >20).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    Minima,
    Baja,
    Media,
}

impl AnswerOption for VolumeTier {
    const OPTIONS: &'static [(&'static str, Self)] = &[
        ("minima", VolumeTier::Minima),
        ("baja", VolumeTier::Baja),
        ("media", VolumeTier::Media),
        ("minimal", VolumeTier::Minima),
        ("low", VolumeTier::Baja),
        ("medium", VolumeTier::Media),
    ];
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullAnswers {
    pub reps: Answer<PullReps>,
    pub weighted_kg: Answer<WeightedPullKg>,
    pub muscle_up: Answer<MuscleUpType>,
    pub weighted_muscle_up_kg: Answer<WeightedMuscleUpKg>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushAnswers {
    pub reps: Answer<DipReps>,
    pub weighted_kg: Answer<WeightedDipKg>,
    pub extreme_kg: Answer<ExtremeDipKg>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandstandAnswers {
    pub level: Answer<HandstandLevel>,
    pub one_arm: bool,
    pub ninety_degree: bool,
    pub dynamic_one_arm: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontLeverAnswers {
    pub level: Answer<FrontLeverLevel>,
    pub dynamic: Answer<FrontLeverDynamic>,
    pub elite: Answer<FrontLeverElite>,
    pub victorian: bool,
    pub sat_supino: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlancheAnswers {
    pub level: Answer<PlancheLevel>,
    pub dynamic: Answer<PlancheDynamic>,
    pub elite: Answer<PlancheElite>,
    pub zanetti: bool,
    pub pelican: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeginnerAnswers {
    pub standard_pushups: Answer<bool>,
    pub knee_pushups: Answer<VolumeTier>,
    pub australian_rows: Answer<VolumeTier>,
}

/// Typed questionnaire state handed to the engine. Immutable once scored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentAnswers {
    pub abilities: AbilitySet,
    pub pull: PullAnswers,
    pub push: PushAnswers,
    pub handstand: HandstandAnswers,
    pub front_lever: FrontLeverAnswers,
    pub planche: PlancheAnswers,
    pub beginner: BeginnerAnswers,
}
