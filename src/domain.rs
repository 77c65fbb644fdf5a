//! Domain models for the course catalog: proficiency levels, categories,
//! course records and everything nested inside them.
//!
//! All entities here are built synchronously during catalog generation and
//! held in memory for the process lifetime. Nothing is persisted or mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// CEFR proficiency tier. The platform starts at A2 (no A1 content).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
  A2,
  B1,
  B2,
  C1,
  C2,
}

impl Level {
  pub const ALL: [Level; 5] = [Level::A2, Level::B1, Level::B2, Level::C1, Level::C2];

  pub fn code(&self) -> &'static str {
    match self {
      Level::A2 => "A2",
      Level::B1 => "B1",
      Level::B2 => "B2",
      Level::C1 => "C1",
      Level::C2 => "C2",
    }
  }

  pub fn from_code(code: &str) -> Option<Level> {
    match code.trim().to_ascii_uppercase().as_str() {
      "A2" => Some(Level::A2),
      "B1" => Some(Level::B1),
      "B2" => Some(Level::B2),
      "C1" => Some(Level::C1),
      "C2" => Some(Level::C2),
      _ => None,
    }
  }

  /// Completing a course at C1 or C2 grants a certificate.
  pub fn certifies(&self) -> bool {
    matches!(self, Level::C1 | Level::C2)
  }
}

/// Marketing difficulty label shown next to the CEFR code.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
  Beginner,
  Elementary,
  Intermediate,
  #[serde(rename = "Upper-Intermediate")]
  UpperIntermediate,
  Advanced,
  Mastery,
}

impl Difficulty {
  pub fn label(&self) -> &'static str {
    match self {
      Difficulty::Beginner => "Beginner",
      Difficulty::Elementary => "Elementary",
      Difficulty::Intermediate => "Intermediate",
      Difficulty::UpperIntermediate => "Upper-Intermediate",
      Difficulty::Advanced => "Advanced",
      Difficulty::Mastery => "Mastery",
    }
  }
}

/// The 20 catalog categories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
  #[serde(rename = "Grammar & Structure")]
  GrammarStructure,
  #[serde(rename = "Vocabulary & Expression")]
  VocabularyExpression,
  #[serde(rename = "Conversation & Speaking")]
  ConversationSpeaking,
  #[serde(rename = "Listening & Comprehension")]
  ListeningComprehension,
  #[serde(rename = "Reading & Literature")]
  ReadingLiterature,
  #[serde(rename = "Writing & Composition")]
  WritingComposition,
  #[serde(rename = "Business French")]
  BusinessFrench,
  #[serde(rename = "Academic French")]
  AcademicFrench,
  #[serde(rename = "Cultural Immersion")]
  CulturalImmersion,
  #[serde(rename = "Travel & Tourism")]
  TravelTourism,
  #[serde(rename = "Media & Entertainment")]
  MediaEntertainment,
  #[serde(rename = "Science & Technology")]
  ScienceTechnology,
  #[serde(rename = "Art & History")]
  ArtHistory,
  #[serde(rename = "Cuisine & Gastronomy")]
  CuisineGastronomy,
  #[serde(rename = "Fashion & Lifestyle")]
  FashionLifestyle,
  #[serde(rename = "Politics & Society")]
  PoliticsSociety,
  #[serde(rename = "Philosophy & Thought")]
  PhilosophyThought,
  #[serde(rename = "Sports & Recreation")]
  SportsRecreation,
  #[serde(rename = "Music & Performance")]
  MusicPerformance,
  #[serde(rename = "Cinema & Theater")]
  CinemaTheater,
}

impl Category {
  pub const ALL: [Category; 20] = [
    Category::GrammarStructure,
    Category::VocabularyExpression,
    Category::ConversationSpeaking,
    Category::ListeningComprehension,
    Category::ReadingLiterature,
    Category::WritingComposition,
    Category::BusinessFrench,
    Category::AcademicFrench,
    Category::CulturalImmersion,
    Category::TravelTourism,
    Category::MediaEntertainment,
    Category::ScienceTechnology,
    Category::ArtHistory,
    Category::CuisineGastronomy,
    Category::FashionLifestyle,
    Category::PoliticsSociety,
    Category::PhilosophyThought,
    Category::SportsRecreation,
    Category::MusicPerformance,
    Category::CinemaTheater,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Category::GrammarStructure => "Grammar & Structure",
      Category::VocabularyExpression => "Vocabulary & Expression",
      Category::ConversationSpeaking => "Conversation & Speaking",
      Category::ListeningComprehension => "Listening & Comprehension",
      Category::ReadingLiterature => "Reading & Literature",
      Category::WritingComposition => "Writing & Composition",
      Category::BusinessFrench => "Business French",
      Category::AcademicFrench => "Academic French",
      Category::CulturalImmersion => "Cultural Immersion",
      Category::TravelTourism => "Travel & Tourism",
      Category::MediaEntertainment => "Media & Entertainment",
      Category::ScienceTechnology => "Science & Technology",
      Category::ArtHistory => "Art & History",
      Category::CuisineGastronomy => "Cuisine & Gastronomy",
      Category::FashionLifestyle => "Fashion & Lifestyle",
      Category::PoliticsSociety => "Politics & Society",
      Category::PhilosophyThought => "Philosophy & Thought",
      Category::SportsRecreation => "Sports & Recreation",
      Category::MusicPerformance => "Music & Performance",
      Category::CinemaTheater => "Cinema & Theater",
    }
  }

  /// Case-insensitive lookup by display name ("business french" works too).
  pub fn from_name(name: &str) -> Option<Category> {
    let wanted = name.trim().to_lowercase();
    Category::ALL.iter().copied().find(|c| c.name().to_lowercase() == wanted)
  }
}

/// Position of a module in the repeating curriculum pattern.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModuleType {
  Lesson,
  Practice,
  Conversation,
  Listening,
  Reading,
  Writing,
  Cultural,
  Review,
  Assessment,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
  MultipleChoice,
  FillBlank,
  Matching,
  Ordering,
  Translation,
  Dictation,
  Speaking,
  Writing,
  ListeningComprehension,
  ReadingComprehension,
  RolePlay,
  Debate,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
  Quiz,
  Speaking,
  Writing,
  Listening,
  Comprehensive,
}

/// Which assembler path produced a record. Both paths share one id counter,
/// so the source is informational, not a namespace.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CourseSource {
  Curated,
  Bulk,
}

/// One learning unit in the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
  pub id: String,
  pub title: String,
  pub title_fr: String,
  pub level: Level,
  pub category: Category,
  pub subcategory: String,
  pub description: String,
  pub description_fr: String,
  /// Minutes.
  pub duration: u32,
  pub modules: Vec<CourseModule>,
  pub prerequisites: Vec<String>,
  pub skills: Vec<String>,
  pub rating: f32,
  pub students_enrolled: u32,
  pub completion_rate: f32,
  pub difficulty: Difficulty,
  pub tags: Vec<String>,
  pub instructor: Instructor,
  pub multimedia: CourseMultimedia,
  pub certification: bool,
  pub xp_reward: u32,
  pub badges: Vec<String>,
  pub source: CourseSource,
}

impl CourseRecord {
  /// Exercises across all modules, assessment questions included.
  pub fn exercise_count(&self) -> usize {
    self
      .modules
      .iter()
      .map(|m| m.exercises.len() + m.assessments.iter().map(|a| a.questions.len()).sum::<usize>())
      .sum()
  }
}

/// A named, ordered unit inside a course. Ordering is the curriculum order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseModule {
  pub id: String,
  pub title: String,
  pub title_fr: String,
  #[serde(rename = "type")]
  pub module_type: ModuleType,
  /// Minutes.
  pub duration: u32,
  pub content: ModuleContent,
  pub exercises: Vec<Exercise>,
  pub assessments: Vec<Assessment>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContent {
  pub theory: String,
  pub examples: Vec<Example>,
  pub vocabulary: Vec<VocabularyItem>,
  pub grammar: Vec<GrammarPoint>,
  pub cultural_notes: Vec<String>,
  pub multimedia: MediaRefs,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MediaRefs {
  pub images: Vec<String>,
  pub audio: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub video: Option<String>,
}

/// A single question unit, owned by a module or an assessment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
  pub id: String,
  #[serde(rename = "type")]
  pub exercise_type: ExerciseType,
  pub question: String,
  pub question_fr: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub options: Option<Vec<String>>,
  pub correct_answer: CorrectAnswer,
  pub explanation: String,
  pub explanation_fr: String,
  pub points: u32,
  pub hints: Vec<String>,
}

/// Single expected value, or an accepted set (matching/ordering exercises).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CorrectAnswer {
  One(String),
  Many(Vec<String>),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: AssessmentKind,
  pub questions: Vec<Exercise>,
  pub passing_score: u32,
  /// Minutes.
  pub time_limit: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
  pub word: String,
  pub translation: String,
  pub pronunciation: String,
  pub part_of_speech: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gender: Option<Gender>,
  pub examples: Vec<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
  Masculine,
  Feminine,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrammarPoint {
  pub rule: String,
  pub rule_fr: String,
  pub explanation: String,
  pub examples: Vec<Example>,
  pub exceptions: Vec<String>,
  pub practice_prompts: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Example {
  pub french: String,
  pub english: String,
  pub context: String,
}

/// Virtual instructor persona. A fixed roster is shared by reference across
/// the whole catalog; personas are never owned by a single course.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
  pub id: String,
  pub name: String,
  pub avatar: String,
  pub specialty: String,
  pub bio: String,
  pub voice_style: String,
  pub personality: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMultimedia {
  pub hero_image: String,
  pub thumbnails: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub intro_video: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub background_music: Option<String>,
}

/// One entry of the pronunciation drill bank.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationWord {
  pub id: String,
  pub french: String,
  pub english: String,
  pub phonetic: String,
  pub difficulty: DrillDifficulty,
  pub category: String,
  pub tips: Vec<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrillDifficulty {
  Easy,
  Medium,
  Hard,
}

impl DrillDifficulty {
  pub fn from_name(name: &str) -> Option<DrillDifficulty> {
    match name.trim().to_ascii_lowercase().as_str() {
      "easy" => Some(DrillDifficulty::Easy),
      "medium" => Some(DrillDifficulty::Medium),
      "hard" => Some(DrillDifficulty::Hard),
      _ => None,
    }
  }
}
