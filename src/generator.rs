//! Course record generation and module/exercise synthesis.
//!
//! Flow:
//! 1) Caller picks (level, category, topic index); the topic pool wraps the
//!    index, so any integer is accepted.
//! 2) The generator fills every field of `CourseRecord` from the taxonomy
//!    tables plus bounded draws from the injected RNG.
//! 3) The synthesizer expands the record into modules, each with a content
//!    block, five exercises, and (for the final module) a comprehensive
//!    assessment.
//!
//! Nothing here can fail: unknown indices wrap, and all randomness is
//! bounded. Callers that need reproducible output pass a seeded RNG.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::catalog::CourseIdAllocator;
use crate::domain::{
  Assessment, AssessmentKind, Category, CorrectAnswer, CourseModule, CourseMultimedia,
  CourseRecord, CourseSource, Example, Exercise, ExerciseType, GrammarPoint, Instructor, Level,
  MediaRefs, ModuleContent, ModuleType, VocabularyItem,
};
use crate::taxonomy;
use crate::util::slugify;

/// Repeating curriculum pattern for module types.
const MODULE_CYCLE: [ModuleType; 5] = [
  ModuleType::Lesson,
  ModuleType::Practice,
  ModuleType::Conversation,
  ModuleType::Listening,
  ModuleType::Review,
];

/// Repeating pattern for exercise types within a module.
const EXERCISE_CYCLE: [ExerciseType; 5] = [
  ExerciseType::MultipleChoice,
  ExerciseType::FillBlank,
  ExerciseType::Matching,
  ExerciseType::Translation,
  ExerciseType::ListeningComprehension,
];

const EXERCISES_PER_MODULE: usize = 5;
const ASSESSMENT_QUESTIONS: usize = 10;
const ASSESSMENT_PASSING_SCORE: u32 = 70;
const ASSESSMENT_TIME_LIMIT_MIN: u32 = 30;

/// Builds fully-populated course records from the taxonomy tables.
///
/// The instructor roster is explicit state passed in at construction, not a
/// module-level singleton, so alternative rosters can be injected in tests
/// or from config.
pub struct CourseGenerator {
  roster: Vec<Instructor>,
}

impl CourseGenerator {
  /// An empty roster would leave courses without instructors; fall back to
  /// the built-in personas in that case.
  pub fn new(roster: Vec<Instructor>) -> Self {
    let roster = if roster.is_empty() { taxonomy::instructor_roster() } else { roster };
    Self { roster }
  }

  pub fn with_default_roster() -> Self {
    Self::new(taxonomy::instructor_roster())
  }

  /// Produce one curated course for a (level, category) pair. The topic index
  /// is taken modulo the pool length, so out-of-range indices wrap silently.
  pub fn generate_course(
    &self,
    rng: &mut impl Rng,
    ids: &mut CourseIdAllocator,
    level: Level,
    category: Category,
    topic_index: usize,
  ) -> CourseRecord {
    let pool = taxonomy::topic_pool(category, level);
    let topic = pool[topic_index % pool.len()];

    self.build_course(
      rng,
      ids.allocate(CourseSource::Curated),
      level,
      category,
      topic,
      format!("{} - {} Level", topic, level.code()),
      CourseSource::Curated,
    )
  }

  /// Produce one bulk-path course: level, subject and qualifier are drawn
  /// from the flat bulk pools. Same record builder, lower rating floor.
  pub fn generate_bulk_course(
    &self,
    rng: &mut impl Rng,
    ids: &mut CourseIdAllocator,
  ) -> CourseRecord {
    let level = Level::ALL.choose(rng).copied().unwrap_or(Level::A2);
    let topic = taxonomy::BULK_TOPICS.choose(rng).copied().unwrap_or(taxonomy::BULK_TOPICS[0]);
    let adjective =
      taxonomy::BULK_ADJECTIVES.choose(rng).copied().unwrap_or(taxonomy::BULK_ADJECTIVES[0]);
    let category = taxonomy::bulk_topic_category(topic);

    self.build_course(
      rng,
      ids.allocate(CourseSource::Bulk),
      level,
      category,
      topic,
      format!("{} {}", adjective, topic),
      CourseSource::Bulk,
    )
  }

  fn build_course(
    &self,
    rng: &mut impl Rng,
    id: String,
    level: Level,
    category: Category,
    topic: &str,
    title: String,
    source: CourseSource,
  ) -> CourseRecord {
    let instructor =
      self.roster.choose(rng).cloned().unwrap_or_else(|| self.roster[0].clone());

    // Curated records are pitched as premium content; the bulk path keeps the
    // wider 4.0 floor.
    let rating_floor: f32 = match source {
      CourseSource::Curated => 4.2,
      CourseSource::Bulk => 4.0,
    };

    let (description, description_fr) = match source {
      CourseSource::Curated => (
        format!(
          "Master {} at the {} level through our comprehensive {} course. This module features AI-powered lessons, native speaker audio, interactive exercises, and real-world applications.",
          topic,
          level.code(),
          category.name()
        ),
        format!(
          "Maîtrisez {} au niveau {} grâce à notre cours complet de {}. Ce module propose des leçons alimentées par l'IA, des audios de locuteurs natifs, des exercices interactifs et des applications pratiques.",
          topic,
          level.code(),
          category.name()
        ),
      ),
      CourseSource::Bulk => (
        format!(
          "A comprehensive {} level module designed to master {}. Includes interactive simulations and AI-driven assessments.",
          level.code(),
          topic.to_lowercase()
        ),
        format!("Un module complet de niveau {} pour maîtriser {}.", level.code(), topic),
      ),
    };

    let tags = match source {
      CourseSource::Curated => vec![
        topic.to_string(),
        level.code().to_string(),
        category.name().to_string(),
        "French".to_string(),
        "Interactive".to_string(),
        "AI-Powered".to_string(),
        "Multimedia".to_string(),
      ],
      CourseSource::Bulk => vec![
        topic.to_string(),
        level.code().to_string(),
        taxonomy::difficulty_for(level).label().to_string(),
        "Interactive".to_string(),
      ],
    };

    CourseRecord {
      id,
      title,
      title_fr: taxonomy::french_title(topic),
      level,
      category,
      subcategory: topic.to_string(),
      description,
      description_fr,
      duration: taxonomy::base_duration_min(level) + rng.gen_range(0..30),
      modules: self.generate_modules(rng, topic, level),
      prerequisites: taxonomy::prerequisites(level),
      skills: skills_for(topic),
      rating: rating_floor + rng.gen::<f32>() * (5.0 - rating_floor),
      students_enrolled: 1000 + rng.gen_range(0..50_000),
      completion_rate: 0.65 + rng.gen::<f32>() * 0.3,
      difficulty: taxonomy::difficulty_for(level),
      tags,
      instructor,
      multimedia: multimedia_for(topic),
      certification: level.certifies(),
      xp_reward: taxonomy::base_xp(level) + rng.gen_range(0..100),
      badges: badges_for(level, category),
      source,
    }
  }

  /// Expand a topic into the ordered module list. Module count depends only
  /// on the level; types repeat through the fixed cycle; the last module
  /// carries the terminal assessment.
  fn generate_modules(&self, rng: &mut impl Rng, topic: &str, level: Level) -> Vec<CourseModule> {
    let count = taxonomy::module_count(level);
    let mut modules = Vec::with_capacity(count);

    for i in 0..count {
      let n = i + 1;
      let assessments = if i == count - 1 { vec![generate_assessment(topic)] } else { vec![] };

      modules.push(CourseModule {
        id: format!("mod-{}", n),
        title: format!("Module {}: {} - Part {}", n, topic, n),
        title_fr: format!("Module {}: {} - Partie {}", n, topic, n),
        module_type: MODULE_CYCLE[i % MODULE_CYCLE.len()],
        duration: 15 + rng.gen_range(0..15),
        content: module_content(topic),
        exercises: generate_exercises(topic, EXERCISES_PER_MODULE),
        assessments,
      });
    }

    modules
  }
}

/// Structurally complete, placeholder-quality content block. Also the raw
/// material for the offline lesson fallback in `logic`.
pub(crate) fn module_content(topic: &str) -> ModuleContent {
  ModuleContent {
    theory: format!("Comprehensive explanation of {} concepts and rules.", topic),
    examples: vec![
      Example {
        french: "Je parle français.".into(),
        english: "I speak French.".into(),
        context: "Basic statement".into(),
      },
      Example {
        french: "Nous apprenons ensemble.".into(),
        english: "We learn together.".into(),
        context: "Collaboration".into(),
      },
    ],
    vocabulary: vec![VocabularyItem {
      word: "apprendre".into(),
      translation: "to learn".into(),
      pronunciation: "/a.pʁɑ̃dʁ/".into(),
      part_of_speech: "verb".into(),
      gender: None,
      examples: vec!["J'apprends le français.".into()],
    }],
    grammar: vec![GrammarPoint {
      rule: "Subject-Verb Agreement".into(),
      rule_fr: "Accord Sujet-Verbe".into(),
      explanation: "Verbs must agree with their subjects in person and number.".into(),
      examples: vec![Example {
        french: "Il parle".into(),
        english: "He speaks".into(),
        context: "Third person singular".into(),
      }],
      exceptions: vec!["Collective nouns may take singular or plural".into()],
      practice_prompts: vec!["Complete the sentence with the correct verb form".into()],
    }],
    cultural_notes: vec![
      "In France, formal greetings are important in professional settings.".into(),
    ],
    multimedia: MediaRefs {
      images: vec!["/generated/lesson-image.jpg".into()],
      audio: vec!["/generated/pronunciation.mp3".into()],
      video: None,
    },
  }
}

/// Exercise batch for one module. Types cycle through the fixed list and
/// point values rise linearly with position. Only multiple-choice questions
/// carry options; the generated answer is not validated against them.
pub(crate) fn generate_exercises(topic: &str, count: usize) -> Vec<Exercise> {
  (0..count)
    .map(|i| {
      let n = i + 1;
      let exercise_type = EXERCISE_CYCLE[i % EXERCISE_CYCLE.len()];
      let options = if exercise_type == ExerciseType::MultipleChoice {
        Some(vec![
          "Option A".to_string(),
          "Option B".to_string(),
          "Option C".to_string(),
          "Option D".to_string(),
        ])
      } else {
        None
      };

      Exercise {
        id: format!("ex-{}", n),
        exercise_type,
        question: format!("Exercise {} about {}", n, topic),
        question_fr: format!("Exercice {} sur {}", n, topic),
        options,
        correct_answer: CorrectAnswer::One("Option A".into()),
        explanation: format!("The correct answer demonstrates proper usage of {}.", topic),
        explanation_fr: format!("La bonne réponse démontre l'utilisation correcte de {}.", topic),
        points: (10 + i * 5) as u32,
        hints: vec!["Think about the context".into(), "Review the grammar rule".into()],
      }
    })
    .collect()
}

fn generate_assessment(topic: &str) -> Assessment {
  Assessment {
    id: format!("assess-{}", Uuid::new_v4()),
    kind: AssessmentKind::Comprehensive,
    questions: generate_exercises(topic, ASSESSMENT_QUESTIONS),
    passing_score: ASSESSMENT_PASSING_SCORE,
    time_limit: ASSESSMENT_TIME_LIMIT_MIN,
  }
}

fn skills_for(topic: &str) -> Vec<String> {
  vec![
    "Reading comprehension".into(),
    "Listening skills".into(),
    "Speaking fluency".into(),
    "Writing accuracy".into(),
    "Cultural awareness".into(),
    format!("{} expertise", topic),
  ]
}

fn badges_for(level: Level, category: Category) -> Vec<String> {
  let mut badges =
    vec![format!("{} Achiever", level.code()), format!("{} Expert", category.name())];
  if level == Level::C2 {
    badges.push("Mastery Badge".into());
  }
  badges
}

fn multimedia_for(topic: &str) -> CourseMultimedia {
  CourseMultimedia {
    hero_image: format!("/generated/hero-{}.jpg", slugify(topic)),
    thumbnails: vec!["/generated/thumb-1.jpg".into(), "/generated/thumb-2.jpg".into()],
    intro_video: Some("/generated/intro-video.mp4".into()),
    background_music: Some("/generated/ambient-french.mp3".into()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  fn fixture() -> (CourseGenerator, SmallRng, CourseIdAllocator) {
    (CourseGenerator::with_default_roster(), SmallRng::seed_from_u64(7), CourseIdAllocator::new())
  }

  #[test]
  fn every_level_produces_a_complete_record() {
    let (gen, mut rng, mut ids) = fixture();
    for (i, level) in Level::ALL.into_iter().enumerate() {
      let course =
        gen.generate_course(&mut rng, &mut ids, level, Category::GrammarStructure, i * 31);
      assert_eq!(course.level, level);
      assert!(!course.title.is_empty());
      assert!(!course.title_fr.is_empty());
      assert!(course.duration > 0);
      assert_eq!(course.modules.len(), taxonomy::module_count(level));
      assert!(course.rating >= 4.2 && course.rating <= 5.0, "rating={}", course.rating);
      assert!(course.completion_rate >= 0.65 && course.completion_rate <= 0.95);
      assert!(course.students_enrolled >= 1000);
      assert_eq!(course.prerequisites.len(), 2);
    }
  }

  #[test]
  fn topic_index_wraps_around_the_pool() {
    let (gen, mut rng, mut ids) = fixture();
    let pool_len = taxonomy::topic_pool(Category::BusinessFrench, Level::B1).len();

    let a = gen.generate_course(&mut rng, &mut ids, Level::B1, Category::BusinessFrench, 3);
    let b =
      gen.generate_course(&mut rng, &mut ids, Level::B1, Category::BusinessFrench, 3 + pool_len);
    assert_eq!(a.subcategory, b.subcategory);
  }

  #[test]
  fn module_types_follow_the_fixed_cycle() {
    let (gen, mut rng, mut ids) = fixture();
    let course =
      gen.generate_course(&mut rng, &mut ids, Level::C1, Category::VocabularyExpression, 0);

    for (i, module) in course.modules.iter().enumerate() {
      assert_eq!(module.module_type, MODULE_CYCLE[i % MODULE_CYCLE.len()]);
      assert_eq!(module.exercises.len(), EXERCISES_PER_MODULE);
    }
  }

  #[test]
  fn only_the_last_module_carries_the_assessment() {
    let (gen, mut rng, mut ids) = fixture();
    let course = gen.generate_course(&mut rng, &mut ids, Level::A2, Category::GrammarStructure, 0);

    let (last, rest) = course.modules.split_last().expect("modules");
    assert!(rest.iter().all(|m| m.assessments.is_empty()));
    assert_eq!(last.assessments.len(), 1);
    let assessment = &last.assessments[0];
    assert_eq!(assessment.kind, AssessmentKind::Comprehensive);
    assert_eq!(assessment.questions.len(), ASSESSMENT_QUESTIONS);
    assert_eq!(assessment.passing_score, 70);
    assert_eq!(assessment.time_limit, 30);
  }

  #[test]
  fn certification_follows_the_level_policy() {
    let (gen, mut rng, mut ids) = fixture();
    for level in Level::ALL {
      let course = gen.generate_course(&mut rng, &mut ids, level, Category::BusinessFrench, 0);
      assert_eq!(course.certification, matches!(level, Level::C1 | Level::C2));
    }
  }

  #[test]
  fn exercise_points_rise_linearly_and_only_mc_has_options() {
    let exercises = generate_exercises("Negation Forms", 5);
    for (i, ex) in exercises.iter().enumerate() {
      assert_eq!(ex.points, (10 + i * 5) as u32);
      assert_eq!(
        ex.options.is_some(),
        ex.exercise_type == ExerciseType::MultipleChoice,
        "position {i}"
      );
    }
  }

  #[test]
  fn categories_without_a_pool_fall_back_to_vocabulary_themes() {
    let (gen, mut rng, mut ids) = fixture();
    let course = gen.generate_course(&mut rng, &mut ids, Level::B2, Category::CinemaTheater, 4);
    assert!(taxonomy::vocabulary_themes(Level::B2).contains(&course.subcategory.as_str()));
  }

  #[test]
  fn same_seed_reproduces_the_same_record() {
    let gen = CourseGenerator::with_default_roster();

    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut ids_a = CourseIdAllocator::new();
    let a = gen.generate_course(&mut rng_a, &mut ids_a, Level::B2, Category::CulturalImmersion, 5);

    let mut rng_b = SmallRng::seed_from_u64(42);
    let mut ids_b = CourseIdAllocator::new();
    let b = gen.generate_course(&mut rng_b, &mut ids_b, Level::B2, Category::CulturalImmersion, 5);

    // Assessment ids are uuids, the only non-seeded field; mask them out.
    let mut va = serde_json::to_value(&a).expect("serialize");
    let mut vb = serde_json::to_value(&b).expect("serialize");
    for v in [&mut va, &mut vb] {
      if let Some(modules) = v.get_mut("modules").and_then(|m| m.as_array_mut()) {
        for module in modules {
          if let Some(assessments) = module.get_mut("assessments").and_then(|a| a.as_array_mut()) {
            for assessment in assessments {
              assessment["id"] = serde_json::Value::String("assess".into());
            }
          }
        }
      }
    }
    assert_eq!(va, vb);
  }

  #[test]
  fn bulk_course_draws_from_the_bulk_pools() {
    let (gen, mut rng, mut ids) = fixture();
    let course = gen.generate_bulk_course(&mut rng, &mut ids);

    assert_eq!(course.source, CourseSource::Bulk);
    assert!(taxonomy::BULK_TOPICS.contains(&course.subcategory.as_str()));
    assert!(course.rating >= 4.0 && course.rating <= 5.0);
    assert!(course.title.len() > course.subcategory.len(), "title carries a qualifier");
  }
}
