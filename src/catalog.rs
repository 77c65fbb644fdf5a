//! Batch catalog assembly and derived statistics.
//!
//! One assembler feeds both catalog sources through a single id allocator:
//! the curated path walks levels × categories × topic indices, and the bulk
//! path inflates the catalog to a target size from the flat bulk pools.
//! Sharing the allocator guarantees id uniqueness across the two paths.
//!
//! Statistics are a pure reduction over the assembled array; regenerating
//! the catalog means recomputing them from scratch.

use std::collections::BTreeMap;

use rand::Rng;
use serde::Serialize;

use crate::config::CatalogPolicy;
use crate::domain::{Category, CourseRecord, CourseSource, Level};
use crate::generator::CourseGenerator;
use crate::taxonomy;

/// Hands out catalog ids from one monotonic counter. The `C`/`B` tag records
/// the producing path; uniqueness comes from the shared counter, not the tag.
#[derive(Debug, Default)]
pub struct CourseIdAllocator {
  next: u64,
}

impl CourseIdAllocator {
  pub fn new() -> Self {
    Self { next: 0 }
  }

  pub fn allocate(&mut self, source: CourseSource) -> String {
    self.next += 1;
    let tag = match source {
      CourseSource::Curated => "C",
      CourseSource::Bulk => "B",
    };
    format!("FR-{}-{:05}", tag, self.next)
  }
}

/// The five categories the on-demand batch endpoint cycles through.
pub const BATCH_CATEGORIES: [Category; 5] = [
  Category::GrammarStructure,
  Category::VocabularyExpression,
  Category::ConversationSpeaking,
  Category::CulturalImmersion,
  Category::BusinessFrench,
];

/// Curated path: every level × every category × up to `topics_per_pair`
/// topics from the pair's pool.
pub fn generate_all_courses(
  gen: &CourseGenerator,
  rng: &mut impl Rng,
  ids: &mut CourseIdAllocator,
  topics_per_pair: usize,
) -> Vec<CourseRecord> {
  let mut courses = Vec::new();
  for level in Level::ALL {
    for category in Category::ALL {
      let pool = taxonomy::topic_pool(category, level);
      for i in 0..pool.len().min(topics_per_pair) {
        courses.push(gen.generate_course(rng, ids, level, category, i));
      }
    }
  }
  courses
}

/// Bulk path: inflate the catalog by `target` records drawn from the flat
/// bulk pools. No deduplication against the curated path; ids stay unique
/// through the shared allocator.
pub fn generate_bulk_courses(
  gen: &CourseGenerator,
  rng: &mut impl Rng,
  ids: &mut CourseIdAllocator,
  target: usize,
) -> Vec<CourseRecord> {
  (0..target).map(|_| gen.generate_bulk_course(rng, ids)).collect()
}

/// Assemble the full catalog: curated first, then bulk inflation.
pub fn assemble_catalog(
  gen: &CourseGenerator,
  rng: &mut impl Rng,
  ids: &mut CourseIdAllocator,
  policy: &CatalogPolicy,
) -> Vec<CourseRecord> {
  let mut catalog = generate_all_courses(gen, rng, ids, policy.topics_per_pair);
  catalog.extend(generate_bulk_courses(gen, rng, ids, policy.bulk_target));
  catalog
}

/// On-demand batch: `count` fresh courses at one level, cycling through the
/// five batch categories with the position doubling as the topic index.
pub fn generate_course_batch(
  gen: &CourseGenerator,
  rng: &mut impl Rng,
  ids: &mut CourseIdAllocator,
  level: Level,
  count: usize,
) -> Vec<CourseRecord> {
  (0..count)
    .map(|i| gen.generate_course(rng, ids, level, BATCH_CATEGORIES[i % BATCH_CATEGORIES.len()], i))
    .collect()
}

/// Aggregate catalog numbers, computed once per assembly.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
  pub total_courses: usize,
  pub courses_by_level: BTreeMap<String, usize>,
  pub courses_by_category: BTreeMap<String, usize>,
  pub total_learning_hours: u64,
  pub total_exercises: u64,
  pub total_students: u64,
}

impl CatalogStats {
  pub fn compute(courses: &[CourseRecord]) -> Self {
    let mut by_level = BTreeMap::new();
    let mut by_category = BTreeMap::new();
    let mut total_minutes: u64 = 0;
    let mut total_exercises: u64 = 0;
    let mut total_students: u64 = 0;

    for course in courses {
      *by_level.entry(course.level.code().to_string()).or_insert(0) += 1;
      *by_category.entry(course.category.name().to_string()).or_insert(0) += 1;
      total_minutes += u64::from(course.duration);
      total_exercises += course.exercise_count() as u64;
      total_students += u64::from(course.students_enrolled);
    }

    Self {
      total_courses: courses.len(),
      courses_by_level: by_level,
      courses_by_category: by_category,
      total_learning_hours: total_minutes / 60,
      total_exercises,
      total_students,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  use crate::domain::CourseSource;

  fn fixture() -> (CourseGenerator, SmallRng, CourseIdAllocator) {
    (CourseGenerator::with_default_roster(), SmallRng::seed_from_u64(11), CourseIdAllocator::new())
  }

  #[test]
  fn a2_batch_of_twelve_has_the_documented_shape() {
    let (gen, mut rng, mut ids) = fixture();
    let batch = generate_course_batch(&gen, &mut rng, &mut ids, Level::A2, 12);

    assert_eq!(batch.len(), 12);
    for course in &batch {
      assert_eq!(course.level, Level::A2);
      assert_eq!(course.modules.len(), 5);
      assert!(!course.certification);
    }
    // 12 courses over 5 categories: the cycle wraps.
    assert_eq!(batch[0].category, batch[5].category);
  }

  #[test]
  fn curated_path_respects_the_per_pair_cap() {
    let (gen, mut rng, mut ids) = fixture();
    let courses = generate_all_courses(&gen, &mut rng, &mut ids, 2);
    // 5 levels × 20 categories × 2 topics.
    assert_eq!(courses.len(), 200);
    assert!(courses.iter().all(|c| c.source == CourseSource::Curated));
  }

  #[test]
  fn ids_stay_unique_across_curated_and_bulk() {
    let (gen, mut rng, mut ids) = fixture();
    let policy = CatalogPolicy { topics_per_pair: 1, bulk_target: 40 };
    let catalog = assemble_catalog(&gen, &mut rng, &mut ids, &policy);

    assert_eq!(catalog.len(), 100 + 40);
    let mut seen: Vec<&str> = catalog.iter().map(|c| c.id.as_str()).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), catalog.len());

    // Ids allocated after assembly keep counting from the same sequence.
    let next = ids.allocate(CourseSource::Curated);
    assert_eq!(next, format!("FR-C-{:05}", catalog.len() + 1));
  }

  #[test]
  fn stats_are_consistent_with_the_catalog() {
    let (gen, mut rng, mut ids) = fixture();
    let policy = CatalogPolicy { topics_per_pair: 3, bulk_target: 25 };
    let catalog = assemble_catalog(&gen, &mut rng, &mut ids, &policy);
    let stats = CatalogStats::compute(&catalog);

    assert_eq!(stats.total_courses, catalog.len());
    assert_eq!(stats.courses_by_level.values().sum::<usize>(), stats.total_courses);
    assert_eq!(stats.courses_by_category.values().sum::<usize>(), stats.total_courses);

    let exercises: u64 = catalog.iter().map(|c| c.exercise_count() as u64).sum();
    assert_eq!(stats.total_exercises, exercises);
    assert!(stats.total_learning_hours > 0);
  }

  #[test]
  fn bulk_records_carry_the_bulk_source_and_rating_floor() {
    let (gen, mut rng, mut ids) = fixture();
    let bulk = generate_bulk_courses(&gen, &mut rng, &mut ids, 30);

    assert_eq!(bulk.len(), 30);
    for course in &bulk {
      assert_eq!(course.source, CourseSource::Bulk);
      assert!(course.rating >= 4.0 && course.rating <= 5.0);
      assert!(course.id.starts_with("FR-B-"));
    }
  }
}
