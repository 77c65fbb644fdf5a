//! Application state: the in-memory catalog, derived statistics, the seeded
//! generator, prompts, and the optional OpenAI client.
//!
//! This module owns:
//!   - the full course catalog, assembled once at startup
//!   - catalog statistics (recomputed only when the catalog is rebuilt)
//!   - the pronunciation drill bank
//!   - the generator plus its RNG/id-allocator state for on-demand batches
//!   - the prompts struct (from TOML or defaults)
//!   - optional OpenAI client
//!
//! CATALOG_SEED (u64) pins the RNG for reproducible catalogs; without it the
//! generator seeds from entropy.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

use crate::catalog::{self, CatalogStats, CourseIdAllocator};
use crate::config::{load_app_config_from_env, Prompts};
use crate::domain::{Category, CourseRecord, DrillDifficulty, Level, PronunciationWord};
use crate::generator::CourseGenerator;
use crate::openai::OpenAI;
use crate::seeds::seed_pronunciation_words;

/// RNG and id allocator for generation after startup. One lock for both so a
/// batch draws ids and randomness atomically.
pub struct GenState {
    pub rng: SmallRng,
    pub ids: CourseIdAllocator,
}

pub struct AppState {
    pub catalog: Vec<CourseRecord>,
    pub stats: CatalogStats,
    pub words: Vec<PronunciationWord>,
    pub generator: CourseGenerator,
    pub gen_state: Mutex<GenState>,
    pub prompts: Prompts,
    pub openai: Option<OpenAI>,
}

impl AppState {
    /// Build state from env: load config, assemble the catalog, compute
    /// stats, init OpenAI.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        // Load TOML config if provided (prompts + catalog policy).
        let cfg = load_app_config_from_env().unwrap_or_default();
        let prompts = cfg.prompts.clone();

        let mut rng = match std::env::var("CATALOG_SEED").ok().and_then(|s| s.parse::<u64>().ok())
        {
            Some(seed) => {
                info!(target: "catalog", seed, "Seeding catalog RNG from CATALOG_SEED");
                SmallRng::seed_from_u64(seed)
            }
            None => SmallRng::from_entropy(),
        };

        let generator = CourseGenerator::with_default_roster();
        let mut ids = CourseIdAllocator::new();
        let catalog = catalog::assemble_catalog(&generator, &mut rng, &mut ids, &cfg.catalog);
        let stats = CatalogStats::compute(&catalog);

        // Startup inventory summary.
        for (level, count) in &stats.courses_by_level {
            info!(target: "catalog", %level, count, "Startup catalog inventory");
        }
        info!(
            target: "catalog",
            total = stats.total_courses,
            hours = stats.total_learning_hours,
            exercises = stats.total_exercises,
            "Catalog assembled"
        );

        // Build optional OpenAI client (if API key present).
        let openai = OpenAI::from_env();
        if let Some(oa) = &openai {
            info!(target: "prize2pride_backend", base_url = %oa.base_url, fast_model = %oa.fast_model, strong_model = %oa.strong_model, image_model = %oa.image_model, tts_model = %oa.tts_model, "OpenAI enabled.");
        } else {
            info!(target: "prize2pride_backend", "OpenAI disabled (no OPENAI_API_KEY). Using local fallbacks.");
        }

        Self {
            catalog,
            stats,
            words: seed_pronunciation_words(),
            generator,
            gen_state: Mutex::new(GenState { rng, ids }),
            prompts,
            openai,
        }
    }

    /// One fresh course, outside the startup catalog.
    #[instrument(level = "debug", skip(self), fields(level = %level.code(), category = %category.name(), topic_index))]
    pub async fn generate_one(
        &self,
        level: Level,
        category: Category,
        topic_index: usize,
    ) -> CourseRecord {
        let mut guard = self.gen_state.lock().await;
        let GenState { rng, ids } = &mut *guard;
        self.generator.generate_course(rng, ids, level, category, topic_index)
    }

    /// A fresh batch at one level, cycling the batch categories.
    #[instrument(level = "debug", skip(self), fields(level = %level.code(), count))]
    pub async fn generate_batch(&self, level: Level, count: usize) -> Vec<CourseRecord> {
        let mut guard = self.gen_state.lock().await;
        let GenState { rng, ids } = &mut *guard;
        catalog::generate_course_batch(&self.generator, rng, ids, level, count)
    }

    /// Filtered, paginated view over the startup catalog. Unrecognized
    /// filter strings were already dropped by the caller.
    pub fn catalog_slice(
        &self,
        level: Option<Level>,
        category: Option<Category>,
        offset: usize,
        limit: usize,
    ) -> (usize, Vec<CourseRecord>) {
        let matches: Vec<&CourseRecord> = self
            .catalog
            .iter()
            .filter(|c| level.map_or(true, |l| c.level == l))
            .filter(|c| category.map_or(true, |cat| c.category == cat))
            .collect();

        let total = matches.len();
        let page = matches.into_iter().skip(offset).take(limit).cloned().collect();
        (total, page)
    }

    /// Drill words, optionally narrowed to one difficulty.
    pub fn words_filtered(&self, difficulty: Option<DrillDifficulty>) -> Vec<PronunciationWord> {
        self.words
            .iter()
            .filter(|w| difficulty.map_or(true, |d| w.difficulty == d))
            .cloned()
            .collect()
    }
}

/// Parse a level code from a query/body, defaulting to B1 with a warning.
/// Generation accepts any input; bad level strings degrade, they don't fail.
pub fn parse_level_or_default(raw: Option<&str>) -> Level {
    match raw {
        None => Level::B1,
        Some(code) => Level::from_code(code).unwrap_or_else(|| {
            warn!(target: "prize2pride_backend", %code, "Unknown level code, defaulting to B1");
            Level::B1
        }),
    }
}

/// Parse a category name, defaulting to Vocabulary & Expression (the default
/// topic pool) with a warning.
pub fn parse_category_or_default(raw: Option<&str>) -> Category {
    match raw {
        None => Category::VocabularyExpression,
        Some(name) => Category::from_name(name).unwrap_or_else(|| {
            warn!(target: "prize2pride_backend", %name, "Unknown category, defaulting to Vocabulary & Expression");
            Category::VocabularyExpression
        }),
    }
}
