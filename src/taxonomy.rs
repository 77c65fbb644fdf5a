//! Content taxonomy tables: topic pools per level/category, the virtual
//! instructor roster, level policy constants, and the bulk-catalog pools.
//!
//! Pure data with typed accessors. Generation logic lives in `generator`;
//! these tables are the fixed curriculum it draws from.

use crate::domain::{Category, Difficulty, Instructor, Level};

pub const GRAMMAR_TOPICS_A2: &[&str] = &[
  "Present Tense Regular Verbs", "Present Tense Irregular Verbs", "Passé Composé with Avoir",
  "Passé Composé with Être", "Imparfait Introduction", "Near Future (Futur Proche)",
  "Articles and Gender", "Adjective Agreement", "Possessive Adjectives", "Demonstrative Adjectives",
  "Object Pronouns (Direct)", "Object Pronouns (Indirect)", "Negation Forms", "Question Formation",
  "Comparative Adjectives", "Superlative Adjectives", "Prepositions of Place", "Prepositions of Time",
  "Reflexive Verbs Present", "Modal Verbs (Pouvoir, Vouloir, Devoir)",
];

pub const GRAMMAR_TOPICS_B1: &[&str] = &[
  "Imparfait vs Passé Composé", "Plus-que-parfait", "Future Simple", "Conditional Present",
  "Subjunctive Present Introduction", "Relative Pronouns (Qui, Que, Où)", "Relative Pronouns (Dont, Lequel)",
  "Passive Voice", "Direct and Indirect Speech", "Adverbs Formation", "Y and En Pronouns",
  "Double Object Pronouns", "Gerund (Gérondif)", "Present Participle", "Impersonal Expressions",
  "Cause and Consequence", "Concession and Opposition", "Hypothesis with Si (Present)",
  "Time Expressions", "Quantity Expressions",
];

pub const GRAMMAR_TOPICS_B2: &[&str] = &[
  "Subjunctive Present Advanced", "Subjunctive Past", "Conditional Past", "Future Perfect",
  "Past Infinitive", "Compound Relative Pronouns", "Indefinite Pronouns", "Emphatic Pronouns",
  "Hypothesis with Si (Past)", "Reported Speech Advanced", "Passive Voice Advanced",
  "Nominalisation", "Complex Sentence Structure", "Discourse Markers", "Register and Style",
  "Literary Tenses Introduction", "Subjunctive Triggers", "Nuanced Negation",
  "Expressing Certainty and Doubt", "Argumentation Structures",
];

pub const GRAMMAR_TOPICS_C1: &[&str] = &[
  "Passé Simple", "Passé Antérieur", "Subjunctive Imperfect", "Subjunctive Pluperfect",
  "Literary Register", "Formal Written French", "Idiomatic Expressions Advanced",
  "Stylistic Inversion", "Emphatic Structures", "Concessive Clauses", "Hypothetical Clauses Advanced",
  "Nominalization Advanced", "Abstract Noun Usage", "Verbal Periphrases", "Aspectual Distinctions",
  "Discourse Analysis", "Rhetorical Devices", "Academic Writing Conventions",
  "Professional Communication", "Diplomatic Language",
];

pub const GRAMMAR_TOPICS_C2: &[&str] = &[
  "Mastery of All Tenses", "Nuanced Subjunctive Usage", "Literary Analysis Language",
  "Philosophical Discourse", "Legal and Administrative French", "Medical French",
  "Scientific French", "Journalistic Style", "Creative Writing Techniques",
  "Translation Techniques", "Interpretation Skills", "Regional Variations",
  "Historical French", "Etymology and Word Formation", "Neologisms and Language Evolution",
  "Sociolinguistic Awareness", "Pragmatic Competence", "Cross-Cultural Communication",
  "Native-Level Idioms", "Humor and Wordplay",
];

pub const VOCABULARY_THEMES_A2: &[&str] = &[
  "Daily Routines", "Family and Relationships", "Home and Living", "Food and Dining",
  "Shopping and Money", "Weather and Seasons", "Health and Body", "Transportation",
  "Hobbies and Leisure", "Work and Professions", "School and Education", "Clothing and Fashion",
  "Colors and Descriptions", "Numbers and Dates", "Directions and Locations", "Emotions and Feelings",
];

pub const VOCABULARY_THEMES_B1: &[&str] = &[
  "Travel and Tourism", "Media and Technology", "Environment and Nature", "Sports and Fitness",
  "Arts and Culture", "Music and Entertainment", "Current Events", "Social Issues",
  "Personality Traits", "Abstract Concepts", "Professional Vocabulary", "Academic Vocabulary",
  "Idiomatic Expressions", "Colloquial French", "Regional Expressions", "False Friends",
];

pub const VOCABULARY_THEMES_B2: &[&str] = &[
  "Business and Economics", "Politics and Government", "Law and Justice", "Science and Research",
  "Medicine and Health", "Psychology and Behavior", "Philosophy and Ethics", "History and Heritage",
  "Literature and Writing", "Cinema and Theater", "Architecture and Design", "Gastronomy and Wine",
  "Fashion Industry", "Journalism and Media", "Technology and Innovation", "Sustainability",
];

pub const VOCABULARY_THEMES_C1: &[&str] = &[
  "Corporate Communication", "Diplomatic Relations", "Academic Research", "Literary Criticism",
  "Art History", "Political Philosophy", "Economic Theory", "Legal Terminology",
  "Medical Specialties", "Scientific Discourse", "Cultural Analysis", "Social Commentary",
  "Environmental Policy", "International Relations", "Media Analysis", "Linguistic Theory",
];

pub const VOCABULARY_THEMES_C2: &[&str] = &[
  "Philosophical Treatises", "Literary Masterpieces", "Legal Documents", "Scientific Papers",
  "Political Speeches", "Diplomatic Correspondence", "Academic Publications", "Journalistic Excellence",
  "Creative Expression", "Cultural Heritage", "Linguistic Nuance", "Native Expressions",
  "Regional Dialects", "Historical Texts", "Contemporary Discourse", "Professional Mastery",
];

pub const CULTURAL_TOPICS: &[&str] = &[
  "French History Overview", "The French Revolution", "Napoleon and Empire", "World Wars in France",
  "The Fifth Republic", "French Political System", "Regional Cultures", "Paris Through the Ages",
  "French Cuisine History", "Wine Regions of France", "French Cinema Golden Age", "New Wave Cinema",
  "French Literature Classics", "Contemporary French Authors", "French Philosophy", "Existentialism",
  "French Art Movements", "Impressionism", "French Architecture", "Haussmann's Paris",
  "French Fashion History", "Haute Couture", "French Music Evolution", "Chanson Française",
  "French Theater Tradition", "Molière and Comedy", "French Education System", "Grandes Écoles",
  "French Social Customs", "Etiquette and Manners", "French Holidays", "Bastille Day",
  "French Sports Culture", "Tour de France", "French Media Landscape", "Press and Publishing",
  "Francophone World", "French Overseas Territories", "Immigration and Identity", "Modern France",
];

pub const BUSINESS_TOPICS: &[&str] = &[
  "Professional Emails", "Business Meetings", "Negotiations", "Presentations",
  "Networking", "Corporate Culture", "Finance Vocabulary", "Marketing French",
  "Human Resources", "International Trade",
];

pub const CONVERSATION_TOPICS: &[&str] = &[
  "Introductions", "Small Talk", "Opinions", "Debates", "Storytelling",
  "Phone Conversations", "Formal Discussions", "Casual Chat", "Interviews", "Public Speaking",
];

/// How many cultural topics the Cultural Immersion category draws from.
const CULTURAL_POOL_LEN: usize = 20;

pub fn grammar_topics(level: Level) -> &'static [&'static str] {
  match level {
    Level::A2 => GRAMMAR_TOPICS_A2,
    Level::B1 => GRAMMAR_TOPICS_B1,
    Level::B2 => GRAMMAR_TOPICS_B2,
    Level::C1 => GRAMMAR_TOPICS_C1,
    Level::C2 => GRAMMAR_TOPICS_C2,
  }
}

pub fn vocabulary_themes(level: Level) -> &'static [&'static str] {
  match level {
    Level::A2 => VOCABULARY_THEMES_A2,
    Level::B1 => VOCABULARY_THEMES_B1,
    Level::B2 => VOCABULARY_THEMES_B2,
    Level::C1 => VOCABULARY_THEMES_C1,
    Level::C2 => VOCABULARY_THEMES_C2,
  }
}

/// The ordered topic pool for a (category, level) pair. Categories without a
/// dedicated pool fall back to the level's vocabulary themes.
pub fn topic_pool(category: Category, level: Level) -> &'static [&'static str] {
  match category {
    Category::GrammarStructure => grammar_topics(level),
    Category::VocabularyExpression => vocabulary_themes(level),
    Category::CulturalImmersion => &CULTURAL_TOPICS[..CULTURAL_POOL_LEN],
    Category::BusinessFrench => BUSINESS_TOPICS,
    Category::ConversationSpeaking => CONVERSATION_TOPICS,
    _ => vocabulary_themes(level),
  }
}

// -------- Level policy constants --------

pub fn base_duration_min(level: Level) -> u32 {
  match level {
    Level::A2 => 45,
    Level::B1 => 60,
    Level::B2 => 90,
    Level::C1 => 120,
    Level::C2 => 150,
  }
}

pub fn base_xp(level: Level) -> u32 {
  match level {
    Level::A2 => 100,
    Level::B1 => 200,
    Level::B2 => 350,
    Level::C1 => 500,
    Level::C2 => 750,
  }
}

/// Module count is a step function of level alone.
pub fn module_count(level: Level) -> usize {
  match level {
    Level::A2 => 5,
    Level::B1 => 6,
    Level::B2 => 8,
    Level::C1 | Level::C2 => 10,
  }
}

pub fn difficulty_for(level: Level) -> Difficulty {
  match level {
    Level::A2 => Difficulty::Elementary,
    Level::B1 => Difficulty::Intermediate,
    Level::B2 => Difficulty::UpperIntermediate,
    Level::C1 => Difficulty::Advanced,
    Level::C2 => Difficulty::Mastery,
  }
}

/// Entry level gets concrete prerequisites; every other level gates on the
/// previous level's certification.
pub fn prerequisites(level: Level) -> Vec<String> {
  let pair: [&str; 2] = match level {
    Level::A2 => ["Basic alphabet knowledge", "Numbers 1-100"],
    Level::B1 => ["A2 certification or equivalent", "Basic conversation skills"],
    Level::B2 => ["B1 certification or equivalent", "Intermediate grammar"],
    Level::C1 => ["B2 certification or equivalent", "Advanced vocabulary"],
    Level::C2 => ["C1 certification or equivalent", "Near-native comprehension"],
  };
  pair.iter().map(|s| s.to_string()).collect()
}

/// Prompt-facing description of what a level means.
pub fn level_description(level: Level) -> &'static str {
  match level {
    Level::A2 => "elementary level, basic vocabulary, simple sentences",
    Level::B1 => "intermediate level, common expressions, everyday situations",
    Level::B2 => "upper-intermediate level, complex sentences, abstract topics",
    Level::C1 => "advanced level, nuanced expressions, professional contexts",
    Level::C2 => "mastery level, native-like fluency, sophisticated language",
  }
}

/// How the conversation partner should pitch its replies per level.
pub fn conversation_instructions(level: Level) -> &'static str {
  match level {
    Level::A2 => "Use simple vocabulary and short sentences. Correct major errors gently.",
    Level::B1 => "Use everyday expressions. Provide helpful corrections and suggestions.",
    Level::B2 => "Use more complex structures. Offer nuanced feedback on language use.",
    Level::C1 => "Use sophisticated language. Focus on style and register.",
    Level::C2 => "Use native-level French. Discuss nuances and cultural subtleties.",
  }
}

// -------- Instructor roster --------

struct InstructorDef {
  id: &'static str,
  name: &'static str,
  avatar: &'static str,
  specialty: &'static str,
  bio: &'static str,
  voice_style: &'static str,
  personality: &'static str,
}

const INSTRUCTORS: &[InstructorDef] = &[
  InstructorDef {
    id: "prof-marie",
    name: "Professeure Marie Dubois",
    avatar: "/assets/avatars/poster_010.png",
    specialty: "Grammar & Academic French",
    bio: "Former Sorbonne professor with 25 years of teaching experience",
    voice_style: "formal-academic",
    personality: "Precise, encouraging, methodical",
  },
  InstructorDef {
    id: "prof-jean",
    name: "Jean-Pierre Laurent",
    avatar: "/assets/avatars/poster_011.png",
    specialty: "Conversation & Culture",
    bio: "Native Parisian with expertise in cultural immersion",
    voice_style: "native-parisian",
    personality: "Warm, engaging, storyteller",
  },
  InstructorDef {
    id: "prof-claire",
    name: "Claire Moreau",
    avatar: "/assets/avatars/poster_012.png",
    specialty: "Business French",
    bio: "International business consultant and language coach",
    voice_style: "casual-conversational",
    personality: "Professional, dynamic, practical",
  },
  InstructorDef {
    id: "prof-antoine",
    name: "Antoine Beaumont",
    avatar: "/assets/avatars/poster_013.png",
    specialty: "Literature & Writing",
    bio: "Published author and literary critic",
    voice_style: "southern-french",
    personality: "Poetic, inspiring, thoughtful",
  },
  InstructorDef {
    id: "prof-sophie",
    name: "Sophie Tremblay",
    avatar: "/assets/avatars/poster_014.png",
    specialty: "Pronunciation & Phonetics",
    bio: "Speech therapist and accent coach from Quebec",
    voice_style: "canadian-french",
    personality: "Patient, detailed, supportive",
  },
  InstructorDef {
    id: "prof-marc",
    name: "Marc Van den Berg",
    avatar: "/assets/avatars/poster_015.png",
    specialty: "Media & Contemporary French",
    bio: "Journalist and media analyst from Brussels",
    voice_style: "belgian-french",
    personality: "Current, analytical, engaging",
  },
];

/// Materialize the fixed roster of virtual instructor personas.
pub fn instructor_roster() -> Vec<Instructor> {
  INSTRUCTORS
    .iter()
    .map(|d| Instructor {
      id: d.id.into(),
      name: d.name.into(),
      avatar: d.avatar.into(),
      specialty: d.specialty.into(),
      bio: d.bio.into(),
      voice_style: d.voice_style.into(),
      personality: d.personality.into(),
    })
    .collect()
}

// -------- Bulk-catalog pools --------

/// Subject pool for the bulk inflation path. Broader and flatter than the
/// curated per-level pools on purpose.
pub const BULK_TOPICS: &[&str] = &[
  "Business French", "French Literature", "Gastronomy", "History of Art",
  "International Relations", "Science & Technology", "Cinema", "Philosophy",
  "Medical French", "Legal French", "Tourism", "Fashion", "Architecture",
  "Diplomacy", "Enology", "Cybersecurity", "Space Exploration", "Quantum Physics",
  "Existentialism", "Impressionism", "Haute Couture", "Sustainable Energy",
];

pub const BULK_ADJECTIVES: &[&str] = &[
  "Advanced", "Essential", "Comprehensive", "Mastering", "Introduction to",
  "Expert", "Practical", "Contemporary", "Classical", "Intensive",
  "Strategic", "Analytical", "Creative", "Technical", "Professional",
];

/// Catalog category a bulk subject files under.
pub fn bulk_topic_category(topic: &str) -> Category {
  match topic {
    "Business French" => Category::BusinessFrench,
    "French Literature" => Category::ReadingLiterature,
    "Gastronomy" | "Enology" => Category::CuisineGastronomy,
    "History of Art" | "Architecture" | "Impressionism" => Category::ArtHistory,
    "International Relations" | "Diplomacy" => Category::PoliticsSociety,
    "Science & Technology" | "Cybersecurity" | "Space Exploration" | "Quantum Physics"
    | "Sustainable Energy" => Category::ScienceTechnology,
    "Cinema" => Category::CinemaTheater,
    "Philosophy" | "Existentialism" => Category::PhilosophyThought,
    "Medical French" | "Legal French" => Category::AcademicFrench,
    "Tourism" => Category::TravelTourism,
    "Fashion" | "Haute Couture" => Category::FashionLifestyle,
    _ => Category::VocabularyExpression,
  }
}

// -------- French titles --------

const FRENCH_TITLES: &[(&str, &str)] = &[
  ("Present Tense Regular Verbs", "Les Verbes Réguliers au Présent"),
  ("Daily Routines", "Les Routines Quotidiennes"),
  ("French History Overview", "Aperçu de l'Histoire de France"),
  ("Professional Emails", "Les Courriels Professionnels"),
  ("Introductions", "Les Présentations"),
];

/// French display title for a topic. Topics without a curated translation get
/// the generic "… en Français" form.
pub fn french_title(topic: &str) -> String {
  FRENCH_TITLES
    .iter()
    .find(|(en, _)| *en == topic)
    .map(|(_, fr)| (*fr).to_string())
    .unwrap_or_else(|| format!("{} en Français", topic))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_level_has_full_topic_tables() {
    for level in Level::ALL {
      assert_eq!(grammar_topics(level).len(), 20);
      assert_eq!(vocabulary_themes(level).len(), 16);
    }
  }

  #[test]
  fn dedicated_pools_are_wired_to_their_categories() {
    assert_eq!(topic_pool(Category::BusinessFrench, Level::B2), BUSINESS_TOPICS);
    assert_eq!(topic_pool(Category::CulturalImmersion, Level::A2).len(), 20);
    // No dedicated pool: falls back to the level's vocabulary themes.
    assert_eq!(
      topic_pool(Category::CinemaTheater, Level::C1),
      vocabulary_themes(Level::C1)
    );
  }

  #[test]
  fn roster_has_six_distinct_personas() {
    let roster = instructor_roster();
    assert_eq!(roster.len(), 6);
    let mut ids: Vec<_> = roster.iter().map(|i| i.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 6);
  }

  #[test]
  fn every_bulk_topic_has_an_explicit_category() {
    // The fallback arm is for config-supplied subjects; the built-in pool
    // is fully mapped.
    for topic in BULK_TOPICS {
      assert_ne!(bulk_topic_category(topic), Category::VocabularyExpression, "{topic}");
    }
  }

  #[test]
  fn unknown_topic_gets_generic_french_title() {
    assert_eq!(french_title("Daily Routines"), "Les Routines Quotidiennes");
    assert_eq!(french_title("Subjunctive Past"), "Subjunctive Past en Français");
  }
}
