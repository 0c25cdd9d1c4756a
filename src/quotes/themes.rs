//! Theme catalog for quote generation

use rand::seq::SliceRandom;

/// Topic words a generated quote can be about. Static and read-only, so it
/// is shared freely across requests.
pub const THEMES: &[&str] = &[
    // Achievement & Success
    "success",
    "achievement",
    "excellence",
    "victory",
    "accomplishment",
    // Personal Growth
    "growth",
    "development",
    "improvement",
    "transformation",
    "evolution",
    // Mental Strength
    "perseverance",
    "resilience",
    "determination",
    "persistence",
    "tenacity",
    "grit",
    "endurance",
    "fortitude",
    // Emotional Qualities
    "courage",
    "bravery",
    "confidence",
    "self-belief",
    "inner strength",
    "strength",
    "power",
    "boldness",
    // Vision & Aspiration
    "dreams",
    "ambition",
    "goals",
    "vision",
    "aspiration",
    "purpose",
    "potential",
    "possibilities",
    // Positive Change
    "change",
    "innovation",
    "progress",
    "renewal",
    "reinvention",
    "adaptation",
    "flexibility",
    // Wisdom & Learning
    "wisdom",
    "knowledge",
    "learning",
    "understanding",
    "insight",
    "awareness",
    "enlightenment",
    // Optimism & Hope
    "hope",
    "optimism",
    "positivity",
    "faith",
    "trust",
    "belief",
    // Action & Energy
    "action",
    "momentum",
    "drive",
    "energy",
    "initiative",
    "movement",
    // Creativity & Innovation
    "creativity",
    "imagination",
    "originality",
    "inspiration",
    // Leadership & Influence
    "leadership",
    "influence",
    "impact",
    "legacy",
    "contribution",
    // Balance & Peace
    "balance",
    "harmony",
    "peace",
    "serenity",
    "mindfulness",
    // Overcoming Challenges
    "obstacles",
    "challenges",
    "adversity",
    "struggle",
    "difficulty",
    // Time & Opportunity
    "opportunity",
    "timing",
    "present moment",
    "new beginnings",
    "fresh starts",
    // Passion & Purpose
    "passion",
    "enthusiasm",
    "dedication",
    "commitment",
    "devotion",
];

/// Pick a theme uniformly at random from the catalog.
pub fn pick_theme() -> &'static str {
    let mut rng = rand::thread_rng();
    THEMES
        .choose(&mut rng)
        .copied()
        .expect("theme catalog is never empty")
}
