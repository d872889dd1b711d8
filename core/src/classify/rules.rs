//! Classification tables
//!
//! Exact identifiers are indexed in a compile-time `phf` map. Identifiers
//! that match by substring or prefix are kept in an ordered list and only
//! consulted when no exact rule applied.

use phf::phf_map;
use wisps_types::Category;

/// Metadata of the shared resource object all three wisp colors use
pub const RESOURCE_METADATA: &str = "Metadata/MiscellaneousObjects/Azmeri/AzmeriResourceBase";

/// What to do with an entity whose identifier matched a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Track in a fixed category
    Track(Category),
    /// Pick the wisp color from the animated object path
    WispByPath,
    /// Named encounter; `None` derives the label from the identifier
    Encounter(Option<&'static str>),
}

/// Exact identifier rules, in priority order: simple categories, the
/// resource object, then named encounters
pub static EXACT_RULES: phf::Map<&'static str, Action> = phf_map! {
    // ─── Simple categories ──────────────────────────────────────────────────
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb" => Action::Track(Category::LightBomb),
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriFuelResupply" => Action::Track(Category::FuelRefill),
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriFlaskRefill" => Action::Track(Category::Wells),

    // ─── Resource ───────────────────────────────────────────────────────────
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriResourceBase" => Action::WispByPath,

    // ─── Named encounters ───────────────────────────────────────────────────
    "Metadata/NPC/Ghostrider" => Action::Encounter(None),
    "Metadata/NPC/League/Azmeri/AzmeriShaman" => Action::Encounter(None),
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriShrine" => Action::Encounter(None),
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriGlyph" => Action::Encounter(None),
    "Metadata/Monsters/LeagueAzmeri/SpiritBoss/Wildwood_Wolf" => Action::Encounter(None),
    "Metadata/Monsters/LeagueAzmeri/SpiritBoss/Wildwood_Stag" => Action::Encounter(None),
    "Metadata/Monsters/LeagueAzmeri/SpiritBoss/Wildwood_Owl" => Action::Encounter(None),
    "Metadata/Terrain/Leagues/Harvest/Objects/HarvestPortalToggleableReverseReturn" => Action::Encounter(Some("Harvest")),
    "Metadata/MiscellaneousObjects/Azmeri/AzmeriBuffEffigySmall" => Action::Encounter(Some("Buff")),
};

/// How a pattern rule compares against an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Contains(&'static str),
    StartsWith(&'static str),
}

impl Pattern {
    pub fn matches(self, metadata: &str) -> bool {
        match self {
            Self::Contains(needle) => metadata.contains(needle),
            Self::StartsWith(prefix) => metadata.starts_with(prefix),
        }
    }
}

/// Ordered pattern rules; first match wins
pub static PATTERN_RULES: &[(Pattern, Category)] = &[
    (Pattern::Contains("AzmeriSacrificeAltar"), Category::Altars),
    (Pattern::Contains("AzmeriDustConverter"), Category::DustConverters),
    (Pattern::Contains("UniqueDealer"), Category::Dealer),
    (Pattern::StartsWith("Metadata/Chests/LeagueAzmeri/"), Category::Chests),
];

/// Animated path fragments of the resource object, checked in order
pub static WISP_PATHS: &[(&str, Category)] = &[
    ("wisp_primal", Category::Blue),
    ("wisp_warden", Category::Yellow),
    ("wisp_vodoo", Category::Purple),
];
