//! Entity classification
//!
//! Maps an entity's metadata identifier (and, for the shared resource
//! object, its animated path) to the place it is tracked in:
//!
//! 1. exact identifier rules ([`rules::EXACT_RULES`])
//! 2. substring / prefix rules ([`rules::PATTERN_RULES`])
//! 3. anything else is not tracked
//!
//! The animated path is only fetched when the identifier is the resource
//! object, so callers pass it lazily.

pub mod rules;

use wisps_types::Category;

use rules::{Action, EXACT_RULES, PATTERN_RULES, WISP_PATHS};

/// Where a classified entity is tracked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Track(Category),
    /// Named encounter with its display label
    Encounter(String),
}

/// Classify an entity. Returns `None` when the entity should not be tracked.
pub fn classify<'a>(
    metadata: &str,
    animated_path: impl FnOnce() -> Option<&'a str>,
) -> Option<Classification> {
    if let Some(action) = EXACT_RULES.get(metadata) {
        return match *action {
            Action::Track(category) => Some(Classification::Track(category)),
            Action::WispByPath => animated_path()
                .and_then(wisp_from_path)
                .map(Classification::Track),
            Action::Encounter(label) => Some(Classification::Encounter(
                label.map_or_else(|| last_segment(metadata).to_string(), str::to_string),
            )),
        };
    }

    PATTERN_RULES
        .iter()
        .find(|(pattern, _)| pattern.matches(metadata))
        .map(|&(_, category)| Classification::Track(category))
}

/// Wisp color for a resource object's animated path
pub fn wisp_from_path(path: &str) -> Option<Category> {
    WISP_PATHS
        .iter()
        .find(|(fragment, _)| path.contains(fragment))
        .map(|&(_, category)| category)
}

/// Text after the last `/` of a metadata path
fn last_segment(metadata: &str) -> &str {
    metadata.rsplit('/').next().unwrap_or(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn no_path() -> Option<&'static str> {
        None
    }

    #[test]
    fn test_simple_categories() {
        let cases = [
            ("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb", Category::LightBomb),
            ("Metadata/MiscellaneousObjects/Azmeri/AzmeriFuelResupply", Category::FuelRefill),
            ("Metadata/MiscellaneousObjects/Azmeri/AzmeriFlaskRefill", Category::Wells),
        ];
        for (metadata, expected) in cases {
            assert_eq!(
                classify(metadata, no_path),
                Some(Classification::Track(expected)),
                "{metadata}"
            );
        }
    }

    #[test]
    fn test_resource_uses_animated_path() {
        let base = "Art/Models/MiscellaneousObjects/League_Azmeri/resources/wisp_doodads";
        let primal = format!("{base}/wisp_primal.ao");
        let warden = format!("{base}/wisp_warden.ao");
        let vodoo = format!("{base}/wisp_vodoo.ao");

        assert_eq!(
            classify(rules::RESOURCE_METADATA, || Some(primal.as_str())),
            Some(Classification::Track(Category::Blue))
        );
        assert_eq!(
            classify(rules::RESOURCE_METADATA, || Some(warden.as_str())),
            Some(Classification::Track(Category::Yellow))
        );
        assert_eq!(
            classify(rules::RESOURCE_METADATA, || Some(vodoo.as_str())),
            Some(Classification::Track(Category::Purple))
        );
    }

    #[test]
    fn test_resource_without_known_path_is_ignored() {
        assert_eq!(
            classify(rules::RESOURCE_METADATA, || Some("Art/Models/wisp_unknown.ao")),
            None
        );
        assert_eq!(classify(rules::RESOURCE_METADATA, no_path), None);
    }

    #[test]
    fn test_path_only_fetched_for_resource() {
        let fetched = Cell::new(false);
        let path = || {
            fetched.set(true);
            Some("wisp_primal")
        };
        let _ = classify("Metadata/MiscellaneousObjects/Azmeri/AzmeriLightBomb", path);
        assert!(!fetched.get());
    }

    #[test]
    fn test_encounter_labels() {
        assert_eq!(
            classify("Metadata/NPC/Ghostrider", no_path),
            Some(Classification::Encounter("Ghostrider".to_string()))
        );
        assert_eq!(
            classify(
                "Metadata/Terrain/Leagues/Harvest/Objects/HarvestPortalToggleableReverseReturn",
                no_path
            ),
            Some(Classification::Encounter("Harvest".to_string()))
        );
        assert_eq!(
            classify("Metadata/MiscellaneousObjects/Azmeri/AzmeriBuffEffigySmall", no_path),
            Some(Classification::Encounter("Buff".to_string()))
        );
    }

    #[test]
    fn test_pattern_rules() {
        assert_eq!(
            classify("Metadata/MiscellaneousObjects/Azmeri/AzmeriSacrificeAltar2", no_path),
            Some(Classification::Track(Category::Altars))
        );
        assert_eq!(
            classify("Metadata/MiscellaneousObjects/Azmeri/AzmeriDustConverter", no_path),
            Some(Classification::Track(Category::DustConverters))
        );
        assert_eq!(
            classify("Metadata/NPC/League/Azmeri/UniqueDealer", no_path),
            Some(Classification::Track(Category::Dealer))
        );
        assert_eq!(
            classify("Metadata/Chests/LeagueAzmeri/Foo", no_path),
            Some(Classification::Track(Category::Chests))
        );
    }

    #[test]
    fn test_chest_rule_requires_prefix() {
        assert_eq!(classify("Metadata/Other/Metadata/Chests/LeagueAzmeri/Foo", no_path), None);
    }

    #[test]
    fn test_unknown_identifier_is_ignored() {
        assert_eq!(classify("Metadata/Monsters/Zombie", no_path), None);
        assert_eq!(classify("", no_path), None);
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("Metadata/NPC/Ghostrider"), "Ghostrider");
        assert_eq!(last_segment("NoSlashes"), "NoSlashes");
    }
}
