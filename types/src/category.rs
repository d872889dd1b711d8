use serde::{Deserialize, Serialize};

/// A tracked object category.
///
/// Every tracked entity belongs to exactly one category for as long as it is
/// tracked. Named encounters are kept separately and are not a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Yellow wisp (warden)
    Yellow,
    /// Purple wisp (vodoo)
    Purple,
    /// Blue wisp (primal)
    Blue,
    LightBomb,
    /// Flask refill well
    Wells,
    FuelRefill,
    Altars,
    DustConverters,
    Dealer,
    Chests,
}

impl Category {
    pub const COUNT: usize = 10;

    /// All categories in render order
    pub const ALL: [Category; Self::COUNT] = [
        Category::Yellow,
        Category::Purple,
        Category::Blue,
        Category::LightBomb,
        Category::Wells,
        Category::FuelRefill,
        Category::Altars,
        Category::DustConverters,
        Category::Dealer,
        Category::Chests,
    ];

    /// Stable index into per-category arrays
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, used in logs and settings UIs
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Yellow => "Yellow Wisp",
            Self::Purple => "Purple Wisp",
            Self::Blue => "Blue Wisp",
            Self::LightBomb => "Light Bomb",
            Self::Wells => "Well",
            Self::FuelRefill => "Fuel Refill",
            Self::Altars => "Altar",
            Self::DustConverters => "Dust Converter",
            Self::Dealer => "Dealer",
            Self::Chests => "Chest",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_serde_names_are_snake_case() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            category: Category,
        }

        let text = toml::to_string(&Wrapper {
            category: Category::DustConverters,
        })
        .unwrap();
        assert_eq!(text.trim(), r#"category = "dust_converters""#);

        let parsed: Wrapper = toml::from_str(r#"category = "light_bomb""#).unwrap();
        assert_eq!(parsed.category, Category::LightBomb);
    }
}
