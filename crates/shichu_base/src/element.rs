//! The five elements (五行) and yin/yang polarity.
//!
//! Generation cycle: Wood → Fire → Earth → Metal → Water → Wood.
//! Control cycle: each element controls the one two steps ahead
//! (Wood → Earth, Fire → Metal, Earth → Water, Metal → Wood, Water → Fire).

use serde::{Deserialize, Serialize};

/// The five elements in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in generation order.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Element from its index (wrapping).
    pub const fn from_index(i: u8) -> Self {
        ALL_ELEMENTS[(i % 5) as usize]
    }

    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Self {
        Self::from_index(self.index() + 4)
    }

    /// The element this one controls.
    pub const fn controls(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The element that controls this one.
    pub const fn controlled_by(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Steps from `self` to `other` along the generation cycle (0..5).
    pub const fn distance_to(self, other: Self) -> u8 {
        (other.index() + 5 - self.index()) % 5
    }
}

/// Yin/yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    pub const fn kanji(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_are_consistent() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.controls().controlled_by(), e);
            assert_ne!(e.generates(), e.controls());
            assert_eq!(e.distance_to(e.generates()), 1);
            assert_eq!(e.distance_to(e.controls()), 2);
            assert_eq!(e.distance_to(e.controlled_by()), 3);
            assert_eq!(e.distance_to(e.generated_by()), 4);
        }
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(Element::Wood.controls(), Element::Earth);
        assert_eq!(Element::Water.controls(), Element::Fire);
        assert_eq!(Element::Metal.generates(), Element::Water);
        assert_eq!(Element::Fire.controlled_by(), Element::Water);
    }
}
