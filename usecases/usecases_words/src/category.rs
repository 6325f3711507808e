//! Word Categories
//!
//! Every number word belongs to exactly one [`Category`]. The parser tracks
//! which categories may come next as a [`CategorySet`].

bitflags::bitflags! {
    /// Set of word categories
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u16 {
        const MINUS     = 0b00_0000_0001;
        const ZERO      = 0b00_0000_0010;
        const UNIT      = 0b00_0000_0100;
        const TEEN      = 0b00_0000_1000;
        const TEN       = 0b00_0001_0000;
        const HUNDRED   = 0b00_0010_0000;
        const THOUSAND  = 0b00_0100_0000;
        const ILLION    = 0b00_1000_0000;
        const POINT     = 0b01_0000_0000;
        const CONNECTOR = 0b10_0000_0000;
    }
}

/// Grammatical role of a number word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// "minus", "menos"
    Minus,
    /// "zero", "cero"
    Zero,
    /// One to nine
    Unit,
    /// Complete two-digit words: "eleven", "dieciséis", "veintitrés"
    Teen,
    /// Multiples of ten that may take a unit: "twenty", "treinta"
    Ten,
    /// "hundred", "ciento", "doscientos"
    Hundred,
    /// "thousand", "mil"
    Thousand,
    /// "million", "millones" and every larger scale word
    Illion,
    /// "point", "punto"
    Point,
    /// The English hyphen and the Spanish "y"
    Connector,
}

impl Category {
    /// The single-element set for this category
    pub fn flag(self) -> CategorySet {
        match self {
            Category::Minus => CategorySet::MINUS,
            Category::Zero => CategorySet::ZERO,
            Category::Unit => CategorySet::UNIT,
            Category::Teen => CategorySet::TEEN,
            Category::Ten => CategorySet::TEN,
            Category::Hundred => CategorySet::HUNDRED,
            Category::Thousand => CategorySet::THOUSAND,
            Category::Illion => CategorySet::ILLION,
            Category::Point => CategorySet::POINT,
            Category::Connector => CategorySet::CONNECTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_distinct() {
        let all = [
            Category::Minus,
            Category::Zero,
            Category::Unit,
            Category::Teen,
            Category::Ten,
            Category::Hundred,
            Category::Thousand,
            Category::Illion,
            Category::Point,
            Category::Connector,
        ];
        let union = all.iter().fold(CategorySet::empty(), |set, c| set | c.flag());
        assert_eq!(union, CategorySet::all());
        assert_eq!(union.bits().count_ones() as usize, all.len());
    }
}
