//! Character classification.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};
use zeroize::Zeroize;

/// Bit mask of Unicode classes a character belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Category(u16);

impl Category {
    pub const NONE: Self = Self(0);
    pub const LETTER: Self = Self(1 << 0);
    pub const NUMBER: Self = Self(1 << 1);
    pub const SYMBOL: Self = Self(1 << 2);
    pub const GRAPHIC: Self = Self(1 << 3);
    pub const DIGIT: Self = Self(1 << 4);
    pub const MARK: Self = Self(1 << 5);
    pub const CONTROL: Self = Self(1 << 6);
    pub const LOWER: Self = Self(1 << 7);
    pub const UPPER: Self = Self(1 << 8);
    pub const PRINT: Self = Self(1 << 9);
    pub const PUNCT: Self = Self(1 << 10);
    pub const SPACE: Self = Self(1 << 11);
    pub const TITLE: Self = Self(1 << 12);

    /// Reports whether every bit of `other` is set in `self`.
    #[inline]
    pub fn is(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Category {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Compute the category mask of `c` from its Unicode general category.
pub fn classify(c: char) -> Category {
    use GeneralCategory as Gc;
    use GeneralCategoryGroup as Group;

    let gc = c.general_category();
    let group = c.general_category_group();
    let visible = matches!(
        group,
        Group::Letter | Group::Mark | Group::Number | Group::Punctuation | Group::Symbol
    );

    let mut category = Category::NONE;
    if matches!(group, Group::Letter) {
        category |= Category::LETTER;
    }
    if matches!(group, Group::Number) {
        category |= Category::NUMBER;
    }
    if matches!(group, Group::Symbol) {
        category |= Category::SYMBOL;
    }
    if visible || matches!(gc, Gc::SpaceSeparator) {
        category |= Category::GRAPHIC;
    }
    if matches!(gc, Gc::DecimalNumber) {
        category |= Category::DIGIT;
    }
    if matches!(group, Group::Mark) {
        category |= Category::MARK;
    }
    if matches!(gc, Gc::Control) {
        category |= Category::CONTROL;
    }
    if matches!(gc, Gc::LowercaseLetter) {
        category |= Category::LOWER;
    }
    if matches!(gc, Gc::UppercaseLetter) {
        category |= Category::UPPER;
    }
    // Only the ASCII space counts as printable whitespace.
    if visible || c == ' ' {
        category |= Category::PRINT;
    }
    if matches!(group, Group::Punctuation) {
        category |= Category::PUNCT;
    }
    if c.is_whitespace() {
        category |= Category::SPACE;
    }
    if matches!(gc, Gc::TitlecaseLetter) {
        category |= Category::TITLE;
    }
    category
}

/// A character together with its category mask, computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterClass {
    ch: char,
    category: Category,
}

impl CharacterClass {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            category: classify(ch),
        }
    }

    pub fn char(&self) -> char {
        self.ch
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Reports whether the character carries every bit of `mask`.
    pub fn is(&self, mask: Category) -> bool {
        self.category.is(mask)
    }

    pub fn same_category(&self, other: &Self) -> bool {
        self.category == other.category
    }

    /// Equality after upper-case folding, so `a` and `A` are the same.
    pub fn same_ignoring_case(&self, other: &Self) -> bool {
        self.ch.to_uppercase().eq(other.ch.to_uppercase())
    }
}

impl From<char> for CharacterClass {
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch)
    }
}

impl Zeroize for CharacterClass {
    fn zeroize(&mut self) {
        self.ch.zeroize();
        self.category.0.zeroize();
    }
}
