use std::ops::BitOr;

use crate::{Error, Result};

/// Raw access-flag bitmask attached to every field, constructor and method.
///
/// Only five flags map to a [`ModifierSymbol`]. The remaining ones describe
/// a member (`async fn`, `unsafe fn`, `const fn`) but never show up in a
/// report on their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Modifiers(u32);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const PUBLIC: Modifiers = Modifiers(0x0001);
    pub const PRIVATE: Modifiers = Modifiers(0x0002);
    pub const PROTECTED: Modifiers = Modifiers(0x0004);
    pub const STATIC: Modifiers = Modifiers(0x0008);
    pub const FINAL: Modifiers = Modifiers(0x0010);
    pub const ASYNC: Modifiers = Modifiers(0x0100);
    pub const UNSAFE: Modifiers = Modifiers(0x0200);
    pub const CONST: Modifiers = Modifiers(0x0400);

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(&self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn union(self, other: Modifiers) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag of `other` is set.
    #[inline]
    pub const fn contains(&self, other: Modifiers) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// The symbol this bitmask renders as.
    pub fn symbol(&self) -> Result<ModifierSymbol> {
        ModifierSymbol::try_from(*self)
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Single-character shorthand for one access or storage qualifier.
///
/// Derived from [`Modifiers`] by checking, in order, private, protected,
/// public, final and static. The first flag that is set wins, so a public
/// static method renders as `+`, never as `S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ModifierSymbol {
    Private,
    Protected,
    Public,
    Final,
    Static,
}

impl ModifierSymbol {
    const PRECEDENCE: [(Modifiers, ModifierSymbol); 5] = [
        (Modifiers::PRIVATE, ModifierSymbol::Private),
        (Modifiers::PROTECTED, ModifierSymbol::Protected),
        (Modifiers::PUBLIC, ModifierSymbol::Public),
        (Modifiers::FINAL, ModifierSymbol::Final),
        (Modifiers::STATIC, ModifierSymbol::Static),
    ];

    pub fn as_char(&self) -> char {
        match self {
            ModifierSymbol::Private => '-',
            ModifierSymbol::Protected => '#',
            ModifierSymbol::Public => '+',
            ModifierSymbol::Final => 'F',
            ModifierSymbol::Static => 'S',
        }
    }
}

impl TryFrom<Modifiers> for ModifierSymbol {
    type Error = Error;

    fn try_from(modifiers: Modifiers) -> Result<Self> {
        Self::PRECEDENCE
            .iter()
            .find(|(flag, _)| modifiers.contains(*flag))
            .map(|(_, symbol)| *symbol)
            .ok_or(Error::UnsupportedModifier(modifiers.bits()))
    }
}

impl std::fmt::Display for ModifierSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(m: Modifiers) -> char {
        m.symbol().unwrap().as_char()
    }

    #[test]
    fn test_single_flags() {
        assert_eq!(symbol(Modifiers::PRIVATE), '-');
        assert_eq!(symbol(Modifiers::PROTECTED), '#');
        assert_eq!(symbol(Modifiers::PUBLIC), '+');
        assert_eq!(symbol(Modifiers::FINAL), 'F');
        assert_eq!(symbol(Modifiers::STATIC), 'S');
    }

    #[test]
    fn test_public_static_renders_public() {
        assert_eq!(symbol(Modifiers::PUBLIC | Modifiers::STATIC), '+');
    }

    #[test]
    fn test_private_static_final_renders_private() {
        let m = Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL;
        assert_eq!(symbol(m), '-');
    }

    #[test]
    fn test_final_beats_static() {
        assert_eq!(symbol(Modifiers::STATIC | Modifiers::FINAL), 'F');
    }

    #[test]
    fn test_informational_flags_are_ignored() {
        let m = Modifiers::ASYNC | Modifiers::CONST | Modifiers::PROTECTED;
        assert_eq!(symbol(m), '#');
    }

    #[test]
    fn test_unrecognised_modifiers() {
        for m in [Modifiers::NONE, Modifiers::ASYNC, Modifiers::from_bits(0x8000)] {
            assert!(matches!(
                m.symbol(),
                Err(Error::UnsupportedModifier(bits)) if bits == m.bits()
            ));
        }
    }

    #[test]
    fn test_contains_requires_all_bits() {
        let m = Modifiers::PUBLIC | Modifiers::STATIC;
        assert!(m.contains(Modifiers::STATIC));
        assert!(!m.contains(Modifiers::STATIC | Modifiers::FINAL));
        assert!(!m.contains(Modifiers::NONE));
    }
}
