use std::fmt;

use tracing::trace;

use crate::{MemberInfo, ModifierSymbol, Param, Result};

/// One line of the `Constructors:` or `Methods:` section.
///
/// Renders as `[m] return_type name(p: T, q: U) throws E1, E2`. Constructors
/// have no return type, and the `throws` clause is left out entirely when
/// nothing is declared.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberLine {
    pub modifier: ModifierSymbol,
    pub return_type: Option<&'static str>,
    pub name: &'static str,
    pub params: Vec<Param>,
    pub throws: Vec<&'static str>,
}

impl fmt::Display for MemberLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.modifier)?;
        if let Some(return_type) = self.return_type {
            write!(f, "{return_type} ")?;
        }
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", param.name, param.type_name)?;
        }
        f.write_str(")")?;
        if !self.throws.is_empty() {
            write!(f, " throws {}", self.throws.join(", "))?;
        }
        Ok(())
    }
}

pub fn render_member(member: &MemberInfo) -> Result<MemberLine> {
    let modifier = member.modifiers.symbol()?;
    trace!(member = member.name, constructor = member.is_constructor(), "Member rendered");
    Ok(MemberLine {
        modifier,
        return_type: member.return_type,
        name: member.name,
        params: member.params.clone(),
        throws: member.throws.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Modifiers};

    fn render(member: MemberInfo) -> String {
        render_member(&member).unwrap().to_string()
    }

    #[test]
    fn test_constructor_without_params() {
        assert_eq!(render(MemberInfo::constructor("Pet", Modifiers::PUBLIC)), "[+] Pet()");
    }

    #[test]
    fn test_constructor_with_params_and_throws() {
        let ctor = MemberInfo::constructor("new", Modifiers::PUBLIC | Modifiers::STATIC)
            .param("age", "i32")
            .param("name", "String")
            .throws("PetError");
        assert_eq!(render(ctor), "[+] new(age: i32, name: String) throws PetError");
    }

    #[test]
    fn test_method_without_throws_has_no_clause() {
        let line = render(MemberInfo::method("age", "i32", Modifiers::PUBLIC));
        assert_eq!(line, "[+] i32 age()");
        assert!(!line.contains("throws"));
    }

    #[test]
    fn test_method_with_several_throws() {
        let method = MemberInfo::method("load", "()", Modifiers::PRIVATE)
            .param("path", "&Path")
            .throws("io::Error")
            .throws("ParseError");
        assert_eq!(render(method), "[-] () load(path: &Path) throws io::Error, ParseError");
    }

    #[test]
    fn test_static_only_method() {
        let method = MemberInfo::method("count", "usize", Modifiers::STATIC);
        assert_eq!(render(method), "[S] usize count()");
    }

    #[test]
    fn test_unsupported_modifier() {
        let method = MemberInfo::method("poll", "()", Modifiers::ASYNC);
        assert!(matches!(
            render_member(&method),
            Err(Error::UnsupportedModifier(0x100))
        ));
    }
}
