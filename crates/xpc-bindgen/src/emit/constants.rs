use super::{escape_ident, Writer};
use crate::consts::{ConstantGroup, ConstantSet};

pub(super) fn emit_constants(w: &mut Writer, constants: &ConstantSet) {
    if !constants.scalars.is_empty() {
        w.blank();
        for scalar in &constants.scalars {
            w.line(format!("pub const {}: i32 = {};", scalar.name, scalar.value));
        }
    }
    for group in &constants.groups {
        w.blank();
        emit_group(w, group);
    }
}

/// One `#[repr(i32)]` enum per group.
///
/// A member repeating an earlier member's value cannot be a second
/// discriminant; it becomes an associated constant aliasing the first.
fn emit_group(w: &mut Writer, group: &ConstantGroup) {
    let mut variants: Vec<(String, i32)> = Vec::new();
    let mut aliases: Vec<(String, String)> = Vec::new();
    for member in &group.members {
        let ident = escape_ident(&member.name, &[]);
        match variants.iter().find(|(_, value)| *value == member.value) {
            Some((first, _)) => aliases.push((ident, first.clone())),
            None => variants.push((ident, member.value)),
        }
    }

    let name = &group.name;
    w.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
    w.line("#[repr(i32)]");
    w.line(format!("pub enum {name} {{"));
    for (variant, value) in &variants {
        w.indented(1, format!("{variant} = {value},"));
    }
    w.line("}");

    if !aliases.is_empty() {
        w.blank();
        w.line(format!("impl {name} {{"));
        for (alias, target) in &aliases {
            w.indented(1, format!("pub const {alias}: Self = Self::{target};"));
        }
        w.line("}");
    }

    w.blank();
    w.line(format!("impl TryFrom<i32> for {name} {{"));
    w.indented(1, "type Error = XpcError;");
    w.blank();
    w.indented(1, "fn try_from(value: i32) -> Result<Self> {");
    w.indented(2, "match value {");
    for (variant, value) in &variants {
        w.indented(3, format!("{value} => Ok(Self::{variant}),"));
    }
    w.indented(3, "_ => Err(XpcError::UnknownValue {");
    w.indented(4, format!("group: \"{name}\","));
    w.indented(4, "value,");
    w.indented(3, "}),");
    w.indented(2, "}");
    w.indented(1, "}");
    w.line("}");

    w.blank();
    w.line(format!("impl From<{name}> for i32 {{"));
    w.indented(1, format!("fn from(value: {name}) -> Self {{"));
    w.indented(2, "value as i32");
    w.indented(1, "}");
    w.line("}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::parse_constants;

    fn emit(src: &str) -> String {
        let set = parse_constants(src, "MAX_").unwrap();
        let mut w = Writer::default();
        emit_constants(&mut w, &set);
        w.finish()
    }

    #[test]
    fn scalar_constant() {
        let out = emit("#define MAX_SCOPES 30\n");
        assert!(out.contains("pub const MAX_SCOPES: i32 = 30;"));
    }

    #[test]
    fn group_becomes_enum() {
        let out = emit("#define SCTYPE_NONE 0\n#define SCTYPE_HOST 1\n");
        assert!(out.contains("pub enum SCTYPE {\n    NONE = 0,\n    HOST = 1,\n}"));
        assert!(out.contains("impl TryFrom<i32> for SCTYPE"));
        assert!(out.contains("1 => Ok(Self::HOST),"));
        assert!(out.contains("group: \"SCTYPE\","));
        assert!(out.contains("impl From<SCTYPE> for i32"));
    }

    #[test]
    fn duplicate_value_becomes_alias() {
        let out = emit("#define SCST_INTERRUPTED 3\n#define SCST_FINISHED 3\n");
        assert!(out.contains("    INTERRUPTED = 3,\n}"));
        assert!(!out.contains("FINISHED = 3"));
        assert!(out.contains("pub const FINISHED: Self = Self::INTERRUPTED;"));
    }
}
