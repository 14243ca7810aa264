//! `#define` constant extraction and grouping.
//!
//! Only integer-valued defines are considered. Names starting with the
//! scalar marker become flat constants; every other name is split at its
//! first underscore into an enumerated group and a member.

use regex::Regex;
use serde::Serialize;

use crate::csig::is_identifier;
use crate::error::{BindgenError, Result};

/// A flat named integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalarConstant {
    pub name: String,
    pub value: i32,
}

/// One member of an enumerated group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    /// Name with the group prefix and underscore removed.
    pub name: String,
    pub value: i32,
}

/// A closed set of named integers sharing a prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstantGroup {
    /// Text preceding the first underscore.
    pub name: String,
    /// Members in header order. Never empty.
    pub members: Vec<GroupMember>,
}

impl ConstantGroup {
    /// Look up a member value by name.
    pub fn value_of(&self, member: &str) -> Option<i32> {
        self.members.iter().find(|m| m.name == member).map(|m| m.value)
    }
}

/// All constants of one header, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstantSet {
    pub scalars: Vec<ScalarConstant>,
    pub groups: Vec<ConstantGroup>,
}

impl ConstantSet {
    /// Find a group by name.
    pub fn group(&self, name: &str) -> Option<&ConstantGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    fn insert_member(&mut self, group: &str, member: GroupMember) {
        match self.groups.iter_mut().find(|g| g.name == group) {
            Some(existing) => existing.members.push(member),
            None => self.groups.push(ConstantGroup {
                name: group.to_string(),
                members: vec![member],
            }),
        }
    }
}

/// Extract constants from a `#define` header.
///
/// `scalar_marker` is the reserved prefix of flat constants (e.g. `MAX_`).
pub fn parse_constants(source: &str, scalar_marker: &str) -> Result<ConstantSet> {
    let define = Regex::new(
        r"(?m)^[ \t]*#[ \t]*define[ \t]+([A-Za-z_]\w*)[ \t]+(0[xX][0-9A-Fa-f]+|\d+)[uUlL]*[ \t]*(?:/\*.*\*/|//.*)?[ \t]*\r?$",
    )?;

    let mut set = ConstantSet::default();
    for caps in define.captures_iter(source) {
        let name = &caps[1];
        let value = parse_value(name, &caps[2])?;

        if name.starts_with(scalar_marker) {
            set.scalars.push(ScalarConstant {
                name: name.to_string(),
                value,
            });
            continue;
        }

        let (group, member) = name.split_once('_').ok_or_else(|| BindgenError::UngroupedConstant {
            name: name.to_string(),
        })?;
        if group.is_empty() || !is_identifier(member) {
            return Err(BindgenError::InvalidConstant {
                name: name.to_string(),
                detail: format!("'{group}' / '{member}' is not a valid group/member split"),
            });
        }
        set.insert_member(
            group,
            GroupMember {
                name: member.to_string(),
                value,
            },
        );
    }

    log::debug!(
        "parsed {} scalar constants and {} groups",
        set.scalars.len(),
        set.groups.len()
    );
    Ok(set)
}

fn parse_value(name: &str, literal: &str) -> Result<i32> {
    let parsed = match literal.strip_prefix("0x").or_else(|| literal.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => literal.parse::<i64>(),
    };
    parsed
        .ok()
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| BindgenError::InvalidConstant {
            name: name.to_string(),
            detail: format!("value '{literal}' does not fit a 32-bit integer"),
        })
}
