//! Mapping from parsed C types to the type descriptors the emitter writes.
//!
//! A descriptor is either a fixed primitive token or "pointer to" another
//! descriptor. Named types resolve through the configured record table;
//! anything else is a fatal mapping error because the generator cannot
//! proceed with an incomplete type system.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::csig::CType;
use crate::error::{BindgenError, Result};

/// Target-language type descriptor for one parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TypeDesc {
    Void,
    Char,
    SignedChar,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Float,
    Double,
    /// A record or alias defined in the typed-structure module.
    Record { name: String },
    /// Pointer to another descriptor.
    Pointer { pointee: Box<TypeDesc>, mutable: bool },
}

impl TypeDesc {
    /// Whether this descriptor is void.
    pub fn is_void(&self) -> bool {
        matches!(self, TypeDesc::Void)
    }

    /// Whether this descriptor is a raw pointer.
    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeDesc::Pointer { .. })
    }

    /// The `std::os::raw` / `std::ffi` name of a primitive, if this is one.
    pub fn raw_name(&self) -> Option<&'static str> {
        Some(match self {
            TypeDesc::Char => "c_char",
            TypeDesc::SignedChar => "c_schar",
            TypeDesc::UChar => "c_uchar",
            TypeDesc::Short => "c_short",
            TypeDesc::UShort => "c_ushort",
            TypeDesc::Int => "c_int",
            TypeDesc::UInt => "c_uint",
            TypeDesc::Long => "c_long",
            TypeDesc::ULong => "c_ulong",
            TypeDesc::LongLong => "c_longlong",
            TypeDesc::ULongLong => "c_ulonglong",
            TypeDesc::Float => "c_float",
            TypeDesc::Double => "c_double",
            _ => return None,
        })
    }

    /// Rust spelling of this descriptor.
    ///
    /// `void` only appears behind a pointer (`*mut c_void`) or as a return
    /// type, where the emitter omits it.
    pub fn rust_type(&self) -> String {
        match self {
            TypeDesc::Void => "c_void".to_string(),
            TypeDesc::Record { name } => name.clone(),
            TypeDesc::Pointer { pointee, mutable } => {
                let qualifier = if *mutable { "mut" } else { "const" };
                format!("*{qualifier} {}", pointee.rust_type())
            }
            primitive => primitive.raw_name().unwrap_or("c_void").to_string(),
        }
    }

    /// Collect the raw primitive names this descriptor refers to.
    pub fn collect_raw_names(&self, out: &mut BTreeSet<&'static str>) {
        match self {
            TypeDesc::Void => {
                out.insert("c_void");
            }
            TypeDesc::Record { .. } => {}
            TypeDesc::Pointer { pointee, .. } => pointee.collect_raw_names(out),
            primitive => {
                if let Some(name) = primitive.raw_name() {
                    out.insert(name);
                }
            }
        }
    }
}

/// Convert a C type to its descriptor.
///
/// `records` maps typedef names to the Rust type names of the typed
/// structure module. `function` is only used for error messages.
pub fn type_desc_from_ctype(
    ct: &CType,
    records: &BTreeMap<String, String>,
    function: &str,
) -> Result<TypeDesc> {
    match ct {
        CType::Void => Ok(TypeDesc::Void),
        CType::Char => Ok(TypeDesc::Char),
        CType::SignedChar => Ok(TypeDesc::SignedChar),
        CType::UnsignedChar => Ok(TypeDesc::UChar),
        CType::Short => Ok(TypeDesc::Short),
        CType::UnsignedShort => Ok(TypeDesc::UShort),
        CType::Int => Ok(TypeDesc::Int),
        CType::UnsignedInt => Ok(TypeDesc::UInt),
        CType::Long => Ok(TypeDesc::Long),
        CType::UnsignedLong => Ok(TypeDesc::ULong),
        CType::LongLong => Ok(TypeDesc::LongLong),
        CType::UnsignedLongLong => Ok(TypeDesc::ULongLong),
        CType::Float => Ok(TypeDesc::Float),
        CType::Double => Ok(TypeDesc::Double),
        CType::Pointer(inner) => {
            let mutable = !matches!(inner.as_ref(), CType::Const(_));
            let pointee = type_desc_from_ctype(inner.strip_const(), records, function)?;
            Ok(TypeDesc::Pointer {
                pointee: Box::new(pointee),
                mutable,
            })
        }
        // a const value is passed exactly like a mutable one
        CType::Const(inner) => type_desc_from_ctype(inner, records, function),
        CType::Named(name) | CType::Struct(name) => match records.get(name) {
            Some(rust_name) => Ok(TypeDesc::Record {
                name: rust_name.clone(),
            }),
            None => Err(BindgenError::UnsupportedType {
                function: function.to_string(),
                detail: format!("'{ct}' has no entry in the [records] table"),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> BTreeMap<String, String> {
        BTreeMap::from([("scopedata".to_string(), "ScopeData".to_string())])
    }

    fn map(ct: &CType) -> Result<TypeDesc> {
        type_desc_from_ctype(ct, &records(), "f")
    }

    #[test]
    fn map_primitives() {
        assert_eq!(map(&CType::Int).unwrap().rust_type(), "c_int");
        assert_eq!(map(&CType::Double).unwrap().rust_type(), "c_double");
        assert_eq!(map(&CType::UnsignedChar).unwrap().rust_type(), "c_uchar");
        assert_eq!(map(&CType::UnsignedInt).unwrap().rust_type(), "c_uint");
        assert!(map(&CType::Void).unwrap().is_void());
    }

    #[test]
    fn pointer_depth_is_preserved() {
        for depth in 1..=4 {
            let mut ct = CType::Double;
            for _ in 0..depth {
                ct = CType::Pointer(Box::new(ct));
            }
            let mut desc = map(&ct).unwrap();
            let mut seen = 0;
            while let TypeDesc::Pointer { pointee, .. } = desc {
                seen += 1;
                desc = *pointee;
            }
            assert_eq!(seen, depth);
            assert_eq!(desc, TypeDesc::Double);
        }
    }

    #[test]
    fn pointer_spelling() {
        let ct = CType::Pointer(Box::new(CType::Pointer(Box::new(CType::Char))));
        assert_eq!(map(&ct).unwrap().rust_type(), "*mut *mut c_char");

        let void_ptr = CType::Pointer(Box::new(CType::Void));
        assert_eq!(map(&void_ptr).unwrap().rust_type(), "*mut c_void");
    }

    #[test]
    fn const_pointee_gives_const_pointer() {
        let ct = CType::Pointer(Box::new(CType::Const(Box::new(CType::Char))));
        assert_eq!(map(&ct).unwrap().rust_type(), "*const c_char");
    }

    #[test]
    fn records_resolve_through_table() {
        let desc = map(&CType::Named("scopedata".into())).unwrap();
        assert_eq!(desc.rust_type(), "ScopeData");

        let ptr = CType::Pointer(Box::new(CType::Named("scopedata".into())));
        assert_eq!(map(&ptr).unwrap().rust_type(), "*mut ScopeData");
    }

    #[test]
    fn unknown_named_type_is_fatal() {
        let err = map(&CType::Named("HWND".into())).unwrap_err();
        assert!(matches!(err, BindgenError::UnsupportedType { .. }));
    }

    #[test]
    fn raw_names_collected() {
        let ct = CType::Pointer(Box::new(CType::Void));
        let mut names = BTreeSet::new();
        map(&ct).unwrap().collect_raw_names(&mut names);
        map(&CType::Named("scopedata".into()))
            .unwrap()
            .collect_raw_names(&mut names);
        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["c_void"]);
    }
}
