use serde::Serialize;
use strum::{Display, EnumString};
use syn::{GenericArgument, PathArguments, Type};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum JsonType {
    #[strum(serialize = "string")]
    String,
    #[strum(serialize = "integer")]
    Integer,
    #[strum(serialize = "number")]
    Number,
    #[strum(serialize = "boolean")]
    Boolean,
    #[strum(serialize = "object")]
    Object,
    #[strum(serialize = "array")]
    Array,
}

/// A Rust field type as seen by the schema builder.
pub(crate) struct FieldType {
    pub(crate) json_type: JsonType,
    /// Element type for `Vec<T>`
    pub(crate) items: Option<JsonType>,
    /// The type was `Option<T>`
    pub(crate) nullable: bool,
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(path) => path.path.segments.last(),
        Type::Reference(reference) => last_segment(&reference.elem),
        _ => None,
    }
}

fn first_generic(segment: &syn::PathSegment) -> Option<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    }
}

impl JsonType {
    fn from_ident(ident: &str) -> Self {
        match ident {
            "String" | "str" | "char" => JsonType::String,
            "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32" | "u64"
            | "u128" | "usize" => JsonType::Integer,
            "f32" | "f64" => JsonType::Number,
            "bool" => JsonType::Boolean,
            "Vec" | "VecDeque" | "HashSet" | "BTreeSet" => JsonType::Array,
            "HashMap" | "BTreeMap" | "Value" | "Map" => JsonType::Object,
            _ => JsonType::String,
        }
    }
}

impl FieldType {
    pub(crate) fn of(ty: &Type) -> Self {
        let Some(segment) = last_segment(ty) else {
            return FieldType {
                json_type: JsonType::String,
                items: None,
                nullable: false,
            };
        };

        if segment.ident == "Option" {
            if let Some(inner) = first_generic(segment) {
                return FieldType {
                    nullable: true,
                    ..FieldType::of(inner)
                };
            }
        }

        let json_type = JsonType::from_ident(&segment.ident.to_string());
        let items = match json_type {
            JsonType::Array => first_generic(segment).map(|inner| FieldType::of(inner).json_type),
            _ => None,
        };
        FieldType {
            json_type,
            items,
            nullable: false,
        }
    }
}
