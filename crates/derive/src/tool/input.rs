use super::field::{Choice, FieldSchemaAttr};
use super::json::{FieldType, JsonType};
use proc_macro::TokenStream;
use quote::quote;
use serde_json::{json, Map, Value};
use syn::{parse_macro_input, DeriveInput, LitStr, Result};

pub(crate) struct InputParser {}

fn field_attr(field: &syn::Field) -> Result<FieldSchemaAttr> {
    let mut merged = FieldSchemaAttr::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("input")) {
        let parsed = attr.parse_args::<FieldSchemaAttr>()?;
        merged.optional |= parsed.optional;
        if parsed.description.is_some() {
            merged.description = parsed.description;
        }
        if parsed.choice.is_some() {
            merged.choice = parsed.choice;
        }
    }
    Ok(merged)
}

fn choice_values(choices: &[Choice], json_type: JsonType) -> Result<Vec<Value>> {
    choices
        .iter()
        .map(|choice| {
            let fits = matches!(
                (choice, json_type),
                (Choice::String(_), JsonType::String)
                    | (Choice::Number(_), JsonType::Integer | JsonType::Number)
            );
            if !fits {
                return Err(syn::Error::new(
                    choice.span(),
                    "Choices must match the field type",
                ));
            }
            choice.to_json()
        })
        .collect()
}

fn build_schema(input: &DeriveInput) -> Result<Value> {
    let syn::Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ToolInput can only be derived for structs",
        ));
    };

    let mut properties = Map::new();
    let mut required = Vec::new();

    if let syn::Fields::Named(fields_named) = &data_struct.fields {
        for field in fields_named.named.iter() {
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            let field_name = ident.to_string();
            let attr = field_attr(field)?;
            let field_type = FieldType::of(&field.ty);

            let mut schema = Map::new();
            schema.insert("type".into(), json!(field_type.json_type));
            if let Some(items) = field_type.items {
                schema.insert("items".into(), json!({ "type": items }));
            }
            if let Some(desc) = &attr.description {
                schema.insert("description".into(), Value::String(desc.value()));
            }
            if let Some(choices) = &attr.choice {
                schema.insert(
                    "enum".into(),
                    Value::Array(choice_values(choices, field_type.json_type)?),
                );
            }

            if !(attr.optional || field_type.nullable) {
                required.push(Value::String(field_name.clone()));
            }
            properties.insert(field_name, Value::Object(schema));
        }
    }

    Ok(json!({
        "type": "object",
        "properties": properties,
        "required": required,
    }))
}

impl InputParser {
    pub fn parse(input: TokenStream) -> TokenStream {
        let input = parse_macro_input!(input as DeriveInput);
        let schema = match build_schema(&input) {
            Ok(schema) => schema,
            Err(err) => return err.to_compile_error().into(),
        };

        let struct_ident = &input.ident;
        let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
        let schema_literal = LitStr::new(&schema.to_string(), struct_ident.span());
        let expanded = quote! {
            impl #impl_generics ToolInputT for #struct_ident #ty_generics #where_clause {
                fn io_schema() -> &'static str {
                    #schema_literal
                }
            }
        };
        TokenStream::from(expanded)
    }
}
