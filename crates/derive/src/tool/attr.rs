use strum::{Display, EnumString};
use syn::{
    parse::{Parse, ParseStream},
    Ident, LitStr, Result, Token, Type,
};

pub(crate) struct ToolAttributes {
    pub(crate) name: LitStr,
    pub(crate) description: LitStr,
    pub(crate) input: Type,
}

#[derive(EnumString, Display)]
pub(crate) enum ToolAttributeKeys {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "input")]
    Input,
    Unknown(String),
}

impl From<&Ident> for ToolAttributeKeys {
    fn from(value: &Ident) -> Self {
        match value.to_string().as_str() {
            "name" => Self::Name,
            "description" => Self::Description,
            "input" => Self::Input,
            other => Self::Unknown(other.to_string()),
        }
    }
}

fn missing(input: ParseStream, key: ToolAttributeKeys) -> syn::Error {
    syn::Error::new(input.span(), format!("Missing attribute: {key}"))
}

fn set_once<T>(slot: &mut Option<T>, value: T, key: &Ident) -> Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            key.span(),
            format!("Duplicate attribute: {key}"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

impl Parse for ToolAttributes {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut name = None;
        let mut description = None;
        let mut args = None;
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ToolAttributeKeys::from(&key) {
                ToolAttributeKeys::Name => {
                    let value = input.parse::<LitStr>()?;
                    if value.value().trim().is_empty() {
                        return Err(syn::Error::new(value.span(), "Tool name must not be empty"));
                    }
                    set_once(&mut name, value, &key)?;
                }
                ToolAttributeKeys::Description => {
                    set_once(&mut description, input.parse::<LitStr>()?, &key)?;
                }
                ToolAttributeKeys::Input => {
                    set_once(&mut args, input.parse::<Type>()?, &key)?;
                }
                ToolAttributeKeys::Unknown(other) => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("Unexpected attribute key: {other}"),
                    ))
                }
            }
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(ToolAttributes {
            name: name.ok_or_else(|| missing(input, ToolAttributeKeys::Name))?,
            description: description
                .ok_or_else(|| missing(input, ToolAttributeKeys::Description))?,
            input: args.ok_or_else(|| missing(input, ToolAttributeKeys::Input))?,
        })
    }
}
