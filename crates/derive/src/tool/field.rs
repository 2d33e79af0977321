use serde_json::Value;
use strum::{Display, EnumString};
use syn::{
    parse::{Parse, ParseBuffer, ParseStream},
    punctuated::Punctuated,
    Ident, Lit, LitInt, LitStr, Result, Token,
};

pub(crate) enum Choice {
    String(LitStr),
    Number(LitInt),
}

impl Choice {
    pub(crate) fn to_json(&self) -> Result<Value> {
        match self {
            Self::String(s) => Ok(Value::String(s.value())),
            Self::Number(n) => Ok(Value::from(n.base10_parse::<i64>()?)),
        }
    }

    pub(crate) fn span(&self) -> proc_macro2::Span {
        match self {
            Self::String(s) => s.span(),
            Self::Number(n) => n.span(),
        }
    }
}

impl Parse for Choice {
    fn parse(input: ParseStream) -> Result<Self> {
        let lit: Lit = input.parse()?;
        match lit {
            Lit::Str(lit_str) => Ok(Choice::String(lit_str)),
            Lit::Int(lit_int) => Ok(Choice::Number(lit_int)),
            _ => Err(input.error("expected a string literal or an integer literal")),
        }
    }
}

#[derive(Default)]
pub(crate) struct FieldSchemaAttr {
    pub(crate) description: Option<LitStr>,
    pub(crate) choice: Option<Vec<Choice>>,
    pub(crate) optional: bool,
}

#[derive(EnumString, Display)]
pub(crate) enum FieldAttributeKeys {
    #[strum(serialize = "description")]
    Description,
    #[strum(serialize = "choice")]
    Choice,
    #[strum(serialize = "optional")]
    Optional,
    Unknown(String),
}

impl From<&Ident> for FieldAttributeKeys {
    fn from(value: &Ident) -> Self {
        match value.to_string().as_str() {
            "description" => Self::Description,
            "choice" => Self::Choice,
            "optional" => Self::Optional,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl FieldSchemaAttr {
    fn parse_choice(choice: &ParseBuffer) -> Result<Vec<Choice>> {
        let content;
        let _bracket_token = syn::bracketed!(content in choice);
        let choices: Punctuated<Choice, Token![,]> =
            content.parse_terminated(Choice::parse, Token![,])?;
        Ok(choices.into_iter().collect())
    }
}

impl Parse for FieldSchemaAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldSchemaAttr::default();
        while !input.is_empty() {
            let key: Ident = input.parse()?;
            match FieldAttributeKeys::from(&key) {
                // Bare flag, no value
                FieldAttributeKeys::Optional => attr.optional = true,
                FieldAttributeKeys::Description => {
                    input.parse::<Token![=]>()?;
                    attr.description = Some(input.parse()?);
                }
                FieldAttributeKeys::Choice => {
                    input.parse::<Token![=]>()?;
                    let choice = Self::parse_choice(input)?;
                    attr.choice = (!choice.is_empty()).then_some(choice);
                }
                FieldAttributeKeys::Unknown(other) => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("Unexpected field attribute key: {other}"),
                    ))
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }
        Ok(attr)
    }
}
