extern crate proc_macro;
use proc_macro::TokenStream;
use tool::{input::InputParser, ToolParser};
mod tool;

/// Generates `ToolInputT::io_schema` from a struct's named fields.
///
/// Field options: `#[input(description = "...", choice = ["a", "b"], optional)]`.
/// `Option<T>` fields and fields marked `optional` are left out of `required`.
#[proc_macro_derive(ToolInput, attributes(input))]
pub fn input(input: TokenStream) -> TokenStream {
    InputParser::parse(input)
}

/// Generates the `ToolT` metadata impl and a `Debug` impl for a tool struct:
/// `#[tool(name = "...", description = "...", input = ArgsType)]`.
/// The struct still implements `ToolRuntime` by hand.
#[proc_macro_attribute]
pub fn tool(attr: TokenStream, item: TokenStream) -> TokenStream {
    ToolParser::parse(attr, item)
}
