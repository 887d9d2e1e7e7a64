//! autolog-macros - Derive macro for auto-logged input classes
//!
//! This crate provides:
//! - `#[derive(AutoLog)]` - Generate the `<Name>AutoLogged` wrapper for a struct
//! - `#[auto_log(skip)]` - Leave a field out of the generated methods
//! - `#[auto_log(crate = "path")]` - Point generated code at a re-exported runtime
//!
//! Field classification, log keys and diagnostics come from `autolog-core`;
//! this crate only renders the resulting unit as Rust tokens.

use autolog_core::parse::describe_derive_input;
use autolog_core::{CodecTag, CopyMode, Diagnostic, GeneratedUnit, Statement, process_class};
use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{DeriveInput, parse_macro_input};

/// Options for the AutoLog derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(auto_log))]
struct AutoLogOpts {
    ident: syn::Ident,
    vis: syn::Visibility,

    /// Path of the runtime crate (defaults to `::autolog`)
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

/// Derive macro for auto-logged inputs
///
/// Generates `<Name>AutoLogged`, a wrapper that dereferences to the annotated
/// struct and implements `LoggableInputs` and `Clone`. Every field with a
/// loggable type is written under its capitalized camelCase name.
///
/// The annotated struct must have named fields, no generic parameters and a
/// `Default` implementation. Fields with unsupported types are left out and
/// listed in `<Name>AutoLogged::DIAGNOSTICS`.
///
/// # Example
///
/// ```ignore
/// #[derive(Default, AutoLog)]
/// pub struct Arm {
///     pub angle_rad: f64,
///     pub current_amps: Vec<f64>,
///     #[auto_log(skip)]
///     pub scratch: Vec<String>,
/// }
///
/// let mut inputs = ArmAutoLogged::default();
/// inputs.angle_rad = 1.5;
/// inputs.to_log(&mut table); // writes "AngleRad" and "CurrentAmps"
/// ```
#[proc_macro_derive(AutoLog, attributes(auto_log))]
pub fn derive_auto_log(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input))
}

/// Expand a derive input into the generated wrapper, or into compile errors.
fn expand(input: &DeriveInput) -> TokenStream2 {
    let opts = match AutoLogOpts::from_derive_input(input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors(),
    };

    let class = match describe_derive_input(input, "") {
        Ok(class) => class,
        Err(e) => return e.write_errors(),
    };

    let outcome = process_class(&class);

    let Some(unit) = outcome.unit else {
        let errors = outcome
            .diagnostics
            .iter()
            .filter(|d| d.is_error())
            .map(|d| syn::Error::new(opts.ident.span(), &d.message).to_compile_error());
        return quote! { #(#errors)* };
    };

    let krate = opts
        .krate
        .clone()
        .unwrap_or_else(|| syn::parse_quote!(::autolog));

    match render(&opts, &krate, &unit, &outcome.diagnostics) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

/// Render a generated unit as the wrapper struct and its impls.
fn render(
    opts: &AutoLogOpts,
    krate: &syn::Path,
    unit: &GeneratedUnit,
    diagnostics: &[Diagnostic],
) -> syn::Result<TokenStream2> {
    let base = &opts.ident;
    let vis = &opts.vis;
    let name = syn::Ident::new(unit.name(), base.span());

    let to_log = unit
        .to_log()
        .iter()
        .map(render_statement)
        .collect::<syn::Result<Vec<_>>>()?;
    let from_log = unit
        .from_log()
        .iter()
        .map(render_statement)
        .collect::<syn::Result<Vec<_>>>()?;
    let clone = unit
        .clone_body()
        .iter()
        .map(render_statement)
        .collect::<syn::Result<Vec<_>>>()?;

    let messages = diagnostics.iter().map(ToString::to_string);
    let doc = format!("Auto-logged wrapper around [`{base}`].");

    Ok(quote! {
        #[doc = #doc]
        #vis struct #name(pub #base);

        #[automatically_derived]
        impl #name {
            /// Fields left out of logging, one message per field.
            pub const DIAGNOSTICS: &'static [&'static str] = &[#(#messages),*];

            /// Unwrap the logged inputs.
            pub fn into_inner(self) -> #base {
                self.0
            }
        }

        #[automatically_derived]
        impl ::core::ops::Deref for #name {
            type Target = #base;

            fn deref(&self) -> &#base {
                &self.0
            }
        }

        #[automatically_derived]
        impl ::core::ops::DerefMut for #name {
            fn deref_mut(&mut self) -> &mut #base {
                &mut self.0
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#base> for #name {
            fn from(inputs: #base) -> Self {
                Self(inputs)
            }
        }

        #[automatically_derived]
        impl ::core::default::Default for #name {
            fn default() -> Self {
                Self(<#base as ::core::default::Default>::default())
            }
        }

        #[automatically_derived]
        #[allow(unused_variables)]
        impl #krate::LoggableInputs for #name {
            fn to_log(&self, table: &mut #krate::LogTable) {
                let inputs = &self.0;
                #(#to_log)*
            }

            fn from_log(&mut self, table: &#krate::LogTable) {
                let inputs = &mut self.0;
                #(#from_log)*
            }
        }

        #[automatically_derived]
        #[allow(unused_variables)]
        impl ::core::clone::Clone for #name {
            fn clone(&self) -> Self {
                let source = &self.0;
                let mut copy = Self(<#base as ::core::default::Default>::default());
                {
                    let target = &mut copy.0;
                    #(#clone)*
                }
                copy
            }
        }
    })
}

fn render_statement(statement: &Statement) -> syn::Result<TokenStream2> {
    let member = member_ident(&statement.field().member)?;

    let tokens = match statement {
        Statement::Put { key, tag, .. } => {
            let value = borrowed_value(*tag, &member);
            quote! { table.put(#key, #value); }
        }
        Statement::Get { key, tag, .. } => {
            let getter = format_ident!("get_{}", to_snake_case(tag.accessor()));
            let current = borrowed_value(*tag, &member);
            quote! { inputs.#member = table.#getter(#key, #current); }
        }
        Statement::Copy { tag, mode, .. } => match (mode, tag) {
            (CopyMode::Contents, _) => quote! { target.#member = source.#member.to_vec(); },
            (CopyMode::Value, CodecTag::Text) => {
                quote! { target.#member = ::core::clone::Clone::clone(&source.#member); }
            }
            (CopyMode::Value, _) => quote! { target.#member = source.#member; },
        },
    };

    Ok(tokens)
}

/// Field value in the form the table accepts: scalars by value, text and lists by slice.
fn borrowed_value(tag: CodecTag, member: &syn::Ident) -> TokenStream2 {
    match tag {
        CodecTag::Text => quote! { inputs.#member.as_str() },
        tag if tag.is_list() => quote! { inputs.#member.as_slice() },
        _ => quote! { inputs.#member },
    }
}

/// Parse a member name back into an identifier; `r#` prefixes are kept.
fn member_ident(member: &str) -> syn::Result<syn::Ident> {
    syn::parse_str::<syn::Ident>(member)
        .map_err(|e| syn::Error::new(Span::call_site(), format!("invalid field `{member}`: {e}")))
}

/// Convert a PascalCase accessor stem to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
