//! Derive macros for the Waitline framework.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - generates helpers for action enums whose variants
//!   are marked `#[command]` or `#[event]`
//!
//! # Example
//!
//! ```ignore
//! use waitline_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum WaitlistAction {
//!     #[command]
//!     AddEntry { name: String, email: String },
//!
//!     #[event]
//!     EntryAdded { id: String, name: String },
//! }
//!
//! // Generated methods:
//! assert!(WaitlistAction::AddEntry { .. }.is_command());
//! assert!(WaitlistAction::EntryAdded { .. }.is_event());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, parse_macro_input};

/// Derive macro for Action enums.
///
/// Generates helper methods for action enums:
/// - `is_command()` - true if this variant is marked `#[command]`
/// - `is_event()` - true if this variant is marked `#[event]`
/// - `event_type()` - the versioned event type name for serialization
///
/// # Panics
///
/// Produces a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - A variant carries both `#[command]` and `#[event]`
#[proc_macro_derive(Action, attributes(command, event))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(input, "#[derive(Action)] can only be used on enums")
            .to_compile_error()
            .into();
    };

    let mut command_variants = Vec::new();
    let mut event_variants = Vec::new();

    for variant in &data_enum.variants {
        let is_command = has_attribute(&variant.attrs, "command");
        let is_event = has_attribute(&variant.attrs, "event");

        if is_command && is_event {
            return syn::Error::new_spanned(
                variant,
                "Variant cannot be both #[command] and #[event]",
            )
            .to_compile_error()
            .into();
        }

        if is_command {
            command_variants.push(variant);
        }

        if is_event {
            event_variants.push(variant);
        }
    }

    let is_command_arms = command_variants.iter().map(|variant| {
        let ident = &variant.ident;
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#ident { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#ident(..) => true, },
            Fields::Unit => quote! { Self::#ident => true, },
        }
    });

    let is_event_arms = event_variants.iter().map(|variant| {
        let ident = &variant.ident;
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#ident { .. } => true, },
            Fields::Unnamed(_) => quote! { Self::#ident(..) => true, },
            Fields::Unit => quote! { Self::#ident => true, },
        }
    });

    let event_type_arms = event_variants.iter().map(|variant| {
        let ident = &variant.ident;
        let type_name = format!("{ident}.v1");
        match &variant.fields {
            Fields::Named(_) => quote! { Self::#ident { .. } => #type_name, },
            Fields::Unnamed(_) => quote! { Self::#ident(..) => #type_name, },
            Fields::Unit => quote! { Self::#ident => #type_name, },
        }
    });

    let expanded = quote! {
        impl #name {
            /// Returns true if this action is a command
            #[must_use]
            pub const fn is_command(&self) -> bool {
                match self {
                    #(#is_command_arms)*
                    _ => false,
                }
            }

            /// Returns true if this action is an event
            #[must_use]
            pub const fn is_event(&self) -> bool {
                match self {
                    #(#is_event_arms)*
                    _ => false,
                }
            }

            /// Returns the event type name for serialization.
            ///
            /// Only events have type names. Commands return "unknown".
            #[must_use]
            pub const fn event_type(&self) -> &'static str {
                match self {
                    #(#event_type_arms)*
                    _ => "unknown",
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Checks whether an attribute list contains a specific marker attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
