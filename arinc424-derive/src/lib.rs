// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for ARINC 424 record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too. Fields are read one after another; the
//! attributes move the cursor in between.
//!
//! # Example
//!
//! Deriving an implementation on an enroute airway leg:
//!
//! ```ignore
//! #[derive(Record)]
//! #[arinc424(name = "Enroute Airway")]  // Name used in error messages
//! pub struct AirwayLeg<'a> {
//!     pub record_type: RecordType,
//!     #[arinc424(field = 14)]  // Jump to the 1-based column 14
//!     pub route_ident: RouteIdent<'a>,
//!     #[arinc424(skip(7))]  // Skip 7 reserved bytes before this field
//!     pub seq_nr: SeqNr<'a>,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parenthesized, parse_macro_input, Data, DeriveInput, Fields, LitInt, LitStr};

/// How the cursor moves before a field is read.
enum Movement {
    Next,
    Skip(usize),
    Column(usize),
}

fn parse_movement(field: &syn::Field) -> syn::Result<Movement> {
    let mut movement = Movement::Next;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("arinc424")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                // #[arinc424(field = n)]
                let n: LitInt = meta.value()?.parse()?;
                let column = n.base10_parse::<usize>()?;
                if column == 0 {
                    return Err(meta.error("columns are counted from 1"));
                }
                movement = Movement::Column(column);
                Ok(())
            } else if meta.path.is_ident("skip") {
                // #[arinc424(skip(n))]
                let content;
                parenthesized!(content in meta.input);
                let n: LitInt = content.parse()?;
                movement = Movement::Skip(n.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("expected `field = n` or `skip(n)`"))
            }
        })?;
    }

    Ok(movement)
}

fn parse_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = input.ident.to_string();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("arinc424")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let s: LitStr = meta.value()?.parse()?;
                name = s.value();
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name)
}

fn expand(input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;
    let record_name = parse_name(&input)?;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let lifetime = input.generics.lifetimes().next().ok_or_else(|| {
        syn::Error::new_spanned(
            &input.generics,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "Record derive only supports structs",
            ))
        }
    };

    let field_parsers = fields
        .iter()
        .map(|field| {
            let name = field.ident.as_ref();
            let read = match parse_movement(field)? {
                Movement::Next => quote! { fields.next()? },
                Movement::Skip(n) => quote! { fields.skip(#n).next()? },
                Movement::Column(column) => quote! { fields.get(#column)? },
            };
            Ok(quote! { #name: #read })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #ident #ty_generics #where_clause {
            const NAME: &'static str = #record_name;

            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #ident #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    })
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&[u8]>` implementation.
#[proc_macro_derive(Record, attributes(arinc424))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
