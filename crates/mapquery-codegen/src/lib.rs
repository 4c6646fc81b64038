// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{
    parse_macro_input, parse_quote, Data, DeriveInput, Field, Fields, LitStr, Token, Visibility,
};

/// Tags and markers collected from one field's helper attributes.
#[derive(Default)]
struct FieldAttrs {
    /// `#[query(key = "...")]`
    key: Option<LitStr>,
    /// `#[query(flatten)]`
    flatten: bool,
    /// `#[serde(rename = "...")]` or `#[serde(rename(serialize = "..."))]`
    rename: Option<LitStr>,
}

impl FieldAttrs {
    /// Whether the field carries a tag that resolves to a key of its own.
    fn is_tagged(&self) -> bool {
        let key = self
            .key
            .as_ref()
            .is_some_and(|k| k.value().split(',').any(|s| !s.is_empty()));
        let rename = self
            .rename
            .as_ref()
            .is_some_and(|r| r.value().split(',').next().is_some_and(|s| !s.is_empty()));
        key || rename
    }
}

/// `#[derive(Record)]` macro: generates the record descriptor and the field
/// walk for encode/decode.
///
/// Only `pub` fields are coded. Field attributes:
/// - `#[query(key = "a,b")]`: encode under `a`, decode from `a` or `b`
/// - `#[query(flatten)]`: merge a nested record's fields into this one
/// - `#[serde(rename = "c")]`: key used when there is no `query` key
///
/// A flattened field that also carries a key is coded as a value too, which
/// requires its type to implement `FieldValue`.
///
/// Example:
/// ```ignore
/// use mapquery::Record;
///
/// #[derive(Default, Record)]
/// struct Filter {
///     #[query(key = "q,query")]
///     pub text: String,
///     #[query(flatten)]
///     pub paging: Option<Paging>,
///     secret: String,        // not coded
/// }
/// ```
#[proc_macro_derive(Record, attributes(query, serde))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let type_name = name.to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(f) => &f.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut generics = input.generics.clone();
    let is_generic = !generics.params.is_empty();

    let mut descriptors = Vec::new();
    let mut encode_fields = Vec::new();
    let mut decode_fields = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let ident_str = field_name.to_string();
        let ty = &field.ty;
        let attrs = parse_field_attrs(field)?;
        let tags = tags_tokens(&attrs);

        if !matches!(field.vis, Visibility::Public(_)) {
            descriptors.push(quote! {
                ::mapquery::FieldDescriptor::internal(#ident_str, #tags)
            });
            continue;
        }

        let tagged = attrs.is_tagged();
        let leaf_kind = quote! { <#ty as ::mapquery::FieldValue>::kind() };

        if attrs.flatten {
            let leaf = if tagged {
                quote! { ::core::option::Option::Some(#leaf_kind) }
            } else {
                quote! { ::core::option::Option::None }
            };
            descriptors.push(quote! {
                ::mapquery::FieldDescriptor::embedded(
                    #ident_str,
                    #tags,
                    <<#ty as ::mapquery::RecordRef>::Target as ::mapquery::Record>::descriptor,
                    #leaf,
                )
            });
            encode_fields.push(quote! {
                ::mapquery::walker::encode_embedded(&fields[#index], &self.#field_name, out)?;
            });
            decode_fields.push(quote! {
                ::mapquery::walker::decode_embedded(&fields[#index], &mut self.#field_name, input)?;
            });
            if is_generic {
                generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(#ty: ::mapquery::RecordMut));
            }
        } else {
            descriptors.push(quote! {
                ::mapquery::FieldDescriptor::leaf(#ident_str, #tags, #leaf_kind)
            });
        }

        if !attrs.flatten || tagged {
            encode_fields.push(quote! {
                ::mapquery::walker::encode_leaf(&fields[#index], &self.#field_name, out)?;
            });
            decode_fields.push(quote! {
                ::mapquery::walker::decode_leaf(&fields[#index], &mut self.#field_name, input)?;
            });
            if is_generic {
                generics
                    .make_where_clause()
                    .predicates
                    .push(parse_quote!(#ty: ::mapquery::FieldValue));
            }
        }
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // A static cache is shared by every instantiation of a generic fn, so
    // generic records rebuild their descriptor on each call.
    let fields_access = if is_generic {
        quote! {
            let descriptor = <Self as ::mapquery::Record>::descriptor();
            let fields = descriptor.fields();
        }
    } else {
        quote! {
            static DESCRIPTOR: ::std::sync::OnceLock<::mapquery::RecordDescriptor> =
                ::std::sync::OnceLock::new();
            let fields = DESCRIPTOR
                .get_or_init(<Self as ::mapquery::Record>::descriptor)
                .fields();
        }
    };

    Ok(quote! {
        impl #impl_generics ::mapquery::Record for #name #ty_generics #where_clause {
            fn descriptor() -> ::mapquery::RecordDescriptor {
                ::mapquery::RecordDescriptor::new(
                    #type_name,
                    ::std::vec![#(#descriptors),*],
                )
            }

            #[allow(unused_variables)]
            fn encode_fields(&self, out: &mut ::mapquery::Multimap) -> ::mapquery::Result<()> {
                #fields_access
                #(#encode_fields)*
                Ok(())
            }

            #[allow(unused_variables)]
            fn decode_fields(&mut self, input: &::mapquery::Multimap) -> ::mapquery::Result<()> {
                #fields_access
                #(#decode_fields)*
                Ok(())
            }
        }

        impl #impl_generics ::mapquery::RecordRef for #name #ty_generics #where_clause {
            type Target = Self;

            fn reach(&self) -> ::core::option::Option<&Self> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::mapquery::RecordMut for #name #ty_generics #where_clause {
            fn reach_mut(&mut self) -> &mut Self {
                self
            }
        }
    })
}

/// `::mapquery::Tags { .. }` literal for a field's attributes.
fn tags_tokens(attrs: &FieldAttrs) -> TokenStream2 {
    let option = |lit: &Option<LitStr>| match lit {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    };
    let primary = option(&attrs.key);
    let secondary = option(&attrs.rename);
    quote! {
        ::mapquery::Tags { primary: #primary, secondary: #secondary }
    }
}

/// Collects `query` and `serde` helper attributes. Unknown `query` items are
/// an error; unrelated `serde` items are skipped.
fn parse_field_attrs(field: &Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();

    for attr in &field.attrs {
        if attr.path().is_ident("query") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    attrs.key = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("flatten") {
                    attrs.flatten = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `key = \"...\"` or `flatten`"))
                }
            })?;
        } else if attr.path().is_ident("serde") {
            attr.parse_nested_meta(|meta| {
                if !meta.path.is_ident("rename") {
                    return skip_meta(&meta);
                }
                if meta.input.peek(Token![=]) {
                    attrs.rename = Some(meta.value()?.parse()?);
                    return Ok(());
                }
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("serialize") {
                        attrs.rename = Some(inner.value()?.parse()?);
                        Ok(())
                    } else {
                        skip_meta(&inner)
                    }
                })
            })?;
        }
    }

    Ok(attrs)
}

/// Consumes `= expr` or `( ... )` after a meta path, if any.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|inner| skip_meta(&inner))?;
    }
    Ok(())
}
