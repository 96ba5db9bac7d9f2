//! Reflect derive macro implementation
//!
//! This module contains the implementation of the Reflect derive macro,
//! which describes a type's shape for the struct-record runtime.

use darling::util::Ignored;
use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput};

use crate::utils::{field_member, field_name, is_exported, parse_tags};

/// Receiver for the type that derives Reflect
#[derive(Debug, FromDeriveInput)]
#[darling(supports(struct_any, enum_any))]
pub struct ReflectReceiver {
    /// The type identifier
    pub ident: syn::Ident,
    /// Generics of the type
    pub generics: syn::Generics,
    /// The type data; only struct fields are inspected
    pub data: ast::Data<Ignored, ReflectFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(forward_attrs(tag))]
pub struct ReflectFieldReceiver {
    /// The field identifier, `None` for tuple fields
    pub ident: Option<syn::Ident>,
    /// The field type
    pub ty: syn::Type,
    /// The field visibility
    pub vis: syn::Visibility,
    /// Forwarded `#[tag(...)]` attributes
    pub attrs: Vec<syn::Attribute>,
}

impl ReflectFieldReceiver {
    /// Exported and named
    fn is_visible(&self) -> bool {
        self.ident.is_some() && is_exported(&self.vis)
    }
}

/// Process the Reflect derive macro
pub fn process_derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand_derive_reflect(&input))
}

/// Expand the derive, turning every failure into a compile error
pub fn expand_derive_reflect(input: &DeriveInput) -> TokenStream2 {
    // darling cannot receive unions at all, so reject them first
    if let Data::Union(data) = &input.data {
        return syn::Error::new_spanned(data.union_token, "Reflect cannot be derived for unions")
            .to_compile_error();
    }

    let receiver = match ReflectReceiver::from_derive_input(input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors(),
    };

    generate_reflect_impl(&receiver).unwrap_or_else(darling::Error::write_errors)
}

/// Generate the Reflect implementation
pub fn generate_reflect_impl(receiver: &ReflectReceiver) -> darling::Result<TokenStream2> {
    let ident = &receiver.ident;
    let mut generics = receiver.generics.clone();

    let body = match &receiver.data {
        ast::Data::Enum(_) => quote! {
            fn kind(&self) -> ::struct_record::Kind {
                ::struct_record::Kind::Enum
            }
        },
        ast::Data::Struct(fields) => {
            // Field types of generic structs must be readable as FieldValue
            if !generics.params.is_empty() {
                let where_clause = generics.make_where_clause();
                for field in fields.iter().filter(|field| field.is_visible()) {
                    let ty = &field.ty;
                    where_clause
                        .predicates
                        .push(parse_quote!(#ty: ::struct_record::FieldValue));
                }
            }
            generate_struct_body(fields)?
        }
    };

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::struct_record::Reflect for #ident #ty_generics #where_clause {
            #body
        }
    })
}

/// Generate the Reflect methods for a struct
fn generate_struct_body(
    fields: &ast::Fields<ReflectFieldReceiver>,
) -> darling::Result<TokenStream2> {
    let mut errors = darling::Error::accumulator();
    let mut field_defs = Vec::new();
    let mut accessors = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let name = field_name(field.ident.as_ref(), index);
        let exported = is_exported(&field.vis);
        let anonymous = field.ident.is_none();
        let tags = errors
            .handle(parse_tags(&field.attrs).map_err(darling::Error::from))
            .unwrap_or_default();
        let tags = tags.iter().map(|(namespace, value)| quote! { (#namespace, #value) });

        field_defs.push(quote! {
            ::struct_record::FieldDef {
                name: #name,
                tags: &[#(#tags),*],
                exported: #exported,
                anonymous: #anonymous,
            }
        });

        if field.is_visible() {
            let member = field_member(field.ident.as_ref(), index);
            accessors.push(quote! {
                #index => ::core::option::Option::Some(
                    &self.#member as &dyn ::struct_record::FieldValue
                )
            });
        }
    }

    errors.finish()?;

    Ok(quote! {
        fn kind(&self) -> ::struct_record::Kind {
            ::struct_record::Kind::Struct
        }

        fn fields(&self) -> &'static [::struct_record::FieldDef] {
            const FIELDS: &[::struct_record::FieldDef] = &[#(#field_defs),*];
            FIELDS
        }

        fn field(
            &self,
            index: usize,
        ) -> ::core::option::Option<&dyn ::struct_record::FieldValue> {
            match index {
                #(#accessors,)*
                _ => ::core::option::Option::None,
            }
        }
    })
}
