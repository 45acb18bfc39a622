//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `EnvBind` derive macro
///
/// Implements `envbind::EnvBind` (the field descriptor table) and
/// `envbind::Bindable` (so the struct can be nested in another record).
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[env("KEY")]`: Bind from the `KEY` environment variable
/// - `#[env("KEY,file")]`: Fall back to the file named by `KEY_FILE`
/// - `#[env(skip)]`: Never bind this field
///
/// Only `pub` (or `pub(...)`) fields are bound; private fields are left out
/// of the table and need not implement `Bindable`.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "EnvBind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "EnvBind only supports structs",
            ));
        }
    };

    // One descriptor per settable field, in declaration order
    let mut descriptors = Vec::new();
    let mut generics = input.generics.clone();
    let bound_field_types = generics.type_params().next().is_some();
    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        if attrs.skip || !attrs::is_settable(field) {
            continue;
        }

        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = ident.unraw().to_string();
        let tag = attrs.tag.unwrap_or_default();

        if bound_field_types {
            let ty = &field.ty;
            generics
                .make_where_clause()
                .predicates
                .push(syn::parse_quote!(#ty: ::envbind::Bindable));
        }

        descriptors.push(quote! {
            ::envbind::Field::new(
                #name,
                #tag,
                ::envbind::Bindable::slot(&mut self.#ident),
            )
        });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envbind::EnvBind for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envbind::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::envbind::Bindable for #struct_name #ty_generics #where_clause {
            fn slot(&mut self) -> ::envbind::Slot<'_> {
                ::envbind::Slot::Record(self)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn expand_to_string(input: DeriveInput) -> String {
        expand(&input).unwrap().to_string()
    }

    #[test]
    fn test_expand_emits_settable_fields_in_order() {
        let output = expand_to_string(parse_quote! {
            struct Config {
                #[env("VAL_INT")]
                pub val_int: i64,
                pub section: Section,
                #[env(skip)]
                pub skipped: u8,
                private: u8,
                #[env("LIST_STR")]
                pub r#type: Vec<String>,
            }
        });

        let val_int = output.find("\"val_int\"").unwrap();
        let section = output.find("\"section\"").unwrap();
        let list = output.find("\"type\" , \"LIST_STR\"").unwrap();
        assert!(val_int < section && section < list);
        assert!(!output.contains("skipped"));
        assert!(!output.contains("private"));
        assert!(output.contains(":: envbind :: Slot :: Record (self)"));
    }

    #[test]
    fn test_expand_bounds_generic_field_types() {
        let output = expand_to_string(parse_quote! {
            struct Wrapper<T> {
                #[env("INNER")]
                pub inner: T,
            }
        });

        assert!(output.contains("where T : :: envbind :: Bindable"));
    }

    #[test]
    fn test_expand_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Mode { Fast }
        };

        let err = expand(&input).unwrap_err();
        assert_eq!(err.to_string(), "EnvBind only supports structs");
    }

    #[test]
    fn test_expand_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Port(pub u16);
        };

        assert!(expand(&input).is_err());
    }

    #[test]
    fn test_expand_propagates_attribute_errors() {
        let input: DeriveInput = parse_quote! {
            struct Config {
                #[env(name = "PORT")]
                pub port: u16,
            }
        };

        assert!(expand(&input).is_err());
    }
}
