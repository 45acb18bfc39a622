//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding attributes from struct fields
//! during macro expansion.

use syn::parse::ParseStream;
use syn::{Field, Ident, LitStr, Visibility};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw tag string, `KEY[,option]*`.
    ///
    /// Kept verbatim: the tag is parsed at bind time, so an empty or
    /// malformed key simply leaves the field unbound.
    pub tag: Option<String>,

    /// Exclude the field from binding (`#[env(skip)]`).
    pub skip: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are ignored so other macros can process
    /// them.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_args_with(|input: ParseStream| {
                // env("KEY,file")
                if input.peek(LitStr) {
                    let lit: LitStr = input.parse()?;
                    if attrs.tag.is_some() {
                        return Err(syn::Error::new(lit.span(), "duplicate env tag"));
                    }
                    attrs.tag = Some(lit.value());
                    return Ok(());
                }

                // env(skip)
                let ident: Ident = input.parse()?;
                if ident == "skip" {
                    attrs.skip = true;
                    return Ok(());
                }

                Err(syn::Error::new(
                    ident.span(),
                    "unsupported env attribute, expected a tag string like \"KEY,file\" or `skip`",
                ))
            })?;
        }

        Ok(attrs)
    }
}

/// Only fields visible outside the struct's module can be set.
pub fn is_settable(field: &Field) -> bool {
    !matches!(field.vis, Visibility::Inherited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_tag() {
        let field: Field = parse_quote! {
            #[env("VAL_INT")]
            pub val_int: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some("VAL_INT".to_string()));
        assert!(!attrs.skip);
    }

    #[test]
    fn test_parse_tag_with_options_kept_verbatim() {
        let field: Field = parse_quote! {
            #[env(" MYSQL_PASSWORD , file")]
            pub password: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, Some(" MYSQL_PASSWORD , file".to_string()));
    }

    #[test]
    fn test_parse_skip() {
        let field: Field = parse_quote! {
            #[env(skip)]
            pub started: std::time::Instant
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.skip);
        assert_eq!(attrs.tag, None);
    }

    #[test]
    fn test_untagged_field() {
        let field: Field = parse_quote! {
            #[serde(default)]
            pub section: Section
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.tag, None);
        assert!(!attrs.skip);
    }

    #[test]
    fn test_reject_unknown_ident() {
        let field: Field = parse_quote! {
            #[env(from_file)]
            pub api_key: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_duplicate_tag() {
        let field: Field = parse_quote! {
            #[env("PORT")]
            #[env("HTTP_PORT")]
            pub port: u16
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_settable_follows_visibility() {
        let public: Field = parse_quote! { pub a: u8 };
        let crate_visible: Field = parse_quote! { pub(crate) b: u8 };
        let private: Field = parse_quote! { c: u8 };

        assert!(is_settable(&public));
        assert!(is_settable(&crate_visible));
        assert!(!is_settable(&private));
    }
}
