#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derive Display based on the impl StaticName trait
///
/// The deriving crate must have a `StaticName` trait in scope with a
/// `fn name(&self) -> &'static str` method.
#[proc_macro_derive(Display)]
pub fn derive_display_trait(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        const _: () = {
            fn assert_static_name<T: StaticName + ?Sized>() {}
            fn assert_traits #impl_generics () #where_clause {
                assert_static_name::<#name #ty_generics>();
            }
        };

        impl #impl_generics ::std::fmt::Display for #name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive Serde's Serialize trait based on Display
///
/// Enabled through the `serde` feature
#[cfg(any(feature = "serde", doc))]
#[proc_macro_derive(SerializeFromDisplay)]
pub fn derive_serialize_from_display_trait(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        const _: () = {
            fn assert_display<T: ::std::fmt::Display + ?Sized>() {}
            fn assert_traits #impl_generics () #where_clause {
                assert_display::<#name #ty_generics>();
            }
        };

        impl #impl_generics serde::ser::Serialize for #name #ty_generics #where_clause {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }
    };

    TokenStream::from(expanded)
}
