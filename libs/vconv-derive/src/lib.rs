use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

/// Derive macro for fallback converter declarations.
///
/// Each `#[preferred(dest = D, converter = C)]` attribute generates
/// `impl vconv::Preferred<D> for Self { type Converter = C; }`, which makes
/// `Self` dispatchable to `D` without an explicit `Dispatch` impl.
///
/// # Example
///
/// ```ignore
/// #[derive(Preferred)]
/// #[preferred(dest = vconv::Text, converter = CelsiusText)]
/// pub struct Celsius(f32);
/// ```
///
/// Declaring the same destination twice is a compile error.
#[proc_macro_derive(Preferred, attributes(preferred))]
pub fn derive_preferred(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

struct Association {
    dest: Type,
    converter: Type,
}

fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut associations: Vec<Association> = Vec::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("preferred") {
            continue;
        }

        let mut dest: Option<Type> = None;
        let mut converter: Option<Type> = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("dest") {
                dest = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("converter") {
                converter = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unknown key (expected `dest` or `converter`)"));
            }
            Ok(())
        })?;

        let dest = dest.ok_or_else(|| {
            syn::Error::new_spanned(attr, "missing `dest = ...` in #[preferred(...)]")
        })?;
        let converter = converter.ok_or_else(|| {
            syn::Error::new_spanned(attr, "missing `converter = ...` in #[preferred(...)]")
        })?;

        let key = quote!(#dest).to_string();
        if associations.iter().any(|a| {
            let seen = &a.dest;
            quote!(#seen).to_string() == key
        }) {
            return Err(syn::Error::new_spanned(
                &dest,
                format!(
                    "ambiguous preferred converter: destination `{key}` declared more than once"
                ),
            ));
        }

        associations.push(Association { dest, converter });
    }

    if associations.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            "missing #[preferred(dest = ..., converter = ...)]",
        ));
    }

    let impls = associations.iter().map(|Association { dest, converter }| {
        quote! {
            impl #impl_generics ::vconv::dispatch::Preferred<#dest>
                for #name #ty_generics #where_clause
            {
                type Converter = #converter;
            }
        }
    });

    Ok(quote! { #(#impls)* })
}
