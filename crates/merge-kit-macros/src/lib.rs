//! Proc macros for `merge-kit`.
//!
//! Provides **`#[derive(Merge)]`** — derives a fieldwise semilattice merge
//! for a struct by delegating to the `Merge` implementation of every field.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index};

/// Derives `merge_kit::Merge` for a struct.
///
/// The generated implementation merges each field with the corresponding
/// field of `other` and reports a change if **any** field changed. Every
/// field is merged even after an earlier one reports a change, so no field
/// is left behind its least upper bound.
///
/// Every field type must itself implement `Merge`; the derive emits a
/// `where` bound per field type, so generic structs work as long as their
/// instantiated fields are mergeable. Unit structs merge trivially (nothing
/// to change). Enums and unions are rejected: they have no canonical join,
/// which is exactly what a hand-written `Merge` impl is for.
///
/// # Example
///
/// ```ignore
/// use merge_kit::prelude::*;
///
/// #[derive(Debug, Default, Clone, PartialEq, Merge)]
/// struct Session {
///     requests: u64,
///     last_page: String,
/// }
///
/// let mut a = Session { requests: 4, last_page: "about".into() };
/// let b = Session { requests: 9, last_page: "".into() };
/// assert!(a.merge(&b));
/// assert_eq!(a.requests, 9);
/// assert_eq!(a.last_page, "about");
/// ```
#[proc_macro_derive(Merge)]
pub fn derive_merge(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return syn::Error::new_spanned(
                name,
                "`Merge` cannot be derived for enums; implement `Merge` by \
                 hand to give the variants join semantics",
            )
            .to_compile_error()
            .into();
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(name, "`Merge` cannot be derived for unions")
                .to_compile_error()
                .into();
        }
    };

    let merges: Vec<proc_macro2::TokenStream> = match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .map(|field| {
                let ident = field.ident.as_ref().expect("named field has an ident");
                quote! {
                    changed |= ::merge_kit::Merge::merge(&mut self.#ident, &other.#ident);
                }
            })
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| {
                let index = Index::from(i);
                quote! {
                    changed |= ::merge_kit::Merge::merge(&mut self.#index, &other.#index);
                }
            })
            .collect(),
        Fields::Unit => Vec::new(),
    };

    // Each field type must be mergeable. Bound the field types themselves
    // rather than the type parameters: a field like `BTreeMap<K, V>` needs
    // `BTreeMap<K, V>: Merge`, not `K: Merge`.
    let mut generics = input.generics.clone();
    {
        let where_clause = generics.make_where_clause();
        let mut seen: Vec<String> = Vec::new();
        for field in fields.iter() {
            let ty = &field.ty;
            let key = quote!(#ty).to_string();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: ::merge_kit::Merge));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = if merges.is_empty() {
        quote! {
            let _ = other;
            false
        }
    } else {
        quote! {
            let mut changed = false;
            #(#merges)*
            changed
        }
    };

    let expanded = quote! {
        #[automatically_derived]
        impl #impl_generics ::merge_kit::Merge for #name #ty_generics #where_clause {
            fn merge(&mut self, other: &Self) -> bool {
                #body
            }
        }
    };

    expanded.into()
}
