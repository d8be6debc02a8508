//! Procedural macros for the aoc-solver framework

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::ParseStream;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive `Solver` by dispatching each part number to `PartSolver<N>`.
///
/// # Attributes
///
/// - `max_parts`: Required. Parts `1..=max_parts` must each have a
///   `PartSolver<N>` implementation.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day9;
///
/// // expands to roughly:
/// impl ::aoc_solver::Solver for Day9 {
///     const PARTS: u8 = 2;
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => <Self as ::aoc_solver::PartSolver<1>>::solve(shared),
///             2 => <Self as ::aoc_solver::PartSolver<2>>::solve(shared),
///             _ => Err(::aoc_solver::SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Some(attr) = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
    else {
        return syn::Error::new_spanned(
            name,
            "AocSolver derive requires #[aoc_solver(max_parts = N)]",
        )
        .to_compile_error()
        .into();
    };

    let mut max_parts: Option<u8> = None;
    let parsed = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver attribute, expected `max_parts`"))
        }
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let max_parts = match max_parts {
        Some(n) if n >= 1 => n,
        _ => {
            return syn::Error::new_spanned(attr, "max_parts must be at least 1")
                .to_compile_error()
                .into();
        }
    };

    let arms: Vec<proc_macro2::TokenStream> = (1..=max_parts)
        .map(|n| {
            quote! {
                #n => <Self as ::aoc_solver::PartSolver<#n>>::solve(shared),
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Submit a solver to the plugin inventory so runners can discover it.
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2021)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. String labels for filtering (e.g., ["grid", "graph"])
///
/// The type must implement `Solver`; otherwise the generated bound check
/// fails with `the trait bound YourSolver: Solver is not satisfied`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2021, day = 12, tags = ["graph"])]
/// pub struct Day12;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let Some(aoc_attr) = input.attrs.iter().find(|attr| attr.path().is_ident("aoc")) else {
        return syn::Error::new_spanned(name, "AutoRegisterSolver requires #[aoc(...)]")
            .to_compile_error()
            .into();
    };

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    let parsed = aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: syn::LitInt = meta.value()?.parse()?;
            day = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("tags") {
            tags = parse_tags(meta.value()?)?;
        } else {
            return Err(meta.error("unsupported aoc attribute, expected year, day or tags"));
        }
        Ok(())
    });
    if let Err(e) = parsed {
        return e.to_compile_error().into();
    }

    let (Some(year), Some(day)) = (year, day) else {
        return syn::Error::new_spanned(aoc_attr, "#[aoc(...)] needs both `year` and `day`")
            .to_compile_error()
            .into();
    };

    let tag_strs = tags.iter().map(String::as_str);

    let expanded = quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tag_strs),*],
            }
        }
    };

    TokenStream::from(expanded)
}

/// `["a", "b"]`, trailing comma allowed. Anything but a string literal is an
/// error on that element.
fn parse_tags(input: ParseStream) -> syn::Result<Vec<String>> {
    let content;
    syn::bracketed!(content in input);

    let mut tags = Vec::new();
    while !content.is_empty() {
        match content.parse::<Lit>()? {
            Lit::Str(lit_str) => tags.push(lit_str.value()),
            other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
        }
        if !content.is_empty() {
            content.parse::<syn::Token![,]>()?;
        }
    }
    Ok(tags)
}
