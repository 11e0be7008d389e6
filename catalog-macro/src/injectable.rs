use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_injectable_impl(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn generate_injectable_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "#[derive(Injectable)] only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "#[derive(Injectable)] can only be applied to structs",
            ))
        }
    };

    let mut field_injections = Vec::with_capacity(fields.len());
    for field in fields {
        let field_name = &field.ident;
        let inner = arc_inner_type(&field.ty).ok_or_else(|| {
            syn::Error::new_spanned(&field.ty, "injected fields must be Arc<T> or Arc<dyn Trait>")
        })?;

        // syn parses `dyn Trait` as a TraitObject; those go through the trait bindings.
        let resolve_method = match inner {
            Type::TraitObject(_) => quote!(resolve_trait),
            _ => quote!(resolve),
        };

        field_injections.push(quote! {
            #field_name: container.#resolve_method::<#inner>()?
        });
    }

    Ok(quote! {
        impl #impl_generics ::catalog::Injectable for #struct_name #ty_generics #where_clause {
            fn inject(
                container: &::catalog::Container
            ) -> ::catalog::Result<Self> {
                Ok(Self {
                    #(#field_injections),*
                })
            }
        }
    })
}

/// Extract `T` from `Arc<T>` (also `std::sync::Arc<T>`)
fn arc_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Arc" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(inner) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}
