use anyhow::Result;
use serde::Serialize;
use storefront_core::types::{Category, Product};
use storefront_core::StoreContent;

#[derive(Serialize)]
struct CatalogListing<'a> {
    categories: &'a [Category],
    products: &'a [Product],
}

pub fn catalog(content: &StoreContent, json: bool) -> Result<()> {
    if json {
        let listing = CatalogListing {
            categories: &content.categories,
            products: &content.products,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Categories ({})", content.categories.len());
    for category in &content.categories {
        println!("  {:>3}  {:<28} {}", category.id, category.name, category.image);
    }
    println!();
    println!("Products ({})", content.products.len());
    for product in &content.products {
        println!(
            "  {:>3}  {:<28} {:>8}  {}",
            product.id, product.name, product.price, product.image
        );
    }
    Ok(())
}
