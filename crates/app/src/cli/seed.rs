//! Demo catalog seeding.

use bakeshop_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService, ProductsService, ProductsServiceError,
        models::{Category, CategoryUuid, NewCategory, NewProduct, ProductUuid},
    },
};
use clap::Args;

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

struct SeedProduct {
    title: &'static str,
    description: &'static str,
    sku: &'static str,
    price: u64,
    sale_price: Option<u64>,
    stock_quantity: u32,
    is_featured: bool,
    category: &'static str,
}

const SWEET: &str = "Sweet";
const SAVOURY: &str = "Savoury";

/// The demo cupcake catalog.
const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        title: "Chocolate Cupcake",
        description: "Chocolate cupcake with ganache frosting and sprinkles.",
        sku: "784571",
        price: 15_00,
        sale_price: Some(12_00),
        stock_quantity: 20,
        is_featured: true,
        category: SWEET,
    },
    SeedProduct {
        title: "Vanilla Cupcake",
        description: "Vanilla cupcake topped with red berries and sprinkles.",
        sku: "VAAN7845",
        price: 14_00,
        sale_price: Some(2_00),
        stock_quantity: 15,
        is_featured: true,
        category: SAVOURY,
    },
    SeedProduct {
        title: "Chocolate & Caramel Cupcake",
        description: "Chocolate cupcake filled with salted caramel.",
        sku: "CHOC7845",
        price: 16_00,
        sale_price: None,
        stock_quantity: 10,
        is_featured: false,
        category: SWEET,
    },
    SeedProduct {
        title: "Lemon Cupcake",
        description: "Lemon cupcake with whipped cream frosting.",
        sku: "LIMON784",
        price: 13_00,
        sale_price: Some(10_00),
        stock_quantity: 18,
        is_featured: true,
        category: SWEET,
    },
    SeedProduct {
        title: "Strawberry Cupcake",
        description: "Strawberry cupcake with meringue frosting.",
        sku: "STRAW7845",
        price: 17_00,
        sale_price: None,
        stock_quantity: 12,
        is_featured: true,
        category: SWEET,
    },
    SeedProduct {
        title: "Coffee Cupcake",
        description: "Coffee cupcake with mascarpone cream frosting.",
        sku: "COFF7845",
        price: 18_00,
        sale_price: Some(15_00),
        stock_quantity: 10,
        is_featured: false,
        category: SWEET,
    },
    SeedProduct {
        title: "Carrot Cupcake",
        description: "Carrot cupcake with chocolate frosting.",
        sku: "CAROT784",
        price: 15_00,
        sale_price: Some(12_00),
        stock_quantity: 20,
        is_featured: true,
        category: SWEET,
    },
    SeedProduct {
        title: "Pumpkin Cupcake",
        description: "Pumpkin cupcake with cream cheese frosting.",
        sku: "PUMK7845",
        price: 19_00,
        sale_price: None,
        stock_quantity: 14,
        is_featured: false,
        category: SAVOURY,
    },
    SeedProduct {
        title: "Coconut Cupcake",
        description: "Coconut cupcake with marshmallow frosting.",
        sku: "COCO7845",
        price: 16_00,
        sale_price: Some(14_00),
        stock_quantity: 17,
        is_featured: true,
        category: SWEET,
    },
];

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let products = PgProductsService::new(Db::new(pool));

    let sweet = get_or_create_category(&products, SWEET).await?;
    let savoury = get_or_create_category(&products, SAVOURY).await?;

    let mut created = 0;

    for seed in CATALOG {
        let category = if seed.category == SAVOURY {
            savoury
        } else {
            sweet
        };

        let result = products
            .create_product(NewProduct {
                uuid: ProductUuid::new(),
                category_uuid: Some(category),
                title: seed.title.to_string(),
                description: seed.description.to_string(),
                sku: seed.sku.to_string(),
                price: seed.price,
                on_sale: seed.sale_price.is_some(),
                sale_price: seed.sale_price,
                stock_quantity: seed.stock_quantity,
                is_featured: seed.is_featured,
            })
            .await;

        match result {
            Ok(product) => {
                created += 1;
                println!("seeded {} ({})", product.title, product.sku);
            }
            // Re-running the seed skips products already present.
            Err(ProductsServiceError::AlreadyExists) => {
                println!("skipped {} (sku {} exists)", seed.title, seed.sku);
            }
            Err(error) => {
                return Err(format!("failed to seed {}: {error}", seed.title));
            }
        }
    }

    println!("seeded {created} of {} products", CATALOG.len());

    Ok(())
}

async fn get_or_create_category(
    products: &PgProductsService,
    name: &str,
) -> Result<CategoryUuid, String> {
    let existing = products
        .list_categories()
        .await
        .map_err(|error| format!("failed to list categories: {error}"))?;

    if let Some(category) = existing.iter().find(|c| c.name == name) {
        return Ok(category.uuid);
    }

    let created: Category = products
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: name.to_string(),
        })
        .await
        .map_err(|error| format!("failed to create category {name}: {error}"))?;

    Ok(created.uuid)
}
