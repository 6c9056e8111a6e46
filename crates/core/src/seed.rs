//! Fixed demo catalog and the seed plan built from it.
//!
//! The plan is computed entirely up front (products, their variants, image
//! paths, and SKUs) so the store can apply it in a single unit of work. Only
//! the product ids are left for the store to fill in.

/// First SKU number handed out during a seeding run.
pub const SKU_START: u32 = 1000;

/// Prefix for every seeded SKU.
pub const SKU_PREFIX: &str = "GT";

/// Stock given to every seeded variant.
pub const SEED_STOCK: i32 = 25;

/// Root under which variant images live.
pub const ASSET_ROOT: &str = "/src/assets/shoes";

/// Number of images generated per variant.
pub const IMAGES_PER_VARIANT: u32 = 6;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The product list and the color/size catalog are out of sync.
    #[error("No color/size catalog entry for product '{0}'")]
    UnknownCatalogEntry(String),
}

/// A product as inserted by the seeder.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub features: Vec<String>,
    pub is_featured: bool,
    pub rating: f64,
    pub review_count: i32,
}

/// A variant as inserted by the seeder, minus its product id.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedVariant {
    pub color: String,
    pub size: String,
    pub stock: i32,
    pub image_paths: Vec<String>,
    pub sku: String,
}

#[derive(Debug, Clone)]
pub struct SeedEntry {
    pub product: SeedProduct,
    pub variants: Vec<SeedVariant>,
}

/// Everything a seeding run inserts, in insertion order.
#[derive(Debug, Clone)]
pub struct SeedPlan {
    pub entries: Vec<SeedEntry>,
}

impl SeedPlan {
    pub fn product_count(&self) -> usize {
        self.entries.len()
    }

    pub fn variant_count(&self) -> usize {
        self.entries.iter().map(|e| e.variants.len()).sum()
    }
}

/// One color of a product and the sizes stocked in it.
#[derive(Debug, Clone, Copy)]
pub struct ColorSizes {
    pub color: &'static str,
    pub sizes: &'static [&'static str],
}

const PHOENIX_COLORS: &[ColorSizes] = &[
    ColorSizes {
        color: "gold",
        sizes: &["US 8", "US 9", "US 10", "US 11", "US 12", "US 13"],
    },
    ColorSizes {
        color: "black",
        sizes: &["US 7", "US 8", "US 9", "US 10", "US 11"],
    },
    ColorSizes {
        color: "red",
        sizes: &["US 8", "US 9", "US 10", "US 11", "US 12"],
    },
];

const DRAGON_COLORS: &[ColorSizes] = &[
    ColorSizes {
        color: "emerald",
        sizes: &["US 7", "US 8", "US 9", "US 10", "US 11"],
    },
    ColorSizes {
        color: "midnight",
        sizes: &["US 8", "US 9", "US 10", "US 11", "US 12"],
    },
    ColorSizes {
        color: "royal",
        sizes: &["US 7", "US 8", "US 9", "US 10"],
    },
];

const TIGER_COLORS: &[ColorSizes] = &[
    ColorSizes {
        color: "sunset",
        sizes: &["US 8", "US 9", "US 10", "US 11", "US 12"],
    },
    ColorSizes {
        color: "arctic",
        sizes: &["US 7", "US 8", "US 9", "US 10", "US 11"],
    },
    ColorSizes {
        color: "ocean",
        sizes: &["US 8", "US 9", "US 10", "US 11"],
    },
];

/// Color/size catalog keyed by product name.
pub fn color_catalog(product_name: &str) -> Option<&'static [ColorSizes]> {
    match product_name {
        "PHOENIX ASCENDANT PRO" => Some(PHOENIX_COLORS),
        "DRAGON EMPEROR ELITE" => Some(DRAGON_COLORS),
        "TIGER SPIRIT ULTRA" => Some(TIGER_COLORS),
        _ => None,
    }
}

/// The three demo products.
pub fn fixture_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct {
            name: "PHOENIX ASCENDANT PRO".into(),
            category: "basketball".into(),
            price: 229.99,
            description: "Limited edition celestial basketball shoes with gold thread \
                          embroidery and advanced cushioning technology."
                .into(),
            features: strings(&[
                "Phoenix Feather Cushioning Pro",
                "24K Gold Thread Embroidery",
                "Cloud-Step Max Cushioning",
                "Carbon Fiber Stability Plate",
                "Anti-Gravity Traction System",
            ]),
            is_featured: true,
            rating: 4.8,
            review_count: 127,
        },
        SeedProduct {
            name: "DRAGON EMPEROR ELITE".into(),
            category: "lifestyle".into(),
            price: 199.99,
            description: "Imperial craftsmanship meets modern luxury with genuine leather \
                          and dragon scale texture."
                .into(),
            features: strings(&[
                "Genuine Italian Leather",
                "Dragon Scale 3D Texture",
                "Royal Silk Lining",
                "Imperial Gold Accents",
                "Comfort-Fit Memory Foam",
            ]),
            is_featured: true,
            rating: 4.7,
            review_count: 89,
        },
        SeedProduct {
            name: "TIGER SPIRIT ULTRA".into(),
            category: "running".into(),
            price: 189.99,
            description: "High-performance running shoes with tiger stripe dynamics and \
                          spirit animal cushioning."
                .into(),
            features: strings(&[
                "Tiger Stripe Dynamic Traction",
                "Spirit Animal Cushioning",
                "Warrior Agility Flex System",
                "Breathable Mesh Upper",
                "Energy Return Midsole",
            ]),
            is_featured: false,
            rating: 4.6,
            review_count: 156,
        },
    ]
}

/// Directory-safe form of a product name: lowercase, spaces to underscores.
///
/// ```
/// use goldtiger_core::seed::slugify;
///
/// assert_eq!(slugify("TIGER SPIRIT ULTRA"), "tiger_spirit_ultra");
/// ```
pub fn slugify(product_name: &str) -> String {
    product_name.to_lowercase().replace(' ', "_")
}

/// The image paths for one product color: `img01.jpg` through `img06.jpg`.
pub fn image_paths(product_name: &str, color: &str) -> Vec<String> {
    let slug = slugify(product_name);
    (1..=IMAGES_PER_VARIANT)
        .map(|i| format!("{ASSET_ROOT}/{slug}/{color}/img{i:02}.jpg"))
        .collect()
}

/// SKU for the given sequence number, e.g. `GT1000`.
pub fn format_sku(number: u32) -> String {
    format!("{SKU_PREFIX}{number}")
}

/// Build the seed plan for the fixed demo catalog.
pub fn build_plan() -> Result<SeedPlan, SeedError> {
    build_plan_for(fixture_products())
}

/// Build a seed plan for `products`, expanding each through the color/size
/// catalog.
///
/// SKUs are numbered sequentially across the whole run, not per product.
/// A product without a catalog entry aborts the whole plan.
pub fn build_plan_for(products: Vec<SeedProduct>) -> Result<SeedPlan, SeedError> {
    let mut next_sku = SKU_START;
    let mut entries = Vec::with_capacity(products.len());

    for product in products {
        let colors = color_catalog(&product.name)
            .ok_or_else(|| SeedError::UnknownCatalogEntry(product.name.clone()))?;

        let mut variants = Vec::new();
        for color_sizes in colors {
            let paths = image_paths(&product.name, color_sizes.color);
            for size in color_sizes.sizes {
                variants.push(SeedVariant {
                    color: color_sizes.color.to_string(),
                    size: (*size).to_string(),
                    stock: SEED_STOCK,
                    image_paths: paths.clone(),
                    sku: format_sku(next_sku),
                });
                next_sku += 1;
            }
        }

        entries.push(SeedEntry { product, variants });
    }

    Ok(SeedPlan { entries })
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
