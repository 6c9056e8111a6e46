//! Table definitions for `products` and `product_variants`.
//!
//! The schema is small and fixed, so it is created directly from DDL rather
//! than through a migration history. List-valued columns (`features`,
//! `image_paths`) are JSON text, see `goldtiger_core::text_list`.

use sqlx::{Executor, PgConnection};

use crate::DbPool;

const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id           BIGSERIAL PRIMARY KEY,
    name         VARCHAR(100) NOT NULL,
    category     VARCHAR(50) NOT NULL,
    price        DOUBLE PRECISION NOT NULL CHECK (price >= 0),
    description  TEXT,
    features     TEXT,
    created_at   TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at   TIMESTAMPTZ NOT NULL DEFAULT now(),
    is_featured  BOOLEAN NOT NULL DEFAULT false,
    rating       DOUBLE PRECISION NOT NULL DEFAULT 4.5,
    review_count INTEGER NOT NULL DEFAULT 0 CHECK (review_count >= 0)
);

CREATE OR REPLACE FUNCTION set_updated_at() RETURNS TRIGGER AS $$
BEGIN
    NEW.updated_at = now();
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

DROP TRIGGER IF EXISTS trg_products_updated_at ON products;
CREATE TRIGGER trg_products_updated_at
    BEFORE UPDATE ON products
    FOR EACH ROW EXECUTE FUNCTION set_updated_at();

CREATE TABLE IF NOT EXISTS product_variants (
    id          BIGSERIAL PRIMARY KEY,
    product_id  BIGINT NOT NULL REFERENCES products (id) ON DELETE RESTRICT,
    color       VARCHAR(50) NOT NULL,
    size        VARCHAR(10) NOT NULL,
    stock       INTEGER NOT NULL DEFAULT 0 CHECK (stock >= 0),
    image_paths TEXT,
    sku         VARCHAR(50) NOT NULL,
    CONSTRAINT uq_product_variants_sku UNIQUE (sku),
    CONSTRAINT uq_product_variants_product_color_size UNIQUE (product_id, color, size)
);

CREATE INDEX IF NOT EXISTS idx_product_variants_product_id
    ON product_variants (product_id);
"#;

const DROP_SCHEMA: &str = r#"
DROP TABLE IF EXISTS product_variants;
DROP TABLE IF EXISTS products;
DROP FUNCTION IF EXISTS set_updated_at();
"#;

// An argument-less `&str` runs over the simple query protocol, which accepts
// several statements at once.

/// Create any missing tables, triggers, and indexes. Safe to run repeatedly.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    pool.execute(CREATE_SCHEMA).await?;
    Ok(())
}

/// Create the schema on an open connection (used inside a transaction).
pub async fn create_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    conn.execute(CREATE_SCHEMA).await?;
    Ok(())
}

/// Drop every catalog table. Destroys all data.
pub async fn drop_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    conn.execute(DROP_SCHEMA).await?;
    Ok(())
}
