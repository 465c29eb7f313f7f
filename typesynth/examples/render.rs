//! Renders the type declarations of a small design for the default package and for the
//! `v1` version package.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example render
//! ```

use tracing_subscriber::EnvFilter;
use typesynth::prelude::*;

fn build_design() -> Result<Design, DesignError> {
    let mut design = Design::new("cellar");

    let account = design.add_type(
        NamedType::user(
            "account",
            Object::new()
                .field("id", Attribute::new(Primitive::Integer).describe("ID of account"))
                .field("name", Primitive::String)
                .field("created_at", Primitive::DateTime),
        )
        .with_required(["id", "name"])
        .describe("Account owning bottles"),
    )?;

    design.add_type(
        NamedType::media(
            "bottle",
            "application/vnd.bottle+json",
            Object::new()
                .field("account", DataType::named(&account))
                .field("name", Attribute::new(Primitive::String).required())
                .field(
                    "rating",
                    Attribute::new(Primitive::Integer)
                        .forced_pointer()
                        .describe("Rating from 1 to 5"),
                )
                .field("tags", DataType::array(Primitive::String))
                .field(
                    "reviews",
                    DataType::map(
                        Primitive::String,
                        Object::new().field("stars", Primitive::Number),
                    ),
                ),
        )
        .with_versions(["1.0"]),
    )?;

    Ok(design)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let design = build_design()?;
    validate_design(&design)?;

    let default_package = TypeGenerator::new(&design, RenderOptions::new().json_tags(true));
    println!("package app\n\n{}", default_package.generate()?);

    let version_package = TypeGenerator::new(
        &design,
        RenderOptions::new().for_version("1.0", "app").json_tags(true),
    );
    println!("package v1\n\n{}", version_package.generate()?);

    let counter = TempCounter::new();
    tracing::info!(first = %counter.tempvar(), second = %counter.tempvar(), "temporaries");

    Ok(())
}
