use std::{error::Error, path::Path, process::exit};

use clap::Parser;
use rusqlite::Connection;

use recettes_rs::{NewRecipe, create_category, create_recipe, initialize_db};

/// A utility for creating a test database for the REST API server of recettes_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let mut conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    let transaction = conn.transaction()?;

    println!("Creating test categories...");
    let dessert = create_category("Dessert", &transaction)?;
    create_category("Main Course", &transaction)?;
    create_category("Appetizer", &transaction)?;

    println!("Creating test recipes...");
    for (titre, ingredients) in [
        ("Tiramisu", "Mascarpone, Cafe, Biscuits"),
        ("Mousse au chocolat", "Chocolat, Oeufs, Creme"),
    ] {
        create_recipe(
            NewRecipe {
                titre: titre.to_owned(),
                ingredients: ingredients.to_owned(),
                recipe_type: "Dessert".to_owned(),
                categorie_id: dessert.id,
            },
            &transaction,
        )?;
    }

    transaction.commit()?;

    println!("Success!");

    Ok(())
}
