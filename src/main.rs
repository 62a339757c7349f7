use clap::Parser;
use log::debug;
use std::path::PathBuf;

use petits_plats::{load_recipes, HtmlRenderer, Session, Settings, TagCategory};

#[derive(Parser, Debug)]
#[command(name = "petits-plats")]
#[command(about = "Search and filter the Les Petits Plats recipes", long_about = None)]
struct Cli {
    /// JSON recipe file (defaults to the bundled catalogue)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Free-text search; ignored below three characters
    #[arg(short, long, default_value = "")]
    query: String,

    /// Required ingredient (repeatable, all must match)
    #[arg(short, long = "ingredient")]
    ingredients: Vec<String>,

    /// Accepted appliance (repeatable, any may match)
    #[arg(short, long = "appliance")]
    appliances: Vec<String>,

    /// Required ustensil (repeatable, all must match)
    #[arg(short, long = "ustensil")]
    ustensils: Vec<String>,

    /// Print the rendered HTML instead of recipe names
    #[arg(long)]
    html: bool,

    /// Also print the remaining dropdown values
    #[arg(long)]
    filters: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::load()?;
    debug!("{:?}", settings);
    let recipes = match &cli.data {
        Some(path) => load_recipes(path)?,
        None => settings.recipes()?,
    };

    let renderer = HtmlRenderer::new(settings.images_dir.clone());
    let mut builder = Session::builder()
        .recipes(recipes)
        .query(cli.query)
        .listener(renderer.clone());
    for (category, values) in [
        (TagCategory::Ingredients, cli.ingredients),
        (TagCategory::Appliances, cli.appliances),
        (TagCategory::Ustensils, cli.ustensils),
    ] {
        for value in values {
            builder = builder.tag(category, value);
        }
    }
    let mut session = builder.build()?;
    session.refresh();

    let page = renderer.page();
    if cli.html {
        println!("{}", page.to_html());
    } else {
        println!("{}", page.count_label);
        for recipe in session.visible() {
            println!("  {} ({} min, {})", recipe.name, recipe.time, recipe.appliance);
        }
    }

    if cli.filters {
        let lists = session.filter_lists();
        for category in TagCategory::ALL {
            println!("{}: {}", category, lists.get(category).join(", "));
        }
    }

    Ok(())
}
