use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;

use grocer_cart::{CartSummary, Selection};
use grocer_cli::config::Config;
use grocer_cli::{load_catalog, money, render};
use grocer_products::{Catalog, Restriction, restricted_names};
use grocer_storefront::{
    BrowseFilterSet, CategoryFilter, OrganicPreference, PreferenceSet, StorefrontView,
};

/// grocer - grocery catalog filter and cart calculator
#[derive(Parser)]
#[command(name = "grocer")]
#[command(about = "Filter a grocery catalog by dietary preferences and total up a cart", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog file (overrides config file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products matching preferences and browse filters, cheapest first
    Products {
        #[command(flatten)]
        prefs: PreferenceArgs,

        /// Case-insensitive name search
        #[arg(long, default_value = "")]
        search: String,

        /// Only this category ("All" for every category)
        #[arg(long)]
        category: Option<String>,

        /// Inclusive price ceiling
        #[arg(long)]
        max_price: Option<f64>,

        /// Group results by category
        #[arg(long)]
        group: bool,
    },
    /// List the categories available under the given preferences
    Categories {
        #[command(flatten)]
        prefs: PreferenceArgs,
    },
    /// Summarize a cart and compute its total
    Cart {
        /// Selected product names
        names: Vec<String>,
    },
    /// Show every attribute of one product
    Show {
        /// Product name (exact match)
        name: String,
    },
    /// List product names satisfying a single restriction
    Restrict {
        #[arg(value_enum)]
        restriction: RestrictionArg,
    },
}

#[derive(Args)]
struct PreferenceArgs {
    #[arg(long)]
    vegetarian: bool,

    #[arg(long)]
    gluten_free: bool,

    #[arg(long)]
    lactose_free: bool,

    #[arg(long)]
    diabetic: bool,

    #[arg(long, value_enum, default_value_t = OrganicArg::Any)]
    organic: OrganicArg,
}

impl From<&PreferenceArgs> for PreferenceSet {
    fn from(args: &PreferenceArgs) -> Self {
        PreferenceSet {
            vegetarian: args.vegetarian,
            gluten_intolerance: args.gluten_free,
            lactose_intolerance: args.lactose_free,
            diabetic_friendly: args.diabetic,
            organic: match args.organic {
                OrganicArg::Any => OrganicPreference::Any,
                OrganicArg::Organic => OrganicPreference::Organic,
                OrganicArg::NonOrganic => OrganicPreference::NonOrganic,
            },
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OrganicArg {
    Any,
    Organic,
    NonOrganic,
}

#[derive(Clone, Copy, ValueEnum)]
enum RestrictionArg {
    Vegetarian,
    GlutenFree,
    LactoseIntolerant,
    Diabetic,
    None,
}

impl From<RestrictionArg> for Restriction {
    fn from(arg: RestrictionArg) -> Self {
        match arg {
            RestrictionArg::Vegetarian => Restriction::Vegetarian,
            RestrictionArg::GlutenFree => Restriction::GlutenFree,
            RestrictionArg::LactoseIntolerant => Restriction::LactoseIntolerant,
            RestrictionArg::Diabetic => Restriction::Diabetic,
            RestrictionArg::None => Restriction::None,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog.clone() {
        config.catalog.path = Some(path);
    }
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    grocer_observability::init_with(&config.logging);

    let catalog = load_catalog(&config.catalog)?;
    let output = run(&cli, &catalog, &config)?;
    print!("{output}");

    Ok(())
}

#[tracing::instrument(skip_all, fields(products = catalog.len()))]
fn run(cli: &Cli, catalog: &Catalog, config: &Config) -> Result<String> {
    let display = &config.display;

    let output = match &cli.command {
        Commands::Products {
            prefs,
            search,
            category,
            max_price,
            group,
        } => {
            let browse = BrowseFilterSet {
                search: search.clone(),
                category: CategoryFilter::from_selector(category.as_deref()),
                max_price: *max_price,
                group_by_category: *group,
            };
            let view = StorefrontView::build(catalog, &PreferenceSet::from(prefs), &browse);
            if cli.json {
                serde_json::to_string_pretty(&view)? + "\n"
            } else {
                render::storefront(&view, display)
            }
        }
        Commands::Categories { prefs } => {
            let view = StorefrontView::build(
                catalog,
                &PreferenceSet::from(prefs),
                &BrowseFilterSet::default(),
            );
            if cli.json {
                serde_json::to_string_pretty(view.categories())? + "\n"
            } else {
                render::categories(view.categories())
            }
        }
        Commands::Cart { names } => {
            let selection = Selection::new(names.clone());
            let summary = CartSummary::build(catalog, &selection);
            if cli.json {
                let doc = json!({
                    "lines": summary.lines(),
                    "total": summary.total(),
                    "currency": display.currency_code,
                    "formatted": money::format_price(summary.total(), display),
                });
                serde_json::to_string_pretty(&doc)? + "\n"
            } else {
                render::cart(&summary, display)
            }
        }
        Commands::Show { name } => {
            let product = catalog.require(name)?;
            if cli.json {
                serde_json::to_string_pretty(product)? + "\n"
            } else {
                render::product_detail(product, display)
            }
        }
        Commands::Restrict { restriction } => {
            let names = restricted_names(catalog, (*restriction).into());
            if cli.json {
                serde_json::to_string_pretty(&names)? + "\n"
            } else {
                names.iter().map(|n| format!("{n}\n")).collect()
            }
        }
    };

    Ok(output)
}
