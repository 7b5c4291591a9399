use crate::cli::commands::open_shop;
use crate::cli::parser::DamageCommands;
use crate::config::Config;
use crate::core::catalog::CATEGORY_ALL;
use crate::errors::{AppError, AppResult};
use crate::models::NewDamage;
use crate::models::damage::{parse_cost, parse_steps};
use crate::ui::messages::{field, header, info, success, warning};
use crate::utils::formatting::{format_currency, truncate};
use crate::utils::table::Table;

pub fn handle(cmd: &DamageCommands, cfg: &Config) -> AppResult<()> {
    let mut shop = open_shop(cfg)?;
    shop.session.require()?;

    match cmd {
        DamageCommands::List { search, category } => {
            let search = search.as_deref().unwrap_or("");
            let found = shop.search_damages(search, category);

            if found.is_empty() {
                info("No damages match the filter.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "NAME", "CATEGORY", "EST. COST"]);
            for d in &found {
                table.add_row(vec![
                    d.id.clone(),
                    truncate(&d.name, 40),
                    d.category.clone(),
                    format_currency(&cfg.currency_symbol, d.estimated_cost),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
            println!("{} of {} damages", found.len(), shop.damages.len());
        }

        DamageCommands::Categories => {
            for c in shop.categories() {
                if c == CATEGORY_ALL {
                    println!("{} (Semua Kategori)", c);
                } else {
                    println!("{}", c);
                }
            }
        }

        DamageCommands::Show { id } => {
            let d = shop
                .damages
                .get(id)
                .ok_or_else(|| AppError::NotFound(format!("damage '{}'", id)))?;

            header(&d.name);
            field("Category", &d.category, 10);
            field("Video", &d.video_embed_url, 10);
            field(
                "Est. cost",
                format_currency(&cfg.currency_symbol, d.estimated_cost),
                10,
            );
            println!("\n{}\n", d.description);
            println!("Langkah Perbaikan:");
            for (i, step) in d.steps.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, step);
            }
        }

        DamageCommands::Add {
            name,
            category,
            description,
            video,
            step,
            steps,
            cost,
        } => {
            let estimated_cost = parse_cost(cost);
            if estimated_cost < 0.0 {
                return Err(AppError::InvalidAmount(cost.clone()));
            }

            let mut all_steps: Vec<String> = step
                .iter()
                .filter(|s| !s.trim().is_empty())
                .cloned()
                .collect();
            if let Some(text) = steps {
                all_steps.extend(parse_steps(text));
            }
            if all_steps.is_empty() {
                warning("The new guide has no repair steps.");
            }

            let added = shop.add_damage(NewDamage {
                name: name.clone(),
                category: category.clone(),
                description: description.clone(),
                video_url: video.clone(),
                steps: all_steps,
                estimated_cost,
            })?;

            success(format!("Damage {} added ({})", added.id, added.name));
            if !added.video_embed_url.is_empty() {
                field("Video", &added.video_embed_url, 5);
            }
        }
    }

    Ok(())
}
